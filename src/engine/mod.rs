// ==========================================
// 纪念日名单引擎 - 引擎层
// ==========================================
// 职责: 日期解析、准入、分组、排序、截断
// 红线: 引擎不做 I/O，所有剔除都带原因
// ==========================================

pub mod classifier;
pub mod date_core;
pub mod eligibility;
pub mod error;
pub mod labels;
pub mod limiter;
pub mod orchestrator;
pub mod ordering;

// 重导出核心引擎
pub use classifier::{BucketClassifier, Buckets};
pub use date_core::{DateComparison, DateCore, ParsedDate};
pub use eligibility::{EligibilityFilter, EligibleRecord};
pub use error::{DateParseError, EngineError, EngineResult, ExclusionReason};
pub use labels::BucketLabeler;
pub use limiter::Limiter;
pub use orchestrator::{BucketGroup, CelebrationEngine, CelebrationView, Roster};
pub use ordering::{BucketOrderer, RecordOrderer};
