// ==========================================
// 纪念日名单引擎 - 领域模型层
// ==========================================
// 职责: 人员档案与分组相关的值类型
// 红线: 不含数据访问逻辑，不含引擎逻辑
// ==========================================

pub mod profile;
pub mod types;

// 重导出核心类型
pub use profile::{Avatar, AvatarImage, ProfileRecord};
pub use types::{BucketKey, DateOrder, GroupingMode, RelativeBucket, UserStatus};
