// ==========================================
// 纪念日名单引擎 - 核心库
// ==========================================
// 职责: 按纪念日字段（生日/入职日）筛选、分组、排序人员名单
// 技术栈: Rust + SQLite (配置存储)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 组件配置
pub mod config;

// 目录层 - 人员档案拉取
pub mod directory;

// 导入层 - 本地名单文件
pub mod importer;

// 展示层 - 视图组装
pub mod presenter;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{BucketKey, DateOrder, GroupingMode, ProfileRecord, RelativeBucket, UserStatus};

// 配置
pub use config::{CelebrationConfig, ConfigManager, WidgetConfig};

// 引擎
pub use engine::{BucketGroup, CelebrationEngine, CelebrationView, EngineError, Roster};

// 目录
pub use directory::{fetch_all_profiles, DirectoryClient, InMemoryDirectory};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "celebration-roster";
