// ==========================================
// 纪念日名单引擎 - 配置层
// ==========================================
// 职责: 宿主配置的归一化、校验与持久化读取
// 存储: config_kv 表 (按组件实例划分 scope)
// ==========================================

pub mod celebration_config;
pub mod config_manager;
pub mod error;
pub mod widget_config;
pub mod widget_config_reader;

// 重导出核心配置类型
pub use celebration_config::{
    CelebrationConfig, FilterConfig, GroupingConfig, PresentationConfig, TitleConfig,
    WindowConfig,
};
pub use config_manager::ConfigManager;
pub use error::{ConfigError, ConfigResult};
pub use widget_config::{as_bool, WidgetConfig};
pub use widget_config_reader::WidgetConfigReader;
