// ==========================================
// 纪念日名单引擎 - 组件配置读取 Trait
// ==========================================
// 职责: 定义按组件实例读取配置的接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::widget_config::WidgetConfig;
use async_trait::async_trait;

// ==========================================
// WidgetConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait WidgetConfigReader: Send + Sync {
    /// 读取组件实例的原始配置
    ///
    /// # 参数
    /// - widget_id: 组件实例 ID（即 config_kv.scope_id）
    ///
    /// # 返回
    /// - WidgetConfig: 尚未校验的原始配置
    ///
    /// # 错误
    /// - ScopeNotFound: 该实例没有任何配置项
    async fn load_widget_config(&self, widget_id: &str) -> ConfigResult<WidgetConfig>;
}
