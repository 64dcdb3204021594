// ==========================================
// 纪念日名单引擎 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 校验错误 =====
    #[error("缺少必填配置项: {field}")]
    MissingField { field: String },

    #[error("配置值格式错误 (field: {field}, value: {value}): {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("配置作用域不存在: {scope}")]
    ScopeNotFound { scope: String },

    // ===== 解析错误 =====
    #[error("配置 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 存储错误 =====
    #[error("配置库访问失败: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置库锁获取失败: {0}")]
    LockError(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
