// ==========================================
// 纪念日名单引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 单条记录的问题只导致该记录被剔除(记日志)，不向宿主抛出
// ==========================================

use thiserror::Error;

/// 日期串解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("日期分段不足 (raw={raw}): 至少需要日、月两段")]
    NotEnoughTokens { raw: String },

    #[error("日期分段不是数字 (raw={raw}, token={token})")]
    NotANumber { raw: String, token: String },

    #[error("日期超出可计算范围 (raw={raw})")]
    OutOfRange { raw: String },
}

/// 记录被剔除的原因（仅用于日志与测试断言）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    #[error("缺少字段: {field}")]
    MissingField { field: String },

    #[error("筛选字段不匹配 (field={field}, value={value})")]
    FilterMismatch { field: String, value: String },

    #[error("命中退出字段 (field={field}, value={value})")]
    OptedOut { field: String, value: String },

    #[error("日期解析失败: {0}")]
    ParseFailure(#[from] DateParseError),

    #[error("不在展示窗口内 (day_offset={day_offset})")]
    OutsideWindow { day_offset: i64 },

    #[error("按周年分组但日期缺少年份 (raw={raw})")]
    MissingYear { raw: String },
}

/// 引擎级错误：仅在宿主提供的"今天"不可用时返回
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("今天的日期无法解析 (raw={raw}): {source}")]
    InvalidToday {
        raw: String,
        #[source]
        source: DateParseError,
    },

    #[error("按周年分组需要今天的日期包含四位年份 (raw={raw})")]
    MissingTodayYear { raw: String },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
