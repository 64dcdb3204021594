// ==========================================
// 纪念日名单引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 名单导入错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv/.json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ===== 数据映射错误 =====
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    #[error("字段值无效 (行 {row}, 字段 {field}): {value}")]
    InvalidValue {
        row: usize,
        field: String,
        value: String,
    },
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
