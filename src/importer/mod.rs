// ==========================================
// 纪念日名单引擎 - 导入层
// ==========================================
// 职责: 从本地文件加载人员名单
// 支持: CSV, JSON
// ==========================================

pub mod error;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, JsonParser, RosterParser, UniversalFileParser};
