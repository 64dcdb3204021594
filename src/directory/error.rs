// ==========================================
// 纪念日名单引擎 - 目录服务错误类型
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("目录请求失败: {0}")]
    Request(String),

    #[error("目录分页不一致: offset={offset} 返回 0 条，但 total={total}")]
    InconsistentPage { offset: usize, total: usize },

    #[error("名单导入失败: {0}")]
    Import(#[from] ImportError),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
