// ==========================================
// 纪念日名单引擎 - 目录层
// ==========================================
// 职责: 从目录服务分页拉取人员档案，组装为引擎输入
// ==========================================

pub mod client;
pub mod error;
pub mod memory;
pub mod pagination;

pub use client::{DirectoryClient, DirectoryPage, DirectoryQuery};
pub use error::{DirectoryError, DirectoryResult};
pub use memory::InMemoryDirectory;
pub use pagination::{fetch_all_profiles, load_roster, DEFAULT_PAGE_SIZE};
