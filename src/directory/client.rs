// ==========================================
// 纪念日名单引擎 - 目录服务接口
// ==========================================
// 职责: 定义分页拉取人员档案的接口（不包含实现）
// ==========================================

use crate::directory::error::DirectoryResult;
use crate::domain::profile::ProfileRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryQuery {
    /// 是否包含待激活用户
    pub include_pending: bool,
    pub limit: usize,
    pub offset: usize,
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryPage {
    pub data: Vec<ProfileRecord>,
    /// 满足条件的记录总数
    pub total: usize,
}

// ==========================================
// DirectoryClient Trait
// ==========================================
// 实现者: InMemoryDirectory（本地文件/测试）
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// 拉取一页人员档案
    async fn fetch_page(&self, query: &DirectoryQuery) -> DirectoryResult<DirectoryPage>;
}
