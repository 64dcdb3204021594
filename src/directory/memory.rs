// ==========================================
// 纪念日名单引擎 - 内存目录
// ==========================================
// 职责: 基于已物化名单的 DirectoryClient 实现
// 用于本地文件导入与测试
// ==========================================

use crate::directory::client::{DirectoryClient, DirectoryPage, DirectoryQuery};
use crate::directory::error::DirectoryResult;
use crate::domain::profile::ProfileRecord;
use crate::domain::types::UserStatus;
use crate::importer::{RosterParser, UniversalFileParser};
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct InMemoryDirectory {
    records: Vec<ProfileRecord>,
    requests: AtomicUsize,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<ProfileRecord>) -> Self {
        Self {
            records,
            requests: AtomicUsize::new(0),
        }
    }

    /// 从名单文件构建（.csv / .json）
    pub fn from_file(path: &Path) -> DirectoryResult<Self> {
        let records = UniversalFileParser.parse_records(path)?;
        Ok(Self::new(records))
    }

    /// 已处理的分页请求数
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DirectoryClient for InMemoryDirectory {
    async fn fetch_page(&self, query: &DirectoryQuery) -> DirectoryResult<DirectoryPage> {
        self.requests.fetch_add(1, Ordering::Relaxed);

        let visible: Vec<&ProfileRecord> = self
            .records
            .iter()
            .filter(|r| query.include_pending || r.status == UserStatus::Activated)
            .collect();

        let data = visible
            .iter()
            .skip(query.offset)
            .take(query.limit)
            .map(|r| (*r).clone())
            .collect();

        Ok(DirectoryPage {
            data,
            total: visible.len(),
        })
    }
}
