// ==========================================
// 纪念日名单引擎 - 分页拉取
// ==========================================
// 规则: offset 从 0 开始按 page_size 递增，
//       直到 total <= offset + limit，结果按页顺序拼接
// ==========================================

use crate::directory::client::{DirectoryClient, DirectoryQuery};
use crate::directory::error::{DirectoryError, DirectoryResult};
use crate::domain::profile::ProfileRecord;
use crate::engine::Roster;
use tracing::{debug, info};

/// 默认分页大小
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// 拉取全部人员档案
///
/// # 错误
/// - 客户端错误原样上抛
/// - 某页返回 0 条但 total 尚未覆盖: InconsistentPage
#[tracing::instrument(skip(client))]
pub async fn fetch_all_profiles<C>(
    client: &C,
    page_size: usize,
    include_pending: bool,
) -> DirectoryResult<Vec<ProfileRecord>>
where
    C: DirectoryClient + ?Sized,
{
    let limit = page_size.max(1);
    let mut offset = 0usize;
    let mut records = Vec::new();

    loop {
        let query = DirectoryQuery {
            include_pending,
            limit,
            offset,
        };
        let page = client.fetch_page(&query).await?;
        let received = page.data.len();
        debug!(offset, received, total = page.total, "目录分页");

        records.extend(page.data);

        if page.total <= offset + limit {
            break;
        }
        if received == 0 {
            return Err(DirectoryError::InconsistentPage {
                offset,
                total: page.total,
            });
        }
        offset += limit;
    }

    info!(count = records.len(), "目录拉取完成");
    Ok(records)
}

/// 拉取全部档案并包装为已加载名单
pub async fn load_roster<C>(
    client: &C,
    page_size: usize,
    include_pending: bool,
) -> DirectoryResult<Roster>
where
    C: DirectoryClient + ?Sized,
{
    fetch_all_profiles(client, page_size, include_pending)
        .await
        .map(Roster::Loaded)
}
