// ==========================================
// 纪念日名单引擎 - 排序
// ==========================================
// 职责:
// - RecordOrderer: 全局按 day_offset 升序（稳定排序，组内顺序由此继承）
// - BucketOrderer: 分组键排序（相对模式固定顺序，周年模式按数值升/降序）
// ==========================================

use crate::config::GroupingConfig;
use crate::domain::types::BucketKey;
use crate::engine::eligibility::EligibleRecord;
use std::cmp::Ordering;

// ==========================================
// RecordOrderer - 记录排序
// ==========================================
pub struct RecordOrderer;

impl RecordOrderer {
    /// 按相对今天的 day_offset 升序（稳定）
    pub fn order_records(mut records: Vec<EligibleRecord<'_>>) -> Vec<EligibleRecord<'_>> {
        records.sort_by_key(|entry| entry.comparison.day_offset);
        records
    }
}

// ==========================================
// BucketOrderer - 分组排序
// ==========================================
pub struct BucketOrderer;

impl BucketOrderer {
    /// 排序分组键
    ///
    /// # 规则
    /// - 相对模式: 按带序号前缀的标识字符串排序 → 以前, 今天, 即将
    /// - 周年模式: 数值升序；reverse_order 时降序
    pub fn order(mut keys: Vec<BucketKey>, grouping: &GroupingConfig) -> Vec<BucketKey> {
        keys.sort_by(|a, b| Self::compare(a, b, grouping.reverse_order));
        keys
    }

    fn compare(a: &BucketKey, b: &BucketKey, reverse: bool) -> Ordering {
        match (a, b) {
            (BucketKey::Relative(x), BucketKey::Relative(y)) => x.as_key_str().cmp(y.as_key_str()),
            (BucketKey::TenureYear(x), BucketKey::TenureYear(y)) => {
                if reverse {
                    y.cmp(x)
                } else {
                    x.cmp(y)
                }
            }
            // 同一次调用不会混用两种键，这里只保证全序
            (BucketKey::Relative(_), BucketKey::TenureYear(_)) => Ordering::Less,
            (BucketKey::TenureYear(_), BucketKey::Relative(_)) => Ordering::Greater,
        }
    }
}
