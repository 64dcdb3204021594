// ==========================================
// 纪念日名单引擎 - 分组判定
// ==========================================
// 职责: 为通过准入的记录计算分组键
// - 相对模式: 以前 / 今天 / 即将
// - 周年模式: 今年年份 - 记录年份（带超 120 年修正）
// 红线: 纯折叠，每次调用产出新的映射，不就地修改入参
// ==========================================

use crate::config::GroupingConfig;
use crate::domain::types::{BucketKey, GroupingMode, RelativeBucket};
use crate::engine::date_core::{DateComparison, ParsedDate};
use crate::engine::eligibility::EligibleRecord;
use crate::engine::error::ExclusionReason;
use std::collections::BTreeMap;

/// 超过该年数视为年份误读，需要修正
pub const TENURE_CORRECTION_THRESHOLD: i32 = 120;

/// 分组结果: 分组键 → 记录（组内保持输入顺序）
pub type Buckets<'a> = BTreeMap<BucketKey, Vec<EligibleRecord<'a>>>;

// ==========================================
// BucketClassifier - 分组判定
// ==========================================
pub struct BucketClassifier;

impl BucketClassifier {
    /// 相对今天的分组
    pub fn relative_bucket(comparison: &DateComparison) -> RelativeBucket {
        if comparison.same_date {
            RelativeBucket::Today
        } else if comparison.day_offset < 0 {
            RelativeBucket::Previous
        } else {
            RelativeBucket::Upcoming
        }
    }

    /// 计算周年数
    ///
    /// # 规则
    /// - year_count = current_year - record_year
    /// - year_count > 120 时减去 (current_month - 1) × 100
    ///
    /// # 示例
    /// ```
    /// use celebration_roster::engine::BucketClassifier;
    /// assert_eq!(BucketClassifier::tenure_years(2015, 2024, 6), 9);
    /// // 0090 被当作年份: 2024 - 90 = 1934 > 120 → 1934 - 500 = 1434
    /// assert_eq!(BucketClassifier::tenure_years(90, 2024, 6), 1434);
    /// ```
    pub fn tenure_years(record_year: i32, current_year: i32, current_month: u32) -> i32 {
        let year_count = current_year - record_year;
        if year_count > TENURE_CORRECTION_THRESHOLD {
            let month = i32::try_from(current_month).unwrap_or(i32::MAX / 100);
            year_count - (month - 1) * 100
        } else {
            year_count
        }
    }

    /// 单条记录的分组键
    pub fn classify_one(
        eligible: &EligibleRecord<'_>,
        mode: GroupingMode,
        today: &ParsedDate,
    ) -> Result<BucketKey, ExclusionReason> {
        match mode {
            GroupingMode::Relative => Ok(BucketKey::Relative(Self::relative_bucket(
                &eligible.comparison,
            ))),
            GroupingMode::TenureYear => {
                let missing_year = || ExclusionReason::MissingYear {
                    raw: eligible.raw.to_string(),
                };
                let record_year = eligible.date.year.ok_or_else(missing_year)?;
                let current_year = today.year.ok_or_else(missing_year)?;
                Ok(BucketKey::TenureYear(Self::tenure_years(
                    record_year,
                    current_year,
                    today.month,
                )))
            }
        }
    }

    /// 批量分组
    ///
    /// # 说明
    /// - 周年模式下缺少年份的记录直接丢弃
    /// - special_years 非空时，键不在白名单内的整组丢弃
    #[tracing::instrument(skip_all, fields(count = eligible.len(), mode = %grouping.mode))]
    pub fn classify<'a>(
        eligible: &[EligibleRecord<'a>],
        grouping: &GroupingConfig,
        today: &ParsedDate,
    ) -> Buckets<'a> {
        let buckets = eligible
            .iter()
            .fold(Buckets::new(), |mut acc, entry| {
                match Self::classify_one(entry, grouping.mode, today) {
                    Ok(key) => acc.entry(key).or_default().push(*entry),
                    Err(reason) => {
                        tracing::debug!(record_id = %entry.record.id, %reason, "记录未分组");
                    }
                }
                acc
            });

        Self::retain_special_years(buckets, grouping)
    }

    /// 按周年白名单整组过滤
    fn retain_special_years<'a>(buckets: Buckets<'a>, grouping: &GroupingConfig) -> Buckets<'a> {
        if grouping.mode != GroupingMode::TenureYear || grouping.special_years.is_empty() {
            return buckets;
        }

        buckets
            .into_iter()
            .filter(|(key, _)| match key {
                BucketKey::TenureYear(years) => grouping.special_years.contains(years),
                BucketKey::Relative(_) => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileRecord;
    use crate::domain::types::DateOrder;
    use crate::engine::date_core::DateCore;

    fn today() -> ParsedDate {
        DateCore::parse("01.06.2024", DateOrder::DayFirst).unwrap()
    }

    fn eligible<'a>(record: &'a ProfileRecord) -> EligibleRecord<'a> {
        let raw = record.field("d").unwrap();
        let date = DateCore::parse(raw, DateOrder::DayFirst).unwrap();
        EligibleRecord {
            record,
            raw,
            date,
            comparison: DateCore::compare(&date, &today()),
        }
    }

    fn record(id: &str, date: &str) -> ProfileRecord {
        let mut record = ProfileRecord::new(id, id, "");
        record.profile.insert("d".to_string(), date.to_string());
        record
    }

    fn ids(bucket: &[EligibleRecord<'_>]) -> Vec<String> {
        bucket.iter().map(|e| e.record.id.clone()).collect()
    }

    fn tenure(special_years: Vec<i32>) -> GroupingConfig {
        GroupingConfig {
            mode: GroupingMode::TenureYear,
            special_years,
            ..Default::default()
        }
    }

    // ==========================================
    // 测试 1: 相对分组
    // ==========================================

    #[test]
    fn test_relative_buckets() {
        let records = vec![
            record("prev", "30.05.1990"),
            record("today", "01.06.2015"),
            record("next", "03.06.2020"),
        ];
        let eligible: Vec<_> = records.iter().map(eligible).collect();

        let buckets = BucketClassifier::classify(&eligible, &GroupingConfig::default(), &today());

        assert_eq!(buckets.len(), 3);
        assert_eq!(
            ids(&buckets[&BucketKey::Relative(RelativeBucket::Previous)]),
            vec!["prev"]
        );
        assert_eq!(
            ids(&buckets[&BucketKey::Relative(RelativeBucket::Today)]),
            vec!["today"]
        );
        assert_eq!(
            ids(&buckets[&BucketKey::Relative(RelativeBucket::Upcoming)]),
            vec!["next"]
        );
    }

    // ==========================================
    // 测试 2: 周年分组
    // ==========================================

    #[test]
    fn test_tenure_buckets_keep_input_order() {
        let records = vec![
            record("a", "01.06.2019"),
            record("b", "02.06.2014"),
            record("c", "03.06.2019"),
        ];
        let eligible: Vec<_> = records.iter().map(eligible).collect();

        let buckets = BucketClassifier::classify(&eligible, &tenure(vec![]), &today());

        assert_eq!(ids(&buckets[&BucketKey::TenureYear(5)]), vec!["a", "c"]);
        assert_eq!(ids(&buckets[&BucketKey::TenureYear(10)]), vec!["b"]);
    }

    #[test]
    fn test_tenure_drops_records_without_year() {
        let records = vec![record("a", "01.06."), record("b", "02.06.2014")];
        let eligible: Vec<_> = records.iter().map(eligible).collect();

        let buckets = BucketClassifier::classify(&eligible, &tenure(vec![]), &today());

        assert_eq!(buckets.len(), 1);
        assert_eq!(ids(&buckets[&BucketKey::TenureYear(10)]), vec!["b"]);
    }

    #[test]
    fn test_special_years_drop_whole_buckets() {
        let records = vec![
            record("five", "01.06.2019"),
            record("ten", "02.06.2014"),
            record("three", "03.06.2021"),
            record("three-too", "04.06.2021"),
        ];
        let eligible: Vec<_> = records.iter().map(eligible).collect();

        let buckets = BucketClassifier::classify(&eligible, &tenure(vec![5, 10]), &today());

        let keys: Vec<BucketKey> = buckets.keys().copied().collect();
        assert_eq!(keys, vec![BucketKey::TenureYear(5), BucketKey::TenureYear(10)]);
    }

    #[test]
    fn test_special_years_ignored_in_relative_mode() {
        let records = vec![record("today", "01.06.2015")];
        let eligible: Vec<_> = records.iter().map(eligible).collect();
        let grouping = GroupingConfig {
            special_years: vec![5],
            ..Default::default()
        };

        let buckets = BucketClassifier::classify(&eligible, &grouping, &today());
        assert_eq!(buckets.len(), 1);
    }

    // ==========================================
    // 测试 3: 周年修正
    // ==========================================

    #[test]
    fn test_tenure_correction() {
        assert_eq!(BucketClassifier::tenure_years(2024, 2024, 6), 0);
        assert_eq!(BucketClassifier::tenure_years(1904, 2024, 6), 120);
        // 121 > 120 → 121 - (6-1)*100
        assert_eq!(BucketClassifier::tenure_years(1903, 2024, 6), -379);
        // 一月不修正幅度为 0
        assert_eq!(BucketClassifier::tenure_years(1903, 2024, 1), 121);
    }

    #[test]
    fn test_tenure_correction_independent_of_order() {
        let records = vec![record("x", "01.06.0090"), record("y", "02.06.0090")];
        let forward: Vec<_> = records.iter().map(eligible).collect();
        let backward: Vec<_> = records.iter().rev().map(eligible).collect();

        let a = BucketClassifier::classify(&forward, &tenure(vec![]), &today());
        let b = BucketClassifier::classify(&backward, &tenure(vec![]), &today());

        let expected = BucketKey::TenureYear(2024 - 90 - 500);
        assert_eq!(a.keys().copied().collect::<Vec<_>>(), vec![expected]);
        assert_eq!(b.keys().copied().collect::<Vec<_>>(), vec![expected]);
    }
}
