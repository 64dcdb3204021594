// ==========================================
// 纪念日名单引擎 - 分组标题
// ==========================================
// 职责: 由分组键和标题配置得出展示标题（纯函数）
// 未配置标题时回退到当前语言的默认文案
// ==========================================

use crate::config::{CelebrationConfig, TitleConfig};
use crate::domain::types::{BucketKey, RelativeBucket};
use crate::i18n::t;

// ==========================================
// BucketLabeler - 分组标题
// ==========================================
pub struct BucketLabeler;

impl BucketLabeler {
    /// 分组标题
    ///
    /// - 相对分组: 对应标题（today / days_before / days_after）
    /// - 周年分组: "<n> <年份词>"，n > 1 时用复数词
    pub fn label(key: &BucketKey, titles: &TitleConfig) -> String {
        match key {
            BucketKey::Relative(RelativeBucket::Today) => {
                or_default(&titles.today_title, "bucket.today")
            }
            BucketKey::Relative(RelativeBucket::Previous) => {
                or_default(&titles.days_before_title, "bucket.previous")
            }
            BucketKey::Relative(RelativeBucket::Upcoming) => {
                or_default(&titles.days_after_title, "bucket.upcoming")
            }
            BucketKey::TenureYear(years) => {
                let word = if *years > 1 {
                    or_default(&titles.year_word_plural, "bucket.year_plural")
                } else {
                    or_default(&titles.year_word, "bucket.year")
                };
                format!("{} {}", years, word)
            }
        }
    }

    /// 分组标题（按配置决定是否展示）
    pub fn header(key: &BucketKey, config: &CelebrationConfig) -> Option<String> {
        config
            .shows_bucket_headers()
            .then(|| Self::label(key, &config.titles))
    }
}

fn or_default(configured: &Option<String>, fallback_key: &str) -> String {
    configured.clone().unwrap_or_else(|| t(fallback_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{DateOrder, GroupingMode};
    use crate::i18n::{set_locale, tests::LOCALE_TEST_LOCK};

    fn titles() -> TitleConfig {
        TitleConfig {
            today_title: Some("Heute".to_string()),
            days_before_title: Some("Nachträglich".to_string()),
            days_after_title: Some("Demnächst".to_string()),
            year_word: Some("Jahr".to_string()),
            year_word_plural: Some("Jahre".to_string()),
        }
    }

    #[test]
    fn test_relative_labels() {
        let titles = titles();
        assert_eq!(
            BucketLabeler::label(&BucketKey::Relative(RelativeBucket::Today), &titles),
            "Heute"
        );
        assert_eq!(
            BucketLabeler::label(&BucketKey::Relative(RelativeBucket::Previous), &titles),
            "Nachträglich"
        );
        assert_eq!(
            BucketLabeler::label(&BucketKey::Relative(RelativeBucket::Upcoming), &titles),
            "Demnächst"
        );
    }

    #[test]
    fn test_tenure_labels_plural_above_one() {
        let titles = titles();
        assert_eq!(BucketLabeler::label(&BucketKey::TenureYear(1), &titles), "1 Jahr");
        assert_eq!(BucketLabeler::label(&BucketKey::TenureYear(0), &titles), "0 Jahr");
        assert_eq!(BucketLabeler::label(&BucketKey::TenureYear(5), &titles), "5 Jahre");
    }

    #[test]
    fn test_header_visibility() {
        let mut config = CelebrationConfig::new("birthday", DateOrder::DayFirst);
        let key = BucketKey::Relative(RelativeBucket::Today);

        // 相对模式且未配置前/后标题 → 无标题
        assert_eq!(BucketLabeler::header(&key, &config), None);

        config.titles.days_after_title = Some("Upcoming".to_string());
        config.titles.today_title = Some("Today!".to_string());
        assert_eq!(BucketLabeler::header(&key, &config).as_deref(), Some("Today!"));

        config.grouping.hide_bucket_headers = true;
        assert_eq!(BucketLabeler::header(&key, &config), None);

        config.grouping.hide_bucket_headers = false;
        config.grouping.mode = GroupingMode::TenureYear;
        config.titles = TitleConfig::default();
        config.titles.year_word_plural = Some("years".to_string());
        assert_eq!(
            BucketLabeler::header(&BucketKey::TenureYear(10), &config).as_deref(),
            Some("10 years")
        );
    }

    #[test]
    fn test_tenure_label_falls_back_to_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let mut config = CelebrationConfig::new("birthday", DateOrder::DayFirst);
        config.grouping.mode = GroupingMode::TenureYear;
        let key = BucketKey::TenureYear(5);

        set_locale("en");
        assert_eq!(BucketLabeler::header(&key, &config).as_deref(), Some("5 years"));
        assert_eq!(
            BucketLabeler::header(&BucketKey::TenureYear(1), &config).as_deref(),
            Some("1 year")
        );

        set_locale("de");
        assert_eq!(BucketLabeler::header(&key, &config).as_deref(), Some("5 Jahre"));

        set_locale("en");
    }

    #[test]
    fn test_relative_label_falls_back_to_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let mut config = CelebrationConfig::new("birthday", DateOrder::DayFirst);
        config.titles.days_after_title = Some("Coming up".to_string());
        let today = BucketKey::Relative(RelativeBucket::Today);
        let previous = BucketKey::Relative(RelativeBucket::Previous);

        set_locale("en");
        assert_eq!(BucketLabeler::header(&today, &config), Some(t("bucket.today")));
        assert_eq!(BucketLabeler::header(&today, &config).as_deref(), Some("Today"));
        assert_eq!(BucketLabeler::header(&previous, &config).as_deref(), Some("Belated"));

        set_locale("de");
        assert_eq!(BucketLabeler::header(&today, &config).as_deref(), Some("Heute"));
        assert_eq!(
            BucketLabeler::header(&BucketKey::Relative(RelativeBucket::Upcoming), &config)
                .as_deref(),
            Some("Coming up")
        );

        set_locale("en");
    }
}
