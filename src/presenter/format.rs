// ==========================================
// 纪念日名单引擎 - 月日格式化
// ==========================================

use chrono::NaiveDate;

/// 月日展示格式
pub trait MonthDayFormatter: Send + Sync {
    fn format_month_day(&self, date: NaiveDate) -> String;
}

/// 英文月名: "March 15"
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMonthDay;

impl MonthDayFormatter for EnglishMonthDay {
    fn format_month_day(&self, date: NaiveDate) -> String {
        date.format("%B %-d").to_string()
    }
}
