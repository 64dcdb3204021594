// ==========================================
// 纪念日名单引擎 - 日期解析与比较纯函数库
// ==========================================
// 职责: 日期串切分、日月顺序解析、参考年内的日差计算
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================
// 说明: 日/月比较与真实年份无关，一律放到参考年 0 年（闰年，
//       2 月 29 日可解析）内计算。日、月越界时顺延到相邻月份，不做校验。
// 已知限制: 跨年的近距离日期(12-30 与 01-02)按年内直线距离计算，
//           不取环形最短距离。
// ==========================================

use crate::domain::types::DateOrder;
use crate::engine::error::DateParseError;
use chrono::{Datelike, Duration, NaiveDate};

/// 参考年
pub const REFERENCE_YEAR: i32 = 0;

/// 日期分隔符: `.` `/` 空格 `-`
const DATE_SEPARATORS: [char; 4] = ['.', '/', ' ', '-'];

// ==========================================
// ParsedDate - 解析后的日期
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub month: u32,
    pub day: u32,
    /// 仅当原串中存在四位分段时才有值
    pub year: Option<i32>,
    /// 参考年内的日期（越界的日/月已顺延）
    reference: NaiveDate,
}

impl ParsedDate {
    /// 参考年内的日期
    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    /// 同月 1 日
    pub fn first_of_month(&self) -> Result<ParsedDate, DateParseError> {
        DateCore::from_parts(self.month, 1, self.year, "")
    }
}

/// 两个日期的比较结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComparison {
    pub same_date: bool,
    pub same_month: bool,
    /// a - b 的天数；正数表示 a 在参考年内晚于 b
    pub day_offset: i64,
}

// ==========================================
// DateCore - 纯函数工具类
// ==========================================
pub struct DateCore;

impl DateCore {
    /// 切分日期串，丢弃空分段
    pub fn tokenize(raw: &str) -> Vec<&str> {
        raw.split(&DATE_SEPARATORS[..])
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// 提取四位年份分段（与位置无关）
    ///
    /// # 示例
    /// ```
    /// use celebration_roster::engine::DateCore;
    /// assert_eq!(DateCore::extract_year("15/03/1990"), Some(1990));
    /// assert_eq!(DateCore::extract_year("1990-03-15"), Some(1990));
    /// assert_eq!(DateCore::extract_year("15.03."), None);
    /// ```
    pub fn extract_year(raw: &str) -> Option<i32> {
        Self::tokenize(raw)
            .into_iter()
            .find(|token| token.chars().count() == 4)
            .and_then(parse_leading_int)
            .and_then(|year| i32::try_from(year).ok())
    }

    /// 解析日期串
    ///
    /// # 规则
    /// 1. 按 `.` `/` 空格 `-` 切分
    /// 2. 第一个长度为 4 的分段视为年份并移出，不参与日/月
    /// 3. 其余长度不超过 2 的分段中，前两个按 `order` 映射为日/月；
    ///    年份为第一段时固定按 年-月-日 读取
    /// 4. 不足两段或非数字 → 失败
    pub fn parse(raw: &str, order: DateOrder) -> Result<ParsedDate, DateParseError> {
        let tokens = Self::tokenize(raw);

        let year_index = tokens.iter().position(|token| token.chars().count() == 4);
        let year = year_index
            .and_then(|idx| parse_leading_int(tokens[idx]))
            .and_then(|year| i32::try_from(year).ok());

        let day_month: Vec<&str> = tokens
            .iter()
            .enumerate()
            .filter(|(idx, token)| Some(*idx) != year_index && token.chars().count() <= 2)
            .map(|(_, token)| *token)
            .take(2)
            .collect();

        let (first, second) = match day_month.as_slice() {
            [first, second] => (*first, *second),
            _ => {
                return Err(DateParseError::NotEnoughTokens {
                    raw: raw.to_string(),
                })
            }
        };

        // 年份打头（YYYY-MM-DD）时按月、日读取
        let order = if year_index == Some(0) {
            DateOrder::MonthFirst
        } else {
            order
        };
        let (day_token, month_token) = match order {
            DateOrder::DayFirst => (first, second),
            DateOrder::MonthFirst => (second, first),
        };

        let day = parse_token(raw, day_token)?;
        let month = parse_token(raw, month_token)?;

        Self::from_parts(month, day, year, raw)
    }

    /// 由日/月/年构造 ParsedDate
    pub fn from_parts(
        month: u32,
        day: u32,
        year: Option<i32>,
        raw: &str,
    ) -> Result<ParsedDate, DateParseError> {
        let reference = reference_date(month, day).ok_or_else(|| DateParseError::OutOfRange {
            raw: raw.to_string(),
        })?;

        Ok(ParsedDate {
            month,
            day,
            year,
            reference,
        })
    }

    /// 比较两个日期（忽略年份）
    pub fn compare(a: &ParsedDate, b: &ParsedDate) -> DateComparison {
        DateComparison {
            same_date: a.reference == b.reference,
            same_month: a.reference.month() == b.reference.month(),
            day_offset: a.reference.signed_duration_since(b.reference).num_days(),
        }
    }

    /// 解析并比较两个日期串
    pub fn compare_raw(
        a: &str,
        b: &str,
        order: DateOrder,
    ) -> Result<DateComparison, DateParseError> {
        let a = Self::parse(a, order)?;
        let b = Self::parse(b, order)?;
        Ok(Self::compare(&a, &b))
    }

    /// 今天距本月 1 日的天数
    ///
    /// 用于整月模式，防止月初换月时的误判
    pub fn days_since_month_start(today: &ParsedDate) -> Result<i64, DateParseError> {
        let first = today.first_of_month()?;
        Ok(Self::compare(today, &first).day_offset)
    }

    /// 以解析器可接受的格式输出日期
    ///
    /// - DayFirst → `DD.MM.YYYY`
    /// - MonthFirst → `MM/DD/YYYY`
    pub fn today_string(order: DateOrder, date: NaiveDate) -> String {
        match order {
            DateOrder::DayFirst => date.format("%d.%m.%Y").to_string(),
            DateOrder::MonthFirst => date.format("%m/%d/%Y").to_string(),
        }
    }
}

/// 参考年内的日期，越界的月/日顺延
fn reference_date(month: u32, day: u32) -> Option<NaiveDate> {
    let month_index = i64::from(month) - 1;
    let year = i64::from(REFERENCE_YEAR) + month_index.div_euclid(12);
    let month0 = month_index.rem_euclid(12) as u32;

    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month0 + 1, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

fn parse_token(raw: &str, token: &str) -> Result<u32, DateParseError> {
    parse_leading_int(token)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| DateParseError::NotANumber {
            raw: raw.to_string(),
            token: token.to_string(),
        })
}

/// 取前导数字部分解析为整数（"07th" → 7, "x7" → None）
fn parse_leading_int(token: &str) -> Option<i64> {
    let digits: String = token
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}
