// ==========================================
// 纪念日名单引擎 - 领域类型定义
// ==========================================
// 职责: 日月顺序、分组模式、分组键等基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 日月顺序 (Date Order)
// ==========================================
// 同一次调用内固定不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOrder {
    DayFirst,   // "DD.MM"
    MonthFirst, // "MM.DD"
}

impl DateOrder {
    /// 从配置字符串解析
    ///
    /// 接受 "DD.MM" / "MM.DD"，也接受枚举名 "DayFirst" / "MonthFirst"（大小写不敏感）
    pub fn from_config_str(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "DD.MM" | "DAYFIRST" | "DAY_FIRST" => Some(DateOrder::DayFirst),
            "MM.DD" | "MONTHFIRST" | "MONTH_FIRST" => Some(DateOrder::MonthFirst),
            _ => None,
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "DD.MM"),
            DateOrder::MonthFirst => write!(f, "MM.DD"),
        }
    }
}

// ==========================================
// 分组模式 (Grouping Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupingMode {
    Relative,   // 以前/今天/即将
    TenureYear, // 按周年数
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingMode::Relative => write!(f, "RELATIVE"),
            GroupingMode::TenureYear => write!(f, "TENURE_YEAR"),
        }
    }
}

// ==========================================
// 相对今天的时间关系
// ==========================================
// 变体声明顺序即展示顺序: Previous < Today < Upcoming
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeBucket {
    Previous,
    Today,
    Upcoming,
}

impl RelativeBucket {
    /// 带序号前缀的分组标识，按字符串排序即为展示顺序
    pub fn as_key_str(&self) -> &'static str {
        match self {
            RelativeBucket::Previous => "0-previous",
            RelativeBucket::Today => "1-today",
            RelativeBucket::Upcoming => "2-upcoming",
        }
    }
}

impl fmt::Display for RelativeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key_str())
    }
}

// ==========================================
// 分组键 (Bucket Key)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BucketKey {
    Relative(RelativeBucket),
    TenureYear(i32),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Relative(bucket) => write!(f, "{}", bucket),
            BucketKey::TenureYear(years) => write!(f, "{}", years),
        }
    }
}

// ==========================================
// 用户状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Activated,
    Pending,
}

impl UserStatus {
    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "activated" | "active" => Some(UserStatus::Activated),
            "pending" => Some(UserStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Activated => write!(f, "activated"),
            UserStatus::Pending => write!(f, "pending"),
        }
    }
}
