// ==========================================
// 纪念日名单引擎 - 宿主原始配置
// ==========================================
// 职责: 接收宿主传入的配置对象，统一归一化后校验为 CelebrationConfig
// 红线: 布尔值只在此处经 as_bool 归一化，使用处不再重复判断
// ==========================================
// 兼容: 同时接受 camelCase 键名与旧版全小写属性名
//       布尔值可为原生 bool 或字符串 "true"/"false"
//       整数可为数字或数字字符串
// ==========================================

use crate::config::celebration_config::{
    CelebrationConfig, FilterConfig, GroupingConfig, PresentationConfig, TitleConfig,
    WindowConfig,
};
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::{DateOrder, GroupingMode};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// 默认向前天数
pub const DEFAULT_DAYS_BEFORE: u32 = 0;

/// 默认向后天数
pub const DEFAULT_DAYS_AFTER: u32 = 30;

// ==========================================
// 布尔归一化
// ==========================================

/// 布尔配置的唯一判定入口
///
/// 仅原生 `true` 或字符串 `"true"` 为真，其余（含无法识别的字符串）一律为假
pub fn as_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text == "true",
        _ => false,
    }
}

fn de_loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_bool(&value))
}

fn de_loose_bool_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => true,
        other => as_bool(&other),
    })
}

fn de_loose_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => match text.trim().parse::<i64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(raw_value = %text, "整数配置格式错误，使用默认值");
                None
            }
        },
        _ => None,
    })
}

fn de_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn default_true() -> bool {
    true
}

// ==========================================
// WidgetConfig - 宿主原始配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    // ===== 必填 =====
    #[serde(default, alias = "anniversaryprofilefieldid", deserialize_with = "de_loose_string")]
    pub anniversary_profile_field_id: Option<String>,

    #[serde(default, alias = "dateformat", deserialize_with = "de_loose_string")]
    pub date_order: Option<String>,

    // ===== 分组 =====
    #[serde(default, alias = "includeyear", deserialize_with = "de_loose_bool")]
    pub include_year: bool,

    #[serde(default, alias = "splitbyyearreverse", deserialize_with = "de_loose_bool")]
    pub split_by_year_reverse: bool,

    #[serde(default, alias = "specialyears", deserialize_with = "de_loose_string")]
    pub special_years: Option<String>,

    #[serde(default, alias = "hideyearheader", deserialize_with = "de_loose_bool")]
    pub hide_year_header: bool,

    #[serde(default, deserialize_with = "de_loose_i64")]
    pub limit: Option<i64>,

    // ===== 窗口 =====
    #[serde(default, alias = "showwholemonth", deserialize_with = "de_loose_bool")]
    pub show_whole_month: bool,

    #[serde(default, alias = "showdaysbefore", deserialize_with = "de_loose_i64")]
    pub days_before: Option<i64>,

    #[serde(default, alias = "showdaysafter", deserialize_with = "de_loose_i64")]
    pub days_after: Option<i64>,

    // ===== 字段筛选 =====
    #[serde(default, alias = "fieldfilter", deserialize_with = "de_loose_string")]
    pub field_filter: Option<String>,

    #[serde(
        default,
        alias = "fieldvalue",
        alias = "fieldvalues",
        deserialize_with = "de_loose_string"
    )]
    pub field_values: Option<String>,

    #[serde(default, alias = "optoutfield", deserialize_with = "de_loose_string")]
    pub opt_out_field: Option<String>,

    #[serde(
        default,
        alias = "optoutvalue",
        alias = "optoutvalues",
        deserialize_with = "de_loose_string"
    )]
    pub opt_out_values: Option<String>,

    // ===== 标题 =====
    #[serde(default, alias = "todaytitle", deserialize_with = "de_loose_string")]
    pub today_title: Option<String>,

    #[serde(default, alias = "daysbeforetitle", deserialize_with = "de_loose_string")]
    pub days_before_title: Option<String>,

    #[serde(default, alias = "daysaftertitle", deserialize_with = "de_loose_string")]
    pub days_after_title: Option<String>,

    #[serde(default, alias = "yearword", deserialize_with = "de_loose_string")]
    pub year_word: Option<String>,

    #[serde(default, alias = "yearwordplural", deserialize_with = "de_loose_string")]
    pub year_word_plural: Option<String>,

    // ===== 展示 =====
    #[serde(default, deserialize_with = "de_loose_string")]
    pub title: Option<String>,

    #[serde(default, alias = "loadingmessage", deserialize_with = "de_loose_string")]
    pub loading_message: Option<String>,

    #[serde(default, alias = "noinstancesmessage", deserialize_with = "de_loose_string")]
    pub no_instances_message: Option<String>,

    #[serde(
        default = "default_true",
        alias = "showdate",
        deserialize_with = "de_loose_bool_default_true"
    )]
    pub show_date: bool,

    #[serde(default, alias = "hideemptywidget", deserialize_with = "de_loose_bool")]
    pub hide_empty_widget: bool,

    #[serde(default, alias = "headercolor", deserialize_with = "de_loose_string")]
    pub header_color: Option<String>,

    #[serde(default, alias = "includepending", deserialize_with = "de_loose_bool")]
    pub include_pending: bool,
}

impl WidgetConfig {
    /// 从 JSON 文本解析
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从键值对解析（值均为字符串，例如 config_kv 表）
    pub fn from_key_values(pairs: &HashMap<String, String>) -> ConfigResult<Self> {
        let map: Map<String, Value> = pairs
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// 校验并转换为强类型配置
    ///
    /// # 错误
    /// - anniversaryProfileFieldId 缺失或为空 → MissingField
    /// - dateOrder 缺失 → MissingField；无法识别 → InvalidValue
    pub fn validate(&self) -> ConfigResult<CelebrationConfig> {
        let anniversary_field_id = non_blank(&self.anniversary_profile_field_id).ok_or_else(|| {
            ConfigError::MissingField {
                field: "anniversaryProfileFieldId".to_string(),
            }
        })?;

        let raw_order = non_blank(&self.date_order).ok_or_else(|| ConfigError::MissingField {
            field: "dateOrder".to_string(),
        })?;
        let date_order =
            DateOrder::from_config_str(&raw_order).ok_or_else(|| ConfigError::InvalidValue {
                field: "dateOrder".to_string(),
                value: raw_order.clone(),
                message: "期望 DD.MM 或 MM.DD".to_string(),
            })?;

        let window = WindowConfig {
            days_before: non_negative("daysBefore", self.days_before, DEFAULT_DAYS_BEFORE),
            days_after: non_negative("daysAfter", self.days_after, DEFAULT_DAYS_AFTER),
            whole_month_mode: self.show_whole_month,
        };

        let grouping = GroupingConfig {
            mode: if self.include_year {
                GroupingMode::TenureYear
            } else {
                GroupingMode::Relative
            },
            reverse_order: self.split_by_year_reverse,
            special_years: parse_special_years(self.special_years.as_deref()),
            hide_bucket_headers: self.hide_year_header,
            limit: self
                .limit
                .filter(|limit| *limit > 0)
                .and_then(|limit| usize::try_from(limit).ok()),
        };

        let filter = FilterConfig {
            field_filter: non_blank(&self.field_filter),
            field_values: split_lowercase(self.field_values.as_deref()),
            opt_out_field: non_blank(&self.opt_out_field),
            opt_out_values: split_lowercase(self.opt_out_values.as_deref()),
        };

        let titles = TitleConfig {
            today_title: self.today_title.clone(),
            days_before_title: self.days_before_title.clone(),
            days_after_title: self.days_after_title.clone(),
            year_word: self.year_word.clone(),
            year_word_plural: self.year_word_plural.clone(),
        };

        let presentation = PresentationConfig {
            title: self.title.clone(),
            loading_message: self.loading_message.clone(),
            no_instances_message: self.no_instances_message.clone(),
            show_date: self.show_date,
            hide_empty_widget: self.hide_empty_widget,
            header_color: non_blank(&self.header_color),
            include_pending: self.include_pending,
        };

        Ok(CelebrationConfig {
            anniversary_field_id,
            date_order,
            window,
            grouping,
            filter,
            titles,
            presentation,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_negative(field: &str, value: Option<i64>, default: u32) -> u32 {
    match value {
        None => default,
        Some(days) if days < 0 => {
            tracing::warn!(config_key = field, value = days, "天数配置为负数，按 0 处理");
            0
        }
        Some(days) => u32::try_from(days).unwrap_or(u32::MAX),
    }
}

/// 解析逗号分隔的周年白名单，忽略无法解析的项
fn parse_special_years(raw: Option<&str>) -> Vec<i32> {
    raw.map(|text| {
        text.split(',')
            .filter_map(|s| s.trim().parse::<i32>().ok())
            .collect()
    })
    .unwrap_or_default()
}

/// 逗号分隔列表，转小写
fn split_lowercase(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
