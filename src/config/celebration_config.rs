// ==========================================
// 纪念日名单引擎 - 校验后的强类型配置
// ==========================================
// 说明: 由 WidgetConfig::validate() 产出，引擎只消费这里的类型
// ==========================================

use crate::domain::types::{DateOrder, GroupingMode};
use serde::{Deserialize, Serialize};

// ==========================================
// 展示窗口
// ==========================================
// 整月模式开启时 days_before / days_after 不参与窗口判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub days_before: u32,
    pub days_after: u32,
    pub whole_month_mode: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            days_before: 0,
            days_after: 30,
            whole_month_mode: false,
        }
    }
}

// ==========================================
// 分组配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    pub mode: GroupingMode,
    /// 仅对周年分组生效: 降序
    pub reverse_order: bool,
    /// 周年白名单，空表示不限
    pub special_years: Vec<i32>,
    pub hide_bucket_headers: bool,
    /// None 表示不截断
    pub limit: Option<usize>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            mode: GroupingMode::Relative,
            reverse_order: false,
            special_years: Vec::new(),
            hide_bucket_headers: false,
            limit: None,
        }
    }
}

// ==========================================
// 字段筛选配置
// ==========================================
// 取值列表已统一转为小写
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub field_filter: Option<String>,
    pub field_values: Vec<String>,
    pub opt_out_field: Option<String>,
    pub opt_out_values: Vec<String>,
}

// ==========================================
// 分组标题
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub today_title: Option<String>,
    pub days_before_title: Option<String>,
    pub days_after_title: Option<String>,
    pub year_word: Option<String>,
    pub year_word_plural: Option<String>,
}

// ==========================================
// 展示层配置（引擎不读取）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub title: Option<String>,
    pub loading_message: Option<String>,
    pub no_instances_message: Option<String>,
    pub show_date: bool,
    pub hide_empty_widget: bool,
    pub header_color: Option<String>,
    pub include_pending: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: None,
            loading_message: None,
            no_instances_message: None,
            show_date: true,
            hide_empty_widget: false,
            header_color: None,
            include_pending: false,
        }
    }
}

// ==========================================
// CelebrationConfig - 一次调用的完整配置快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    pub anniversary_field_id: String,
    pub date_order: DateOrder,
    pub window: WindowConfig,
    pub grouping: GroupingConfig,
    pub filter: FilterConfig,
    pub titles: TitleConfig,
    pub presentation: PresentationConfig,
}

impl CelebrationConfig {
    /// 以默认值构造（测试与程序化调用使用）
    pub fn new(anniversary_field_id: &str, date_order: DateOrder) -> Self {
        Self {
            anniversary_field_id: anniversary_field_id.to_string(),
            date_order,
            window: WindowConfig::default(),
            grouping: GroupingConfig::default(),
            filter: FilterConfig::default(),
            titles: TitleConfig::default(),
            presentation: PresentationConfig::default(),
        }
    }

    /// 是否输出分组标题
    ///
    /// 按周年分组或配置了前/后标题时才有标题，且未被 hide_bucket_headers 关闭
    pub fn shows_bucket_headers(&self) -> bool {
        let has_headers = self.grouping.mode == GroupingMode::TenureYear
            || self.titles.days_before_title.is_some()
            || self.titles.days_after_title.is_some();
        has_headers && !self.grouping.hide_bucket_headers
    }
}
