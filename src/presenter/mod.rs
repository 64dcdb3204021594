// ==========================================
// 纪念日名单引擎 - 展示层
// ==========================================
// 职责: 把引擎输出转为可直接渲染的视图（纯函数）
// 红线: 不改变分组与顺序，只补充链接、头像、日期文案
// ==========================================

pub mod format;
pub mod host;

pub use format::{EnglishMonthDay, MonthDayFormatter};
pub use host::{Branding, HostContext, StaticHost};

use crate::config::CelebrationConfig;
use crate::domain::profile::ProfileRecord;
use crate::domain::types::BucketKey;
use crate::engine::{BucketGroup, CelebrationView, DateCore};
use crate::i18n::t;
use serde::Serialize;

/// 单个人员条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: String,
    pub display_name: String,
    /// 无头像时的首字母占位
    pub initials: Option<String>,
    pub avatar_thumb: Option<String>,
    pub profile_link: String,
    /// showDate 关闭时为 None
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub key: BucketKey,
    pub label: Option<String>,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "body", rename_all = "camelCase")]
pub enum WidgetBody {
    Hidden,
    Message(String),
    Groups(Vec<GroupView>),
}

/// 组件整体视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub title: Option<String>,
    /// CSS 颜色，始终带 `#`
    pub header_color: String,
    pub branding: Branding,
    pub body: WidgetBody,
}

// ==========================================
// Presenter - 视图组装
// ==========================================
pub struct Presenter<'a> {
    host: &'a dyn HostContext,
    formatter: &'a dyn MonthDayFormatter,
}

impl<'a> Presenter<'a> {
    pub fn new(host: &'a dyn HostContext, formatter: &'a dyn MonthDayFormatter) -> Self {
        Self { host, formatter }
    }

    /// 组装组件视图
    pub fn render(&self, view: &CelebrationView, config: &CelebrationConfig) -> WidgetView {
        let presentation = &config.presentation;

        let body = if view.is_hidden(config) {
            WidgetBody::Hidden
        } else {
            match view {
                CelebrationView::Loading => WidgetBody::Message(
                    presentation
                        .loading_message
                        .clone()
                        .unwrap_or_else(|| t("message.loading")),
                ),
                CelebrationView::Empty => WidgetBody::Message(
                    presentation
                        .no_instances_message
                        .clone()
                        .unwrap_or_else(|| t("message.empty")),
                ),
                CelebrationView::Groups(groups) => WidgetBody::Groups(
                    groups
                        .iter()
                        .map(|group| self.render_group(group, config))
                        .collect(),
                ),
            }
        };

        WidgetView {
            title: presentation.title.clone(),
            header_color: css_color(presentation.header_color.as_deref()),
            branding: self.host.branding(),
            body,
        }
    }

    fn render_group(&self, group: &BucketGroup, config: &CelebrationConfig) -> GroupView {
        GroupView {
            key: group.key,
            label: group.label.clone(),
            entries: group
                .records
                .iter()
                .map(|record| self.entry(record, config))
                .collect(),
        }
    }

    /// 单条记录视图
    pub fn entry(&self, record: &ProfileRecord, config: &CelebrationConfig) -> EntryView {
        let avatar_thumb = record.thumb_url().map(str::to_string);
        let initials = avatar_thumb.is_none().then(|| record.initials());

        let date = if config.presentation.show_date {
            record
                .non_empty_field(&config.anniversary_field_id)
                .and_then(|raw| DateCore::parse(raw, config.date_order).ok())
                .map(|parsed| self.formatter.format_month_day(parsed.reference_date()))
        } else {
            None
        };

        EntryView {
            id: record.id.clone(),
            display_name: record.display_name(),
            initials,
            avatar_thumb,
            profile_link: self.host.profile_link(&record.id),
            date,
        }
    }
}

/// 默认标题颜色
pub const DEFAULT_HEADER_COLOR: &str = "000000";

/// 规范化为 `#rrggbb` 形式；未配置时为黑色
pub fn css_color(raw: Option<&str>) -> String {
    let hex = raw
        .map(|value| value.trim().trim_start_matches('#'))
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_HEADER_COLOR);
    format!("#{}", hex)
}
