// ==========================================
// 纪念日名单引擎 - 人员档案实体
// ==========================================
// 职责: 目录服务返回的人员记录（引擎只读）
// ==========================================

use crate::domain::types::UserStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ProfileRecord - 人员档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub avatar: Option<Avatar>,

    #[serde(default)]
    pub status: UserStatus,

    /// 档案字段: 字段 ID → 原始字符串值
    #[serde(default)]
    pub profile: HashMap<String, String>,
}

/// 头像引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    #[serde(default)]
    pub thumb: Option<AvatarImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarImage {
    pub url: String,
}

impl ProfileRecord {
    pub fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            avatar: None,
            status: UserStatus::Activated,
            profile: HashMap::new(),
        }
    }

    /// 读取档案字段的原始值（不做空值过滤）
    pub fn field(&self, field_id: &str) -> Option<&str> {
        self.profile.get(field_id).map(String::as_str)
    }

    /// 读取非空档案字段
    pub fn non_empty_field(&self, field_id: &str) -> Option<&str> {
        self.field(field_id).filter(|v| !v.is_empty())
    }

    /// 展示名: "名 姓"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// 无头像时的首字母占位
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// 头像缩略图 URL
    ///
    /// 有头像但无缩略图时返回空串，与无头像区分
    pub fn thumb_url(&self) -> Option<&str> {
        self.avatar.as_ref().map(|avatar| {
            avatar
                .thumb
                .as_ref()
                .map(|thumb| thumb.url.as_str())
                .unwrap_or("")
        })
    }
}
