// ==========================================
// 纪念日名单引擎 - 宿主能力
// ==========================================
// 职责: 宿主注入的链接生成与品牌配色
// ==========================================

use serde::{Deserialize, Serialize};

/// 品牌配色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub background_color: String,
    pub text_color: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
        }
    }
}

/// 宿主能力
pub trait HostContext: Send + Sync {
    /// 人员主页链接
    fn profile_link(&self, user_id: &str) -> String;

    fn branding(&self) -> Branding;
}

/// 固定前端地址 + 固定配色
#[derive(Debug, Clone)]
pub struct StaticHost {
    frontend_url: String,
    branding: Branding,
}

impl StaticHost {
    pub fn new(frontend_url: &str) -> Self {
        Self {
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
            branding: Branding::default(),
        }
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }
}

impl HostContext for StaticHost {
    fn profile_link(&self, user_id: &str) -> String {
        format!("{}/profile/{}", self.frontend_url, user_id)
    }

    fn branding(&self) -> Branding {
        self.branding.clone()
    }
}
