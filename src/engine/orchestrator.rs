// ==========================================
// 纪念日名单引擎 - 引擎编排器
// ==========================================
// 用途: 串联准入 → 排序 → 分组 → 分组排序 → 截断
// 红线: 纯函数 (records, config, today) → 分组名单，无 I/O、无缓存
// ==========================================

use crate::config::CelebrationConfig;
use crate::domain::profile::ProfileRecord;
use crate::domain::types::{BucketKey, GroupingMode};
use crate::engine::date_core::{DateCore, ParsedDate};
use crate::engine::eligibility::{EligibilityFilter, EligibleRecord};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::{BucketClassifier, BucketLabeler, BucketOrderer, Limiter, RecordOrderer};
use serde::Serialize;
use tracing::{debug, info};

// ==========================================
// 输入 / 输出
// ==========================================

/// 名单加载状态
#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    /// 目录尚未拉取完成
    Pending,
    /// 已完整拉取
    Loaded(Vec<ProfileRecord>),
}

/// 一个分组
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketGroup {
    pub key: BucketKey,
    /// None 表示不展示标题
    pub label: Option<String>,
    pub records: Vec<ProfileRecord>,
}

/// 引擎输出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CelebrationView {
    /// 尚未加载完成
    Loading,
    /// 已加载但没有符合条件的人员
    Empty,
    /// 已排序、已截断的分组
    Groups(Vec<BucketGroup>),
}

impl CelebrationView {
    /// 输出的人员总数
    pub fn total_records(&self) -> usize {
        match self {
            CelebrationView::Groups(groups) => groups.iter().map(|g| g.records.len()).sum(),
            _ => 0,
        }
    }

    /// 空名单且配置了隐藏时，宿主应隐藏整个组件
    pub fn is_hidden(&self, config: &CelebrationConfig) -> bool {
        matches!(self, CelebrationView::Empty) && config.presentation.hide_empty_widget
    }
}

// ==========================================
// CelebrationEngine - 引擎编排器
// ==========================================
pub struct CelebrationEngine {
    config: CelebrationConfig,
}

impl CelebrationEngine {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 已校验的配置快照
    pub fn new(config: CelebrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CelebrationConfig {
        &self.config
    }

    /// 计算展示名单
    ///
    /// # 参数
    /// - roster: 名单加载状态
    /// - today: 今天（与纪念日字段同格式、同日月顺序的字符串）
    ///
    /// # 返回
    /// - Loading: 名单未加载
    /// - Empty: 名单已加载但无人入选
    /// - Groups: 分组结果
    ///
    /// # 错误
    /// - today 无法解析，或周年模式下 today 缺少年份
    pub fn evaluate(&self, roster: &Roster, today: &str) -> EngineResult<CelebrationView> {
        let today = self.parse_today(today)?;

        let records = match roster {
            Roster::Pending => return Ok(CelebrationView::Loading),
            Roster::Loaded(records) => records,
        };

        let groups = self.build_groups(records, &today);
        if groups.is_empty() {
            return Ok(CelebrationView::Empty);
        }

        Ok(CelebrationView::Groups(groups))
    }

    fn parse_today(&self, raw: &str) -> EngineResult<ParsedDate> {
        let today = DateCore::parse(raw, self.config.date_order).map_err(|source| {
            EngineError::InvalidToday {
                raw: raw.to_string(),
                source,
            }
        })?;

        if self.config.grouping.mode == GroupingMode::TenureYear && today.year.is_none() {
            return Err(EngineError::MissingTodayYear {
                raw: raw.to_string(),
            });
        }

        Ok(today)
    }

    #[tracing::instrument(
        skip_all,
        fields(records = records.len(), field = %self.config.anniversary_field_id)
    )]
    fn build_groups(&self, records: &[ProfileRecord], today: &ParsedDate) -> Vec<BucketGroup> {
        let config = &self.config;

        // ==========================================
        // 步骤1: 准入筛选
        // ==========================================
        let eligible: Vec<EligibleRecord<'_>> = records
            .iter()
            .filter_map(|record| {
                EligibilityFilter::evaluate(
                    record,
                    &config.anniversary_field_id,
                    config.date_order,
                    &config.filter,
                    &config.window,
                    today,
                )
                .map_err(|reason| {
                    debug!(record_id = %record.id, %reason, "记录未入选");
                })
                .ok()
            })
            .collect();

        // ==========================================
        // 步骤2: 全局按日差排序
        // ==========================================
        let eligible = RecordOrderer::order_records(eligible);

        // ==========================================
        // 步骤3: 分组
        // ==========================================
        let buckets = BucketClassifier::classify(&eligible, &config.grouping, today);

        // ==========================================
        // 步骤4: 分组排序 + 截断
        // ==========================================
        let ordered_keys =
            BucketOrderer::order(buckets.keys().copied().collect(), &config.grouping);
        let ordered: Vec<(BucketKey, Vec<EligibleRecord<'_>>)> = ordered_keys
            .into_iter()
            .filter_map(|key| buckets.get(&key).map(|entries| (key, entries.clone())))
            .collect();
        let limited = Limiter::apply(ordered, config.grouping.limit);

        let groups: Vec<BucketGroup> = limited
            .into_iter()
            .map(|(key, entries)| BucketGroup {
                key,
                label: BucketLabeler::header(&key, config),
                records: entries.iter().map(|e| e.record.clone()).collect(),
            })
            .collect();

        info!(
            eligible = eligible.len(),
            groups = groups.len(),
            emitted = groups.iter().map(|g| g.records.len()).sum::<usize>(),
            "名单计算完成"
        );

        groups
    }
}
