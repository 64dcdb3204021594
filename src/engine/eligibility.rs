// ==========================================
// 纪念日名单引擎 - 准入筛选
// ==========================================
// 职责: 逐条判定记录是否进入展示名单
// 输入: ProfileRecord + 字段/窗口配置 + 今天
// 输出: 解析后的日期与比较结果，或剔除原因
// ==========================================
// 判定顺序（命中即返回）:
// 1. 纪念日字段必须存在且非空
// 2. 配置了筛选字段: 值须（大小写不敏感）命中白名单
// 3. 配置了退出字段: 值命中退出列表则剔除
// 4. 日期可解析
// 5. 落在窗口内（整月模式按同月判定）
// ==========================================

use crate::config::{FilterConfig, WindowConfig};
use crate::domain::profile::ProfileRecord;
use crate::domain::types::DateOrder;
use crate::engine::date_core::{DateComparison, DateCore, ParsedDate};
use crate::engine::error::ExclusionReason;

/// 通过准入的记录
#[derive(Debug, Clone, Copy)]
pub struct EligibleRecord<'a> {
    pub record: &'a ProfileRecord,
    /// 纪念日字段原始值
    pub raw: &'a str,
    pub date: ParsedDate,
    /// 与今天的比较结果
    pub comparison: DateComparison,
}

// ==========================================
// EligibilityFilter - 准入筛选
// ==========================================
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// 评估单条记录
    ///
    /// # 返回
    /// - Ok(EligibleRecord): 通过
    /// - Err(ExclusionReason): 剔除原因（调用方记日志，不上抛）
    pub fn evaluate<'a>(
        record: &'a ProfileRecord,
        field_id: &str,
        order: DateOrder,
        filter: &FilterConfig,
        window: &WindowConfig,
        today: &ParsedDate,
    ) -> Result<EligibleRecord<'a>, ExclusionReason> {
        // 规则 1: 纪念日字段
        let raw = record
            .non_empty_field(field_id)
            .ok_or_else(|| ExclusionReason::MissingField {
                field: field_id.to_string(),
            })?;

        // 规则 2: 白名单
        if let Some(field) = &filter.field_filter {
            let value = record
                .non_empty_field(field)
                .ok_or_else(|| ExclusionReason::MissingField {
                    field: field.clone(),
                })?;
            if !matches_any(value, &filter.field_values) {
                return Err(ExclusionReason::FilterMismatch {
                    field: field.clone(),
                    value: value.to_string(),
                });
            }
        }

        // 规则 3: 退出名单
        if let Some(field) = &filter.opt_out_field {
            if let Some(value) = record.field(field) {
                if matches_any(value, &filter.opt_out_values) {
                    return Err(ExclusionReason::OptedOut {
                        field: field.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        // 规则 4: 解析
        let date = DateCore::parse(raw, order)?;
        let comparison = DateCore::compare(&date, today);

        // 规则 5: 窗口
        let days_since_month_start = DateCore::days_since_month_start(today)?;
        if !Self::within_window(&comparison, window, days_since_month_start) {
            return Err(ExclusionReason::OutsideWindow {
                day_offset: comparison.day_offset,
            });
        }

        Ok(EligibleRecord {
            record,
            raw,
            date,
            comparison,
        })
    }

    /// 仅返回是否通过
    pub fn is_eligible(
        record: &ProfileRecord,
        field_id: &str,
        order: DateOrder,
        filter: &FilterConfig,
        window: &WindowConfig,
        today: &ParsedDate,
    ) -> bool {
        Self::evaluate(record, field_id, order, filter, window, today).is_ok()
    }

    /// 窗口判定
    ///
    /// # 规则
    /// - 整月模式: 同月 且 今天距月初天数 ≥ 0
    /// - 否则: 同日，或 day_offset ∈ [-days_before, -1]，或 day_offset ∈ [1, days_after]
    pub fn within_window(
        comparison: &DateComparison,
        window: &WindowConfig,
        days_since_month_start: i64,
    ) -> bool {
        if window.whole_month_mode {
            return comparison.same_month && days_since_month_start >= 0;
        }

        let offset = comparison.day_offset;
        comparison.same_date
            || (offset >= -i64::from(window.days_before) && offset < 0)
            || (offset <= i64::from(window.days_after) && offset > 0)
    }
}

/// 大小写不敏感匹配（列表已是小写）
fn matches_any(value: &str, allowed: &[String]) -> bool {
    let value = value.trim().to_lowercase();
    allowed.iter().any(|candidate| *candidate == value)
}
