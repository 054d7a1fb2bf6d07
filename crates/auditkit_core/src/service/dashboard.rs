//! Derived dashboard metrics.
//!
//! # Responsibility
//! - Compute the counts and percentages shown on the overview dashboard
//!   from immutable record snapshots.
//!
//! # Invariants
//! - Pure functions, recomputed fully per call; no caching.
//! - Empty inputs produce zero rates, never a division by zero.

use crate::calendar::aggregate::parse_event_date;
use crate::model::record::{
    ActionItem, AuditItem, ComplianceItem, ComplianceStatus, RiskItem, RiskLevel, WorkStatus,
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Snapshot of the headline numbers for the overview dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    pub total_audits: usize,
    pub completed_audits: usize,
    pub in_progress_audits: usize,
    pub pending_audits: usize,
    /// Rounded percent of audits completed; 0 when there are no audits.
    pub completion_rate_pct: u32,
    /// Rounded percent of compliance items assessed `Compliant`; 0 when
    /// there are no compliance items.
    pub compliance_rate_pct: u32,
    /// Risk register entries grouped by severity level.
    pub risks_by_level: HashMap<RiskLevel, usize>,
    /// Actions not completed whose due date is before `as_of`. Actions with
    /// malformed due dates are not counted.
    pub overdue_actions: usize,
}

/// Rounded percentage of `part` in `total`, 0 when `total` is 0.
fn rate_pct(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Computes dashboard metrics from record snapshots.
///
/// `as_of` is the calendar day used for the overdue-action cutoff; an action
/// is overdue when its due date falls strictly before that day and it is not
/// completed.
pub fn compute_metrics(
    audits: &[AuditItem],
    compliance: &[ComplianceItem],
    risks: &[RiskItem],
    actions: &[ActionItem],
    as_of: NaiveDate,
) -> DashboardMetrics {
    let completed_audits = audits
        .iter()
        .filter(|audit| audit.status == WorkStatus::Completed)
        .count();
    let in_progress_audits = audits
        .iter()
        .filter(|audit| audit.status == WorkStatus::InProgress)
        .count();
    let pending_audits = audits
        .iter()
        .filter(|audit| audit.status == WorkStatus::Pending)
        .count();

    let compliant = compliance
        .iter()
        .filter(|item| item.status == ComplianceStatus::Compliant)
        .count();

    let mut risks_by_level = HashMap::new();
    for risk in risks {
        *risks_by_level.entry(risk.level).or_insert(0) += 1;
    }

    let overdue_actions = actions
        .iter()
        .filter(|action| action.status != WorkStatus::Completed)
        .filter(|action| {
            parse_event_date(&action.due_date).is_some_and(|due| due < as_of)
        })
        .count();

    DashboardMetrics {
        total_audits: audits.len(),
        completed_audits,
        in_progress_audits,
        pending_audits,
        completion_rate_pct: rate_pct(completed_audits, audits.len()),
        compliance_rate_pct: rate_pct(compliant, compliance.len()),
        risks_by_level,
        overdue_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::rate_pct;

    #[test]
    fn rate_pct_rounds_half_up() {
        assert_eq!(rate_pct(1, 3), 33);
        assert_eq!(rate_pct(2, 3), 67);
        assert_eq!(rate_pct(1, 2), 50);
    }

    #[test]
    fn rate_pct_guards_empty_total() {
        assert_eq!(rate_pct(0, 0), 0);
    }
}
