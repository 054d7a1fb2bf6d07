//! CLI smoke entry point.
//!
//! # Responsibility
//! - Aggregate the built-in sample dataset and print the headline numbers,
//!   to verify `auditkit_core` wiring without any UI.
//! - Keep output deterministic for quick local sanity checks.

use auditkit_core::samples::sample_store;
use auditkit_core::{aggregate, compute_metrics, filter_by_type, EventFilter, EventType};
use chrono::NaiveDate;

fn main() {
    let store = sample_store();
    let aggregation = aggregate(store.compliance(), store.risks(), store.actions());

    println!("auditkit_core version={}", auditkit_core::core_version());
    println!(
        "events total={} skipped={}",
        aggregation.events.len(),
        aggregation.skipped_count()
    );
    for kind in [EventType::Compliance, EventType::Risk, EventType::Action] {
        let count = filter_by_type(&aggregation.events, EventFilter::Only(kind)).len();
        println!("events type={kind} count={count}");
    }

    // Fixed as-of day so repeated runs over the sample data agree.
    let as_of = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid as-of date");
    let metrics = compute_metrics(
        store.audits(),
        store.compliance(),
        store.risks(),
        store.actions(),
        as_of,
    );
    println!(
        "audits total={} completed={} completion_rate={}%",
        metrics.total_audits, metrics.completed_audits, metrics.completion_rate_pct
    );
    println!(
        "compliance_rate={}% overdue_actions={}",
        metrics.compliance_rate_pct, metrics.overdue_actions
    );
}
