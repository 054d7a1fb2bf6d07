//! Core domain logic for the auditkit audit-management demo.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod samples;
pub mod service;
pub mod store;

pub use calendar::aggregate::{
    aggregate, events_on_date, filter_by_type, Aggregation, MalformedDateError,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{CalendarEvent, EventFilter, EventKey, EventSource, EventType};
pub use model::record::{
    ActionItem, AuditItem, ComplianceItem, ComplianceStatus, RiskItem, RiskLevel, WorkStatus,
};
pub use service::audit_search::{filter_audits, AuditQuery};
pub use service::dashboard::{compute_metrics, DashboardMetrics};
pub use service::intake::{
    Classification, DataRequest, Department, IntakeError, NewDataRequest, RequestStatus,
};
pub use store::RecordStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
