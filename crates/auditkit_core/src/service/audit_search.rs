//! Audit list search and filtering.
//!
//! # Responsibility
//! - Narrow an audit snapshot by free text and status for the list view.
//!
//! # Invariants
//! - Matching is case-insensitive over id, title and auditor.
//! - Text and status conditions combine with AND; blank text matches all.

use crate::model::record::{AuditItem, WorkStatus};

/// Search options for the audit list view.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Free text matched against id, title and auditor. Blank matches all.
    pub text: String,
    /// Optional status filter; `None` keeps every status.
    pub status: Option<WorkStatus>,
}

impl AuditQuery {
    /// Creates a text-only query with no status filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
        }
    }

    /// Returns this query narrowed to one status.
    pub fn with_status(mut self, status: WorkStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn matches(&self, audit: &AuditItem) -> bool {
        if let Some(status) = self.status {
            if audit.status != status {
                return false;
            }
        }
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&audit.id, &audit.title, &audit.auditor]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the audits matching `query`, in input order.
pub fn filter_audits(audits: &[AuditItem], query: &AuditQuery) -> Vec<AuditItem> {
    audits
        .iter()
        .filter(|audit| query.matches(audit))
        .cloned()
        .collect()
}
