//! Source record models.
//!
//! # Responsibility
//! - Define the four record kinds owned by the compliance, risk, action and
//!   audit areas, with their status vocabularies.
//! - Provide constructors that fill the fields forms always supply.
//!
//! # Invariants
//! - `id` is unique within its own record kind, not across kinds. Unified
//!   identity uses the composite key on the event projection instead.
//! - Date fields (`next_review`, `due_date`, `start_date`, `end_date`) hold
//!   raw ISO strings; they are validated when events are aggregated.

use serde::{Deserialize, Serialize};

/// Assessment outcome of a compliance requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    InProgress,
    GapFound,
}

impl ComplianceStatus {
    /// Human-readable label used as the event tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::InProgress => "In Progress",
            Self::GapFound => "Gap Found",
        }
    }
}

/// Severity level of a risk register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Human-readable label used as the event tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Lifecycle state shared by corrective actions and audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Pending,
    InProgress,
    Completed,
}

impl WorkStatus {
    /// Human-readable label used as the event tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// One compliance requirement tracked against a standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub name: String,
    /// Standard the requirement belongs to, e.g. "ISO 27001".
    pub standard: String,
    pub status: ComplianceStatus,
    /// Team accountable for keeping the requirement satisfied.
    pub responsible: String,
    /// Assessment score, 0..=100.
    pub score: u8,
    /// ISO date string of the next scheduled review.
    pub next_review: String,
}

impl ComplianceItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: ComplianceStatus,
        next_review: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            standard: String::new(),
            status,
            responsible: String::new(),
            score: 0,
            next_review: next_review.into(),
        }
    }
}

/// One entry in the risk register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: String,
    pub title: String,
    /// Risk domain, e.g. "Information Security".
    pub category: String,
    pub level: RiskLevel,
    pub owner: String,
    /// ISO date string of the next scheduled review.
    pub next_review: String,
}

impl RiskItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        level: RiskLevel,
        next_review: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: String::new(),
            level,
            owner: String::new(),
            next_review: next_review.into(),
        }
    }
}

/// A corrective action raised from an audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub status: WorkStatus,
    pub priority: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// ISO date string of the action deadline.
    pub due_date: String,
}

impl ActionItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: WorkStatus,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            assignee: String::new(),
            status,
            priority: String::new(),
            progress: 0,
            due_date: due_date.into(),
        }
    }
}

/// One audit engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditItem {
    pub id: String,
    pub title: String,
    pub status: WorkStatus,
    pub auditor: String,
    pub department: String,
    /// ISO date string of the engagement start.
    pub start_date: String,
    /// ISO date string of the engagement end.
    pub end_date: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

impl AuditItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: WorkStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            auditor: String::new(),
            department: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            progress: 0,
        }
    }
}
