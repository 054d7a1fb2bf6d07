//! Built-in sample dataset.
//!
//! # Responsibility
//! - Provide a small, deterministic dataset for the CLI probe and for
//!   integration tests that want realistic records.

use crate::model::record::{
    ActionItem, AuditItem, ComplianceItem, ComplianceStatus, RiskItem, RiskLevel, WorkStatus,
};
use crate::store::RecordStore;

/// Sample compliance requirements.
pub fn sample_compliance() -> Vec<ComplianceItem> {
    vec![
        ComplianceItem {
            id: "CMP-001".into(),
            name: "Information Security Management".into(),
            standard: "ISO 27001".into(),
            status: ComplianceStatus::Compliant,
            responsible: "IT Security Team".into(),
            score: 95,
            next_review: "2024-07-01".into(),
        },
        ComplianceItem {
            id: "CMP-003".into(),
            name: "Financial Controls Assessment".into(),
            standard: "SOX Compliance".into(),
            status: ComplianceStatus::InProgress,
            responsible: "Finance Team".into(),
            score: 78,
            next_review: "2024-04-10".into(),
        },
        ComplianceItem {
            id: "CMP-004".into(),
            name: "Information Classification".into(),
            standard: "ISO 27001".into(),
            status: ComplianceStatus::GapFound,
            responsible: "Data Protection Team".into(),
            score: 65,
            next_review: "2024-03-05".into(),
        },
    ]
}

/// Sample risk register entries.
pub fn sample_risks() -> Vec<RiskItem> {
    vec![
        RiskItem {
            id: "RSK-001".into(),
            title: "Data Breach Risk".into(),
            category: "Information Security".into(),
            level: RiskLevel::High,
            owner: "IT Security Team".into(),
            next_review: "2024-04-10".into(),
        },
        RiskItem {
            id: "RSK-002".into(),
            title: "Financial Fraud Risk".into(),
            category: "Financial".into(),
            level: RiskLevel::Critical,
            owner: "Finance Team".into(),
            next_review: "2024-03-05".into(),
        },
    ]
}

/// Sample corrective actions.
pub fn sample_actions() -> Vec<ActionItem> {
    vec![
        ActionItem {
            id: "ACT-001".into(),
            title: "Implement Strong Password Policy".into(),
            assignee: "IT Security Team".into(),
            status: WorkStatus::InProgress,
            priority: "High".into(),
            progress: 60,
            due_date: "2024-03-01".into(),
        },
        ActionItem {
            id: "ACT-002".into(),
            title: "Create Approval Documentation Process".into(),
            assignee: "Finance Team".into(),
            status: WorkStatus::Completed,
            priority: "Medium".into(),
            progress: 100,
            due_date: "2024-02-15".into(),
        },
    ]
}

/// Sample audit engagements.
pub fn sample_audits() -> Vec<AuditItem> {
    vec![
        AuditItem {
            id: "AUD-2024-001".into(),
            title: "Financial Controls Audit".into(),
            status: WorkStatus::InProgress,
            auditor: "Sarah Al-Mahmoud".into(),
            department: "Finance".into(),
            start_date: "2024-01-15".into(),
            end_date: "2024-02-15".into(),
            progress: 65,
        },
        AuditItem {
            id: "AUD-2024-002".into(),
            title: "IT Security Assessment".into(),
            status: WorkStatus::Completed,
            auditor: "Ahmed Al-Rashid".into(),
            department: "IT".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-30".into(),
            progress: 100,
        },
        AuditItem {
            id: "AUD-2024-003".into(),
            title: "Procurement Process Review".into(),
            status: WorkStatus::Pending,
            auditor: "Fatima Al-Zahra".into(),
            department: "Procurement".into(),
            start_date: "2024-02-01".into(),
            end_date: "2024-03-01".into(),
            progress: 0,
        },
    ]
}

/// A store pre-populated with the full sample dataset.
pub fn sample_store() -> RecordStore {
    RecordStore::with_records(
        sample_compliance(),
        sample_risks(),
        sample_actions(),
        sample_audits(),
    )
}
