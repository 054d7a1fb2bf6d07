use auditkit_core::{
    ActionItem, AuditItem, ComplianceItem, ComplianceStatus, RiskItem, RiskLevel, WorkStatus,
};

#[test]
fn compliance_new_sets_defaults() {
    let item = ComplianceItem::new(
        "CMP-001",
        "Information Security Management",
        ComplianceStatus::Compliant,
        "2024-07-01",
    );

    assert_eq!(item.id, "CMP-001");
    assert_eq!(item.status, ComplianceStatus::Compliant);
    assert_eq!(item.next_review, "2024-07-01");
    assert!(item.standard.is_empty());
    assert!(item.responsible.is_empty());
    assert_eq!(item.score, 0);
}

#[test]
fn action_new_sets_defaults() {
    let action = ActionItem::new(
        "ACT-001",
        "Implement Strong Password Policy",
        WorkStatus::Pending,
        "2024-03-01",
    );

    assert_eq!(action.due_date, "2024-03-01");
    assert_eq!(action.status, WorkStatus::Pending);
    assert_eq!(action.progress, 0);
    assert!(action.assignee.is_empty());
}

#[test]
fn audit_new_sets_defaults() {
    let audit = AuditItem::new("AUD-2024-001", "Financial Controls Audit", WorkStatus::Pending);

    assert_eq!(audit.id, "AUD-2024-001");
    assert_eq!(audit.progress, 0);
    assert!(audit.start_date.is_empty());
    assert!(audit.end_date.is_empty());
}

#[test]
fn status_labels_match_display_vocabulary() {
    assert_eq!(ComplianceStatus::GapFound.label(), "Gap Found");
    assert_eq!(ComplianceStatus::InProgress.label(), "In Progress");
    assert_eq!(RiskLevel::Critical.label(), "Critical");
    assert_eq!(WorkStatus::Completed.label(), "Completed");
}

#[test]
fn risk_serialization_uses_expected_wire_fields() {
    let mut risk = RiskItem::new("RSK-001", "Data Breach Risk", RiskLevel::High, "2024-04-10");
    risk.category = "Information Security".to_string();
    risk.owner = "IT Security Team".to_string();

    let json = serde_json::to_value(&risk).unwrap();
    assert_eq!(json["id"], "RSK-001");
    assert_eq!(json["title"], "Data Breach Risk");
    assert_eq!(json["level"], "high");
    assert_eq!(json["next_review"], "2024-04-10");

    let decoded: RiskItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, risk);
}

#[test]
fn work_status_serializes_snake_case() {
    let json = serde_json::to_value(WorkStatus::InProgress).unwrap();
    assert_eq!(json, "in_progress");
}
