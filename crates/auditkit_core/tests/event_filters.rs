use auditkit_core::{
    aggregate, events_on_date, filter_by_type, ActionItem, ComplianceItem, ComplianceStatus,
    EventFilter, EventType, RiskItem, RiskLevel, WorkStatus,
};
use chrono::NaiveDate;

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid test date")
}

fn sample_events() -> Vec<auditkit_core::CalendarEvent> {
    let compliance = vec![
        ComplianceItem::new("CMP-1", "ISMS Review", ComplianceStatus::Compliant, "2024-07-01"),
        ComplianceItem::new("CMP-2", "SOX Assessment", ComplianceStatus::InProgress, "2024-04-10"),
    ];
    let risks = vec![
        RiskItem::new("RSK-1", "Data Breach Risk", RiskLevel::High, "2024-04-10"),
        RiskItem::new("RSK-2", "Fraud Risk", RiskLevel::Critical, "2024-03-05"),
    ];
    let actions = vec![ActionItem::new(
        "ACT-1",
        "Password Policy",
        WorkStatus::InProgress,
        "2024-04-10",
    )];
    aggregate(&compliance, &risks, &actions).events
}

#[test]
fn filter_all_is_identity() {
    let events = sample_events();

    let filtered = filter_by_type(&events, EventFilter::All);

    assert_eq!(filtered, events);
}

#[test]
fn type_filters_are_sound_and_complete() {
    let events = sample_events();

    for kind in [EventType::Compliance, EventType::Risk, EventType::Action] {
        let filtered = filter_by_type(&events, EventFilter::Only(kind));
        assert!(filtered.iter().all(|event| event.event_type() == kind));

        let expected = events
            .iter()
            .filter(|event| event.event_type() == kind)
            .count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn filter_preserves_input_order() {
    let events = sample_events();

    let risks_only = filter_by_type(&events, EventFilter::Only(EventType::Risk));

    let ids: Vec<&str> = risks_only.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["RSK-1", "RSK-2"]);
}

#[test]
fn events_on_date_matches_same_day_across_kinds() {
    let events = sample_events();

    let on_day = events_on_date(&events, day(2024, 4, 10));

    let ids: Vec<&str> = on_day.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["CMP-2", "RSK-1", "ACT-1"]);
}

#[test]
fn events_on_date_is_idempotent() {
    let events = sample_events();

    let first = events_on_date(&events, day(2024, 4, 10));
    let second = events_on_date(&events, day(2024, 4, 10));

    assert_eq!(first, second);
}

#[test]
fn events_on_date_returns_empty_when_nothing_matches() {
    let events = sample_events();

    assert!(events_on_date(&events, day(2030, 1, 1)).is_empty());
}

#[test]
fn event_filter_parses_user_selection() {
    assert_eq!("all".parse::<EventFilter>(), Ok(EventFilter::All));
    assert_eq!(
        " Compliance ".parse::<EventFilter>(),
        Ok(EventFilter::Only(EventType::Compliance))
    );
    assert_eq!(
        "risk".parse::<EventFilter>(),
        Ok(EventFilter::Only(EventType::Risk))
    );
    assert_eq!(
        "action".parse::<EventFilter>(),
        Ok(EventFilter::Only(EventType::Action))
    );

    let error = "everything".parse::<EventFilter>().unwrap_err();
    assert!(error.to_string().contains("everything"));
}
