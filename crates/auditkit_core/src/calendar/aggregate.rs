//! Event aggregator over compliance, risk and action records.
//!
//! # Responsibility
//! - Project each source record into one `CalendarEvent` keyed by its
//!   scheduling date.
//! - Keep malformed-date records out of the event list while reporting them
//!   to the caller.
//!
//! # Invariants
//! - Result order is compliance, then risk, then action, each stable in the
//!   input order. No de-duplication, no cross-kind sort.
//! - Day-equality compares calendar days only; any time-of-day component in
//!   a source string is dropped at parse time.

use crate::model::event::{CalendarEvent, EventFilter, EventSource, EventType};
use crate::model::record::{ActionItem, ComplianceItem, RiskItem};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One source record rejected because its date field did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDateError {
    /// Record kind the rejected record belongs to.
    pub kind: EventType,
    /// Id of the rejected record, unique within `kind`.
    pub id: String,
    /// The raw date string that failed to parse.
    pub raw: String,
}

impl Display for MalformedDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} record `{}` has malformed date `{}`; expected an ISO-8601 calendar date",
            self.kind, self.id, self.raw
        )
    }
}

impl Error for MalformedDateError {}

/// Outcome of one aggregation pass.
///
/// Aggregation is total: bad records land in `skipped` instead of aborting
/// the pass, so the calendar can render the good events and surface a
/// skipped-record count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Successfully projected events, in (compliance, risk, action) order.
    pub events: Vec<CalendarEvent>,
    /// Per-record failures, in the order they were encountered.
    pub skipped: Vec<MalformedDateError>,
}

impl Aggregation {
    /// Number of records excluded for malformed dates.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parses an event date string down to its calendar day.
///
/// Accepts a plain `YYYY-MM-DD` date, a naive ISO datetime, or an RFC 3339
/// datetime. Time-of-day and offset are discarded; only the calendar day
/// survives. Returns `None` for anything else.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    None
}

/// Merges the three source collections into one unified event list.
///
/// # Contract
/// - Emits one event per record: compliance and risk use `next_review`,
///   actions use `due_date`.
/// - With all dates well-formed, the result holds exactly
///   `compliance.len() + risks.len() + actions.len()` events.
/// - Records whose date fails to parse are excluded and reported in
///   `Aggregation::skipped` with their id and kind.
pub fn aggregate(
    compliance: &[ComplianceItem],
    risks: &[RiskItem],
    actions: &[ActionItem],
) -> Aggregation {
    let mut result = Aggregation::default();

    for item in compliance {
        push_event(
            &mut result,
            &item.id,
            &item.name,
            &item.next_review,
            EventSource::Compliance {
                status: item.status,
            },
        );
    }
    for risk in risks {
        push_event(
            &mut result,
            &risk.id,
            &risk.title,
            &risk.next_review,
            EventSource::Risk { level: risk.level },
        );
    }
    for action in actions {
        push_event(
            &mut result,
            &action.id,
            &action.title,
            &action.due_date,
            EventSource::Action {
                status: action.status,
            },
        );
    }

    if !result.skipped.is_empty() {
        log::warn!(
            "event=aggregate_skipped module=calendar status=partial skipped={} emitted={}",
            result.skipped.len(),
            result.events.len()
        );
    }

    result
}

fn push_event(result: &mut Aggregation, id: &str, title: &str, raw_date: &str, source: EventSource) {
    match parse_event_date(raw_date) {
        Some(date) => result.events.push(CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            date,
            source,
        }),
        None => {
            let kind = match source {
                EventSource::Compliance { .. } => EventType::Compliance,
                EventSource::Risk { .. } => EventType::Risk,
                EventSource::Action { .. } => EventType::Action,
            };
            result.skipped.push(MalformedDateError {
                kind,
                id: id.to_string(),
                raw: raw_date.to_string(),
            });
        }
    }
}

/// Returns the events passing the type filter, in input order.
///
/// `EventFilter::All` returns every input event unchanged.
pub fn filter_by_type(events: &[CalendarEvent], filter: EventFilter) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

/// Returns every event falling on the same calendar day as `day`.
///
/// Total and idempotent; returns an empty list when nothing matches.
pub fn events_on_date(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.date == day)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_event_date;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).expect("valid test date")
    }

    #[test]
    fn parse_accepts_plain_iso_date() {
        assert_eq!(parse_event_date("2024-07-01"), Some(day(2024, 7, 1)));
        assert_eq!(parse_event_date("  2024-07-01  "), Some(day(2024, 7, 1)));
    }

    #[test]
    fn parse_truncates_time_of_day() {
        assert_eq!(
            parse_event_date("2024-07-01T10:30:00"),
            Some(day(2024, 7, 1))
        );
        assert_eq!(
            parse_event_date("2024-07-01T23:59:00+02:00"),
            Some(day(2024, 7, 1))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_event_date("not-a-date").is_none());
        assert!(parse_event_date("").is_none());
        assert!(parse_event_date("2024-13-40").is_none());
    }
}
