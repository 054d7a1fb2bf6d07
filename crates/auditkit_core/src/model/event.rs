//! Unified calendar-event projection.
//!
//! # Responsibility
//! - Represent one date-bound occurrence derived from a compliance, risk or
//!   action record in a single display-ready shape.
//! - Make the per-kind "tag" meaning explicit through a tagged source
//!   variant instead of a loose shared field.
//!
//! # Invariants
//! - `date` equals the parsed calendar day of the source record's date field.
//! - Source ids are unique only within their own kind; `key()` is the only
//!   identity safe to compare across kinds.

use crate::model::record::{ComplianceStatus, RiskLevel, WorkStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which record kind an event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Compliance,
    Risk,
    Action,
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Compliance => "compliance",
            Self::Risk => "risk",
            Self::Action => "action",
        };
        write!(f, "{name}")
    }
}

/// Kind-specific payload carried by an event.
///
/// The variant fixes what the display tag means: compliance and action events
/// tag their status, risk events tag their severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventSource {
    Compliance { status: ComplianceStatus },
    Risk { level: RiskLevel },
    Action { status: WorkStatus },
}

/// Composite identity of an event: source kind plus source record id.
///
/// Source ids are generated independently per kind, so the id alone is not
/// unique across the merged event list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKey {
    pub kind: EventType,
    pub source_id: String,
}

/// One unified calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Id of the source record, unique only within `event_type()`.
    pub id: String,
    pub title: String,
    /// Calendar day the event falls on; time-of-day is never carried.
    pub date: NaiveDate,
    pub source: EventSource,
}

impl CalendarEvent {
    /// Returns the source kind of this event.
    pub fn event_type(&self) -> EventType {
        match self.source {
            EventSource::Compliance { .. } => EventType::Compliance,
            EventSource::Risk { .. } => EventType::Risk,
            EventSource::Action { .. } => EventType::Action,
        }
    }

    /// Returns the display tag: status label for compliance and action
    /// events, severity label for risk events.
    pub fn tag(&self) -> &'static str {
        match self.source {
            EventSource::Compliance { status } => status.label(),
            EventSource::Risk { level } => level.label(),
            EventSource::Action { status } => status.label(),
        }
    }

    /// Returns the cross-kind unique identity of this event.
    pub fn key(&self) -> EventKey {
        EventKey {
            kind: self.event_type(),
            source_id: self.id.clone(),
        }
    }
}

/// User-selected type filter for the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Only(EventType),
}

impl EventFilter {
    /// Returns whether `event` passes this filter.
    pub fn matches(self, event: &CalendarEvent) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => event.event_type() == kind,
        }
    }
}

/// Error for unrecognized filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(pub String);

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown event filter `{}`; expected all|compliance|risk|action",
            self.0
        )
    }
}

impl std::error::Error for ParseFilterError {}

impl FromStr for EventFilter {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "compliance" => Ok(Self::Only(EventType::Compliance)),
            "risk" => Ok(Self::Only(EventType::Risk)),
            "action" => Ok(Self::Only(EventType::Action)),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}
