//! Domain model for audit, compliance and calendar data.
//!
//! # Responsibility
//! - Define the canonical source records owned by each functional area.
//! - Define the unified calendar-event projection derived from them.
//!
//! # Invariants
//! - Source records keep their date fields as the raw ISO strings they were
//!   entered with; parsing happens only at the aggregation boundary.
//! - A calendar event is derived state recomputed from scratch on every
//!   aggregation pass, never mutated or stored on its own.

pub mod event;
pub mod record;
