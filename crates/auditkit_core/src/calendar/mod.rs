//! Calendar event aggregation.
//!
//! # Responsibility
//! - Merge the three source collections into one unified event list.
//! - Answer the two calendar-view queries: type filtering and same-day
//!   lookup.
//!
//! # Invariants
//! - Aggregation is pure and stateless; callers pass immutable snapshots and
//!   the full result is recomputed on every call.
//! - A record with an unparseable date is reported, never silently carried
//!   as an invalid event and never fatal to the rest of the batch.

pub mod aggregate;
