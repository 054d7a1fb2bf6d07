//! Use-case services over the domain model.
//!
//! # Responsibility
//! - Derive dashboard metrics from record snapshots.
//! - Filter audit lists for the search view.
//! - Validate and route incoming data requests.

pub mod audit_search;
pub mod dashboard;
pub mod intake;
