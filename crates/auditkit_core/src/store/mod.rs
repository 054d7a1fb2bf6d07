//! Owned in-memory record collections.
//!
//! # Responsibility
//! - Hold the record collections previously scattered across view-local
//!   state, behind one owner.
//! - Hand out immutable slice snapshots for the pure aggregation and
//!   metrics functions.
//!
//! # Invariants
//! - The aggregator and services never see this type; they take snapshots.
//! - Request ids are assigned here, sequentially per store, as `REQ-NNN`.

use crate::model::record::{ActionItem, AuditItem, ComplianceItem, RiskItem};
use crate::service::intake::{accept_request, DataRequest, IntakeResult, NewDataRequest};

/// Single owner of all in-memory record collections.
#[derive(Debug, Default)]
pub struct RecordStore {
    compliance: Vec<ComplianceItem>,
    risks: Vec<RiskItem>,
    actions: Vec<ActionItem>,
    audits: Vec<AuditItem>,
    requests: Vec<DataRequest>,
    next_request_seq: u32,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given collections.
    pub fn with_records(
        compliance: Vec<ComplianceItem>,
        risks: Vec<RiskItem>,
        actions: Vec<ActionItem>,
        audits: Vec<AuditItem>,
    ) -> Self {
        Self {
            compliance,
            risks,
            actions,
            audits,
            requests: Vec::new(),
            next_request_seq: 0,
        }
    }

    pub fn add_compliance(&mut self, item: ComplianceItem) {
        self.compliance.push(item);
    }

    pub fn add_risk(&mut self, risk: RiskItem) {
        self.risks.push(risk);
    }

    pub fn add_action(&mut self, action: ActionItem) {
        self.actions.push(action);
    }

    /// Adds a newly created audit at the front of the list, so the audit
    /// view shows the latest engagement first.
    pub fn add_audit(&mut self, audit: AuditItem) {
        self.audits.insert(0, audit);
    }

    /// Validates and records a new data request, assigning its id.
    ///
    /// Returns a copy of the accepted request, or the intake validation
    /// error; a rejected submission consumes no id.
    pub fn submit_request(&mut self, input: NewDataRequest) -> IntakeResult<DataRequest> {
        let id = format!("REQ-{:03}", self.next_request_seq + 1);
        let request = accept_request(id, input)?;
        self.next_request_seq += 1;
        log::info!(
            "event=request_accepted module=store status=ok id={} routed_to={:?}",
            request.id,
            request.routed_to
        );
        self.requests.push(request.clone());
        Ok(request)
    }

    pub fn compliance(&self) -> &[ComplianceItem] {
        &self.compliance
    }

    pub fn risks(&self) -> &[RiskItem] {
        &self.risks
    }

    pub fn actions(&self) -> &[ActionItem] {
        &self.actions
    }

    pub fn audits(&self) -> &[AuditItem] {
        &self.audits
    }

    pub fn requests(&self) -> &[DataRequest] {
        &self.requests
    }
}
