//! Data-request intake.
//!
//! # Responsibility
//! - Validate incoming dataset requests (presence checks only).
//! - Route accepted requests to the owning department by classification.
//!
//! # Invariants
//! - A request is never accepted with a blank requester, dataset or purpose.
//! - Classified requests always route to legal affairs and require an NDA.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Validation error for a submitted data request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// A required field was missing or blank.
    MissingField(&'static str),
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is blank"),
        }
    }
}

impl Error for IntakeError {}

/// Sensitivity classification of the requested dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Public,
    Internal,
    Classified,
}

/// Department a request is routed to for handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    OpenData,
    DataGovernance,
    LegalAffairs,
}

/// Tracking state of a data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Submitted,
    InReview,
    Approved,
    Rejected,
}

/// Form input for a new data request, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDataRequest {
    pub requester: String,
    pub organization: String,
    pub dataset: String,
    pub purpose: String,
    pub classification: Classification,
}

/// An accepted, routed data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Store-assigned id of the form `REQ-NNN`.
    pub id: String,
    pub requester: String,
    pub organization: String,
    pub dataset: String,
    pub purpose: String,
    pub classification: Classification,
    pub routed_to: Department,
    /// Whether access is gated on a signed NDA.
    pub nda_required: bool,
    pub status: RequestStatus,
}

/// Returns the department owning requests of the given classification.
pub fn route(classification: Classification) -> Department {
    match classification {
        Classification::Public => Department::OpenData,
        Classification::Internal => Department::DataGovernance,
        Classification::Classified => Department::LegalAffairs,
    }
}

/// Validates form input and produces a routed request with the given id.
///
/// # Contract
/// - `requester`, `dataset` and `purpose` must be non-blank after trimming;
///   the first blank field is reported. `organization` may be empty.
/// - The accepted request starts in `RequestStatus::Submitted` and carries
///   `nda_required = true` exactly for classified datasets.
pub fn accept_request(id: impl Into<String>, input: NewDataRequest) -> IntakeResult<DataRequest> {
    require_present("requester", &input.requester)?;
    require_present("dataset", &input.dataset)?;
    require_present("purpose", &input.purpose)?;

    let routed_to = route(input.classification);
    Ok(DataRequest {
        id: id.into(),
        requester: input.requester,
        organization: input.organization,
        dataset: input.dataset,
        purpose: input.purpose,
        classification: input.classification,
        routed_to,
        nda_required: input.classification == Classification::Classified,
        status: RequestStatus::Submitted,
    })
}

fn require_present(field: &'static str, value: &str) -> IntakeResult<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::MissingField(field));
    }
    Ok(())
}
