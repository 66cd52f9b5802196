//! Flow synchronization errors.

use crate::kind::FlowKind;
use hf_air::AirError;
use hf_core::CoreError;
use thiserror::Error;

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised by flow construction and setters.
///
/// Every error is returned before any field of the flow is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// A required collaborator (the gas state) was not supplied.
    #[error("Missing reference: {what}")]
    MissingReference { what: &'static str },

    /// A required setting (the flow kind or initial value) was not supplied.
    #[error("Missing configuration: {what}")]
    MissingConfiguration { what: &'static str },

    /// Negative or non-finite flow value.
    #[error("Invalid {kind} value: {value}")]
    InvalidFlowValue { kind: FlowKind, value: f64 },

    /// Rejected by the gas state; passed through unchanged.
    #[error(transparent)]
    GasState(#[from] AirError),

    /// The shared gas state is mutably borrowed elsewhere.
    #[error("Gas state is already borrowed ({what})")]
    StateBorrowed { what: &'static str },
}

impl From<FlowError> for CoreError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::GasState(e) => e.into(),
            FlowError::InvalidFlowValue { value, .. } if !value.is_finite() => {
                CoreError::NonFinite {
                    what: "flow value",
                    value,
                }
            }
            other => CoreError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
