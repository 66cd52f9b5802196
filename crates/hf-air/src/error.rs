//! Humid air state errors.

use hf_core::CoreError;
use thiserror::Error;

/// Result type for air state operations.
pub type AirResult<T> = Result<T, AirError>;

/// Errors raised when a humid air state is given physically implausible input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirError {
    /// Value outside the supported range of the property model.
    #[error("{what} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Combination of inputs that cannot exist (e.g. vapour pressure above total pressure).
    #[error("Non-physical state: {what}")]
    NonPhysical { what: &'static str },

    /// NaN or infinite input.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

impl From<AirError> for CoreError {
    fn from(err: AirError) -> Self {
        match err {
            AirError::OutOfRange { .. } => CoreError::InvalidArg {
                what: err.to_string(),
            },
            AirError::NonPhysical { what } => CoreError::Invariant {
                what: format!("Non-physical air state: {what}"),
            },
            AirError::NonFinite { what } => CoreError::NonFinite {
                what,
                value: f64::NAN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AirError::OutOfRange {
            what: "temperature",
            value: -150.0,
            min: -100.0,
            max: 200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("temperature"));
        assert!(msg.contains("-150"));
    }

    #[test]
    fn error_to_core_error() {
        let err = AirError::NonPhysical {
            what: "vapour pressure above total pressure",
        };
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Invariant { .. }));
    }
}
