//! hf-case: case file format for humid air flows.
//!
//! A case lists named flows, each with a locked quantity and the air state it
//! is measured in. Air states are either inline (owned by one flow) or listed
//! under `airs` and referenced by id, in which case the flows share them.
//!
//! ```yaml
//! version: 1
//! airs:
//!   - id: outdoor
//!     temperature_c: -5.0
//!     humidity: { type: relative_humidity, percent: 80.0 }
//! flows:
//!   - name: supply
//!     kind: moist_volume
//!     value: 1.5
//!     air: { shared: outdoor }
//!   - name: exhaust
//!     kind: dry_mass
//!     value: 1.2
//!     air:
//!       temperature_c: 22.0
//!       pressure_pa: 100000.0
//!       humidity: { type: humidity_ratio, kg_per_kg: 0.008 }
//! ```

pub mod instantiate;
pub mod schema;
pub mod validate;

pub use instantiate::{build_air, capture, instantiate_all, instantiate_flow};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_case};

use hf_air::AirError;
use hf_flow::FlowError;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid air state in {context}: {source}")]
    Air {
        context: String,
        #[source]
        source: AirError,
    },

    #[error("Invalid flow in {context}: {source}")]
    Flow {
        context: String,
        #[source]
        source: FlowError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CaseResult<FlowCase> {
    let content = std::fs::read_to_string(path)?;
    let case: FlowCase = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    tracing::debug!(path = %path.display(), flows = case.flows.len(), "case loaded");
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &FlowCase) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CaseResult<FlowCase> {
    let content = std::fs::read_to_string(path)?;
    let case: FlowCase = serde_json::from_str(&content)?;
    validate_case(&case)?;
    tracing::debug!(path = %path.display(), flows = case.flows.len(), "case loaded");
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &FlowCase) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}
