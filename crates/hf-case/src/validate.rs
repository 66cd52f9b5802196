//! Case validation logic.
//!
//! Structural checks only. Physical ranges (temperature, humidity,
//! pressure) and flow sign are enforced by `MoistAir` and `NamedFlow` when
//! the case is instantiated.

use crate::schema::{AirDef, AirSourceDef, FlowCase, HumidityDef};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &FlowCase) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let mut air_ids = HashSet::new();
    for shared in &case.airs {
        if shared.id.trim().is_empty() {
            return Err(invalid("airs.id", &shared.id, "must not be empty"));
        }
        if !air_ids.insert(shared.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: shared.id.clone(),
                context: "airs".to_string(),
            });
        }
        validate_air(&shared.air, &format!("airs[{}]", shared.id))?;
    }

    let mut flow_names = HashSet::new();
    for flow in &case.flows {
        if flow.name.trim().is_empty() {
            return Err(invalid("flows.name", &flow.name, "must not be empty"));
        }
        if !flow_names.insert(flow.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: flow.name.clone(),
                context: "flows".to_string(),
            });
        }
        if !flow.value.is_finite() {
            return Err(invalid(
                &format!("flows[{}].value", flow.name),
                &flow.value.to_string(),
                "must be finite",
            ));
        }
        match &flow.air {
            AirSourceDef::Shared(air_ref) => {
                if !air_ids.contains(air_ref.shared.as_str()) {
                    return Err(ValidationError::MissingReference {
                        id: air_ref.shared.clone(),
                        context: format!("flows[{}].air", flow.name),
                    });
                }
            }
            AirSourceDef::Owned(air) => validate_air(air, &format!("flows[{}].air", flow.name))?,
        }
    }

    Ok(())
}

fn validate_air(air: &AirDef, context: &str) -> Result<(), ValidationError> {
    let humidity = match air.humidity {
        HumidityDef::RelativeHumidity { percent } => ("humidity.percent", percent),
        HumidityDef::HumidityRatio { kg_per_kg } => ("humidity.kg_per_kg", kg_per_kg),
    };
    for (field, value) in [
        ("temperature_c", air.temperature_c),
        ("pressure_pa", air.pressure_pa),
        humidity,
    ] {
        if !value.is_finite() {
            return Err(invalid(
                &format!("{context}.{field}"),
                &value.to_string(),
                "must be finite",
            ));
        }
    }
    Ok(())
}

fn invalid(field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FlowDef, FlowKindDef, SharedAirDef};

    fn air() -> AirDef {
        AirDef {
            temperature_c: 20.0,
            pressure_pa: 101_325.0,
            humidity: HumidityDef::RelativeHumidity { percent: 50.0 },
        }
    }

    fn flow(name: &str, source: AirSourceDef) -> FlowDef {
        FlowDef {
            name: name.to_string(),
            kind: FlowKindDef::MoistMass,
            value: 1.0,
            air: source,
        }
    }

    fn case(flows: Vec<FlowDef>) -> FlowCase {
        FlowCase {
            version: 1,
            name: String::new(),
            airs: vec![SharedAirDef {
                id: "outdoor".to_string(),
                air: air(),
            }],
            flows,
        }
    }

    #[test]
    fn valid_case_passes() {
        let c = case(vec![
            flow("a", AirSourceDef::Owned(air())),
            flow(
                "b",
                AirSourceDef::shared("outdoor"),
            ),
        ]);
        assert!(validate_case(&c).is_ok());
    }

    #[test]
    fn duplicate_flow_names_rejected() {
        let c = case(vec![
            flow("a", AirSourceDef::Owned(air())),
            flow("a", AirSourceDef::Owned(air())),
        ]);
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn unknown_shared_air_rejected() {
        let c = case(vec![flow(
            "a",
            AirSourceDef::shared("indoor"),
        )]);
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::MissingReference { .. })
        ));
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let mut bad_air = air();
        bad_air.temperature_c = f64::NAN;
        let c = case(vec![flow("a", AirSourceDef::Owned(bad_air))]);
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::InvalidValue { .. })
        ));

        let mut f = flow("a", AirSourceDef::Owned(air()));
        f.value = f64::INFINITY;
        assert!(validate_case(&case(vec![f])).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let mut c = case(vec![]);
        c.version = LATEST_VERSION + 1;
        assert_eq!(
            validate_case(&c),
            Err(ValidationError::UnsupportedVersion {
                version: LATEST_VERSION + 1
            })
        );
    }
}
