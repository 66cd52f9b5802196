//! Turning case definitions into live flows and back.

use std::collections::HashMap;

use crate::schema::{AirDef, AirSourceDef, FlowCase, FlowDef, HumidityDef};
use crate::{CaseError, CaseResult};
use hf_air::{AirResult, GasState, HumidityAnchor, MoistAir};
use hf_core::units::{celsius, pa, to_celsius};
use hf_flow::{FlowError, NamedFlow, SharedGasState, share};

/// Build a moist air state from its definition.
pub fn build_air(def: &AirDef) -> AirResult<MoistAir> {
    let t = celsius(def.temperature_c);
    let p = pa(def.pressure_pa);
    match def.humidity {
        HumidityDef::RelativeHumidity { percent } => MoistAir::new(t, percent, p),
        HumidityDef::HumidityRatio { kg_per_kg } => MoistAir::from_humidity_ratio(t, kg_per_kg, p),
    }
}

/// Instantiate every flow of a case.
///
/// Flows referencing the same entry of `airs` receive the same
/// [`SharedGasState`] handle; flows with inline air own their state.
pub fn instantiate_all(case: &FlowCase) -> CaseResult<Vec<NamedFlow<MoistAir>>> {
    let mut shared = HashMap::new();
    for def in &case.airs {
        let air = build_air(&def.air).map_err(|source| CaseError::Air {
            context: format!("airs[{}]", def.id),
            source,
        })?;
        shared.insert(def.id.clone(), share(air));
    }

    case.flows
        .iter()
        .map(|def| instantiate_flow(def, &shared))
        .collect()
}

/// Instantiate one flow, resolving shared air references in `shared`.
pub fn instantiate_flow(
    def: &FlowDef,
    shared: &HashMap<String, SharedGasState<MoistAir>>,
) -> CaseResult<NamedFlow<MoistAir>> {
    let gas = match &def.air {
        AirSourceDef::Shared(air_ref) => shared.get(&air_ref.shared).cloned(),
        AirSourceDef::Owned(air) => {
            let air = build_air(air).map_err(|source| CaseError::Air {
                context: format!("flows[{}].air", def.name),
                source,
            })?;
            Some(share(air))
        }
    };

    let flow = NamedFlow::builder()
        .name(def.name.clone())
        .flow(def.value, def.kind.into())
        .maybe_gas_state(gas)
        .build()
        .map_err(|source| CaseError::Flow {
            context: format!("flows[{}]", def.name),
            source,
        })?;
    tracing::debug!(flow = %flow.name(), kind = %flow.locked_kind(), "flow instantiated");
    Ok(flow)
}

/// Snapshot a flow as a definition with its own inline air.
///
/// Only the locked value is recorded; the other quantities are re-derived on
/// instantiation.
pub fn capture(flow: &NamedFlow<MoistAir>) -> CaseResult<FlowDef> {
    let air = flow
        .gas_state()
        .try_borrow()
        .map_err(|_| CaseError::Flow {
            context: format!("flows[{}]", flow.name()),
            source: FlowError::StateBorrowed {
                what: "capturing gas state",
            },
        })?;
    let humidity = match air.humidity_anchor() {
        HumidityAnchor::RelativeHumidity => HumidityDef::RelativeHumidity {
            percent: air.relative_humidity(),
        },
        HumidityAnchor::HumidityRatio => HumidityDef::HumidityRatio {
            kg_per_kg: air.humidity_ratio(),
        },
    };
    let kind = flow.locked_kind();
    Ok(FlowDef {
        name: flow.name().to_string(),
        kind: kind.into(),
        value: flow.flow(kind),
        air: AirSourceDef::Owned(AirDef {
            temperature_c: to_celsius(air.temperature()),
            pressure_pa: air.pressure().value,
            humidity,
        }),
    })
}
