//! Case file schema definitions.

use hf_flow::FlowKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowCase {
    pub version: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Air states that several flows may share.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub airs: Vec<SharedAirDef>,
    #[serde(default)]
    pub flows: Vec<FlowDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedAirDef {
    pub id: String,
    #[serde(flatten)]
    pub air: AirDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub name: String,
    pub kind: FlowKindDef,
    /// Locked value in kg/s (mass kinds) or m³/s (volume kinds).
    pub value: f64,
    pub air: AirSourceDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowKindDef {
    MoistMass,
    MoistVolume,
    DryMass,
    DryVolume,
}

impl From<FlowKindDef> for FlowKind {
    fn from(def: FlowKindDef) -> Self {
        match def {
            FlowKindDef::MoistMass => FlowKind::MoistMassFlow,
            FlowKindDef::MoistVolume => FlowKind::MoistVolumeFlow,
            FlowKindDef::DryMass => FlowKind::DryMassFlow,
            FlowKindDef::DryVolume => FlowKind::DryVolumeFlow,
        }
    }
}

impl From<FlowKind> for FlowKindDef {
    fn from(kind: FlowKind) -> Self {
        match kind {
            FlowKind::MoistMassFlow => FlowKindDef::MoistMass,
            FlowKind::MoistVolumeFlow => FlowKindDef::MoistVolume,
            FlowKind::DryMassFlow => FlowKindDef::DryMass,
            FlowKind::DryVolumeFlow => FlowKindDef::DryVolume,
        }
    }
}

/// Either a reference to an entry of `FlowCase::airs` or an air state owned
/// by the flow alone. A map mixing `shared` with inline air fields matches
/// neither variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AirSourceDef {
    Shared(SharedAirRef),
    Owned(AirDef),
}

impl AirSourceDef {
    pub fn shared(id: impl Into<String>) -> Self {
        Self::Shared(SharedAirRef { shared: id.into() })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SharedAirRef {
    pub shared: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AirDef {
    pub temperature_c: f64,
    #[serde(default = "default_pressure_pa")]
    pub pressure_pa: f64,
    pub humidity: HumidityDef,
}

fn default_pressure_pa() -> f64 {
    hf_core::units::constants::STANDARD_PRESSURE_PA
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HumidityDef {
    RelativeHumidity { percent: f64 },
    HumidityRatio { kg_per_kg: f64 },
}
