//! Conversions between the four flow representations.
//!
//! The quantities form a small graph with two kinds of edges:
//!
//! ```text
//!   moist volume ── ρ ── moist mass
//!                            │
//!                         (1 + x)
//!                            │
//!   dry volume ─── ρ_da ─── dry mass
//! ```
//!
//! There is deliberately no volume-to-volume edge: moist/dry conversion only
//! happens on the mass side, so each pair of quantities is linked by exactly
//! one path.

use crate::kind::FlowKind;
use hf_air::GasProperties;

/// Moist air volumetric flow [m³/s] from moist air mass flow [kg/s].
pub fn moist_volume_from_mass(mass: f64, props: &GasProperties) -> f64 {
    mass / props.density.value
}

/// Moist air mass flow [kg/s] from moist air volumetric flow [m³/s].
pub fn moist_mass_from_volume(volume: f64, props: &GasProperties) -> f64 {
    volume * props.density.value
}

/// Dry air volumetric flow [m³/s] from dry air mass flow [kg/s].
pub fn dry_volume_from_mass(mass: f64, props: &GasProperties) -> f64 {
    mass / props.dry_density.value
}

/// Dry air mass flow [kg/s] from dry air volumetric flow [m³/s].
pub fn dry_mass_from_volume(volume: f64, props: &GasProperties) -> f64 {
    volume * props.dry_density.value
}

/// Dry air mass flow [kg/s] from moist air mass flow [kg/s].
pub fn dry_mass_from_moist(moist_mass: f64, props: &GasProperties) -> f64 {
    moist_mass / (1.0 + props.humidity_ratio)
}

/// Moist air mass flow [kg/s] from dry air mass flow [kg/s].
pub fn moist_mass_from_dry(dry_mass: f64, props: &GasProperties) -> f64 {
    dry_mass * (1.0 + props.humidity_ratio)
}

/// Directed edge of the conversion graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionEdge {
    MoistMassToMoistVolume,
    MoistVolumeToMoistMass,
    MoistMassToDryMass,
    DryMassToMoistMass,
    DryMassToDryVolume,
    DryVolumeToDryMass,
}

impl ConversionEdge {
    pub fn source(self) -> FlowKind {
        match self {
            Self::MoistMassToMoistVolume | Self::MoistMassToDryMass => FlowKind::MoistMassFlow,
            Self::MoistVolumeToMoistMass => FlowKind::MoistVolumeFlow,
            Self::DryMassToMoistMass | Self::DryMassToDryVolume => FlowKind::DryMassFlow,
            Self::DryVolumeToDryMass => FlowKind::DryVolumeFlow,
        }
    }

    pub fn target(self) -> FlowKind {
        match self {
            Self::MoistMassToMoistVolume => FlowKind::MoistVolumeFlow,
            Self::MoistVolumeToMoistMass | Self::DryMassToMoistMass => FlowKind::MoistMassFlow,
            Self::MoistMassToDryMass | Self::DryVolumeToDryMass => FlowKind::DryMassFlow,
            Self::DryMassToDryVolume => FlowKind::DryVolumeFlow,
        }
    }

    /// Convert a value of the source quantity into the target quantity.
    pub fn apply(self, value: f64, props: &GasProperties) -> f64 {
        match self {
            Self::MoistMassToMoistVolume => moist_volume_from_mass(value, props),
            Self::MoistVolumeToMoistMass => moist_mass_from_volume(value, props),
            Self::MoistMassToDryMass => dry_mass_from_moist(value, props),
            Self::DryMassToMoistMass => moist_mass_from_dry(value, props),
            Self::DryMassToDryVolume => dry_volume_from_mass(value, props),
            Self::DryVolumeToDryMass => dry_mass_from_volume(value, props),
        }
    }
}

use ConversionEdge::*;

const FROM_MOIST_MASS: [ConversionEdge; 3] =
    [MoistMassToMoistVolume, MoistMassToDryMass, DryMassToDryVolume];
const FROM_MOIST_VOLUME: [ConversionEdge; 3] =
    [MoistVolumeToMoistMass, MoistMassToDryMass, DryMassToDryVolume];
const FROM_DRY_MASS: [ConversionEdge; 3] =
    [DryMassToMoistMass, MoistMassToMoistVolume, DryMassToDryVolume];
const FROM_DRY_VOLUME: [ConversionEdge; 3] =
    [DryVolumeToDryMass, DryMassToMoistMass, MoistMassToMoistVolume];

impl FlowKind {
    /// Edges that derive the other three quantities from this one, in
    /// evaluation order. Each edge reads a quantity that is either this one or
    /// the target of an earlier edge.
    pub fn resolution_path(self) -> &'static [ConversionEdge; 3] {
        match self {
            FlowKind::MoistMassFlow => &FROM_MOIST_MASS,
            FlowKind::MoistVolumeFlow => &FROM_MOIST_VOLUME,
            FlowKind::DryMassFlow => &FROM_DRY_MASS,
            FlowKind::DryVolumeFlow => &FROM_DRY_VOLUME,
        }
    }
}
