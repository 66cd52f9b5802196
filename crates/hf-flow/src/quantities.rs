//! The set of four synchronized flow values.

use crate::conversion;
use crate::kind::FlowKind;
use hf_air::GasProperties;
use hf_core::{Tolerances, nearly_equal};

/// Moist/dry mass and volumetric flow of one stream, in kg/s and m³/s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowQuantities {
    pub moist_mass: f64,
    pub moist_volume: f64,
    pub dry_mass: f64,
    pub dry_volume: f64,
}

impl FlowQuantities {
    /// Derive all four quantities from one authoritative value.
    ///
    /// The locked value is stored verbatim; the other three are produced by
    /// walking `kind.resolution_path()`. The result depends only on the
    /// arguments, so recomputing with the same inputs is bit-identical.
    pub fn resolve(kind: FlowKind, value: f64, props: &GasProperties) -> Self {
        let mut q = Self::default();
        *q.slot_mut(kind) = value;
        for edge in kind.resolution_path() {
            let input = q.get(edge.source());
            *q.slot_mut(edge.target()) = edge.apply(input, props);
        }
        q
    }

    pub fn get(&self, kind: FlowKind) -> f64 {
        match kind {
            FlowKind::MoistMassFlow => self.moist_mass,
            FlowKind::MoistVolumeFlow => self.moist_volume,
            FlowKind::DryMassFlow => self.dry_mass,
            FlowKind::DryVolumeFlow => self.dry_volume,
        }
    }

    fn slot_mut(&mut self, kind: FlowKind) -> &mut f64 {
        match kind {
            FlowKind::MoistMassFlow => &mut self.moist_mass,
            FlowKind::MoistVolumeFlow => &mut self.moist_volume,
            FlowKind::DryMassFlow => &mut self.dry_mass,
            FlowKind::DryVolumeFlow => &mut self.dry_volume,
        }
    }

    /// Check the three conversion relations against `props`.
    pub fn is_consistent_with(&self, props: &GasProperties, tol: Tolerances) -> bool {
        nearly_equal(
            self.moist_volume,
            conversion::moist_volume_from_mass(self.moist_mass, props),
            tol,
        ) && nearly_equal(
            self.dry_mass,
            conversion::dry_mass_from_moist(self.moist_mass, props),
            tol,
        ) && nearly_equal(
            self.dry_volume,
            conversion::dry_volume_from_mass(self.dry_mass, props),
            tol,
        )
    }
}
