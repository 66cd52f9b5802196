//! Named humid air flow with one locked quantity.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{FlowError, FlowResult};
use crate::kind::FlowKind;
use crate::quantities::FlowQuantities;
use hf_air::{GasProperties, GasState, HumidityRatio, MoistAir};
use hf_core::units::{MassRate, Pressure, Temperature, VolumeRate, kgps, m3ps};

/// Gas state handle that several flows may hold at once.
///
/// Single-threaded by construction (`Rc`). Mutating the state directly, or
/// through another flow, does not update flows that merely hold the handle.
pub type SharedGasState<G> = Rc<RefCell<G>>;

/// Wrap a gas state so it can be attached to one or more flows.
pub fn share<G: GasState>(state: G) -> SharedGasState<G> {
    Rc::new(RefCell::new(state))
}

/// Default flow used by [`NamedFlow::default`]: 0.1 kg/s of moist air.
pub const DEFAULT_MASS_FLOW: f64 = 0.1;

/// A humid air stream.
///
/// Holds the four flow quantities, the kind that is currently locked and a
/// handle to the gas state they are derived from. The type is intentionally
/// not `Clone`: copying must duplicate the gas state as well, which is what
/// [`NamedFlow::deep_clone`] does.
#[derive(Debug)]
pub struct NamedFlow<G: GasState = MoistAir> {
    name: String,
    quantities: FlowQuantities,
    locked: FlowKind,
    gas: SharedGasState<G>,
}

impl<G: GasState> NamedFlow<G> {
    /// Create a flow and lock `kind` at `value`.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        kind: FlowKind,
        gas: SharedGasState<G>,
    ) -> FlowResult<Self> {
        let mut flow = Self {
            name: name.into(),
            quantities: FlowQuantities::default(),
            locked: kind,
            gas,
        };
        flow.set_flow(value, kind)?;
        Ok(flow)
    }

    /// Builder accepting optional inputs, for callers that assemble a flow
    /// from partial configuration.
    pub fn builder() -> NamedFlowBuilder<G> {
        NamedFlowBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn locked_kind(&self) -> FlowKind {
        self.locked
    }

    /// Current value of one quantity (kg/s or m³/s).
    pub fn flow(&self, kind: FlowKind) -> f64 {
        self.quantities.get(kind)
    }

    pub fn quantities(&self) -> &FlowQuantities {
        &self.quantities
    }

    pub fn moist_mass_flow(&self) -> MassRate {
        kgps(self.quantities.moist_mass)
    }

    pub fn moist_volume_flow(&self) -> VolumeRate {
        m3ps(self.quantities.moist_volume)
    }

    pub fn dry_mass_flow(&self) -> MassRate {
        kgps(self.quantities.dry_mass)
    }

    pub fn dry_volume_flow(&self) -> VolumeRate {
        m3ps(self.quantities.dry_volume)
    }

    /// Handle to the attached gas state.
    pub fn gas_state(&self) -> &SharedGasState<G> {
        &self.gas
    }

    /// Current properties of the attached gas state.
    pub fn properties(&self) -> FlowResult<GasProperties> {
        read_properties(&self.gas)
    }

    /// Lock `kind` at `value` and recompute the other quantities.
    pub fn set_flow(&mut self, value: f64, kind: FlowKind) -> FlowResult<()> {
        match kind {
            FlowKind::MoistMassFlow => self.set_moist_mass_flow(value),
            FlowKind::MoistVolumeFlow => self.set_moist_volume_flow(value),
            FlowKind::DryMassFlow => self.set_dry_mass_flow(value),
            FlowKind::DryVolumeFlow => self.set_dry_volume_flow(value),
        }
    }

    /// Moist air mass flow [kg/s].
    pub fn set_moist_mass_flow(&mut self, value: f64) -> FlowResult<()> {
        self.lock(FlowKind::MoistMassFlow, value)
    }

    /// Moist air volumetric flow [m³/s].
    pub fn set_moist_volume_flow(&mut self, value: f64) -> FlowResult<()> {
        self.lock(FlowKind::MoistVolumeFlow, value)
    }

    /// Dry air mass flow [kg/s].
    pub fn set_dry_mass_flow(&mut self, value: f64) -> FlowResult<()> {
        self.lock(FlowKind::DryMassFlow, value)
    }

    /// Dry air volumetric flow [m³/s].
    pub fn set_dry_volume_flow(&mut self, value: f64) -> FlowResult<()> {
        self.lock(FlowKind::DryVolumeFlow, value)
    }

    /// Move the lock to `kind`, keeping that quantity's current value.
    pub fn set_locked_kind(&mut self, kind: FlowKind) -> FlowResult<()> {
        self.lock(kind, self.quantities.get(kind))
    }

    /// Attach a different gas state. The locked value is kept verbatim and the
    /// other three quantities are re-derived from the new state.
    pub fn set_gas_state(&mut self, gas: SharedGasState<G>) -> FlowResult<()> {
        let props = read_properties(&gas)?;
        self.quantities = self.resolve(&props);
        self.gas = gas;
        tracing::debug!(flow = %self.name, props = %props.summary(), "gas state replaced");
        Ok(())
    }

    /// Attach a gas state owned by this flow alone.
    pub fn set_owned_gas_state(&mut self, state: G) -> FlowResult<()> {
        self.set_gas_state(share(state))
    }

    pub fn set_temperature(&mut self, t: Temperature) -> FlowResult<()> {
        self.update_gas(|gas| gas.set_temperature(t))
    }

    /// Relative humidity [%].
    pub fn set_relative_humidity(&mut self, rh_pct: f64) -> FlowResult<()> {
        self.update_gas(|gas| gas.set_relative_humidity(rh_pct))
    }

    pub fn set_humidity_ratio(&mut self, x: HumidityRatio) -> FlowResult<()> {
        self.update_gas(|gas| gas.set_humidity_ratio(x))
    }

    pub fn set_pressure(&mut self, p: Pressure) -> FlowResult<()> {
        self.update_gas(|gas| gas.set_pressure(p))
    }

    /// Copy this flow together with an independent copy of its gas state.
    pub fn deep_clone(&self) -> FlowResult<Self> {
        let state = self
            .gas
            .try_borrow()
            .map_err(|_| FlowError::StateBorrowed {
                what: "copying gas state",
            })?
            .clone();
        Ok(Self {
            name: self.name.clone(),
            quantities: self.quantities,
            locked: self.locked,
            gas: share(state),
        })
    }

    fn lock(&mut self, kind: FlowKind, value: f64) -> FlowResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(FlowError::InvalidFlowValue { kind, value });
        }
        let props = read_properties(&self.gas)?;
        self.quantities = FlowQuantities::resolve(kind, value, &props);
        self.locked = kind;
        tracing::debug!(flow = %self.name, %kind, value, "flow quantities recomputed");
        Ok(())
    }

    fn resolve(&self, props: &GasProperties) -> FlowQuantities {
        FlowQuantities::resolve(self.locked, self.quantities.get(self.locked), props)
    }

    fn recompute(&mut self) -> FlowResult<()> {
        let props = read_properties(&self.gas)?;
        self.quantities = self.resolve(&props);
        Ok(())
    }

    fn update_gas<F>(&mut self, apply: F) -> FlowResult<()>
    where
        F: FnOnce(&mut G) -> hf_air::AirResult<()>,
    {
        {
            let mut gas = self
                .gas
                .try_borrow_mut()
                .map_err(|_| FlowError::StateBorrowed {
                    what: "updating gas state",
                })?;
            apply(&mut *gas)?;
        }
        tracing::trace!(flow = %self.name, "gas state updated");
        self.recompute()
    }
}

impl Default for NamedFlow<MoistAir> {
    /// 0.1 kg/s of moist air at 20 °C, 50 % RH and standard pressure.
    fn default() -> Self {
        let air = MoistAir::default();
        let quantities =
            FlowQuantities::resolve(FlowKind::MoistMassFlow, DEFAULT_MASS_FLOW, &air.properties());
        Self {
            name: "flow".to_string(),
            quantities,
            locked: FlowKind::MoistMassFlow,
            gas: share(air),
        }
    }
}

fn read_properties<G: GasState>(gas: &SharedGasState<G>) -> FlowResult<GasProperties> {
    gas.try_borrow()
        .map(|state| state.properties())
        .map_err(|_| FlowError::StateBorrowed {
            what: "reading gas properties",
        })
}

/// Builder for [`NamedFlow`] where every input may be missing.
///
/// `build` reports a missing gas state before a missing kind, and both before
/// a missing value, so the caller always learns about the missing reference
/// first.
#[derive(Debug)]
pub struct NamedFlowBuilder<G: GasState = MoistAir> {
    name: Option<String>,
    value: Option<f64>,
    kind: Option<FlowKind>,
    gas: Option<SharedGasState<G>>,
}

impl<G: GasState> Default for NamedFlowBuilder<G> {
    fn default() -> Self {
        Self {
            name: None,
            value: None,
            kind: None,
            gas: None,
        }
    }
}

impl<G: GasState> NamedFlowBuilder<G> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Locked quantity and its value.
    pub fn flow(mut self, value: f64, kind: FlowKind) -> Self {
        self.value = Some(value);
        self.kind = Some(kind);
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn kind(mut self, kind: FlowKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn gas_state(mut self, gas: SharedGasState<G>) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Attach a gas state if one is available; `build` reports it missing otherwise.
    pub fn maybe_gas_state(mut self, gas: Option<SharedGasState<G>>) -> Self {
        self.gas = gas;
        self
    }

    /// Attach a gas state owned by the new flow alone.
    pub fn owned_gas_state(self, state: G) -> Self {
        self.gas_state(share(state))
    }

    pub fn build(self) -> FlowResult<NamedFlow<G>> {
        let gas = self.gas.ok_or(FlowError::MissingReference { what: "gas state" })?;
        let kind = self
            .kind
            .ok_or(FlowError::MissingConfiguration { what: "flow kind" })?;
        let value = self
            .value
            .ok_or(FlowError::MissingConfiguration { what: "flow value" })?;
        NamedFlow::new(self.name.unwrap_or_else(|| "flow".to_string()), value, kind, gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::units::{celsius, pa};
    use hf_core::{Tolerances, nearly_equal};

    fn air() -> SharedGasState<MoistAir> {
        share(MoistAir::new(celsius(20.0), 50.0, pa(101_325.0)).unwrap())
    }

    #[test]
    fn construct_locks_requested_kind() {
        let flow = NamedFlow::new("supply", 0.5, FlowKind::DryVolumeFlow, air()).unwrap();
        assert_eq!(flow.name(), "supply");
        assert_eq!(flow.locked_kind(), FlowKind::DryVolumeFlow);
        assert_eq!(flow.flow(FlowKind::DryVolumeFlow), 0.5);
    }

    #[test]
    fn construct_rejects_negative_value() {
        let err = NamedFlow::new("supply", -0.5, FlowKind::MoistMassFlow, air()).unwrap_err();
        assert_eq!(
            err,
            FlowError::InvalidFlowValue {
                kind: FlowKind::MoistMassFlow,
                value: -0.5
            }
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut flow = NamedFlow::new("supply", 1.0, FlowKind::MoistMassFlow, air()).unwrap();
        assert!(flow.set_dry_mass_flow(f64::NAN).is_err());
        assert!(flow.set_dry_mass_flow(f64::INFINITY).is_err());
        assert_eq!(flow.locked_kind(), FlowKind::MoistMassFlow);
    }

    #[test]
    fn set_locked_kind_keeps_numbers() {
        let mut flow = NamedFlow::new("supply", 1.0, FlowKind::MoistMassFlow, air()).unwrap();
        let before = *flow.quantities();

        flow.set_locked_kind(FlowKind::DryVolumeFlow).unwrap();

        assert_eq!(flow.locked_kind(), FlowKind::DryVolumeFlow);
        let tol = Tolerances::default();
        for kind in FlowKind::ALL {
            assert!(nearly_equal(flow.flow(kind), before.get(kind), tol));
        }

        let locked = flow.flow(FlowKind::DryVolumeFlow);
        flow.set_temperature(celsius(35.0)).unwrap();
        assert_eq!(flow.flow(FlowKind::DryVolumeFlow), locked);
        assert!(flow.flow(FlowKind::MoistMassFlow) < before.moist_mass);
    }

    #[test]
    fn typed_getters_match_raw_values() {
        let flow = NamedFlow::new("supply", 2.0, FlowKind::MoistVolumeFlow, air()).unwrap();
        assert_eq!(flow.moist_volume_flow().value, 2.0);
        assert_eq!(flow.moist_mass_flow().value, flow.quantities().moist_mass);
        assert_eq!(flow.dry_mass_flow().value, flow.quantities().dry_mass);
        assert_eq!(flow.dry_volume_flow().value, flow.quantities().dry_volume);
    }

    #[test]
    fn default_flow() {
        let flow = NamedFlow::<MoistAir>::default();
        assert_eq!(flow.locked_kind(), FlowKind::MoistMassFlow);
        assert_eq!(flow.flow(FlowKind::MoistMassFlow), DEFAULT_MASS_FLOW);
        let props = flow.properties().unwrap();
        assert!(flow.quantities().is_consistent_with(&props, Tolerances::default()));
    }

    #[test]
    fn borrowed_state_is_reported() {
        let gas = air();
        let mut flow = NamedFlow::new("supply", 1.0, FlowKind::MoistMassFlow, gas.clone()).unwrap();
        let before = *flow.quantities();

        let _guard = gas.borrow_mut();
        assert!(matches!(
            flow.set_dry_mass_flow(0.5),
            Err(FlowError::StateBorrowed { .. })
        ));
        assert!(matches!(
            flow.set_temperature(celsius(25.0)),
            Err(FlowError::StateBorrowed { .. })
        ));
        assert!(flow.deep_clone().is_err());
        assert_eq!(*flow.quantities(), before);
        assert_eq!(flow.locked_kind(), FlowKind::MoistMassFlow);
        drop(_guard);

        let replacement = share(MoistAir::new(celsius(35.0), 30.0, pa(101_325.0)).unwrap());
        let _replacement_guard = replacement.borrow_mut();
        assert!(matches!(
            flow.set_gas_state(replacement.clone()),
            Err(FlowError::StateBorrowed { .. })
        ));
        assert!(Rc::ptr_eq(flow.gas_state(), &gas));
        assert_eq!(*flow.quantities(), before);
    }

    #[test]
    fn builder_reports_missing_inputs_in_order() {
        let err = NamedFlow::<MoistAir>::builder().build().unwrap_err();
        assert_eq!(err, FlowError::MissingReference { what: "gas state" });

        let err = NamedFlow::builder().gas_state(air()).value(1.0).build().unwrap_err();
        assert_eq!(err, FlowError::MissingConfiguration { what: "flow kind" });

        let err = NamedFlow::builder()
            .gas_state(air())
            .kind(FlowKind::DryMassFlow)
            .build()
            .unwrap_err();
        assert_eq!(err, FlowError::MissingConfiguration { what: "flow value" });

        let flow = NamedFlow::builder()
            .name("exhaust")
            .flow(0.3, FlowKind::DryMassFlow)
            .owned_gas_state(MoistAir::default())
            .build()
            .unwrap();
        assert_eq!(flow.name(), "exhaust");
        assert_eq!(flow.flow(FlowKind::DryMassFlow), 0.3);
    }
}
