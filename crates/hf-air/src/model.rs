//! Gas state trait and validation helpers.

use crate::error::{AirError, AirResult};
use hf_core::units::{Density, Pressure, Temperature, to_celsius};
use hf_core::{CoreError, ensure_positive};

/// Humidity ratio [kg vapour / kg dry component].
///
/// Dimensionless mass ratio, kept as a plain f64 like the other scalar
/// properties that have no dedicated uom quantity.
pub type HumidityRatio = f64;

/// Properties of a gas state that flow conversions depend on.
///
/// A snapshot: reading it once per recompute keeps all derived flows
/// consistent with the same state even if the provider is mutated later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasProperties {
    /// Density of the moist gas [kg/m³]
    pub density: Density,

    /// Density of the dry component at the same temperature and pressure [kg/m³]
    pub dry_density: Density,

    /// Humidity ratio x [kg/kg]
    pub humidity_ratio: HumidityRatio,
}

impl GasProperties {
    /// Create a validated property snapshot.
    pub fn new(
        density: Density,
        dry_density: Density,
        humidity_ratio: HumidityRatio,
    ) -> AirResult<Self> {
        validation::validate_density(density, "density")?;
        validation::validate_density(dry_density, "dry component density")?;
        validation::validate_humidity_ratio(humidity_ratio)?;
        Ok(Self {
            density,
            dry_density,
            humidity_ratio,
        })
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Props(ρ={:.4}kg/m³,ρ_da={:.4}kg/m³,x={:.6}kg/kg)",
            self.density.value, self.dry_density.value, self.humidity_ratio
        )
    }
}

/// Trait for humid gas states that a flow can be synchronized against.
///
/// Implementations own the physical validation of their inputs: every setter
/// either applies the change completely or returns an error and leaves the
/// state untouched. `Clone` must produce an independent deep copy.
pub trait GasState: Clone + std::fmt::Debug {
    /// Dry-bulb temperature.
    fn temperature(&self) -> Temperature;

    /// Absolute pressure.
    fn pressure(&self) -> Pressure;

    /// Relative humidity [%].
    fn relative_humidity(&self) -> f64;

    /// Humidity ratio [kg/kg], always >= 0.
    fn humidity_ratio(&self) -> HumidityRatio;

    /// Moist gas density [kg/m³], always > 0.
    fn density(&self) -> Density;

    /// Dry component density [kg/m³], always > 0.
    fn dry_density(&self) -> Density;

    /// Snapshot of the properties used for flow conversion.
    fn properties(&self) -> GasProperties {
        GasProperties {
            density: self.density(),
            dry_density: self.dry_density(),
            humidity_ratio: self.humidity_ratio(),
        }
    }

    fn set_temperature(&mut self, t: Temperature) -> AirResult<()>;

    /// Set relative humidity [%].
    fn set_relative_humidity(&mut self, rh_pct: f64) -> AirResult<()>;

    fn set_humidity_ratio(&mut self, x: HumidityRatio) -> AirResult<()>;

    fn set_pressure(&mut self, p: Pressure) -> AirResult<()>;
}

/// Supported input ranges.
pub mod limits {
    /// Lowest supported dry-bulb temperature [°C].
    pub const MIN_T_C: f64 = -100.0;
    /// Highest supported dry-bulb temperature [°C].
    pub const MAX_T_C: f64 = 200.0;
    pub const MIN_RH_PCT: f64 = 0.0;
    pub const MAX_RH_PCT: f64 = 100.0;
    /// Lowest supported absolute pressure [Pa].
    pub const MIN_P_PA: f64 = 50_000.0;
    /// Highest supported absolute pressure [Pa].
    pub const MAX_P_PA: f64 = 1_000_000.0;
}

/// Validation helpers for air state inputs.
pub(crate) mod validation {
    use super::*;

    fn check_range(what: &'static str, value: f64, min: f64, max: f64) -> AirResult<()> {
        if !value.is_finite() {
            return Err(AirError::NonFinite { what });
        }
        if value < min || value > max {
            return Err(AirError::OutOfRange {
                what,
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    pub fn validate_temperature(t: Temperature) -> AirResult<()> {
        check_range(
            "temperature [°C]",
            to_celsius(t),
            limits::MIN_T_C,
            limits::MAX_T_C,
        )
    }

    pub fn validate_relative_humidity(rh_pct: f64) -> AirResult<()> {
        check_range(
            "relative humidity [%]",
            rh_pct,
            limits::MIN_RH_PCT,
            limits::MAX_RH_PCT,
        )
    }

    /// No upper cap: any finite x keeps the vapour pressure below total pressure.
    pub fn validate_humidity_ratio(x: HumidityRatio) -> AirResult<()> {
        check_range("humidity ratio [kg/kg]", x, 0.0, f64::INFINITY)
    }

    pub fn validate_pressure(p: Pressure) -> AirResult<()> {
        check_range(
            "pressure [Pa]",
            p.value,
            limits::MIN_P_PA,
            limits::MAX_P_PA,
        )
    }

    pub fn validate_density(rho: Density, what: &'static str) -> AirResult<()> {
        ensure_positive(rho.value, what).map_err(|err| match err {
            CoreError::NonFinite { .. } => AirError::NonFinite { what },
            _ => AirError::NonPhysical {
                what: "density must be positive",
            },
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;
    use hf_core::units::{celsius, kg_per_m3, pa};

    #[test]
    fn temperature_range() {
        assert!(validate_temperature(celsius(20.0)).is_ok());
        assert!(validate_temperature(celsius(-99.9)).is_ok());
        assert!(validate_temperature(celsius(-101.0)).is_err());
        assert!(validate_temperature(celsius(200.5)).is_err());
        assert!(matches!(
            validate_temperature(celsius(f64::NAN)),
            Err(AirError::NonFinite { .. })
        ));
    }

    #[test]
    fn relative_humidity_range() {
        assert!(validate_relative_humidity(0.0).is_ok());
        assert!(validate_relative_humidity(100.0).is_ok());
        assert!(validate_relative_humidity(-0.1).is_err());
        assert!(validate_relative_humidity(100.1).is_err());
    }

    #[test]
    fn humidity_ratio_range() {
        assert!(validate_humidity_ratio(0.0).is_ok());
        assert!(validate_humidity_ratio(51.8).is_ok());
        assert!(validate_humidity_ratio(-0.001).is_err());
        assert!(matches!(
            validate_humidity_ratio(f64::INFINITY),
            Err(AirError::NonFinite { .. })
        ));
    }

    #[test]
    fn pressure_range() {
        assert!(validate_pressure(pa(101_325.0)).is_ok());
        assert!(validate_pressure(pa(10_000.0)).is_err());
        assert!(validate_pressure(pa(-1.0)).is_err());
    }

    #[test]
    fn properties_reject_non_physical() {
        assert!(GasProperties::new(kg_per_m3(1.2), kg_per_m3(1.2), 0.01).is_ok());
        assert!(GasProperties::new(kg_per_m3(0.0), kg_per_m3(1.2), 0.01).is_err());
        assert!(GasProperties::new(kg_per_m3(1.2), kg_per_m3(-1.0), 0.01).is_err());
        assert!(GasProperties::new(kg_per_m3(1.2), kg_per_m3(1.2), -0.01).is_err());
    }

    #[test]
    fn summary_lists_properties() {
        let props = GasProperties::new(kg_per_m3(1.2), kg_per_m3(1.19), 0.0073).unwrap();
        let s = props.summary();
        assert!(s.contains("1.2000"));
        assert!(s.contains("0.007300"));
    }
}
