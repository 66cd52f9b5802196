//! Ideal-gas moist air state.

use crate::error::{AirError, AirResult};
use crate::model::{GasState, HumidityRatio, validation};
use crate::psychrometrics;
use hf_core::units::{Density, Pressure, Temperature, celsius, constants, kg_per_m3, pa, to_celsius};

/// Which humidity quantity was specified last and is held fixed when
/// temperature or pressure change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityAnchor {
    RelativeHumidity,
    HumidityRatio,
}

/// Moist air described by dry-bulb temperature, pressure and one humidity
/// quantity. Every derived property is recalculated eagerly on each change.
#[derive(Debug, Clone, PartialEq)]
pub struct MoistAir {
    t: Temperature,
    p: Pressure,
    rh_pct: f64,
    x: HumidityRatio,
    anchor: HumidityAnchor,
    /// Saturation pressure of water vapour [Pa]
    p_sat: f64,
    /// Vapour partial pressure [Pa]
    p_v: f64,
    rho: Density,
    rho_da: Density,
}

impl Default for MoistAir {
    /// 20 °C, 50 % RH at standard atmospheric pressure.
    fn default() -> Self {
        let t = celsius(20.0);
        let p = pa(constants::STANDARD_PRESSURE_PA);
        let t_c = to_celsius(t);
        let p_sat = psychrometrics::saturation_pressure(t_c);
        let p_v = psychrometrics::vapour_pressure_from_rh(50.0, p_sat);
        let x = psychrometrics::humidity_ratio(p_v, p.value);
        Self {
            t,
            p,
            rh_pct: 50.0,
            x,
            anchor: HumidityAnchor::RelativeHumidity,
            p_sat,
            p_v,
            rho: kg_per_m3(psychrometrics::moist_air_density(p.value, t.value, x)),
            rho_da: kg_per_m3(psychrometrics::dry_air_density(p.value, t.value)),
        }
    }
}

impl MoistAir {
    /// Create a state from temperature, relative humidity [%] and pressure.
    pub fn new(t: Temperature, rh_pct: f64, p: Pressure) -> AirResult<Self> {
        Self::solve(t, p, HumidityAnchor::RelativeHumidity, rh_pct)
    }

    /// Create a state from temperature, humidity ratio [kg/kg] and pressure.
    pub fn from_humidity_ratio(t: Temperature, x: HumidityRatio, p: Pressure) -> AirResult<Self> {
        Self::solve(t, p, HumidityAnchor::HumidityRatio, x)
    }

    /// Compute a complete state. Nothing is mutated, so callers can swap the
    /// result in only once it is known to be valid.
    fn solve(
        t: Temperature,
        p: Pressure,
        anchor: HumidityAnchor,
        humidity: f64,
    ) -> AirResult<Self> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;

        let t_c = to_celsius(t);
        let p_sat = psychrometrics::saturation_pressure(t_c);

        let (rh_pct, x, p_v) = match anchor {
            HumidityAnchor::RelativeHumidity => {
                validation::validate_relative_humidity(humidity)?;
                let p_v = psychrometrics::vapour_pressure_from_rh(humidity, p_sat);
                if p_v >= p.value {
                    return Err(AirError::NonPhysical {
                        what: "vapour pressure must stay below total pressure",
                    });
                }
                let x = psychrometrics::humidity_ratio(p_v, p.value);
                (humidity, x, p_v)
            }
            HumidityAnchor::HumidityRatio => {
                validation::validate_humidity_ratio(humidity)?;
                let p_v = psychrometrics::vapour_pressure_from_x(humidity, p.value);
                let rh = psychrometrics::relative_humidity(p_v, p_sat);
                (rh, humidity, p_v)
            }
        };

        let rho = kg_per_m3(psychrometrics::moist_air_density(p.value, t.value, x));
        let rho_da = kg_per_m3(psychrometrics::dry_air_density(p.value, t.value));
        validation::validate_density(rho, "density")?;
        validation::validate_density(rho_da, "dry component density")?;

        Ok(Self {
            t,
            p,
            rh_pct,
            x,
            anchor,
            p_sat,
            p_v,
            rho,
            rho_da,
        })
    }

    fn anchored_humidity(&self) -> f64 {
        match self.anchor {
            HumidityAnchor::RelativeHumidity => self.rh_pct,
            HumidityAnchor::HumidityRatio => self.x,
        }
    }

    /// Humidity quantity currently held fixed.
    pub fn humidity_anchor(&self) -> HumidityAnchor {
        self.anchor
    }

    /// Saturation pressure of water vapour at the current temperature.
    pub fn saturation_pressure(&self) -> Pressure {
        pa(self.p_sat)
    }

    /// Partial pressure of water vapour.
    pub fn vapour_pressure(&self) -> Pressure {
        pa(self.p_v)
    }

    /// True when the humidity ratio exceeds saturation (mist / fog).
    pub fn is_supersaturated(&self) -> bool {
        self.p_v > self.p_sat
    }
}

impl GasState for MoistAir {
    fn temperature(&self) -> Temperature {
        self.t
    }

    fn pressure(&self) -> Pressure {
        self.p
    }

    fn relative_humidity(&self) -> f64 {
        self.rh_pct
    }

    fn humidity_ratio(&self) -> HumidityRatio {
        self.x
    }

    fn density(&self) -> Density {
        self.rho
    }

    fn dry_density(&self) -> Density {
        self.rho_da
    }

    fn set_temperature(&mut self, t: Temperature) -> AirResult<()> {
        *self = Self::solve(t, self.p, self.anchor, self.anchored_humidity())?;
        Ok(())
    }

    fn set_relative_humidity(&mut self, rh_pct: f64) -> AirResult<()> {
        *self = Self::solve(self.t, self.p, HumidityAnchor::RelativeHumidity, rh_pct)?;
        Ok(())
    }

    fn set_humidity_ratio(&mut self, x: HumidityRatio) -> AirResult<()> {
        *self = Self::solve(self.t, self.p, HumidityAnchor::HumidityRatio, x)?;
        Ok(())
    }

    fn set_pressure(&mut self, p: Pressure) -> AirResult<()> {
        *self = Self::solve(self.t, p, self.anchor, self.anchored_humidity())?;
        Ok(())
    }
}
