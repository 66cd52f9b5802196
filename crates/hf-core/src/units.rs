// hf-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MassRate as UomMassRate, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Temperature from degrees Celsius.
#[inline]
pub fn celsius(v: f64) -> Temperature {
    k(v + constants::CELSIUS_OFFSET_K)
}

/// Degrees Celsius of an absolute temperature.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    t.value - constants::CELSIUS_OFFSET_K
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales [K].
    pub const CELSIUS_OFFSET_K: f64 = 273.15;

    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    /// Standard atmosphere [Pa].
    pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _mdot = kgps(1.2);
        let _vdot = m3ps(0.8);
        let _rho = kg_per_m3(1.2);
    }

    #[test]
    fn celsius_round_trip() {
        let t = celsius(20.0);
        assert!((t.value - 293.15).abs() < 1e-12);
        assert!((to_celsius(t) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn volume_rate_per_hour() {
        use uom::si::volume_rate::cubic_meter_per_hour;
        let v = m3ps(1.0);
        assert!((v.get::<cubic_meter_per_hour>() - constants::SECONDS_PER_HOUR).abs() < 1e-9);
    }
}
