//! Ideal-gas psychrometric relations for moist air.
//!
//! All functions work on plain SI scalars (Pa, K, °C where named, kg/kg) so
//! they can be reused outside of `MoistAir`.

/// Ratio of molar masses of water vapour and dry air, M_w / M_da.
pub const EPSILON: f64 = 0.621945;

/// Specific gas constant of dry air [J/(kg·K)].
pub const R_DRY_AIR: f64 = 287.055;

/// Saturation pressure of water vapour [Pa] at `t_c` [°C].
///
/// Magnus form over liquid water at and above 0 °C, over ice below.
pub fn saturation_pressure(t_c: f64) -> f64 {
    if t_c >= 0.0 {
        611.2 * (17.62 * t_c / (243.12 + t_c)).exp()
    } else {
        611.2 * (22.46 * t_c / (272.62 + t_c)).exp()
    }
}

/// Vapour partial pressure [Pa] from relative humidity [%] and saturation pressure [Pa].
pub fn vapour_pressure_from_rh(rh_pct: f64, p_sat: f64) -> f64 {
    rh_pct / 100.0 * p_sat
}

/// Vapour partial pressure [Pa] from humidity ratio and total pressure [Pa].
pub fn vapour_pressure_from_x(x: f64, p: f64) -> f64 {
    x * p / (EPSILON + x)
}

/// Humidity ratio [kg/kg] from vapour partial pressure and total pressure [Pa].
///
/// Callers must ensure `p_v < p`.
pub fn humidity_ratio(p_v: f64, p: f64) -> f64 {
    EPSILON * p_v / (p - p_v)
}

/// Relative humidity [%] from vapour and saturation pressure, capped at 100 %
/// (supersaturated states are reported as saturated).
pub fn relative_humidity(p_v: f64, p_sat: f64) -> f64 {
    (p_v / p_sat * 100.0).min(100.0)
}

/// Density of dry air at total pressure `p` [Pa] and temperature `t_k` [K].
pub fn dry_air_density(p: f64, t_k: f64) -> f64 {
    p / (R_DRY_AIR * t_k)
}

/// Density of moist air [kg/m³] with humidity ratio `x`.
///
/// ```text
/// ρ = p (1 + x) / (R_da T (1 + x / ε))
/// ```
pub fn moist_air_density(p: f64, t_k: f64, x: f64) -> f64 {
    dry_air_density(p, t_k) * (1.0 + x) / (1.0 + x / EPSILON)
}
