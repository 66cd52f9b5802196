//! Integration tests for the moist air gas state.

use hf_air::psychrometrics::EPSILON;
use hf_air::{AirError, GasProperties, GasState, MoistAir};
use hf_core::units::{celsius, pa};
use hf_core::{Tolerances, nearly_equal};
use proptest::prelude::*;

#[test]
fn properties_snapshot_matches_accessors() {
    let air = MoistAir::new(celsius(25.0), 60.0, pa(98_000.0)).unwrap();
    let props = air.properties();

    assert_eq!(props.density, air.density());
    assert_eq!(props.dry_density, air.dry_density());
    assert_eq!(props.humidity_ratio, air.humidity_ratio());
}

#[test]
fn moist_density_follows_mixture_relation() {
    let air = MoistAir::new(celsius(35.0), 80.0, pa(101_325.0)).unwrap();
    let x = air.humidity_ratio();
    let expected = air.dry_density().value * (1.0 + x) / (1.0 + x / EPSILON);

    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    };
    assert!(nearly_equal(air.density().value, expected, tol));
}

#[test]
fn lower_pressure_lowers_both_densities() {
    let mut air = MoistAir::default();
    let before = air.properties();

    air.set_pressure(pa(80_000.0)).unwrap();

    assert!(air.density() < before.density);
    assert!(air.dry_density() < before.dry_density);
}

#[test]
fn out_of_range_errors_carry_the_offending_value() {
    let mut air = MoistAir::default();
    match air.set_relative_humidity(150.0) {
        Err(AirError::OutOfRange { value, max, .. }) => {
            assert_eq!(value, 150.0);
            assert_eq!(max, 100.0);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn saturated_hot_air_accepts_its_own_humidity_ratio() {
    let mut air = MoistAir::new(celsius(99.0), 100.0, pa(101_325.0)).unwrap();
    let x = air.humidity_ratio();
    assert!(x > 10.0);

    let props = air.properties();
    assert!(GasProperties::new(props.density, props.dry_density, props.humidity_ratio).is_ok());

    air.set_humidity_ratio(x).unwrap();
    assert_eq!(air.humidity_ratio(), x);
}

proptest! {
    #[test]
    fn humidity_ratio_of_any_valid_state_is_accepted(
        t_c in -100.0_f64..200.0,
        rh in 0.0_f64..100.0,
        p in 50_000.0_f64..1_000_000.0,
    ) {
        let built = MoistAir::new(celsius(t_c), rh, pa(p));
        prop_assume!(built.is_ok());
        let mut air = built.unwrap();
        let x = air.humidity_ratio();
        let props = air.properties();
        prop_assert!(GasProperties::new(props.density, props.dry_density, props.humidity_ratio).is_ok());
        prop_assert!(air.set_humidity_ratio(x).is_ok());
    }

    #[test]
    fn valid_inputs_give_physical_properties(
        t_c in -50.0_f64..60.0,
        rh in 0.0_f64..100.0,
        p in 60_000.0_f64..200_000.0,
    ) {
        let air = MoistAir::new(celsius(t_c), rh, pa(p)).unwrap();
        prop_assert!(air.density().value > 0.0);
        prop_assert!(air.dry_density().value > 0.0);
        prop_assert!(air.humidity_ratio() >= 0.0);
    }

    #[test]
    fn rejected_temperature_never_mutates(t_c in 200.5_f64..1000.0) {
        let mut air = MoistAir::default();
        let before = air.clone();
        prop_assert!(air.set_temperature(celsius(t_c)).is_err());
        prop_assert_eq!(air, before);
    }
}
