//! hf-air: humid air state and properties for humidflow.
//!
//! Provides:
//! - `GasState` trait: the property surface flow synchronization depends on
//! - `GasProperties`: snapshot of density, dry-component density and humidity ratio
//! - `MoistAir`: ideal-gas psychrometric implementation of `GasState`
//! - Psychrometric relations (saturation pressure, humidity ratio, densities)
//!
//! # Example
//!
//! ```
//! use hf_air::{GasState, MoistAir};
//! use hf_core::units::{celsius, pa};
//!
//! let mut air = MoistAir::new(celsius(25.0), 60.0, pa(101_325.0)).unwrap();
//! assert!(air.humidity_ratio() > 0.0);
//!
//! air.set_pressure(pa(95_000.0)).unwrap();
//! let props = air.properties();
//! assert!(props.density.value > 0.0);
//! ```

pub mod error;
pub mod model;
pub mod moist_air;
pub mod psychrometrics;

// Re-exports for ergonomics
pub use error::{AirError, AirResult};
pub use model::{GasProperties, GasState, HumidityRatio};
pub use moist_air::{HumidityAnchor, MoistAir};
