//! hf-flow: synchronized humid air flow quantities.
//!
//! A [`NamedFlow`] keeps four equivalent descriptions of one humid air stream
//! consistent with each other and with its gas state:
//!
//! - moist air mass flow [kg/s]
//! - moist air volumetric flow [m³/s]
//! - dry air mass flow [kg/s]
//! - dry air volumetric flow [m³/s]
//!
//! Exactly one of them is locked (the last one set explicitly). Every write,
//! whether to the locked value or to the gas state, re-derives the other three
//! from scratch through the fixed conversion paths in [`conversion`].
//!
//! # Example
//!
//! ```
//! use hf_air::MoistAir;
//! use hf_flow::{FlowKind, NamedFlow, share};
//! use hf_core::units::celsius;
//!
//! let air = share(MoistAir::default());
//! let mut flow = NamedFlow::new("supply", 1.0, FlowKind::MoistMassFlow, air).unwrap();
//! assert!(flow.flow(FlowKind::DryMassFlow) < 1.0);
//!
//! flow.set_temperature(celsius(30.0)).unwrap();
//! assert_eq!(flow.flow(FlowKind::MoistMassFlow), 1.0);
//! ```
//!
//! # Shared gas states
//!
//! A gas state may be shared between flows through [`SharedGasState`]. A
//! change routed through one flow recomputes only that flow; other flows
//! holding the same state keep their previous numbers until one of their own
//! setters (or [`NamedFlow::set_gas_state`]) runs. There is no notification
//! between flows.

pub mod conversion;
pub mod error;
pub mod kind;
pub mod named_flow;
pub mod quantities;
pub mod report;

// Re-exports for ergonomics
pub use conversion::ConversionEdge;
pub use error::{FlowError, FlowResult};
pub use kind::{FlowKind, ParseFlowKindError};
pub use named_flow::{NamedFlow, NamedFlowBuilder, SharedGasState, share};
pub use quantities::FlowQuantities;
