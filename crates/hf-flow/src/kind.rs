//! The four flow representations of a humid air stream.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which flow quantity is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Moist air mass flow [kg/s]
    MoistMassFlow,
    /// Moist air volumetric flow [m³/s]
    MoistVolumeFlow,
    /// Dry air mass flow [kg/s]
    DryMassFlow,
    /// Dry air volumetric flow [m³/s]
    DryVolumeFlow,
}

impl FlowKind {
    pub const ALL: [FlowKind; 4] = [
        FlowKind::MoistMassFlow,
        FlowKind::MoistVolumeFlow,
        FlowKind::DryMassFlow,
        FlowKind::DryVolumeFlow,
    ];

    /// Human readable name used in reports and errors.
    pub fn label(self) -> &'static str {
        match self {
            Self::MoistMassFlow => "moist air mass flow",
            Self::MoistVolumeFlow => "moist air volume flow",
            Self::DryMassFlow => "dry air mass flow",
            Self::DryVolumeFlow => "dry air volume flow",
        }
    }

    /// Short engineering symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::MoistMassFlow => "m_Ma",
            Self::MoistVolumeFlow => "V_Ma",
            Self::DryMassFlow => "m_Da",
            Self::DryVolumeFlow => "V_Da",
        }
    }

    /// Identifier accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Self::MoistMassFlow => "moist_mass",
            Self::MoistVolumeFlow => "moist_volume",
            Self::DryMassFlow => "dry_mass",
            Self::DryVolumeFlow => "dry_volume",
        }
    }

    pub fn is_mass(self) -> bool {
        matches!(self, Self::MoistMassFlow | Self::DryMassFlow)
    }

    pub fn is_moist(self) -> bool {
        matches!(self, Self::MoistMassFlow | Self::MoistVolumeFlow)
    }

    /// SI unit of the quantity.
    pub fn unit(self) -> &'static str {
        if self.is_mass() { "kg/s" } else { "m3/s" }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown flow kind '{0}' (expected moist_mass, moist_volume, dry_mass or dry_volume)")]
pub struct ParseFlowKindError(pub String);

impl FromStr for FlowKind {
    type Err = ParseFlowKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted || kind.symbol().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseFlowKindError(s.to_string()))
    }
}
