//! # Risk Scale
//!
//! The single 0–3 risk scale used for the inherent risk of a data audit
//! and the residual risk of management policies and breach plans.
//!
//! | Code | Level   |
//! |------|---------|
//! | 0    | Unknown |
//! | 1    | Low     |
//! | 2    | Mid     |
//! | 3    | High    |
//!
//! Stored and serialized as the numeric code; displayed as the label.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A risk level on the 0–3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum RiskLevel {
    /// Risk has not been assessed.
    #[default]
    Unknown = 0,
    /// Low risk.
    Low = 1,
    /// Mid risk.
    Mid = 2,
    /// High risk.
    High = 3,
}

impl RiskLevel {
    /// All levels in ascending order.
    pub const ALL: [RiskLevel; 4] = [Self::Unknown, Self::Low, Self::Mid, Self::High];

    /// The numeric code (0–3).
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Human label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }

    /// Whether the risk has not been assessed (code 0).
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Mid or high (code ≥ 2).
    pub fn is_mid_or_high(&self) -> bool {
        self.code() >= 2
    }

    /// High (code == 3).
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = RegistryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Low),
            2 => Ok(Self::Mid),
            3 => Ok(Self::High),
            other => Err(RegistryError::InvalidRiskLevel(other)),
        }
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.code()
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
