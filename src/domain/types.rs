use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

// ============================================================================
// Fixed Rating Tables
// ============================================================================

/// Power draw of a single light fixture in kW
pub const LIGHT_UNIT_KW: f64 = 0.4;
/// Power draw of a single ceiling fan in kW
pub const FAN_UNIT_KW: f64 = 0.8;

/// Errors produced by the estimation engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("invalid BHK category: {0} (expected 1, 2 or 3)")]
    InvalidCategory(u8),
}

// ============================================================================
// Property Size
// ============================================================================

/// Property size expressed as the number of bedroom-hall-kitchen units.
///
/// The category determines the installed light and fan count. Only 1BHK
/// through 3BHK exist; the numeric boundary conversion rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "u8", into = "u8")]
pub enum BhkCategory {
    One,
    Two,
    Three,
}

impl BhkCategory {
    /// Installed (light, fan) count for this property size
    pub fn fixture_counts(self) -> (u32, u32) {
        match self {
            Self::One => (2, 2),
            Self::Two => (3, 3),
            Self::Three => (4, 4),
        }
    }

    /// Combined light and fan load in kW before any appliances
    pub fn base_load_kw(self) -> f64 {
        let (lights, fans) = self.fixture_counts();
        f64::from(lights) * LIGHT_UNIT_KW + f64::from(fans) * FAN_UNIT_KW
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for BhkCategory {
    type Error = EstimatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(EstimatorError::InvalidCategory(other)),
        }
    }
}

impl From<BhkCategory> for u8 {
    fn from(bhk: BhkCategory) -> Self {
        bhk.as_u8()
    }
}

impl fmt::Display for BhkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}BHK", self.as_u8())
    }
}

// ============================================================================
// Appliances
// ============================================================================

/// The fixed appliance domain a household can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl Appliance {
    /// Nominal power draw in kW, fixed at design time
    pub fn rating_kw(self) -> f64 {
        match self {
            Self::AirConditioner => 3.0,
            Self::Refrigerator => 4.0,
            Self::WashingMachine => 2.0,
        }
    }

    /// Short label used in breakdowns and charts
    pub fn label(self) -> &'static str {
        match self {
            Self::AirConditioner => "AC",
            Self::Refrigerator => "Fridge",
            Self::WashingMachine => "Washing Machine",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which appliances a household has installed.
///
/// Each flag is independent; an absent appliance always contributes zero to
/// the breakdown, never an omitted entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceSelection {
    #[serde(default)]
    pub air_conditioner: bool,
    #[serde(default)]
    pub refrigerator: bool,
    #[serde(default)]
    pub washing_machine: bool,
}

impl ApplianceSelection {
    /// No appliances installed
    pub fn none() -> Self {
        Self::default()
    }

    /// Every appliance in the domain installed
    pub fn all() -> Self {
        Self {
            air_conditioner: true,
            refrigerator: true,
            washing_machine: true,
        }
    }

    pub fn contains(&self, appliance: Appliance) -> bool {
        match appliance {
            Appliance::AirConditioner => self.air_conditioner,
            Appliance::Refrigerator => self.refrigerator,
            Appliance::WashingMachine => self.washing_machine,
        }
    }

    /// Builder-style toggle, mostly useful in tests
    pub fn with(mut self, appliance: Appliance) -> Self {
        match appliance {
            Appliance::AirConditioner => self.air_conditioner = true,
            Appliance::Refrigerator => self.refrigerator = true,
            Appliance::WashingMachine => self.washing_machine = true,
        }
        self
    }

    /// Iterate over the installed appliances in domain order
    pub fn selected(&self) -> impl Iterator<Item = Appliance> + '_ {
        use strum::IntoEnumIterator;
        Appliance::iter().filter(|a| self.contains(*a))
    }

    /// Number of installed appliances
    pub fn count(&self) -> usize {
        self.selected().count()
    }
}

// ============================================================================
// Engine Output
// ============================================================================

/// Per-category power contributions in kW.
///
/// Unselected appliances are present with an explicit 0.0 so the total is
/// always the plain sum of all five fields. Recomputed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub lights_kw: f64,
    pub fans_kw: f64,
    pub air_conditioner_kw: f64,
    pub refrigerator_kw: f64,
    pub washing_machine_kw: f64,
}

/// One labeled slice of a breakdown, ready for display or charting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub label: &'static str,
    pub kw: f64,
}

impl EnergyBreakdown {
    /// Sum of every contribution in kW
    pub fn total_kw(&self) -> f64 {
        self.lights_kw
            + self.fans_kw
            + self.air_conditioner_kw
            + self.refrigerator_kw
            + self.washing_machine_kw
    }

    /// All five labeled entries, zeros included
    pub fn entries(&self) -> Vec<BreakdownEntry> {
        vec![
            BreakdownEntry { label: "Lights", kw: self.lights_kw },
            BreakdownEntry { label: "Fans", kw: self.fans_kw },
            BreakdownEntry {
                label: Appliance::AirConditioner.label(),
                kw: self.air_conditioner_kw,
            },
            BreakdownEntry {
                label: Appliance::Refrigerator.label(),
                kw: self.refrigerator_kw,
            },
            BreakdownEntry {
                label: Appliance::WashingMachine.label(),
                kw: self.washing_machine_kw,
            },
        ]
    }

    /// Entries with a nonzero contribution, the shape a pie chart consumes
    pub fn chart_entries(&self) -> Vec<BreakdownEntry> {
        self.entries().into_iter().filter(|e| e.kw > 0.0).collect()
    }
}

// ============================================================================
// Cost Estimation
// ============================================================================

/// Time window a cost estimate is projected over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum EstimateHorizon {
    Hourly,
    Daily,
    Monthly,
}

impl EstimateHorizon {
    /// Hours covered by this horizon (a month is 30 days)
    pub fn hours(self) -> f64 {
        match self {
            Self::Hourly => 1.0,
            Self::Daily => 24.0,
            Self::Monthly => 24.0 * 30.0,
        }
    }
}

/// Projected cost in currency units over each supported horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub hourly: f64,
    pub daily: f64,
    pub monthly: f64,
}

// ============================================================================
// Unit Tests
// ============================================================================
