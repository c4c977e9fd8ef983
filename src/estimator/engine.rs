//! Energy breakdown engine.
//!
//! Pure, stateless arithmetic over the fixed rating tables in
//! [`crate::domain`]. The engine holds no memory between calls; the
//! calling layer (HTTP handler, CLI, UI) re-invokes it on every input
//! change and renders the fresh result.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Appliance, ApplianceSelection, BhkCategory, CostEstimate, EnergyBreakdown, EstimateHorizon,
    EstimatorError, FAN_UNIT_KW, LIGHT_UNIT_KW,
};

/// Default electricity tariff in currency units per kWh
pub const DEFAULT_RATE_PER_KWH: f64 = 6.0;

/// Compute the labeled power breakdown for a property.
///
/// Algorithm:
/// 1. Look up the installed light and fan count for the BHK category.
/// 2. Lights = count x 0.4 kW, Fans = count x 0.8 kW.
/// 3. Each selected appliance contributes its nominal rating; each
///    unselected one contributes an explicit 0.0.
///
/// The sum of the returned fields always equals [`compute_total`]; no
/// contribution is ever negative.
pub fn compute_breakdown(bhk: BhkCategory, appliances: ApplianceSelection) -> EnergyBreakdown {
    let (lights, fans) = bhk.fixture_counts();
    EnergyBreakdown {
        lights_kw: f64::from(lights) * LIGHT_UNIT_KW,
        fans_kw: f64::from(fans) * FAN_UNIT_KW,
        air_conditioner_kw: rating_if(appliances.air_conditioner, Appliance::AirConditioner),
        refrigerator_kw: rating_if(appliances.refrigerator, Appliance::Refrigerator),
        washing_machine_kw: rating_if(appliances.washing_machine, Appliance::WashingMachine),
    }
}

/// Boundary entry point taking a raw BHK number.
///
/// Rejects anything outside 1..=3 with [`EstimatorError::InvalidCategory`]
/// rather than silently defaulting.
pub fn breakdown_for(bhk: u8, appliances: ApplianceSelection) -> Result<EnergyBreakdown, EstimatorError> {
    Ok(compute_breakdown(BhkCategory::try_from(bhk)?, appliances))
}

/// Total power draw of a breakdown in kW
pub fn compute_total(breakdown: &EnergyBreakdown) -> f64 {
    breakdown.total_kw()
}

fn rating_if(selected: bool, appliance: Appliance) -> f64 {
    if selected {
        appliance.rating_kw()
    } else {
        0.0
    }
}

/// Electricity tariff used to project power draw into currency.
///
/// The rate is regional configuration, not a physical constant; it is
/// loaded from [`crate::config`] and defaults to 6 units/kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub rate_per_kwh: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            rate_per_kwh: DEFAULT_RATE_PER_KWH,
        }
    }
}

impl Tariff {
    pub fn new(rate_per_kwh: f64) -> Self {
        Self { rate_per_kwh }
    }

    /// Cost of running `total_kw` continuously over the given horizon
    pub fn cost(&self, total_kw: f64, horizon: EstimateHorizon) -> f64 {
        total_kw * horizon.hours() * self.rate_per_kwh
    }

    /// Costs over every supported horizon at once
    pub fn estimate(&self, total_kw: f64) -> CostEstimate {
        CostEstimate {
            hourly: self.cost(total_kw, EstimateHorizon::Hourly),
            daily: self.cost(total_kw, EstimateHorizon::Daily),
            monthly: self.cost(total_kw, EstimateHorizon::Monthly),
        }
    }
}
