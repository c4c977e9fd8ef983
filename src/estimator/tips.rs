//! Energy-saving advice keyed to the household's appliance selection.

use serde::Serialize;

use crate::domain::{Appliance, ApplianceSelection};

/// A titled group of advice lines for one load category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipSheet {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

const LIGHTING_TIPS: TipSheet = TipSheet {
    category: "Lighting",
    tips: &[
        "Use LED bulbs instead of incandescent",
        "Turn off lights when not needed",
        "Use natural light during the day",
    ],
};

const FAN_TIPS: TipSheet = TipSheet {
    category: "Fans",
    tips: &[
        "Clean fan blades regularly",
        "Use ceiling fans with AC to save energy",
        "Optimal fan speed saves electricity",
    ],
};

const AC_TIPS: TipSheet = TipSheet {
    category: "Air Conditioner",
    tips: &[
        "Set temperature to 24C or higher",
        "Use the timer function",
        "Regular maintenance saves energy",
    ],
};

const FRIDGE_TIPS: TipSheet = TipSheet {
    category: "Refrigerator",
    tips: &[
        "Don't overload the fridge",
        "Keep it away from heat sources",
        "Check door seals regularly",
    ],
};

const WASHING_MACHINE_TIPS: TipSheet = TipSheet {
    category: "Washing Machine",
    tips: &[
        "Use cold water when possible",
        "Run full loads only",
        "Clean lint filters regularly",
    ],
};

/// Advice sheets for a household.
///
/// Lighting and fan sheets are always present since every property has
/// both; appliance sheets appear only for installed appliances.
pub fn saving_tips(selection: &ApplianceSelection) -> Vec<TipSheet> {
    let mut sheets = vec![LIGHTING_TIPS, FAN_TIPS];
    for appliance in selection.selected() {
        sheets.push(match appliance {
            Appliance::AirConditioner => AC_TIPS,
            Appliance::Refrigerator => FRIDGE_TIPS,
            Appliance::WashingMachine => WASHING_MACHINE_TIPS,
        });
    }
    sheets
}
