use serde::{Deserialize, Serialize};

use crate::quantity::{
    Quantity,
    cost::Cost,
    electric::{AmpereHours, Volts},
    mass::Kilograms,
};

/// Valve-regulated lead-acid block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatterySku {
    pub model: String,

    #[serde(rename = "capacity_ah")]
    pub capacity: AmpereHours,

    #[serde(rename = "weight_kg")]
    pub weight: Kilograms,

    pub dimensions: String,

    #[serde(rename = "price_usd")]
    pub price: Cost,
}

impl BatterySku {
    /// Every block in the catalog is a 12 V monoblock.
    pub const NOMINAL_VOLTAGE: Volts = Quantity(12.0);
}
