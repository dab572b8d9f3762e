use serde::{Deserialize, Serialize};

use crate::quantity::{
    cost::Cost,
    electric::{AmpereHours, Amperes, Volts},
    energy::KilowattHours,
    mass::Kilograms,
};

/// One battery model sized for the requested load and backup time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryOption {
    pub model: String,

    #[serde(rename = "capacity_ah")]
    pub capacity: AmpereHours,

    pub dimensions: String,

    /// Unit price.
    #[serde(rename = "price_usd")]
    pub price: Cost,

    /// Strings after packing into trays of six.
    pub strings_needed: u32,

    pub total_batteries: u32,

    #[serde(rename = "total_weight_kg")]
    pub total_weight: Kilograms,

    #[serde(rename = "total_price_usd")]
    pub total_price: Cost,

    #[serde(rename = "energy_per_string_kwh")]
    pub energy_per_string: KilowattHours,

    #[serde(rename = "required_energy_kwh")]
    pub required_energy: KilowattHours,

    #[serde(rename = "voltage_v")]
    pub voltage: Volts,

    /// Computed over the strings before packing into trays.
    #[serde(rename = "current_per_string_a")]
    pub current_per_string: Amperes,
}

/// Battery options ranked by total price, cheapest first.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::IntoIterator,
)]
#[into_iterator(owned, ref)]
pub struct BatteryOptions(pub(super) Vec<BatteryOption>);

impl BatteryOptions {
    #[must_use]
    pub fn cheapest(&self) -> Option<&BatteryOption> {
        self.0.first()
    }

    /// Valid selection index into the freshly computed list.
    ///
    /// Out-of-range indices fall back to the cheapest option; [`None`] for an empty list.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.0.is_empty() {
            None
        } else if index < self.0.len() {
            Some(index)
        } else {
            Some(0)
        }
    }
}
