use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, power::Kilowatts};

/// UPS or cooling unit.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[builder(into)]
    pub model: String,

    #[serde(rename = "power_kilowatts")]
    pub power: Kilowatts,

    #[serde(rename = "price_usd")]
    pub price: Cost,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// Flat-priced optional add-on: monitoring, corridor isolation, power distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,

    #[serde(rename = "price_usd")]
    pub price: Cost,
}
