use serde::{Deserialize, Serialize};

use crate::quantity::cost::Cost;

/// Line item categories in their fixed order of appearance.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[display("600 mm racks")]
    Racks600,

    #[display("800 mm racks")]
    Racks800,

    #[display("IT UPS")]
    ItUps,

    #[display("Cooling")]
    Cooling,

    #[display("Cooling UPS")]
    CoolingUps,

    #[display("PDU")]
    Pdu,

    #[display("Batteries")]
    Batteries,

    #[display("Monitoring")]
    Monitoring,

    #[display("Corridor isolation")]
    CorridorIsolation,

    #[display("Power distribution")]
    Distribution,

    #[display("Commissioning")]
    Commissioning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub category: Category,
    pub label: String,
    pub quantity: u32,

    #[serde(rename = "cost_usd")]
    pub cost: Cost,
}

/// Priced bill of materials.
///
/// `total` is `subtotal` plus the commissioning surcharge, which is itself the last item
/// when present and is not part of the subtotal.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub items: Vec<CostLineItem>,

    #[serde(rename = "subtotal_usd")]
    pub subtotal: Cost,

    #[serde(rename = "commissioning_surcharge_usd")]
    pub commissioning_surcharge: Cost,

    #[serde(rename = "total_usd")]
    pub total: Cost,
}

impl CostSummary {
    pub fn item(&self, category: Category) -> Option<&CostLineItem> {
        self.items.iter().find(|item| item.category == category)
    }
}
