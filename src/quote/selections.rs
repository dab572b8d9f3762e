use serde::{Deserialize, Serialize};

use crate::{
    battery::BatteryOption,
    catalog::{CatalogEntry, PduCurrent, PduPhase, PduType},
    cooling::CoolingSizing,
    quantity::{cost::Cost, power::Kilowatts},
};

/// Equipment resolved from the catalog, for report collaborators.
///
/// Holds copies of the catalog rows rather than references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(rename = "it_load_kilowatts")]
    pub it_load: Kilowatts,

    /// IT load including the headroom margin.
    #[serde(rename = "it_ups_threshold_kilowatts")]
    pub it_ups_threshold: Kilowatts,

    pub it_ups: CatalogEntry,

    pub cooling: Option<CoolingSelection>,

    pub cooling_ups: Option<CatalogEntry>,

    pub pdu: Option<PduSelection>,

    pub battery: Option<BatteryOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoolingSelection {
    pub unit: CatalogEntry,

    #[serde(flatten)]
    pub sizing: CoolingSizing,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PduSelection {
    #[serde(rename = "type")]
    pub pdu_type: PduType,
    pub current: PduCurrent,
    pub phase: PduPhase,
    pub count: u32,

    #[serde(rename = "unit_price_usd")]
    pub unit_price: Cost,
}
