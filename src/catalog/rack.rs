use serde::{Deserialize, Serialize};

use crate::{error::DataIntegrityError, quantity::cost::Cost};

#[derive(
    Debug,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    enumset::EnumSetType,
)]
pub enum RackWidth {
    #[serde(rename = "600mm")]
    #[display("600 mm")]
    W600,

    #[serde(rename = "800mm")]
    #[display("800 mm")]
    W800,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RackPrice {
    pub width: RackWidth,

    pub name: String,

    #[serde(rename = "price_usd")]
    pub price: Cost,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct RackPriceTable(Vec<RackPrice>);

impl RackPriceTable {
    pub fn get(&self, width: RackWidth) -> Result<&RackPrice, DataIntegrityError> {
        self.0
            .iter()
            .find(|rack| rack.width == width)
            .ok_or(DataIntegrityError::MissingRackPrice(width))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RackPrice> {
        self.0.iter()
    }
}
