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
#[serde(rename_all = "lowercase")]
pub enum PduType {
    /// Plain power strip.
    Basic,

    /// Per-unit metering.
    Monitored,

    /// Per-outlet remote switching.
    Switched,
}

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
pub enum PduCurrent {
    #[serde(rename = "16A")]
    #[display("16A")]
    A16,

    #[serde(rename = "32A")]
    #[display("32A")]
    A32,
}

/// Not priced, carried through to the bill of materials only.
#[derive(Debug, Default, Hash, Serialize, Deserialize, derive_more::Display, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum PduPhase {
    #[default]
    #[display("1-phase")]
    Single,

    #[display("3-phase")]
    Three,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PduPrice {
    #[serde(rename = "type")]
    pub pdu_type: PduType,

    pub current: PduCurrent,

    #[serde(rename = "price_usd")]
    pub unit_price: Cost,
}

/// Unit price per (type, current rating).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct PduPriceTable(Vec<PduPrice>);

impl PduPriceTable {
    pub fn unit_price(
        &self,
        pdu_type: PduType,
        current: PduCurrent,
    ) -> Result<Cost, DataIntegrityError> {
        self.0
            .iter()
            .find(|row| row.pdu_type == pdu_type && row.current == current)
            .map(|row| row.unit_price)
            .ok_or(DataIntegrityError::MissingPduPrice { pdu_type, current })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PduPrice> {
        self.0.iter()
    }
}
