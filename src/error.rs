use crate::catalog::{PduCurrent, PduType, RackWidth};

/// Catalog and configuration mismatch.
///
/// Never expected in production: it means the catalog lacks an entry the configuration refers to.
/// Surfaced to the user as an unsupported configuration rather than priced as zero.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("no price for the {current} {pdu_type} PDU")]
    MissingPduPrice { pdu_type: PduType, current: PduCurrent },

    #[error("no price for the {0} rack")]
    MissingRackPrice(RackWidth),

    #[error("unknown cooling unit model `{0}`")]
    UnknownCoolingModel(String),

    #[error("duplicate `{key}` in the {table} table")]
    DuplicateEntry { table: &'static str, key: String },

    #[error("the {0} table is empty")]
    EmptyTable(&'static str),

    #[error("battery `{0}` has no capacity")]
    ZeroBatteryCapacity(String),

    #[error("`{model}` has an invalid price or rating")]
    InvalidEntry { model: String },
}
