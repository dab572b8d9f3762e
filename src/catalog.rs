//! Static reference data: equipment models and their prices.

mod battery;
mod builtin;
mod entry;
mod pdu;
mod rack;

use std::path::Path;

use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use self::{
    battery::BatterySku,
    entry::{AddOn, CatalogEntry},
    pdu::{PduCurrent, PduPhase, PduPrice, PduPriceTable, PduType},
    rack::{RackPrice, RackPriceTable, RackWidth},
};
use crate::{error::DataIntegrityError, prelude::*, quantity::cost::Cost, selector::PowerLadder};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// UPS feeding the IT load.
    pub it_ups: PowerLadder,

    /// Dedicated UPS feeding the cooling units.
    pub ac_ups: PowerLadder,

    /// Cooling units, selected by model key.
    pub cooling: Vec<CatalogEntry>,

    pub pdu: PduPriceTable,
    pub racks: RackPriceTable,
    pub batteries: Vec<BatterySku>,

    pub monitoring: AddOn,
    pub corridor_isolation: AddOn,
    pub distribution: AddOn,
}

impl Catalog {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let catalog: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        catalog.validate()?;
        info!(
            n_cooling_units = catalog.cooling.len(),
            n_batteries = catalog.batteries.len(),
            "loaded the catalog",
        );
        Ok(catalog)
    }

    /// Read the catalog from the path if given, fall back to the built-in one.
    pub fn read_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_from(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Look up a cooling unit by its model key.
    pub fn cooling_unit(&self, model: &str) -> Result<&CatalogEntry, DataIntegrityError> {
        self.cooling
            .iter()
            .find(|unit| unit.model == model)
            .ok_or_else(|| DataIntegrityError::UnknownCoolingModel(model.to_owned()))
    }

    /// Check that every combination the configuration can refer to resolves to a price.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        for pdu_type in EnumSet::<PduType>::all() {
            for current in EnumSet::<PduCurrent>::all() {
                let unit_price = self.pdu.unit_price(pdu_type, current)?;
                Self::validate_price(&format!("{current} {pdu_type} PDU"), unit_price)?;
            }
        }
        if let Some((pdu_type, current)) =
            self.pdu.iter().map(|row| (row.pdu_type, row.current)).duplicates().next()
        {
            return Err(DataIntegrityError::DuplicateEntry {
                table: "PDU",
                key: format!("{current} {pdu_type}"),
            });
        }
        if let Some(width) = self.racks.iter().map(|rack| rack.width).duplicates().next() {
            return Err(DataIntegrityError::DuplicateEntry { table: "rack", key: width.to_string() });
        }
        for width in EnumSet::<RackWidth>::all() {
            let rack = self.racks.get(width)?;
            Self::validate_price(&rack.name, rack.price)?;
        }
        for add_on in [&self.monitoring, &self.corridor_isolation, &self.distribution] {
            Self::validate_price(&add_on.name, add_on.price)?;
        }
        for entry in self.it_ups.iter().chain(self.ac_ups.iter()).chain(&self.cooling) {
            Self::validate_price(&entry.model, entry.price)?;
            if !entry.power.is_finite() || entry.power.0 <= 0.0 {
                return Err(DataIntegrityError::InvalidEntry { model: entry.model.clone() });
            }
        }
        if self.cooling.is_empty() {
            return Err(DataIntegrityError::EmptyTable("cooling"));
        }
        if let Some(model) = self.cooling.iter().map(|unit| &unit.model).duplicates().next() {
            return Err(DataIntegrityError::DuplicateEntry { table: "cooling", key: model.clone() });
        }
        if self.batteries.is_empty() {
            return Err(DataIntegrityError::EmptyTable("battery"));
        }
        for battery in &self.batteries {
            Self::validate_price(&battery.model, battery.price)?;
            if !battery.capacity.is_finite() || battery.capacity.0 <= 0.0 {
                return Err(DataIntegrityError::ZeroBatteryCapacity(battery.model.clone()));
            }
        }
        Ok(())
    }

    fn validate_price(model: &str, price: Cost) -> Result<(), DataIntegrityError> {
        if price.is_finite() && price >= Cost::ZERO {
            Ok(())
        } else {
            Err(DataIntegrityError::InvalidEntry { model: model.to_owned() })
        }
    }
}
