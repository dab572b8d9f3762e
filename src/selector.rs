//! Capacity-based equipment selection.

use serde::{Deserialize, Serialize};

use crate::{catalog::CatalogEntry, error::DataIntegrityError, quantity::power::Kilowatts};

/// Catalog entries ordered ascending by power.
///
/// Never empty, which makes [`PowerLadder::select`] total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct PowerLadder(Vec<CatalogEntry>);

impl TryFrom<Vec<CatalogEntry>> for PowerLadder {
    type Error = DataIntegrityError;

    fn try_from(mut entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(DataIntegrityError::EmptyTable("UPS"));
        }
        entries.sort_by(|lhs, rhs| lhs.power.0.total_cmp(&rhs.power.0));
        Ok(Self(entries))
    }
}

impl From<PowerLadder> for Vec<CatalogEntry> {
    fn from(ladder: PowerLadder) -> Self {
        ladder.0
    }
}

impl PowerLadder {
    /// Build from a compile-time table.
    #[must_use]
    pub fn from_array<const N: usize>(entries: [CatalogEntry; N]) -> Self {
        const { assert!(N != 0, "power ladder must not be empty") };
        let mut entries = Vec::from(entries);
        entries.sort_by(|lhs, rhs| lhs.power.0.total_cmp(&rhs.power.0));
        Self(entries)
    }

    /// Select the smallest entry satisfying the requirement.
    ///
    /// Saturates at the largest entry when nothing is big enough: an undersized recommendation
    /// is still priced instead of failing the whole quote.
    #[must_use]
    pub fn select(&self, required_power: Kilowatts) -> &CatalogEntry {
        let index = self
            .0
            .partition_point(|entry| entry.power < required_power)
            .min(self.0.len() - 1);
        &self.0[index]
    }

    #[must_use]
    pub fn largest(&self) -> &CatalogEntry {
        &self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.0.iter()
    }
}

/// Free-standing form of [`PowerLadder::select`] for ad-hoc, possibly unsorted tables.
///
/// Returns [`None`] only for an empty table.
#[must_use]
pub fn select_by_minimum_power(
    catalog: &[CatalogEntry],
    required_power: Kilowatts,
) -> Option<&CatalogEntry> {
    let mut sorted: Vec<&CatalogEntry> = catalog.iter().collect();
    sorted.sort_by(|lhs, rhs| lhs.power.0.total_cmp(&rhs.power.0));
    sorted
        .iter()
        .find(|entry| entry.power >= required_power)
        .or_else(|| sorted.last())
        .copied()
}
