//! Customer choices, as an immutable snapshot per computation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    battery::BatteryOptions,
    catalog::{PduCurrent, PduPhase, PduType},
    prelude::*,
    quantity::{Quantity, power::Kilowatts},
};

/// Blank fields deserialize as zero, disabled, or absent.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct Configuration {
    #[builder(default)]
    pub racks_600_count: u32,

    #[builder(default)]
    pub racks_800_count: u32,

    /// Power per 600 mm rack.
    #[builder(default)]
    #[serde(rename = "power_600_kilowatts")]
    pub power_600: Kilowatts,

    /// Power per 800 mm rack.
    #[builder(default)]
    #[serde(rename = "power_800_kilowatts")]
    pub power_800: Kilowatts,

    /// Cooling unit model key, [`None`] when no cooling is chosen.
    #[builder(into)]
    pub cooling_model: Option<String>,

    /// Whether the cooling draws from a dedicated UPS.
    #[builder(default)]
    pub backup_cooling_enabled: bool,

    #[builder(default)]
    pub backup_minutes: u32,

    #[builder(default = PduCurrent::A16)]
    pub pdu_current: PduCurrent,

    #[builder(default)]
    pub pdu_phase: PduPhase,

    #[builder(default = PduType::Basic)]
    pub pdu_type: PduType,

    #[builder(default)]
    pub monitoring_enabled: bool,

    #[builder(default)]
    pub corridor_isolation_enabled: bool,

    #[builder(default)]
    pub distribution_system_enabled: bool,

    #[builder(default)]
    pub commissioning_enabled: bool,

    /// Index into the ranked battery options.
    #[builder(default)]
    pub selected_battery_index: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Configuration {
    #[must_use]
    pub const fn total_racks(&self) -> u32 {
        self.racks_600_count.saturating_add(self.racks_800_count)
    }

    /// Aggregate power drawn by the server racks.
    pub fn it_load(&self) -> Kilowatts {
        self.power_600 * f64::from(self.racks_600_count)
            + self.power_800 * f64::from(self.racks_800_count)
    }

    /// Re-validate the battery selection against a freshly replaced option list.
    pub fn reconcile_battery_selection(&mut self, options: &BatteryOptions) {
        let index = options.clamp_index(self.selected_battery_index).unwrap_or(0);
        if index != self.selected_battery_index {
            warn!(
                selected = self.selected_battery_index,
                n_options = options.len(),
                "battery selection is out of range, resetting",
            );
            self.selected_battery_index = index;
        }
    }

    /// Check the configuration against the host limits.
    ///
    /// Out-of-range values are errors. Degenerate but well-defined inputs are returned
    /// for the host to decide whether a summary is meaningful.
    pub fn validate(&self, limits: &Limits) -> Result<Vec<Degeneracy>> {
        for (width, power) in [("600 mm", self.power_600), ("800 mm", self.power_800)] {
            ensure!(
                power.is_finite() && power >= Kilowatts::ZERO && power <= limits.max_rack_power,
                "power per {width} rack must be within 0…{}, got {power}",
                limits.max_rack_power,
            );
        }
        ensure!(
            limits.backup_minutes.contains(&self.backup_minutes),
            "backup time must be within {}…{} minutes, got {}",
            limits.backup_minutes.start(),
            limits.backup_minutes.end(),
            self.backup_minutes,
        );

        let mut degeneracies = Vec::new();
        if self.total_racks() == 0 {
            degeneracies.push(Degeneracy::NoRacks);
        } else if self.it_load() == Kilowatts::ZERO {
            degeneracies.push(Degeneracy::ZeroLoad);
        }
        if self.backup_minutes == 0 {
            degeneracies.push(Degeneracy::ZeroBackupTime);
        }
        for degeneracy in &degeneracies {
            warn!(%degeneracy, "degenerate configuration");
        }
        Ok(degeneracies)
    }
}

/// Host-imposed input limits.
///
/// The backup time range deliberately has no default: the host must choose it.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Limits {
    pub backup_minutes: RangeInclusive<u32>,
    pub max_rack_power: Kilowatts,
}

impl Limits {
    pub const MAX_RACK_POWER: Kilowatts = Quantity(100.0);

    pub const fn new(backup_minutes: RangeInclusive<u32>) -> Self {
        Self { backup_minutes, max_rack_power: Self::MAX_RACK_POWER }
    }
}

/// Well-defined input that yields a meaningless quote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Degeneracy {
    #[display("no racks")]
    NoRacks,

    #[display("zero IT load")]
    ZeroLoad,

    #[display("zero backup time")]
    ZeroBackupTime,
}
