//! Battery bank sizing.
//!
//! For every battery model, the bank must hold enough energy for the backup time
//! and keep each string under the C/2 discharge current. The tighter of the two
//! constraints sets the string count, which is then packed into trays of six.

mod option;
mod voltage;

use bon::Builder;
use itertools::Itertools;

pub use self::{
    option::{BatteryOption, BatteryOptions},
    voltage::dc_bus_voltage,
};
use crate::{
    catalog::BatterySku,
    prelude::*,
    quantity::{
        Quantity,
        electric::{Amperes, Volts},
        energy::KilowattHours,
        power::Kilowatts,
        time::Hours,
    },
};

/// Batteries per shelving tray.
const TRAY_SIZE: f64 = 6.0;

/// Maximal continuous discharge current as a fraction of the amp-hour rating.
const MAX_DISCHARGE_RATE: f64 = 0.5;

#[must_use]
#[derive(Copy, Clone, Builder)]
pub struct BatteryBank {
    load: Kilowatts,

    backup_minutes: u32,

    #[builder(default = BatteryBank::DEFAULT_INVERTER_EFFICIENCY)]
    inverter_efficiency: f64,
}

impl BatteryBank {
    pub const DEFAULT_INVERTER_EFFICIENCY: f64 = 0.9;

    /// Size the bank with every battery model and rank the options by total price.
    ///
    /// Degenerate inputs (zero load or backup time) produce degenerate options rather than an error.
    #[instrument(
        skip_all,
        fields(load = %self.load, backup_minutes = self.backup_minutes, n_models = skus.len()),
    )]
    pub fn size(&self, skus: &[BatterySku]) -> BatteryOptions {
        let backup_time = Hours::from_minutes(self.backup_minutes);
        let required_energy = self.load * backup_time / self.inverter_efficiency;
        let voltage = dc_bus_voltage(self.load);
        let total_current = self.load / voltage;
        debug!(%required_energy, %voltage, %total_current, "sizing the battery bank…");

        let options = skus
            .iter()
            .map(|sku| Self::size_with(sku, required_energy, voltage, total_current))
            .sorted_by_key(|option| option.total_price.ordered())
            .collect_vec();
        if let Some(cheapest) = options.first() {
            debug!(model = %cheapest.model, total_price = %cheapest.total_price, "cheapest option");
        }
        BatteryOptions(options)
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size_with(
        sku: &BatterySku,
        required_energy: KilowattHours,
        voltage: Volts,
        total_current: Amperes,
    ) -> BatteryOption {
        let batteries_per_string = (voltage / BatterySku::NOMINAL_VOLTAGE).ceil();

        let energy_per_battery_wh = sku.capacity.0 * BatterySku::NOMINAL_VOLTAGE.0;
        let batteries_for_energy = (required_energy.watt_hours() / energy_per_battery_wh).ceil();
        let strings_for_energy = (batteries_for_energy / batteries_per_string).ceil();

        let max_current_per_string = sku.capacity.0 * MAX_DISCHARGE_RATE;
        let strings_for_current = (total_current.0 / max_current_per_string).ceil();

        let strings_needed = strings_for_energy.max(strings_for_current);

        // Both are packed by the tray size, but from different base quantities:
        let total_batteries = (strings_needed * batteries_per_string / TRAY_SIZE).ceil();
        let packed_strings = (strings_needed / TRAY_SIZE).ceil();

        let current_per_string = if strings_needed > 0.0 {
            Quantity(total_current.0 / strings_needed)
        } else {
            Amperes::ZERO
        };

        BatteryOption {
            model: sku.model.clone(),
            capacity: sku.capacity,
            dimensions: sku.dimensions.clone(),
            price: sku.price,
            strings_needed: packed_strings as u32,
            total_batteries: total_batteries as u32,
            total_weight: sku.weight * total_batteries,
            total_price: sku.price * total_batteries,
            energy_per_string: sku.capacity * voltage,
            required_energy,
            voltage,
            current_per_string,
        }
    }
}
