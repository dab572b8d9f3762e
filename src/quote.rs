//! Cost aggregation: selections and a line-itemized price for a configuration.

mod selections;
mod summary;

use serde::{Deserialize, Serialize};

pub use self::{
    selections::{CoolingSelection, PduSelection, Selections},
    summary::{Category, CostLineItem, CostSummary},
};
use crate::{
    battery::BatteryOptions,
    catalog::{AddOn, Catalog, RackWidth},
    configuration::Configuration,
    cooling::size_cooling,
    error::DataIntegrityError,
    prelude::*,
    quantity::cost::Cost,
};

/// Headroom of the IT UPS over the IT load.
pub const IT_UPS_MARGIN: f64 = 1.3;

/// Every rack gets an A and a B feed.
pub const PDUS_PER_RACK: u32 = 2;

/// Commissioning surcharge as a fraction of the subtotal.
pub const COMMISSIONING_RATE: f64 = 0.10;

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub selections: Selections,
    pub summary: CostSummary,
}

impl Quote {
    /// Select the equipment and price the configuration.
    ///
    /// Pure and idempotent. Fails only when the catalog lacks something the configuration refers to.
    #[instrument(
        skip_all,
        fields(n_racks = configuration.total_racks(), it_load = %configuration.it_load()),
    )]
    pub fn compute(
        configuration: &Configuration,
        catalog: &Catalog,
        battery_options: &BatteryOptions,
    ) -> Result<Self, DataIntegrityError> {
        let mut items = Vec::new();

        for (category, width, count) in [
            (Category::Racks600, RackWidth::W600, configuration.racks_600_count),
            (Category::Racks800, RackWidth::W800, configuration.racks_800_count),
        ] {
            if count != 0 {
                let rack = catalog.racks.get(width)?;
                items.push(CostLineItem {
                    category,
                    label: rack.name.clone(),
                    quantity: count,
                    cost: rack.price * f64::from(count),
                });
            }
        }

        let it_load = configuration.it_load();
        let it_ups_threshold = it_load * IT_UPS_MARGIN;
        let it_ups = catalog.it_ups.select(it_ups_threshold);
        if it_ups.power < it_ups_threshold {
            warn!(model = %it_ups.model, threshold = %it_ups_threshold, "IT UPS is undersized");
        }
        items.push(CostLineItem {
            category: Category::ItUps,
            label: format!("IT UPS {}", it_ups.model),
            quantity: 1,
            cost: it_ups.price,
        });

        let cooling = match &configuration.cooling_model {
            Some(model) => {
                let unit = catalog.cooling_unit(model)?;
                let sizing = size_cooling(it_load, unit.power);
                items.push(CostLineItem {
                    category: Category::Cooling,
                    label: format!("Cooling unit {} (N+1)", unit.model),
                    quantity: sizing.units_count,
                    cost: unit.price * f64::from(sizing.units_count),
                });
                Some(CoolingSelection { unit: unit.clone(), sizing })
            }
            None => None,
        };

        let cooling_ups = match &cooling {
            Some(cooling) if configuration.backup_cooling_enabled => {
                let ups = catalog.ac_ups.select(cooling.sizing.total_power);
                if ups.power < cooling.sizing.total_power {
                    warn!(
                        model = %ups.model,
                        threshold = %cooling.sizing.total_power,
                        "cooling UPS is undersized",
                    );
                }
                items.push(CostLineItem {
                    category: Category::CoolingUps,
                    label: format!("Cooling UPS {}", ups.model),
                    quantity: 1,
                    cost: ups.price,
                });
                Some(ups.clone())
            }
            _ => None,
        };

        let total_racks = configuration.total_racks();
        let pdu = if total_racks == 0 {
            None
        } else {
            let unit_price =
                catalog.pdu.unit_price(configuration.pdu_type, configuration.pdu_current)?;
            let pdu = PduSelection {
                pdu_type: configuration.pdu_type,
                current: configuration.pdu_current,
                phase: configuration.pdu_phase,
                count: total_racks.saturating_mul(PDUS_PER_RACK),
                unit_price,
            };
            items.push(CostLineItem {
                category: Category::Pdu,
                label: format!("{} {} {} PDU", pdu.current, pdu.phase, pdu.pdu_type),
                quantity: pdu.count,
                cost: unit_price * f64::from(total_racks) * f64::from(PDUS_PER_RACK),
            });
            Some(pdu)
        };

        let battery = battery_options
            .get(configuration.selected_battery_index)
            .filter(|option| option.total_batteries != 0)
            .cloned();
        if let Some(battery) = &battery {
            items.push(CostLineItem {
                category: Category::Batteries,
                label: format!("Battery {}, {} strings", battery.model, battery.strings_needed),
                quantity: battery.total_batteries,
                cost: battery.total_price,
            });
        }

        for (category, enabled, add_on) in [
            (Category::Monitoring, configuration.monitoring_enabled, &catalog.monitoring),
            (
                Category::CorridorIsolation,
                configuration.corridor_isolation_enabled,
                &catalog.corridor_isolation,
            ),
            (
                Category::Distribution,
                configuration.distribution_system_enabled,
                &catalog.distribution,
            ),
        ] {
            if enabled {
                items.push(Self::add_on_item(category, add_on));
            }
        }

        let subtotal: Cost = items.iter().map(|item| item.cost).sum();
        let commissioning_surcharge = if configuration.commissioning_enabled {
            let surcharge = subtotal * COMMISSIONING_RATE;
            items.push(CostLineItem {
                category: Category::Commissioning,
                label: format!("Commissioning, {:.0}% of {subtotal}", COMMISSIONING_RATE * 100.0),
                quantity: 1,
                cost: surcharge,
            });
            surcharge
        } else {
            Cost::ZERO
        };
        let total = subtotal + commissioning_surcharge;
        debug!(n_items = items.len(), %subtotal, %total, "priced");

        Ok(Self {
            selections: Selections {
                it_load,
                it_ups_threshold,
                it_ups: it_ups.clone(),
                cooling,
                cooling_ups,
                pdu,
                battery,
            },
            summary: CostSummary { items, subtotal, commissioning_surcharge, total },
        })
    }

    fn add_on_item(category: Category, add_on: &AddOn) -> CostLineItem {
        CostLineItem { category, label: add_on.name.clone(), quantity: 1, cost: add_on.price }
    }
}

/// Price the configuration without the resolved selections.
pub fn compute_cost_summary(
    configuration: &Configuration,
    catalog: &Catalog,
    battery_options: &BatteryOptions,
) -> Result<CostSummary, DataIntegrityError> {
    Quote::compute(configuration, catalog, battery_options).map(|quote| quote.summary)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::{
        battery::BatteryBank,
        catalog::{PduCurrent, PduPriceTable, PduType},
        quantity::power::Kilowatts,
    };

    fn everything() -> Configuration {
        Configuration::builder()
            .racks_600_count(4)
            .power_600(Kilowatts::from(5.0))
            .racks_800_count(2)
            .power_800(Kilowatts::from(10.0))
            .cooling_model("IRC25")
            .backup_cooling_enabled(true)
            .backup_minutes(15)
            .pdu_type(PduType::Monitored)
            .pdu_current(PduCurrent::A32)
            .monitoring_enabled(true)
            .corridor_isolation_enabled(true)
            .distribution_system_enabled(true)
            .commissioning_enabled(true)
            .selected_battery_index(0)
            .build()
    }

    fn battery_options(configuration: &Configuration) -> BatteryOptions {
        BatteryBank::builder()
            .load(configuration.it_load())
            .backup_minutes(configuration.backup_minutes)
            .build()
            .size(&Catalog::builtin().batteries)
    }

    fn quote(configuration: &Configuration) -> Quote {
        Quote::compute(configuration, &Catalog::builtin(), &battery_options(configuration)).unwrap()
    }

    #[test]
    fn test_selections() {
        let quote = quote(&everything());
        let selections = &quote.selections;
        assert_eq!(selections.it_load, Kilowatts::from(40.0));
        assert_eq!(selections.it_ups.model, "UPS-IT-60");
        let cooling = selections.cooling.as_ref().unwrap();
        assert_eq!(cooling.unit.model, "IRC25");
        assert_eq!(cooling.sizing.units_count, 3);
        assert_eq!(selections.cooling_ups.as_ref().unwrap().model, "UPS-AC-90");
        assert_eq!(selections.pdu.unwrap().count, 12);
        assert_eq!(selections.battery, battery_options(&everything()).cheapest().cloned());
    }

    #[test]
    fn test_everything_is_additive() {
        let configuration = everything();
        let options = battery_options(&configuration);
        let summary = compute_cost_summary(&configuration, &Catalog::builtin(), &options).unwrap();

        let expected_subtotal = 4.0 * 1_150.0
            + 2.0 * 1_450.0
            + 37_800.0
            + 3.0 * 15_600.0
            + 26_700.0
            + 540.0 * 6.0 * 2.0
            + options[0].total_price.0
            + 4_800.0
            + 7_500.0
            + 6_200.0;
        assert_abs_diff_eq!(summary.subtotal.0, expected_subtotal, epsilon = 1e-6);

        let (surcharge, others): (Vec<_>, Vec<_>) = summary
            .items
            .iter()
            .partition(|item| item.category == Category::Commissioning);
        assert_eq!(surcharge.len(), 1);
        assert_abs_diff_eq!(
            others.iter().map(|item| item.cost.0).sum::<f64>(),
            summary.subtotal.0,
            epsilon = 1e-6,
        );
    }

    #[test]
    fn test_fixed_category_order() {
        let summary = quote(&everything()).summary;
        assert_eq!(
            summary.items.iter().map(|item| item.category).collect_vec(),
            [
                Category::Racks600,
                Category::Racks800,
                Category::ItUps,
                Category::Cooling,
                Category::CoolingUps,
                Category::Pdu,
                Category::Batteries,
                Category::Monitoring,
                Category::CorridorIsolation,
                Category::Distribution,
                Category::Commissioning,
            ],
        );
    }

    #[test]
    fn test_commissioning_surcharge() {
        let with = quote(&everything()).summary;
        let without =
            quote(&Configuration { commissioning_enabled: false, ..everything() }).summary;

        assert_eq!(with.subtotal, without.subtotal);
        assert_eq!(without.commissioning_surcharge, Cost::ZERO);
        assert_eq!(without.total, without.subtotal);
        assert!(without.item(Category::Commissioning).is_none());

        assert_abs_diff_eq!(with.total.0, with.subtotal.0 * 1.10, epsilon = 1e-6);
        assert_abs_diff_eq!(with.commissioning_surcharge.0, with.subtotal.0 * 0.10, epsilon = 1e-6);
        assert_eq!(with.item(Category::Commissioning).unwrap().cost, with.commissioning_surcharge);
        assert_eq!(with.total, with.subtotal + with.commissioning_surcharge);
    }

    #[test]
    fn test_idempotent() {
        let configuration = everything();
        let options = battery_options(&configuration);
        let catalog = Catalog::builtin();
        let first = Quote::compute(&configuration, &catalog, &options).unwrap();
        let second = Quote::compute(&configuration, &catalog, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.summary.total.0.to_bits(), second.summary.total.0.to_bits());
    }

    #[test]
    fn test_no_zero_rows() {
        let configuration = Configuration {
            racks_600_count: 0,
            monitoring_enabled: false,
            ..everything()
        };
        let summary = quote(&configuration).summary;
        assert!(summary.item(Category::Racks600).is_none());
        assert!(summary.item(Category::Racks800).is_some());
        assert!(summary.item(Category::Monitoring).is_none());
        assert!(summary.items.iter().all(|item| item.cost > Cost::ZERO));
    }

    #[test]
    fn test_no_cooling_means_no_cooling_ups() {
        let configuration = Configuration { cooling_model: None, ..everything() };
        let quote = quote(&configuration);
        assert!(quote.selections.cooling.is_none());
        assert!(quote.selections.cooling_ups.is_none());
        assert!(quote.summary.item(Category::Cooling).is_none());
        assert!(quote.summary.item(Category::CoolingUps).is_none());
    }

    #[test]
    fn test_cooling_without_backup() {
        let configuration = Configuration { backup_cooling_enabled: false, ..everything() };
        let summary = quote(&configuration).summary;
        assert!(summary.item(Category::Cooling).is_some());
        assert!(summary.item(Category::CoolingUps).is_none());
    }

    #[test]
    fn test_pdu_cost() {
        let summary = quote(&everything()).summary;
        let pdu = summary.item(Category::Pdu).unwrap();
        assert_eq!(pdu.quantity, 12);
        assert_abs_diff_eq!(pdu.cost.0, 6_480.0);
    }

    #[test]
    fn test_no_racks() {
        let configuration = Configuration { racks_600_count: 0, racks_800_count: 0, ..everything() };
        let quote = quote(&configuration);
        assert!(quote.selections.pdu.is_none());
        assert!(quote.summary.item(Category::Pdu).is_none());
        // The smallest IT UPS and the redundant cooling unit are still there:
        assert_eq!(quote.selections.it_ups.model, "UPS-IT-10");
        assert_eq!(quote.selections.cooling.unwrap().sizing.units_count, 1);
    }

    #[test]
    fn test_oversized_load_saturates() {
        let configuration = Configuration {
            racks_800_count: 40,
            power_800: Kilowatts::from(100.0),
            ..everything()
        };
        let quote = quote(&configuration);
        assert_eq!(quote.selections.it_ups.model, "UPS-IT-200");
        assert_eq!(quote.selections.cooling_ups.unwrap().model, "UPS-AC-250");
    }

    #[test]
    fn test_extreme_rack_counts() {
        let configuration = Configuration {
            racks_600_count: u32::MAX,
            racks_800_count: 1,
            power_600: Kilowatts::ZERO,
            power_800: Kilowatts::ZERO,
            ..everything()
        };
        let pdu = quote(&configuration).selections.pdu.unwrap();
        assert_eq!(pdu.count, u32::MAX);

        let configuration = Configuration {
            racks_600_count: 3_000_000_000,
            racks_800_count: 0,
            ..everything()
        };
        let summary = quote(&configuration).summary;
        let pdu = summary.item(Category::Pdu).unwrap();
        assert_eq!(pdu.quantity, u32::MAX);
        assert_abs_diff_eq!(pdu.cost.0, 540.0 * 6_000_000_000.0);
    }

    #[test]
    fn test_extreme_load_saturates_cooling() {
        let configuration = Configuration {
            racks_600_count: 0,
            racks_800_count: 600_000_000,
            power_800: Kilowatts::from(100.0),
            cooling_model: Some("IRC12".to_owned()),
            ..everything()
        };
        let quote = quote(&configuration);
        assert_eq!(quote.selections.cooling.unwrap().sizing.units_count, u32::MAX);
        assert_eq!(quote.selections.cooling_ups.unwrap().model, "UPS-AC-250");
    }

    #[test]
    fn test_invalid_battery_index_is_omitted() {
        let configuration = Configuration { selected_battery_index: 99, ..everything() };
        let quote = quote(&configuration);
        assert!(quote.selections.battery.is_none());
        assert!(quote.summary.item(Category::Batteries).is_none());
    }

    #[test]
    fn test_zero_battery_count_is_omitted() {
        let configuration = Configuration { racks_600_count: 0, racks_800_count: 0, ..everything() };
        let quote = quote(&configuration);
        assert!(quote.selections.battery.is_none());
        assert!(quote.summary.item(Category::Batteries).is_none());
    }

    #[test]
    fn test_empty_battery_options() {
        let summary =
            compute_cost_summary(&everything(), &Catalog::builtin(), &BatteryOptions::default())
                .unwrap();
        assert!(summary.item(Category::Batteries).is_none());
    }

    #[test]
    fn test_unknown_cooling_model() {
        let configuration =
            Configuration { cooling_model: Some("IRC99".to_owned()), ..everything() };
        assert_eq!(
            compute_cost_summary(&configuration, &Catalog::builtin(), &BatteryOptions::default()),
            Err(DataIntegrityError::UnknownCoolingModel("IRC99".to_owned())),
        );
    }

    #[test]
    fn test_missing_pdu_price() {
        let mut catalog = Catalog::builtin();
        catalog.pdu = PduPriceTable::from(vec![]);
        assert_eq!(
            compute_cost_summary(&everything(), &catalog, &BatteryOptions::default()),
            Err(DataIntegrityError::MissingPduPrice {
                pdu_type: PduType::Monitored,
                current: PduCurrent::A32,
            }),
        );
    }
}
