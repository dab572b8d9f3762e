use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use rackplan::{
    battery::BatteryOptions,
    quote::{Category, CostSummary, Selections},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_battery_options_table(options: &BatteryOptions, selected: Option<usize>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#", "Model", "Capacity", "Bus", "Strings", "Batteries", "Weight", "Energy", "Current",
        "Total",
    ]);
    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            Cell::new(&option.model).fg(if is_selected { Color::Green } else { Color::Reset }),
            Cell::new(option.capacity).set_alignment(CellAlignment::Right),
            Cell::new(option.voltage).set_alignment(CellAlignment::Right),
            Cell::new(option.strings_needed).set_alignment(CellAlignment::Right),
            Cell::new(option.total_batteries).set_alignment(CellAlignment::Right),
            Cell::new(option.total_weight).set_alignment(CellAlignment::Right),
            Cell::new(option.required_energy)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(option.current_per_string).set_alignment(CellAlignment::Right),
            Cell::new(option.total_price).set_alignment(CellAlignment::Right).fg(
                if is_selected { Color::Green } else { Color::Reset },
            ),
        ]);
    }
    table
}

#[must_use]
pub fn build_selections_table(selections: &Selections) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Equipment", "Model", "Rating", "Sized for"]);
    table.add_row(vec![
        Cell::new("IT UPS"),
        Cell::new(&selections.it_ups.model),
        Cell::new(selections.it_ups.power).set_alignment(CellAlignment::Right),
        Cell::new(selections.it_ups_threshold).set_alignment(CellAlignment::Right).fg(
            if selections.it_ups.power >= selections.it_ups_threshold {
                Color::Reset
            } else {
                Color::Red
            },
        ),
    ]);
    if let Some(cooling) = &selections.cooling {
        table.add_row(vec![
            Cell::new(format!("Cooling ×{}", cooling.sizing.units_count)),
            Cell::new(&cooling.unit.model),
            Cell::new(cooling.sizing.total_power).set_alignment(CellAlignment::Right),
            Cell::new(selections.it_load).set_alignment(CellAlignment::Right),
        ]);
        if let Some(ups) = &selections.cooling_ups {
            table.add_row(vec![
                Cell::new("Cooling UPS"),
                Cell::new(&ups.model),
                Cell::new(ups.power).set_alignment(CellAlignment::Right),
                Cell::new(cooling.sizing.total_power).set_alignment(CellAlignment::Right).fg(
                    if ups.power >= cooling.sizing.total_power { Color::Reset } else { Color::Red },
                ),
            ]);
        }
    }
    if let Some(battery) = &selections.battery {
        table.add_row(vec![
            Cell::new(format!("Batteries ×{}", battery.total_batteries)),
            Cell::new(&battery.model),
            Cell::new(battery.capacity).set_alignment(CellAlignment::Right),
            Cell::new(battery.required_energy).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_cost_table(summary: &CostSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Item", "Qty", "Cost"]);
    for item in &summary.items {
        if item.category == Category::Commissioning {
            table.add_row(vec![
                Cell::new("Subtotal").add_attribute(Attribute::Bold),
                Cell::new(""),
                Cell::new(""),
                Cell::new(summary.subtotal)
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Bold),
            ]);
        }
        table.add_row(vec![
            Cell::new(item.category).add_attribute(Attribute::Dim),
            Cell::new(&item.label),
            Cell::new(item.quantity).set_alignment(CellAlignment::Right),
            Cell::new(item.cost.round_to_cents()).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(summary.total)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use rackplan::{
        battery::BatteryBank,
        catalog::Catalog,
        configuration::Configuration,
        quantity::power::Kilowatts,
        quote::Quote,
    };

    use super::*;

    fn quote() -> (BatteryOptions, Quote) {
        let configuration = Configuration::builder()
            .racks_600_count(3)
            .power_600(Kilowatts::from(6.0))
            .cooling_model("IRC25")
            .backup_cooling_enabled(true)
            .backup_minutes(10)
            .commissioning_enabled(true)
            .build();
        let options = BatteryBank::builder()
            .load(configuration.it_load())
            .backup_minutes(configuration.backup_minutes)
            .build()
            .size(&Catalog::builtin().batteries);
        let quote = Quote::compute(&configuration, &Catalog::builtin(), &options).unwrap();
        (options, quote)
    }

    #[test]
    fn test_cost_table() {
        let (_, quote) = quote();
        let rendered = build_cost_table(&quote.summary).to_string();
        assert!(rendered.contains("Subtotal"));
        assert!(rendered.contains("Commissioning"));
        assert!(rendered.contains(&quote.summary.total.to_string()));
    }

    #[test]
    fn test_battery_options_table() {
        let (options, _) = quote();
        let rendered = build_battery_options_table(&options, Some(0)).to_string();
        for option in &options {
            assert!(rendered.contains(&option.model));
        }
    }

    #[test]
    fn test_selections_table() {
        let (_, quote) = quote();
        let rendered = build_selections_table(&quote.selections).to_string();
        assert!(rendered.contains("UPS-IT-40"));
        assert!(rendered.contains("IRC25"));
    }
}
