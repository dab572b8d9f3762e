use clap::Parser;
use rackplan::{battery::BatteryBank, prelude::*, quantity::power::Kilowatts};

use crate::{
    cli::{CatalogArgs, ensure_inverter_efficiency},
    tables::build_battery_options_table,
};

#[derive(Parser)]
pub struct BatteriesArgs {
    /// Total load backed by the batteries.
    #[clap(long = "load-kilowatts", env = "LOAD_KILOWATTS")]
    load: Kilowatts,

    #[clap(long, env = "BACKUP_MINUTES")]
    backup_minutes: u32,

    #[clap(long, default_value = "0.9", env = "INVERTER_EFFICIENCY")]
    inverter_efficiency: f64,

    #[clap(flatten)]
    catalog: CatalogArgs,
}

impl BatteriesArgs {
    pub fn run(&self) -> Result {
        ensure_inverter_efficiency(self.inverter_efficiency)?;
        let catalog = self.catalog.load()?;
        let options = BatteryBank::builder()
            .load(self.load)
            .backup_minutes(self.backup_minutes)
            .inverter_efficiency(self.inverter_efficiency)
            .build()
            .size(&catalog.batteries);
        println!("{}", build_battery_options_table(&options, None));
        Ok(())
    }
}
