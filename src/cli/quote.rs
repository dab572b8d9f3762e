use std::path::{Path, PathBuf};

use clap::Parser;
use rackplan::{
    battery::BatteryBank,
    configuration::Configuration,
    prelude::*,
    quote::Quote,
    snapshot::Snapshot,
};

use crate::{
    cli::{CatalogArgs, LimitsArgs, delivery::DeliveryArgs, ensure_inverter_efficiency},
    delivery::Dispatched,
    tables::{build_battery_options_table, build_cost_table, build_selections_table},
};

#[derive(Parser)]
pub struct QuoteArgs {
    /// TOML file with the customer choices.
    #[clap(long = "configuration", env = "CONFIGURATION_PATH")]
    pub configuration_path: PathBuf,

    #[clap(long, default_value = "0.9", env = "INVERTER_EFFICIENCY")]
    inverter_efficiency: f64,

    /// Print the snapshot as JSON instead of the tables.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    catalog: CatalogArgs,

    #[clap(flatten)]
    limits: LimitsArgs,

    #[clap(flatten)]
    delivery: DeliveryArgs,
}

impl QuoteArgs {
    #[instrument(skip_all, fields(configuration = %self.configuration_path.display()))]
    pub async fn run(self) -> Result {
        ensure_inverter_efficiency(self.inverter_efficiency)?;
        let catalog = self.catalog.load()?;
        let limits = self.limits.limits()?;
        let mut configuration = read_configuration(&self.configuration_path)?;
        let degeneracies = configuration.validate(&limits)?;

        let battery_options = BatteryBank::builder()
            .load(configuration.it_load())
            .backup_minutes(configuration.backup_minutes)
            .inverter_efficiency(self.inverter_efficiency)
            .build()
            .size(&catalog.batteries);
        configuration.reconcile_battery_selection(&battery_options);

        let quote = Quote::compute(&configuration, &catalog, &battery_options)
            .context("unsupported configuration")?;
        info!(total = %quote.summary.total, n_degeneracies = degeneracies.len(), "quoted");

        let selected = battery_options.clamp_index(configuration.selected_battery_index);
        let snapshot = Snapshot::new(configuration, quote);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            println!("{}", build_battery_options_table(&battery_options, selected));
            println!("{}", build_selections_table(&snapshot.quote.selections));
            println!("{}", build_cost_table(&snapshot.quote.summary));
        }

        Dispatched::spawn(self.delivery.deliveries()?, snapshot).settle().await;
        Ok(())
    }
}

fn read_configuration(path: &Path) -> Result<Configuration> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
}
