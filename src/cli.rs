mod batteries;
mod catalog;
mod delivery;
mod quote;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rackplan::{catalog::Catalog, configuration::Limits, prelude::*};

pub use self::{batteries::BatteriesArgs, catalog::DumpCatalogArgs, quote::QuoteArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: size the equipment and price the configuration.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Rank the battery options for a load and backup time.
    #[clap(name = "batteries")]
    Batteries(BatteriesArgs),

    /// Print the catalog as TOML, to be used as a starting point for a custom one.
    #[clap(name = "catalog")]
    Catalog(DumpCatalogArgs),
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// TOML catalog to use instead of the built-in one.
    #[clap(long = "catalog", env = "CATALOG_PATH")]
    pub path: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        Catalog::read_or_builtin(self.path.as_deref())
    }
}

/// The valid backup time range differs between deployments, hence no defaults.
#[derive(Copy, Clone, Parser)]
pub struct LimitsArgs {
    #[clap(long, env = "MIN_BACKUP_MINUTES")]
    pub min_backup_minutes: u32,

    #[clap(long, env = "MAX_BACKUP_MINUTES")]
    pub max_backup_minutes: u32,
}

impl LimitsArgs {
    pub fn limits(self) -> Result<Limits> {
        ensure!(
            self.min_backup_minutes <= self.max_backup_minutes,
            "minimum backup time ({} min) exceeds the maximum ({} min)",
            self.min_backup_minutes,
            self.max_backup_minutes,
        );
        Ok(Limits::new(self.min_backup_minutes..=self.max_backup_minutes))
    }
}

pub fn ensure_inverter_efficiency(efficiency: f64) -> Result {
    ensure!(
        efficiency > 0.0 && efficiency <= 1.0,
        "inverter efficiency must be within (0, 1], got {efficiency}",
    );
    Ok(())
}
