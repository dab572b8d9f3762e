use clap::Parser;
use rackplan::prelude::*;

use crate::cli::CatalogArgs;

#[derive(Parser)]
pub struct DumpCatalogArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,
}

impl DumpCatalogArgs {
    pub fn run(&self) -> Result {
        let catalog = self.catalog.load()?;
        catalog.validate()?;
        print!("{}", catalog.to_toml()?);
        Ok(())
    }
}
