mod cli;
mod delivery;
mod tables;

use clap::{Parser, crate_version};
use rackplan::prelude::*;

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Quote(args) => args.run().await?,
        Command::Batteries(args) => args.run()?,
        Command::Catalog(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
