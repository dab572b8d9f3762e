use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

use rackplan::prelude::*;

use crate::delivery::{Delivery, DraftFile, Webhook};

#[derive(Parser)]
pub struct DeliveryArgs {
    /// Autosave the computed snapshot as JSON.
    #[clap(long, env = "DRAFT_PATH")]
    draft_path: Option<PathBuf>,

    /// Post the computed snapshot to the mailer webhook.
    #[clap(long, env = "WEBHOOK_URL")]
    webhook_url: Option<Url>,
}

impl DeliveryArgs {
    pub fn deliveries(&self) -> Result<Vec<Box<dyn Delivery>>> {
        let mut deliveries: Vec<Box<dyn Delivery>> = Vec::new();
        if let Some(path) = &self.draft_path {
            deliveries.push(Box::new(DraftFile { path: path.clone() }));
        }
        if let Some(url) = &self.webhook_url {
            deliveries.push(Box::new(Webhook::new(url.clone())?));
        }
        Ok(deliveries)
    }
}
