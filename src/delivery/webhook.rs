use std::time::Duration;

use async_trait::async_trait;
use rackplan::{prelude::*, snapshot::Snapshot};
use reqwest::{Client, Url};

use crate::delivery::Delivery;

/// Posts the snapshot to a mailer webhook.
pub struct Webhook {
    client: Client,
    url: Url,
}

impl Webhook {
    pub fn new(url: Url) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(3)).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl Delivery for Webhook {
    fn name(&self) -> &'static str {
        "webhook"
    }

    #[instrument(skip_all, fields(url = %self.url))]
    async fn deliver(&self, snapshot: &Snapshot) -> Result {
        info!("posting the snapshot…");
        self.client
            .post(self.url.clone())
            .json(snapshot)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
