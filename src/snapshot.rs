use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{configuration::Configuration, quote::Quote};

/// Plain-data record handed over to report, autosave, and e-mail collaborators.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub created_at: DateTime<Utc>,
    pub configuration: Configuration,

    #[serde(flatten)]
    pub quote: Quote,
}

impl Snapshot {
    pub fn new(configuration: Configuration, quote: Quote) -> Self {
        Self { created_at: Utc::now(), configuration, quote }
    }
}
