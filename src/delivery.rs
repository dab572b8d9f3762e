//! Fire-and-forget hand-over of computed snapshots to external collaborators.

mod draft;
mod webhook;

use std::sync::Arc;

use async_trait::async_trait;
use rackplan::{prelude::*, snapshot::Snapshot};
use tokio::task::JoinSet;

pub use self::{draft::DraftFile, webhook::Webhook};

#[async_trait]
pub trait Delivery: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, snapshot: &Snapshot) -> Result;
}

/// Spawned deliveries.
///
/// Failures are logged and never reach the caller.
#[must_use]
pub struct Dispatched(JoinSet<()>);

impl Dispatched {
    /// Hand the snapshot to every delivery, each on its own task.
    pub fn spawn(deliveries: Vec<Box<dyn Delivery>>, snapshot: Snapshot) -> Self {
        let snapshot = Arc::new(snapshot);
        let mut tasks = JoinSet::new();
        for delivery in deliveries {
            let snapshot = Arc::clone(&snapshot);
            tasks.spawn(async move {
                match delivery.deliver(&snapshot).await {
                    Ok(()) => info!(delivery = delivery.name(), "delivered"),
                    Err(error) => {
                        warn!(delivery = delivery.name(), "failed to deliver: {error:#}");
                    }
                }
            });
        }
        Self(tasks)
    }

    /// Let the in-flight deliveries finish before the process exits.
    pub async fn settle(self) {
        let results = self.0.join_all().await;
        debug!(n_deliveries = results.len(), "settled");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rackplan::{
        battery::BatteryOptions,
        catalog::Catalog,
        configuration::Configuration,
        quote::Quote,
    };

    use super::*;

    struct Failing;

    #[async_trait]
    impl Delivery for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn deliver(&self, _snapshot: &Snapshot) -> Result {
            bail!("nobody listens")
        }
    }

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl Delivery for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn deliver(&self, _snapshot: &Snapshot) -> Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    pub fn snapshot() -> Snapshot {
        let configuration = Configuration::default();
        let quote =
            Quote::compute(&configuration, &Catalog::builtin(), &BatteryOptions::default()).unwrap();
        Snapshot::new(configuration, quote)
    }

    #[tokio::test]
    async fn test_failure_does_not_affect_others() {
        let counter = Arc::new(AtomicUsize::new(0));
        Dispatched::spawn(
            vec![Box::new(Failing) as Box<dyn Delivery>, Box::new(Counting(Arc::clone(&counter)))],
            snapshot(),
        )
        .settle()
        .await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
