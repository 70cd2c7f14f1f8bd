use async_trait::async_trait;
use azmx_domain::Subscription;
use tracing::debug;

use crate::discovery::Discovery;
use crate::error::DiscoveryError;

/// A stub discovery source backed by a fixed subscription list.
///
/// Used when the subscription set is known up front (offline pipeline
/// rehearsals) and throughout the engine's tests.
#[derive(Debug, Default, Clone)]
pub struct FixedDiscovery {
    subscriptions: Vec<Subscription>,
}

impl FixedDiscovery {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl Discovery for FixedDiscovery {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, DiscoveryError> {
        debug!(count = self.subscriptions.len(), "FixedDiscovery: list_subscriptions");
        Ok(self.subscriptions.clone())
    }
}
