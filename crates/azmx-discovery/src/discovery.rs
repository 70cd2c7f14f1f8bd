use async_trait::async_trait;
use azmx_domain::Subscription;

use crate::error::DiscoveryError;

/// Source of subscriptions for matrix construction.
///
/// Implementations must report every visible subscription, enabled or not —
/// the selection stage decides what to keep.
#[async_trait]
pub trait Discovery: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, DiscoveryError>;
}
