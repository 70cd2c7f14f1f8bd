use azmx_config::ExclusionList;
use azmx_domain::Subscription;
use tracing::debug;

/// Per-invocation selection input.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    /// Explicit subscription ids to target. Non-empty wins over
    /// `all_subscriptions`.
    pub requested_ids: Vec<String>,
    pub all_subscriptions: bool,
}

impl SelectionRequest {
    pub fn all() -> Self {
        Self { requested_ids: Vec::new(), all_subscriptions: true }
    }

    pub fn explicit(ids: Vec<String>) -> Self {
        Self { requested_ids: ids, all_subscriptions: false }
    }
}

#[derive(Debug, Clone)]
pub struct ExcludedSubscription {
    pub subscription: Subscription,
    /// The exclusion entry the subscription matched.
    pub matched: String,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Subscriptions to build matrix entries for, ordered by id.
    pub included: Vec<Subscription>,
    /// Subscriptions removed by the exclusion union, for reporting.
    pub excluded: Vec<ExcludedSubscription>,
}

/// Narrow the discovered set down to the subscriptions that belong in the
/// matrix. Total — an unknown requested id, an empty request, or a fully
/// excluded set all produce valid (possibly empty) selections.
pub fn select_subscriptions(
    discovered: &[Subscription],
    request: &SelectionRequest,
    exclusions: &ExclusionList,
) -> Selection {
    // Sort first so every downstream decision (key collisions included)
    // sees the same ordering on every run.
    let mut candidates: Vec<Subscription> =
        discovered.iter().filter(|s| s.enabled).cloned().collect();
    candidates.sort_by(|a, b| a.id.cmp(&b.id));

    if !request.requested_ids.is_empty() {
        // Explicit selection wins even when all_subscriptions is also set.
        // Requested ids matching nothing discovered are dropped silently.
        candidates.retain(|s| request.requested_ids.iter().any(|id| id == s.id.as_str()));
    } else if !request.all_subscriptions {
        // Nothing requested: a valid, empty outcome.
        candidates.clear();
    }

    let mut selection = Selection::default();
    for sub in candidates {
        match exclusions.matched_pattern(&sub) {
            Some(pattern) => {
                debug!(
                    subscription = %sub.id,
                    name = %sub.name,
                    pattern,
                    "subscription excluded"
                );
                selection.excluded.push(ExcludedSubscription {
                    matched: pattern.to_string(),
                    subscription: sub,
                });
            }
            None => selection.included.push(sub),
        }
    }

    selection
}
