use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Opaque stable subscription identifier, unique across the tenant set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub String);

impl SubscriptionId {
    pub fn new(s: impl Into<String>) -> Self {
        SubscriptionId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Core structs ──────────────────────────────────────────────────────────────

/// A discovered subscription. Produced by the discovery layer, read-only
/// everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    /// Human-readable display name; not guaranteed unique across tenants.
    pub name: String,
    pub enabled: bool,
}

impl Subscription {
    pub fn new(id: impl Into<String>, name: impl Into<String>, enabled: bool) -> Self {
        Subscription {
            id: SubscriptionId::new(id),
            name: name.into(),
            enabled,
        }
    }
}

/// One unit of downstream work. Field names on the wire are fixed — the
/// pipeline's matrix strategy dereferences them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixEntry {
    pub subscription_id: SubscriptionId,
    pub subscription_name: String,
    pub service_connection: String,
}

/// The full matrix: job key → entry. BTreeMap keeps serialization order
/// deterministic across runs.
pub type Matrix = BTreeMap<String, MatrixEntry>;
