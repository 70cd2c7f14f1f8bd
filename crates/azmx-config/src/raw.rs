use serde::Deserialize;
use std::collections::HashMap;

/// Raw YAML representation of the subscription mapping file
/// (pipelines/subscriptions.yaml).
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    /// Subscription id or name → service connection. Exact-match keys.
    #[serde(default)]
    pub subscription_spn_map: HashMap<String, String>,

    /// Fallback service connection. Older config files spell this
    /// `default_service_connection`.
    #[serde(default, alias = "default_service_connection")]
    pub default_spn: Option<String>,

    #[serde(default)]
    pub exclude_subscriptions: Option<RawExclusions>,
}

/// The exclusion block comes in two shapes: a mapping with `prod` /
/// `non-prod` keys, or a flat list of ids/names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawExclusions {
    Tagged {
        #[serde(default)]
        prod: Option<Vec<String>>,
        #[serde(default, rename = "non-prod")]
        non_prod: Option<Vec<String>>,
    },
    Flat(Vec<String>),
}
