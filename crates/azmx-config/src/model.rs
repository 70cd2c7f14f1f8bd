use std::collections::HashMap;

use azmx_domain::Subscription;

/// Validated configuration, immutable for the engine's lifetime.
#[derive(Debug, Clone, Default)]
pub struct MatrixConfig {
    /// Subscription id or name → service connection identifier.
    pub spn_map: HashMap<String, String>,
    /// Fallback service connection; empty means "no default configured".
    pub default_spn: String,
    pub exclusions: ExclusionList,
}

/// Subscriptions to exclude, categorized by environment tag. The tag is
/// metadata for humans — exclusion always applies to the union.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    pub prod: Vec<String>,
    pub non_prod: Vec<String>,
}

impl ExclusionList {
    pub fn is_empty(&self) -> bool {
        self.prod.is_empty() && self.non_prod.is_empty()
    }

    /// Return the excluded entry matching this subscription's id or name,
    /// if any. Exact string equality, id checked first.
    pub fn matched_pattern(&self, sub: &Subscription) -> Option<&str> {
        let union = self.prod.iter().chain(self.non_prod.iter());
        let mut by_name = None;
        for pattern in union {
            if pattern == sub.id.as_str() {
                return Some(pattern);
            }
            if by_name.is_none() && pattern == &sub.name {
                by_name = Some(pattern.as_str());
            }
        }
        by_name
    }
}
