use azmx_config::MatrixConfig;
use azmx_domain::Subscription;

/// Resolve the service connection for one subscription.
///
/// Fallback order: map by id, map by name, configured default. Total —
/// when the map misses and no default is configured the result is the
/// empty string, and deciding what that means belongs to the pipeline
/// stage that consumes the matrix.
pub fn resolve_service_connection(sub: &Subscription, config: &MatrixConfig) -> String {
    config
        .spn_map
        .get(sub.id.as_str())
        .or_else(|| config.spn_map.get(&sub.name))
        .cloned()
        .unwrap_or_else(|| config.default_spn.clone())
}
