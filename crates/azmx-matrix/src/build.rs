use azmx_config::MatrixConfig;
use azmx_domain::{Matrix, MatrixEntry, Subscription};
use tracing::debug;

use crate::key::KeyAllocator;
use crate::spn::resolve_service_connection;

/// Assemble the matrix for an already-selected subscription set.
///
/// Sorts by id before allocating keys, so identical inputs always produce
/// identical key assignments regardless of caller ordering.
pub fn build_matrix(included: &[Subscription], config: &MatrixConfig) -> Matrix {
    let mut ordered: Vec<&Subscription> = included.iter().collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));

    let mut allocator = KeyAllocator::new();
    let mut matrix = Matrix::new();
    for sub in ordered {
        let key = allocator.allocate(sub);
        let service_connection = resolve_service_connection(sub, config);
        debug!(key = %key, subscription = %sub.id, spn = %service_connection, "matrix entry");
        matrix.insert(
            key,
            MatrixEntry {
                subscription_id: sub.id.clone(),
                subscription_name: sub.name.clone(),
                service_connection,
            },
        );
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_subscription() {
        let subs = vec![
            Subscription::new("s1", "Prod", true),
            Subscription::new("s2", "Dev", true),
        ];
        let matrix = build_matrix(&subs, &MatrixConfig::default());
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix["prod"].subscription_id.as_str(), "s1");
        assert_eq!(matrix["dev"].subscription_id.as_str(), "s2");
    }

    #[test]
    fn name_collision_resolves_by_ascending_id() {
        let subs = vec![
            Subscription::new("s2", "Prod", true),
            Subscription::new("s1", "Prod", true),
        ];
        let matrix = build_matrix(&subs, &MatrixConfig::default());
        assert_eq!(matrix["prod"].subscription_id.as_str(), "s1");
        assert_eq!(matrix["prod-2"].subscription_id.as_str(), "s2");
    }

    #[test]
    fn entries_carry_resolved_service_connections() {
        let mut config = MatrixConfig::default();
        config.spn_map.insert("s1".into(), "spn-a".into());
        config.default_spn = "spn-default".into();

        let subs = vec![
            Subscription::new("s1", "Prod", true),
            Subscription::new("s2", "Dev", true),
        ];
        let matrix = build_matrix(&subs, &config);
        assert_eq!(matrix["prod"].service_connection, "spn-a");
        assert_eq!(matrix["dev"].service_connection, "spn-default");
    }

    #[test]
    fn empty_input_builds_empty_matrix() {
        let matrix = build_matrix(&[], &MatrixConfig::default());
        assert!(matrix.is_empty());
    }
}
