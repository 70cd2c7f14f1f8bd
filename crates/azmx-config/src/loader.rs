use std::path::Path;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::model::{ExclusionList, MatrixConfig};
use crate::raw::{RawConfig, RawExclusions};

/// Load and validate the subscription mapping file.
///
/// An empty or whitespace-only document is treated as the all-default
/// config rather than a parse error.
pub fn load_config(path: &Path) -> Result<MatrixConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let raw: RawConfig = if content.trim().is_empty() {
        RawConfig::default()
    } else {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
            path: path.display().to_string(),
            source: e,
        })?
    };

    let config = convert(raw);

    if config.default_spn.is_empty() {
        warn!(
            path = %path.display(),
            "no default service connection configured; subscriptions missing \
             from subscription_spn_map will resolve to an empty service connection"
        );
    }
    debug!(
        path = %path.display(),
        mapped = config.spn_map.len(),
        excluded = config.exclusions.prod.len() + config.exclusions.non_prod.len(),
        "loaded subscription mapping config"
    );

    Ok(config)
}

fn convert(raw: RawConfig) -> MatrixConfig {
    let exclusions = match raw.exclude_subscriptions {
        Some(RawExclusions::Tagged { prod, non_prod }) => ExclusionList {
            prod: prod.unwrap_or_default(),
            non_prod: non_prod.unwrap_or_default(),
        },
        // Flat lists carry no environment tag; keep them under non-prod,
        // exclusion only ever uses the union.
        Some(RawExclusions::Flat(list)) => ExclusionList {
            prod: Vec::new(),
            non_prod: list,
        },
        None => ExclusionList::default(),
    };

    MatrixConfig {
        spn_map: raw.subscription_spn_map,
        default_spn: raw.default_spn.unwrap_or_default(),
        exclusions,
    }
}
