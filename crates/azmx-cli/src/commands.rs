use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use azmx_config::load_config;
use azmx_discovery::{ArmDiscovery, ArmDiscoveryConfig, Discovery};
use azmx_matrix::{
    build_matrix, select_subscriptions, to_pretty_json, to_set_matrix_script, to_vso_command,
    SelectionRequest,
};
use tracing::info;

use crate::cli::DiscoverOutput;
use crate::output;

// ── Matrix ────────────────────────────────────────────────────────────────────

pub async fn matrix(
    config_path: PathBuf,
    subscription_ids: Vec<String>,
    all_subscriptions: bool,
    output_path: PathBuf,
    emit_script: bool,
    auth: ArmDiscoveryConfig,
) -> Result<()> {
    let config = load_config(&config_path).context("configuration loading failed")?;

    let discovery = ArmDiscovery::new(auth).context("subscription discovery failed")?;
    let discovered = discovery
        .list_subscriptions()
        .await
        .context("subscription discovery failed")?;

    let request = SelectionRequest {
        requested_ids: normalize_ids(subscription_ids),
        all_subscriptions,
    };
    let selection = select_subscriptions(&discovered, &request, &config.exclusions);
    print!("{}", output::render_selection_summary(&selection));

    let matrix = build_matrix(&selection.included, &config);

    let document = to_pretty_json(&matrix)?;
    write_atomic(&output_path, &document)
        .with_context(|| format!("failed to write matrix to {}", output_path.display()))?;

    if emit_script {
        let script_path = output_path.with_file_name("set_matrix.ps1");
        write_atomic(&script_path, &to_set_matrix_script(&matrix)?)
            .with_context(|| format!("failed to write {}", script_path.display()))?;
    }

    println!("{}", to_vso_command(&matrix)?);
    info!(entries = matrix.len(), output = %output_path.display(), "matrix emitted");
    Ok(())
}

// ── Discover ──────────────────────────────────────────────────────────────────

pub async fn discover(format: DiscoverOutput, auth: ArmDiscoveryConfig) -> Result<()> {
    let discovery = ArmDiscovery::new(auth).context("subscription discovery failed")?;
    let mut discovered = discovery
        .list_subscriptions()
        .await
        .context("subscription discovery failed")?;
    discovered.sort_by(|a, b| a.id.cmp(&b.id));

    match format {
        DiscoverOutput::Text => print!("{}", output::render_subscriptions_text(&discovered)),
        DiscoverOutput::Json => println!("{}", serde_json::to_string_pretty(&discovered)?),
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Trim requested ids and drop empty tokens (a trailing comma on the CLI
/// would otherwise request the empty id).
fn normalize_ids(ids: Vec<String>) -> Vec<String> {
    ids.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Write the document via a temp file in the target directory, then rename.
/// A crash mid-write never leaves a partial matrix at the final path.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ids_trims_and_drops_empties() {
        let ids = normalize_ids(vec![" s1 ".into(), "".into(), "s2".into(), "  ".into()]);
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/matrix.json");
        write_atomic(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn write_atomic_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        write_atomic(&path, "{\"a\":1}").unwrap();
        write_atomic(&path, "{\"a\":2}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\":2}");
        assert!(!path.with_extension("tmp").exists());
    }
}
