//! Command handler modules for seqsync-cli.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod diff;
pub mod input;

use anyhow::{Context, Result};
use seqsync_config::{
    report_unused_keys, EqualityMode, OutputFormat, SyncSettings, UnusedKeyPolicy,
};
use seqsync_core::PolicyKind;
use tracing::warn;

use diff::DiffArgs;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Settings after config layering and command-line overrides.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub settings: SyncSettings,
    /// `None` when no config file was given.
    pub config_hash: Option<String>,
    pub unused_keys: Vec<String>,
}

/// Load layered config (if any) and resolve recognized keys.
///
/// With `strict`, a config carrying keys nothing reads is an error.
pub fn resolve_settings(config_paths: &[String], strict: bool) -> Result<ResolvedSettings> {
    if config_paths.is_empty() {
        return Ok(ResolvedSettings {
            settings: SyncSettings::default(),
            config_hash: None,
            unused_keys: Vec::new(),
        });
    }

    let path_refs: Vec<&str> = config_paths.iter().map(|s| s.as_str()).collect();
    let loaded = seqsync_config::load_layered_yaml(&path_refs)?;

    let policy = if strict {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };
    let report = report_unused_keys(&loaded.config_json, policy)?;
    let settings = SyncSettings::from_config_json(&loaded.config_json)?;

    Ok(ResolvedSettings {
        settings,
        config_hash: Some(loaded.config_hash),
        unused_keys: report.unused_leaf_pointers,
    })
}

impl ResolvedSettings {
    /// Command-line values take precedence over config values.
    pub fn with_overrides(mut self, args: &DiffArgs) -> Result<Self> {
        if let Some(raw) = &args.policy {
            self.settings.policy = raw
                .parse::<PolicyKind>()
                .context("invalid --policy")?;
        }
        if let Some(raw) = &args.equality {
            self.settings.equality = EqualityMode::parse(raw).context("invalid --equality")?;
        }
        if let Some(raw) = &args.format {
            self.settings.format = OutputFormat::parse(raw).context("invalid --format")?;
        }
        Ok(self)
    }

    pub fn warn_unused(&self) {
        for pointer in &self.unused_keys {
            warn!(key = %pointer, "config key is not read by seqsync");
        }
    }
}
