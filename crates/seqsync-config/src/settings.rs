use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use seqsync_core::{Equivalence, PolicyKind};

pub const DEFAULT_LOG_FILTER: &str = "info";

/// How two list entries are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    #[default]
    Exact,
    CaseInsensitive,
    /// Surrounding whitespace is ignored.
    Trimmed,
}

impl EqualityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EqualityMode::Exact => "exact",
            EqualityMode::CaseInsensitive => "case_insensitive",
            EqualityMode::Trimmed => "trimmed",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "exact" => Ok(EqualityMode::Exact),
            "case_insensitive" => Ok(EqualityMode::CaseInsensitive),
            "trimmed" => Ok(EqualityMode::Trimmed),
            _ => bail!(
                "invalid equality '{}'. expected one of: exact | case_insensitive | trimmed",
                s
            ),
        }
    }
}

impl Equivalence<String> for EqualityMode {
    fn equivalent(&self, a: &String, b: &String) -> bool {
        match self {
            EqualityMode::Exact => a == b,
            EqualityMode::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
            EqualityMode::Trimmed => a.trim() == b.trim(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => bail!("invalid format '{}'. expected one of: text | json", s),
        }
    }
}

/// Settings resolved from the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    pub policy: PolicyKind,
    pub equality: EqualityMode,
    pub format: OutputFormat,
    pub log_filter: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            equality: EqualityMode::default(),
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SyncSettings {
    /// Read recognized keys from merged config JSON. Missing keys take their
    /// defaults; present keys must be strings naming a known value.
    pub fn from_config_json(config_json: &Value) -> Result<Self> {
        let mut s = SyncSettings::default();

        if let Some(raw) = string_at(config_json, "/reconciler/policy")? {
            s.policy = raw
                .parse::<PolicyKind>()
                .map_err(|e| anyhow::anyhow!("CONFIG_INVALID_VALUE key=/reconciler/policy: {e}"))?;
        }
        if let Some(raw) = string_at(config_json, "/reconciler/equality")? {
            s.equality = EqualityMode::parse(raw)
                .map_err(|e| anyhow::anyhow!("CONFIG_INVALID_VALUE key=/reconciler/equality: {e}"))?;
        }
        if let Some(raw) = string_at(config_json, "/output/format")? {
            s.format = OutputFormat::parse(raw)
                .map_err(|e| anyhow::anyhow!("CONFIG_INVALID_VALUE key=/output/format: {e}"))?;
        }
        if let Some(raw) = string_at(config_json, "/logging/filter")? {
            s.log_filter = raw.trim().to_string();
        }

        Ok(s)
    }
}

fn string_at<'a>(v: &'a Value, pointer: &str) -> Result<Option<&'a str>> {
    match v.pointer(pointer) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => bail!(
            "CONFIG_INVALID_TYPE key={} expected string, got {}",
            pointer,
            other
        ),
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}
