//! Settings resolution
//!
//! # Invariants under test
//!
//! 1. An empty config yields defaults (standard / exact / text / info).
//! 2. Recognized keys are read from the merged layers, later layers winning.
//! 3. Unknown enum values and non-string values are rejected with the key
//!    named in the error.

use seqsync_config::{load_layered_yaml_from_strings, EqualityMode, OutputFormat, SyncSettings};
use seqsync_core::PolicyKind;

#[test]
fn empty_config_resolves_to_defaults() {
    let loaded = load_layered_yaml_from_strings(&["{}"]).unwrap();
    let s = SyncSettings::from_config_json(&loaded.config_json).unwrap();

    assert_eq!(s, SyncSettings::default());
    assert_eq!(s.policy, PolicyKind::Standard);
    assert_eq!(s.equality, EqualityMode::Exact);
    assert_eq!(s.format, OutputFormat::Text);
    assert_eq!(s.log_filter, "info");
}

#[test]
fn layered_values_are_resolved() {
    let base = r#"
reconciler:
  policy: standard
  equality: trimmed
logging:
  filter: warn
"#;
    let overlay = r#"
reconciler:
  policy: avoid-transient-empty
output:
  format: json
"#;

    let loaded = load_layered_yaml_from_strings(&[base, overlay]).unwrap();
    let s = SyncSettings::from_config_json(&loaded.config_json).unwrap();

    assert_eq!(s.policy, PolicyKind::AvoidTransientEmpty);
    assert_eq!(s.equality, EqualityMode::Trimmed);
    assert_eq!(s.format, OutputFormat::Json);
    assert_eq!(s.log_filter, "warn");
}

#[test]
fn unknown_policy_is_rejected() {
    let loaded = load_layered_yaml_from_strings(&["reconciler:\n  policy: eager\n"]).unwrap();
    let err = SyncSettings::from_config_json(&loaded.config_json).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("CONFIG_INVALID_VALUE"), "got: {msg}");
    assert!(msg.contains("/reconciler/policy"), "got: {msg}");
}

#[test]
fn non_string_value_is_rejected() {
    let loaded = load_layered_yaml_from_strings(&["output:\n  format: 3\n"]).unwrap();
    let err = SyncSettings::from_config_json(&loaded.config_json).unwrap_err();

    assert!(err.to_string().contains("CONFIG_INVALID_TYPE key=/output/format"));
}
