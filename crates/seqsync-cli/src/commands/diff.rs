//! `seqsync diff`: run the reconciler over two list files and print the
//! edit script.
//!
//! The script is recorded by an [`EditLog`] and then replayed against an
//! independent copy of the source before anything is printed, so a script
//! that does not reproduce the target never reaches stdout.

use anyhow::{bail, Context, Result};
use seqsync_config::OutputFormat;
use seqsync_core::{Edit, EditLog, Equivalence, Reconciler, SyncReport};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use super::input::load_items;
use super::ResolvedSettings;

#[derive(Debug, Clone)]
pub struct DiffArgs {
    pub source: PathBuf,
    pub target: PathBuf,
    pub policy: Option<String>,
    pub equality: Option<String>,
    pub format: Option<String>,
}

/// Reconciled list plus the script that produced it.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    pub edits: Vec<Edit<String>>,
    pub result: Vec<String>,
    pub report: SyncReport,
}

pub fn run(args: &DiffArgs, resolved: &ResolvedSettings) -> Result<()> {
    let source = load_items(&args.source)?;
    let target = load_items(&args.target)?;

    let outcome = compute(&source, &target, resolved)?;
    info!(
        source_len = source.len(),
        target_len = target.len(),
        edits = outcome.edits.len(),
        order = outcome.report.order.as_str(),
        "diff complete"
    );

    match resolved.settings.format {
        OutputFormat::Text => print_text(&outcome),
        OutputFormat::Json => print_json(&outcome, resolved)?,
    }
    Ok(())
}

pub fn compute(
    source: &[String],
    target: &[String],
    resolved: &ResolvedSettings,
) -> Result<DiffOutcome> {
    let settings = &resolved.settings;
    let mut reconciler = Reconciler::with_predicate(source.to_vec(), EditLog::new(), settings.equality)
        .with_policy(settings.policy);

    if let Err(err) = reconciler.synchronize_to_destination(target) {
        match err.into_source() {}
    }
    let report = reconciler
        .last_report()
        .cloned()
        .context("reconciler finished without a report")?;
    let (result, log) = reconciler.into_parts();
    let edits = log.into_edits();

    verify_replay(source, target, &edits, |a, b| settings.equality.equivalent(a, b))?;

    Ok(DiffOutcome {
        edits,
        result,
        report,
    })
}

/// Apply `edits` to a fresh copy of `source` and require the outcome to match
/// `target` element by element.
fn verify_replay<F>(source: &[String], target: &[String], edits: &[Edit<String>], eq: F) -> Result<()>
where
    F: Fn(&String, &String) -> bool,
{
    let mut mirror = source.to_vec();
    for (i, edit) in edits.iter().enumerate() {
        edit.apply_to(&mut mirror)
            .with_context(|| format!("EDIT_SCRIPT_INVALID at edit #{i} ({edit})"))?;
    }

    let matches = mirror.len() == target.len() && mirror.iter().zip(target).all(|(a, b)| eq(a, b));
    if !matches {
        bail!(
            "EDIT_SCRIPT_MISMATCH replay produced {} item(s), target has {}",
            mirror.len(),
            target.len()
        );
    }
    Ok(())
}

fn print_text(outcome: &DiffOutcome) {
    for edit in &outcome.edits {
        println!("{edit}");
    }
    let c = outcome.report.counts;
    println!(
        "inserts={} removes={} moves={} order={}",
        c.inserts,
        c.removes,
        c.moves,
        outcome.report.order.as_str()
    );
    println!("result={}", outcome.result.join(","));
}

fn print_json(outcome: &DiffOutcome, resolved: &ResolvedSettings) -> Result<()> {
    let doc = json!({
        "policy": resolved.settings.policy,
        "equality": resolved.settings.equality,
        "config_hash": resolved.config_hash,
        "order": outcome.report.order,
        "counts": outcome.report.counts,
        "edits": outcome.edits,
        "result": outcome.result,
    });
    let text = serde_json::to_string_pretty(&doc).context("serialize diff output failed")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqsync_config::{EqualityMode, SyncSettings};
    use seqsync_core::PolicyKind;

    fn resolved(policy: PolicyKind, equality: EqualityMode) -> ResolvedSettings {
        ResolvedSettings {
            settings: SyncSettings {
                policy,
                equality,
                ..SyncSettings::default()
            },
            config_hash: None,
            unused_keys: Vec::new(),
        }
    }

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn reorder_only_script() {
        let source = s(&["Zagreb", "Wien", "Paris", "Roma", "London"]);
        let target = s(&["Paris", "Zagreb", "London", "Wien", "Roma"]);
        let out = compute(&source, &target, &resolved(PolicyKind::Standard, EqualityMode::Exact)).unwrap();

        assert_eq!(
            out.edits,
            vec![Edit::Move { from: 2, to: 0 }, Edit::Move { from: 4, to: 2 }]
        );
        assert_eq!(out.result, target);
    }

    #[test]
    fn case_insensitive_keeps_source_spelling() {
        let source = s(&["paris", "ROMA"]);
        let target = s(&["Roma", "Paris"]);
        let out = compute(
            &source,
            &target,
            &resolved(PolicyKind::Standard, EqualityMode::CaseInsensitive),
        )
        .unwrap();

        assert_eq!(out.edits, vec![Edit::Move { from: 1, to: 0 }]);
        assert_eq!(out.result, s(&["ROMA", "paris"]));
    }

    #[test]
    fn replay_rejects_a_wrong_script() {
        let err = verify_replay(
            &s(&["a"]),
            &s(&["b"]),
            &[Edit::Remove { position: 0 }],
            |a, b| a == b,
        )
        .unwrap_err();
        assert!(err.to_string().contains("EDIT_SCRIPT_MISMATCH"), "{err}");

        let err = verify_replay(&s(&["a"]), &s(&[]), &[Edit::Remove { position: 3 }], |a, b| a == b)
            .unwrap_err();
        assert!(err.to_string().contains("EDIT_SCRIPT_INVALID"), "{err}");
    }
}
