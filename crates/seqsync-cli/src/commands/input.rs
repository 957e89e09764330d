//! List input files.
//!
//! Accepted shapes (YAML, so JSON works too):
//! - a top-level sequence of scalars
//! - a mapping with an `items` sequence
//! - an empty document, read as an empty list

use anyhow::{bail, Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub fn load_items(path: &Path) -> Result<Vec<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("read list failed: {}", path.display()))?;
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
    let raw = std::str::from_utf8(bytes)
        .with_context(|| format!("list must be UTF-8 text: {}", path.display()))?;
    items_from_str(raw).with_context(|| format!("invalid list: {}", path.display()))
}

pub fn items_from_str(raw: &str) -> Result<Vec<String>> {
    let doc: Value = serde_yaml::from_str(raw).context("invalid yaml")?;
    let seq = match doc {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(seq) => seq,
        Value::Mapping(map) => match map.get("items") {
            Some(Value::Sequence(seq)) => seq.clone(),
            Some(Value::Null) => return Ok(Vec::new()),
            Some(_) => bail!("INPUT_INVALID `items` must be a sequence"),
            None => bail!("INPUT_INVALID mapping has no `items` key"),
        },
        _ => bail!("INPUT_INVALID expected a sequence or a mapping with `items`"),
    };

    seq.into_iter()
        .enumerate()
        .map(|(i, v)| scalar_text(v).with_context(|| format!("INPUT_INVALID item #{i}")))
        .collect()
}

fn scalar_text(v: Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => bail!("expected a scalar, got {other:?}"),
    }
}
