// src/rows.rs
//
// Flatten mappings into display rows. A row is the key followed by the
// value's parts; only one level of nesting is unwrapped.

use crate::data::{Map, Rfc, Value};
use crate::error::{Error, Result};

pub type Row = Vec<String>;

/// One row per key, in key order.
/// - scalar value → `[key, value]`
/// - sequence / mapping → `[key, v1, v2, …]` (a mapping's own keys are dropped)
///
/// Anything nested deeper is rendered inline via `Value`'s `Display`.
pub fn to_rows(map: &Map) -> Vec<Row> {
    map.iter()
        .map(|(key, value)| {
            let mut row = vec![key.clone()];
            match value {
                Value::Scalar(s) => row.push(s.clone()),
                Value::Sequence(items) => row.extend(items.iter().map(ToString::to_string)),
                Value::Mapping(m) => row.extend(m.values().map(ToString::to_string)),
            }
            row
        })
        .collect()
}

pub fn details_to_rows(rfc: &Rfc) -> Vec<Row> {
    to_rows(rfc.details())
}

pub fn change_log_to_rows(rfc: &Rfc) -> Vec<Row> {
    to_rows(rfc.change_log())
}

/// Voter rows for one named question.
///
/// Unlike the loaders, absence here is an error: the caller asked for a
/// specific question, so a missing key or a record without `votes` is a
/// `Lookup` failure.
pub fn votes_to_rows(rfc: &Rfc, question: &str) -> Result<Vec<Row>> {
    let votes = rfc
        .votes()
        .get(question)
        .and_then(|record| record.get("votes"))
        .and_then(Value::as_map)
        .ok_or_else(|| Error::Lookup { question: s!(question) })?;
    Ok(to_rows(votes))
}

/// Question keys in page order.
pub fn vote_keys(rfc: &Rfc) -> Vec<&str> {
    rfc.votes().keys().map(String::as_str).collect()
}

/// `[question, choice1=count1, …]` per question; the summary shown by `digest`.
pub fn vote_summary_rows(rfc: &Rfc) -> Vec<Row> {
    rfc.votes()
        .iter()
        .map(|(key, record)| {
            let mut row = vec![key.clone()];
            if let Some(counts) = record.get("counts").and_then(Value::as_map) {
                row.extend(counts.iter().map(|(choice, n)| format!("{choice}={n}")));
            }
            if record.get("closed").and_then(Value::as_str) == Some("yes") {
                row.push(s!("(closed)"));
            }
            row
        })
        .collect()
}
