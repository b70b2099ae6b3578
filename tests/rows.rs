// tests/rows.rs
//
// Row flattening, and the one place where absence is an error.
//
use rfc_digest::rows::{to_rows, votes_to_rows, vote_keys, details_to_rows};
use rfc_digest::{Error, Map, Rfc, Value};

fn map(entries: Vec<(&str, Value)>) -> Map {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect()
}

fn rfc_with_q1() -> Rfc {
    let votes = map(vec![
        ("alice", Value::from(vec!["yes"])),
        ("bob", Value::from(vec!["no"])),
    ]);
    let record = map(vec![("votes", Value::Mapping(votes))]);
    let mut rfc = Rfc::new();
    rfc.set_votes(map(vec![("q1", Value::Mapping(record))]));
    rfc
}

#[test]
fn scalar_and_sequence_values() {
    let m = map(vec![("a", Value::from("1")), ("b", Value::from(vec!["2", "3"]))]);
    assert_eq!(to_rows(&m), strings(&[&["a", "1"], &["b", "2", "3"]]));
}

#[test]
fn keys_survive_flattening_in_order() {
    let m = map(vec![
        ("z", Value::from("last letter")),
        ("a", Value::from(vec!["x"])),
        ("m", Value::Mapping(map(vec![("k", Value::from("v"))]))),
        ("e", Value::Sequence(Vec::new())),
    ]);
    let rows = to_rows(&m);
    assert_eq!(rows.len(), m.len());
    let keys: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(keys, m.keys().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn votes_for_known_question() {
    let rfc = rfc_with_q1();
    assert_eq!(votes_to_rows(&rfc, "q1").unwrap(), strings(&[&["alice", "yes"], &["bob", "no"]]));
    assert_eq!(vote_keys(&rfc), vec!["q1"]);
}

#[test]
fn unknown_question_is_a_lookup_error() {
    let rfc = rfc_with_q1();
    match votes_to_rows(&rfc, "q2") {
        Err(Error::Lookup { question }) => assert_eq!(question, "q2"),
        other => panic!("expected lookup error, got {other:?}"),
    }
}

#[test]
fn question_without_votes_is_a_lookup_error() {
    let mut rfc = Rfc::new();
    rfc.set_votes(map(vec![("q1", Value::Mapping(map(vec![("question", Value::from("q1"))])))]));
    assert!(matches!(votes_to_rows(&rfc, "q1"), Err(Error::Lookup { .. })));
}

#[test]
fn empty_rfc_flattens_to_nothing() {
    // Loaders treat absence as empty; flattening an empty field is fine...
    let rfc = Rfc::new();
    assert!(details_to_rows(&rfc).is_empty());
    // ...but asking for a specific question is not.
    assert!(matches!(votes_to_rows(&rfc, "anything"), Err(Error::Lookup { .. })));
}
