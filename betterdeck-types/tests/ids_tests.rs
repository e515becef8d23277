use betterdeck_types::{ChirpId, ColumnKey, UpdateKey};
use std::collections::HashSet;

// ── ChirpId ───────────────────────────────────────────────────────

#[test]
fn chirp_id_from_str_and_display() {
    let id = ChirpId::from("8675309");
    assert_eq!(id.as_str(), "8675309");
    assert_eq!(id.to_string(), "8675309");
}

#[test]
fn chirp_id_numeric_coercion_matches_string_form() {
    let from_num = ChirpId::from(42u64);
    let from_str = ChirpId::from("42");
    assert_eq!(from_num, from_str);
}

#[test]
fn chirp_id_leading_zeros_are_distinct() {
    // DOM keys are opaque strings; "007" and "7" address different chirps.
    let padded = ChirpId::from("007");
    let bare = ChirpId::from(7u64);
    assert_ne!(padded, bare);
}

#[test]
fn chirp_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(ChirpId::from("a"));
    set.insert(ChirpId::from("a"));
    assert_eq!(set.len(), 1);
}

#[test]
fn chirp_id_serde_is_transparent() {
    let id = ChirpId::from("42");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"42\"");
    let parsed: ChirpId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

// ── ColumnKey / UpdateKey ─────────────────────────────────────────

#[test]
fn column_key_roundtrip() {
    let key = ColumnKey::from("col-1");
    assert_eq!(key.as_str(), "col-1");
    let json = serde_json::to_string(&key).unwrap();
    let parsed: ColumnKey = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, key);
}

#[test]
fn update_key_from_string() {
    let key = UpdateKey::from(String::from("u1"));
    assert_eq!(key.as_str(), "u1");
    assert_eq!(key.to_string(), "u1");
}
