use super::*;
use serde_json::json;

#[test]
fn str_hash_is_stable() {
    assert_eq!(hash_str("color: red"), hash_str("color: red"));
    assert_ne!(hash_str("color: red"), hash_str("color: blue"));
}

#[test]
fn json_hash_ignores_key_order() {
    let mut a = serde_json::Map::new();
    a.insert("opacity".to_string(), json!(0));
    a.insert("color".to_string(), json!("red"));
    let mut b = serde_json::Map::new();
    b.insert("color".to_string(), json!("red"));
    b.insert("opacity".to_string(), json!(0));

    let mut ha = StableHasher::new();
    ha.write_json(&serde_json::Value::Object(a.clone()));
    let mut hb = StableHasher::new();
    hb.write_json(&serde_json::Value::Object(b.clone()));
    assert_eq!(ha.finish(), hb.finish());

    assert_eq!(
        canonical_json(&serde_json::Value::Object(a)),
        canonical_json(&serde_json::Value::Object(b))
    );
}

#[test]
fn canonical_json_sorts_nested_objects() {
    let v = json!({"to": {"b": 1, "a": [{"y": 2, "x": 1}]}});
    assert_eq!(canonical_json(&v), r#"{"to":{"a":[{"x":1,"y":2}],"b":1}}"#);
}

#[test]
fn base36_uses_safe_alphabet() {
    assert_eq!(ContentHash(0).to_base36(), "0");
    assert_eq!(ContentHash(35).to_base36(), "z");
    assert_eq!(ContentHash(36).to_base36(), "10");
    let s = hash_str("anything").to_base36();
    assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}
