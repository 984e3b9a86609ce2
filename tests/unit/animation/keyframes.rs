use super::*;
use crate::animation::spec::{AnimationSpec, Millis};
use serde_json::json;

fn identity(token: &str) -> String {
    token.to_string()
}

fn obj(v: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    v.as_object().unwrap().clone()
}

#[test]
fn markers_are_emitted_in_ascending_order() {
    let mut g = KeyframeGenerator::new();
    let out = g
        .generate(
            &obj(json!({
                "to": {"opacity": 1},
                "50%": {"opacity": 0.5},
                "from": {"opacity": 0}
            })),
            &identity,
            "px",
        )
        .unwrap();
    let css = out.css.unwrap();
    assert!(css.starts_with(&format!("@keyframes {} {{", out.name)));
    let from = css.find("from {").unwrap();
    let mid = css.find("50% {").unwrap();
    let to = css.find("to {").unwrap();
    assert!(from < mid && mid < to, "{css}");
    assert!(css.contains("50% { opacity: 0.5; }"));
}

#[test]
fn comma_lists_sort_by_first_entry_and_keep_label() {
    let mut g = KeyframeGenerator::new();
    let css = g
        .generate(
            &obj(json!({
                "60%": {"opacity": 0.2},
                "0%, 40%": {"opacity": 1},
                "100%": {"opacity": 0}
            })),
            &identity,
            "px",
        )
        .unwrap()
        .css
        .unwrap();
    let list = css.find("0%, 40% {").unwrap();
    let sixty = css.find("60% {").unwrap();
    let hundred = css.find("100% {").unwrap();
    assert!(list < sixty && sixty < hundred, "{css}");
}

#[test]
fn enter_is_an_alias_for_to() {
    assert_eq!(parse_marker("enter"), Some((100.0, "to".to_string())));
    assert_eq!(parse_marker("from"), Some((0.0, "from".to_string())));
    assert_eq!(parse_marker("25"), Some((25.0, "25%".to_string())));
    assert_eq!(parse_marker("12.5%"), Some((12.5, "12.5%".to_string())));
    assert_eq!(parse_marker("150%"), None);
    assert_eq!(parse_marker("middle"), None);
}

#[test]
fn identical_bodies_reuse_name_regardless_of_timing() {
    let mut g = KeyframeGenerator::new();
    let a = AnimationSpec::default()
        .with_keyframe("from", json!({"opacity": 0}))
        .with_keyframe("to", json!({"opacity": 1}))
        .with_duration(Millis(1000.0));
    let mut b = a.clone().with_duration(Millis(3000.0)).with_delay(Millis(200.0));
    b.iteration_count = Some(crate::animation::spec::CssScalar::Number(4.0));

    let first = g.generate(&a.keyframes, &identity, "px").unwrap();
    let second = g.generate(&b.keyframes, &identity, "px").unwrap();
    assert_eq!(first.name, second.name);
    assert!(first.css.is_some());
    assert!(second.css.is_none());
    assert_eq!(g.len(), 1);
}

#[test]
fn key_order_does_not_change_identity() {
    let mut g = KeyframeGenerator::new();
    let mut a = serde_json::Map::new();
    a.insert("from".to_string(), json!({"opacity": 0, "marginTop": 4}));
    a.insert("to".to_string(), json!({"opacity": 1}));
    let mut b = serde_json::Map::new();
    b.insert("to".to_string(), json!({"opacity": 1}));
    b.insert("from".to_string(), json!({"marginTop": 4, "opacity": 0}));

    let first = g.generate(&a, &identity, "px").unwrap();
    let second = g.generate(&b, &identity, "px").unwrap();
    assert_eq!(first.name, second.name);
    assert!(second.css.is_none());
}

#[test]
fn different_bodies_get_different_names() {
    let mut g = KeyframeGenerator::new();
    let a = g
        .generate(&obj(json!({"to": {"opacity": 1}})), &identity, "px")
        .unwrap();
    let b = g
        .generate(&obj(json!({"to": {"opacity": 0}})), &identity, "px")
        .unwrap();
    assert_ne!(a.name, b.name);
    assert!(b.css.is_some());
}

#[test]
fn bodies_render_through_declaration_path() {
    let mut g = KeyframeGenerator::new();
    let colors = |t: &str| if t == "brand" { "#123456".to_string() } else { t.to_string() };
    let css = g
        .generate(
            &obj(json!({"from": {"backgroundColor": "brand", "marginLeft": 10}})),
            &colors,
            "px",
        )
        .unwrap()
        .css
        .unwrap();
    assert!(css.contains("from { background-color: #123456; margin-left: 10px; }"), "{css}");
}

#[test]
fn unusable_bodies_are_errors() {
    let mut g = KeyframeGenerator::new();
    let err = g
        .generate(&obj(json!({"middle": {"opacity": 1}, "to": 3})), &identity, "px")
        .unwrap_err();
    assert!(matches!(err, StyleError::Animation(_)));
    assert!(g.is_empty());
}

#[test]
fn clear_forgets_names() {
    let mut g = KeyframeGenerator::new();
    let body = obj(json!({"to": {"opacity": 1}}));
    g.generate(&body, &identity, "px").unwrap();
    g.clear();
    assert!(g.generate(&body, &identity, "px").unwrap().css.is_some());
}
