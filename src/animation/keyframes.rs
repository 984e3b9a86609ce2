use std::collections::HashMap;

use crate::{
    config::color::ColorResolver,
    foundation::{
        css::declaration_block,
        error::{StyleError, StyleResult},
        hash::{StableHasher, canonical_json},
    },
};

/// Result of one keyframes request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframesOutput {
    /// Generated animation name, stable for a given keyframe body.
    pub name: String,
    /// Full `@keyframes` block on first sight of the body; `None` when already generated.
    pub css: Option<String>,
}

/// Content-addressed `@keyframes` synthesis.
///
/// Identity is the keyframe body only, serialized with object keys sorted, so timing changes
/// and key insertion order never produce a second block.
#[derive(Clone, Debug, Default)]
pub struct KeyframeGenerator {
    names_by_body: HashMap<String, String>,
}

struct Marker<'a> {
    position: f64,
    label: String,
    style: &'a serde_json::Map<String, serde_json::Value>,
}

impl KeyframeGenerator {
    /// Create an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name (and on a miss, block text) for a keyframe body.
    pub fn generate(
        &mut self,
        keyframes: &serde_json::Map<String, serde_json::Value>,
        colors: &dyn ColorResolver,
        unit: &str,
    ) -> StyleResult<KeyframesOutput> {
        let body = serde_json::Value::Object(keyframes.clone());
        let key = canonical_json(&body);
        if let Some(name) = self.names_by_body.get(&key) {
            return Ok(KeyframesOutput {
                name: name.clone(),
                css: None,
            });
        }

        let markers = ordered_markers(keyframes);
        if markers.is_empty() {
            return Err(StyleError::animation(
                "keyframes contain no usable markers",
            ));
        }

        let mut h = StableHasher::new();
        h.write_json(&body);
        let name = format!("kf-{}", h.finish().to_base36());

        let mut css = format!("@keyframes {name} {{");
        for m in &markers {
            let decls = declaration_block(m.style, colors, unit);
            css.push_str(&format!(" {} {{ {} }}", m.label, decls));
        }
        css.push_str(" }");

        tracing::debug!(%name, markers = markers.len(), "keyframes generated");
        self.names_by_body.insert(key, name.clone());
        Ok(KeyframesOutput {
            name,
            css: Some(css),
        })
    }

    /// Number of distinct keyframe bodies seen.
    pub fn len(&self) -> usize {
        self.names_by_body.len()
    }

    /// Whether no keyframes have been generated.
    pub fn is_empty(&self) -> bool {
        self.names_by_body.is_empty()
    }

    /// Forget every generated name.
    pub fn clear(&mut self) {
        self.names_by_body.clear();
    }
}

/// Position and label of one marker key.
///
/// `from` is 0, `to` and `enter` are 100, percentages parse directly, and comma-joined lists sort
/// by their first entry but keep their text as the label.
pub(crate) fn parse_marker(key: &str) -> Option<(f64, String)> {
    let k = key.trim();
    match k {
        "from" => return Some((0.0, "from".to_string())),
        "to" | "enter" => return Some((100.0, "to".to_string())),
        _ => {}
    }
    if k.contains(',') {
        let first = k.split(',').next()?;
        let (pos, _) = parse_percentage(first)?;
        return Some((pos, k.to_string()));
    }
    parse_percentage(k)
}

fn parse_percentage(text: &str) -> Option<(f64, String)> {
    let t = text.trim();
    let num = t.strip_suffix('%').unwrap_or(t).trim();
    let v: f64 = num.parse().ok()?;
    if !(0.0..=100.0).contains(&v) {
        return None;
    }
    Some((v, format!("{num}%")))
}

fn ordered_markers(keyframes: &serde_json::Map<String, serde_json::Value>) -> Vec<Marker<'_>> {
    let mut markers = Vec::with_capacity(keyframes.len());
    for (key, value) in keyframes {
        let Some((position, label)) = parse_marker(key) else {
            tracing::warn!(marker = %key, "skipping unrecognized keyframe marker");
            continue;
        };
        let Some(style) = value.as_object() else {
            tracing::warn!(marker = %key, "skipping keyframe marker without a style object");
            continue;
        };
        markers.push(Marker {
            position,
            label,
            style,
        });
    }
    // Stable sort keeps declaration order for equal positions.
    markers.sort_by(|a, b| a.position.total_cmp(&b.position));
    markers
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
