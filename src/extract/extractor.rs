use std::collections::HashSet;

use crate::{
    animation::{sequence::sequence, spec::AnimationSpec},
    config::{color::ColorResolver, media::MediaConfig},
    engine::manager::UtilityClassManager,
    extract::{
        props::{StyleProps, is_reserved, json_kind},
        shadow::{box_shadow, shadow_level},
    },
    naming::token::StyleContext,
};

type Map = serde_json::Map<String, serde_json::Value>;
type Value = serde_json::Value;

const AXIS_SHORTHANDS: &[(&str, [&str; 2])] = &[
    ("paddingHorizontal", ["paddingLeft", "paddingRight"]),
    ("paddingVertical", ["paddingTop", "paddingBottom"]),
    ("marginHorizontal", ["marginLeft", "marginRight"]),
    ("marginVertical", ["marginTop", "marginBottom"]),
];

/// Turns style-prop bags into ordered utility class lists against one registry.
pub struct StyleExtractor<'a> {
    manager: &'a mut UtilityClassManager,
    colors: &'a dyn ColorResolver,
    media: &'a MediaConfig,
}

impl std::fmt::Debug for StyleExtractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleExtractor")
            .field("manager", &self.manager)
            .field("media", &self.media)
            .finish_non_exhaustive()
    }
}

impl<'a> StyleExtractor<'a> {
    /// Bind an extractor to a registry, a color resolver and breakpoint tables.
    pub fn new(
        manager: &'a mut UtilityClassManager,
        colors: &'a dyn ColorResolver,
        media: &'a MediaConfig,
    ) -> Self {
        Self {
            manager,
            colors,
            media,
        }
    }

    /// Class names for a bag, in generation order.
    ///
    /// Base classes come first (derived shorthands, then declared props in key order), followed
    /// by pseudo-state, responsive and modifier classes, and finally the raw-text class. The list
    /// is never sorted and may contain duplicates.
    #[tracing::instrument(skip_all, fields(props = props.len()))]
    pub fn extract(&mut self, props: &StyleProps) -> Vec<String> {
        let bag = props.as_map();
        let mut classes = Vec::new();

        for (property, value) in self.collect(bag, true) {
            classes.extend(self.class_for(&property, &value, StyleContext::Base, &[]));
        }

        if let Some(states) = nested_map(bag, "on") {
            for (state, sub) in states {
                let Some(sub) = sub.as_object() else {
                    tracing::warn!(%state, kind = json_kind(sub), "skipping non-object pseudo entry");
                    continue;
                };
                for (property, value) in self.collect(sub, false) {
                    classes.extend(self.class_for(&property, &value, StyleContext::Pseudo(state), &[]));
                }
            }
        }

        if let Some(variants) = nested_map(bag, "media") {
            for (key, sub) in variants {
                let queries = self.media.resolve(key);
                if queries.is_empty() {
                    tracing::warn!(breakpoint = %key, "skipping unknown breakpoint or device");
                    continue;
                }
                let Some(sub) = sub.as_object() else {
                    tracing::warn!(breakpoint = %key, kind = json_kind(sub), "skipping non-object media entry");
                    continue;
                };
                for (property, value) in self.collect(sub, false) {
                    classes.extend(self.class_for(&property, &value, StyleContext::Media(key), &queries));
                }
            }
        }

        if let Some(modifiers) = nested_map(bag, "modifiers") {
            for (modifier, sub) in modifiers {
                let Some(sub) = sub.as_object() else {
                    tracing::warn!(%modifier, kind = json_kind(sub), "skipping non-object modifier entry");
                    continue;
                };
                for (property, value) in self.collect(sub, false) {
                    classes.extend(self.class_for(&property, &value, StyleContext::Modifier(modifier), &[]));
                }
            }
        }

        if let Some(Value::String(raw)) = bag.get("css")
            && let Some(class) = self.manager.raw_class(raw)
        {
            classes.push(class);
        }

        tracing::debug!(classes = classes.len(), "style props extracted");
        classes
    }

    fn class_for(
        &mut self,
        property: &str,
        value: &Value,
        ctx: StyleContext<'_>,
        queries: &[String],
    ) -> crate::engine::manager::ClassNames {
        self.manager
            .get_class_names(property, value, ctx, self.colors, queries)
    }

    /// Flatten one bag into `(property, value)` pairs: derived properties first, then the
    /// remaining declared scalars in key order.
    fn collect(&mut self, bag: &Map, accumulate: bool) -> Vec<(String, Value)> {
        let mut derived: Vec<(String, Value)> = Vec::new();
        let mut consumed: HashSet<&str> = HashSet::new();

        // Uniform size.
        let size = match (bag.get("size"), bag.get("width"), bag.get("height")) {
            (Some(s), _, _) if is_scalar(s) => Some(s.clone()),
            (_, Some(w), Some(h)) if is_scalar(w) && w == h => Some(w.clone()),
            _ => None,
        };
        if let Some(size) = size {
            derived.push(("width".to_string(), size.clone()));
            derived.push(("height".to_string(), size));
            consumed.extend(["width", "height"]);
        }

        for (shorthand, edges) in AXIS_SHORTHANDS {
            let Some(v) = bag.get(*shorthand).filter(|v| is_scalar(v)) else {
                continue;
            };
            for edge in edges {
                derived.push((edge.to_string(), v.clone()));
                consumed.insert(*edge);
            }
            consumed.insert(*shorthand);
        }

        if let Some(level) = bag.get("shadow").and_then(shadow_level) {
            derived.push(("boxShadow".to_string(), Value::String(box_shadow(level))));
            consumed.insert("boxShadow");
        }

        if let Some(animate) = bag.get("animate") {
            derived.extend(self.animation_properties(animate, accumulate));
        }

        if let Some(Value::Object(overrides)) = bag.get("css") {
            for (k, v) in overrides {
                if is_scalar(v) {
                    derived.push((k.clone(), v.clone()));
                    consumed.insert(k.as_str());
                }
            }
        }

        let mut out = derived;
        for (key, value) in bag {
            if is_reserved(key) || consumed.contains(key.as_str()) {
                continue;
            }
            if is_scalar(value) {
                out.push((key.clone(), value.clone()));
            } else if !value.is_null() {
                tracing::warn!(property = %key, kind = json_kind(value), "skipping non-scalar style value");
            }
        }
        out
    }

    fn animation_properties(&mut self, animate: &Value, accumulate: bool) -> Vec<(String, Value)> {
        let specs = match AnimationSpec::list_from_value(animate) {
            Ok(specs) => specs,
            Err(err) => {
                tracing::warn!(%err, "skipping animation shorthand");
                return Vec::new();
            }
        };
        let mut kept = Vec::with_capacity(specs.len());
        let mut names = Vec::with_capacity(specs.len());
        for spec in specs {
            if let Some(name) = self.manager.animation_name(&spec, self.colors) {
                kept.push(spec);
                names.push(name);
            }
        }
        if kept.is_empty() {
            return Vec::new();
        }
        sequence(&kept, &names, accumulate)
            .properties()
            .into_iter()
            .map(|(p, v)| (p.to_string(), Value::String(v)))
            .collect()
    }
}

fn nested_map<'b>(bag: &'b Map, key: &str) -> Option<&'b Map> {
    match bag.get(key)? {
        Value::Object(m) => Some(m),
        other => {
            tracing::warn!(%key, kind = json_kind(other), "reserved key expects an object");
            None
        }
    }
}

fn is_scalar(v: &Value) -> bool {
    matches!(v, Value::String(_) | Value::Number(_))
}

#[cfg(test)]
#[path = "../../tests/unit/extract/extractor.rs"]
mod tests;
