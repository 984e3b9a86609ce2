use indexmap::IndexMap;

use crate::foundation::error::{StyleError, StyleResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Breakpoint and device lookup tables consumed by responsive style maps.
///
/// Both tables keep insertion order, which is the order device aliases expand in.
pub struct MediaConfig {
    /// Breakpoint name to media query text (without the `@media` keyword).
    #[serde(default)]
    pub breakpoints: IndexMap<String, String>,
    /// Device alias to its member breakpoint names.
    #[serde(default)]
    pub devices: IndexMap<String, Vec<String>>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        let breakpoints = [
            ("xs", "only screen and (max-width: 575px)"),
            ("sm", "only screen and (min-width: 576px) and (max-width: 767px)"),
            ("md", "only screen and (min-width: 768px) and (max-width: 991px)"),
            ("lg", "only screen and (min-width: 992px) and (max-width: 1199px)"),
            ("xl", "only screen and (min-width: 1200px)"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let devices = [
            ("mobile", &["xs", "sm"][..]),
            ("tablet", &["md", "lg"][..]),
            ("desktop", &["lg", "xl"][..]),
        ]
        .into_iter()
        .map(|(k, members)| {
            (
                k.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect();

        Self {
            breakpoints,
            devices,
        }
    }
}

impl MediaConfig {
    /// Tables with no breakpoints or devices.
    pub fn empty() -> Self {
        Self {
            breakpoints: IndexMap::new(),
            devices: IndexMap::new(),
        }
    }

    /// Validate table invariants: non-empty queries, device members that exist.
    pub fn validate(&self) -> StyleResult<()> {
        for (name, query) in &self.breakpoints {
            if name.trim().is_empty() {
                return Err(StyleError::validation("breakpoint name must be non-empty"));
            }
            if query.trim().is_empty() {
                return Err(StyleError::validation(format!(
                    "breakpoint '{name}' must have a non-empty media query"
                )));
            }
        }
        for (device, members) in &self.devices {
            if self.breakpoints.contains_key(device) {
                return Err(StyleError::validation(format!(
                    "device '{device}' shadows a breakpoint of the same name"
                )));
            }
            for m in members {
                if !self.breakpoints.contains_key(m) {
                    return Err(StyleError::validation(format!(
                        "device '{device}' references unknown breakpoint '{m}'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Media queries for a breakpoint name or device alias.
    ///
    /// A breakpoint resolves to its single query; a device resolves to the queries of its member
    /// breakpoints in member order, without duplicates. Unknown keys resolve to nothing.
    pub fn resolve(&self, key: &str) -> Vec<String> {
        if let Some(q) = self.breakpoints.get(key) {
            return vec![q.clone()];
        }
        let Some(members) = self.devices.get(key) else {
            return Vec::new();
        };
        let mut out: Vec<String> = Vec::with_capacity(members.len());
        for m in members {
            if let Some(q) = self.breakpoints.get(m)
                && !out.contains(q)
            {
                out.push(q.clone());
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/media.rs"]
mod tests;
