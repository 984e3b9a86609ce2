use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    foundation::error::{StyleError, StyleResult},
    inject::rule::{RuleGroup, RuleGroups},
};

/// Host-chosen identity of a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl From<u64> for TargetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// A native style surface that accepts rules, e.g. a document's stylesheet.
///
/// Implementations may reject a rule; the injector logs the rejection and carries on.
pub trait StyleSurface: Send {
    /// Append `rule` to the end of `group`.
    fn insert_rule(&mut self, group: RuleGroup, rule: &str) -> StyleResult<()>;

    /// Remove every rule from `group`.
    fn clear_group(&mut self, group: RuleGroup);
}

/// In-memory stylesheet surface.
///
/// Clones share the same rule storage, so a host can keep a handle after registering the
/// surface and read back the accumulated CSS. Structurally malformed rules are rejected.
#[derive(Clone, Debug, Default)]
pub struct SheetSurface {
    inner: Arc<Mutex<RuleGroups>>,
}

impl SheetSurface {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RuleGroups> {
        // Poisoning is ignored: every mutation is a single push or clear.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the rules in `group`.
    pub fn rules(&self, group: RuleGroup) -> Vec<String> {
        self.lock().get(group).to_vec()
    }

    /// Total number of rules held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stylesheet text: base, then media, then modifier rules, one per line.
    pub fn to_css(&self) -> String {
        let groups = self.lock();
        let mut out = String::new();
        for group in RuleGroup::ALL {
            for rule in groups.get(group) {
                out.push_str(rule);
                out.push('\n');
            }
        }
        out
    }
}

impl StyleSurface for SheetSurface {
    fn insert_rule(&mut self, group: RuleGroup, rule: &str) -> StyleResult<()> {
        validate_rule_text(rule)?;
        self.lock().push(group, rule.to_string());
        Ok(())
    }

    fn clear_group(&mut self, group: RuleGroup) {
        self.lock().clear_group(group);
    }
}

/// Cheap structural check: a selector or at-rule prelude followed by one balanced block.
pub(crate) fn validate_rule_text(rule: &str) -> StyleResult<()> {
    let rule = rule.trim();
    let Some(open) = rule.find('{') else {
        return Err(StyleError::injection(format!("rule has no block: '{rule}'")));
    };
    if rule[..open].trim().is_empty() {
        return Err(StyleError::injection(format!(
            "rule has no selector: '{rule}'"
        )));
    }
    if !rule.ends_with('}') {
        return Err(StyleError::injection(format!(
            "rule is not terminated: '{rule}'"
        )));
    }
    let mut depth: i64 = 0;
    for ch in rule.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(StyleError::injection(format!(
                        "unbalanced braces: '{rule}'"
                    )));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(StyleError::injection(format!("unbalanced braces: '{rule}'")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/inject/surface.rs"]
mod tests;
