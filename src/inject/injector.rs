use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
    inject::rule::{GeneratedRule, RuleGroup, RuleGroups},
    inject::surface::{StyleSurface, TargetId},
    naming::token::ContextKind,
};

struct RenderTarget {
    surface: Box<dyn StyleSurface>,
    groups: RuleGroups,
}

impl RenderTarget {
    fn apply(&mut self, id: TargetId, rule: &GeneratedRule) -> bool {
        let group = rule.group();
        match self.surface.insert_rule(group, &rule.text) {
            Ok(()) => {
                self.groups.push(group, rule.text.clone());
                true
            }
            Err(err) => {
                tracing::warn!(target_id = %id, ?group, rule = %rule.text, %err, "rule rejected by target");
                false
            }
        }
    }

    fn flush(&mut self) {
        for group in RuleGroup::ALL {
            self.surface.clear_group(group);
        }
        self.groups.clear();
    }
}

/// Fans generated rules out to every registered render target.
///
/// Every rule ever injected is kept in a generation-ordered history. Late targets receive the
/// whole history on registration, so all targets hold the same rules in the same order.
///
/// History and the dedup set are never evicted: both grow with the number of distinct rules
/// injected, independent of the class cache bound.
#[derive(Default)]
pub struct RuleInjector {
    targets: IndexMap<TargetId, RenderTarget>,
    history: Vec<GeneratedRule>,
    seen: HashSet<(RuleGroup, String)>,
}

impl std::fmt::Debug for RuleInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleInjector")
            .field("targets", &self.targets.keys().collect::<Vec<_>>())
            .field("history_len", &self.history.len())
            .finish()
    }
}

impl RuleInjector {
    /// Create an injector with no targets and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface and replay the full history into it.
    ///
    /// Returns `false` (and drops `surface`) when `id` is already registered.
    #[tracing::instrument(skip(self, surface))]
    pub fn register_target(&mut self, id: TargetId, surface: Box<dyn StyleSurface>) -> bool {
        if self.targets.contains_key(&id) {
            return false;
        }
        let mut target = RenderTarget {
            surface,
            groups: RuleGroups::default(),
        };
        for rule in &self.history {
            target.apply(id, rule);
        }
        self.targets.insert(id, target);
        true
    }

    /// Drop a target's groups and hand its surface back. Other targets are untouched.
    pub fn unregister_target(&mut self, id: TargetId) -> Option<Box<dyn StyleSurface>> {
        self.targets.shift_remove(&id).map(|t| t.surface)
    }

    /// Inject one rule into every target, in registration order.
    ///
    /// A rule identical to one already injected into the same group is ignored; returns whether
    /// the rule was new.
    pub fn inject(&mut self, rule: GeneratedRule) -> bool {
        if !self.seen.insert((rule.group(), rule.text.clone())) {
            return false;
        }
        for (id, target) in &mut self.targets {
            target.apply(*id, &rule);
        }
        tracing::trace!(rule = %rule.text, targets = self.targets.len(), "rule injected");
        self.history.push(rule);
        true
    }

    /// Convenience wrapper over [`RuleInjector::inject`].
    pub fn inject_rule(&mut self, text: impl Into<String>, context: ContextKind) -> bool {
        self.inject(GeneratedRule::new(text, context))
    }

    /// Flush one target and replay the history into it.
    ///
    /// Recovers a target whose native rule list was wiped externally. Returns `false` for an
    /// unknown target.
    #[tracing::instrument(skip(self))]
    pub fn regenerate(&mut self, id: TargetId) -> bool {
        let Some(target) = self.targets.get_mut(&id) else {
            return false;
        };
        target.flush();
        for rule in &self.history {
            target.apply(id, rule);
        }
        true
    }

    /// [`RuleInjector::regenerate`] for every target.
    pub fn regenerate_all(&mut self) {
        let ids: Vec<TargetId> = self.targets.keys().copied().collect();
        for id in ids {
            self.regenerate(id);
        }
    }

    /// Rules accepted by `id`, per group.
    pub fn groups(&self, id: TargetId) -> Option<&RuleGroups> {
        self.targets.get(&id).map(|t| &t.groups)
    }

    /// Whether `id` is registered.
    pub fn is_registered(&self, id: TargetId) -> bool {
        self.targets.contains_key(&id)
    }

    /// Registered targets in registration order.
    pub fn target_ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.targets.keys().copied()
    }

    /// Every injected rule in generation order.
    pub fn history(&self) -> &[GeneratedRule] {
        &self.history
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inject/injector.rs"]
mod tests;
