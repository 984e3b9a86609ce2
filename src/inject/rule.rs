use crate::naming::token::ContextKind;

/// One of the three ordered rule groups every render target holds.
///
/// Groups are emitted in declaration order (base, media, modifier) so later groups win the
/// cascade over earlier ones at equal specificity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleGroup {
    /// Base and pseudo-state rules (also keyframes and raw rules).
    Base,
    /// `@media` rules.
    Media,
    /// Ancestor-modifier rules.
    Modifier,
}

impl RuleGroup {
    /// All groups in cascade order.
    pub const ALL: [RuleGroup; 3] = [RuleGroup::Base, RuleGroup::Media, RuleGroup::Modifier];

    /// Group a rule of the given context lands in.
    pub fn for_context(kind: ContextKind) -> Self {
        match kind {
            ContextKind::Base | ContextKind::Pseudo => Self::Base,
            ContextKind::Media => Self::Media,
            ContextKind::Modifier => Self::Modifier,
        }
    }
}

/// A complete CSS rule plus the context it was generated for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedRule {
    /// Full rule text, e.g. `.clr-red { color: red; }`.
    pub text: String,
    /// Generation context.
    pub context: ContextKind,
}

impl GeneratedRule {
    /// Build a rule.
    pub fn new(text: impl Into<String>, context: ContextKind) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }

    /// Target group for this rule.
    pub fn group(&self) -> RuleGroup {
        RuleGroup::for_context(self.context)
    }
}

/// Ordered rule text per group, as accepted by one target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleGroups {
    base: Vec<String>,
    media: Vec<String>,
    modifier: Vec<String>,
}

impl RuleGroups {
    /// Rules in `group`, in insertion order.
    pub fn get(&self, group: RuleGroup) -> &[String] {
        match group {
            RuleGroup::Base => &self.base,
            RuleGroup::Media => &self.media,
            RuleGroup::Modifier => &self.modifier,
        }
    }

    pub(crate) fn push(&mut self, group: RuleGroup, text: String) {
        match group {
            RuleGroup::Base => self.base.push(text),
            RuleGroup::Media => self.media.push(text),
            RuleGroup::Modifier => self.modifier.push(text),
        }
    }

    pub(crate) fn clear_group(&mut self, group: RuleGroup) {
        match group {
            RuleGroup::Base => self.base.clear(),
            RuleGroup::Media => self.media.clear(),
            RuleGroup::Modifier => self.modifier.clear(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.base.clear();
        self.media.clear();
        self.modifier.clear();
    }

    /// Total rules across all groups.
    pub fn len(&self) -> usize {
        self.base.len() + self.media.len() + self.modifier.len()
    }

    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
