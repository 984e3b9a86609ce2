use smallvec::SmallVec;

use crate::{
    animation::{keyframes::KeyframeGenerator, spec::AnimationSpec},
    cache::{CacheEntry, ClassCache},
    config::{color::ColorResolver, opts::RegistryOpts},
    foundation::{
        css::{css_value, declaration, escape_selector, kebab_case},
        error::StyleResult,
        hash::hash_str,
    },
    inject::{
        injector::RuleInjector,
        rule::GeneratedRule,
        surface::{StyleSurface, TargetId},
    },
    naming::{
        shorthand::ShorthandTable,
        token::{ContextKind, StyleContext, cache_key, compose_class, normalize_value, sanitize_modifier},
    },
};

const PSEUDO_ELEMENTS: &[&str] = &[
    "before",
    "after",
    "placeholder",
    "selection",
    "first-line",
    "first-letter",
    "marker",
];

/// Class names returned for one request; almost always a single name.
pub type ClassNames = SmallVec<[String; 1]>;

/// One style registry: maps property/value/context requests to utility classes and keeps every
/// registered target's stylesheet in sync.
#[derive(Debug)]
pub struct UtilityClassManager {
    opts: RegistryOpts,
    cache: ClassCache,
    keyframes: KeyframeGenerator,
    injector: RuleInjector,
}

impl Default for UtilityClassManager {
    fn default() -> Self {
        Self::with_opts(RegistryOpts::default())
    }
}

impl UtilityClassManager {
    /// Create a registry after validating `opts`.
    pub fn new(opts: RegistryOpts) -> StyleResult<Self> {
        opts.validate()?;
        Ok(Self::with_opts(opts))
    }

    fn with_opts(opts: RegistryOpts) -> Self {
        Self {
            cache: ClassCache::new(opts.max_cache_size),
            keyframes: KeyframeGenerator::new(),
            injector: RuleInjector::new(),
            opts,
        }
    }

    /// Utility class for one property value in one context.
    ///
    /// Cache hits return the cached name without injecting anything. Misses build the class
    /// name, generate its rules (one per media query in a media context), inject them into
    /// every target and cache the result. Values that produce no declaration yield no class,
    /// as does a media context with no queries or a modifier with no class-safe characters.
    pub fn get_class_names(
        &mut self,
        property: &str,
        value: &serde_json::Value,
        ctx: StyleContext<'_>,
        colors: &dyn ColorResolver,
        media_queries: &[String],
    ) -> ClassNames {
        let mut out = ClassNames::new();
        let Some(css) = css_value(property, value, colors, &self.opts.default_length_unit) else {
            return out;
        };
        if matches!(ctx, StyleContext::Media(_)) && media_queries.is_empty() {
            return out;
        }
        let modifier = ctx.modifier().map(sanitize_modifier).unwrap_or_default();
        let ctx = ctx.with_modifier(&modifier);
        if ctx.modifier().is_some_and(str::is_empty) {
            tracing::warn!(property, "skipping context with an empty modifier");
            return out;
        }

        let key = cache_key(property, &css, ctx);
        if let Some(entry) = self.cache.get(&key) {
            out.push(entry.class_name.clone());
            return out;
        }

        let prefix = ShorthandTable::standard().prefix_for(property);
        let class_name = compose_class(&prefix, &normalize_value(&css), ctx);
        let rules = build_rules(&class_name, &declaration(property, &css), ctx, media_queries);
        for rule in &rules {
            self.injector.inject(rule.clone());
        }
        tracing::debug!(%key, class = %class_name, rules = rules.len(), "utility class generated");

        if let Some((evicted, _)) = self.cache.set(
            key,
            CacheEntry {
                class_name: class_name.clone(),
                rules,
            },
        ) {
            tracing::trace!(key = %evicted, "class cache eviction");
        }
        out.push(class_name);
        out
    }

    /// Inject arbitrary rule text into every target.
    pub fn inject_rule(&mut self, text: impl Into<String>, context: ContextKind) -> bool {
        self.injector.inject_rule(text, context)
    }

    /// Animation name for a spec, injecting its `@keyframes` block the first time.
    ///
    /// Returns `None` (with a warning) when the keyframes are unusable.
    pub fn animation_name(
        &mut self,
        spec: &AnimationSpec,
        colors: &dyn ColorResolver,
    ) -> Option<String> {
        match self
            .keyframes
            .generate(&spec.keyframes, colors, &self.opts.default_length_unit)
        {
            Ok(out) => {
                if let Some(css) = out.css {
                    self.injector.inject(GeneratedRule::new(css, ContextKind::Base));
                }
                Some(out.name)
            }
            Err(err) => {
                tracing::warn!(%err, "skipping animation");
                None
            }
        }
    }

    /// Content-addressed class for raw declaration text, registered once.
    pub fn raw_class(&mut self, text: &str) -> Option<String> {
        let body = text.trim();
        if body.is_empty() {
            return None;
        }
        let class_name = format!("raw-{}", hash_str(body).to_base36());
        self.injector
            .inject_rule(format!(".{class_name} {{ {body} }}"), ContextKind::Base);
        Some(class_name)
    }

    /// Drop cached classes and keyframe names. Injected rules stay in place.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.keyframes.clear();
    }

    /// See [`RuleInjector::register_target`].
    pub fn register_target(&mut self, id: TargetId, surface: Box<dyn StyleSurface>) -> bool {
        self.injector.register_target(id, surface)
    }

    /// See [`RuleInjector::unregister_target`].
    pub fn unregister_target(&mut self, id: TargetId) -> Option<Box<dyn StyleSurface>> {
        self.injector.unregister_target(id)
    }

    /// Flush and replay one target.
    pub fn regenerate_styles(&mut self, id: TargetId) -> bool {
        self.injector.regenerate(id)
    }

    /// Flush and replay every target.
    pub fn regenerate_all_styles(&mut self) {
        self.injector.regenerate_all();
    }

    /// Class cache.
    pub fn cache(&self) -> &ClassCache {
        &self.cache
    }

    /// Rule injector.
    pub fn injector(&self) -> &RuleInjector {
        &self.injector
    }

    /// Registry options.
    pub fn opts(&self) -> &RegistryOpts {
        &self.opts
    }
}

fn build_rules(
    class_name: &str,
    decl: &str,
    ctx: StyleContext<'_>,
    media_queries: &[String],
) -> Vec<GeneratedRule> {
    let selector = format!(".{}", escape_selector(class_name));
    match ctx {
        StyleContext::Base => vec![GeneratedRule::new(
            format!("{selector} {{ {decl} }}"),
            ContextKind::Base,
        )],
        StyleContext::Pseudo(state) => {
            let state = kebab_case(state);
            let sep = if PSEUDO_ELEMENTS.contains(&state.as_str()) {
                "::"
            } else {
                ":"
            };
            vec![GeneratedRule::new(
                format!("{selector}{sep}{state} {{ {decl} }}"),
                ContextKind::Pseudo,
            )]
        }
        StyleContext::Media(_) => media_queries
            .iter()
            .map(|q| {
                GeneratedRule::new(
                    format!("@media {q} {{ {selector} {{ {decl} }} }}"),
                    ContextKind::Media,
                )
            })
            .collect(),
        StyleContext::Modifier(m) => vec![GeneratedRule::new(
            format!(".{} {selector} {{ {decl} }}", escape_selector(m)),
            ContextKind::Modifier,
        )],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/manager.rs"]
mod tests;
