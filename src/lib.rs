#![forbid(unsafe_code)]
//! Atomic utility-class CSS compiler.
//!
//! Style-prop bags go in; short, deterministic utility class names come out, and the CSS rules
//! behind them are injected into every registered [`StyleSurface`].
//!
//! ```
//! use styleforge::{IdentityColors, MediaConfig, SheetSurface, StyleExtractor, StyleProps,
//!     TargetId, UtilityClassManager};
//!
//! let mut registry = UtilityClassManager::default();
//! let sheet = SheetSurface::new();
//! registry.register_target(TargetId(1), Box::new(sheet.clone()));
//!
//! let media = MediaConfig::default();
//! let props = StyleProps::from_json_str(r#"{"color": "red", "on": {"hover": {"color": "blue"}}}"#)
//!     .unwrap();
//! let classes = StyleExtractor::new(&mut registry, &IdentityColors, &media).extract(&props);
//!
//! assert_eq!(classes.len(), 2);
//! assert_eq!(sheet.len(), 2);
//! ```

mod animation;
mod cache;
mod config;
mod engine;
mod extract;
mod foundation;
mod inject;
mod naming;

pub use animation::keyframes::{KeyframeGenerator, KeyframesOutput};
pub use animation::sequence::{AnimationLonghands, sequence};
pub use animation::spec::{AnimationSpec, CssScalar, Millis};
pub use cache::{CacheEntry, ClassCache, lru::LruCache};
pub use config::StyleConfig;
pub use config::color::{ColorPalette, ColorResolver, IdentityColors};
pub use config::media::MediaConfig;
pub use config::opts::RegistryOpts;
pub use engine::manager::{ClassNames, UtilityClassManager};
pub use engine::registry::{default_manager, lock_default};
pub use extract::extractor::StyleExtractor;
pub use extract::props::{RESERVED_KEYS, StyleProps};
pub use extract::shadow::{SHADOW_PRESETS, ShadowPreset, box_shadow, shadow_level};
pub use foundation::error::{StyleError, StyleResult};
pub use inject::injector::RuleInjector;
pub use inject::rule::{GeneratedRule, RuleGroup, RuleGroups};
pub use inject::surface::{SheetSurface, StyleSurface, TargetId};
pub use naming::shorthand::ShorthandTable;
pub use naming::token::{ContextKind, StyleContext};
