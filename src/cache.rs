pub(crate) mod lru;

use crate::inject::rule::GeneratedRule;

/// Cached result of one class-name request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Utility class name.
    pub class_name: String,
    /// Rules generated for the class, in injection order.
    pub rules: Vec<GeneratedRule>,
}

/// Class cache keyed by `property:value[|context:modifier]`.
pub type ClassCache = lru::LruCache<String, CacheEntry>;
