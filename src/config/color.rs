use std::collections::BTreeMap;

/// Maps a color token (for example a theme name like `brandPrimary`) to a concrete CSS color.
///
/// Only consulted for properties whose name contains `color`. The returned text is used as-is;
/// resolvers decide their own fallback for unknown tokens.
pub trait ColorResolver {
    /// Resolve `token` to a CSS color value.
    fn resolve(&self, token: &str) -> String;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, token: &str) -> String {
        self(token)
    }
}

/// Resolver that returns every token unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityColors;

impl ColorResolver for IdentityColors {
    fn resolve(&self, token: &str) -> String {
        token.to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Flat token -> color table; unknown tokens resolve to themselves.
pub struct ColorPalette {
    /// Token to concrete color.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl ColorPalette {
    /// Build a palette from `(token, color)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            colors: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ColorResolver for ColorPalette {
    fn resolve(&self, token: &str) -> String {
        self.colors
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}
