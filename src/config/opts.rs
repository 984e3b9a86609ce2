use crate::foundation::error::{StyleError, StyleResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Tuning knobs for one style registry.
pub struct RegistryOpts {
    /// Maximum number of cached utility classes before least-recently-used eviction.
    #[serde(default = "default_max_cache_size")]
    pub max_cache_size: usize,
    /// Unit appended to bare numbers on length properties.
    #[serde(default = "default_length_unit")]
    pub default_length_unit: String,
}

fn default_max_cache_size() -> usize {
    10_000
}

fn default_length_unit() -> String {
    "px".to_string()
}

impl Default for RegistryOpts {
    fn default() -> Self {
        Self {
            max_cache_size: default_max_cache_size(),
            default_length_unit: default_length_unit(),
        }
    }
}

impl RegistryOpts {
    /// Validate option invariants.
    pub fn validate(&self) -> StyleResult<()> {
        if self.max_cache_size == 0 {
            return Err(StyleError::validation("max_cache_size must be > 0"));
        }
        let unit = self.default_length_unit.as_str();
        if !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            return Err(StyleError::validation(format!(
                "default_length_unit '{unit}' must be a plain CSS unit"
            )));
        }
        Ok(())
    }
}
