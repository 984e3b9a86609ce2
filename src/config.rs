pub(crate) mod color;
pub(crate) mod media;
pub(crate) mod opts;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::StyleResult;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything an embedding needs to stand up a registry and extract styles, loadable from JSON.
pub struct StyleConfig {
    /// Registry tuning.
    #[serde(default)]
    pub registry: opts::RegistryOpts,
    /// Breakpoint and device tables.
    #[serde(default)]
    pub media: media::MediaConfig,
    /// Color token table.
    #[serde(default)]
    pub palette: color::ColorPalette,
}

impl StyleConfig {
    /// Validate every section.
    pub fn validate(&self) -> StyleResult<()> {
        self.registry.validate()?;
        self.media.validate()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(s: &str) -> StyleResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> StyleResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read style config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
