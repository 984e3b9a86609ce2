use crate::foundation::error::{StyleError, StyleResult};

/// Keys with extractor-defined meaning; never turned into a class directly.
pub const RESERVED_KEYS: &[&str] = &["on", "media", "modifiers", "animate", "shadow", "size", "css"];

/// A style-prop bag in declaration order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleProps {
    map: serde_json::Map<String, serde_json::Value>,
}

impl StyleProps {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object.
    pub fn from_value(value: serde_json::Value) -> StyleResult<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self { map }),
            other => Err(StyleError::validation(format!(
                "style props must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a JSON object.
    pub fn from_json_str(s: &str) -> StyleResult<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Set a prop (builder style).
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.map.insert(key.into(), value);
        self
    }

    /// Value of `key`.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.map.get(key)
    }

    /// Underlying map.
    pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.map
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for StyleProps {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { map }
    }
}

pub(crate) fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

pub(crate) fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
