use crate::foundation::{
    css::format_number,
    error::{StyleError, StyleResult},
};

/// A number or a string, as accepted for loosely-typed CSS timing fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CssScalar {
    /// Bare number.
    Number(f64),
    /// CSS text.
    Text(String),
}

impl std::fmt::Display for CssScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// A duration in milliseconds.
///
/// Deserializes from a bare number (milliseconds) or CSS time text (`1.5s`, `200ms`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CssScalar", into = "CssScalar")]
pub struct Millis(pub f64);

impl Millis {
    /// Zero duration.
    pub const ZERO: Millis = Millis(0.0);

    /// Parse CSS time text.
    pub fn parse(text: &str) -> StyleResult<Self> {
        let t = text.trim();
        let (num, scale) = if let Some(v) = t.strip_suffix("ms") {
            (v, 1.0)
        } else if let Some(v) = t.strip_suffix('s') {
            (v, 1000.0)
        } else {
            (t, 1.0)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| StyleError::animation(format!("invalid time value '{text}'")))?;
        if !v.is_finite() {
            return Err(StyleError::animation(format!(
                "time value '{text}' must be finite"
            )));
        }
        Ok(Self(v * scale))
    }

    /// CSS text in seconds, rounded to whole milliseconds (`1500` -> `1.5s`).
    pub fn to_css(self) -> String {
        let ms = self.0.round();
        format!("{}s", format_number(ms / 1000.0))
    }
}

impl std::ops::Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl TryFrom<CssScalar> for Millis {
    type Error = StyleError;

    fn try_from(v: CssScalar) -> StyleResult<Self> {
        match v {
            CssScalar::Number(n) if n.is_finite() => Ok(Self(n)),
            CssScalar::Number(_) => Err(StyleError::animation("time value must be finite")),
            CssScalar::Text(s) => Self::parse(&s),
        }
    }
}

impl From<Millis> for CssScalar {
    fn from(v: Millis) -> Self {
        CssScalar::Number(v.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One animation: keyframe markers plus timing.
///
/// Every field that is not a timing field is a keyframe marker (`from`, `to`, `enter`, `50%`,
/// `0%, 100%`) mapping to a style object. Timing never contributes to keyframe identity.
pub struct AnimationSpec {
    /// Length of one iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Millis>,
    /// Start delay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<Millis>,
    /// Easing, e.g. `ease-in-out`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<String>,
    /// Number of iterations or `infinite`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<CssScalar>,
    /// Playback direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Fill mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<String>,
    /// Play state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_state: Option<String>,
    /// Scroll/view timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Timeline range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Keyframe markers to style objects.
    #[serde(flatten)]
    pub keyframes: serde_json::Map<String, serde_json::Value>,
}

impl AnimationSpec {
    /// Parse one spec from a JSON object.
    pub fn from_value(value: &serde_json::Value) -> StyleResult<Self> {
        if !value.is_object() {
            return Err(StyleError::animation("animation must be an object"));
        }
        let spec: Self = serde_json::from_value(value.clone())
            .map_err(|e| StyleError::animation(format!("invalid animation: {e}")))?;
        if spec.keyframes.is_empty() {
            return Err(StyleError::animation("animation has no keyframes"));
        }
        Ok(spec)
    }

    /// Parse either one spec object or an array of them.
    pub fn list_from_value(value: &serde_json::Value) -> StyleResult<Vec<Self>> {
        match value {
            serde_json::Value::Array(items) => items.iter().map(Self::from_value).collect(),
            other => Ok(vec![Self::from_value(other)?]),
        }
    }

    /// Keyframe body as a JSON object, the identity used for name generation.
    pub fn keyframes_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.keyframes.clone())
    }

    /// Set duration (builder style).
    pub fn with_duration(mut self, d: Millis) -> Self {
        self.duration = Some(d);
        self
    }

    /// Set delay (builder style).
    pub fn with_delay(mut self, d: Millis) -> Self {
        self.delay = Some(d);
        self
    }

    /// Add a keyframe marker (builder style).
    pub fn with_keyframe(mut self, marker: impl Into<String>, style: serde_json::Value) -> Self {
        self.keyframes.insert(marker.into(), style);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
