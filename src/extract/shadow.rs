use crate::foundation::css::format_number;

/// One elevation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowPreset {
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    /// Shadow opacity.
    pub opacity: f64,
    /// Blur radius in px.
    pub radius: f64,
}

const fn preset(offset: f64, opacity: f64, radius: f64) -> ShadowPreset {
    ShadowPreset {
        x: offset,
        y: offset,
        opacity,
        radius,
    }
}

/// Elevation levels 0 through 9.
pub const SHADOW_PRESETS: [ShadowPreset; 10] = [
    preset(1.0, 0.18, 1.0),
    preset(2.0, 0.20, 1.41),
    preset(3.0, 0.22, 2.22),
    preset(4.0, 0.23, 2.62),
    preset(5.0, 0.25, 3.84),
    preset(6.0, 0.27, 4.65),
    preset(7.0, 0.29, 4.65),
    preset(8.0, 0.30, 4.65),
    preset(9.0, 0.32, 5.46),
    preset(10.0, 0.34, 6.27),
];

const DEFAULT_LEVEL: usize = 2;

/// Preset level for a `shadow` prop.
///
/// `false` and `null` mean no shadow. `true` and any value outside the table fall back to the
/// default level.
pub fn shadow_level(value: &serde_json::Value) -> Option<usize> {
    let level = match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => return None,
        serde_json::Value::Bool(true) => DEFAULT_LEVEL,
        serde_json::Value::Number(n) => n.as_f64().and_then(whole_level).unwrap_or(DEFAULT_LEVEL),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(whole_level)
            .unwrap_or(DEFAULT_LEVEL),
        _ => DEFAULT_LEVEL,
    };
    Some(if level < SHADOW_PRESETS.len() {
        level
    } else {
        DEFAULT_LEVEL
    })
}

/// `5` and `5.0` name the same level; fractions and negatives do not name one.
fn whole_level(v: f64) -> Option<usize> {
    (v >= 0.0 && v.fract() == 0.0 && v < SHADOW_PRESETS.len() as f64).then_some(v as usize)
}

/// `box-shadow` value text for a level.
pub fn box_shadow(level: usize) -> String {
    let p = SHADOW_PRESETS
        .get(level)
        .copied()
        .unwrap_or(SHADOW_PRESETS[DEFAULT_LEVEL]);
    format!(
        "{}px {}px {}px rgba(0,0,0,{})",
        format_number(p.x),
        format_number(p.y),
        format_number(p.radius),
        format_number(p.opacity)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/extract/shadow.rs"]
mod tests;
