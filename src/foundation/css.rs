use crate::config::color::ColorResolver;

/// Canonical (camelCase) property names known to the engine, in shorthand-table order.
///
/// Order matters: collision suffixes are assigned to whichever name comes later.
pub(crate) const KNOWN_PROPERTIES: &[&str] = &[
    "color",
    "backgroundColor",
    "background",
    "backgroundImage",
    "backgroundSize",
    "backgroundPosition",
    "backgroundRepeat",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "outlineColor",
    "fill",
    "stroke",
    "width",
    "height",
    "minWidth",
    "minHeight",
    "maxWidth",
    "maxHeight",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "gap",
    "rowGap",
    "columnGap",
    "display",
    "position",
    "overflow",
    "overflowX",
    "overflowY",
    "zIndex",
    "opacity",
    "visibility",
    "flex",
    "flexDirection",
    "flexWrap",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "alignItems",
    "alignContent",
    "alignSelf",
    "justifyContent",
    "justifyItems",
    "justifySelf",
    "order",
    "gridTemplateColumns",
    "gridTemplateRows",
    "gridColumn",
    "gridRow",
    "gridArea",
    "fontFamily",
    "fontSize",
    "fontWeight",
    "fontStyle",
    "lineHeight",
    "letterSpacing",
    "textAlign",
    "textDecoration",
    "textTransform",
    "textOverflow",
    "whiteSpace",
    "wordBreak",
    "border",
    "borderWidth",
    "borderStyle",
    "borderTop",
    "borderRight",
    "borderBottom",
    "borderLeft",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "outline",
    "outlineWidth",
    "outlineOffset",
    "boxShadow",
    "boxSizing",
    "textShadow",
    "cursor",
    "pointerEvents",
    "userSelect",
    "transform",
    "transformOrigin",
    "transition",
    "transitionDuration",
    "transitionProperty",
    "transitionTimingFunction",
    "animationName",
    "animationDuration",
    "animationTimingFunction",
    "animationDelay",
    "animationIterationCount",
    "animationDirection",
    "animationFillMode",
    "animationPlayState",
    "animationTimeline",
    "animationRange",
    "objectFit",
    "objectPosition",
    "aspectRatio",
    "filter",
    "backdropFilter",
    "mixBlendMode",
    "content",
    "listStyle",
    "verticalAlign",
];

/// Properties whose bare numeric values get the default length unit appended.
const LENGTH_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "minWidth",
    "minHeight",
    "maxWidth",
    "maxHeight",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "gap",
    "rowGap",
    "columnGap",
    "flexBasis",
    "fontSize",
    "letterSpacing",
    "borderWidth",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "outlineWidth",
    "outlineOffset",
];

/// Whether a property is treated as color-valued.
///
/// This is a substring heuristic: any name containing `color` (case-insensitive) qualifies,
/// including names such as `colorScheme` whose values are not colors.
pub(crate) fn is_color_property(name: &str) -> bool {
    name.to_ascii_lowercase().contains("color")
}

pub(crate) fn needs_length_unit(name: &str) -> bool {
    LENGTH_PROPERTIES.contains(&name)
}

/// `backgroundColor` -> `background-color`, `WebkitTransform` -> `-webkit-transform`.
pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let vendor = name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase());
    if vendor {
        out.push('-');
    }
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 || name.len() > 1 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Integral values print without a fraction; others use the shortest round-trip form.
pub(crate) fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Escape characters that carry meaning in selector syntax.
///
/// An identifier may not start with a digit or with `-` and a digit, so such a digit is written
/// as a hex escape (`2xl` -> `\32 xl`).
pub(crate) fn escape_selector(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    let mut chars = class.chars().peekable();
    if chars.peek() == Some(&'-') && class[1..].starts_with(|c: char| c.is_ascii_digit()) {
        escaped.push('-');
        chars.next();
    }
    if let Some(d) = chars.next_if(char::is_ascii_digit) {
        escaped.push_str(&format!("\\3{d} "));
    }
    for ch in chars {
        match ch {
            '\\' | ':' | '/' | '[' | ']' | '(' | ')' | '&' | '>' | '+' | '~' | ',' | '%' | '='
            | '!' | '*' | '@' | '#' | '\'' | '"' | '.' | ' ' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Resolve a scalar JSON style value into CSS value text.
///
/// Color-like properties go through `colors`; numbers on length properties get `unit`.
/// Returns `None` for values that do not produce a declaration (null, booleans, empty strings,
/// nested arrays or objects).
pub(crate) fn css_value(
    property: &str,
    value: &serde_json::Value,
    colors: &dyn ColorResolver,
    unit: &str,
) -> Option<String> {
    match value {
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if is_color_property(property) {
                Some(colors.resolve(s))
            } else {
                Some(s.to_string())
            }
        }
        serde_json::Value::Number(n) => {
            let v = n.as_f64()?;
            let text = format_number(v);
            if needs_length_unit(property) {
                Some(format!("{text}{unit}"))
            } else {
                Some(text)
            }
        }
        _ => None,
    }
}

pub(crate) fn declaration(property: &str, css_value: &str) -> String {
    format!("{}: {};", kebab_case(property), css_value)
}

/// Render every scalar entry of a style object as declarations, in key order.
pub(crate) fn declaration_block(
    style: &serde_json::Map<String, serde_json::Value>,
    colors: &dyn ColorResolver,
    unit: &str,
) -> String {
    let mut decls = Vec::with_capacity(style.len());
    for (prop, value) in style {
        if let Some(v) = css_value(prop, value, colors, unit) {
            decls.push(declaration(prop, &v));
        }
    }
    decls.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/css.rs"]
mod tests;
