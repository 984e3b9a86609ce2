use crate::foundation::hash::hash_str;

const MAX_TOKEN_LEN: usize = 32;
const HASHED_HEAD_LEN: usize = 16;

/// Where a utility class applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleContext<'a> {
    /// Unconditional declaration.
    Base,
    /// Pseudo-class or pseudo-element state, e.g. `hover` or `before`.
    Pseudo(&'a str),
    /// Responsive variant named after a breakpoint or device alias.
    Media(&'a str),
    /// Applies under an ancestor class, e.g. `dark`.
    Modifier(&'a str),
}

impl<'a> StyleContext<'a> {
    /// Context tag without its modifier.
    pub fn kind(self) -> ContextKind {
        match self {
            Self::Base => ContextKind::Base,
            Self::Pseudo(_) => ContextKind::Pseudo,
            Self::Media(_) => ContextKind::Media,
            Self::Modifier(_) => ContextKind::Modifier,
        }
    }

    /// Modifier text for non-base contexts.
    pub fn modifier(self) -> Option<&'a str> {
        match self {
            Self::Base => None,
            Self::Pseudo(m) | Self::Media(m) | Self::Modifier(m) => Some(m),
        }
    }

    /// Same context kind with a different modifier. `Base` stays `Base`.
    pub(crate) fn with_modifier<'b>(self, modifier: &'b str) -> StyleContext<'b> {
        match self {
            Self::Base => StyleContext::Base,
            Self::Pseudo(_) => StyleContext::Pseudo(modifier),
            Self::Media(_) => StyleContext::Media(modifier),
            Self::Modifier(_) => StyleContext::Modifier(modifier),
        }
    }
}

/// Context tag carried by generated rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    /// Unconditional rule.
    Base,
    /// Pseudo-state rule.
    Pseudo,
    /// `@media` wrapped rule.
    Media,
    /// Ancestor-scoped rule.
    Modifier,
}

impl ContextKind {
    /// Lowercase tag used in cache keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Pseudo => "pseudo",
            Self::Media => "media",
            Self::Modifier => "modifier",
        }
    }
}

/// Cache key for one request: `property:value`, plus `|context:modifier` outside base.
///
/// The modifier is sanitized the same way as in class names, so two spellings that share a class
/// also share a key.
pub(crate) fn cache_key(property: &str, css_value: &str, ctx: StyleContext<'_>) -> String {
    match ctx {
        StyleContext::Base => format!("{property}:{css_value}"),
        StyleContext::Pseudo(m) | StyleContext::Media(m) | StyleContext::Modifier(m) => {
            format!(
                "{property}:{css_value}|{}:{}",
                ctx.kind().as_str(),
                sanitize_modifier(m)
            )
        }
    }
}

/// Turn CSS value text into a class-safe token, distinct for distinct values.
///
/// Percent becomes `pct`, decimal points become `_`, a minus sign that starts a number becomes
/// `neg`, separators collapse to `-` and other punctuation is dropped. Values that only use
/// alphanumerics, `%`, inner hyphens and decimal points map one-to-one; every other value (or a
/// token longer than the limit) keeps a readable head plus `_h{hash}` of the full text. Plain
/// tokens never contain `_h`, so the two forms cannot meet.
pub(crate) fn normalize_value(css_value: &str) -> String {
    let trimmed = css_value.trim();
    let (token, lossless) = encode_value(trimmed);
    if lossless && !token.is_empty() && token.len() <= MAX_TOKEN_LEN {
        return token;
    }
    let head: String = token.chars().take(HASHED_HEAD_LEN).collect();
    format!(
        "{}_h{}",
        head.trim_end_matches(['-', '_']),
        hash_str(trimmed).to_base36()
    )
}

/// Token text plus whether it can be mapped back to exactly one input.
fn encode_value(value: &str) -> (String, bool) {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);
    // Literal marker text would be indistinguishable from the markers themselves.
    let mut lossless = !value.starts_with("neg") && !value.contains("pct");

    for (i, &ch) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        match ch {
            c if c.is_ascii_alphanumeric() => out.push(c),
            '%' => out.push_str("pct"),
            '.' => {
                out.push('_');
                let decimal = prev.is_some_and(|c| c.is_ascii_digit())
                    && next.is_some_and(|c| c.is_ascii_digit());
                lossless &= decimal;
            }
            '-' if starts_number(next) && prev.is_none_or(opens_number) => {
                push_sep(&mut out);
                out.push_str("neg");
                lossless &= prev.is_none();
            }
            '-' => {
                push_sep(&mut out);
                let inner = prev.is_some_and(|c| c.is_ascii_alphanumeric())
                    && next.is_some_and(|c| c.is_ascii_alphanumeric());
                lossless &= inner;
            }
            ',' | '/' | '_' => {
                push_sep(&mut out);
                lossless = false;
            }
            c if c.is_whitespace() => {
                push_sep(&mut out);
                lossless = false;
            }
            _ => lossless = false,
        }
    }
    (out.trim_matches('-').to_string(), lossless)
}

fn starts_number(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit() || c == '.')
}

/// Whether a minus sign after `prev` is a sign rather than a hyphen.
fn opens_number(prev: char) -> bool {
    !(prev.is_ascii_alphanumeric() || prev == '%' || prev == ')' || prev == '.')
}

fn push_sep(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Keep modifier names class-safe: ASCII alphanumerics, `-` and `_`.
pub(crate) fn sanitize_modifier(modifier: &str) -> String {
    modifier
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Compose the final utility class name for a context.
pub(crate) fn compose_class(prefix: &str, token: &str, ctx: StyleContext<'_>) -> String {
    match ctx {
        StyleContext::Base => format!("{prefix}-{token}"),
        StyleContext::Pseudo(m) => format!("{prefix}-{token}--{}", sanitize_modifier(m)),
        StyleContext::Media(m) => format!("{}--{prefix}-{token}", sanitize_modifier(m)),
        StyleContext::Modifier(m) => format!("{}:{prefix}-{token}", sanitize_modifier(m)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/token.rs"]
mod tests;
