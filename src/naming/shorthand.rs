use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::foundation::css::{KNOWN_PROPERTIES, kebab_case};

/// Deterministic property -> short code table.
///
/// Codes are `first char + interior consonants + last char`, lowercased. Later properties that
/// collide with an earlier code grow by their own trailing characters until unique.
#[derive(Clone, Debug, Default)]
pub struct ShorthandTable {
    codes: HashMap<String, String>,
}

impl ShorthandTable {
    /// Build codes for `properties` in iteration order. Repeated names keep their first code.
    pub fn build<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = HashMap::new();
        let mut used: HashSet<String> = HashSet::new();
        for prop in properties {
            let prop = prop.as_ref();
            if prop.is_empty() || codes.contains_key(prop) {
                continue;
            }
            let code = unique_code(prop, &used);
            used.insert(code.clone());
            codes.insert(prop.to_string(), code);
        }
        Self { codes }
    }

    /// Process-wide table over the engine's known property list.
    pub fn standard() -> &'static ShorthandTable {
        static TABLE: OnceLock<ShorthandTable> = OnceLock::new();
        TABLE.get_or_init(|| ShorthandTable::build(KNOWN_PROPERTIES.iter().copied()))
    }

    /// Code for a known property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.codes.get(property).map(String::as_str)
    }

    /// Code for `property`, or its kebab-case form when the property is unknown.
    pub fn prefix_for(&self, property: &str) -> String {
        match self.get(property) {
            Some(code) => code.to_string(),
            None => kebab_case(property).trim_start_matches('-').to_string(),
        }
    }

    /// Number of properties with codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn natural_code(prop: &str) -> String {
    let chars: Vec<char> = prop.chars().flat_map(char::to_lowercase).collect();
    let mut code = String::new();
    if let Some((first, rest)) = chars.split_first() {
        code.push(*first);
        if let Some((last, interior)) = rest.split_last() {
            code.extend(
                interior
                    .iter()
                    .filter(|c| c.is_ascii_alphabetic() && !is_vowel(**c)),
            );
            code.push(*last);
        }
    }
    if code.chars().count() < 2 {
        return chars.iter().take(2).collect();
    }
    code
}

fn unique_code(prop: &str, used: &HashSet<String>) -> String {
    let mut code = natural_code(prop);
    if !used.contains(&code) {
        return code;
    }

    let trailing: Vec<char> = prop.chars().flat_map(char::to_lowercase).rev().collect();
    for c in trailing {
        code.push(c);
        if !used.contains(&code) {
            return code;
        }
    }

    let base = code;
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}{n}");
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/shorthand.rs"]
mod tests;
