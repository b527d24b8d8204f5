//! Transliteration map
//!
//! Each language carries named schemes, each a pure `&str -> String`
//! function. Schemes come from code or from character tables in the
//! configuration. Asking for a scheme that does not exist returns the input
//! unchanged.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A transliteration function
pub type TranslitFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Scheme name -> transliteration function
#[derive(Clone, Default)]
pub struct TranslitMap {
    schemes: BTreeMap<String, TranslitFn>,
}

impl TranslitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from configured character tables
    pub fn from_tables(tables: &BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let mut map = Self::new();
        for (scheme, table) in tables {
            let table = CharTable::new(table);
            map.insert(scheme, move |text: &str| table.apply(text));
        }
        map
    }

    pub fn insert<F>(&mut self, scheme: &str, f: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.schemes.insert(scheme.to_string(), Arc::new(f));
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains_key(scheme)
    }

    /// Scheme names in sorted order
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(|s| s.as_str())
    }

    /// Transliterate `text`; unknown schemes are the identity
    pub fn apply(&self, scheme: &str, text: &str) -> String {
        match self.schemes.get(scheme) {
            Some(f) => f(text),
            None => text.to_string(),
        }
    }

    /// Like [`apply`](Self::apply) with an optional scheme
    pub fn apply_opt(&self, scheme: Option<&str>, text: &str) -> String {
        match scheme {
            Some(scheme) => self.apply(scheme, text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for TranslitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslitMap")
            .field("schemes", &self.schemes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Longest-match character table
///
/// Keys are matched case-insensitively. When the first source character of a
/// match is uppercase, the first character of the replacement is uppercased.
#[derive(Debug, Clone)]
pub struct CharTable {
    entries: HashMap<String, String>,
    max_key_chars: usize,
}

impl CharTable {
    pub fn new(table: &BTreeMap<String, String>) -> Self {
        let entries: HashMap<String, String> = table
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();
        let max_key_chars = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_key_chars,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let longest = self.max_key_chars.min(chars.len() - i);
            let mut matched = false;

            for len in (1..=longest).rev() {
                let key: String = chars[i..i + len].iter().collect::<String>().to_lowercase();
                if let Some(replacement) = self.entries.get(&key) {
                    if chars[i].is_uppercase() {
                        out.push_str(&capitalize(replacement));
                    } else {
                        out.push_str(replacement);
                    }
                    i += len;
                    matched = true;
                    break;
                }
            }

            if !matched {
                out.push(chars[i]);
                i += 1;
            }
        }

        out
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
