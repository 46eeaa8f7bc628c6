//! Words with grammatical forms, and the `{placeholder}` templates they are rendered into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word (typically a month name) with one or more inflected forms.
///
/// Forms are keyed by an arbitrary per-language tag such as `"Р"` for the
/// Russian genitive. The first form is the default and is used whenever a
/// requested key is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "LexemeRepr", into = "LexemeRepr")]
pub struct Lexeme {
    forms: Vec<(String, String)>,
}

impl Lexeme {
    /// A word with a single, unkeyed form
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            forms: vec![(String::new(), word.into())],
        }
    }

    /// A word with keyed forms, the first being the default
    pub fn with_forms<K, V>(forms: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            forms: forms.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// The form stored under `key`, or the default form
    pub fn form(&self, key: &str) -> &str {
        self.forms
            .iter()
            .find(|(k, _)| k == key)
            .or_else(|| self.forms.first())
            .map_or("", |(_, v)| v.as_str())
    }

    /// Every distinct non-empty spelling of the word
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.forms
            .iter()
            .enumerate()
            .filter(|(i, (_, v))| !v.is_empty() && !self.forms[..*i].iter().any(|(_, w)| w == v))
            .map(|(_, (_, v))| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.variants().next().is_none()
    }
}

impl From<&str> for Lexeme {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form(""))
    }
}

/// Plain words serialize as a bare string, inflected ones as `[key, form]` pairs
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LexemeRepr {
    Plain(String),
    Forms(Vec<(String, String)>),
}

impl From<LexemeRepr> for Lexeme {
    fn from(repr: LexemeRepr) -> Self {
        match repr {
            LexemeRepr::Plain(word) => Self::new(word),
            LexemeRepr::Forms(forms) => Self { forms },
        }
    }
}

impl From<Lexeme> for LexemeRepr {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme.forms.as_slice() {
            [(key, word)] if key.is_empty() => Self::Plain(word.clone()),
            _ => Self::Forms(lexeme.forms),
        }
    }
}

/// A value substituted into a template
#[derive(Debug, Clone, Copy)]
pub(crate) enum Value<'a> {
    Text(&'a str),
    Word(&'a Lexeme),
}

/// Fills `{name}` and `{name.forms[KEY]}` placeholders.
///
/// `{{` and `}}` are literal braces, a `:spec` suffix inside a placeholder is
/// ignored and unknown placeholders are kept as written.
pub(crate) fn render(template: &str, values: &[(&str, Value<'_>)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find(['{', '}']) {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        let Some(close) = tail.find('}').filter(|_| tail.starts_with('{')) else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
            continue;
        };
        let inner = &tail[1..close];
        match substitute(inner, values) {
            Some(text) => out.push_str(text),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

fn substitute<'a>(placeholder: &str, values: &[(&str, Value<'a>)]) -> Option<&'a str> {
    let placeholder = placeholder.split_once(':').map_or(placeholder, |(name, _)| name);
    let (name, key) = match placeholder.split_once(".forms[") {
        Some((name, key)) => (name, key.strip_suffix(']')?),
        None => (placeholder, ""),
    };
    let (_, value) = values.iter().find(|(n, _)| *n == name)?;
    Some(match *value {
        Value::Text(text) => text,
        Value::Word(word) => word.form(key),
    })
}
