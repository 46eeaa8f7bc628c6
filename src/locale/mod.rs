//! Per-language configuration consumed by the parser and the displayer.
//!
//! A [`LocaleConfig`] is plain data: word tables, grammar tokens and display
//! templates. It can be built in code (see [`en`] and [`ru`]) or deserialized
//! from any serde format; every group defaults to the English values so a
//! partial configuration is enough.

pub mod en;
pub mod ru;

use serde::{Deserialize, Serialize};

use crate::lexeme::Lexeme;
use crate::types::{Modifier, NewYear, Quality};

/// Error type for locale configurations that cannot be used
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A token list produced a pattern the regex engine rejected
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// A word table has the wrong number of entries
    #[error("Table '{table}' needs {expected} entries, found {found}")]
    MonthTable {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// Prefix tables are cached by language tag, so every configuration needs one
    #[error("Configuration has no language tag")]
    MissingLanguage,
}

/// Order of day, month and year in numeric dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    #[default]
    Mdy,
    Dmy,
    Ymd,
}

impl DateOrder {
    /// Reads the order from the last three `%x` directives of a strftime-style
    /// template. Templates without three directives are taken as day first.
    pub fn from_format(format: &str) -> Self {
        let lower = format.to_lowercase();
        let directives: Vec<char> = lower
            .split('%')
            .skip(1)
            .filter_map(|part| part.chars().next())
            .filter(|c| !c.is_whitespace())
            .collect();
        let Some(last) = directives.len().checked_sub(3).map(|i| &directives[i..]) else {
            return Self::Dmy;
        };
        match last {
            ['d' | 'e', 'm' | 'b', 'y'] => Self::Dmy,
            ['y', 'm' | 'b', 'd'] => Self::Ymd,
            _ => Self::Mdy,
        }
    }
}

/// Month and weekday names for every calendar.
///
/// Month tables are indexed by month number; index 0 is unused and left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthNames {
    pub long: Vec<Lexeme>,
    pub short: Vec<Lexeme>,
    /// Extra spellings accepted when parsing, `|`-separated per month
    pub alternates: Vec<String>,
    pub hebrew: Vec<Lexeme>,
    pub french: Vec<Lexeme>,
    pub persian: Vec<Lexeme>,
    pub islamic: Vec<Lexeme>,
    /// Weekday names, Sunday first, index 0 unused
    pub long_days: Vec<String>,
    pub short_days: Vec<String>,
}

/// Words the parser recognizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseTokens {
    /// Modifiers written before the date
    pub modifiers: Vec<(String, Modifier)>,
    /// Modifiers written after the date
    pub modifiers_after: Vec<(String, Modifier)>,
    pub qualities: Vec<(String, Quality)>,
    pub bce: Vec<String>,
    pub span_start: Vec<String>,
    pub span_stop: Vec<String>,
    pub range_start: Vec<String>,
    pub range_mid: Vec<String>,
    pub new_years: Vec<(String, NewYear)>,
    /// Synonyms for the current date
    pub today: Vec<String>,
}

/// Text the displayer produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayTemplates {
    /// Indexed by modifier code. A string with a leading space goes after the date.
    pub modifiers: Vec<String>,
    /// Indexed by quality code
    pub qualifiers: Vec<String>,
    pub span: String,
    pub range: String,
    pub simple: String,
    pub bce: String,
    /// Formats 2 to 5
    pub long_month_day_year: String,
    pub short_month_day_year: String,
    pub day_long_month_year: String,
    pub day_short_month_year: String,
    /// Month-and-year phrases keyed by inflection hint; `""` is the fallback
    pub long_month_year: Vec<(String, String)>,
    pub short_month_year: Vec<(String, String)>,
    /// Indexed like `NewYear`: Jan1, Mar1, Mar25, Sep1
    pub new_years: Vec<String>,
    pub format_names: Vec<String>,
}

/// Inflection hints handed to the month renderer for each grammatical context
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InflectionHints {
    pub span_start: String,
    pub span_stop: String,
    pub range_start: String,
    pub range_stop: String,
    pub before: String,
    pub after: String,
    pub about: String,
    pub from: String,
    pub to: String,
    pub estimated: String,
    pub calculated: String,
}

impl InflectionHints {
    /// Hint for a single date carrying this modifier and quality
    pub fn for_simple(&self, modifier: Modifier, quality: Quality) -> &str {
        match (modifier, quality) {
            (Modifier::Before, _) => &self.before,
            (Modifier::After, _) => &self.after,
            (Modifier::From, _) => &self.from,
            (Modifier::To, _) => &self.to,
            (Modifier::About, _) => &self.about,
            (_, Quality::Estimated) => &self.estimated,
            (_, Quality::Calculated) => &self.calculated,
            _ => "",
        }
    }
}

/// Everything the date handler needs to know about one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language tag, also the key of the prefix-table cache. Two configurations
    /// sharing a tag share one set of prefix tables. Never inherited from the
    /// default configuration when deserializing.
    #[serde(default)]
    pub lang: String,
    /// Preferred numeric date template, e.g. `%m/%d/%Y`
    pub date_format: String,
    /// Calendar names in calendar code order; `|` separates extra parse spellings
    pub calendar_names: Vec<String>,
    pub months: MonthNames,
    pub tokens: ParseTokens,
    pub display: DisplayTemplates,
    pub inflections: InflectionHints,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        en::config()
    }
}

impl LocaleConfig {
    pub fn order(&self) -> DateOrder {
        DateOrder::from_format(&self.date_format)
    }

    /// Display name of a calendar, the first of its spellings
    pub fn calendar_name(&self, index: usize) -> &str {
        self.calendar_names
            .get(index)
            .and_then(|names| names.split('|').next())
            .unwrap_or_default()
    }

    /// Checks the language tag is set and every month table is complete.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingLanguage` for an empty tag, or
    /// `ConfigError::MonthTable` naming the first short table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::MissingLanguage);
        }
        let months = &self.months;
        let tables: [(&'static str, usize, usize); 8] = [
            ("long", months.long.len(), 13),
            ("short", months.short.len(), 13),
            ("hebrew", months.hebrew.len(), 14),
            ("french", months.french.len(), 14),
            ("persian", months.persian.len(), 13),
            ("islamic", months.islamic.len(), 13),
            ("long_days", months.long_days.len(), 8),
            ("short_days", months.short_days.len(), 8),
        ];
        for (table, found, expected) in tables {
            if found < expected {
                return Err(ConfigError::MonthTable {
                    table,
                    expected,
                    found,
                });
            }
        }
        if self.calendar_names.len() < 7 {
            return Err(ConfigError::MonthTable {
                table: "calendar_names",
                expected: 7,
                found: self.calendar_names.len(),
            });
        }
        Ok(())
    }
}

pub(crate) fn lexemes(words: &[&str]) -> Vec<Lexeme> {
    words.iter().copied().map(Lexeme::from).collect()
}

pub(crate) fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

pub(crate) fn templates(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

pub(crate) fn pairs<T: Copy>(entries: &[(&str, T)]) -> Vec<(String, T)> {
    entries.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_order_from_format() {
        struct TestCase {
            format:   &'static str,
            expected: DateOrder,
        }

        let cases = [
            TestCase { format: "%m/%d/%Y", expected: DateOrder::Mdy },
            TestCase { format: "%d/%m/%Y", expected: DateOrder::Dmy },
            TestCase { format: "%d.%m.%Y", expected: DateOrder::Dmy },
            TestCase { format: "%e.%b.%Y", expected: DateOrder::Dmy },
            TestCase { format: "%Y-%m-%d", expected: DateOrder::Ymd },
            TestCase { format: "%a %e.%b.%Y", expected: DateOrder::Dmy },
            TestCase { format: "nonsense", expected: DateOrder::Dmy },
        ];

        for case in &cases {
            assert_eq!(DateOrder::from_format(case.format), case.expected, "{}", case.format);
        }
    }

    #[test]
    fn test_builtin_configs_validate() {
        for config in [en::config(), en::config_gb(), ru::config()] {
            assert!(config.validate().is_ok(), "{}", config.lang);
        }
    }

    #[test]
    fn test_short_table_rejected() {
        let mut config = en::config();
        config.months.hebrew.truncate(5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MonthTable { table: "hebrew", expected: 14, found: 5 })
        ));
    }

    #[test]
    fn test_partial_config_deserializes() {
        let json = r#"{"lang": "en_AU", "date_format": "%d/%m/%Y"}"#;
        let config: LocaleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lang, "en_AU");
        assert_eq!(config.order(), DateOrder::Dmy);
        assert_eq!(config.months, en::config().months);
        assert_eq!(config.calendar_name(3), "French Republican");
    }

    #[test]
    fn test_language_tag_required() {
        let config: LocaleConfig = serde_json::from_str(r#"{"date_format": "%d/%m/%Y"}"#).unwrap();
        assert_eq!(config.lang, "");
        assert!(matches!(config.validate(), Err(ConfigError::MissingLanguage)));
    }

    #[test]
    fn test_hint_selection() {
        let hints = ru::config().inflections;
        assert_eq!(hints.for_simple(Modifier::Before, Quality::None), "before");
        assert_eq!(hints.for_simple(Modifier::None, Quality::Estimated), "");
        assert_eq!(hints.for_simple(Modifier::None, Quality::None), "");
    }
}
