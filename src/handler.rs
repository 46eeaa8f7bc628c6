//! Per-language (parser, displayer) pairs.
//!
//! Languages are registered under one or more aliases. Looking up a language
//! that has no configuration, or whose configuration does not compile, falls
//! back to English with a warning.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::date::DateValue;
use crate::display::{DateDisplay, DisplayFormat};
use crate::locale::{ConfigError, LocaleConfig, en, ru};
use crate::parser::DateParser;
use crate::prefix::PrefixRegistry;

/// Alias under which the fallback configuration is always registered
pub const DEFAULT_LANGUAGE: &str = "C";

/// A parser and displayer bound to one language
#[derive(Debug)]
pub struct DateHandler {
    lang: String,
    parser: DateParser,
    display: DateDisplay,
}

impl DateHandler {
    /// Builds both halves from `config`, sharing prefix tables through `registry`.
    ///
    /// # Errors
    /// Returns the `ConfigError` of a configuration the parser cannot use.
    pub fn new(config: Arc<LocaleConfig>, registry: &PrefixRegistry) -> Result<Self, ConfigError> {
        let parser = DateParser::new(&config, registry)?;
        Ok(Self {
            lang: config.lang.clone(),
            parser,
            display: DateDisplay::new(config),
        })
    }

    /// Language tag of the configuration in use
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn parse(&self, text: &str) -> DateValue {
        self.parser.parse(text)
    }

    pub fn display(&self, date: &DateValue) -> String {
        self.display.display(date)
    }

    pub fn display_with(&self, date: &DateValue, format: DisplayFormat) -> String {
        self.display.display_with(date, format)
    }

    pub const fn set_format(&mut self, format: DisplayFormat) {
        self.display.set_format(format);
    }

    pub const fn parser(&self) -> &DateParser {
        &self.parser
    }

    pub const fn displayer(&self) -> &DateDisplay {
        &self.display
    }
}

/// Language aliases mapped to their configurations
#[derive(Debug)]
pub struct HandlerRegistry {
    configs: HashMap<String, Arc<LocaleConfig>>,
    prefixes: PrefixRegistry,
}

impl Default for HandlerRegistry {
    /// English (`C`, `en`, `en_US`), British English and Russian
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(&[DEFAULT_LANGUAGE, "en", "en_US"], en::config());
        registry.register(&["en_GB"], en::config_gb());
        registry.register(&["ru", "ru_RU"], ru::config());
        registry
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only the fallback configuration
    pub fn empty() -> Self {
        let mut configs = HashMap::new();
        configs.insert(DEFAULT_LANGUAGE.to_owned(), Arc::new(en::config()));
        Self {
            configs,
            prefixes: PrefixRegistry::new(),
        }
    }

    /// Registers `config` under every alias, replacing earlier registrations
    pub fn register<S: AsRef<str>>(&mut self, aliases: &[S], config: LocaleConfig) {
        let config = Arc::new(config);
        for alias in aliases {
            self.configs.insert(alias.as_ref().to_owned(), Arc::clone(&config));
        }
    }

    /// Sorted list of every registered alias
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// The configuration for `lang`: an exact alias, then the language part
    /// before `_` (`ru` for `ru_UA`), then the default
    pub fn config(&self, lang: &str) -> Arc<LocaleConfig> {
        let base = lang.split(['_', '.', '@']).next().unwrap_or_default();
        if let Some(config) = self.configs.get(lang).or_else(|| self.configs.get(base)) {
            return Arc::clone(config);
        }
        warn!("Date handler for '{lang}' not available, using default");
        self.default_config()
    }

    fn default_config(&self) -> Arc<LocaleConfig> {
        self.configs
            .get(DEFAULT_LANGUAGE)
            .map_or_else(|| Arc::new(en::config()), Arc::clone)
    }

    /// A handler for `lang`, falling back to the default language.
    ///
    /// # Errors
    /// Returns a `ConfigError` only when the default configuration itself is unusable.
    pub fn handler(&self, lang: &str) -> Result<DateHandler, ConfigError> {
        DateHandler::new(self.config(lang), &self.prefixes).or_else(|err| {
            warn!("Date handler for '{lang}' failed to build ({err}), using default");
            DateHandler::new(self.default_config(), &self.prefixes)
        })
    }

    /// Languages whose prefix tables have been built so far
    pub fn built_languages(&self) -> Vec<String> {
        self.prefixes.languages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DatePoint, Modifier};

    #[test]
    fn test_alias_lookup() {
        struct TestCase {
            lang:     &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { lang: "C", expected: "en" },
            TestCase { lang: "en_US", expected: "en" },
            TestCase { lang: "en_GB", expected: "en_GB" },
            TestCase { lang: "ru_RU", expected: "ru" },
            TestCase { lang: "ru_UA", expected: "ru" },
            TestCase { lang: "ru_RU.UTF-8", expected: "ru" },
            TestCase { lang: "xx_YY", expected: "en" },
        ];

        let registry = HandlerRegistry::new();
        for case in &cases {
            assert_eq!(registry.handler(case.lang).unwrap().lang(), case.expected, "{}", case.lang);
        }
    }

    #[test]
    fn test_broken_config_falls_back() {
        let mut registry = HandlerRegistry::new();
        let mut broken = ru::config();
        broken.lang = "xx".to_owned();
        broken.months.long.truncate(3);
        registry.register(&["xx"], broken);

        let handler = registry.handler("xx").unwrap();
        assert_eq!(handler.lang(), "en");
        assert_eq!(handler.parse("May 1850").start(), DatePoint::new(0, 5, 1850, false).unwrap());

        let mut untagged = ru::config();
        untagged.lang = String::new();
        registry.register(&["yy"], untagged);
        assert_eq!(registry.handler("yy").unwrap().lang(), "en");
        assert_eq!(registry.built_languages(), ["en"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = HandlerRegistry::empty();
        assert_eq!(registry.aliases(), ["C"]);

        registry.register(&["C", "en_GB"], en::config_gb());
        assert_eq!(registry.aliases(), ["C", "en_GB"]);
        assert_eq!(registry.handler("C").unwrap().lang(), "en_GB");
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let registry = HandlerRegistry::new();
        let mut handler = registry.handler("en").unwrap();
        for text in ["1850-03-05", "1850-03", "1850"] {
            assert_eq!(handler.display(&handler.parse(text)), text);
        }

        for year in [1, 1582, 1900, 2000, 2024] {
            for month in 1..=12u8 {
                let last = if month == 2 && crate::calendar::is_leap_year(year) {
                    29
                } else {
                    crate::DAYS_IN_MONTH[usize::from(month)]
                };
                for day in [1, 15, last] {
                    let iso = format!("{year}-{month:02}-{day:02}");
                    assert_eq!(handler.display(&handler.parse(&iso)), iso);
                }
            }
        }

        handler.set_format(DisplayFormat::MonthDayYear);
        let date = handler.parse("between 5 May 1800 and 1900");
        assert_eq!(handler.display(&date), "between May 5, 1800 and 1900");
        assert_eq!(handler.display_with(&date, DisplayFormat::Iso), "between 1800-05-05 and 1900");
    }

    #[test]
    fn test_russian_handler() {
        let registry = HandlerRegistry::new();
        let mut handler = registry.handler("ru_RU").unwrap();
        handler.set_format(DisplayFormat::DayMonthYear);

        let date = handler.parse("между маем 1850 и июнем 1851");
        assert_eq!(date.modifier(), Modifier::Range);
        assert_eq!(handler.display(&date), "между маем 1850 и июнем 1851");

        let date = handler.parse("до мая 1850");
        assert_eq!(handler.display(&date), "до мая 1850");
        assert_eq!(registry.built_languages(), ["ru"]);
    }
}
