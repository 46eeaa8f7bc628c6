//! Lookup tables mapping every unambiguous prefix of a word to its code.
//!
//! Month names and calendar names may be abbreviated to any length in parsed
//! text. The tables are built once per language and shared through a
//! [`PrefixRegistry`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::lexeme::Lexeme;
use crate::locale::LocaleConfig;

/// Lowercase word or prefix to code (month number or calendar index)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable(HashMap<String, u8>);

impl PrefixTable {
    /// A table holding fixed spellings, e.g. GEDCOM month codes
    pub fn seeded(entries: &[(&str, u8)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(word, code)| ((*word).to_lowercase(), *code))
                .collect(),
        )
    }

    /// Registers the words of `variants` (entry `i` holds the spellings of
    /// code `i`) and then every prefix of them that is not yet taken.
    ///
    /// An existing full word keeps its code. Longer words claim prefixes first,
    /// and a word stops handing out prefixes at the first one already present.
    /// Prefixes ending in whitespace are skipped. Running the same build again
    /// changes nothing.
    pub fn build<S: AsRef<str>>(&mut self, variants: &[Vec<S>]) {
        let mut words: Vec<String> = Vec::new();
        for (code, spellings) in variants.iter().enumerate() {
            let Ok(code) = u8::try_from(code) else {
                break;
            };
            for spelling in spellings {
                let word = spelling.as_ref().to_lowercase();
                if word.is_empty() || words.contains(&word) {
                    continue;
                }
                debug!("Mapping {word} -> {code}");
                self.0.entry(word.clone()).or_insert(code);
                words.push(word);
            }
        }

        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        for word in &words {
            let Some(&code) = self.0.get(word) else {
                continue;
            };
            let cuts: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
            for &cut in cuts.iter().rev() {
                let prefix = &word[..cut];
                if prefix.trim() != prefix {
                    continue;
                }
                if self.0.contains_key(prefix) {
                    break;
                }
                debug!("Mapping {prefix} -> {code}");
                self.0.insert(prefix.to_owned(), code);
            }
        }
    }

    /// Code for a word or prefix, case-insensitively
    pub fn get(&self, word: &str) -> Option<u8> {
        self.0.get(&word.to_lowercase()).copied()
    }

    /// Every registered word and prefix
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const HEBREW_SEED: &[(&str, u8)] = &[
    ("tishri", 1),
    ("heshvan", 2),
    ("kislev", 3),
    ("tevet", 4),
    ("shevat", 5),
    ("adari", 6),
    ("adarii", 7),
    ("nisan", 8),
    ("iyyar", 9),
    ("sivan", 10),
    ("tammuz", 11),
    ("av", 12),
    ("elul", 13),
    ("cheshvan", 2),
    ("adar sheni", 7),
    ("iyar", 9),
    // GEDCOM
    ("tsh", 1),
    ("csh", 2),
    ("ksl", 3),
    ("tvt", 4),
    ("shv", 5),
    ("adr", 6),
    ("ads", 7),
    ("nsn", 8),
    ("iyr", 9),
    ("svn", 10),
    ("tmz", 11),
    ("aav", 12),
    ("ell", 13),
];

// GEDCOM
const FRENCH_SEED: &[(&str, u8)] = &[
    ("vend", 1),
    ("brum", 2),
    ("frim", 3),
    ("nivo", 4),
    ("pluv", 5),
    ("vent", 6),
    ("germ", 7),
    ("flor", 8),
    ("prai", 9),
    ("mess", 10),
    ("ther", 11),
    ("fruc", 12),
    ("comp", 13),
];

const ISLAMIC_SEED: &[(&str, u8)] = &[
    ("muharram", 1),
    ("muharram ul haram", 1),
    ("safar", 2),
    ("rabi`al-awwal", 3),
    ("rabi'l", 3),
    ("rabi`ul-akhir", 4),
    ("rabi`ath-thani", 4),
    ("rabi` ath-thani", 4),
    ("rabi`al-thaany", 4),
    ("rabi` al-thaany", 4),
    ("rabi' ii", 4),
    ("jumada l-ula", 5),
    ("jumaada-ul-awwal", 5),
    ("jumaada i", 5),
    ("jumada t-tania", 6),
    ("jumaada-ul-akhir", 6),
    ("jumaada al-thaany", 6),
    ("jumaada ii", 6),
    ("rajab", 7),
    ("sha`ban", 8),
    ("sha`aban", 8),
    ("ramadan", 9),
    ("ramadhan", 9),
    ("shawwal", 10),
    ("dhu l-qa`da", 11),
    ("dhu qadah", 11),
    ("thw al-qi`dah", 11),
    ("dhu l-hijja", 12),
    ("dhu hijja", 12),
    ("thw al-hijjah", 12),
];

fn lexeme_variants(words: &[Lexeme]) -> Vec<Vec<&str>> {
    words.iter().map(|w| w.variants().collect()).collect()
}

/// All prefix tables of one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTables {
    /// Gregorian, Julian and Swedish month names
    pub months: PrefixTable,
    pub hebrew: PrefixTable,
    pub french: PrefixTable,
    pub islamic: PrefixTable,
    pub persian: PrefixTable,
    /// Calendar names to calendar index
    pub calendars: PrefixTable,
}

impl PrefixTables {
    pub fn build(config: &LocaleConfig) -> Self {
        let names = &config.months;
        let mut tables = Self {
            hebrew: PrefixTable::seeded(HEBREW_SEED),
            french: PrefixTable::seeded(FRENCH_SEED),
            islamic: PrefixTable::seeded(ISLAMIC_SEED),
            ..Self::default()
        };

        let months: Vec<Vec<&str>> = (0..names.long.len().max(names.short.len()))
            .map(|i| {
                let mut spellings: Vec<&str> = Vec::new();
                spellings.extend(names.long.get(i).into_iter().flat_map(Lexeme::variants));
                spellings.extend(names.short.get(i).into_iter().flat_map(Lexeme::variants));
                spellings.extend(
                    names
                        .alternates
                        .get(i)
                        .into_iter()
                        .flat_map(|alt| alt.split('|'))
                        .filter(|s| !s.is_empty()),
                );
                spellings
            })
            .collect();
        tables.months.build(&months);
        tables.hebrew.build(&lexeme_variants(&names.hebrew));
        tables.french.build(&lexeme_variants(&names.french));
        tables.islamic.build(&lexeme_variants(&names.islamic));
        tables.persian.build(&lexeme_variants(&names.persian));

        let calendars: Vec<Vec<&str>> = config
            .calendar_names
            .iter()
            .map(|names| names.split('|').filter(|s| !s.is_empty()).collect())
            .collect();
        tables.calendars.build(&calendars);
        tables
    }
}

/// Process-wide cache of prefix tables, keyed by language.
///
/// Tables are built at most once per language; concurrent first use of the
/// same language waits on the lock and then shares the finished tables.
#[derive(Debug, Default)]
pub struct PrefixRegistry {
    built: Mutex<HashMap<String, Arc<PrefixTables>>>,
}

impl PrefixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tables for the configuration's language, building them on first use
    pub fn ensure_built(&self, config: &LocaleConfig) -> Arc<PrefixTables> {
        let mut built = self.built.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tables) = built.get(&config.lang) {
            debug!("Prefix tables for {} already built", config.lang);
            return Arc::clone(tables);
        }
        debug!("Begin building parser prefix tables for {}", config.lang);
        let tables = Arc::new(PrefixTables::build(config));
        built.insert(config.lang.clone(), Arc::clone(&tables));
        tables
    }

    /// Languages whose tables have been built
    pub fn languages(&self) -> Vec<String> {
        let built = self.built.lock().unwrap_or_else(PoisonError::into_inner);
        let mut langs: Vec<String> = built.keys().cloned().collect();
        langs.sort();
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{en, ru};

    fn months() -> PrefixTable {
        PrefixTables::build(&en::config()).months
    }

    #[test]
    fn test_full_names_and_prefixes() {
        let table = months();
        assert_eq!(table.get("january"), Some(1));
        assert_eq!(table.get("JANUARY"), Some(1));
        assert_eq!(table.get("janu"), Some(1));
        assert_eq!(table.get("sept"), Some(9));
        assert_eq!(table.get("s"), Some(9));
        assert_eq!(table.get("xyz"), None);
    }

    #[test]
    fn test_longest_word_precedence() {
        let table = months();
        assert_eq!(table.get("mar"), Some(3));
        assert_eq!(table.get("march"), Some(3));
        assert_eq!(table.get("may"), Some(5));
        // "mar" is registered before "may", so it claims the shared prefix
        assert_eq!(table.get("ma"), Some(3));
        assert_eq!(table.get("jun"), Some(6));
        assert_eq!(table.get("jul"), Some(7));
    }

    #[test]
    fn test_first_seen_full_word_wins() {
        let mut table = PrefixTable::default();
        table.build(&[vec![], vec!["Mar"], vec!["mar", "Marz"]]);
        assert_eq!(table.get("mar"), Some(1));
        assert_eq!(table.get("marz"), Some(2));
        // "marz" stops at the taken "mar", leaving the shorter prefixes to "mar"
        assert_eq!(table.get("ma"), Some(1));
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = en::config();
        let once = PrefixTables::build(&config);
        let mut twice = once.clone();
        let months: Vec<Vec<&str>> = config
            .months
            .long
            .iter()
            .zip(&config.months.short)
            .map(|(long, short)| long.variants().chain(short.variants()).collect())
            .collect();
        twice.months.build(&months);
        twice.hebrew.build(&lexeme_variants(&config.months.hebrew));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_prefixes_skipped() {
        let mut table = PrefixTable::default();
        table.build(&[vec![], vec!["adar sheni"]]);
        assert_eq!(table.get("adar s"), Some(1));
        assert!(!table.keys().any(|k| k.ends_with(' ')));
    }

    #[test]
    fn test_seeds_survive() {
        let tables = PrefixTables::build(&en::config());
        assert_eq!(tables.hebrew.get("csh"), Some(2));
        assert_eq!(tables.hebrew.get("tishri"), Some(1));
        assert_eq!(tables.hebrew.get("adarii"), Some(7));
        assert_eq!(tables.french.get("vend"), Some(1));
        assert_eq!(tables.french.get("vendémiaire"), Some(1));
        assert_eq!(tables.islamic.get("jumaada ii"), Some(6));
        assert_eq!(tables.persian.get("farv"), Some(1));
        assert_eq!(tables.calendars.get("julian"), Some(1));
        assert_eq!(tables.calendars.get("french republican"), Some(3));
    }

    #[test]
    fn test_inflected_forms_all_resolve() {
        let table = PrefixTables::build(&ru::config()).months;
        assert_eq!(table.get("мая"), Some(5));
        assert_eq!(table.get("маем"), Some(5));
        assert_eq!(table.get("МАЙ"), Some(5));
        assert_eq!(table.get("декабрём"), Some(12));
    }

    #[test]
    fn test_registry_builds_once() {
        let registry = PrefixRegistry::new();
        let config = en::config();
        let first = registry.ensure_built(&config);
        let second = registry.ensure_built(&config);
        assert!(Arc::ptr_eq(&first, &second));

        registry.ensure_built(&ru::config());
        assert_eq!(registry.languages(), ["en", "ru"]);
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        let registry = Arc::new(PrefixRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.ensure_built(&en::config()))
            })
            .collect();
        let tables: Vec<Arc<PrefixTables>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for other in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], other));
        }
        assert_eq!(registry.languages(), ["en"]);
    }
}
