//! Free-text date parsing.
//!
//! [`DateParser::parse`] runs a fixed sequence of matchers over the input:
//! calendar and new-year annotations, quality, span, range, quarter, BCE,
//! modifiers and finally the plain-date grammars of the selected calendar.
//! Anything it cannot read becomes a text-only [`DateValue`].

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::debug;
use regex::{Captures, Match, Regex};

use crate::calendar;
use crate::consts::{DAYS_IN_MONTH, QUARTER_MONTHS, TODAY_SIGIL};
use crate::date::DateValue;
use crate::locale::{ConfigError, DateOrder, LocaleConfig};
use crate::prefix::{PrefixRegistry, PrefixTable, PrefixTables};
use crate::types::{Calendar, DatePoint, Modifier, NewYear, Quality};

const RFC_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const RFC_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Builds a regex group matching any of `keys`, longest first
fn alternation<I, S>(keys: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys: Vec<String> = keys
        .into_iter()
        .map(|k| k.as_ref().to_owned())
        .filter(|k| !k.is_empty())
        .collect();
    keys.sort_by(|a, b| {
        Reverse(a.chars().count())
            .cmp(&Reverse(b.chars().count()))
            .then_with(|| a.cmp(b))
    });
    keys.dedup();
    if keys.is_empty() {
        return None;
    }
    let escaped: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
    Some(format!("({})", escaped.join("|")))
}

fn compile(
    group: Option<&String>,
    pattern: impl FnOnce(&str) -> String,
) -> Result<Option<Regex>, regex::Error> {
    group.map(|g| Regex::new(&pattern(g))).transpose()
}

/// The text of capture group `i`, empty when it did not participate
fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Absent groups count as 0; present groups that are not numbers fail the match
fn number(group: Option<Match<'_>>) -> Option<i64> {
    group.map_or(Some(0), |g| g.as_str().trim().parse().ok())
}

fn point(day: i64, month: i64, year: i64, double_dated: bool) -> Option<DatePoint> {
    let day = u8::try_from(day).ok()?;
    let month = u8::try_from(month).ok()?;
    let year = i32::try_from(year).ok()?;
    DatePoint::new(day, month, year, double_dated).ok()
}

fn checked(calendar: Calendar, point: DatePoint) -> Option<DatePoint> {
    calendar::is_valid(calendar, point.day(), point.month(), point.year()).then_some(point)
}

/// The other-style year written after the slash of "1722/3", given 1722
const fn slash_rollover(year: i64) -> i64 {
    if year % 100 == 99 {
        (year + 1) % 1000
    } else if year % 10 == 9 {
        (year + 1) % 100
    } else {
        (year + 1) % 10
    }
}

/// Day part after a month name: "march 5, 1850" needs a space before the year
const GREGORIAN_DAY: &str = r"(\s+\d+)?\s*,?\s+";
/// "tishri 5785" reads the lone number as the year
const OTHER_DAY: &str = r"\s+(\d+)?\s*,?\s*";

/// Month-name grammars of one calendar
#[derive(Debug)]
struct MonthGrammar {
    /// `<month> [day][,] [year[/yy]]`
    month_first: Regex,
    /// `[day] <month> [year[/yy]]`
    day_first: Regex,
    /// `[year[/yy]] <month> [day]`
    year_first: Regex,
}

impl MonthGrammar {
    fn new(months: &str, dotted: bool, spaced: &str) -> Result<Self, regex::Error> {
        let dot = if dotted { r"\.?" } else { "" };
        Ok(Self {
            month_first: Regex::new(&format!(
                r"(?i)^{months}{dot}{spaced}((\d+)(/\d+)?)?\s*$"
            ))?,
            day_first: Regex::new(&format!(
                r"(?i)^(\d+)?\s+?{months}{dot}\s*((\d+)(/\d+)?)?\s*$"
            ))?,
            year_first: Regex::new(&format!(
                r"(?i)^((\d+)(/\d+)?)?\s*{months}{dot}\s*(\d+)?\s*$"
            ))?,
        })
    }

    fn build(table: &PrefixTable, dotted: bool, spaced: &str) -> Result<Option<Self>, regex::Error> {
        alternation(table.keys())
            .map(|months| Self::new(&months, dotted, spaced))
            .transpose()
    }
}

/// Converts free text into [`DateValue`]s for one language
#[derive(Debug)]
pub struct DateParser {
    tables: Arc<PrefixTables>,
    order: DateOrder,
    modifiers: HashMap<String, Modifier>,
    modifiers_after: HashMap<String, Modifier>,
    qualities: HashMap<String, Quality>,
    new_years: HashMap<String, NewYear>,
    today: Option<NaiveDate>,

    bce: Option<Regex>,
    calendar: Option<Regex>,
    calendar_new_year: Option<Regex>,
    calendar_new_year_iso: Option<Regex>,
    new_year: Option<Regex>,
    new_year_iso: Regex,
    quality: Option<Regex>,
    quality_suffix: Option<Regex>,
    span: Option<Regex>,
    range: Option<Regex>,
    quarter: Regex,
    modifier: Option<Regex>,
    modifier_after: Option<Regex>,
    about: Regex,

    gregorian: Option<MonthGrammar>,
    swedish: Option<MonthGrammar>,
    hebrew: Option<MonthGrammar>,
    french: Option<MonthGrammar>,
    persian: Option<MonthGrammar>,
    islamic: Option<MonthGrammar>,

    iso: Regex,
    timestamp: Regex,
    rfc: Regex,
    numeric: Regex,
    today_re: Regex,
}

impl DateParser {
    /// Compiles the grammar of `config`, building its prefix tables through `registry`.
    ///
    /// # Errors
    /// Returns `ConfigError::MonthTable` for incomplete word tables and
    /// `ConfigError::Pattern` when a token cannot be compiled into a pattern.
    pub fn new(config: &LocaleConfig, registry: &PrefixRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        let tables = registry.ensure_built(config);
        let tokens = &config.tokens;

        let cal = alternation(tables.calendars.keys());
        let ny = alternation(tokens.new_years.iter().map(|(k, _)| k.to_lowercase()));
        let qual = alternation(tokens.qualities.iter().map(|(k, _)| k));
        let modifier = alternation(tokens.modifiers.iter().map(|(k, _)| k));
        let modifier_after = alternation(tokens.modifiers_after.iter().map(|(k, _)| k));
        let bce = alternation(&tokens.bce);
        let span = alternation(&tokens.span_start).zip(alternation(&tokens.span_stop));
        let range = alternation(&tokens.range_start).zip(alternation(&tokens.range_mid));
        let today = alternation(tokens.today.iter().map(String::as_str).chain([TODAY_SIGIL]))
            .unwrap_or_default();

        let calendar_new_year = match (&cal, &ny) {
            (Some(cal), Some(ny)) => Some(Regex::new(&format!(
                r"(?i)^(.*)\s+\({cal},\s*{ny}\)( ?.*)"
            ))?),
            _ => None,
        };

        let parser = Self {
            order: config.order(),
            modifiers: tokens
                .modifiers
                .iter()
                .map(|(k, v)| (k.to_lowercase(), *v))
                .collect(),
            modifiers_after: tokens
                .modifiers_after
                .iter()
                .map(|(k, v)| (k.to_lowercase(), *v))
                .collect(),
            qualities: tokens
                .qualities
                .iter()
                .map(|(k, v)| (k.to_lowercase(), *v))
                .collect(),
            new_years: tokens
                .new_years
                .iter()
                .map(|(k, v)| (k.to_lowercase(), *v))
                .collect(),
            today: None,

            bce: compile(bce.as_ref(), |b| format!(r"^(.*)\s+{b}( ?.*)"))?,
            calendar: compile(cal.as_ref(), |c| format!(r"(?i)^(.*)\s+\({c}\)( ?.*)"))?,
            calendar_new_year,
            calendar_new_year_iso: compile(cal.as_ref(), |c| {
                format!(r"(?i)^(.*)\s+\({c},\s*(\d{{1,2}}-\d{{1,2}})\)( ?.*)")
            })?,
            new_year: compile(ny.as_ref(), |n| format!(r"(?i)^(.*)\s+\({n}\)( ?.*)"))?,
            new_year_iso: Regex::new(r"^(.*)\s+\((\d{1,2}-\d{1,2})\)( ?.*)")?,
            quality: compile(qual.as_ref(), |q| format!(r"(?i)^(.* ?){q}\s+(.+)"))?,
            quality_suffix: compile(qual.as_ref(), |q| format!(r"(?i)^(.+?)\s+{q}\s*$"))?,
            span: span
                .map(|(start, stop)| {
                    Regex::new(&format!(
                        r"(?i)^{start}\s+(?P<start>.+)\s+{stop}\s+(?P<stop>.+)"
                    ))
                })
                .transpose()?,
            range: range
                .map(|(start, mid)| {
                    Regex::new(&format!(
                        r"(?i)^{start}\s+(?P<start>.+)\s+{mid}\s+(?P<stop>.+)"
                    ))
                })
                .transpose()?,
            quarter: Regex::new(r"(?i)^[qQ](?P<quarter>[1-4])\s+(?P<year>.+)")?,
            modifier: compile(modifier.as_ref(), |m| format!(r"(?i)^{m}\s+(.*)"))?,
            modifier_after: compile(modifier_after.as_ref(), |m| format!(r"(?i)^(.*)\s+{m}"))?,
            about: Regex::new(r"^<(.*)>")?,

            gregorian: MonthGrammar::build(&tables.months, true, GREGORIAN_DAY)?,
            swedish: MonthGrammar::build(&tables.months, true, OTHER_DAY)?,
            hebrew: MonthGrammar::build(&tables.hebrew, false, OTHER_DAY)?,
            french: MonthGrammar::build(&tables.french, false, OTHER_DAY)?,
            persian: MonthGrammar::build(&tables.persian, false, OTHER_DAY)?,
            islamic: MonthGrammar::build(&tables.islamic, false, OTHER_DAY)?,

            iso: Regex::new(r"^(\d+)(/(\d+))?-(\d+)(-(\d+))?\s*$")?,
            timestamp: Regex::new(
                r"^\s*?(\d{4})([01]\d)([0123]\d)(?:(?:[012]\d[0-5]\d[0-5]\d)|(?:\s+[012]\d:[0-5]\d(?::[0-5]\d)?))?\s*?$",
            )?,
            rfc: Regex::new(&format!(
                r"^(({}),)?\s+(\d|\d\d)\s+({})\s+(\d+)\s+\d\d:\d\d(:\d\d)?\s+(\+|-)\d\d\d\d",
                RFC_DAYS.join("|"),
                RFC_MONTHS.join("|")
            ))?,
            numeric: Regex::new(r"^((\d+)[/\.]\s*)?((\d+)[/\.]\s*)?(\d+)\s*$")?,
            today_re: Regex::new(&format!(r"(?i)^\s*{today}\s*$"))?,
            tables,
        };
        Ok(parser)
    }

    /// Pins the date that "today" resolves to instead of reading the clock
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Parses `text` into a date value. Never fails: unreadable input comes
    /// back as a text-only value holding the trimmed input.
    pub fn parse(&self, text: &str) -> DateValue {
        let original = text.trim();
        self.parse_value(original)
            .unwrap_or_else(|| DateValue::text_only(original))
            .with_text(original)
    }

    fn parse_value(&self, original: &str) -> Option<DateValue> {
        let mut text = original.to_owned();
        let mut cal = Calendar::Gregorian;
        let mut new_year = NewYear::Jan1;
        let mut quality = Quality::None;

        if let Some((rest, c, ny)) = self.match_calendar_new_year(&text) {
            text = rest;
            cal = c;
            new_year = ny;
        } else {
            if let Some((rest, ny)) = self.match_new_year(&text) {
                text = rest;
                new_year = ny;
            }
            if let Some((rest, c)) = self.match_calendar(&text) {
                text = rest;
                cal = c;
            }
        }
        if let Some((rest, q)) = self.match_quality(&text) {
            text = rest;
            quality = q;
        }

        let compound = [(self.span.as_ref(), Modifier::Span), (self.range.as_ref(), Modifier::Range)];
        for (re, modifier) in compound {
            if let Some(caps) = re.and_then(|re| re.captures(&text)) {
                match self.compound_points(&caps, cal) {
                    Some((start, stop)) => {
                        return DateValue::new(quality, modifier, cal, start, Some(stop), new_year).ok();
                    }
                    None => debug!("Rejected {modifier} in {text:?}"),
                }
            }
        }
        if let Some((start, stop)) = self.match_quarter(&text, cal) {
            return DateValue::new(quality, Modifier::Range, cal, start, Some(stop), new_year).ok();
        }

        let (text, bce) = self.match_bce(&text);
        let adjust = |p: DatePoint| if bce { p.inverted() } else { p };

        if let Some((modifier, rest)) = self.match_modifier(&text) {
            let start = self.parse_point(rest, cal);
            if start.is_empty() {
                return None;
            }
            return DateValue::new(quality, modifier, cal, adjust(start), None, new_year).ok();
        }

        let start = self.parse_point(&text, cal);
        if start.is_empty() && !text.is_empty() {
            return None;
        }
        DateValue::new(quality, Modifier::None, cal, adjust(start), None, new_year).ok()
    }

    fn match_calendar_new_year(&self, text: &str) -> Option<(String, Calendar, NewYear)> {
        if let Some(caps) = self.calendar_new_year.as_ref().and_then(|re| re.captures(text)) {
            let cal = self.calendar_for(group(&caps, 2))?;
            let new_year = *self.new_years.get(&group(&caps, 3).to_lowercase())?;
            return Some((format!("{}{}", group(&caps, 1), group(&caps, 4)), cal, new_year));
        }
        let caps = self.calendar_new_year_iso.as_ref()?.captures(text)?;
        let cal = self.calendar_for(group(&caps, 2))?;
        let new_year = group(&caps, 3).parse().ok()?;
        Some((format!("{}{}", group(&caps, 1), group(&caps, 4)), cal, new_year))
    }

    fn match_new_year(&self, text: &str) -> Option<(String, NewYear)> {
        if let Some(caps) = self.new_year.as_ref().and_then(|re| re.captures(text)) {
            let new_year = *self.new_years.get(&group(&caps, 2).to_lowercase())?;
            return Some((format!("{}{}", group(&caps, 1), group(&caps, 3)), new_year));
        }
        let caps = self.new_year_iso.captures(text)?;
        let new_year = group(&caps, 2).parse().ok()?;
        Some((format!("{}{}", group(&caps, 1), group(&caps, 3)), new_year))
    }

    fn match_calendar(&self, text: &str) -> Option<(String, Calendar)> {
        let caps = self.calendar.as_ref()?.captures(text)?;
        let cal = self.calendar_for(group(&caps, 2))?;
        Some((format!("{}{}", group(&caps, 1), group(&caps, 3)), cal))
    }

    fn calendar_for(&self, name: &str) -> Option<Calendar> {
        Calendar::from_index(usize::from(self.tables.calendars.get(name)?))
    }

    /// Strips a quality token written before the date, or failing that after it
    fn match_quality(&self, text: &str) -> Option<(String, Quality)> {
        if let Some(caps) = self.quality.as_ref().and_then(|re| re.captures(text)) {
            let quality = *self.qualities.get(&group(&caps, 2).to_lowercase())?;
            return Some((format!("{}{}", group(&caps, 1), group(&caps, 3)), quality));
        }
        let caps = self.quality_suffix.as_ref()?.captures(text)?;
        let quality = *self.qualities.get(&group(&caps, 2).to_lowercase())?;
        Some((group(&caps, 1).to_owned(), quality))
    }

    /// Removes a BCE token, reporting whether one was found
    fn match_bce(&self, text: &str) -> (String, bool) {
        match self.bce.as_ref().and_then(|re| re.captures(text)) {
            Some(caps) => (format!("{}{}", group(&caps, 1), group(&caps, 3)), true),
            None => (text.to_owned(), false),
        }
    }

    /// A sub-date of a span, range or quarter, with its own BCE token.
    /// `None` when non-empty text does not parse.
    fn sub_date(&self, text: &str, cal: Calendar) -> Option<DatePoint> {
        let (text, bce) = self.match_bce(text);
        let point = self.parse_point(&text, cal);
        if point.is_empty() && !text.is_empty() {
            return None;
        }
        Some(if bce { point.inverted() } else { point })
    }

    fn compound_points(&self, caps: &Captures<'_>, cal: Calendar) -> Option<(DatePoint, DatePoint)> {
        let start = self.sub_date(caps.name("start")?.as_str(), cal)?;
        let stop = self.sub_date(caps.name("stop")?.as_str(), cal)?;
        Some((start, stop))
    }

    /// `Q<n> <year>` as the range from the first to the last day of the quarter
    fn match_quarter(&self, text: &str, cal: Calendar) -> Option<(DatePoint, DatePoint)> {
        let caps = self.quarter.captures(text)?;
        let quarter: u8 = caps.name("quarter")?.as_str().parse().ok()?;
        let year = self.sub_date(caps.name("year")?.as_str(), cal)?;
        if year.day() != 0 || year.month() != 0 {
            return None;
        }
        let stop_month = quarter * QUARTER_MONTHS;
        let stop_day = DAYS_IN_MONTH[usize::from(stop_month)];
        let start = DatePoint::new(1, stop_month - 2, year.year(), year.is_double_dated()).ok()?;
        let stop = DatePoint::new(stop_day, stop_month, year.year(), year.is_double_dated()).ok()?;
        Some((start, stop))
    }

    fn match_modifier<'t>(&self, text: &'t str) -> Option<(Modifier, &'t str)> {
        if let Some(caps) = self.modifier.as_ref().and_then(|re| re.captures(text)) {
            let modifier = self
                .modifiers
                .get(&group(&caps, 1).to_lowercase())
                .copied()
                .unwrap_or_default();
            return Some((modifier, group(&caps, 2)));
        }
        if let Some(caps) = self.modifier_after.as_ref().and_then(|re| re.captures(text)) {
            let modifier = self
                .modifiers_after
                .get(&group(&caps, 2).to_lowercase())
                .copied()
                .unwrap_or_default();
            return Some((modifier, group(&caps, 1)));
        }
        let caps = self.about.captures(text)?;
        Some((Modifier::About, group(&caps, 1)))
    }

    /// Parses the date part of a value in the given calendar.
    ///
    /// Tries the calendar's month-name grammars, then ISO, timestamp, RFC 2822,
    /// numeric and "today" forms. Returns [`DatePoint::EMPTY`] if nothing fits.
    pub fn parse_point(&self, text: &str, cal: Calendar) -> DatePoint {
        let point = self
            .month_names(text, cal)
            .or_else(|| self.iso_point(text, cal))
            .or_else(|| self.timestamp_point(text, cal))
            .or_else(|| self.rfc_point(text, cal))
            .or_else(|| self.numeric_point(text, cal))
            .or_else(|| self.today_point(text, cal));
        point.flatten().unwrap_or(DatePoint::EMPTY)
    }

    fn grammar(&self, cal: Calendar) -> Option<(&MonthGrammar, &PrefixTable)> {
        let tables = &self.tables;
        let (grammar, table) = match cal {
            Calendar::Gregorian | Calendar::Julian => (&self.gregorian, &tables.months),
            Calendar::Swedish => (&self.swedish, &tables.months),
            Calendar::Hebrew => (&self.hebrew, &tables.hebrew),
            Calendar::FrenchRepublican => (&self.french, &tables.french),
            Calendar::Persian => (&self.persian, &tables.persian),
            Calendar::Islamic => (&self.islamic, &tables.islamic),
        };
        grammar.as_ref().map(|g| (g, table))
    }

    // Each matcher below returns `None` when its pattern does not match, so the
    // next one is tried, and `Some(None)` when it matched but the date is not
    // valid, which ends the search.

    fn month_names(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        let (grammar, table) = self.grammar(cal)?;
        let lower = text.to_lowercase();

        if let Some(caps) = grammar.month_first.captures(&lower) {
            return Some(month_first_date(&caps, table, cal));
        }
        if self.order == DateOrder::Ymd {
            let caps = grammar.year_first.captures(&lower)?;
            let fields = (caps.get(5), caps.get(4), caps.get(2), caps.get(3));
            Some(month_name_date(fields, table, cal))
        } else {
            let caps = grammar.day_first.captures(&lower)?;
            let fields = (caps.get(1), caps.get(2), caps.get(4), caps.get(5));
            Some(month_name_date(fields, table, cal))
        }
    }

    fn iso_point(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        let caps = self.iso.captures(text)?;
        Some(iso_date(&caps, cal))
    }

    fn timestamp_point(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        let caps = self.timestamp.captures(text)?;
        let date = point(number(caps.get(3))?, number(caps.get(2))?, number(caps.get(1))?, false);
        Some(date.and_then(|p| checked(cal, p)))
    }

    fn rfc_point(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        let caps = self.rfc.captures(text)?;
        let month = RFC_MONTHS.iter().position(|m| *m == group(&caps, 4))? + 1;
        let date = point(
            number(caps.get(3))?,
            i64::try_from(month).ok()?,
            number(caps.get(5))?,
            false,
        );
        Some(date.and_then(|p| checked(cal, p)))
    }

    fn numeric_point(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        let caps = self.numeric.captures(text)?;
        Some(numeric_date(&caps, self.order, cal))
    }

    fn today_point(&self, text: &str, cal: Calendar) -> Option<Option<DatePoint>> {
        self.today_re.find(text)?;
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let (year, month, day) = calendar::from_naive_date(cal, today);
        Some(DatePoint::new(day, month, year, false).ok())
    }
}

/// `<month> [day][,] [year[/yy]]`; a lone number after the month is the year
fn month_first_date(caps: &Captures<'_>, table: &PrefixTable, cal: Calendar) -> Option<DatePoint> {
    let month = i64::from(table.get(group(caps, 1))?);
    let (day, year, slash) = if caps.get(3).is_none() {
        (0, number(caps.get(2))?, false)
    } else {
        let slash = caps.get(5).is_some();
        let year = number(caps.get(4))?;
        (number(caps.get(2))?, if slash { year + 1 } else { year }, slash)
    };
    let date = point(day, month, year, slash)?;
    if slash && checked(Calendar::Julian, date).is_some() {
        return Some(date);
    }
    checked(cal, date)
}

type MonthNameFields<'t> = (
    Option<Match<'t>>,
    Option<Match<'t>>,
    Option<Match<'t>>,
    Option<Match<'t>>,
);

/// Day, month name, year and slash groups of the day-first or year-first grammar
fn month_name_date(
    (day, month, year, slash): MonthNameFields<'_>,
    table: &PrefixTable,
    cal: Calendar,
) -> Option<DatePoint> {
    let month = i64::from(table.get(month?.as_str())?);
    let year = number(year)?;
    let double_dated = slash.is_some();
    let year = if double_dated { year + 1 } else { year };
    checked(cal, point(number(day)?, month, year, double_dated)?)
}

fn iso_date(caps: &Captures<'_>, cal: Calendar) -> Option<DatePoint> {
    let year = number(caps.get(1))?;
    let month = number(caps.get(4))?;
    let day = number(caps.get(6))?;
    if caps.get(3).is_some() {
        let slashed = point(day, month, year + 1, true)?;
        if checked(Calendar::Julian, slashed).is_some() {
            return Some(slashed);
        }
    }
    checked(cal, point(day, month, year, false)?)
}

/// `[a/][b/]c` read in the language's numeric order
fn numeric_date(caps: &Captures<'_>, order: DateOrder, cal: Calendar) -> Option<DatePoint> {
    let (a, b) = (caps.get(2), caps.get(4));
    let c = number(caps.get(5))?;
    let (day, month, year) = match order {
        DateOrder::Ymd => {
            let (year, month, day) = match (a, b) {
                (None, _) => (c, 0, 0),
                (Some(_), None) => (number(a)?, c, 0),
                (Some(_), Some(_)) => (number(a)?, number(b)?, c),
            };
            if month > 12 && month == slash_rollover(year) {
                return point(0, 0, year + 1, true);
            }
            (day, month, year)
        }
        DateOrder::Dmy | DateOrder::Mdy => {
            let (month, day) = match (order, b) {
                (DateOrder::Dmy, None) => (number(a)?, 0),
                (DateOrder::Dmy, Some(_)) => (number(b)?, number(a)?),
                _ => (number(a)?, number(b)?),
            };
            if month > 12 && c == slash_rollover(month) {
                return point(0, 0, month + 1, true);
            }
            (day, month, c)
        }
    };
    checked(cal, point(day, month, year, false)?)
}
