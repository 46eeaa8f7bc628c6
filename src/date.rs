use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::types::{Calendar, DatePoint, Modifier, NewYear, Quality};

/// Error type for assembling a [`DateValue`] or one of its parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid day: {0} (must be 0-31)")]
    InvalidDay(u8),

    #[error("Invalid month: {0} (must be 0-13)")]
    InvalidMonth(u8),

    /// Range and span need both date points.
    #[error("Modifier '{0}' needs a stop date")]
    MissingStop(Modifier),

    /// Only range and span carry a second date point.
    #[error("Modifier '{0}' does not take a stop date")]
    UnexpectedStop(Modifier),

    #[error("New year '{new_year}' may not be set for the {calendar} calendar")]
    FixedNewYear { calendar: Calendar, new_year: NewYear },

    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("Unknown quality: {0}")]
    UnknownQuality(String),

    #[error("Unknown new year: {0}")]
    UnknownNewYear(String),
}

/// A parsed or assembled date: one or two points in some calendar, with the
/// modifier and quality that qualify them, and the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDateValue")]
pub struct DateValue {
    modifier: Modifier,
    quality: Quality,
    calendar: Calendar,
    start: DatePoint,
    stop: Option<DatePoint>,
    new_year: NewYear,
    text: Option<String>,
}

impl DateValue {
    /// Creates a structured date value.
    ///
    /// A double-dated start point is always recorded in the Julian calendar.
    ///
    /// # Errors
    /// Returns `DateError::MissingStop`/`DateError::UnexpectedStop` when `stop`
    /// does not agree with the modifier, and `DateError::FixedNewYear` when a new
    /// year other than January 1 is requested for a calendar with a fixed new year.
    pub fn new(
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        start: DatePoint,
        stop: Option<DatePoint>,
        new_year: NewYear,
    ) -> Result<Self, DateError> {
        match (modifier.is_compound(), stop.is_some()) {
            (true, false) => return Err(DateError::MissingStop(modifier)),
            (false, true) => return Err(DateError::UnexpectedStop(modifier)),
            _ => {}
        }
        if new_year != NewYear::Jan1 && calendar.has_fixed_new_year() {
            return Err(DateError::FixedNewYear { calendar, new_year });
        }
        let calendar = if start.is_double_dated() {
            Calendar::Julian
        } else {
            calendar
        };
        Ok(Self {
            modifier,
            quality,
            calendar,
            start,
            stop,
            new_year,
            text: None,
        })
    }

    /// A plain Gregorian date
    pub const fn from_point(start: DatePoint) -> Self {
        Self {
            modifier: Modifier::None,
            quality: Quality::None,
            calendar: Calendar::Gregorian,
            start,
            stop: None,
            new_year: NewYear::Jan1,
            text: None,
        }
    }

    /// A date known only as free text
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            modifier: Modifier::TextOnly,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Attaches the verbatim text the value was read from
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub const fn quality(&self) -> Quality {
        self.quality
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn start(&self) -> DatePoint {
        self.start
    }

    /// The second point of a range or span
    pub const fn stop(&self) -> Option<DatePoint> {
        self.stop
    }

    pub const fn new_year(&self) -> NewYear {
        self.new_year
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true if the value holds neither a date nor text
    pub fn is_empty(&self) -> bool {
        let has_text = self.modifier == Modifier::TextOnly && self.text.as_deref().is_some_and(|t| !t.is_empty());
        !(has_text || !self.start.is_empty() || self.stop.is_some_and(|p| !p.is_empty()))
    }

    /// Returns true for ranges and spans
    pub const fn is_compound(&self) -> bool {
        self.modifier.is_compound()
    }

    /// A single exact date with day, month and year, no modifier and no quality
    pub fn is_regular(&self) -> bool {
        self.modifier == Modifier::None && self.quality == Quality::None && self.is_full()
    }

    /// Day, month and year of the start point are all known
    pub const fn is_full(&self) -> bool {
        self.start.year() != 0 && self.start.month() != 0 && self.start.day() != 0
    }

    /// Julian day number of the start point, for ordering dates across calendars.
    ///
    /// Unknown day and month count as 1; text-only and empty values sort as 0.
    pub fn sort_value(&self) -> i64 {
        if self.modifier == Modifier::TextOnly || self.start.is_empty() {
            return 0;
        }
        let (year, month, day) = self.start.zero_adjusted();
        calendar::to_day_number(self.calendar, year, month, day)
    }
}

/// Renders a year, written as "1722/3" when double dated.
///
/// The other-style part keeps as many trailing digits as needed to show the rollover.
pub(crate) fn slash_year(year: i32, double_dated: bool) -> String {
    let year = year.abs();
    if !double_dated {
        return year.to_string();
    }
    let previous = year - 1;
    let other = if previous % 100 == 99 {
        year % 1000
    } else if previous % 10 == 9 {
        year % 100
    } else {
        year % 10
    };
    format!("{previous}/{other}")
}

fn write_point(f: &mut fmt::Formatter<'_>, point: DatePoint) -> fmt::Result {
    let sign = if point.year() < 0 { "-" } else { "" };
    write!(
        f,
        "{sign}{:0>4}-{:02}-{:02}",
        slash_year(point.year(), point.is_double_dated()),
        point.month(),
        point.day()
    )
}

/// Locale-independent form, e.g. `est bef 1850-03-05 (Julian, Mar25)`
impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::TextOnly {
            return f.write_str(self.text.as_deref().unwrap_or_default());
        }
        match self.quality {
            Quality::Estimated => f.write_str("est ")?,
            Quality::Calculated => f.write_str("calc ")?,
            Quality::None => {}
        }
        match self.modifier {
            Modifier::Before => f.write_str("bef ")?,
            Modifier::After => f.write_str("aft ")?,
            Modifier::About => f.write_str("abt ")?,
            Modifier::From => f.write_str("from ")?,
            Modifier::To => f.write_str("to ")?,
            _ => {}
        }
        write_point(f, self.start)?;
        if let Some(stop) = self.stop {
            f.write_str(" - ")?;
            write_point(f, stop)?;
        }
        let new_year = self.new_year.to_string();
        match (self.calendar, new_year.is_empty()) {
            (Calendar::Gregorian, true) => Ok(()),
            (Calendar::Gregorian, false) => write!(f, " ({new_year})"),
            (calendar, true) => write!(f, " ({calendar})"),
            (calendar, false) => write!(f, " ({calendar}, {new_year})"),
        }
    }
}

#[derive(Deserialize)]
struct RawDateValue {
    #[serde(default)]
    modifier: Modifier,
    #[serde(default)]
    quality: Quality,
    #[serde(default)]
    calendar: Calendar,
    #[serde(default)]
    start: DatePoint,
    #[serde(default)]
    stop: Option<DatePoint>,
    #[serde(default)]
    new_year: NewYear,
    #[serde(default)]
    text: Option<String>,
}

impl TryFrom<RawDateValue> for DateValue {
    type Error = DateError;

    fn try_from(raw: RawDateValue) -> Result<Self, Self::Error> {
        let value = if raw.modifier == Modifier::TextOnly {
            Self::text_only(raw.text.unwrap_or_default())
        } else {
            Self::new(raw.quality, raw.modifier, raw.calendar, raw.start, raw.stop, raw.new_year)?
                .with_text(raw.text.unwrap_or_default())
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u8, month: u8, year: i32) -> DatePoint {
        DatePoint::new(day, month, year, false).unwrap()
    }

    #[test]
    fn test_new_checks_stop_against_modifier() {
        struct TestCase {
            modifier:    Modifier,
            stop:        Option<DatePoint>,
            should_pass: bool,
        }

        let cases = [
            TestCase { modifier: Modifier::None, stop: None, should_pass: true },
            TestCase { modifier: Modifier::Before, stop: Some(point(1, 1, 1900)), should_pass: false },
            TestCase { modifier: Modifier::Range, stop: Some(point(1, 1, 1900)), should_pass: true },
            TestCase { modifier: Modifier::Span, stop: None, should_pass: false },
        ];

        for case in &cases {
            let result = DateValue::new(
                Quality::None,
                case.modifier,
                Calendar::Gregorian,
                point(1, 1, 1800),
                case.stop,
                NewYear::Jan1,
            );
            assert_eq!(result.is_ok(), case.should_pass, "modifier {:?}", case.modifier);
        }
    }

    #[test]
    fn test_fixed_new_year_rejected() {
        let result = DateValue::new(
            Quality::None,
            Modifier::None,
            Calendar::Hebrew,
            point(1, 1, 5600),
            None,
            NewYear::Mar25,
        );
        assert!(matches!(result, Err(DateError::FixedNewYear { .. })));

        let julian = DateValue::new(
            Quality::None,
            Modifier::None,
            Calendar::Julian,
            point(1, 1, 1700),
            None,
            NewYear::Mar25,
        );
        assert!(julian.is_ok());
    }

    #[test]
    fn test_double_dated_is_julian() {
        let start = DatePoint::new(5, 3, 1723, true).unwrap();
        let value = DateValue::new(Quality::None, Modifier::None, Calendar::Gregorian, start, None, NewYear::Jan1)
            .unwrap();
        assert_eq!(value.calendar(), Calendar::Julian);
    }

    #[test]
    fn test_slash_year() {
        assert_eq!(slash_year(1723, true), "1722/3");
        assert_eq!(slash_year(1790, true), "1789/90");
        assert_eq!(slash_year(1700, true), "1699/700");
        assert_eq!(slash_year(1723, false), "1723");
        assert_eq!(slash_year(-44, false), "44");
    }

    #[test]
    fn test_predicates() {
        assert!(DateValue::default().is_empty());
        assert!(!DateValue::text_only("sometime").is_empty());
        assert!(DateValue::text_only("").is_empty());

        let full = DateValue::from_point(point(5, 3, 1850));
        assert!(full.is_regular());
        assert!(full.is_full());
        assert!(!full.is_compound());

        let year_only = DateValue::from_point(point(0, 0, 1850));
        assert!(!year_only.is_full());
        assert!(!year_only.is_regular());
    }

    #[test]
    fn test_sort_value_orders_across_calendars() {
        let gregorian = DateValue::from_point(point(1, 1, 2000));
        assert_eq!(gregorian.sort_value(), 2_451_545);

        // 1582-10-15 Gregorian is the day after 1582-10-04 Julian
        let julian = DateValue::new(
            Quality::None,
            Modifier::None,
            Calendar::Julian,
            point(4, 10, 1582),
            None,
            NewYear::Jan1,
        )
        .unwrap();
        let reform = DateValue::from_point(point(15, 10, 1582));
        assert_eq!(reform.sort_value() - julian.sort_value(), 1);

        assert_eq!(DateValue::text_only("unknown").sort_value(), 0);
        assert_eq!(DateValue::default().sort_value(), 0);
    }

    #[test]
    fn test_display_canonical_form() {
        let value = DateValue::new(
            Quality::Estimated,
            Modifier::Before,
            Calendar::Julian,
            point(5, 3, 1850),
            None,
            NewYear::Mar25,
        )
        .unwrap();
        assert_eq!(value.to_string(), "est bef 1850-03-05 (Julian, Mar25)");

        let range = DateValue::new(
            Quality::None,
            Modifier::Range,
            Calendar::Gregorian,
            point(0, 0, 1800),
            Some(point(0, 0, 1900)),
            NewYear::Jan1,
        )
        .unwrap();
        assert_eq!(range.to_string(), "1800-00-00 - 1900-00-00");

        assert_eq!(DateValue::text_only("Easter").to_string(), "Easter");
    }

    #[test]
    fn test_serde_validation() {
        let value = DateValue::from_point(point(5, 3, 1850)).with_text("5 March 1850");
        let json = serde_json::to_string(&value).unwrap();
        let parsed: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let json = r#"{"modifier":"Span","start":[1,1,1800,false]}"#;
        let result: Result<DateValue, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
