use crate::consts::{MAX_DAY, MAX_MONTH};
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The calendar a date is expressed in.
///
/// Gregorian is the ambient default and is never written into display output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
    Hebrew,
    #[display(fmt = "French Republican")]
    FrenchRepublican,
    Persian,
    Islamic,
    Swedish,
}

impl Calendar {
    /// All calendars, in code order
    pub const ALL: [Self; 7] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::FrenchRepublican,
        Self::Persian,
        Self::Islamic,
        Self::Swedish,
    ];

    /// Returns the integer code of the calendar (Gregorian is 0)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a calendar up by its integer code
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of months in a (leap) year of this calendar
    pub const fn months(self) -> u8 {
        match self {
            Self::Hebrew | Self::FrenchRepublican => 13,
            _ => 12,
        }
    }

    /// Whether the civil new year is fixed, i.e. may not be annotated with another convention
    pub const fn has_fixed_new_year(self) -> bool {
        !matches!(self, Self::Gregorian | Self::Julian | Self::Swedish)
    }
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|cal| cal.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DateError::UnknownCalendar(s.to_owned()))
    }
}

/// How the date points of a value are to be read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum Modifier {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "before")]
    Before,
    #[display(fmt = "after")]
    After,
    #[display(fmt = "about")]
    About,
    #[display(fmt = "range")]
    Range,
    #[display(fmt = "span")]
    Span,
    #[display(fmt = "textonly")]
    TextOnly,
    #[display(fmt = "from")]
    From,
    #[display(fmt = "to")]
    To,
}

impl Modifier {
    /// All modifiers, in code order
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Before,
        Self::After,
        Self::About,
        Self::Range,
        Self::Span,
        Self::TextOnly,
        Self::From,
        Self::To,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Range and span carry a second date point
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Range | Self::Span)
    }
}

impl FromStr for Modifier {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DateError::UnknownModifier(s.to_owned()))
    }
}

/// How trustworthy the date is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum Quality {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "estimated")]
    Estimated,
    #[display(fmt = "calculated")]
    Calculated,
}

impl Quality {
    pub const ALL: [Self; 3] = [Self::None, Self::Estimated, Self::Calculated];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Quality {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DateError::UnknownQuality(s.to_owned()))
    }
}

/// The day the civil year starts on.
///
/// Displays as the annotation written after a date; `Jan1` is the default and displays as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum NewYear {
    #[default]
    #[display(fmt = "")]
    Jan1,
    Mar1,
    Mar25,
    Sep1,
    /// An explicit month and day
    #[display(fmt = "{month}-{day}")]
    Custom { month: u8, day: u8 },
}

impl NewYear {
    /// The (month, day) the year starts on
    pub const fn month_day(self) -> (u8, u8) {
        match self {
            Self::Jan1 => (1, 1),
            Self::Mar1 => (3, 1),
            Self::Mar25 => (3, 25),
            Self::Sep1 => (9, 1),
            Self::Custom { month, day } => (month, day),
        }
    }
}

impl FromStr for NewYear {
    type Err = DateError;

    /// Accepts `""`, `Jan1`, `Mar1`, `Mar25`, `Sep1` or `M-D`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "" | "jan1" => Ok(Self::Jan1),
            "mar1" => Ok(Self::Mar1),
            "mar25" => Ok(Self::Mar25),
            "sep1" => Ok(Self::Sep1),
            _ => {
                let (month, day) = wanted
                    .split_once('-')
                    .ok_or_else(|| DateError::UnknownNewYear(s.to_owned()))?;
                let month = month
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| DateError::UnknownNewYear(s.to_owned()))?;
                let day = day
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| DateError::UnknownNewYear(s.to_owned()))?;
                Ok(Self::Custom { month, day })
            }
        }
    }
}

/// One point in time: day, month, year and whether the year was written double dated.
///
/// A zero day or month means "not given". A negative year is BCE.
/// Serialized as the `[day, month, year, double_dated]` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8, i32, bool)", into = "(u8, u8, i32, bool)")]
pub struct DatePoint {
    day: u8,
    month: u8,
    year: i32,
    double_dated: bool,
}

impl DatePoint {
    /// The "no date" sentinel
    pub const EMPTY: Self = Self {
        day: 0,
        month: 0,
        year: 0,
        double_dated: false,
    };

    /// Creates a new date point, checking the day and month are in range
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` or `DateError::InvalidMonth` if a component is out of range.
    pub fn new(day: u8, month: u8, year: i32, double_dated: bool) -> Result<Self, DateError> {
        if day > MAX_DAY {
            return Err(DateError::InvalidDay(day));
        }
        if month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self {
            day,
            month,
            year,
            double_dated,
        })
    }

    /// Creates a single-dated point from year, month and day
    ///
    /// # Errors
    /// See [`DatePoint::new`].
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(day, month, year, false)
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// True when the year was written old-style/new-style, e.g. "1722/3"
    #[inline]
    pub const fn is_double_dated(self) -> bool {
        self.double_dated
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Flips the era of the year (CE <-> BCE)
    pub const fn inverted(self) -> Self {
        Self {
            year: -self.year,
            ..self
        }
    }

    /// Year, month and day with unknown parts raised to 1, as used for day-number arithmetic
    pub(crate) const fn zero_adjusted(self) -> (i32, u8, u8) {
        let year = if self.year == 0 { 1 } else { self.year };
        let month = if self.month == 0 { 1 } else { self.month };
        let day = if self.day == 0 { 1 } else { self.day };
        (year, month, day)
    }
}

impl TryFrom<(u8, u8, i32, bool)> for DatePoint {
    type Error = DateError;

    fn try_from((day, month, year, double_dated): (u8, u8, i32, bool)) -> Result<Self, Self::Error> {
        Self::new(day, month, year, double_dated)
    }
}

impl From<DatePoint> for (u8, u8, i32, bool) {
    fn from(point: DatePoint) -> Self {
        (point.day, point.month, point.year, point.double_dated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_codes() {
        assert_eq!(Calendar::Gregorian.index(), 0);
        assert_eq!(Calendar::Swedish.index(), 6);
        for cal in Calendar::ALL {
            assert_eq!(Calendar::from_index(cal.index()), Some(cal));
        }
        assert_eq!(Calendar::from_index(7), None);
    }

    #[test]
    fn test_calendar_from_str() {
        assert_eq!("julian".parse::<Calendar>().unwrap(), Calendar::Julian);
        assert_eq!(
            "French Republican".parse::<Calendar>().unwrap(),
            Calendar::FrenchRepublican
        );
        assert!(matches!(
            "Mayan".parse::<Calendar>(),
            Err(DateError::UnknownCalendar(_))
        ));
    }

    #[test]
    fn test_fixed_new_year() {
        assert!(!Calendar::Gregorian.has_fixed_new_year());
        assert!(!Calendar::Julian.has_fixed_new_year());
        assert!(!Calendar::Swedish.has_fixed_new_year());
        assert!(Calendar::Hebrew.has_fixed_new_year());
        assert!(Calendar::Islamic.has_fixed_new_year());
    }

    #[test]
    fn test_modifier_and_quality_names() {
        assert_eq!(Modifier::Before.to_string(), "before");
        assert_eq!("ABOUT".parse::<Modifier>().unwrap(), Modifier::About);
        assert!("sometime".parse::<Modifier>().is_err());
        assert!(Modifier::Span.is_compound());
        assert!(!Modifier::From.is_compound());

        assert_eq!("Calculated".parse::<Quality>().unwrap(), Quality::Calculated);
        assert!("guessed".parse::<Quality>().is_err());
    }

    #[test]
    fn test_new_year_text() {
        assert_eq!(NewYear::Jan1.to_string(), "");
        assert_eq!(NewYear::Mar25.to_string(), "Mar25");
        assert_eq!(NewYear::Custom { month: 5, day: 5 }.to_string(), "5-5");

        assert_eq!("".parse::<NewYear>().unwrap(), NewYear::Jan1);
        assert_eq!("mar25".parse::<NewYear>().unwrap(), NewYear::Mar25);
        assert_eq!(
            "9-1".parse::<NewYear>().unwrap(),
            NewYear::Custom { month: 9, day: 1 }
        );
        assert!("spring".parse::<NewYear>().is_err());
        assert_eq!(NewYear::Sep1.month_day(), (9, 1));
    }

    #[test]
    fn test_date_point_bounds() {
        assert!(DatePoint::new(31, 12, 1850, false).is_ok());
        assert!(DatePoint::new(30, 13, 5, false).is_ok());
        assert!(matches!(
            DatePoint::new(32, 1, 1850, false),
            Err(DateError::InvalidDay(32))
        ));
        assert!(matches!(
            DatePoint::new(1, 14, 1850, false),
            Err(DateError::InvalidMonth(14))
        ));
    }

    #[test]
    fn test_date_point_inversion_is_involutive() {
        for year in [-4000, -1, 0, 1, 1722, 2024] {
            let point = DatePoint::new(5, 3, year, year % 2 == 0).unwrap();
            assert_eq!(point.inverted().inverted(), point);
            assert_eq!(point.inverted().year(), -year);
        }
    }

    #[test]
    fn test_date_point_empty() {
        assert!(DatePoint::EMPTY.is_empty());
        assert!(DatePoint::default().is_empty());
        assert!(!DatePoint::from_ymd(1850, 0, 0).unwrap().is_empty());
        assert_eq!(DatePoint::EMPTY.zero_adjusted(), (1, 1, 1));
    }

    #[test]
    fn test_date_point_serde() {
        let point = DatePoint::new(5, 3, 1723, true).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[5,3,1723,true]");
        let parsed: DatePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);

        let result: Result<DatePoint, _> = serde_json::from_str("[40,3,1723,false]");
        assert!(result.is_err());
    }
}
