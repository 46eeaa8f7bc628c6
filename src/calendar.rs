//! Calendar arithmetic: day validity and conversion to and from Julian day numbers.
//!
//! All conversions work on whole Julian day numbers (the day count starting at
//! noon, 1 January 4713 BCE Julian). Month numbering follows the crate's
//! conventions: Hebrew months run Tishri (1) to Elul (13) with Adar I and Adar II
//! as 6 and 7, and the French Republican complementary days are month 13.
#![allow(clippy::cast_possible_truncation)]

use chrono::{Datelike, NaiveDate};

use crate::consts::*;
use crate::types::Calendar;

/// Checks the day fits in the month for the given calendar.
///
/// Month 0 ("month unknown") admits any day up to 31. A complete Hebrew, French
/// Republican, Persian or Islamic date must also survive a trip through its day
/// number, which rejects days past the real end of the month.
pub fn is_valid(calendar: Calendar, day: u8, month: u8, year: i32) -> bool {
    match calendar {
        Calendar::Gregorian => gregorian_valid(day, month, year),
        Calendar::Julian => julian_valid(day, month, year),
        Calendar::Swedish => swedish_valid(day, month, year),
        Calendar::FrenchRepublican => {
            let limit = if month == MAX_MONTH { FRENCH_EXTRA_DAYS } else { 30 };
            year >= 1 && month <= MAX_MONTH && day <= limit && round_trips(calendar, day, month, year)
        }
        Calendar::Persian => {
            let limit = if (1..=6).contains(&month) { 31 } else { 30 };
            month <= 12 && day <= limit && round_trips(calendar, day, month, year)
        }
        Calendar::Islamic => month <= 12 && day <= 30 && round_trips(calendar, day, month, year),
        Calendar::Hebrew => month <= MAX_MONTH && day <= 30 && round_trips(calendar, day, month, year),
    }
}

/// Partial dates and years before the epoch are only bounds checked
fn round_trips(calendar: Calendar, day: u8, month: u8, year: i32) -> bool {
    day == 0
        || month == 0
        || year < 1
        || from_day_number(calendar, to_day_number(calendar, year, month, day)) == (year, month, day)
}

/// Proleptic Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
        && (year.rem_euclid(CENTURY_CYCLE) != 0 || year.rem_euclid(GREGORIAN_CYCLE) == 0)
}

fn month_limit(month: u8, leap: bool) -> Option<u8> {
    if month > DECEMBER {
        return None;
    }
    if leap && month == FEBRUARY {
        return Some(FEBRUARY_DAYS_LEAP);
    }
    DAYS_IN_MONTH.get(usize::from(month)).copied()
}

fn gregorian_valid(day: u8, month: u8, year: i32) -> bool {
    month_limit(month, is_leap_year(year)).is_some_and(|limit| day <= limit)
}

fn julian_valid(day: u8, month: u8, year: i32) -> bool {
    month_limit(month, year.rem_euclid(LEAP_YEAR_CYCLE) == 0).is_some_and(|limit| day <= limit)
}

/// Sweden ran its own calendar from March 1700 (skipping the Julian leap day)
/// until it added 30 February 1712 to return to the Julian calendar.
fn swedish_valid(day: u8, month: u8, year: i32) -> bool {
    let ymd = (year, month, day);
    if ymd < SWEDISH_FIRST || ymd >= SWEDISH_END {
        return false;
    }
    if ymd == SWEDISH_EXTRA_DAY {
        return true;
    }
    ymd != SWEDISH_FIRST && julian_valid(day, month, year)
}

/// Converts a date to its Julian day number.
///
/// Out-of-range days are counted past the end of the month rather than rejected.
pub fn to_day_number(calendar: Calendar, year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    match calendar {
        Calendar::Gregorian => gregorian_to_jdn(y, m, d),
        Calendar::Julian => julian_to_jdn(y, m, d),
        Calendar::Swedish => swedish_to_jdn(year, month, day),
        Calendar::FrenchRepublican => french_to_jdn(y, m, d),
        Calendar::Persian => persian_to_jdn(y, m, d),
        Calendar::Islamic => islamic_to_jdn(y, m, d),
        Calendar::Hebrew => hebrew_to_jdn(y, m, d),
    }
}

/// Converts a Julian day number to `(year, month, day)` in the given calendar
pub fn from_day_number(calendar: Calendar, jdn: i64) -> (i32, u8, u8) {
    let (y, m, d) = match calendar {
        Calendar::Gregorian => gregorian_from_jdn(jdn),
        Calendar::Julian => julian_from_jdn(jdn),
        Calendar::Swedish => swedish_from_jdn(jdn),
        Calendar::FrenchRepublican => french_from_jdn(jdn),
        Calendar::Persian => persian_from_jdn(jdn),
        Calendar::Islamic => islamic_from_jdn(jdn),
        Calendar::Hebrew => hebrew_from_jdn(jdn),
    };
    (y as i32, m as u8, d as u8)
}

/// Day of the week for a Julian day number, Sunday being 0
pub const fn weekday(jdn: i64) -> usize {
    (jdn + 1).rem_euclid(7) as usize
}

/// Expresses a civil (Gregorian) date in another calendar
pub fn from_naive_date(calendar: Calendar, date: NaiveDate) -> (i32, u8, u8) {
    from_day_number(calendar, i64::from(date.num_days_from_ce()) + RD_TO_JDN)
}

fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

fn julian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

fn civil_from_days(c: i64, centuries: i64) -> (i64, i64, i64) {
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * centuries + d - 4800 + m.div_euclid(10);
    (year, month, day)
}

fn gregorian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    civil_from_days(c, b)
}

fn julian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    civil_from_days(jdn + 32082, 0)
}

fn swedish_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let ymd = (year, month, day);
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    if ymd == SWEDISH_EXTRA_DAY {
        julian_to_jdn(y, 2, 29)
    } else if ymd > SWEDISH_FIRST && ymd < SWEDISH_END {
        julian_to_jdn(y, m, d) - 1
    } else if ymd >= SWEDISH_GREGORIAN_START {
        gregorian_to_jdn(y, m, d)
    } else {
        julian_to_jdn(y, m, d)
    }
}

fn swedish_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let (gy, gm, gd) = SWEDISH_GREGORIAN_START;
    let first = julian_to_jdn(1700, 3, 1) - 1;
    let extra = julian_to_jdn(1712, 2, 29);
    if jdn >= gregorian_to_jdn(i64::from(gy), i64::from(gm), i64::from(gd)) {
        gregorian_from_jdn(jdn)
    } else if jdn == extra {
        let (y, m, d) = SWEDISH_EXTRA_DAY;
        (i64::from(y), i64::from(m), i64::from(d))
    } else if (first..extra).contains(&jdn) {
        julian_from_jdn(jdn + 1)
    } else {
        julian_from_jdn(jdn)
    }
}

fn french_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    (year * FRENCH_DAYS_PER_4_YEARS).div_euclid(4)
        + (month - 1) * FRENCH_DAYS_PER_MONTH
        + day
        + FRENCH_EPOCH_OFFSET
}

fn french_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let temp = (jdn - FRENCH_EPOCH_OFFSET) * 4 - 1;
    let year = temp.div_euclid(FRENCH_DAYS_PER_4_YEARS);
    let day_of_year = temp.rem_euclid(FRENCH_DAYS_PER_4_YEARS).div_euclid(4);
    (
        year,
        day_of_year.div_euclid(FRENCH_DAYS_PER_MONTH) + 1,
        day_of_year.rem_euclid(FRENCH_DAYS_PER_MONTH) + 1,
    )
}

// Persian arithmetic calendar, 2820-year grand cycles
fn persian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let base = year - if year >= 0 { 474 } else { 473 };
    let cycle_year = 474 + base.rem_euclid(2820);
    let month_days = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };
    day + month_days
        + (cycle_year * 682 - 110).div_euclid(2816)
        + (cycle_year - 1) * 365
        + base.div_euclid(2820) * 1_029_983
        + PERSIAN_EPOCH
        - 1
}

fn persian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let since = jdn - persian_to_jdn(475, 1, 1);
    let cycle = since.div_euclid(1_029_983);
    let cycle_day = since.rem_euclid(1_029_983);
    let year_in_cycle = if cycle_day == 1_029_982 {
        2820
    } else {
        let aux1 = cycle_day.div_euclid(366);
        let aux2 = cycle_day.rem_euclid(366);
        (2134 * aux1 + 2816 * aux2 + 2815).div_euclid(1_028_522) + aux1 + 1
    };
    let mut year = year_in_cycle + 2820 * cycle + 474;
    if year <= 0 {
        year -= 1;
    }
    let year_day = jdn - persian_to_jdn(year, 1, 1) + 1;
    let month = if year_day <= 186 {
        (year_day + 30).div_euclid(31)
    } else {
        (year_day - 6 + 29).div_euclid(30)
    };
    (year, month, jdn - persian_to_jdn(year, month, 1) + 1)
}

// Arithmetic (tabular) Islamic calendar
fn islamic_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    day + (59 * (month - 1) + 1).div_euclid(2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH
        - 1
}

fn islamic_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let year = (30 * (jdn - ISLAMIC_EPOCH) + 10646).div_euclid(10631);
    let into_year = jdn - (29 + islamic_to_jdn(year, 1, 1));
    let month = ((2 * into_year + 58).div_euclid(59) + 1).min(12);
    (year, month, jdn - islamic_to_jdn(year, month, 1) + 1)
}

// Hebrew calendar, computed on fixed (rata die) days with Nisan as month 1
// and Tishri as month 7.
const TISHRI: i64 = 7;

const fn hebrew_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

const fn hebrew_last_month(year: i64) -> i64 {
    if hebrew_leap(year) { 13 } else { 12 }
}

fn hebrew_elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12084 + 13753 * months;
    let days = 29 * months + parts.div_euclid(25920);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

fn hebrew_new_year(year: i64) -> i64 {
    let ny0 = hebrew_elapsed_days(year - 1);
    let ny1 = hebrew_elapsed_days(year);
    let ny2 = hebrew_elapsed_days(year + 1);
    let correction = if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    };
    HEBREW_EPOCH_RD + ny1 + correction
}

fn hebrew_month_length(month: i64, year: i64) -> i64 {
    let year_days = hebrew_new_year(year + 1) - hebrew_new_year(year);
    let short = matches!(month, 2 | 4 | 6 | 10 | 13)
        || (month == 12 && !hebrew_leap(year))
        || (month == 8 && year_days % 10 != 5)
        || (month == 9 && year_days % 10 == 3);
    if short { 29 } else { 30 }
}

fn hebrew_fixed(year: i64, month: i64, day: i64) -> i64 {
    let before: i64 = if month < TISHRI {
        (TISHRI..=hebrew_last_month(year))
            .chain(1..month)
            .map(|m| hebrew_month_length(m, year))
            .sum()
    } else {
        (TISHRI..month).map(|m| hebrew_month_length(m, year)).sum()
    };
    hebrew_new_year(year) + day - 1 + before
}

/// Tishri-based month number to the Nisan-based one
const fn hebrew_month_to_nisan(month: i64, year: i64) -> i64 {
    match month {
        ..=5 => month + 6,
        6 => 12,
        7 if hebrew_leap(year) => 13,
        7 => 12,
        _ => month - 7,
    }
}

const fn hebrew_month_from_nisan(month: i64) -> i64 {
    match month {
        7..=11 => month - 6,
        12 => 6,
        13 => 7,
        _ => month + 7,
    }
}

fn hebrew_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    hebrew_fixed(year, hebrew_month_to_nisan(month, year), day) + RD_TO_JDN
}

fn hebrew_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let fixed = jdn - RD_TO_JDN;
    let approx = (98_496 * (fixed - HEBREW_EPOCH_RD)).div_euclid(35_975_351) + 1;
    let year = if hebrew_new_year(approx) <= fixed {
        approx
    } else {
        approx - 1
    };
    let mut month = if fixed < hebrew_fixed(year, 1, 1) { TISHRI } else { 1 };
    while month < 13 && fixed > hebrew_fixed(year, month, hebrew_month_length(month, year)) {
        month += 1;
    }
    let day = fixed - hebrew_fixed(year, month, 1) + 1;
    (year, hebrew_month_from_nisan(month), day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_validity() {
        struct TestCase {
            day:      u8,
            month:    u8,
            year:     i32,
            is_valid: bool,
        }

        let cases = [
            TestCase { day: 29, month: 2, year: 2000, is_valid: true },
            TestCase { day: 29, month: 2, year: 1900, is_valid: false },
            TestCase { day: 31, month: 4, year: 1850, is_valid: false },
            TestCase { day: 31, month: 0, year: 1850, is_valid: true },
            TestCase { day: 1, month: 13, year: 1850, is_valid: false },
            TestCase { day: 0, month: 0, year: 1850, is_valid: true },
        ];

        for case in &cases {
            assert_eq!(
                is_valid(Calendar::Gregorian, case.day, case.month, case.year),
                case.is_valid,
                "{}-{}-{}",
                case.year,
                case.month,
                case.day
            );
        }
    }

    #[test]
    fn test_julian_leap_every_fourth_year() {
        assert!(is_valid(Calendar::Julian, 29, 2, 1900));
        assert!(!is_valid(Calendar::Gregorian, 29, 2, 1900));
        assert!(!is_valid(Calendar::Julian, 29, 2, 1901));
    }

    #[test]
    fn test_swedish_window() {
        assert!(is_valid(Calendar::Swedish, 30, 2, 1712));
        assert!(is_valid(Calendar::Swedish, 29, 2, 1704));
        assert!(is_valid(Calendar::Swedish, 1, 3, 1700));
        assert!(!is_valid(Calendar::Swedish, 29, 2, 1700));
        assert!(!is_valid(Calendar::Swedish, 1, 1, 1650));
        assert!(!is_valid(Calendar::Swedish, 1, 3, 1712));
    }

    #[test]
    fn test_other_calendars_bounds() {
        assert!(is_valid(Calendar::FrenchRepublican, 5, 13, 1));
        assert!(!is_valid(Calendar::FrenchRepublican, 1, 1, 0));
        assert!(is_valid(Calendar::Persian, 31, 6, 1400));
        assert!(!is_valid(Calendar::Persian, 31, 7, 1400));
        assert!(is_valid(Calendar::Hebrew, 29, 13, 5785));
        assert!(!is_valid(Calendar::Islamic, 1, 13, 1445));
    }

    #[test]
    fn test_days_past_month_end() {
        struct TestCase {
            calendar: Calendar,
            day:      u8,
            month:    u8,
            year:     i32,
            is_valid: bool,
        }

        let cases = [
            TestCase { calendar: Calendar::FrenchRepublican, day: 30, month: 1, year: 1, is_valid: true },
            TestCase { calendar: Calendar::FrenchRepublican, day: 31, month: 1, year: 1, is_valid: false },
            TestCase { calendar: Calendar::FrenchRepublican, day: 5, month: 13, year: 1, is_valid: true },
            TestCase { calendar: Calendar::FrenchRepublican, day: 6, month: 13, year: 1, is_valid: false },
            TestCase { calendar: Calendar::FrenchRepublican, day: 6, month: 13, year: 3, is_valid: true },
            TestCase { calendar: Calendar::FrenchRepublican, day: 10, month: 13, year: 3, is_valid: false },
            TestCase { calendar: Calendar::Islamic, day: 29, month: 2, year: 1445, is_valid: true },
            TestCase { calendar: Calendar::Islamic, day: 30, month: 2, year: 1445, is_valid: false },
            TestCase { calendar: Calendar::Hebrew, day: 29, month: 2, year: 5784, is_valid: true },
            TestCase { calendar: Calendar::Hebrew, day: 30, month: 2, year: 5784, is_valid: false },
            TestCase { calendar: Calendar::Hebrew, day: 30, month: 13, year: 5785, is_valid: false },
            TestCase { calendar: Calendar::Persian, day: 29, month: 12, year: 1402, is_valid: true },
            TestCase { calendar: Calendar::Persian, day: 30, month: 12, year: 1402, is_valid: false },
            TestCase { calendar: Calendar::Persian, day: 30, month: 12, year: 1399, is_valid: true },
            TestCase { calendar: Calendar::Persian, day: 30, month: 12, year: 0, is_valid: true },
        ];

        for case in &cases {
            assert_eq!(
                is_valid(case.calendar, case.day, case.month, case.year),
                case.is_valid,
                "{} {}-{}-{}",
                case.calendar,
                case.year,
                case.month,
                case.day
            );
        }
    }

    #[test]
    fn test_known_day_numbers() {
        assert_eq!(to_day_number(Calendar::Gregorian, 2000, 1, 1), 2_451_545);
        assert_eq!(to_day_number(Calendar::Julian, 1582, 10, 4), 2_299_160);
        assert_eq!(to_day_number(Calendar::Gregorian, 1582, 10, 15), 2_299_161);
        // 1 Vendémiaire I = 22 September 1792
        assert_eq!(to_day_number(Calendar::FrenchRepublican, 1, 1, 1), 2_375_840);
        assert_eq!(to_day_number(Calendar::Islamic, 1, 1, 1), 1_948_440);
        // 1 Ramadan 1445 = 11 March 2024
        assert_eq!(to_day_number(Calendar::Islamic, 1445, 9, 1), 2_460_381);
        // Nowruz 1403 = 20 March 2024
        assert_eq!(to_day_number(Calendar::Persian, 1403, 1, 1), 2_460_390);
        // Rosh Hashanah 5785 = 3 October 2024
        assert_eq!(to_day_number(Calendar::Hebrew, 5785, 1, 1), 2_460_587);
        // 15 Nisan 5784 = 23 April 2024
        assert_eq!(to_day_number(Calendar::Hebrew, 5784, 8, 15), 2_460_424);
    }

    #[test]
    fn test_hebrew_adar_in_common_and_leap_years() {
        // Purim 5783 (common year) = 7 March 2023
        assert_eq!(to_day_number(Calendar::Hebrew, 5783, 6, 14), 2_460_011);
        assert_eq!(from_day_number(Calendar::Hebrew, 2_460_011), (5783, 6, 14));
        // Purim 5784 (leap year, Adar II) = 24 March 2024
        assert_eq!(to_day_number(Calendar::Hebrew, 5784, 7, 14), 2_460_394);
        assert_eq!(from_day_number(Calendar::Hebrew, 2_460_394), (5784, 7, 14));
    }

    #[test]
    fn test_day_number_round_trip() {
        for cal in Calendar::ALL {
            for jdn in (2_375_840..2_470_000).step_by(977) {
                let (y, m, d) = from_day_number(cal, jdn);
                assert_eq!(to_day_number(cal, y, m, d), jdn, "{cal} at {jdn}");
            }
        }
    }

    #[test]
    fn test_swedish_conversion() {
        let extra = to_day_number(Calendar::Swedish, 1712, 2, 30);
        assert_eq!(extra, to_day_number(Calendar::Julian, 1712, 2, 29));
        assert_eq!(from_day_number(Calendar::Swedish, extra), (1712, 2, 30));
        // Swedish 1 March 1700 fell on the Julian leap day that Sweden skipped
        assert_eq!(
            to_day_number(Calendar::Swedish, 1700, 3, 1),
            to_day_number(Calendar::Julian, 1700, 2, 29)
        );
        assert_eq!(
            to_day_number(Calendar::Swedish, 1800, 1, 1),
            to_day_number(Calendar::Gregorian, 1800, 1, 1)
        );
    }

    #[test]
    fn test_weekday_and_civil_dates() {
        // 1 January 2000 was a Saturday
        assert_eq!(weekday(2_451_545), 6);
        let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        assert_eq!(from_naive_date(Calendar::Gregorian, date), (2024, 10, 3));
        assert_eq!(from_naive_date(Calendar::Hebrew, date), (5785, 1, 1));
    }
}
