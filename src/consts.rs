/// Highest month number in any supported calendar (French Republican "extra days", Hebrew Elul)
pub const MAX_MONTH: u8 = 13;

/// Highest day number a date point may carry
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Months in a quarter
pub const QUARTER_MONTHS: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 stands for "month unknown")
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    31, // month unknown: any day of a 31-day month
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Swedish calendar: first valid date (Julian 1700-03-01, after the skipped leap day)
pub(crate) const SWEDISH_FIRST: (i32, u8, u8) = (1700, 2, 29);
/// Swedish calendar: first date no longer in the transitional calendar (Julian 1712-03-01)
pub(crate) const SWEDISH_END: (i32, u8, u8) = (1712, 3, 1);
/// The leap day Sweden inserted to return to the Julian calendar
pub(crate) const SWEDISH_EXTRA_DAY: (i32, u8, u8) = (1712, 2, 30);
/// Sweden adopted the Gregorian calendar on this date
pub(crate) const SWEDISH_GREGORIAN_START: (i32, u8, u8) = (1753, 3, 1);

/// Day numbers (Julian day at noon) of the calendar epochs
pub(crate) const FRENCH_EPOCH_OFFSET: i64 = 2_375_474;
pub(crate) const PERSIAN_EPOCH: i64 = 1_948_321;
pub(crate) const ISLAMIC_EPOCH: i64 = 1_948_440;
/// Hebrew epoch as a rata die (fixed day) number
pub(crate) const HEBREW_EPOCH_RD: i64 = -1_373_427;
/// Offset from rata die to Julian day number
pub(crate) const RD_TO_JDN: i64 = 1_721_425;

/// Days in a French Republican month
pub(crate) const FRENCH_DAYS_PER_MONTH: i64 = 30;
/// Complementary days at the end of a French Republican leap year
pub(crate) const FRENCH_EXTRA_DAYS: u8 = 6;

/// Days in four French Republican years
pub(crate) const FRENCH_DAYS_PER_4_YEARS: i64 = 1461;

/// Text that always stands for the current date, whatever the language
pub const TODAY_SIGIL: &str = "$T";
