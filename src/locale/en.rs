//! English ("C") configuration, the fallback for every language.

use super::{
    lexemes, pairs, strings, templates, DisplayTemplates, InflectionHints, LocaleConfig, MonthNames,
    ParseTokens,
};
use crate::types::{Modifier, NewYear, Quality};

/// US English: month first in numeric dates
pub fn config() -> LocaleConfig {
    LocaleConfig {
        lang: "en".to_owned(),
        date_format: "%m/%d/%Y".to_owned(),
        calendar_names: strings(&[
            "Gregorian",
            "Julian",
            "Hebrew",
            "French Republican",
            "Persian",
            "Islamic",
            "Swedish",
        ]),
        months: MonthNames::default(),
        tokens: ParseTokens::default(),
        display: DisplayTemplates::default(),
        inflections: InflectionHints::default(),
    }
}

/// British English: day first in numeric dates
pub fn config_gb() -> LocaleConfig {
    LocaleConfig {
        lang: "en_GB".to_owned(),
        date_format: "%d/%m/%Y".to_owned(),
        ..config()
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self {
            long: lexemes(&[
                "",
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short: lexemes(&[
                "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ]),
            alternates: Vec::new(),
            hebrew: lexemes(&[
                "", "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "AdarI", "AdarII", "Nisan",
                "Iyyar", "Sivan", "Tammuz", "Av", "Elul",
            ]),
            french: lexemes(&[
                "",
                "Vendémiaire",
                "Brumaire",
                "Frimaire",
                "Nivôse",
                "Pluviôse",
                "Ventôse",
                "Germinal",
                "Floréal",
                "Prairial",
                "Messidor",
                "Thermidor",
                "Fructidor",
                "Extra",
            ]),
            persian: lexemes(&[
                "",
                "Farvardin",
                "Ordibehesht",
                "Khordad",
                "Tir",
                "Mordad",
                "Shahrivar",
                "Mehr",
                "Aban",
                "Azar",
                "Dey",
                "Bahman",
                "Esfand",
            ]),
            islamic: lexemes(&[
                "",
                "Muharram",
                "Safar",
                "Rabi`al-Awwal",
                "Rabi`ath-Thani",
                "Jumada l-Ula",
                "Jumada t-Tania",
                "Rajab",
                "Sha`ban",
                "Ramadan",
                "Shawwal",
                "Dhu l-Qa`da",
                "Dhu l-Hijja",
            ]),
            long_days: strings(&[
                "",
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            short_days: strings(&["", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }
}

impl Default for ParseTokens {
    fn default() -> Self {
        Self {
            modifiers: pairs(&[
                ("before", Modifier::Before),
                ("bef", Modifier::Before),
                ("bef.", Modifier::Before),
                ("after", Modifier::After),
                ("aft", Modifier::After),
                ("aft.", Modifier::After),
                ("about", Modifier::About),
                ("abt.", Modifier::About),
                ("abt", Modifier::About),
                ("circa", Modifier::About),
                ("c.", Modifier::About),
                ("around", Modifier::About),
                ("from", Modifier::From),
                ("to", Modifier::To),
            ]),
            modifiers_after: Vec::new(),
            qualities: pairs(&[
                ("estimated", Quality::Estimated),
                ("est.", Quality::Estimated),
                ("est", Quality::Estimated),
                ("calc.", Quality::Calculated),
                ("calc", Quality::Calculated),
                ("calculated", Quality::Calculated),
            ]),
            bce: strings(&["B.C.E.", "B.C.E", "BCE", "B.C.", "B.C", "BC"]),
            span_start: strings(&["from"]),
            span_stop: strings(&["to"]),
            range_start: strings(&["bet", "bet.", "between"]),
            range_mid: strings(&["and"]),
            new_years: pairs(&[
                ("jan1", NewYear::Jan1),
                ("mar1", NewYear::Mar1),
                ("mar25", NewYear::Mar25),
                ("sep1", NewYear::Sep1),
            ]),
            today: strings(&["today"]),
        }
    }
}

impl Default for DisplayTemplates {
    fn default() -> Self {
        Self {
            modifiers: strings(&["", "before ", "after ", "about ", "", "", "", "from ", "to "]),
            qualifiers: strings(&["", "estimated ", "calculated "]),
            span: "{date_quality}from {date_start} to {date_stop}{nonstd_calendar_and_ny}".to_owned(),
            range: "{date_quality}between {date_start} and {date_stop}{nonstd_calendar_and_ny}"
                .to_owned(),
            simple: "{date_quality}{noncompound_modifier}{date}{nonstd_calendar_and_ny}".to_owned(),
            bce: "{date} B.C.E.".to_owned(),
            long_month_day_year: "{long_month} {day:d}, {year}".to_owned(),
            short_month_day_year: "{short_month} {day:d}, {year}".to_owned(),
            day_long_month_year: "{day:d} {long_month} {year}".to_owned(),
            day_short_month_year: "{day:d} {short_month} {year}".to_owned(),
            long_month_year: templates(&[("", "{long_month} {year}")]),
            short_month_year: templates(&[("", "{short_month} {year}")]),
            new_years: strings(&["", "Mar1", "Mar25", "Sep1"]),
            format_names: strings(&[
                "YYYY-MM-DD (ISO)",
                "Numerical",
                "Month Day, Year",
                "Mon Day, Year",
                "Day Month Year",
                "Day Mon Year",
            ]),
        }
    }
}
