//! Russian configuration.
//!
//! Month names carry three forms: nominative (`И`), genitive (`Р`) and
//! instrumental (`Т`). Prepositions pick the form through the inflection hints:
//! "до/после/около мая", "с мая по июнь", "между маем и июнем".

use super::{
    pairs, strings, templates, DisplayTemplates, InflectionHints, LocaleConfig, MonthNames,
    ParseTokens,
};
use crate::lexeme::Lexeme;
use crate::types::{Modifier, NewYear, Quality};

const MONTHS: [[&str; 3]; 12] = [
    ["январь", "января", "январём"],
    ["февраль", "февраля", "февралём"],
    ["март", "марта", "мартом"],
    ["апрель", "апреля", "апрелем"],
    ["май", "мая", "маем"],
    ["июнь", "июня", "июнем"],
    ["июль", "июля", "июлем"],
    ["август", "августа", "августом"],
    ["сентябрь", "сентября", "сентябрём"],
    ["октябрь", "октября", "октябрём"],
    ["ноябрь", "ноября", "ноябрём"],
    ["декабрь", "декабря", "декабрём"],
];

pub fn config() -> LocaleConfig {
    let long = std::iter::once(Lexeme::default())
        .chain(
            MONTHS
                .iter()
                .map(|[nominative, genitive, instrumental]| {
                    Lexeme::with_forms([("И", *nominative), ("Р", *genitive), ("Т", *instrumental)])
                }),
        )
        .collect();
    let short = std::iter::once(Lexeme::default())
        .chain(
            [
                "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
            ]
            .into_iter()
            .map(Lexeme::from),
        )
        .collect();

    LocaleConfig {
        lang: "ru".to_owned(),
        date_format: "%d.%m.%Y".to_owned(),
        calendar_names: strings(&[
            "григорианский",
            "юлианский",
            "еврейский",
            "французский республиканский",
            "персидский",
            "исламский",
            "шведский",
        ]),
        months: MonthNames {
            long,
            short,
            long_days: strings(&[
                "",
                "воскресенье",
                "понедельник",
                "вторник",
                "среда",
                "четверг",
                "пятница",
                "суббота",
            ]),
            short_days: strings(&["", "вс", "пн", "вт", "ср", "чт", "пт", "сб"]),
            ..MonthNames::default()
        },
        tokens: ParseTokens {
            modifiers: pairs(&[
                ("до", Modifier::Before),
                ("перед", Modifier::Before),
                ("после", Modifier::After),
                ("около", Modifier::About),
                ("ок.", Modifier::About),
                ("примерно", Modifier::About),
                ("с", Modifier::From),
                ("по", Modifier::To),
            ]),
            modifiers_after: Vec::new(),
            qualities: pairs(&[
                ("оценено", Quality::Estimated),
                ("оцен.", Quality::Estimated),
                ("вычислено", Quality::Calculated),
                ("вычисл.", Quality::Calculated),
            ]),
            bce: strings(&["до н. э.", "до н.э.", "до нашей эры"]),
            span_start: strings(&["с"]),
            span_stop: strings(&["по"]),
            range_start: strings(&["между"]),
            range_mid: strings(&["и"]),
            new_years: pairs(&[
                ("jan1", NewYear::Jan1),
                ("mar1", NewYear::Mar1),
                ("mar25", NewYear::Mar25),
                ("sep1", NewYear::Sep1),
            ]),
            today: strings(&["сегодня"]),
        },
        display: DisplayTemplates {
            modifiers: strings(&["", "до ", "после ", "около ", "", "", "", "с ", "по "]),
            qualifiers: strings(&["", "оценено ", "вычислено "]),
            span: "{date_quality}с {date_start} по {date_stop}{nonstd_calendar_and_ny}".to_owned(),
            range: "{date_quality}между {date_start} и {date_stop}{nonstd_calendar_and_ny}"
                .to_owned(),
            bce: "{date} до н. э.".to_owned(),
            day_long_month_year: "{day:d} {long_month.forms[Р]} {year}".to_owned(),
            // "по" takes the accusative, which for months is the nominative
            long_month_year: templates(&[
                ("", "{long_month} {year}"),
                ("from", "{long_month.forms[Р]} {year}"),
                ("to", "{long_month.forms[В]} {year}"),
                ("between", "{long_month.forms[Т]} {year}"),
                ("and", "{long_month.forms[Т]} {year}"),
                ("before", "{long_month.forms[Р]} {year}"),
            ]),
            format_names: strings(&[
                "ГГГГ-ММ-ДД (ISO)",
                "Числовой",
                "Месяц День, Год",
                "Мес День, Год",
                "День Месяц Год",
                "День Мес Год",
            ]),
            ..DisplayTemplates::default()
        },
        inflections: InflectionHints {
            span_start: "from".to_owned(),
            span_stop: "to".to_owned(),
            range_start: "between".to_owned(),
            range_stop: "and".to_owned(),
            before: "before".to_owned(),
            after: "before".to_owned(),
            about: "before".to_owned(),
            from: "from".to_owned(),
            to: "to".to_owned(),
            ..InflectionHints::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_forms() {
        let config = config();
        let may = &config.months.long[5];
        assert_eq!(may.form("И"), "май");
        assert_eq!(may.form("Р"), "мая");
        assert_eq!(may.form("Т"), "маем");
        assert_eq!(may.form("В"), "май");
        assert_eq!(config.months.short[12].to_string(), "дек");
    }
}
