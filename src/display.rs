//! Rendering [`DateValue`]s as text in one language.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::date::{DateValue, slash_year};
use crate::lexeme::{Lexeme, Value, render};
use crate::locale::LocaleConfig;
use crate::types::{Calendar, DatePoint, Modifier, NewYear};

/// The six display formats, in format-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayFormat {
    /// `YYYY-MM-DD`
    #[default]
    Iso,
    /// The language's preferred numeric template, e.g. `%m/%d/%Y`
    Numerical,
    /// `March 5, 1850`
    MonthDayYear,
    /// `Mar 5, 1850`
    MonDayYear,
    /// `5 March 1850`
    DayMonthYear,
    /// `5 Mar 1850`
    DayMonYear,
}

impl DisplayFormat {
    pub const ALL: [Self; 6] = [
        Self::Iso,
        Self::Numerical,
        Self::MonthDayYear,
        Self::MonDayYear,
        Self::DayMonthYear,
        Self::DayMonYear,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    const fn long_month(self) -> bool {
        matches!(self, Self::MonthDayYear | Self::DayMonthYear)
    }
}

/// Renders date values with the templates of one [`LocaleConfig`].
///
/// The selected format is instance state; use [`DateDisplay::display_with`]
/// to pick a format per call on a shared instance.
#[derive(Debug, Clone)]
pub struct DateDisplay {
    config: Arc<LocaleConfig>,
    format: DisplayFormat,
}

impl DateDisplay {
    pub fn new(config: impl Into<Arc<LocaleConfig>>) -> Self {
        Self {
            config: config.into(),
            format: DisplayFormat::default(),
        }
    }

    pub const fn format(&self) -> DisplayFormat {
        self.format
    }

    pub const fn set_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    /// Human-readable names of the formats, in format-index order
    pub fn format_names(&self) -> &[String] {
        &self.config.display.format_names
    }

    pub fn display(&self, date: &DateValue) -> String {
        self.display_with(date, self.format)
    }

    pub fn display_with(&self, date: &DateValue, format: DisplayFormat) -> String {
        if date.modifier() == Modifier::TextOnly {
            return date.text().unwrap_or_default().to_owned();
        }
        let start = date.start();
        if start.is_empty() {
            return String::new();
        }

        let display = &self.config.display;
        let hints = &self.config.inflections;
        let cal = date.calendar();
        let quality = word(&display.qualifiers, date.quality().index());
        let extras = self.calendar_extras(cal, date.new_year());
        let stop = date.stop().unwrap_or(DatePoint::EMPTY);

        let compound = match date.modifier() {
            Modifier::Span => Some((&display.span, &hints.span_start, &hints.span_stop)),
            Modifier::Range => Some((&display.range, &hints.range_start, &hints.range_stop)),
            _ => None,
        };
        if let Some((template, start_hint, stop_hint)) = compound {
            let first = self.render_point(cal, start, format, start_hint);
            let second = self.render_point(cal, stop, format, stop_hint);
            return render(
                template,
                &[
                    ("date_quality", Value::Text(quality)),
                    ("date_start", Value::Text(&first)),
                    ("date_stop", Value::Text(&second)),
                    ("nonstd_calendar_and_ny", Value::Text(&extras)),
                ],
            );
        }

        let hint = hints.for_simple(date.modifier(), date.quality());
        let text = self.render_point(cal, start, format, hint);
        let token = word(&display.modifiers, date.modifier().index());
        let (text, token) = if token.starts_with(' ') {
            (format!("{text}{token}"), "")
        } else {
            (text, token)
        };
        render(
            &display.simple,
            &[
                ("date_quality", Value::Text(quality)),
                ("noncompound_modifier", Value::Text(token)),
                ("date", Value::Text(&text)),
                ("nonstd_calendar_and_ny", Value::Text(&extras)),
            ],
        )
    }

    /// `" (Julian, Mar25)"`, or nothing for a Gregorian date starting January 1
    fn calendar_extras(&self, cal: Calendar, new_year: NewYear) -> String {
        let name = match cal {
            Calendar::Gregorian => "",
            _ => self.config.calendar_name(cal.index()),
        };
        let new_year = match new_year {
            NewYear::Jan1 => String::new(),
            NewYear::Custom { month, day } => format!("{month}-{day}"),
            NewYear::Mar1 => word(&self.config.display.new_years, 1).to_owned(),
            NewYear::Mar25 => word(&self.config.display.new_years, 2).to_owned(),
            NewYear::Sep1 => word(&self.config.display.new_years, 3).to_owned(),
        };
        let parts: Vec<&str> = [name, new_year.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            String::new()
        } else {
            format!(" ({})", parts.join(", "))
        }
    }

    fn render_point(&self, cal: Calendar, point: DatePoint, format: DisplayFormat, hint: &str) -> String {
        let text = match format {
            DisplayFormat::Iso => iso(point),
            DisplayFormat::Numerical => self.numerical(cal, point),
            _ => self.named(cal, point, format, hint),
        };
        if point.year() < 0 {
            render(&self.config.display.bce, &[("date", Value::Text(&text))])
        } else {
            text
        }
    }

    /// Fills the language's numeric template
    fn numerical(&self, cal: Calendar, point: DatePoint) -> String {
        if point.is_double_dated() {
            return iso(point);
        }
        let (day, month, year) = (point.day(), point.month(), point.year());
        if day == 0 && month == 0 {
            return slash_year(year, false);
        }

        let months = &self.config.months;
        let (short_day, long_day) = if day == 0 || month == 0 || month == 13 || year < 0 {
            ("", "")
        } else {
            let index = calendar::weekday(calendar::to_day_number(cal, year, month, day)) + 1;
            (word(&months.short_days, index), word(&months.long_days, index))
        };

        let month = month.to_string();
        let mut value = self
            .config
            .date_format
            .replace("%m", &month)
            .replace("%b", &month)
            .replace("%B", &month)
            .replace("%a", short_day)
            .replace("%A", long_day);
        if day == 0 {
            // drop the day together with one delimiter
            if let Some(at) = value.find("%d") {
                let end = at + 2;
                let range = if end == value.len() {
                    value[..at].char_indices().next_back().map_or(at, |(i, _)| i)..end
                } else {
                    at..value[end..].chars().next().map_or(end, |c| end + c.len_utf8())
                };
                value.replace_range(range, "");
            }
        }
        value
            .replace("%d", &day.to_string())
            .replace("%Y", &slash_year(year, false))
            .replace('-', "/")
    }

    /// Formats 2 to 5, with month names
    fn named(&self, cal: Calendar, point: DatePoint, format: DisplayFormat, hint: &str) -> String {
        let (day, month) = (point.day(), point.month());
        let year = slash_year(point.year(), point.is_double_dated());
        if day == 0 && month == 0 {
            return year;
        }
        if month == 0 {
            return iso(point);
        }

        let display = &self.config.display;
        let months = &self.config.months;
        let (long, short) = match cal {
            Calendar::Gregorian | Calendar::Julian | Calendar::Swedish => (&months.long, &months.short),
            Calendar::Hebrew => (&months.hebrew, &months.hebrew),
            Calendar::FrenchRepublican => (&months.french, &months.french),
            Calendar::Persian => (&months.persian, &months.persian),
            Calendar::Islamic => (&months.islamic, &months.islamic),
        };
        let empty = Lexeme::default();
        let (key, name, month_years) = if format.long_month() {
            let name = long.get(usize::from(month)).unwrap_or(&empty);
            ("long_month", name, &display.long_month_year)
        } else {
            let name = short.get(usize::from(month)).unwrap_or(&empty);
            ("short_month", name, &display.short_month_year)
        };

        if day == 0 {
            let template = month_year_template(month_years, hint, key);
            return render(&template, &[(key, Value::Word(name)), ("year", Value::Text(&year))]);
        }

        // an inflected month is the month-year phrase of the hint without its year
        let inflected = (!hint.is_empty()).then(|| {
            let template = month_year_template(month_years, hint, key);
            render(&template, &[(key, Value::Word(name)), ("year", Value::Text(""))])
                .trim()
                .to_owned()
        });
        let month_value = inflected.as_deref().map_or(Value::Word(name), Value::Text);
        let template = match format {
            DisplayFormat::MonthDayYear => &display.long_month_day_year,
            DisplayFormat::MonDayYear => &display.short_month_day_year,
            DisplayFormat::DayMonthYear => &display.day_long_month_year,
            _ => &display.day_short_month_year,
        };
        render(
            template,
            &[
                ("day", Value::Text(&day.to_string())),
                (key, month_value),
                ("year", Value::Text(&year)),
            ],
        )
    }
}

fn word(table: &[String], index: usize) -> &str {
    table.get(index).map_or("", String::as_str)
}

/// The month-year template for `hint`, falling back to the hint-less one
fn month_year_template(templates: &[(String, String)], hint: &str, key: &str) -> String {
    templates
        .iter()
        .find(|(h, _)| h == hint)
        .or_else(|| templates.iter().find(|(h, _)| h.is_empty()))
        .map_or_else(|| format!("{{{key}}} {{year}}"), |(_, template)| template.clone())
}

/// `1850`, `1850-03` or `1850-03-05`
fn iso(point: DatePoint) -> String {
    let year = slash_year(point.year(), point.is_double_dated());
    match (point.day(), point.month()) {
        (_, 0) => year,
        (0, month) => format!("{year}-{month:02}"),
        (day, month) => format!("{year}-{month:02}-{day:02}"),
    }
}
