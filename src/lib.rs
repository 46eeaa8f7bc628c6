//! Locale-aware parsing and display of genealogical dates.
//!
//! Dates may be partial ("May 1850"), qualified ("est. abt 1850"), compound
//! ("from 1800 to 1850", "between 1800 and 1850", "Q2 1850"), BCE, double
//! dated ("1722/3") and expressed in any of seven calendars. Input that cannot
//! be read is kept verbatim as a text-only value.
//!
//! ```
//! use date_handler::{DisplayFormat, HandlerRegistry, Modifier};
//!
//! let registry = HandlerRegistry::new();
//! let mut handler = registry.handler("en_US").unwrap();
//! let date = handler.parse("abt. March 5, 1850");
//! assert_eq!(date.modifier(), Modifier::About);
//!
//! handler.set_format(DisplayFormat::DayMonthYear);
//! assert_eq!(handler.display(&date), "about 5 March 1850");
//! ```

pub mod calendar;
mod consts;
mod date;
mod display;
mod handler;
mod lexeme;
pub mod locale;
mod parser;
mod prefix;
mod prelude;
mod types;

pub use consts::*;
pub use date::{DateError, DateValue};
pub use display::{DateDisplay, DisplayFormat};
pub use handler::{DEFAULT_LANGUAGE, DateHandler, HandlerRegistry};
pub use lexeme::Lexeme;
pub use locale::{ConfigError, DateOrder, LocaleConfig};
pub use parser::DateParser;
pub use prefix::{PrefixRegistry, PrefixTable, PrefixTables};
pub use types::{Calendar, DatePoint, Modifier, NewYear, Quality};
