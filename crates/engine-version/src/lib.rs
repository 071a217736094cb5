//! Parsing and formatting of engine build version identifiers.
//!
//! A version is a dotted numeric triple followed by a release type letter, a
//! type number, and optional free-form engine text:
//!
//! - **Typed**: `2019.4.3f1`, `2018.2.0b11`, `2019.4.3f1.custom-engine`
//! - **Regional**: `2019.4.3f1c5`, a China build with type number 5
//! - **Numeric only**: `2019.4.3` and `2019.4`, read as final releases
//!
//! # Example
//!
//! ```
//! use engine_version::{EngineVersion, FormatFlags, ReleaseType};
//!
//! let v: EngineVersion = "2019.4.3f1c5".parse().unwrap();
//! assert_eq!(v.release(), ReleaseType::China);
//! assert_eq!(v.to_string(), "2019.4.3f1c5");
//! assert_eq!(v.to_string_with(FormatFlags::USE_SHORT_CHINESE_FORMAT), "2019.4.3c5");
//! ```

pub use self::error::{Field, ParseError, Result, UnknownReleaseType};
pub use self::flags::FormatFlags;
pub use self::formatter::{format, write_version};
pub use self::grammar::{GrammarKind, Parsed};
pub use self::parser::{parse, parse_with_trailing, try_parse};
pub use self::release::ReleaseType;
pub use self::version::EngineVersion;

mod error;
mod flags;
mod formatter;
mod grammar;
mod parser;
mod release;
mod version;
