use std::fmt;

use thiserror::Error;

/// Numeric field of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    Build,
    TypeNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Build => "build",
            Field::TypeNumber => "type number",
        };
        f.write_str(name)
    }
}

/// Version string parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("version string is empty")]
    Empty,

    #[error("invalid version format: {input}")]
    InvalidFormat { input: String },

    #[error("{field} value {value} is out of range in version {input}")]
    Overflow {
        field: Field,
        value: String,
        input: String,
    },
}

/// Character that does not name a release type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown release type character: {0:?}")]
pub struct UnknownReleaseType(pub char);

/// Result type for version parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
