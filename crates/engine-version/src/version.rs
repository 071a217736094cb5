//! The version value.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{FormatFlags, ParseError, ReleaseType, format};

/// An engine build version such as `2019.4.3f1`.
///
/// Values are immutable: every field is fixed by the constructor. Ordering is
/// lexicographic over major, minor, build, release type and type number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EngineVersion {
    major: u16,
    minor: u16,
    build: u16,
    release: ReleaseType,
    type_number: u8,
}

impl EngineVersion {
    /// `0.0.0a0`
    pub const MIN: EngineVersion = EngineVersion::new(0, 0, 0, ReleaseType::Alpha, 0);
    /// `65535.65535.65535x255`
    pub const MAX: EngineVersion = EngineVersion::new(
        u16::MAX,
        u16::MAX,
        u16::MAX,
        ReleaseType::Experimental,
        u8::MAX,
    );

    /// Create a version from all of its fields.
    pub const fn new(
        major: u16,
        minor: u16,
        build: u16,
        release: ReleaseType,
        type_number: u8,
    ) -> Self {
        Self {
            major,
            minor,
            build,
            release,
            type_number,
        }
    }

    /// A final release with type number 1, e.g. `2019.4.3f1`.
    pub const fn from_release(major: u16, minor: u16, build: u16) -> Self {
        Self::new(major, minor, build, ReleaseType::Final, 1)
    }

    /// Get major version.
    pub const fn major(&self) -> u16 {
        self.major
    }

    /// Get minor version.
    pub const fn minor(&self) -> u16 {
        self.minor
    }

    /// Get build number.
    pub const fn build(&self) -> u16 {
        self.build
    }

    /// Get release type.
    pub const fn release(&self) -> ReleaseType {
        self.release
    }

    /// Get type number, the `1` in `2019.4.3f1`.
    pub const fn type_number(&self) -> u8 {
        self.type_number
    }

    /// Copy of this version with a different release type and type number.
    pub const fn with_release(self, release: ReleaseType, type_number: u8) -> Self {
        Self::new(self.major, self.minor, self.build, release, type_number)
    }

    /// Parse a version string, discarding any trailing engine text.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        crate::parse(s)
    }

    /// Render according to `flags`.
    pub fn to_string_with(&self, flags: FormatFlags) -> String {
        format(self, flags, None)
    }

    /// Like [`EngineVersion::to_string_with`], appending `trailing` unless the
    /// type is excluded.
    pub fn to_string_with_trailing(&self, flags: FormatFlags, trailing: &str) -> String {
        format(self, flags, Some(trailing))
    }

    /// `major.minor.build`, e.g. `2019.4.3`.
    pub fn to_string_without_type(&self) -> String {
        format(self, FormatFlags::EXCLUDE_TYPE, None)
    }
}

impl FromStr for EngineVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineVersion::parse(s)
    }
}

impl fmt::Display for EngineVersion {
    /// `{}` writes the default form, `{:#}` omits the release type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = if f.alternate() {
            FormatFlags::EXCLUDE_TYPE
        } else {
            FormatFlags::DEFAULT
        };
        crate::formatter::write_version(f, self, flags, None)
    }
}

#[cfg(feature = "serde")]
impl Serialize for EngineVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserialization rejects trailing engine text, which the value cannot hold.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EngineVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (version, trailing) = crate::parse_with_trailing(&s).map_err(de::Error::custom)?;
        match trailing {
            Some(trailing) => Err(de::Error::custom(format_args!(
                "unexpected trailing text {trailing:?} in version {s}"
            ))),
            None => Ok(version),
        }
    }
}
