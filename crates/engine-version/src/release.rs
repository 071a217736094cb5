//! Release type codes.

use std::fmt;

use crate::UnknownReleaseType;

/// Category of a build, encoded as a single letter in the version string.
///
/// The declaration order is also the sort order used when comparing versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ReleaseType {
    Alpha,
    Beta,
    /// Regional build, rendered as `f1c<n>` by default.
    China,
    #[default]
    Final,
    Patch,
    Experimental,
}

impl ReleaseType {
    /// All release types in declaration order.
    pub const ALL: [ReleaseType; 6] = [
        ReleaseType::Alpha,
        ReleaseType::Beta,
        ReleaseType::China,
        ReleaseType::Final,
        ReleaseType::Patch,
        ReleaseType::Experimental,
    ];

    /// Letter used for this release type in the generic form.
    pub const fn to_char(self) -> char {
        match self {
            ReleaseType::Alpha => 'a',
            ReleaseType::Beta => 'b',
            ReleaseType::China => 'c',
            ReleaseType::Final => 'f',
            ReleaseType::Patch => 'p',
            ReleaseType::Experimental => 'x',
        }
    }

    /// Inverse of [`ReleaseType::to_char`]. Case-sensitive.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(ReleaseType::Alpha),
            'b' => Some(ReleaseType::Beta),
            'c' => Some(ReleaseType::China),
            'f' => Some(ReleaseType::Final),
            'p' => Some(ReleaseType::Patch),
            'x' => Some(ReleaseType::Experimental),
            _ => None,
        }
    }
}

impl TryFrom<char> for ReleaseType {
    type Error = UnknownReleaseType;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        ReleaseType::from_char(c).ok_or(UnknownReleaseType(c))
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
