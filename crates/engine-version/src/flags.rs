//! Formatting options.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Toggles controlling how an [`EngineVersion`](crate::EngineVersion) is rendered.
///
/// Flags are independent and combine with `|`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// Full form, or the regional `f1c` form for China builds.
    pub const DEFAULT: FormatFlags = FormatFlags(0);
    /// Only `major.minor.build`. Type letter, type number and trailing text are dropped.
    pub const EXCLUDE_TYPE: FormatFlags = FormatFlags(1);
    /// Render China builds with the single-letter `c` form instead of `f1c`.
    pub const USE_SHORT_CHINESE_FORMAT: FormatFlags = FormatFlags(1 << 1);

    const NAMED: [(&'static str, FormatFlags); 2] = [
        ("EXCLUDE_TYPE", FormatFlags::EXCLUDE_TYPE),
        (
            "USE_SHORT_CHINESE_FORMAT",
            FormatFlags::USE_SHORT_CHINESE_FORMAT,
        ),
    ];
    const ALL_BITS: u8 = 0b11;

    /// No flags set, same as [`FormatFlags::DEFAULT`].
    pub const fn empty() -> Self {
        FormatFlags(0)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Keep only the known bits of `bits`.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        FormatFlags(bits & Self::ALL_BITS)
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the flags in `other`.
    pub fn insert(&mut self, other: FormatFlags) {
        self.0 |= other.0;
    }

    /// Clear the flags in `other`.
    pub fn remove(&mut self, other: FormatFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        FormatFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for FormatFlags {
    type Output = FormatFlags;

    fn bitand(self, rhs: Self) -> Self::Output {
        FormatFlags(self.0 & rhs.0)
    }
}

impl fmt::Debug for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("FormatFlags(DEFAULT)");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        write!(f, "FormatFlags({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FormatFlags::default().is_empty());
        assert_eq!(FormatFlags::default(), FormatFlags::DEFAULT);
        assert!(FormatFlags::DEFAULT.contains(FormatFlags::empty()));
    }

    #[test]
    fn test_combine() {
        let mut flags = FormatFlags::EXCLUDE_TYPE | FormatFlags::USE_SHORT_CHINESE_FORMAT;
        assert!(flags.contains(FormatFlags::EXCLUDE_TYPE));
        assert!(flags.contains(FormatFlags::USE_SHORT_CHINESE_FORMAT));
        assert_eq!(flags.bits(), 0b11);

        flags.remove(FormatFlags::EXCLUDE_TYPE);
        assert!(!flags.contains(FormatFlags::EXCLUDE_TYPE));
        assert_eq!(flags, FormatFlags::USE_SHORT_CHINESE_FORMAT);

        flags |= FormatFlags::EXCLUDE_TYPE;
        assert_eq!(flags & FormatFlags::EXCLUDE_TYPE, FormatFlags::EXCLUDE_TYPE);
    }

    #[test]
    fn test_from_bits_truncate() {
        assert_eq!(FormatFlags::from_bits_truncate(0xff).bits(), 0b11);
        assert_eq!(
            FormatFlags::from_bits_truncate(0b10),
            FormatFlags::USE_SHORT_CHINESE_FORMAT
        );
    }

    #[test]
    fn test_debug() {
        let debug = format!("{:?}", FormatFlags::DEFAULT);
        assert_eq!(debug, "FormatFlags(DEFAULT)");
        assert_eq!(
            format!(
                "{:?}",
                FormatFlags::EXCLUDE_TYPE | FormatFlags::USE_SHORT_CHINESE_FORMAT
            ),
            "FormatFlags(EXCLUDE_TYPE | USE_SHORT_CHINESE_FORMAT)"
        );
    }
}
