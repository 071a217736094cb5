use std::fmt::{self, Write};

use crate::{EngineVersion, FormatFlags, ReleaseType};

/// Render `version` according to `flags`, appending `trailing` when given.
///
/// Trailing text is dropped together with the type when
/// [`FormatFlags::EXCLUDE_TYPE`] is set.
///
/// ```
/// use engine_version::{format, EngineVersion, FormatFlags, ReleaseType};
///
/// let v = EngineVersion::new(2019, 4, 3, ReleaseType::China, 5);
/// assert_eq!(format(&v, FormatFlags::DEFAULT, None), "2019.4.3f1c5");
/// assert_eq!(format(&v, FormatFlags::USE_SHORT_CHINESE_FORMAT, None), "2019.4.3c5");
/// assert_eq!(format(&v, FormatFlags::EXCLUDE_TYPE, Some("-x")), "2019.4.3");
/// ```
pub fn format(version: &EngineVersion, flags: FormatFlags, trailing: Option<&str>) -> String {
    let mut out = String::with_capacity(24 + trailing.map_or(0, str::len));
    write_version(&mut out, version, flags, trailing)
        .expect("writing to a String cannot fail");
    out
}

/// Allocation-free form of [`format`].
pub fn write_version<W: Write + ?Sized>(
    out: &mut W,
    version: &EngineVersion,
    flags: FormatFlags,
    trailing: Option<&str>,
) -> fmt::Result {
    let (major, minor, build) = (version.major(), version.minor(), version.build());
    write!(out, "{major}.{minor}.{build}")?;
    if flags.contains(FormatFlags::EXCLUDE_TYPE) {
        return Ok(());
    }

    if version.release() == ReleaseType::China
        && !flags.contains(FormatFlags::USE_SHORT_CHINESE_FORMAT)
    {
        write!(out, "f1c{}", version.type_number())?;
    } else {
        let letter = version.release().to_char();
        write!(out, "{letter}{}", version.type_number())?;
    }

    match trailing {
        Some(trailing) if !trailing.is_empty() => out.write_str(trailing),
        _ => Ok(()),
    }
}
