use tracing::debug;

use crate::error::{ParseError, Result};
use crate::grammar::{Parsed, match_grammars};
use crate::version::EngineVersion;

/// Try to parse a version string.
///
/// Returns `None` for empty input, input no grammar accepts, and numbers that
/// do not fit their field. Use [`parse`] to learn which.
pub fn try_parse(input: &str) -> Option<Parsed> {
    parse_parsed(input).ok()
}

/// Parse a version string, discarding any trailing engine text.
pub fn parse(input: &str) -> Result<EngineVersion> {
    parse_parsed(input).map(|parsed| parsed.version)
}

/// Parse a version string and return the trailing engine text, if any.
///
/// ```
/// use engine_version::{parse_with_trailing, ReleaseType};
///
/// let (version, trailing) = parse_with_trailing("2019.4.3f1.custom").unwrap();
/// assert_eq!(version.release(), ReleaseType::Final);
/// assert_eq!(trailing.as_deref(), Some(".custom"));
/// ```
pub fn parse_with_trailing(input: &str) -> Result<(EngineVersion, Option<String>)> {
    parse_parsed(input).map(Parsed::into_parts)
}

fn parse_parsed(input: &str) -> Result<Parsed> {
    if input.is_empty() {
        debug!("rejecting empty version string");
        return Err(ParseError::Empty);
    }

    let result = match match_grammars(input) {
        Some(result) => result,
        None => Err(ParseError::InvalidFormat {
            input: input.to_string(),
        }),
    };
    if let Err(err) = &result {
        debug!(input, error = %err, "failed to parse version");
    }
    result
}
