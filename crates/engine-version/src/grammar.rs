//! Version string grammars.
//!
//! The grammars overlap: `2019.4.3f1c5` is also accepted by the typed grammar
//! as letter `f`, number `1` and trailing text `c5`. Grammars are therefore
//! tried in the order of [`GRAMMARS`] and the first one matching the whole
//! input wins, even if its numeric fields later fail to convert.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::error::{Field, ParseError, Result};
use crate::release::ReleaseType;
use crate::version::EngineVersion;

static REGIONAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)\.?f1c(?<number>[0-9]+)(?<trailing>(?s:.)+)?$")
        .expect("regional grammar")
});

static TYPED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)\.?(?<type>[abcfpx])(?<number>[0-9]+)(?<trailing>(?s:.)+)?$")
        .expect("typed grammar")
});

static TRIPLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)$").expect("triple grammar")
});

static PAIR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)$").expect("pair grammar"));

/// Which grammar accepted a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarKind {
    /// `2019.4.3f1c5`: regional build with the literal `f1c` marker.
    Regional,
    /// `2019.4.3f1`, `2019.4.3.b2-custom`: letter, number, optional trailing text.
    Typed,
    /// `2019.4.3`
    Triple,
    /// `2019.4`
    Pair,
}

struct Grammar {
    kind: GrammarKind,
    regex: &'static Lazy<Regex>,
}

/// Precedence order. Regional must come before typed.
static GRAMMARS: [Grammar; 4] = [
    Grammar {
        kind: GrammarKind::Regional,
        regex: &REGIONAL_REGEX,
    },
    Grammar {
        kind: GrammarKind::Typed,
        regex: &TYPED_REGEX,
    },
    Grammar {
        kind: GrammarKind::Triple,
        regex: &TRIPLE_REGEX,
    },
    Grammar {
        kind: GrammarKind::Pair,
        regex: &PAIR_REGEX,
    },
];

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Parsed version.
    pub version: EngineVersion,
    /// Free-form text after the recognised version, never empty.
    pub trailing: Option<String>,
    /// Grammar that accepted the input.
    pub grammar: GrammarKind,
}

impl Parsed {
    /// Split into the version and its trailing text.
    pub fn into_parts(self) -> (EngineVersion, Option<String>) {
        (self.version, self.trailing)
    }
}

/// Run the grammars in order and build a version from the first match.
///
/// Returns `None` if no grammar matches.
pub(crate) fn match_grammars(input: &str) -> Option<Result<Parsed>> {
    GRAMMARS.iter().find_map(|grammar| {
        let caps = grammar.regex.captures(input)?;
        trace!(grammar = ?grammar.kind, input, "version grammar matched");
        Some(grammar.build(input, &caps))
    })
}

impl Grammar {
    fn build(&self, input: &str, caps: &Captures<'_>) -> Result<Parsed> {
        let major = number(input, caps, "major", Field::Major)?;
        let minor = number(input, caps, "minor", Field::Minor)?;
        let build = match caps.name("build") {
            Some(_) => number(input, caps, "build", Field::Build)?,
            None => 0,
        };

        let (release, type_number) = match self.kind {
            GrammarKind::Regional => (
                ReleaseType::China,
                number(input, caps, "number", Field::TypeNumber)?,
            ),
            GrammarKind::Typed => {
                let release = caps
                    .name("type")
                    .and_then(|m| m.as_str().chars().next())
                    .and_then(ReleaseType::from_char)
                    .ok_or_else(|| ParseError::InvalidFormat {
                        input: input.to_string(),
                    })?;
                (release, number(input, caps, "number", Field::TypeNumber)?)
            }
            GrammarKind::Triple | GrammarKind::Pair => (ReleaseType::Final, 1),
        };

        let trailing = caps
            .name("trailing")
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Parsed {
            version: EngineVersion::new(major, minor, build, release, type_number),
            trailing,
            grammar: self.kind,
        })
    }
}

/// Convert a captured digit run. The grammars only capture ASCII digits, so a
/// conversion failure means the value does not fit the field.
fn number<T: FromStr>(input: &str, caps: &Captures<'_>, group: &str, field: Field) -> Result<T> {
    let digits = caps
        .name(group)
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::InvalidFormat {
            input: input.to_string(),
        })?;
    digits.parse().map_err(|_| ParseError::Overflow {
        field,
        value: digits.to_string(),
        input: input.to_string(),
    })
}
