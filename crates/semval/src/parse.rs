use nom::bytes::complete::take_while;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::identifier::is_identifier_char;
use crate::{BuildMetadata, Component, Prerelease, Section, Version, VersionError};

/// Pieces of a version string that matched the grammar, before any field is
/// validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RawVersion<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    pre_release: Option<&'a str>,
    build: Option<&'a str>,
}

/// Parses a version string, anchored at both ends.
pub(crate) fn parse_version(input: &str) -> Result<Version, VersionError> {
    let (_remaining_input, raw) = all_consuming(version_grammar)
        .parse_complete(input)
        .map_err(|_| VersionError::Malformed {
            input: input.to_owned(),
        })?;

    let major = parse_component(raw.major, Component::Major)?;
    let minor = parse_component(raw.minor, Component::Minor)?;
    let patch = parse_component(raw.patch, Component::Patch)?;

    // A `-` or `+` promises at least one identifier.
    let pre_release = match raw.pre_release {
        None => Prerelease::EMPTY,
        Some("") => {
            return Err(VersionError::EmptyIdentifier {
                section: Section::PreRelease,
            });
        }
        Some(s) => Prerelease::new(s)?,
    };
    let build = match raw.build {
        None => BuildMetadata::EMPTY,
        Some("") => {
            return Err(VersionError::EmptyIdentifier {
                section: Section::Build,
            });
        }
        Some(s) => BuildMetadata::new(s)?,
    };

    Ok(Version::from_core(major, minor, patch)
        .with_pre_release(pre_release)
        .with_build(build))
}

/// `X.Y.Z[-PRERELEASE][+BUILD]`, where the pre-release and build sections may
/// still contain empty identifiers.
fn version_grammar(input: &str) -> IResult<&str, RawVersion<'_>> {
    (
        digit1,
        preceded(char('.'), digit1),
        preceded(char('.'), digit1),
        opt(preceded(char('-'), take_while(is_section_char))),
        opt(preceded(char('+'), take_while(is_section_char))),
    )
        .map(|(major, minor, patch, pre_release, build)| RawVersion {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
        .parse(input)
}

fn is_section_char(c: char) -> bool {
    is_identifier_char(c) || c == '.'
}

/// Parses a string of ASCII digits. Leading zeros are accepted.
fn parse_component(digits: &str, component: Component) -> Result<u64, VersionError> {
    digits
        .parse()
        .map_err(|_| VersionError::ComponentOverflow {
            component,
            digits: digits.to_owned(),
        })
}
