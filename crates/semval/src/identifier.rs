//! Dot-separated identifiers used in pre-release and build metadata.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{Section, VersionError};

/// Whether an identifier consists only of ASCII digits.
///
/// This is decided once when the identifier is validated and never
/// re-derived.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Only ASCII digits, such as `11`.
    Numeric,
    /// At least one letter or `-`, such as `rc` or `0A`.
    Alphanumeric,
}

/// Single validated identifier, such as `alpha` or `11`.
///
/// Numeric identifiers are stored as their digits rather than as an integer,
/// so they compare exactly at any length. In a pre-release they never have a
/// leading zero (except `0` itself), which makes the digit string canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
    kind: IdentifierKind,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pre-release precedence between two identifiers.
///
/// - Numeric identifiers compare as integers.
/// - Numeric identifiers are lower than alphanumeric ones.
/// - Alphanumeric identifiers compare by ASCII code point.
impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use IdentifierKind::{Alphanumeric, Numeric};

        match (self.kind, other.kind) {
            // Without leading zeros, a longer digit string is a larger number.
            (Numeric, Numeric) => self
                .text
                .len()
                .cmp(&other.text.len())
                .then_with(|| self.text.cmp(&other.text)),
            (Numeric, Alphanumeric) => Ordering::Less,
            (Alphanumeric, Numeric) => Ordering::Greater,
            (Alphanumeric, Alphanumeric) => self.text.cmp(&other.text),
        }
    }
}

impl Identifier {
    /// Validates a single identifier from `section`.
    fn new(s: &str, section: Section) -> Result<Self, VersionError> {
        if s.is_empty() {
            return Err(VersionError::EmptyIdentifier { section });
        }
        if !s.chars().all(is_identifier_char) {
            return Err(VersionError::InvalidIdentifier {
                section,
                identifier: s.to_owned(),
            });
        }

        let kind = if s.bytes().all(|b| b.is_ascii_digit()) {
            IdentifierKind::Numeric
        } else {
            IdentifierKind::Alphanumeric
        };

        if section == Section::PreRelease
            && kind == IdentifierKind::Numeric
            && s.len() > 1
            && s.starts_with('0')
        {
            return Err(VersionError::LeadingZero {
                identifier: s.to_owned(),
            });
        }

        Ok(Self {
            text: s.to_owned(),
            kind,
        })
    }

    /// Numeric identifier `1`, used to start a pre-release counter.
    fn one() -> Self {
        Self {
            text: "1".to_owned(),
            kind: IdentifierKind::Numeric,
        }
    }

    /// Returns the identifier as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns whether the identifier is numeric or alphanumeric.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Returns whether the identifier consists only of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        self.kind == IdentifierKind::Numeric
    }

    /// Returns the numeric identifier plus one, or `None` if the identifier
    /// is alphanumeric.
    fn incremented(&self) -> Option<Self> {
        self.is_numeric().then(|| Self {
            text: increment_decimal(&self.text),
            kind: IdentifierKind::Numeric,
        })
    }
}

/// Returns whether `c` may appear in an identifier.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Adds one to a string of ASCII digits, carrying as needed.
fn increment_decimal(digits: &str) -> String {
    let mut carry = true;
    let mut reversed: Vec<u8> = digits
        .bytes()
        .rev()
        .map(|b| match (carry, b) {
            (false, _) => b,
            (true, b'9') => b'0',
            (true, _) => {
                carry = false;
                b + 1
            }
        })
        .collect();
    if carry {
        reversed.push(b'1');
    }
    reversed.into_iter().rev().map(char::from).collect()
}

/// Splits `s` on `.` and validates each identifier. The empty string yields
/// no identifiers.
fn split_identifiers(s: &str, section: Section) -> Result<Vec<Identifier>, VersionError> {
    if s.is_empty() {
        return Ok(vec![]);
    }
    s.split('.')
        .map(|id| Identifier::new(id, section))
        .try_collect()
}

/// Pre-release part of a version, such as `alpha.1`.
///
/// An empty pre-release means the version is stable. A stable version has
/// higher precedence than any pre-release of the same core version, so the
/// empty pre-release is the greatest value of this type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.iter().format("."))
    }
}

impl FromStr for Prerelease {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Pairwise, then a strict prefix is lower.
            (false, false) => self.identifiers.cmp(&other.identifiers),
        }
    }
}

impl Prerelease {
    /// Empty pre-release, denoting a stable version.
    pub const EMPTY: Self = Self {
        identifiers: Vec::new(),
    };

    /// Validates a dot-separated pre-release string such as `rc.1`.
    ///
    /// The empty string is accepted and yields [`Prerelease::EMPTY`].
    pub fn new(s: &str) -> Result<Self, VersionError> {
        let identifiers = split_identifiers(s, Section::PreRelease)?;
        Ok(Self { identifiers })
    }

    /// Returns whether there are no identifiers.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns the identifiers in order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Returns the next pre-release in sequence.
    ///
    /// - an empty pre-release becomes `1`
    /// - `alpha.1` becomes `alpha.2`
    /// - `alpha` becomes `alpha.1`
    pub(crate) fn incremented(&self) -> Self {
        let mut identifiers = self.identifiers.clone();
        match identifiers.last().and_then(Identifier::incremented) {
            Some(next) => {
                identifiers.pop();
                identifiers.push(next);
            }
            None => identifiers.push(Identifier::one()),
        }
        Self { identifiers }
    }
}

/// Build metadata part of a version, such as `exp.sha.5114f85`.
///
/// Build metadata never affects precedence. The [`Ord`] implementation on
/// this type exists only to give [`crate::Version`] an order consistent with
/// equality, and has no meaning beyond that.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildMetadata {
    identifiers: Vec<Identifier>,
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.iter().format("."))
    }
}

impl FromStr for BuildMetadata {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl BuildMetadata {
    /// Empty build metadata.
    pub const EMPTY: Self = Self {
        identifiers: Vec::new(),
    };

    /// Validates a dot-separated build metadata string such as `build.1`.
    ///
    /// Numeric identifiers may have leading zeros. The empty string is
    /// accepted and yields [`BuildMetadata::EMPTY`].
    pub fn new(s: &str) -> Result<Self, VersionError> {
        let identifiers = split_identifiers(s, Section::Build)?;
        Ok(Self { identifiers })
    }

    /// Returns whether there are no identifiers.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns the identifiers in order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[track_caller]
    fn pre(s: &str) -> Prerelease {
        Prerelease::new(s).unwrap()
    }

    #[test]
    fn test_identifier_kinds() {
        let kinds = |s: &str| {
            pre(s)
                .identifiers()
                .iter()
                .map(Identifier::kind)
                .collect_vec()
        };
        use IdentifierKind::{Alphanumeric, Numeric};

        assert_eq!(kinds("0"), [Numeric]);
        assert_eq!(kinds("123"), [Numeric]);
        assert_eq!(kinds("0A"), [Alphanumeric]);
        assert_eq!(kinds("alpha.1"), [Alphanumeric, Numeric]);
        assert_eq!(kinds("x-1.--"), [Alphanumeric, Alphanumeric]);
    }

    #[test]
    fn test_prerelease_validation() {
        assert_eq!(Prerelease::new(""), Ok(Prerelease::EMPTY));
        assert_eq!(pre("rc.1").to_string(), "rc.1");

        let empty = Err(VersionError::EmptyIdentifier {
            section: Section::PreRelease,
        });
        assert_eq!(Prerelease::new("."), empty);
        assert_eq!(Prerelease::new("a..b"), empty);
        assert_eq!(Prerelease::new("a."), empty);
        assert_eq!(Prerelease::new(".a"), empty);

        assert_eq!(
            Prerelease::new("123.0456"),
            Err(VersionError::LeadingZero {
                identifier: "0456".to_owned()
            }),
        );
        assert_eq!(
            Prerelease::new("beta_1"),
            Err(VersionError::InvalidIdentifier {
                section: Section::PreRelease,
                identifier: "beta_1".to_owned(),
            }),
        );
    }

    #[test]
    fn test_build_metadata_validation() {
        assert_eq!(BuildMetadata::new(""), Ok(BuildMetadata::EMPTY));
        // leading zeros are fine in build metadata
        assert_eq!(BuildMetadata::new("001").unwrap().to_string(), "001");
        assert_eq!(
            BuildMetadata::new("exp.sha.5114f85")
                .unwrap()
                .identifiers()
                .len(),
            3,
        );
        assert_eq!(
            BuildMetadata::new("a.."),
            Err(VersionError::EmptyIdentifier {
                section: Section::Build,
            }),
        );
        assert_eq!(
            BuildMetadata::new("ünïcode"),
            Err(VersionError::InvalidIdentifier {
                section: Section::Build,
                identifier: "ünïcode".to_owned(),
            }),
        );
    }

    #[test]
    fn test_prerelease_precedence() {
        // pairwise examples from semver.org, in ascending order
        let ascending = [
            "alpha",
            "alpha.1",
            "alpha.beta",
            "beta",
            "beta.2",
            "beta.11",
            "rc.1",
            "",
        ];
        for (a, b) in ascending.iter().tuple_windows() {
            assert_eq!(pre(a).cmp(&pre(b)), Ordering::Less, "{a:?} < {b:?}");
            assert_eq!(pre(b).cmp(&pre(a)), Ordering::Greater, "{b:?} > {a:?}");
        }

        assert_eq!(pre("1").cmp(&pre("a")), Ordering::Less);
        assert_eq!(pre("999").cmp(&pre("-")), Ordering::Less);
        assert_eq!(pre("2").cmp(&pre("10")), Ordering::Less);
        assert_eq!(pre("Z").cmp(&pre("a")), Ordering::Less);
        assert_eq!(pre("alpha.1").cmp(&pre("alpha.1")), Ordering::Equal);
        assert_eq!(
            pre("99999999999999999999999").cmp(&pre("100000000000000000000000")),
            Ordering::Less,
        );
    }

    #[test]
    fn test_prerelease_increment() {
        assert_eq!(Prerelease::EMPTY.incremented().to_string(), "1");
        assert_eq!(pre("alpha").incremented().to_string(), "alpha.1");
        assert_eq!(pre("alpha.1").incremented().to_string(), "alpha.2");
        assert_eq!(pre("rc.9").incremented().to_string(), "rc.10");
        assert_eq!(pre("1.alpha").incremented().to_string(), "1.alpha.1");
        assert_eq!(
            pre("99999999999999999999").incremented().to_string(),
            "100000000000000000000",
        );
    }

    #[test]
    fn test_increment_decimal() {
        assert_eq!(increment_decimal("0"), "1");
        assert_eq!(increment_decimal("9"), "10");
        assert_eq!(increment_decimal("109"), "110");
        assert_eq!(increment_decimal("1999"), "2000");
    }
}
