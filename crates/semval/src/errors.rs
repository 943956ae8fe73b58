use std::fmt;

use thiserror::Error;

/// Core numeric field of a version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Major version number.
    Major,
    /// Minor version number.
    Minor,
    /// Patch version number.
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

/// Dot-separated section of a version that holds identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// Pre-release, after `-`.
    PreRelease,
    /// Build metadata, after `+`.
    Build,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::PreRelease => write!(f, "pre-release"),
            Section::Build => write!(f, "build metadata"),
        }
    }
}

/// Error produced when parsing or constructing a version.
///
/// No partially-constructed value is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VersionError {
    /// Input does not match `X.Y.Z[-PRERELEASE][+BUILD]`
    #[error("invalid version format {input:?}: must be in the form X.Y.Z[-PRERELEASE][+BUILD]")]
    Malformed {
        /// Rejected input.
        input: String,
    },
    /// Core field is negative
    ///
    /// Only reachable when constructing from signed integers.
    #[error("{component} version must be non-negative, got {value}")]
    NegativeComponent {
        /// Offending field.
        component: Component,
        /// Offending value.
        value: i64,
    },
    /// Core field does not fit in a `u64`
    #[error("{component} version {digits} is too large")]
    ComponentOverflow {
        /// Offending field.
        component: Component,
        /// Digits as written in the input.
        digits: String,
    },
    /// Identifier is the empty string
    ///
    /// This is caused by a leading, trailing, or doubled `.`, or by a `-` or
    /// `+` with nothing after it.
    #[error("{section} identifiers must not be empty")]
    EmptyIdentifier {
        /// Section containing the empty identifier.
        section: Section,
    },
    /// Numeric pre-release identifier has a leading zero
    #[error("numeric pre-release identifier {identifier:?} must not have leading zeros")]
    LeadingZero {
        /// Offending identifier.
        identifier: String,
    },
    /// Identifier contains a character outside `[0-9A-Za-z-]`
    #[error("{section} identifier {identifier:?} may only contain ASCII alphanumerics and '-'")]
    InvalidIdentifier {
        /// Section containing the identifier.
        section: Section,
        /// Offending identifier.
        identifier: String,
    },
}
