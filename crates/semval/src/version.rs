use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{BuildMetadata, Component, Prerelease, VersionError, parse};

/// Semantic version, in the form `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Every way of obtaining a `Version` validates it, so a value of this type is
/// always well-formed. Fields cannot be assigned directly; the increment
/// methods and [`Version::with_pre_release()`]/[`Version::with_build()`]
/// return new values instead.
///
/// # Ordering
///
/// [`Version::cmp_precedence()`] implements Semantic Versioning precedence,
/// which ignores build metadata. The [`Ord`] implementation agrees with it
/// except that it breaks ties using build metadata, so that it is consistent
/// with [`Eq`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Prerelease,
    build: BuildMetadata,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        } = self;
        write!(f, "{major}.{minor}.{patch}")?;
        if !pre_release.is_empty() {
            write!(f, "-{pre_release}")?;
        }
        if !build.is_empty() {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other).then_with(|| self.build.cmp(&other.build))
    }
}

impl TryFrom<[i64; 3]> for Version {
    type Error = VersionError;

    fn try_from([major, minor, patch]: [i64; 3]) -> Result<Self, Self::Error> {
        fn non_negative(value: i64, component: Component) -> Result<u64, VersionError> {
            u64::try_from(value)
                .map_err(|_| VersionError::NegativeComponent { component, value })
        }

        Ok(Self::from_core(
            non_negative(major, Component::Major)?,
            non_negative(minor, Component::Minor)?,
            non_negative(patch, Component::Patch)?,
        ))
    }
}

impl Version {
    /// Version `0.0.0`.
    pub const ZERO: Version = Version::from_core(0, 0, 0);

    /// Constructs a version with no pre-release or build metadata.
    pub const fn from_core(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Constructs a version from its fields, validating the pre-release and
    /// build metadata strings. An empty string means the part is absent.
    ///
    /// This applies the same rules as [`Version::parse()`].
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build: &str,
    ) -> Result<Self, VersionError> {
        let result = Prerelease::new(pre_release).and_then(|pre_release| {
            Ok(Self::from_core(major, minor, patch)
                .with_pre_release(pre_release)
                .with_build(BuildMetadata::new(build)?))
        });
        if let Err(e) = &result {
            log::debug!(
                "rejected version fields {major}.{minor}.{patch} {pre_release:?} {build:?}: {e}"
            );
        }
        result
    }

    /// Parses a version string such as `1.0.0-alpha+001`.
    ///
    /// The whole string must match; surrounding whitespace and a leading `v`
    /// are rejected.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        parse::parse_version(s).inspect_err(|e| log::debug!("rejected version string {s:?}: {e}"))
    }

    /// Returns the major version number.
    pub const fn major(&self) -> u64 {
        self.major
    }
    /// Returns the minor version number.
    pub const fn minor(&self) -> u64 {
        self.minor
    }
    /// Returns the patch version number.
    pub const fn patch(&self) -> u64 {
        self.patch
    }
    /// Returns the pre-release, which is empty for a stable version.
    pub const fn pre_release(&self) -> &Prerelease {
        &self.pre_release
    }
    /// Returns the build metadata, which may be empty.
    pub const fn build(&self) -> &BuildMetadata {
        &self.build
    }

    /// Returns whether the version has no pre-release.
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_empty()
    }
    /// Returns whether the version has a pre-release.
    pub fn is_pre_release(&self) -> bool {
        !self.is_stable()
    }

    /// Returns the version with its pre-release replaced.
    #[must_use]
    pub fn with_pre_release(self, pre_release: Prerelease) -> Self {
        Self {
            pre_release,
            ..self
        }
    }
    /// Returns the version with its build metadata replaced.
    #[must_use]
    pub fn with_build(self, build: BuildMetadata) -> Self {
        Self { build, ..self }
    }

    /// Compares two versions by Semantic Versioning precedence.
    ///
    /// 1. Major, minor, and patch compare numerically, in that order.
    /// 2. A version without a pre-release is greater than one with a
    ///    pre-release.
    /// 3. Pre-releases compare identifier by identifier; see [`Prerelease`].
    ///
    /// Build metadata is ignored, so `1.0.0+001` and `1.0.0+002` are equal.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }

    /// Returns the next major version: `X.Y.Z-pre+build` becomes
    /// `(X+1).0.0`, or `None` if the major version is `u64::MAX`.
    #[must_use]
    pub fn checked_increment_major(&self) -> Option<Self> {
        let next = Self::from_core(self.major.checked_add(1)?, 0, 0);
        log::trace!("incremented major version of {self} to {next}");
        Some(next)
    }

    /// Returns the next minor version: `X.Y.Z-pre+build` becomes
    /// `X.(Y+1).0`, or `None` if the minor version is `u64::MAX`.
    #[must_use]
    pub fn checked_increment_minor(&self) -> Option<Self> {
        let next = Self::from_core(self.major, self.minor.checked_add(1)?, 0);
        log::trace!("incremented minor version of {self} to {next}");
        Some(next)
    }

    /// Returns the next patch version: `X.Y.Z-pre+build` becomes
    /// `X.Y.(Z+1)`, or `None` if the patch version is `u64::MAX`.
    #[must_use]
    pub fn checked_increment_patch(&self) -> Option<Self> {
        let next = Self::from_core(self.major, self.minor, self.patch.checked_add(1)?);
        log::trace!("incremented patch version of {self} to {next}");
        Some(next)
    }

    /// Returns the next major version: `X.Y.Z-pre+build` becomes
    /// `(X+1).0.0`.
    ///
    /// # Panics
    ///
    /// Panics if the major version is `u64::MAX`. Use
    /// [`Version::checked_increment_major()`] to handle that case.
    #[must_use]
    pub fn increment_major(&self) -> Self {
        or_overflow(self.checked_increment_major(), Component::Major)
    }

    /// Returns the next minor version: `X.Y.Z-pre+build` becomes
    /// `X.(Y+1).0`.
    ///
    /// # Panics
    ///
    /// Panics if the minor version is `u64::MAX`. Use
    /// [`Version::checked_increment_minor()`] to handle that case.
    #[must_use]
    pub fn increment_minor(&self) -> Self {
        or_overflow(self.checked_increment_minor(), Component::Minor)
    }

    /// Returns the next patch version: `X.Y.Z-pre+build` becomes
    /// `X.Y.(Z+1)`.
    ///
    /// # Panics
    ///
    /// Panics if the patch version is `u64::MAX`. Use
    /// [`Version::checked_increment_patch()`] to handle that case.
    #[must_use]
    pub fn increment_patch(&self) -> Self {
        or_overflow(self.checked_increment_patch(), Component::Patch)
    }

    /// Returns the next pre-release of the same core version, without build
    /// metadata.
    ///
    /// - `1.0.0` becomes `1.0.0-1`, which has *lower* precedence
    /// - `1.0.0-alpha` becomes `1.0.0-alpha.1`
    /// - `1.0.0-alpha.1+b` becomes `1.0.0-alpha.2`
    #[must_use]
    pub fn increment_pre_release(&self) -> Self {
        let next = Self {
            pre_release: self.pre_release.incremented(),
            build: BuildMetadata::EMPTY,
            ..*self
        };
        log::trace!("incremented pre-release of {self} to {next}");
        next
    }
}

#[track_caller]
fn or_overflow(next: Option<Version>, component: Component) -> Version {
    match next {
        Some(next) => next,
        None => panic!("{component} version overflowed"),
    }
}
