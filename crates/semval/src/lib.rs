//! Semantic Versioning 2.0.0 version values.
//!
//! A [`Version`] is parsed from (or rendered to) a string such as
//! `1.0.0-alpha.1+build.5`, compared by Semantic Versioning precedence, and
//! incremented to derive successor versions.
//!
//! ```
//! use semval::Version;
//!
//! let v: Version = "1.0.0-alpha+001".parse().unwrap();
//! assert_eq!(v.pre_release().to_string(), "alpha");
//! assert!(v < Version::from_core(1, 0, 0));
//! assert_eq!(v.increment_minor().to_string(), "1.1.0");
//! ```
//!
//! # Features
//!
//! - `serde` (default): serialize [`Version`], [`Prerelease`], and
//!   [`BuildMetadata`] as strings.

#[cfg(test)]
use criterion as _; // Suppress unused crate warning (it's used in a benchmark)
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _; // Only the serde tests use it

mod errors;
mod identifier;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod version;

pub use errors::{Component, Section, VersionError};
pub use identifier::{BuildMetadata, Identifier, IdentifierKind, Prerelease};
pub use version::Version;
