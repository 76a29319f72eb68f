//! Packed and extended version values.
//!
//! [`Version`] packs four 16-bit components; [`VersionInfo`] extends it
//! with two borrowed text labels. Both are plain value types with no
//! fallible operations: the only rejected misuse, asking for a
//! component selector that does not exist, fails to compile.

use core::cmp::Ordering;
use core::fmt;

// -----------------------------------------------------------------------------
// Version

/// A packed four-component version number.
///
/// Each component is 16 bits; callers holding wider numbers truncate at
/// the call site (`v as u16`), which is defined but lossy. The derived
/// ordering is lexicographic over (major, minor, patch, tweak).
///
/// # Examples
///
/// ```
/// use versa_info::Version;
///
/// let v = Version::new(1, 92, 0, 0);
/// assert_eq!(v.to_string(), "1.92.0.0");
/// assert_eq!(Version::default(), Version::new(0, 0, 0, 0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    /// Major version.
    pub major: u16,
    /// Minor version.
    pub minor: u16,
    /// Patch version.
    pub patch: u16,
    /// Tweak version.
    pub tweak: u16,
}

impl Version {
    /// Creates a version from its four components.
    #[inline]
    pub const fn new(major: u16, minor: u16, patch: u16, tweak: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            tweak,
        }
    }

    /// Folds the components into one composite ordering key:
    /// `major * 1_000_000 + minor * 10_000 + patch * 100 + tweak`.
    ///
    /// The key is only injective while `minor < 100`, `patch < 100` and
    /// `tweak < 10_000`; larger components bleed into their neighbor.
    /// This is a documented limitation of the key scheme, kept as is.
    #[inline]
    pub const fn number(&self) -> u64 {
        (self.major as u64) * 1_000_000
            + (self.minor as u64) * 10_000
            + (self.patch as u64) * 100
            + self.tweak as u64
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.tweak
        )
    }
}

// -----------------------------------------------------------------------------
// VersionInfo

/// A [`Version`] extended with a pre-release suffix and a source-control
/// hash.
///
/// Both labels are non-owning views: a `VersionInfo` is only valid while
/// the text it borrows is alive, which the lifetime parameter enforces.
/// Build metadata is typically `&'static str`, making the record
/// `'static` in practice.
///
/// Comparison (and equality) use the composite key of [`Version::number`]
/// only; the text labels never participate. `Hash` is deliberately not
/// implemented, since it could not agree with that equality.
///
/// # Examples
///
/// ```
/// use versa_info::VersionInfo;
///
/// let v = VersionInfo::new(1, 2, 3, 4, "beta", "abc123");
/// assert_eq!(v.to_string(), "1.2.3.4-beta (abc123)");
///
/// let plain = VersionInfo::new(1, 0, 0, 0, "", "");
/// assert_eq!(plain.to_string(), "1.0.0.0");
/// assert!(plain < v);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionInfo<'a> {
    /// The packed numeric components.
    pub version: Version,
    /// Pre-release label, empty when absent.
    pub suffix: &'a str,
    /// Source-control hash, empty when absent.
    pub git_hash: &'a str,
}

impl<'a> VersionInfo<'a> {
    /// Creates an extended version record.
    #[inline]
    pub const fn new(
        major: u16,
        minor: u16,
        patch: u16,
        tweak: u16,
        suffix: &'a str,
        git_hash: &'a str,
    ) -> Self {
        Self {
            version: Version::new(major, minor, patch, tweak),
            suffix,
            git_hash,
        }
    }

    /// See [`Version::number`].
    #[inline]
    pub const fn number(&self) -> u64 {
        self.version.number()
    }

    /// Returns one component, selected at compile time.
    ///
    /// The return type follows the selector: `u16` for the numeric
    /// components, `&str` for the text labels. There is no selector that
    /// can fail at runtime; an unknown one is a type error.
    ///
    /// # Examples
    ///
    /// ```
    /// use versa_info::VersionInfo;
    /// use versa_info::version::parts::{Minor, Suffix};
    ///
    /// let v = VersionInfo::new(1, 2, 3, 4, "beta", "abc123");
    /// assert_eq!(v.part::<Minor>(), 2);
    /// assert_eq!(v.part::<Suffix>(), "beta");
    /// ```
    #[inline]
    pub fn part<P: Part>(&self) -> P::Value<'a> {
        P::of(self)
    }
}

impl PartialEq for VersionInfo<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.number() == other.number()
    }
}

impl Eq for VersionInfo<'_> {}

impl PartialOrd for VersionInfo<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionInfo<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.number().cmp(&other.number())
    }
}

impl fmt::Display for VersionInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.version.fmt(f)?;
        if !self.suffix.is_empty() {
            write!(f, "-{}", self.suffix)?;
        }
        if !self.git_hash.is_empty() {
            write!(f, " ({})", self.git_hash)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Component selectors

/// Typed component selectors for [`VersionInfo::part`].
pub mod parts {
    /// Selects [`Version::major`](super::Version::major).
    pub struct Major;
    /// Selects [`Version::minor`](super::Version::minor).
    pub struct Minor;
    /// Selects [`Version::patch`](super::Version::patch).
    pub struct Patch;
    /// Selects [`Version::tweak`](super::Version::tweak).
    pub struct Tweak;
    /// Selects [`VersionInfo::suffix`](super::VersionInfo::suffix).
    pub struct Suffix;
    /// Selects [`VersionInfo::git_hash`](super::VersionInfo::git_hash).
    pub struct GitHash;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::parts::Major {}
    impl Sealed for super::parts::Minor {}
    impl Sealed for super::parts::Patch {}
    impl Sealed for super::parts::Tweak {}
    impl Sealed for super::parts::Suffix {}
    impl Sealed for super::parts::GitHash {}
}

/// A compile-time component selector.
///
/// The trait is sealed: the selectors in [`parts`] are the closed set of
/// recognized tags, so `part::<SomethingElse>()` cannot compile.
pub trait Part: sealed::Sealed {
    /// The natively-typed value of the selected component.
    type Value<'a>: Copy + fmt::Display;

    /// Reads the component out of a record.
    fn of<'a>(info: &VersionInfo<'a>) -> Self::Value<'a>;
}

impl Part for parts::Major {
    type Value<'a> = u16;

    #[inline]
    fn of(info: &VersionInfo<'_>) -> u16 {
        info.version.major
    }
}

impl Part for parts::Minor {
    type Value<'a> = u16;

    #[inline]
    fn of(info: &VersionInfo<'_>) -> u16 {
        info.version.minor
    }
}

impl Part for parts::Patch {
    type Value<'a> = u16;

    #[inline]
    fn of(info: &VersionInfo<'_>) -> u16 {
        info.version.patch
    }
}

impl Part for parts::Tweak {
    type Value<'a> = u16;

    #[inline]
    fn of(info: &VersionInfo<'_>) -> u16 {
        info.version.tweak
    }
}

impl Part for parts::Suffix {
    type Value<'a> = &'a str;

    #[inline]
    fn of<'a>(info: &VersionInfo<'a>) -> &'a str {
        info.suffix
    }
}

impl Part for parts::GitHash {
    type Value<'a> = &'a str;

    #[inline]
    fn of<'a>(info: &VersionInfo<'a>) -> &'a str {
        info.git_hash
    }
}

// -----------------------------------------------------------------------------
// serde

/// Both types serialize as their canonical text rendering.
#[cfg(feature = "serde")]
mod serde_impls {
    use serde_core::{Serialize, Serializer};

    use super::{Version, VersionInfo};

    impl Serialize for Version {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for VersionInfo<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
