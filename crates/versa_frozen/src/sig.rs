//! Name extraction from compiler-synthesized signatures.
//!
//! A pretty signature is the string a compiler prints for a fully
//! instantiated probe function or type; it embeds the spelling of the
//! probed entity between fixed marker text. The shape of that string is
//! a versioned contract per compiler dialect (the single fragile
//! assumption this crate rests on), so every slicing rule here is a
//! pure function over `&str`, selectable by [`Dialect`] and testable
//! against captured samples without the producing compiler installed.
//!
//! The [`Rustc`](Dialect::Rustc) dialect is the live one, fed by
//! [`core::any::type_name`] through the probe wrappers in
//! [`nameof`](crate::nameof). The C++ dialects cover signatures captured
//! from MSVC's `__FUNCSIG__` and GCC/Clang's `__PRETTY_FUNCTION__` for
//! the equivalent `nameof` probe shapes.

use versa_info::build::{BUILD_INFO, Compiler};

// -----------------------------------------------------------------------------
// Dialect

/// A signature-formatting dialect, i.e. one extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `core::any::type_name` output, e.g. `path::Probe<path::T>`.
    Rustc,
    /// GCC `__PRETTY_FUNCTION__`, e.g. `… [with T = path::T]`.
    Gcc,
    /// Clang `__PRETTY_FUNCTION__`, e.g. `… [T = path::T]`.
    Clang,
    /// MSVC `__FUNCSIG__`, e.g. `auto __cdecl nameof<path::T>(void)`.
    Msvc,
}

impl Dialect {
    /// The dialect of the toolchain that built this program.
    ///
    /// An unrecognized compiler falls back to the GCC-style markers.
    /// Best effort, not guaranteed correct.
    pub const fn current() -> Self {
        match BUILD_INFO.comp {
            Compiler::Rustc | Compiler::Gccrs | Compiler::Mrustc => Self::Rustc,
            Compiler::Unknown => Self::Gcc,
        }
    }

    /// The text immediately preceding the probed spelling.
    pub const fn start_marker(self, decor: Decor) -> &'static str {
        match self {
            Self::Msvc => match (decor.wrapped, decor.enum_keyword) {
                (false, false) => "nameof<",
                (false, true) => "nameof<enum ",
                (true, false) => "nameof<frozen_wrapper<",
                (true, true) => "nameof<frozen_wrapper<enum ",
            },
            // GCC and Clang never print an `enum` keyword inside the
            // template-argument list.
            Self::Gcc | Self::Clang => {
                if decor.wrapped {
                    "T = frozen_wrapper<"
                } else {
                    "T = "
                }
            }
            Self::Rustc => {
                if decor.wrapped {
                    "ValueProbe<"
                } else {
                    "Probe<"
                }
            }
        }
    }

    /// The text immediately following the probed spelling.
    pub const fn end_marker(self, decor: Decor) -> &'static str {
        match self {
            Self::Msvc => {
                if decor.wrapped {
                    ">>(void)"
                } else {
                    ">(void)"
                }
            }
            Self::Gcc | Self::Clang => {
                if decor.wrapped {
                    ">]"
                } else {
                    "]"
                }
            }
            Self::Rustc => ">",
        }
    }

    /// The terminator after an enumerator spelling in a value probe.
    ///
    /// Empty means the spelling runs to the end of the input.
    pub const fn value_terminator(self) -> &'static str {
        match self {
            Self::Msvc => ">(void)",
            Self::Gcc | Self::Clang => "]",
            Self::Rustc => "",
        }
    }
}

// -----------------------------------------------------------------------------
// Decor

/// Optional decorations of a probe signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decor {
    /// The probed entity is a non-type value smuggled in through a
    /// wrapper template, which adds one more marker layer.
    pub wrapped: bool,
    /// Some dialects spell an `enum` keyword before enum type names.
    pub enum_keyword: bool,
}

impl Decor {
    /// A plain type probe.
    pub const NONE: Self = Self {
        wrapped: false,
        enum_keyword: false,
    };

    /// A value probe (wrapper template).
    pub const WRAPPED: Self = Self {
        wrapped: true,
        enum_keyword: false,
    };

    /// An enum type probe.
    pub const ENUM: Self = Self {
        wrapped: false,
        enum_keyword: true,
    };
}

// -----------------------------------------------------------------------------
// Extraction

/// Slices the probed spelling out of a pretty signature.
///
/// One deterministic cut: the substring between the first occurrence of
/// the dialect's start marker and the next end marker after it (the
/// last one for [`Dialect::Rustc`], whose generic arguments nest).
/// Returns `None` when either marker is missing.
///
/// # Examples
///
/// ```
/// use versa_frozen::sig::{extract, Decor, Dialect};
///
/// let sig = "constexpr auto nameof() [with T = versa::test::my_struct]";
/// assert_eq!(extract(sig, Dialect::Gcc, Decor::NONE), Some("versa::test::my_struct"));
/// ```
pub fn extract<'a>(sig: &'a str, dialect: Dialect, decor: Decor) -> Option<&'a str> {
    let start_marker = dialect.start_marker(decor);
    let start = sig.find(start_marker)? + start_marker.len();
    let rest = &sig[start..];

    let end_marker = dialect.end_marker(decor);
    let end = match dialect {
        Dialect::Rustc => rest.rfind(end_marker)?,
        _ => rest.find(end_marker)?,
    };
    Some(&rest[..end])
}

/// Slices an enumerator spelling using its type name as an anchor.
///
/// A value probe embeds the enumeration's qualified name immediately
/// before the enumerator's own spelling. Anchoring on the last
/// occurrence of the (already resolved) type name, skipping one scope
/// separator and cutting at the dialect's value terminator isolates the
/// enumerator.
///
/// # Examples
///
/// ```
/// use versa_frozen::sig::{variant_name, Dialect};
///
/// let sig = "auto vnameof() [E = my_enum; E v = my_enum::stop]";
/// assert_eq!(variant_name(sig, "my_enum", Dialect::Gcc), Some("stop"));
/// ```
pub fn variant_name<'a>(sig: &'a str, anchor: &str, dialect: Dialect) -> Option<&'a str> {
    if anchor.is_empty() {
        return None;
    }
    let at = sig.rfind(anchor)?;
    let rest = sig[at + anchor.len()..].strip_prefix("::")?;

    let terminator = dialect.value_terminator();
    if terminator.is_empty() {
        return Some(rest);
    }
    let end = rest.find(terminator)?;
    Some(&rest[..end])
}

/// Returns the text after the last `::` scope separator, or the whole
/// string when there is none.
///
/// # Examples
///
/// ```
/// use versa_frozen::sig::short_name;
///
/// assert_eq!(short_name("ns::inner::Type"), "Type");
/// assert_eq!(short_name("Type"), "Type");
/// ```
pub fn short_name(name: &str) -> &str {
    match name.rfind("::") {
        Some(at) => &name[at + 2..],
        None => name,
    }
}

/// Whether a resolved string is a syntactically valid entity name.
///
/// An integer that is not a real enumerator resolves to a
/// cast-expression spelling such as `(my_enum)3042`, so any of
/// `) ( { } < >` (or an empty string) marks the probe invalid.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .bytes()
            .any(|b| matches!(b, b')' | b'(' | b'{' | b'}' | b'<' | b'>'))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    // Captured probe signatures; one sample per supported dialect.
    const GCC_TYPE: &str =
        "constexpr auto versa::frozen::detail::nameof() [with T = versa::test::my_struct]";
    const CLANG_TYPE: &str = "auto versa::frozen::detail::nameof() [T = versa::test::my_struct]";
    const MSVC_ENUM: &str = "auto __cdecl nameof<enum versa::test::my_enum>(void)";
    const GCC_WRAPPED: &str =
        "constexpr auto versa::frozen::detail::nameof() [with T = frozen_wrapper<42>]";
    const MSVC_WRAPPED: &str = "auto __cdecl nameof<frozen_wrapper<42> >(void)";
    const GCC_VALUE: &str = "constexpr auto versa::frozen::detail::vnameof() \
                             [with E = versa::test::my_enum; E v = versa::test::my_enum::stop]";
    const MSVC_VALUE: &str =
        "auto __cdecl vnameof<enum versa::test::my_enum,versa::test::my_enum::stop>(void)";
    const GCC_INVALID: &str = "constexpr auto versa::frozen::detail::vnameof() \
                               [with E = versa::test::my_enum; E v = (versa::test::my_enum)3042]";

    #[test]
    fn gcc_type_extraction() {
        assert_eq!(
            extract(GCC_TYPE, Dialect::Gcc, Decor::NONE),
            Some("versa::test::my_struct")
        );
    }

    #[test]
    fn clang_type_extraction() {
        assert_eq!(
            extract(CLANG_TYPE, Dialect::Clang, Decor::NONE),
            Some("versa::test::my_struct")
        );
    }

    #[test]
    fn msvc_enum_type_extraction() {
        assert_eq!(
            extract(MSVC_ENUM, Dialect::Msvc, Decor::ENUM),
            Some("versa::test::my_enum")
        );
    }

    #[test]
    fn wrapped_value_extraction() {
        assert_eq!(extract(GCC_WRAPPED, Dialect::Gcc, Decor::WRAPPED), Some("42"));
        assert_eq!(
            extract(MSVC_WRAPPED, Dialect::Msvc, Decor::WRAPPED),
            Some("42")
        );
    }

    #[test]
    fn missing_markers_yield_none() {
        assert_eq!(extract(GCC_TYPE, Dialect::Msvc, Decor::NONE), None);
        assert_eq!(extract("garbage", Dialect::Gcc, Decor::NONE), None);
    }

    #[test]
    fn rustc_extraction_keeps_nested_generics() {
        let sig = "versa_frozen::nameof::Probe<alloc::vec::Vec<alloc::string::String>>";
        assert_eq!(
            extract(sig, Dialect::Rustc, Decor::NONE),
            Some("alloc::vec::Vec<alloc::string::String>")
        );
    }

    #[test]
    fn variant_extraction() {
        assert_eq!(
            variant_name(GCC_VALUE, "versa::test::my_enum", Dialect::Gcc),
            Some("stop")
        );
        assert_eq!(
            variant_name(MSVC_VALUE, "versa::test::my_enum", Dialect::Msvc),
            Some("stop")
        );
        // Live spelling has no terminator at all.
        assert_eq!(
            variant_name("a::b::Color::Red", "a::b::Color", Dialect::Rustc),
            Some("Red")
        );
    }

    #[test]
    fn variant_extraction_rejects_missing_anchor() {
        assert_eq!(variant_name(GCC_VALUE, "other_enum", Dialect::Gcc), None);
        assert_eq!(variant_name(GCC_VALUE, "", Dialect::Gcc), None);
    }

    #[test]
    fn invalid_probe_decays_to_cast_spelling() {
        // The anchor match lands inside the cast expression; the result
        // fails the validity check, which is what drops it from tables.
        let resolved = variant_name(GCC_INVALID, "versa::test::my_enum", Dialect::Gcc);
        assert_eq!(resolved, None); // cast spelling has no `::` after the anchor

        assert!(!is_valid_name("(versa::test::my_enum)3042"));
    }

    #[test]
    fn short_name_strips_last_scope_segment() {
        assert_eq!(short_name("ns::inner::Type"), "Type");
        assert_eq!(short_name("Type"), "Type");
        assert_eq!(short_name("a::b"), "b");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn validity_character_set() {
        assert!(is_valid_name("stop"));
        assert!(is_valid_name("versa::test::stop"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("(my_enum)3042"));
        assert!(!is_valid_name("my_enum{3042}"));
        assert!(!is_valid_name("Vec<u8>"));
    }

    #[test]
    fn current_dialect_is_live() {
        // Anything that can run this test was built by a Rust compiler.
        assert_eq!(Dialect::current(), Dialect::Rustc);
    }
}
