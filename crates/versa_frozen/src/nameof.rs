//! Name probes.
//!
//! Each probe instantiates a marker generic around the queried entity,
//! asks the compiler for the resulting pretty signature and slices the
//! entity's spelling back out with [`sig`](crate::sig). The cost model
//! is one monomorphization per distinct query plus a string scan per
//! call; nothing is cached here.

use core::any::type_name;
use core::marker::PhantomData;

use crate::enums::EnumName;
use crate::sig::{self, Decor, Dialect};

// -----------------------------------------------------------------------------
// Probes

/// Marker wrapper whose pretty signature embeds `T`'s spelling between
/// the [`Dialect::Rustc`] type markers.
pub struct Probe<T: ?Sized>(pub PhantomData<T>);

/// Marker wrapper whose pretty signature embeds the literal rendering
/// of `V` between the [`Dialect::Rustc`] value markers.
pub struct ValueProbe<const V: i64>;

// -----------------------------------------------------------------------------
// Type names

/// Returns the fully qualified name of `T`.
///
/// Falls back to the raw signature if the markers are missing, so the
/// result is always non-empty (a degraded spelling beats nothing when a
/// toolchain changes its format).
///
/// # Examples
///
/// ```
/// use versa_frozen::nameof;
///
/// assert_eq!(nameof::<String>(), "alloc::string::String");
/// assert_eq!(nameof::<Option<i32>>(), "core::option::Option<i32>");
/// ```
pub fn nameof<T: ?Sized>() -> &'static str {
    let signature = type_name::<Probe<T>>();
    sig::extract(signature, Dialect::current(), Decor::NONE).unwrap_or(signature)
}

/// Returns the name of `T` without its scope qualifiers.
///
/// # Examples
///
/// ```
/// use versa_frozen::nameof_short;
///
/// assert_eq!(nameof_short::<String>(), "String");
/// ```
pub fn nameof_short<T: ?Sized>() -> &'static str {
    sig::short_name(nameof::<T>())
}

// -----------------------------------------------------------------------------
// Constant names

/// Returns the source rendering of the integer constant `V`.
///
/// # Examples
///
/// ```
/// use versa_frozen::const_nameof;
///
/// assert_eq!(const_nameof::<42>(), "42");
/// assert_eq!(const_nameof::<-7>(), "-7");
/// ```
pub fn const_nameof<const V: i64>() -> &'static str {
    let signature = type_name::<ValueProbe<V>>();
    sig::extract(signature, Dialect::current(), Decor::WRAPPED).unwrap_or(signature)
}

// -----------------------------------------------------------------------------
// Enumerator names

/// Returns the fully qualified spelling of the enumerator of `E` with
/// the given numeric value, or `None` if no enumerator has that value.
///
/// # Examples
///
/// ```
/// use versa_frozen::{vnameof, EnumName};
///
/// #[derive(EnumName)]
/// enum Opcode {
///     Halt = 3000,
///     Load = 3001,
/// }
///
/// assert!(vnameof::<Opcode>(3000).unwrap().ends_with("Opcode::Halt"));
/// assert_eq!(vnameof::<Opcode>(3042), None);
/// ```
pub fn vnameof<E: EnumName>(raw: i64) -> Option<&'static str> {
    E::spell(raw)
}

/// Returns the bare enumerator name of `E` with the given value.
///
/// Anchors on [`nameof::<E>()`](nameof) to cut the qualifiers off; if
/// the anchor does not occur in the spelling, falls back to slicing at
/// the last scope separator.
///
/// # Examples
///
/// ```
/// use versa_frozen::{vnameof_short, EnumName};
///
/// #[derive(EnumName)]
/// enum Opcode {
///     Halt = 3000,
///     Load = 3001,
/// }
///
/// assert_eq!(vnameof_short::<Opcode>(3001), Some("Load"));
/// ```
pub fn vnameof_short<E: EnumName>(raw: i64) -> Option<&'static str> {
    let spelling = E::spell(raw)?;
    Some(
        sig::variant_name(spelling, nameof::<E>(), Dialect::current())
            .unwrap_or_else(|| sig::short_name(spelling)),
    )
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::EnumName;

    #[derive(EnumName)]
    enum Mode {
        Read = 3000,
        Write = 3001,
    }

    #[test]
    fn type_names_are_fully_qualified() {
        assert_eq!(nameof::<String>(), "alloc::string::String");
        assert_eq!(nameof::<Option<i32>>(), "core::option::Option<i32>");
        assert_eq!(nameof::<Vec<String>>(), "alloc::vec::Vec<alloc::string::String>");
    }

    #[test]
    fn type_names_cover_unsized_types() {
        assert_eq!(nameof::<str>(), "str");
        assert_eq!(nameof_short::<[u8]>(), "[u8]");
    }

    #[test]
    fn short_names_drop_qualifiers() {
        assert_eq!(nameof_short::<String>(), "String");
        assert_eq!(nameof_short::<Mode>(), "Mode");
    }

    #[test]
    fn probing_is_idempotent() {
        assert_eq!(nameof::<String>(), nameof::<String>());
        assert_eq!(const_nameof::<7>(), const_nameof::<7>());
    }

    #[test]
    fn const_values_render_as_literals() {
        assert_eq!(const_nameof::<0>(), "0");
        assert_eq!(const_nameof::<42>(), "42");
        assert_eq!(const_nameof::<-7>(), "-7");
    }

    #[test]
    fn enumerator_lookup() {
        let spelling = vnameof::<Mode>(3000).unwrap();
        assert!(spelling.ends_with("Mode::Read"));
        assert_eq!(vnameof_short::<Mode>(3001), Some("Write"));
        assert_eq!(vnameof::<Mode>(2999), None);
        assert_eq!(vnameof_short::<Mode>(9999), None);
    }
}
