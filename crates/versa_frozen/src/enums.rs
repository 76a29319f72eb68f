//! Enumerator tables over a fixed scan window.
//!
//! An enum opts in through `#[derive(EnumName)]`, which implements
//! [`EnumName`] so every discriminant can be asked for its spelling.
//! [`EnumTable`] materializes that per-value probing into a static
//! table: it probes each value of the half-open window
//! `[ENUM_LOWER_BOUND, ENUM_UPPER_BOUND)` once, drops the probes that
//! did not resolve to a valid enumerator name and keeps the survivors
//! in ascending value order, mirrored into two hash maps for O(1)
//! lookup in both directions.
//!
//! The window is a build-time constant (see the crate-level docs for
//! the `VERSA_ENUM_*` variables); enumerators outside it are silently
//! invisible to tables, never an error.

use crate::cell::TableCell;
use crate::hash::{HashMap, NoOpHashState};
use crate::nameof::vnameof_short;
use crate::sig;

// -----------------------------------------------------------------------------
// Scan window

/// First value probed when building a table (inclusive).
pub const ENUM_LOWER_BOUND: i64 = parse_i64(env!("VERSA_ENUM_LOWER_BOUND"));

/// First value past the scan window (exclusive).
pub const ENUM_UPPER_BOUND: i64 = parse_i64(env!("VERSA_ENUM_UPPER_BOUND"));

/// Number of values probed per table build.
pub const ENUM_RANGE: usize = (ENUM_UPPER_BOUND - ENUM_LOWER_BOUND) as usize;

/// Parses a decimal integer from a build-script-provided literal.
const fn parse_i64(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let (negative, mut i) = match bytes {
        [b'-', ..] => (true, 1),
        _ => (false, 0),
    };
    assert!(i < bytes.len(), "empty integer literal");

    let mut value: i64 = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "invalid digit in integer literal");
        value = value * 10 + (bytes[i] - b'0') as i64;
        i += 1;
    }
    if negative { -value } else { value }
}

// -----------------------------------------------------------------------------
// EnumName

/// A unit-only enum whose enumerator spellings can be probed by value.
///
/// Implemented by `#[derive(EnumName)]`; the derive emits one
/// comparison arm per variant, so `spell` is a linear scan over the
/// variant list, not over the window.
pub trait EnumName: 'static {
    /// Returns the fully qualified spelling of the enumerator with the
    /// given numeric value, or `None` if there is none.
    fn spell(raw: i64) -> Option<&'static str>;

    /// The static table of this enum's in-window enumerators.
    #[inline]
    fn table() -> &'static EnumTable
    where
        Self: Sized,
    {
        EnumTable::of::<Self>()
    }
}

// -----------------------------------------------------------------------------
// EnumMapping

/// One resolved enumerator: its bare name and numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMapping {
    /// Bare enumerator name, without scope qualifiers.
    pub name: &'static str,
    /// Numeric value of the enumerator.
    pub value: i64,
}

impl EnumMapping {
    /// Placeholder for a probe that resolved to nothing.
    pub const EMPTY: Self = Self { name: "", value: 0 };
}

/// Probes every value in the scan window against `E`.
///
/// Slot `i` holds the probe for `ENUM_LOWER_BOUND + i`, with
/// [`EnumMapping::EMPTY`]'s name standing in for a miss. The result is
/// positional, not yet compacted.
fn scan<E: EnumName>() -> Box<[EnumMapping; ENUM_RANGE]> {
    let mut entries = Box::new([EnumMapping::EMPTY; ENUM_RANGE]);
    for (i, entry) in entries.iter_mut().enumerate() {
        let value = ENUM_LOWER_BOUND + i as i64;
        *entry = EnumMapping {
            name: vnameof_short::<E>(value).unwrap_or(""),
            value,
        };
    }
    entries
}

/// Moves every entry with a valid name to the front, preserving their
/// relative order, and returns how many there are.
///
/// The tail past the returned count is unspecified.
pub fn compact(entries: &mut [EnumMapping]) -> usize {
    let mut kept = 0;
    for i in 0..entries.len() {
        if sig::is_valid_name(entries[i].name) {
            entries.swap(kept, i);
            kept += 1;
        }
    }
    kept
}

// -----------------------------------------------------------------------------
// EnumTable

/// The in-window enumerators of one enum, in ascending value order,
/// with hash mirrors for lookup by name and by value.
///
/// Built at most once per enum and leaked; see [`EnumTable::of`].
///
/// # Examples
///
/// ```
/// use versa_frozen::{EnumName, EnumTable};
///
/// #[derive(EnumName)]
/// enum Opcode {
///     Halt = 3000,
///     Load = 3001,
/// }
///
/// let table = EnumTable::of::<Opcode>();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.name_of(3001), Some("Load"));
/// assert_eq!(table.value_of("Halt"), Some(3000));
/// ```
pub struct EnumTable {
    entries: Box<[EnumMapping]>,
    by_name: HashMap<&'static str, i64>,
    by_value: HashMap<i64, &'static str, NoOpHashState>,
}

impl EnumTable {
    /// Returns the table for `E`, building it on first use.
    ///
    /// Building probes the whole scan window once; every later call is
    /// a map lookup.
    pub fn of<E: EnumName>() -> &'static Self {
        static CELL: TableCell<EnumTable> = TableCell::new();
        CELL.get_or_insert::<E>(Self::build::<E>)
    }

    fn build<E: EnumName>() -> Self {
        let mut probes = scan::<E>();
        let kept = compact(&mut probes[..]);
        let entries: Box<[EnumMapping]> = probes[..kept].to_vec().into_boxed_slice();

        let mut by_name = HashMap::default();
        let mut by_value = HashMap::default();
        for entry in &entries {
            by_name.insert(entry.name, entry.value);
            by_value.insert(entry.value, entry.name);
        }

        Self {
            entries,
            by_name,
            by_value,
        }
    }

    /// Returns the name of the enumerator with the given value.
    #[inline]
    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Returns the value of the enumerator with the given name.
    #[inline]
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Returns `true` if an enumerator with the given name is in the window.
    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns `true` if an enumerator with the given value is in the window.
    #[inline]
    pub fn contains_value(&self, value: i64) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Returns the position of the named enumerator in value order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let value = self.value_of(name)?;
        self.entries.iter().position(|e| e.value == value)
    }

    /// The enumerators in ascending value order.
    #[inline]
    pub fn entries(&self) -> &[EnumMapping] {
        &self.entries
    }

    /// An iterator over the enumerators in ascending value order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumMapping> {
        self.entries.iter()
    }

    /// Number of in-window enumerators.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no enumerator of the enum falls in the window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnumTable {
    type Item = &'a EnumMapping;
    type IntoIter = core::slice::Iter<'a, EnumMapping>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl core::fmt::Debug for EnumTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::EnumName;

    #[derive(EnumName)]
    enum Signal {
        Start = 3000,
        Stop = 3001,
        Pause = 3050,
        Resume = 3599,
        // Below the window; must not appear in the table.
        Hidden = 42,
    }

    #[derive(EnumName)]
    enum Outside {
        Only = 7,
    }

    #[test]
    fn window_constants_are_the_reference_configuration() {
        assert_eq!(ENUM_LOWER_BOUND, 3000);
        assert_eq!(ENUM_UPPER_BOUND, 3600);
        assert_eq!(ENUM_RANGE, 600);
        assert_eq!(
            ENUM_RANGE as i64,
            ENUM_UPPER_BOUND - ENUM_LOWER_BOUND
        );
    }

    #[test]
    fn parse_i64_handles_signs() {
        assert_eq!(parse_i64("0"), 0);
        assert_eq!(parse_i64("3600"), 3600);
        assert_eq!(parse_i64("-42"), -42);
    }

    #[test]
    fn table_holds_in_window_enumerators_in_value_order() {
        let table = Signal::table();
        assert_eq!(table.len(), 4);

        let names: Vec<_> = table.iter().map(|e| e.name).collect();
        assert_eq!(names, ["Start", "Stop", "Pause", "Resume"]);

        let values: Vec<_> = table.iter().map(|e| e.value).collect();
        assert_eq!(values, [3000, 3001, 3050, 3599]);
    }

    #[test]
    fn out_of_window_enumerators_are_invisible() {
        let table = Signal::table();
        assert!(!table.contains_name("Hidden"));
        assert!(!table.contains_value(42));

        assert!(Outside::table().is_empty());
        assert_eq!(Outside::table().name_of(7), None);
    }

    #[test]
    fn lookups_round_trip() {
        let table = Signal::table();
        for entry in table {
            assert_eq!(table.name_of(entry.value), Some(entry.name));
            assert_eq!(table.value_of(entry.name), Some(entry.value));
            // The single-value path agrees with the table entry.
            assert_eq!(vnameof_short::<Signal>(entry.value), Some(entry.name));
        }
        assert_eq!(table.name_of(3002), None);
        assert_eq!(table.value_of("Missing"), None);
    }

    #[test]
    fn mirror_views_agree_with_the_entry_list() {
        let table = Signal::table();
        assert_eq!(table.entries().len(), table.len());
        for entry in table.entries() {
            assert!(table.contains_name(entry.name));
            assert!(table.contains_value(entry.value));
            assert!(sig::is_valid_name(entry.name));
        }
    }

    #[test]
    fn index_follows_value_order() {
        let table = Signal::table();
        assert_eq!(table.index_of("Start"), Some(0));
        assert_eq!(table.index_of("Resume"), Some(3));
        assert_eq!(table.index_of("Hidden"), None);
    }

    #[test]
    fn rebuilding_returns_the_same_table() {
        assert!(core::ptr::eq(Signal::table(), EnumTable::of::<Signal>()));
    }

    #[test]
    fn compact_is_stable_and_drops_invalid_names() {
        let mut entries = [
            EnumMapping { name: "", value: 0 },
            EnumMapping { name: "a", value: 1 },
            EnumMapping {
                name: "(cast)2",
                value: 2,
            },
            EnumMapping { name: "b", value: 3 },
            EnumMapping {
                name: "c<d>",
                value: 4,
            },
            EnumMapping { name: "e", value: 5 },
        ];
        let kept = compact(&mut entries);
        assert_eq!(kept, 3);

        let front: Vec<_> = entries[..kept].iter().map(|e| (e.name, e.value)).collect();
        assert_eq!(front, [("a", 1), ("b", 3), ("e", 5)]);
    }

    #[test]
    fn compact_of_all_valid_is_identity() {
        let mut entries = [
            EnumMapping { name: "x", value: 9 },
            EnumMapping { name: "y", value: 10 },
        ];
        assert_eq!(compact(&mut entries), 2);
        assert_eq!(entries[0].name, "x");
        assert_eq!(entries[1].name, "y");
    }
}
