//! Container for static storage of per-type data.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so the cell keys its contents by [`TypeId`] behind an
//! [`RwLock`] and leaks each value to promote it to `'static`. Building
//! runs at most once per type; every later lookup is a read-lock and a
//! no-op hash.

use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use crate::hash::TypeIdMap;

// -----------------------------------------------------------------------------
// TableCell

/// Lazily built, leaked, per-type `T` storage.
///
/// ## Example
///
/// ```
/// use versa_frozen::cell::TableCell;
///
/// fn len_of<T: 'static>() -> &'static usize {
///     static CELL: TableCell<usize> = TableCell::new();
///     CELL.get_or_insert::<T>(|| size_of::<T>())
/// }
///
/// assert_eq!(*len_of::<u32>(), 4);
/// assert_eq!(*len_of::<u8>(), 1);
/// ```
pub struct TableCell<T: 'static>(RwLock<TypeIdMap<&'static T>>);

impl<T: 'static> TableCell<T> {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns a reference to the value stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the
    /// given function.
    #[inline(always)]
    pub fn get_or_insert<G: ?Sized + 'static>(&self, f: impl FnOnce() -> T) -> &'static T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &'static T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl<T: 'static> Default for TableCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn builds_once_per_type() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        static CELL: TableCell<usize> = TableCell::new();

        fn built_for<T: 'static>() -> &'static usize {
            CELL.get_or_insert::<T>(|| CALLS.fetch_add(1, Ordering::SeqCst))
        }

        let a = built_for::<u8>();
        let b = built_for::<u8>();
        let c = built_for::<u16>();

        assert!(core::ptr::eq(a, b));
        assert_ne!(a, c);
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsized_types_are_valid_keys() {
        static CELL: TableCell<&'static str> = TableCell::new();
        assert_eq!(*CELL.get_or_insert::<str>(|| "str"), "str");
        assert_eq!(*CELL.get_or_insert::<[u8]>(|| "bytes"), "bytes");
    }
}
