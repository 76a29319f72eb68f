//! A registry of enum tables.
//!
//! [`EnumRegistry`] is the central store for [`EnumTable`]s, indexed by
//! [`TypeId`] and by the enum's qualified path and bare name. Explicit
//! registration via [`EnumRegistry::register`] always works; with the
//! `auto_register` feature, every `#[derive(EnumName)]` enum also
//! submits itself through the [`inventory`] crate and shows up in
//! [`EnumRegistry::global`] without any call site.

use core::any::TypeId;

use crate::enums::{EnumName, EnumTable};
use crate::hash::{FixedHashState, HashMap, HashSet, TypeIdMap};
use crate::nameof::{nameof, nameof_short};

// -----------------------------------------------------------------------------
// EnumRegistry

/// A registry of [`EnumTable`]s, addressable by type, path or name.
///
/// Bare names can collide across modules; a name that ever becomes
/// ambiguous stops resolving through [`get_with_name`] permanently
/// (qualified paths are assumed unique). Registering the same enum
/// twice is a no-op.
///
/// # Example
///
/// ```
/// use versa_frozen::derive::EnumName;
/// use versa_frozen::registry::EnumRegistry;
///
/// #[derive(EnumName)]
/// enum Opcode {
///     Halt = 3000,
/// }
///
/// let mut registry = EnumRegistry::empty();
/// registry.register::<Opcode>();
///
/// let table = registry.get_with_name("Opcode").unwrap();
/// assert_eq!(table.value_of("Halt"), Some(3000));
/// ```
///
/// [`get_with_name`]: Self::get_with_name
pub struct EnumRegistry {
    tables: TypeIdMap<&'static EnumTable>,
    path_to_id: HashMap<&'static str, TypeId>,
    name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for EnumRegistry {
    /// See [`EnumRegistry::empty`] .
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl EnumRegistry {
    /// Create an empty [`EnumRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            tables: TypeIdMap::new(),
            path_to_id: HashMap::with_hasher(FixedHashState),
            name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Registers `E`, building its table on first registration.
    ///
    /// - Returns `true` if `E` was not present and is now registered.
    /// - Returns `false` if `E` was already registered, leaving the
    ///   registry unchanged.
    pub fn register<E: EnumName>(&mut self) -> bool {
        let type_id = TypeId::of::<E>();
        let inserted = self.tables.try_insert(type_id, EnumTable::of::<E>);
        if inserted {
            Self::add_new_indices(
                type_id,
                nameof::<E>(),
                nameof_short::<E>(),
                &mut self.path_to_id,
                &mut self.name_to_id,
                &mut self.ambiguous_names,
            );
        }
        inserted
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_indices(
        type_id: TypeId,
        path: &'static str,
        name: &'static str,
        path_to_id: &mut HashMap<&'static str, TypeId>,
        name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        // Check for duplicate bare names.
        if !ambiguous_names.contains(name) {
            if name_to_id.contains_key(name) {
                name_to_id.remove(name);
                ambiguous_names.insert(name);
            } else {
                name_to_id.insert(name, type_id);
            }
        }

        // For a new type, assuming that the full path cannot be duplicated.
        path_to_id.insert(path, type_id);
    }

    /// Returns the table registered under the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static EnumTable> {
        self.tables.get(&type_id).copied()
    }

    /// Returns the registered table of `E`.
    #[inline]
    pub fn get_type<E: EnumName>(&self) -> Option<&'static EnumTable> {
        self.get(TypeId::of::<E>())
    }

    /// Returns the table of the enum with the given qualified path.
    pub fn get_with_path(&self, path: &str) -> Option<&'static EnumTable> {
        self.get(*self.path_to_id.get(path)?)
    }

    /// Returns the table of the enum with the given bare name.
    ///
    /// Returns `None` for names shared by several registered enums;
    /// disambiguate with [`get_with_path`](Self::get_with_path).
    pub fn get_with_name(&self, name: &str) -> Option<&'static EnumTable> {
        self.get(*self.name_to_id.get(name)?)
    }

    /// Returns `true` if the given enum is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.tables.contains(&type_id)
    }

    /// Number of registered enums.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if nothing has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// An iterator over the registered tables, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &'static EnumTable)> {
        self.tables.iter().map(|(id, table)| (id, *table))
    }
}

// -----------------------------------------------------------------------------
// Auto registration

#[cfg(feature = "auto_register")]
pub use inventory;

/// A deferred registration submitted by `#[derive(EnumName)]`.
///
/// Collected through the [`inventory`] crate and drained once into
/// [`EnumRegistry::global`].
#[cfg(feature = "auto_register")]
pub struct EnumRegistration {
    register: fn(&mut EnumRegistry),
}

#[cfg(feature = "auto_register")]
impl EnumRegistration {
    /// The registration entry for `E`.
    pub const fn of<E: EnumName>() -> Self {
        fn register_one<E: EnumName>(registry: &mut EnumRegistry) {
            registry.register::<E>();
        }
        Self {
            register: register_one::<E>,
        }
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(EnumRegistration);

#[cfg(feature = "auto_register")]
impl EnumRegistry {
    /// The process-wide registry of every `#[derive(EnumName)]` enum
    /// linked into this binary.
    ///
    /// Built on first access; the cost is one scan-window probe pass
    /// per collected enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use versa_frozen::derive::EnumName;
    /// use versa_frozen::registry::EnumRegistry;
    ///
    /// #[derive(EnumName)]
    /// enum Opcode {
    ///     Halt = 3000,
    /// }
    ///
    /// let table = EnumRegistry::global().get_type::<Opcode>().unwrap();
    /// assert_eq!(table.name_of(3000), Some("Halt"));
    /// ```
    pub fn global() -> &'static Self {
        static GLOBAL: std::sync::LazyLock<EnumRegistry> = std::sync::LazyLock::new(|| {
            let mut registry = EnumRegistry::empty();
            for registration in inventory::iter::<EnumRegistration> {
                (registration.register)(&mut registry);
            }
            registry
        });
        &GLOBAL
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::EnumName;

    #[derive(EnumName)]
    enum Fruit {
        Apple = 3100,
        Pear = 3101,
    }

    mod shadow {
        use super::EnumName;

        #[derive(EnumName)]
        pub enum Fruit {
            Cherry = 3200,
        }
    }

    #[test]
    fn register_is_first_wins() {
        let mut registry = EnumRegistry::empty();
        assert!(registry.register::<Fruit>());
        assert!(!registry.register::<Fruit>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_by_type_path_and_name() {
        let mut registry = EnumRegistry::empty();
        registry.register::<Fruit>();

        let by_type = registry.get_type::<Fruit>().unwrap();
        assert_eq!(by_type.value_of("Apple"), Some(3100));

        let path = crate::nameof::<Fruit>();
        assert!(core::ptr::eq(registry.get_with_path(path).unwrap(), by_type));
        assert!(core::ptr::eq(registry.get_with_name("Fruit").unwrap(), by_type));

        assert!(registry.get_with_path("no::such::Enum").is_none());
        assert!(!registry.contains(core::any::TypeId::of::<u8>()));
    }

    #[test]
    fn duplicate_bare_names_become_ambiguous() {
        let mut registry = EnumRegistry::empty();
        registry.register::<Fruit>();
        registry.register::<shadow::Fruit>();
        assert_eq!(registry.len(), 2);

        // The bare name no longer resolves; the paths still do.
        assert!(registry.get_with_name("Fruit").is_none());
        assert!(registry.get_with_path(crate::nameof::<Fruit>()).is_some());
        assert!(
            registry
                .get_with_path(crate::nameof::<shadow::Fruit>())
                .is_some()
        );
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn derived_enums_reach_the_global_registry() {
        let registry = EnumRegistry::global();
        let table = registry.get_type::<Fruit>().unwrap();
        assert_eq!(table.name_of(3101), Some("Pear"));
        assert!(registry.get_type::<shadow::Fruit>().is_some());
    }
}
