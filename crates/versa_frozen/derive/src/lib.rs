//! See [`EnumName`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod enum_name;

// -----------------------------------------------------------------------------
// Macros

/// # Enumerator Name Derivation
///
/// `#[derive(EnumName)]` implements the `EnumName` trait, letting each
/// discriminant of the enum be asked for its fully qualified spelling
/// and making the enum eligible for `EnumTable` construction.
///
/// With the `auto_register` feature, every derived enum additionally
/// submits itself to `EnumRegistry::global()`.
///
/// ## Requirements
///
/// - The item must be an enum.
/// - All variants must be unit variants (no fields).
/// - The enum must not be generic.
///
/// Violations are compile errors pointing at the offending item.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(EnumName)]
/// enum Opcode {
///     Halt = 3000,
///     Load = 3001,
/// }
///
/// assert_eq!(Opcode::table().name_of(3001), Some("Load"));
/// ```
#[proc_macro_derive(EnumName)]
pub fn derive_enum_name(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match enum_name::expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
