#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive emits `::versa_frozen` paths; this alias makes them resolve
// inside the crate's own tests and doctests as well.
extern crate self as versa_frozen;

// -----------------------------------------------------------------------------
// Modules

pub mod cell;
pub mod enums;
pub mod hash;
pub mod nameof;
pub mod registry;
pub mod sig;

// -----------------------------------------------------------------------------
// Top-level exports

pub use enums::{EnumName, EnumTable};
pub use nameof::{const_nameof, nameof, nameof_short, vnameof, vnameof_short};
pub use versa_frozen_derive as derive;
// The derive macro lives in the macro namespace, next to the trait.
pub use versa_frozen_derive::EnumName;
