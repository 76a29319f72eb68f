#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod build;
pub mod version;

// -----------------------------------------------------------------------------
// Top-level exports

pub use build::{BUILD_INFO, BuildInfo};
pub use version::{Version, VersionInfo};
