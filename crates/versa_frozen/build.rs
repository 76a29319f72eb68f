//! Resolves the enum scan-window bounds. The defaults are the reference
//! configuration; build pipelines may retune the window through the
//! `VERSA_ENUM_*` environment variables.

use std::env;

const DEFAULT_LOWER: i64 = 3000;
const DEFAULT_UPPER: i64 = 3600;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VERSA_ENUM_LOWER_BOUND");
    println!("cargo:rerun-if-env-changed=VERSA_ENUM_UPPER_BOUND");

    let lower = read("VERSA_ENUM_LOWER_BOUND", DEFAULT_LOWER);
    let upper = read("VERSA_ENUM_UPPER_BOUND", DEFAULT_UPPER);

    let (lower, upper) = if upper <= lower {
        println!("cargo:warning=ignoring inverted enum scan window [{lower}, {upper})");
        (DEFAULT_LOWER, DEFAULT_UPPER)
    } else {
        (lower, upper)
    };

    println!("cargo:rustc-env=VERSA_ENUM_LOWER_BOUND={lower}");
    println!("cargo:rustc-env=VERSA_ENUM_UPPER_BOUND={upper}");
}

fn read(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
