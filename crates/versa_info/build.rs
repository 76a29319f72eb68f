//! Translates toolchain facts into the fixed integer codes consumed by
//! `src/build.rs` through `env!`. The library core never inspects the
//! toolchain itself; it only reads these already-resolved constants.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VERSA_BUILD_TYPE");

    let banner = compiler_banner();
    let (compiler, (major, minor, patch)) = classify(&banner);

    println!("cargo:rustc-env=VERSA_COMPILER={compiler}");
    println!("cargo:rustc-env=VERSA_COMP_VERSION_MAJOR={major}");
    println!("cargo:rustc-env=VERSA_COMP_VERSION_MINOR={minor}");
    println!("cargo:rustc-env=VERSA_COMP_VERSION_PATCH={patch}");

    println!("cargo:rustc-env=VERSA_BUILD_TYPE={}", build_type());
}

/// Output of `$RUSTC --version`, e.g. `rustc 1.92.0 (abcdef 2025-11-01)`.
fn compiler_banner() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .unwrap_or_default()
}

/// Compiler identity code plus semantic version components.
///
/// Unrecognized banners resolve to code 0 (`Compiler::Unknown`) with a
/// zero version, never an error.
fn classify(banner: &str) -> (u16, (u16, u16, u16)) {
    let compiler = if banner.contains("gccrs") {
        2
    } else if banner.contains("mrustc") {
        3
    } else if banner.starts_with("rustc") {
        1
    } else {
        0
    };

    let semver = banner.split_whitespace().nth(1).unwrap_or("");
    let mut parts = semver
        .split(['.', '-', '+'])
        .map(|p| p.parse::<u16>().unwrap_or(0));
    let major = parts.next().unwrap_or(0);
    let minor = parts.next().unwrap_or(0);
    let patch = parts.next().unwrap_or(0);

    (compiler, (major, minor, patch))
}

/// Build configuration class code.
///
/// Profiling and tracing builds cannot be told apart from a plain
/// release build with cargo's environment alone, so pipelines that run
/// them declare the class through `VERSA_BUILD_TYPE`.
fn build_type() -> u16 {
    if let Ok(class) = env::var("VERSA_BUILD_TYPE") {
        return match class.as_str() {
            "debug" => 1,
            "release" => 2,
            "profile" => 3,
            "trace" => 4,
            "min-size" => 5,
            _ => 0,
        };
    }

    let opt = env::var("OPT_LEVEL").unwrap_or_default();
    if opt == "s" || opt == "z" {
        return 5;
    }
    match env::var("PROFILE").as_deref() {
        Ok("debug") => 1,
        Ok("release") => 2,
        _ => 0,
    }
}
