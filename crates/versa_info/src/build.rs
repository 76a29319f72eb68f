//! The process-wide build descriptor.
//!
//! Every field of [`BUILD_INFO`] is a pure function of facts that are
//! fixed before the first line of this crate compiles: `cfg!` target
//! predicates and the integer codes emitted by the build script. There
//! is no mutable state, no construction order and no fallible path; a
//! toolchain this crate does not recognize simply resolves to the
//! `Unknown` sentinel of the affected enum.

use crate::version::Version;

// -----------------------------------------------------------------------------
// Descriptor enums

/// Target CPU architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Architecture {
    /// Unrecognized architecture.
    Unknown = 0,
    /// 32-bit x86.
    X86 = 1,
    /// 64-bit x86.
    Amd64 = 2,
    /// 32-bit ARM.
    Arm32 = 3,
    /// 64-bit ARM.
    Arm64 = 4,
    /// 32-bit RISC-V.
    Riscv32 = 5,
    /// 64-bit RISC-V.
    Riscv64 = 6,
    /// 32-bit PowerPC.
    Ppc32 = 7,
    /// 64-bit PowerPC.
    Ppc64 = 8,
    /// 32-bit MIPS.
    Mips32 = 9,
    /// 64-bit MIPS.
    Mips64 = 10,
    /// 64-bit SPARC.
    Sparc64 = 11,
    /// IBM z/Architecture.
    S390x = 12,
    /// 64-bit LoongArch.
    Loong64 = 13,
    /// 32-bit WebAssembly.
    Wasm32 = 14,
    /// 64-bit WebAssembly.
    Wasm64 = 15,
}

impl Architecture {
    /// Resolves the architecture of the compilation target.
    pub const fn resolve() -> Self {
        if cfg!(target_arch = "x86") {
            Self::X86
        } else if cfg!(target_arch = "x86_64") {
            Self::Amd64
        } else if cfg!(target_arch = "arm") {
            Self::Arm32
        } else if cfg!(target_arch = "aarch64") {
            Self::Arm64
        } else if cfg!(target_arch = "riscv32") {
            Self::Riscv32
        } else if cfg!(target_arch = "riscv64") {
            Self::Riscv64
        } else if cfg!(target_arch = "powerpc") {
            Self::Ppc32
        } else if cfg!(target_arch = "powerpc64") {
            Self::Ppc64
        } else if cfg!(target_arch = "mips") {
            Self::Mips32
        } else if cfg!(target_arch = "mips64") {
            Self::Mips64
        } else if cfg!(target_arch = "sparc64") {
            Self::Sparc64
        } else if cfg!(target_arch = "s390x") {
            Self::S390x
        } else if cfg!(target_arch = "loongarch64") {
            Self::Loong64
        } else if cfg!(target_arch = "wasm32") {
            Self::Wasm32
        } else if cfg!(target_arch = "wasm64") {
            Self::Wasm64
        } else {
            Self::Unknown
        }
    }
}

/// Target byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteOrder {
    /// Unrecognized byte order.
    Unknown = 0,
    /// Least significant byte first.
    Little = 1,
    /// Most significant byte first.
    Big = 2,
    /// Middle-endian word order. No Rust target uses it; the variant is
    /// kept so descriptor codes stay a closed set.
    Pdp = 3,
}

impl ByteOrder {
    /// Resolves the byte order of the compilation target.
    pub const fn resolve() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Unknown
        }
    }
}

/// Target operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum OperatingSystem {
    /// Unrecognized operating system.
    Unknown = 0,
    /// Windows.
    Windows = 1,
    /// macOS.
    Macos = 2,
    /// iOS.
    Ios = 3,
    /// Linux.
    Linux = 4,
    /// Android.
    Android = 5,
    /// The BSD family (Free/Net/Open/DragonFly).
    Bsd = 6,
    /// WebAssembly System Interface.
    Wasi = 7,
    /// Fuchsia.
    Fuchsia = 8,
}

impl OperatingSystem {
    /// Resolves the operating system of the compilation target.
    pub const fn resolve() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(any(
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "dragonfly"
        )) {
            Self::Bsd
        } else if cfg!(target_os = "wasi") {
            Self::Wasi
        } else if cfg!(target_os = "fuchsia") {
            Self::Fuchsia
        } else {
            Self::Unknown
        }
    }
}

/// Compiler identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Compiler {
    /// Unrecognized compiler.
    Unknown = 0,
    /// The reference Rust compiler.
    Rustc = 1,
    /// The GCC Rust front end.
    Gccrs = 2,
    /// The mrustc bootstrap compiler.
    Mrustc = 3,
}

impl Compiler {
    /// Maps a build-script code back to its variant.
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Rustc,
            2 => Self::Gccrs,
            3 => Self::Mrustc,
            _ => Self::Unknown,
        }
    }
}

/// Source language dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Language {
    /// Unrecognized language.
    Unknown = 0,
    /// Rust.
    Rust = 1,
}

/// Build configuration class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum BuildType {
    /// Unrecognized configuration.
    Unknown = 0,
    /// Unoptimized build with debug assertions.
    Debug = 1,
    /// Optimized build.
    Release = 2,
    /// Profiling build (declared through `VERSA_BUILD_TYPE`).
    Profile = 3,
    /// Tracing build (declared through `VERSA_BUILD_TYPE`).
    Trace = 4,
    /// Size-optimized build (`opt-level = "s"`/`"z"`).
    MinSize = 5,
}

impl BuildType {
    /// Maps a build-script code back to its variant.
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Debug,
            2 => Self::Release,
            3 => Self::Profile,
            4 => Self::Trace,
            5 => Self::MinSize,
            _ => Self::Unknown,
        }
    }
}

// -----------------------------------------------------------------------------
// BuildInfo

/// Static facts about the toolchain and platform that built this program.
///
/// The one instance that matters is [`BUILD_INFO`]; the type is public
/// so descriptors can be passed around and compared as plain values.
///
/// # Examples
///
/// ```
/// use versa_info::build::{BUILD_INFO, ByteOrder, Language};
///
/// assert_eq!(BUILD_INFO.lang, Language::Rust);
/// assert_ne!(BUILD_INFO.order, ByteOrder::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Target CPU architecture.
    pub arch: Architecture,
    /// Target byte order.
    pub order: ByteOrder,
    /// Target operating system family.
    pub os: OperatingSystem,
    /// Compiler identity.
    pub comp: Compiler,
    /// Compiler version.
    pub comp_version: Version,
    /// Source language.
    pub lang: Language,
    /// Language version (the Rust edition year).
    pub lang_version: u64,
    /// Build configuration class.
    pub build: BuildType,
}

/// The build descriptor of this compilation.
///
/// Computed entirely at compile time; reading it costs nothing.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    arch: Architecture::resolve(),
    order: ByteOrder::resolve(),
    os: OperatingSystem::resolve(),
    comp: Compiler::from_code(parse_u16(env!("VERSA_COMPILER"))),
    comp_version: Version::new(
        parse_u16(env!("VERSA_COMP_VERSION_MAJOR")),
        parse_u16(env!("VERSA_COMP_VERSION_MINOR")),
        parse_u16(env!("VERSA_COMP_VERSION_PATCH")),
        0,
    ),
    lang: Language::Rust,
    lang_version: 2024,
    build: BuildType::from_code(parse_u16(env!("VERSA_BUILD_TYPE"))),
};

/// Decimal parse for build-script codes. The script only ever emits
/// digits, so a stray byte is a build-system bug worth aborting on.
const fn parse_u16(s: &str) -> u16 {
    let bytes = s.as_bytes();
    let mut value = 0u16;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "malformed build-script code");
        value = value * 10 + (bytes[i] - b'0') as u16;
        i += 1;
    }
    value
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_resolved() {
        assert_eq!(BUILD_INFO.lang, Language::Rust);
        assert_eq!(BUILD_INFO.lang_version, 2024);
        assert_ne!(BUILD_INFO.order, ByteOrder::Unknown);
        assert_ne!(BUILD_INFO.build, BuildType::Unknown);
    }

    #[test]
    fn byte_order_matches_target() {
        if cfg!(target_endian = "little") {
            assert_eq!(BUILD_INFO.order, ByteOrder::Little);
        } else {
            assert_eq!(BUILD_INFO.order, ByteOrder::Big);
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn architecture_matches_target() {
        assert_eq!(BUILD_INFO.arch, Architecture::Amd64);
    }

    #[test]
    fn compiler_version_is_plausible() {
        // Any toolchain able to build this crate reports at least 1.x.
        assert!(BUILD_INFO.comp_version.major >= 1);
    }

    #[test]
    fn unknown_sentinels_are_zero() {
        assert_eq!(Architecture::Unknown as u32, 0);
        assert_eq!(ByteOrder::Unknown as u8, 0);
        assert_eq!(OperatingSystem::Unknown as u16, 0);
        assert_eq!(Compiler::Unknown as u16, 0);
        assert_eq!(Language::Unknown as u8, 0);
        assert_eq!(BuildType::Unknown as u16, 0);
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(BuildType::from_code(5), BuildType::MinSize);
        assert_eq!(BuildType::from_code(99), BuildType::Unknown);
        assert_eq!(Compiler::from_code(1), Compiler::Rustc);
        assert_eq!(Compiler::from_code(42), Compiler::Unknown);
    }

    #[test]
    fn parse_u16_reads_codes() {
        assert_eq!(parse_u16("0"), 0);
        assert_eq!(parse_u16("92"), 92);
        assert_eq!(parse_u16("65535"), 65535);
    }
}
