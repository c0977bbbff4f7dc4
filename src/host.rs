// src/host.rs
//! Host byte order resolution.
//!
//! The host order is taken from the compiler's `target_endian` configuration,
//! which rustc defines for every target. It is fixed for the lifetime of a
//! build and never consulted at runtime.

use std::fmt;

/// A concrete byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte at the lowest address.
    Little,
    /// Most significant byte at the lowest address.
    Big,
}

impl Endian {
    /// Byte order of the machine this crate was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Byte order of the machine this crate was compiled for.
    ///
    /// Little-endian is also the fallback should a target ever leave
    /// `target_endian` unspecified.
    #[cfg(not(target_endian = "big"))]
    pub const NATIVE: Endian = Endian::Little;

    /// Conventional order of wire protocols.
    pub const NETWORK: Endian = Endian::Big;

    /// Same as [`Endian::NATIVE`], callable as a function.
    pub const fn native() -> Self {
        Self::NATIVE
    }

    pub const fn opposite(self) -> Self {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big)
        )
    }

    /// Human-readable name, e.g. `"big-endian"`.
    pub fn name(&self) -> &'static str {
        match self {
            Endian::Little => "little-endian",
            Endian::Big => "big-endian",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
