// src/lib.rs
//! # ordered-types
//!
//! Byte order as a property of a field's *type*. A field declared as
//! [`BigU32`] is always stored big-endian and always reads back as a native
//! `u32`, so mapping a file header or protocol frame onto memory no longer
//! needs a hand-written conversion per field.
//!
//! ## Layers
//!
//! - [`ordering`] - the two policies, [`Keep`](ordering::Keep) and
//!   [`Reverse`](ordering::Reverse), and the named orders resolved to them at
//!   compile time
//! - [`reorder`] - the primitives applying a policy to a value, in place or by copy
//! - [`ordered`] - the [`Ordered`] wrapper and its predefined aliases
//!
//! ## Quick Start
//!
//! ```rust
//! use ordered_types::*;
//!
//! let mut length = BigU32::new(0x1234_5678);
//! assert_eq!(length.as_bytes(), &[0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(length.get(), 0x1234_5678);
//!
//! length.set(16);
//! assert_eq!(length.as_bytes(), &[0, 0, 0, 16]);
//!
//! // Little-endian storage is free on little-endian hosts
//! assert_eq!(LittleU32::is_native(), cfg!(target_endian = "little"));
//! ```
//!
//! ## Host order
//!
//! The host order comes from the compiler's `target_endian` setting and is
//! fixed per build; see [`host::Endian::NATIVE`].

// Modules
pub mod error;
pub mod host;
pub mod ordering;
pub mod reorder;
pub mod ordered;

// Re-export commonly used types at the crate root for convenience
pub use error::{OrderError, Result};
pub use host::Endian;

pub use ordering::{
    BigEndian,
    Keep,
    LittleEndian,
    NativeEndian,
    NetworkEndian,
    Ordering,
    Reverse,
};

pub use ordered::*;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use ordered_types::prelude::*;
    //! ```

    pub use crate::error::{OrderError, Result};
    pub use crate::ordered::Ordered;
    pub use crate::ordering::{BigEndian, LittleEndian, NetworkEndian, Ordering};
    pub use crate::reorder::{is_native, reorder, reorder_copy, reorder_into};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
