// src/ordered/mod.rs
//! Ordered value wrapper
//!
//! [`Ordered<T, O, G>`] holds one `T` whose storage is always in the order
//! declared by `O`. Writes go through [`Ordered::new`] / [`Ordered::set`],
//! reads through [`Ordered::get`]; both apply the policy so callers only ever
//! see native values.
//!
//! Instead of converting every field of a header by hand:
//!
//! ```
//! struct Header {
//!     magic: u32,
//!     length: u16,
//! }
//!
//! fn load(raw: &[u8; 6]) -> Header {
//!     Header {
//!         magic: u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]),
//!         length: u16::from_le_bytes([raw[4], raw[5]]),
//!     }
//! }
//! # let header = load(&[0, 0, 0, 1, 2, 0]);
//! # assert_eq!(header.magic, 1);
//! # assert_eq!(header.length, 2);
//! ```
//!
//! declare the order once, in the field type:
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//! use ordered_types::{BigU32, LittleU16};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C, packed)]
//! struct Header {
//!     magic: BigU32,
//!     length: LittleU16,
//! }
//!
//! let raw = [0u8, 0, 0, 1, 2, 0];
//! let header: Header = bytemuck::pod_read_unaligned(&raw);
//! let (magic, length) = (header.magic, header.length);
//! assert_eq!(magic.get(), 1);
//! assert_eq!(length.get(), 2);
//! ```
//!
//! The drawback is that a non-native field is reordered on every access
//! rather than once at load time.

mod aliases;
mod impls;

pub use aliases::*;

use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr;

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::error::{OrderError, Result};
use crate::host::Endian;
use crate::ordering::Ordering;
use crate::reorder::{self, granule::Granularity};

/// A `T` stored in the order declared by policy `O`, reordered at granularity `G`.
///
/// `G` defaults to `u8`, giving plain big/little-endian storage. A wider
/// granule reverses groups of bytes instead, which describes mixed orders:
///
/// ```
/// use ordered_types::ordering::Reverse;
/// use ordered_types::Ordered;
///
/// let halves = Ordered::<[u8; 4], Reverse, u16>::new([1, 2, 3, 4]);
/// assert_eq!(halves.raw(), [3, 4, 1, 2]);
/// assert_eq!(halves.get(), [1, 2, 3, 4]);
/// ```
///
/// The granule must evenly divide the value, otherwise the code does not build:
///
/// ```compile_fail
/// use ordered_types::ordering::Reverse;
/// use ordered_types::Ordered;
///
/// let odd = Ordered::<u32, Reverse, [u8; 3]>::new(7);
/// ```
///
/// The check runs when the generic code is instantiated, so `cargo build`
/// reports it but `cargo check` does not.
///
/// The wrapper is `#[repr(transparent)]` over `T` and implements
/// [`Pod`], so it can be used as a field of structures mapped straight onto
/// byte buffers.
#[repr(transparent)]
pub struct Ordered<T, O, G = u8> {
    raw: T,
    _order: PhantomData<fn() -> (O, G)>,
}

impl<T: Pod, O: Ordering, G: Pod> Ordered<T, O, G> {
    /// `true` when storage is in host order and reads cost nothing.
    pub const IS_NATIVE: bool = O::IS_NATIVE;

    /// Order the storage ends up in on this host.
    pub const ENDIAN: Endian = O::ENDIAN;

    /// Number of granules making up one value.
    pub const GRANULES: usize = Granularity::<T, G>::COUNT;

    /// Wrap a native value, storing it in the declared order.
    #[inline]
    pub fn new(value: T) -> Self {
        let mut raw = T::zeroed();
        reorder::reorder_into::<O, G, T>(&mut raw, &value);
        Self::from_raw(raw)
    }

    /// Wrap a value that is already in the declared order, e.g. freshly
    /// loaded from a file or socket.
    #[inline]
    pub const fn from_raw(raw: T) -> Self {
        let () = Granularity::<T, G>::CHECK;
        Self {
            raw,
            _order: PhantomData,
        }
    }

    /// Read the value in native order. Storage is not modified.
    #[inline]
    #[must_use]
    pub fn get(&self) -> T {
        reorder::reorder_copy::<O, G, T>(self.raw)
    }

    /// Store a native value, converting it to the declared order.
    #[inline]
    pub fn set(&mut self, value: T) {
        reorder::reorder_into::<O, G, T>(&mut self.raw, &value);
    }

    /// Copy the storage of another wrapper of the same type verbatim.
    ///
    /// Both sides share the declared order, so no reordering happens.
    /// Assigning a wrapper to itself leaves it unchanged.
    #[inline]
    pub fn assign(&mut self, other: &Self) {
        if !ptr::eq(&*self, other) {
            self.raw = other.raw;
        }
    }

    /// Declared-order storage, without conversion.
    #[inline]
    pub fn raw(&self) -> T {
        self.raw
    }

    /// Overwrite storage with a value already in the declared order.
    #[inline]
    pub fn set_raw(&mut self, raw: T) {
        self.raw = raw;
    }

    #[inline]
    pub const fn is_native() -> bool {
        O::IS_NATIVE
    }

    #[inline]
    pub const fn endian() -> Endian {
        O::ENDIAN
    }

    /// The declared-order bytes of the stored value.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.raw)
    }

    /// Read a wrapper from declared-order bytes. `bytes` need not be aligned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::SizeMismatch`] unless `bytes` is exactly
    /// `size_of::<T>()` long.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_types::NetU16;
    ///
    /// let port = NetU16::try_from_bytes(&[0x1F, 0x90]).unwrap();
    /// assert_eq!(port.get(), 8080);
    /// assert!(NetU16::try_from_bytes(&[0x1F]).is_err());
    /// ```
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let expected = size_of::<T>();
        if bytes.len() != expected {
            debug!(expected, found = bytes.len(), "rejecting ordered value bytes");
            return Err(OrderError::SizeMismatch {
                expected,
                found: bytes.len(),
            });
        }

        let raw = bytemuck::try_pod_read_unaligned::<T>(bytes).map_err(|_| {
            OrderError::SizeMismatch {
                expected,
                found: bytes.len(),
            }
        })?;
        Ok(Self::from_raw(raw))
    }

    /// Read, transform and store back in one step.
    ///
    /// ```
    /// use ordered_types::BigU32;
    ///
    /// let mut counter = BigU32::new(41);
    /// counter.update(|v| v + 1);
    /// assert_eq!(counter.get(), 42);
    /// ```
    #[inline]
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let value = f(self.get());
        self.set(value);
    }

    /// Re-declare the value in another order.
    #[inline]
    pub fn convert<P: Ordering>(self) -> Ordered<T, P, G> {
        Ordered::new(self.get())
    }
}

impl<T: Copy, O, G> Clone for Ordered<T, O, G> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, O, G> Copy for Ordered<T, O, G> {}

impl<T: Pod, O: Ordering, G: Pod> Default for Ordered<T, O, G> {
    fn default() -> Self {
        Self::new(T::zeroed())
    }
}

impl<T: Pod, O: Ordering, G: Pod> From<T> for Ordered<T, O, G> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// SAFETY: `#[repr(transparent)]` over a `Pod` value; the marker is zero-sized.
unsafe impl<T: Pod, O: Ordering, G: Pod> Zeroable for Ordered<T, O, G> {}
unsafe impl<T: Pod, O: Ordering, G: Pod> Pod for Ordered<T, O, G> {}
