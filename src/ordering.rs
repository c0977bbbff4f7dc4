// src/ordering.rs
//! Ordering policy tags.
//!
//! There are exactly two policies: [`Keep`] leaves a value's storage as the
//! host laid it out, [`Reverse`] flips the order of its granules. The named
//! orders ([`BigEndian`], [`LittleEndian`], [`NetworkEndian`]) are type
//! aliases resolved to one of the two when the crate is compiled, so picking
//! a policy never costs a runtime branch.
//!
//! ```
//! use ordered_types::ordering::{BigEndian, NetworkEndian, Ordering};
//!
//! assert_eq!(<BigEndian as Ordering>::IS_NATIVE, <NetworkEndian as Ordering>::IS_NATIVE);
//! ```

use std::fmt;
use std::mem::size_of;

use bytemuck::Pod;

use crate::host::Endian;
use crate::reorder::granule::{copy_groups_reversed, reverse_groups, Granularity};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Keep {}
    impl Sealed for super::Reverse {}
}

/// A compile-time byte ordering policy.
///
/// Sealed: [`Keep`] and [`Reverse`] are the only implementations.
pub trait Ordering:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// `true` when values under this policy are stored exactly as the host
    /// lays them out.
    const IS_NATIVE: bool;

    /// The concrete order values end up stored in on this host.
    const ENDIAN: Endian;

    /// Matching `byteorder` type, for reading or writing values in this
    /// order through `byteorder::ReadBytesExt` / `WriteBytesExt`.
    type ByteOrder: byteorder::ByteOrder;

    /// Apply the policy to `value` in place, at granularity `G`.
    fn reorder<G: Pod, T: Pod>(value: &mut T);

    /// Write `src` with the policy applied into `dst`, at granularity `G`.
    fn reorder_into<G: Pod, T: Pod>(dst: &mut T, src: &T);
}

/// Identity policy: storage keeps the host's native order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Keep;

/// Reversal policy: storage holds the granules in reverse order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl Ordering for Keep {
    const IS_NATIVE: bool = true;
    const ENDIAN: Endian = Endian::NATIVE;

    type ByteOrder = byteorder::NativeEndian;

    #[inline(always)]
    fn reorder<G: Pod, T: Pod>(_value: &mut T) {
        let () = Granularity::<T, G>::CHECK;
    }

    #[inline(always)]
    fn reorder_into<G: Pod, T: Pod>(dst: &mut T, src: &T) {
        let () = Granularity::<T, G>::CHECK;
        *dst = *src;
    }
}

impl Ordering for Reverse {
    const IS_NATIVE: bool = false;
    const ENDIAN: Endian = Endian::NATIVE.opposite();

    #[cfg(target_endian = "big")]
    type ByteOrder = byteorder::LittleEndian;
    #[cfg(not(target_endian = "big"))]
    type ByteOrder = byteorder::BigEndian;

    #[inline]
    fn reorder<G: Pod, T: Pod>(value: &mut T) {
        let () = Granularity::<T, G>::CHECK;
        reverse_groups(bytemuck::bytes_of_mut(value), size_of::<G>());
    }

    #[inline]
    fn reorder_into<G: Pod, T: Pod>(dst: &mut T, src: &T) {
        let () = Granularity::<T, G>::CHECK;
        copy_groups_reversed(
            bytemuck::bytes_of_mut(dst),
            bytemuck::bytes_of(src),
            size_of::<G>(),
        );
    }
}

#[cfg(target_endian = "big")]
mod resolved {
    pub type BigEndian = super::Keep;
    pub type LittleEndian = super::Reverse;
}

#[cfg(not(target_endian = "big"))]
mod resolved {
    pub type BigEndian = super::Reverse;
    pub type LittleEndian = super::Keep;
}

/// Most significant byte first. [`Keep`] on big-endian hosts, [`Reverse`] elsewhere.
pub type BigEndian = resolved::BigEndian;

/// Least significant byte first. [`Keep`] on little-endian hosts, [`Reverse`] elsewhere.
pub type LittleEndian = resolved::LittleEndian;

/// Wire protocol order, always the same as [`BigEndian`].
pub type NetworkEndian = BigEndian;

/// The host's own order.
pub type NativeEndian = Keep;
