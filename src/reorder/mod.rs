// src/reorder/mod.rs
//! Reordering primitives
//!
//! Free functions applying an [`Ordering`] policy to plain values. Every
//! function is generic over:
//!
//! - `O` - the policy ([`Keep`](crate::ordering::Keep), [`Reverse`](crate::ordering::Reverse)
//!   or one of the named aliases)
//! - `G` - the granule, the element size at which reversal happens (`u8` for a
//!   full byte swap, wider types for mixed orders)
//! - `T` - the value type
//!
//! A granule that does not evenly divide `T` is rejected when the function is
//! instantiated.
//!
//! # Examples
//!
//! ```
//! use ordered_types::ordering::Reverse;
//! use ordered_types::reorder;
//!
//! // Full byte swap
//! assert_eq!(reorder::reorder_copy::<Reverse, u8, u32>(0x1122_3344), 0x4433_2211);
//!
//! // Swap the 16-bit halves, keep the bytes inside each half
//! let bytes = [0xA_u8, 0xB, 0xC, 0xD];
//! let swapped = reorder::reorder_copy::<Reverse, u16, [u8; 4]>(bytes);
//! assert_eq!(swapped, [0xC, 0xD, 0xA, 0xB]);
//! ```

pub(crate) mod granule;

use bytemuck::Pod;
use tracing::debug;

use crate::error::{OrderError, Result};
use crate::ordering::Ordering;

/// Apply policy `O` to `value` in place.
///
/// With an identity policy this touches nothing.
#[inline]
pub fn reorder<O: Ordering, G: Pod, T: Pod>(value: &mut T) {
    O::reorder::<G, T>(value);
}

/// Write `src` with policy `O` applied into `dst`; `src` is left untouched.
///
/// With an identity policy `dst` receives a bitwise copy of `src`.
#[inline]
pub fn reorder_into<O: Ordering, G: Pod, T: Pod>(dst: &mut T, src: &T) {
    O::reorder_into::<G, T>(dst, src);
}

/// Return a copy of `value` with policy `O` applied.
#[inline]
#[must_use]
pub fn reorder_copy<O: Ordering, G: Pod, T: Pod>(mut value: T) -> T {
    O::reorder::<G, T>(&mut value);
    value
}

/// Whether policy `O` leaves values untouched on this host.
#[inline]
pub const fn is_native<O: Ordering>() -> bool {
    O::IS_NATIVE
}

/// Apply policy `O` to every value of a slice in place.
pub fn reorder_slice<O: Ordering, G: Pod, T: Pod>(values: &mut [T]) {
    for value in values.iter_mut() {
        O::reorder::<G, T>(value);
    }
}

/// Reverse the order of `granule`-sized groups in a raw byte buffer.
///
/// This is the runtime counterpart of [`reorder`] for callers whose group
/// size is only known at runtime.
///
/// # Errors
///
/// Returns [`OrderError::ZeroGranule`] for a granule of zero and
/// [`OrderError::Granularity`] when `bytes.len()` is not a multiple of
/// `granule`. The buffer is left untouched in both cases.
///
/// # Example
///
/// ```
/// use ordered_types::reorder::reverse_granules;
///
/// let mut bytes = [1u8, 2, 3, 4, 5, 6];
/// reverse_granules(&mut bytes, 2).unwrap();
/// assert_eq!(bytes, [5, 6, 3, 4, 1, 2]);
///
/// assert!(reverse_granules(&mut bytes, 4).is_err());
/// ```
pub fn reverse_granules(bytes: &mut [u8], granule: usize) -> Result<()> {
    if granule == 0 {
        debug!(len = bytes.len(), "rejecting zero granule");
        return Err(OrderError::ZeroGranule);
    }

    if bytes.len() % granule != 0 {
        debug!(len = bytes.len(), granule, "rejecting uneven granularity");
        return Err(OrderError::Granularity {
            len: bytes.len(),
            granule,
        });
    }

    granule::reverse_groups(bytes, granule);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{BigEndian, Keep, LittleEndian, NetworkEndian, Reverse};

    #[test]
    fn test_keep_is_noop() {
        let mut value = 0x0102_0304_0506_0708u64;
        reorder::<Keep, u8, _>(&mut value);
        assert_eq!(value, 0x0102_0304_0506_0708);
        assert_eq!(reorder_copy::<Keep, u8, _>(-17i32), -17);
    }

    #[test]
    fn test_reverse_matches_swap_bytes() {
        assert_eq!(reorder_copy::<Reverse, u8, u16>(0xABCD), 0xABCDu16.swap_bytes());
        assert_eq!(reorder_copy::<Reverse, u8, u64>(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(
            reorder_copy::<Reverse, u8, i128>(-2),
            (-2i128).swap_bytes()
        );
    }

    #[test]
    fn test_reverse_round_trip() {
        let original = 0xCAFE_F00Du32;
        let mut value = original;

        reorder::<Reverse, u8, _>(&mut value);
        assert_ne!(value, original);
        reorder::<Reverse, u8, _>(&mut value);
        assert_eq!(value, original);
    }

    #[test]
    fn test_single_byte_unchanged() {
        for byte in 0..=u8::MAX {
            assert_eq!(reorder_copy::<Reverse, u8, u8>(byte), byte);
            assert_eq!(reorder_copy::<Keep, u8, u8>(byte), byte);
        }
    }

    #[test]
    fn test_mixed_granularity() {
        let value = [0xA_u8, 0xB, 0xC, 0xD];
        assert_eq!(reorder_copy::<Reverse, u16, _>(value), [0xC, 0xD, 0xA, 0xB]);
        assert_eq!(reorder_copy::<Reverse, u8, _>(value), [0xD, 0xC, 0xB, 0xA]);
        assert_eq!(reorder_copy::<Reverse, u32, _>(value), value);
    }

    #[test]
    fn test_reorder_into_copies() {
        let src = 0x1234_5678u32;
        let mut dst = 0u32;

        reorder_into::<Keep, u8, _>(&mut dst, &src);
        assert_eq!(dst, src);

        reorder_into::<Reverse, u8, _>(&mut dst, &src);
        assert_eq!(dst, 0x7856_3412);
        assert_eq!(src, 0x1234_5678);
    }

    #[test]
    fn test_is_native() {
        assert!(is_native::<Keep>());
        assert!(!is_native::<Reverse>());
        assert_eq!(is_native::<LittleEndian>(), cfg!(target_endian = "little"));
        assert_eq!(is_native::<BigEndian>(), cfg!(target_endian = "big"));
        assert_eq!(is_native::<NetworkEndian>(), is_native::<BigEndian>());
    }

    #[test]
    fn test_reorder_slice() {
        let mut values = [0x0102u16, 0x0304, 0x0506];
        reorder_slice::<Reverse, u8, _>(&mut values);
        assert_eq!(values, [0x0201, 0x0403, 0x0605]);

        reorder_slice::<Keep, u8, _>(&mut values);
        assert_eq!(values, [0x0201, 0x0403, 0x0605]);
    }

    #[test]
    fn test_reverse_granules_errors() {
        let mut bytes = [1u8, 2, 3];

        assert_eq!(reverse_granules(&mut bytes, 0), Err(OrderError::ZeroGranule));
        assert_eq!(
            reverse_granules(&mut bytes, 2),
            Err(OrderError::Granularity { len: 3, granule: 2 })
        );
        assert_eq!(bytes, [1, 2, 3]);

        reverse_granules(&mut bytes, 1).unwrap();
        assert_eq!(bytes, [3, 2, 1]);
    }

    #[test]
    fn test_reverse_granules_empty() {
        let mut bytes: [u8; 0] = [];
        assert!(reverse_granules(&mut bytes, 4).is_ok());
    }
}
