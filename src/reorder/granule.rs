// src/reorder/granule.rs
use std::marker::PhantomData;
use std::mem::size_of;

/// Compile-time guard pairing a value type `T` with a granule type `G`.
///
/// Referencing [`Granularity::CHECK`] from a generic function turns a granule
/// that does not evenly divide the value into a build error at the point of
/// instantiation.
pub(crate) struct Granularity<T, G>(PhantomData<(T, G)>);

impl<T, G> Granularity<T, G> {
    pub(crate) const CHECK: () = assert!(
        size_of::<G>() != 0 && size_of::<T>() % size_of::<G>() == 0,
        "value size must be a non-zero multiple of the granule size"
    );

    /// Number of granules composing one value.
    pub(crate) const COUNT: usize = {
        let () = Self::CHECK;
        size_of::<T>() / size_of::<G>()
    };
}

/// Reverse the order of `granule`-sized groups in `bytes`, leaving the bytes
/// inside each group untouched.
///
/// Caller guarantees `granule != 0` and `bytes.len() % granule == 0`.
#[inline]
pub(crate) fn reverse_groups(bytes: &mut [u8], granule: usize) {
    debug_assert!(granule != 0 && bytes.len() % granule == 0);

    bytes.reverse();
    if granule > 1 {
        // The full flip also reversed each group internally; undo that.
        for chunk in bytes.chunks_exact_mut(granule) {
            chunk.reverse();
        }
    }
}

/// Write the groups of `src` into `dst` in reverse group order.
#[inline]
pub(crate) fn copy_groups_reversed(dst: &mut [u8], src: &[u8], granule: usize) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(granule != 0 && src.len() % granule == 0);

    for (out, group) in dst
        .chunks_exact_mut(granule)
        .zip(src.chunks_exact(granule).rev())
    {
        out.copy_from_slice(group);
    }
}
