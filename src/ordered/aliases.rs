// src/ordered/aliases.rs
//! Ready-made wrappers for every primitive number in big, little and network order.
//!
//! Stable Rust has no extended-precision float (`long double`), so there is no
//! alias family for one. `u128`/`i128` are the widest predefined types; wrap an
//! opaque byte array such as `Ordered<[u8; 10], BigEndian>` for 80-bit values.

use bytemuck::Pod;

use super::Ordered;
use crate::ordering::{BigEndian, LittleEndian, NetworkEndian, Ordering};

macro_rules! declare_ordered {
    ($order:ident, $desc:literal => $($name:ident = $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($ty), "` stored in ", $desc, " order.")]
            pub type $name = Ordered<$ty, $order>;
        )+
    };
}

declare_ordered!(BigEndian, "big-endian" =>
    BigU8 = u8,
    BigI8 = i8,
    BigU16 = u16,
    BigI16 = i16,
    BigU32 = u32,
    BigI32 = i32,
    BigU64 = u64,
    BigI64 = i64,
    BigU128 = u128,
    BigI128 = i128,
    BigUsize = usize,
    BigIsize = isize,
    BigF32 = f32,
    BigF64 = f64,
);

declare_ordered!(LittleEndian, "little-endian" =>
    LittleU8 = u8,
    LittleI8 = i8,
    LittleU16 = u16,
    LittleI16 = i16,
    LittleU32 = u32,
    LittleI32 = i32,
    LittleU64 = u64,
    LittleI64 = i64,
    LittleU128 = u128,
    LittleI128 = i128,
    LittleUsize = usize,
    LittleIsize = isize,
    LittleF32 = f32,
    LittleF64 = f64,
);

declare_ordered!(NetworkEndian, "network (big-endian)" =>
    NetU8 = u8,
    NetI8 = i8,
    NetU16 = u16,
    NetI16 = i16,
    NetU32 = u32,
    NetI32 = i32,
    NetU64 = u64,
    NetI64 = i64,
    NetU128 = u128,
    NetI128 = i128,
    NetUsize = usize,
    NetIsize = isize,
    NetF32 = f32,
    NetF64 = f64,
);

macro_rules! impl_into_native {
    ($($ty:ty),+) => {
        $(
            impl<O: Ordering, G: Pod> From<Ordered<$ty, O, G>> for $ty {
                #[inline]
                fn from(value: Ordered<$ty, O, G>) -> Self {
                    value.get()
                }
            }
        )+
    };
}

impl_into_native!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);
