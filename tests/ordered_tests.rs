// tests/ordered_tests.rs
use ordered_types::ordering::{Keep, Reverse};
use ordered_types::reorder::{is_native, reorder_copy};
use ordered_types::*;

macro_rules! assert_native_flags {
    ($($big:ident, $little:ident, $net:ident;)+) => {
        $(
            assert_eq!($big::is_native(), cfg!(target_endian = "big"), stringify!($big));
            assert_eq!($little::is_native(), cfg!(target_endian = "little"), stringify!($little));
            assert_eq!($net::is_native(), $big::is_native(), stringify!($net));
            assert_ne!($big::is_native(), $little::is_native());
        )+
    };
}

#[test]
fn test_is_native_for_every_predefined_type() {
    assert_native_flags! {
        BigU8, LittleU8, NetU8;
        BigI8, LittleI8, NetI8;
        BigU16, LittleU16, NetU16;
        BigI16, LittleI16, NetI16;
        BigU32, LittleU32, NetU32;
        BigI32, LittleI32, NetI32;
        BigU64, LittleU64, NetU64;
        BigI64, LittleI64, NetI64;
        BigU128, LittleU128, NetU128;
        BigI128, LittleI128, NetI128;
        BigUsize, LittleUsize, NetUsize;
        BigIsize, LittleIsize, NetIsize;
        BigF32, LittleF32, NetF32;
        BigF64, LittleF64, NetF64;
    }
}

#[test]
fn test_u32_scenario() {
    let big = BigU32::new(0x1234_5678);
    let little = LittleU32::new(0x1234_5678);

    // Declared order is visible in the bytes regardless of host
    assert_eq!(big.as_bytes(), &[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(little.as_bytes(), &[0x78, 0x56, 0x34, 0x12]);

    assert_eq!(big.get(), 0x1234_5678);
    assert_eq!(little.get(), 0x1234_5678);

    #[cfg(target_endian = "little")]
    {
        assert_eq!(big.raw(), 0x7856_3412);
        assert_eq!(little.raw(), 0x1234_5678);
        assert!(LittleU32::is_native());
    }
}

#[test]
fn test_mixed_granularity_scenario() {
    let bytes = [0xA_u8, 0xB, 0xC, 0xD];

    let halves = Ordered::<[u8; 4], Reverse, u16>::new(bytes);
    assert_eq!(halves.raw(), [0xC, 0xD, 0xA, 0xB]);
    assert_eq!(halves.get(), bytes);

    let full = Ordered::<[u8; 4], Reverse>::new(bytes);
    assert_eq!(full.raw(), [0xD, 0xC, 0xB, 0xA]);
}

#[test]
fn test_pdp_style_word_order() {
    // Swap the two 16-bit words, keep the bytes inside each word
    let value = 0x0A0B_0C0Du32;
    let words = Ordered::<u32, Reverse, u16>::new(value);

    let raw = words.raw();
    assert_eq!(raw, value.rotate_left(16));
    assert_eq!(words.get(), value);
}

#[test]
fn test_keep_wrapper_is_transparent() {
    let value = Ordered::<f64, Keep>::new(std::f64::consts::PI);
    assert_eq!(value.raw().to_bits(), std::f64::consts::PI.to_bits());
    assert!(is_native::<Keep>());
}

#[test]
fn test_float_bits_swapped() {
    let value = 1.0f32;
    let stored = Ordered::<f32, Reverse>::new(value);
    assert_eq!(stored.raw().to_bits(), value.to_bits().swap_bytes());
    assert_eq!(stored.get(), 1.0);
}

#[test]
fn test_assignment_variants() {
    let mut field = NetU16::default();
    assert_eq!(field.get(), 0);

    field.set(8080);
    assert_eq!(field.as_bytes(), &[0x1F, 0x90]);

    let other = NetU16::from(22u16);
    field.assign(&other);
    assert_eq!(field.raw(), other.raw());

    let copy = field;
    assert_eq!(copy.get(), 22);

    field.set_raw(reorder_copy::<NetworkEndian, u8, u16>(443));
    assert_eq!(field.get(), 443);
    assert_eq!(copy.get(), 22);
}

#[test]
fn test_try_from_bytes_unaligned() {
    let buffer = [0xFFu8, 0x00, 0x01, 0x00, 0x00];
    let value = BigU32::try_from_bytes(&buffer[1..]).unwrap();
    assert_eq!(value.get(), 0x0001_0000);

    match BigU32::try_from_bytes(&buffer) {
        Err(OrderError::SizeMismatch { expected, found }) => {
            assert_eq!(expected, 4);
            assert_eq!(found, 5);
        }
        other => panic!("Expected SizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_extreme_values() {
    assert_eq!(BigI64::new(i64::MIN).get(), i64::MIN);
    assert_eq!(LittleU128::new(u128::MAX).get(), u128::MAX);
    assert_eq!(NetI128::new(i128::MIN).as_bytes()[0], 0x80);
    assert!(BigF64::new(f64::NAN).get().is_nan());
    assert_eq!(LittleF32::new(f32::NEG_INFINITY).get(), f32::NEG_INFINITY);
}
