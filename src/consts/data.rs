//! Static storage for the libm trigonometric stub constants.
//!
//! Every table is an array of 32-bit words. Doubles are stored low word first,
//! the in-memory order of a `u64` on x86-64. Word values are bit-exact and must
//! not be recomputed.

#![allow(clippy::unreadable_literal)]

use super::{Aligned4, Aligned8, Aligned16};

/// `1.0`.
pub static ONE: Aligned8<[u32; 2]> = Aligned8([0x00000000, 0x3ff00000]);

/// `0.5` in both lanes.
pub static ONEHALF: Aligned16<[u32; 4]> = Aligned16([
    0x00000000, 0x3fe00000, 0x00000000, 0x3fe00000,
]);

/// Sign bit of a double.
pub static SIGN_MASK: Aligned8<[u32; 2]> = Aligned8([0x00000000, 0x80000000]);

/// `2^55`, scales tiny arguments up.
pub static TWO_POW_55: Aligned8<[u32; 2]> = Aligned8([0x00000000, 0x43600000]);

/// `2^-55`, scales tiny arguments back down.
pub static TWO_POW_M55: Aligned8<[u32; 2]> = Aligned8([0x00000000, 0x3c800000]);

/// `1.5 * 2^52` in both lanes. Adding it rounds to an integer kept in the low
/// mantissa bits.
pub static SHIFTER: Aligned16<[u32; 4]> = Aligned16([
    0x00000000, 0x43380000, 0x00000000, 0x43380000,
]);

/// `+0.0`.
pub static ZERO: Aligned4<[u32; 2]> = Aligned4([0x00000000, 0x00000000]);

/// (sin, cos) Taylor coefficients: `-1/3!`, `-1/2!`.
pub static SC_1: Aligned16<[u32; 4]> = Aligned16([0x55555555, 0xbfc55555, 0x00000000, 0xbfe00000]);

/// (sin, cos) Taylor coefficients: `1/5!`, `1/4!`.
pub static SC_2: Aligned16<[u32; 4]> = Aligned16([0x11111111, 0x3f811111, 0x55555555, 0x3fa55555]);

/// (sin, cos) Taylor coefficients: `-1/7!`, `-1/6!`.
pub static SC_3: Aligned16<[u32; 4]> = Aligned16([0x1a01a01a, 0xbf2a01a0, 0x16c16c17, 0xbf56c16c]);

/// (sin, cos) Taylor coefficients: `1/9!`, `1/8!`.
pub static SC_4: Aligned16<[u32; 4]> = Aligned16([0xa556c734, 0x3ec71de3, 0x1a01a01a, 0x3efa01a0]);

/// pi/4 as a high part with 30 trailing zero bits followed by the low part.
pub static PI_4: Aligned8<[u32; 4]> = Aligned8([0x40000000, 0x3fe921fb, 0x18469899, 0x3e64442d]);

/// 32/pi.
pub static PI32INV: Aligned8<[u32; 2]> = Aligned8([0x6dc9c883, 0x40245f30]);

/// `-0.0`.
pub static NEG_ZERO: Aligned8<[u32; 2]> = Aligned8([0x00000000, 0x80000000]);

/// First part of pi/32 (trailing zero bits, so `n * P_1` is exact for `n < 2^22`).
pub static P_1: Aligned8<[u32; 2]> = Aligned8([0x54400000, 0x3fb921fb]);

/// Second part of pi/32, duplicated across both lanes.
pub static P_2: Aligned16<[u32; 4]> = Aligned16([0x1a600000, 0x3d90b461, 0x1a600000, 0x3d90b461]);

/// Third part of pi/32.
pub static P_3: Aligned8<[u32; 2]> = Aligned8([0x2e037073, 0x3b63198a]);

/// Two zero words followed by the bits of 2/pi in big-endian 32-bit chunks.
///
/// The leading zeros let the Payne-Hanek window start below the binary point
/// without a bounds special case.
pub static PI_INV_TABLE: Aligned16<[u32; 41]> = Aligned16([
    0x00000000, 0x00000000, 0xa2f9836e, 0x4e441529, 0xfc2757d1,
    0xf534ddc0, 0xdb629599, 0x3c439041, 0xfe5163ab, 0xdebbc561,
    0xb7246e3a, 0x424dd2e0, 0x06492eea, 0x09d1921c, 0xfe1deb1c,
    0xb129a73e, 0xe88235f5, 0x2ebb4484, 0xe99c7026, 0xb45f7e41,
    0x3991d639, 0x835339f4, 0x9c845f8b, 0xbdf9283b, 0x1ff897ff,
    0xde05980f, 0xef2f118b, 0x5a0a6d1f, 0x6d367ecf, 0x27cb09b7,
    0x4f463f66, 0x9e5fea2d, 0x7527bac7, 0xebe5f17b, 0x3d0739f7,
    0x8a5292ea, 0x6bfb5fb1, 0x1f8d5d08, 0x56033046, 0xfc7b6bab,
    0xf0cfbc21,
]);

/// 64 entries of `{cos_tail, sin_hi, sin_lo, cos_hi}` for `B = k * pi/32`.
///
/// `sin(B) = sin_hi + sin_lo`, `cos(B) = cos_hi + cos_tail` where `cos_hi`
/// is a signed power of two (or zero) so that `cos_hi * r` is exact.
pub static CTABLE: Aligned16<[u32; 512]> = Aligned16([
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x3ff00000,
    0x176d6d31, 0xbf73b92e, 0xbc29b42c, 0x3fb917a6, 0xe0000000, 0xbc3e2718, 0x00000000, 0x3ff00000,
    0x011469fb, 0xbf93ad06, 0x3c69a60b, 0x3fc8f8b8, 0xc0000000, 0xbc626d19, 0x00000000, 0x3ff00000,
    0x939d225a, 0xbfa60bea, 0x2ed59f06, 0x3fd29406, 0xa0000000, 0xbc75d28d, 0x00000000, 0x3ff00000,
    0x866b95cf, 0xbfb37ca1, 0xa6aea963, 0x3fd87de2, 0xe0000000, 0xbc672ced, 0x00000000, 0x3ff00000,
    0x73fa1279, 0xbfbe3a68, 0x3806f63b, 0x3fde2b5d, 0x20000000, 0x3c5e0d89, 0x00000000, 0x3ff00000,
    0x5bc57974, 0xbfc59267, 0x39ae68c8, 0x3fe1c73b, 0x20000000, 0x3c8b25dd, 0x00000000, 0x3ff00000,
    0x53aba2fd, 0xbfcd0dfe, 0x25091dd6, 0x3fe44cf3, 0x20000000, 0x3c68076a, 0x00000000, 0x3ff00000,
    0x99fcef32, 0x3fca8279, 0x667f3bcd, 0x3fe6a09e, 0x20000000, 0xbc8bdd34, 0x00000000, 0x3fe00000,
    0x94247758, 0x3fc133cc, 0x6b151741, 0x3fe8bc80, 0x20000000, 0xbc82c5e1, 0x00000000, 0x3fe00000,
    0x9ae68c87, 0x3fac73b3, 0x290ea1a3, 0x3fea9b66, 0xe0000000, 0x3c39f630, 0x00000000, 0x3fe00000,
    0x7f909c4e, 0xbf9d4a2c, 0xf180bdb1, 0x3fec38b2, 0x80000000, 0xbc76e0b1, 0x00000000, 0x3fe00000,
    0x65455a75, 0xbfbe0875, 0xcf328d46, 0x3fed906b, 0x20000000, 0x3c7457e6, 0x00000000, 0x3fe00000,
    0x76acf82d, 0x3fa4a031, 0x56c62dda, 0x3fee9f41, 0xe0000000, 0x3c8760b1, 0x00000000, 0x3fd00000,
    0x0e5967d5, 0xbfac1d1f, 0xcff75cb0, 0x3fef6297, 0x20000000, 0x3c756217, 0x00000000, 0x3fd00000,
    0x0f592f50, 0xbf9ba165, 0xa3d12526, 0x3fefd88d, 0x40000000, 0xbc887df6, 0x00000000, 0x3fc00000,
    0x00000000, 0x00000000, 0x00000000, 0x3ff00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x0f592f50, 0x3f9ba165, 0xa3d12526, 0x3fefd88d, 0x40000000, 0xbc887df6, 0x00000000, 0xbfc00000,
    0x0e5967d5, 0x3fac1d1f, 0xcff75cb0, 0x3fef6297, 0x20000000, 0x3c756217, 0x00000000, 0xbfd00000,
    0x76acf82d, 0xbfa4a031, 0x56c62dda, 0x3fee9f41, 0xe0000000, 0x3c8760b1, 0x00000000, 0xbfd00000,
    0x65455a75, 0x3fbe0875, 0xcf328d46, 0x3fed906b, 0x20000000, 0x3c7457e6, 0x00000000, 0xbfe00000,
    0x7f909c4e, 0x3f9d4a2c, 0xf180bdb1, 0x3fec38b2, 0x80000000, 0xbc76e0b1, 0x00000000, 0xbfe00000,
    0x9ae68c87, 0xbfac73b3, 0x290ea1a3, 0x3fea9b66, 0xe0000000, 0x3c39f630, 0x00000000, 0xbfe00000,
    0x94247758, 0xbfc133cc, 0x6b151741, 0x3fe8bc80, 0x20000000, 0xbc82c5e1, 0x00000000, 0xbfe00000,
    0x99fcef32, 0xbfca8279, 0x667f3bcd, 0x3fe6a09e, 0x20000000, 0xbc8bdd34, 0x00000000, 0xbfe00000,
    0x53aba2fd, 0x3fcd0dfe, 0x25091dd6, 0x3fe44cf3, 0x20000000, 0x3c68076a, 0x00000000, 0xbff00000,
    0x5bc57974, 0x3fc59267, 0x39ae68c8, 0x3fe1c73b, 0x20000000, 0x3c8b25dd, 0x00000000, 0xbff00000,
    0x73fa1279, 0x3fbe3a68, 0x3806f63b, 0x3fde2b5d, 0x20000000, 0x3c5e0d89, 0x00000000, 0xbff00000,
    0x866b95cf, 0x3fb37ca1, 0xa6aea963, 0x3fd87de2, 0xe0000000, 0xbc672ced, 0x00000000, 0xbff00000,
    0x939d225a, 0x3fa60bea, 0x2ed59f06, 0x3fd29406, 0xa0000000, 0xbc75d28d, 0x00000000, 0xbff00000,
    0x011469fb, 0x3f93ad06, 0x3c69a60b, 0x3fc8f8b8, 0xc0000000, 0xbc626d19, 0x00000000, 0xbff00000,
    0x176d6d31, 0x3f73b92e, 0xbc29b42c, 0x3fb917a6, 0xe0000000, 0xbc3e2718, 0x00000000, 0xbff00000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xbff00000,
    0x176d6d31, 0x3f73b92e, 0xbc29b42c, 0xbfb917a6, 0xe0000000, 0x3c3e2718, 0x00000000, 0xbff00000,
    0x011469fb, 0x3f93ad06, 0x3c69a60b, 0xbfc8f8b8, 0xc0000000, 0x3c626d19, 0x00000000, 0xbff00000,
    0x939d225a, 0x3fa60bea, 0x2ed59f06, 0xbfd29406, 0xa0000000, 0x3c75d28d, 0x00000000, 0xbff00000,
    0x866b95cf, 0x3fb37ca1, 0xa6aea963, 0xbfd87de2, 0xe0000000, 0x3c672ced, 0x00000000, 0xbff00000,
    0x73fa1279, 0x3fbe3a68, 0x3806f63b, 0xbfde2b5d, 0x20000000, 0xbc5e0d89, 0x00000000, 0xbff00000,
    0x5bc57974, 0x3fc59267, 0x39ae68c8, 0xbfe1c73b, 0x20000000, 0xbc8b25dd, 0x00000000, 0xbff00000,
    0x53aba2fd, 0x3fcd0dfe, 0x25091dd6, 0xbfe44cf3, 0x20000000, 0xbc68076a, 0x00000000, 0xbff00000,
    0x99fcef32, 0xbfca8279, 0x667f3bcd, 0xbfe6a09e, 0x20000000, 0x3c8bdd34, 0x00000000, 0xbfe00000,
    0x94247758, 0xbfc133cc, 0x6b151741, 0xbfe8bc80, 0x20000000, 0x3c82c5e1, 0x00000000, 0xbfe00000,
    0x9ae68c87, 0xbfac73b3, 0x290ea1a3, 0xbfea9b66, 0xe0000000, 0xbc39f630, 0x00000000, 0xbfe00000,
    0x7f909c4e, 0x3f9d4a2c, 0xf180bdb1, 0xbfec38b2, 0x80000000, 0x3c76e0b1, 0x00000000, 0xbfe00000,
    0x65455a75, 0x3fbe0875, 0xcf328d46, 0xbfed906b, 0x20000000, 0xbc7457e6, 0x00000000, 0xbfe00000,
    0x76acf82d, 0xbfa4a031, 0x56c62dda, 0xbfee9f41, 0xe0000000, 0xbc8760b1, 0x00000000, 0xbfd00000,
    0x0e5967d5, 0x3fac1d1f, 0xcff75cb0, 0xbfef6297, 0x20000000, 0xbc756217, 0x00000000, 0xbfd00000,
    0x0f592f50, 0x3f9ba165, 0xa3d12526, 0xbfefd88d, 0x40000000, 0x3c887df6, 0x00000000, 0xbfc00000,
    0x00000000, 0x00000000, 0x00000000, 0xbff00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x0f592f50, 0xbf9ba165, 0xa3d12526, 0xbfefd88d, 0x40000000, 0x3c887df6, 0x00000000, 0x3fc00000,
    0x0e5967d5, 0xbfac1d1f, 0xcff75cb0, 0xbfef6297, 0x20000000, 0xbc756217, 0x00000000, 0x3fd00000,
    0x76acf82d, 0x3fa4a031, 0x56c62dda, 0xbfee9f41, 0xe0000000, 0xbc8760b1, 0x00000000, 0x3fd00000,
    0x65455a75, 0xbfbe0875, 0xcf328d46, 0xbfed906b, 0x20000000, 0xbc7457e6, 0x00000000, 0x3fe00000,
    0x7f909c4e, 0xbf9d4a2c, 0xf180bdb1, 0xbfec38b2, 0x80000000, 0x3c76e0b1, 0x00000000, 0x3fe00000,
    0x9ae68c87, 0x3fac73b3, 0x290ea1a3, 0xbfea9b66, 0xe0000000, 0xbc39f630, 0x00000000, 0x3fe00000,
    0x94247758, 0x3fc133cc, 0x6b151741, 0xbfe8bc80, 0x20000000, 0x3c82c5e1, 0x00000000, 0x3fe00000,
    0x99fcef32, 0x3fca8279, 0x667f3bcd, 0xbfe6a09e, 0x20000000, 0x3c8bdd34, 0x00000000, 0x3fe00000,
    0x53aba2fd, 0xbfcd0dfe, 0x25091dd6, 0xbfe44cf3, 0x20000000, 0xbc68076a, 0x00000000, 0x3ff00000,
    0x5bc57974, 0xbfc59267, 0x39ae68c8, 0xbfe1c73b, 0x20000000, 0xbc8b25dd, 0x00000000, 0x3ff00000,
    0x73fa1279, 0xbfbe3a68, 0x3806f63b, 0xbfde2b5d, 0x20000000, 0xbc5e0d89, 0x00000000, 0x3ff00000,
    0x866b95cf, 0xbfb37ca1, 0xa6aea963, 0xbfd87de2, 0xe0000000, 0x3c672ced, 0x00000000, 0x3ff00000,
    0x939d225a, 0xbfa60bea, 0x2ed59f06, 0xbfd29406, 0xa0000000, 0x3c75d28d, 0x00000000, 0x3ff00000,
    0x011469fb, 0xbf93ad06, 0x3c69a60b, 0xbfc8f8b8, 0xc0000000, 0x3c626d19, 0x00000000, 0x3ff00000,
    0x176d6d31, 0xbf73b92e, 0xbc29b42c, 0xbfb917a6, 0xe0000000, 0x3c3e2718, 0x00000000, 0x3ff00000,
]);
