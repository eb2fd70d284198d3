use super::{fast_two_sum, two_prod, two_sum};
use crate::consts::layout::{ctable_entry, sincos_coeffs};
use crate::consts::{
    ONE, ONEHALF, P_1, P_2, P_3, PI_4, PI_INV_TABLE, PI32INV, SHIFTER, SIGN_MASK, TWO_POW_55,
    TWO_POW_M55, first_lane, first_lane_bits, lo_word,
};

// ========= table-driven sin/cos =========
//
// x = n * pi/32 + y with |y| <= ~pi/64, then
// sin(x) = sin(B) cos(y) + cos(B) sin(y), B = (n mod 64) * pi/32.
// cos(x) is sin(x + pi/2), i.e. the same kernel at n + 16.

const TINY_HW: u32 = 0x3e50_0000; // 2^-26
const MEDIUM_HW: u32 = 0x4100_0000; // 2^17
const EXP_HW: u32 = 0x7ff0_0000;

const QUARTER_TURN: u32 = 16;

/// Fraction bits kept by the Payne-Hanek window (6 integer bits remain).
const WINDOW_FRAC_BITS: i32 = 122;
/// Words of `PI_INV_TABLE` multiplied per reduction.
const WINDOW_WORDS: usize = 7;

#[inline(always)]
fn sign_bit() -> u64 {
    first_lane_bits(&SIGN_MASK.0)
}

#[inline(always)]
fn abs_hi_word(ux: u64) -> u32 {
    ((ux & !sign_bit()) >> 32) as u32
}

#[inline(always)]
fn kernel(n: u32, y0: f64, y1: f64) -> f64 {
    let e = ctable_entry(n as usize);
    let [(s1, c1), (s2, c2), (s3, c3), (s4, c4)] = sincos_coeffs();

    let z = y0 * y0;
    // sin(y) = y0 + y1 + sp, cos(y) = 1 + cp
    let sp = y0 * z * (s1 + z * (s2 + z * (s3 + z * s4)));
    let cp = z * (c1 + z * (c2 + z * (c3 + z * c4))) - y0 * y1;

    // cos_hi is a power of two, so cos_hi * y0 is exact.
    let (hi, lo) = two_sum(e.sin_hi, e.cos_hi * y0);
    let tail = lo
        + e.sin_hi * cp
        + e.sin_lo
        + e.cos_tail * y0
        + (e.cos_hi + e.cos_tail) * (sp + y1);
    hi + tail
}

// ---- Cody-Waite: |x| < 2^17 ----

#[inline(always)]
fn rem_pio32_medium(x: f64) -> (u32, f64, f64) {
    let shifter = first_lane(&SHIFTER.0);
    let t = x * first_lane(&PI32INV.0) + shifter;
    let n = lo_word(t) & 63;
    let fnn = t - shifter;

    // n * P_1 and n * P_2 are exact for |n| < 2^21.
    let r1 = x - fnn * first_lane(&P_1.0);
    let w = fnn * first_lane(&P_2.0);
    let r = r1 - w;
    let w = fnn * first_lane(&P_3.0) - ((r1 - r) - w);
    let y0 = r - w;
    let y1 = (r - y0) - w;
    (n, y0, y1)
}

// ---- Payne-Hanek: |x| >= 2^17 ----

/// 128 bits of `p` starting at bit `lo` (`64 < lo <= 128`).
#[inline(always)]
fn window128(p: &[u64; 5], lo: u32) -> u128 {
    let limb = (lo / 64) as usize;
    let bit = lo % 64;
    let low = (p[limb] as u128) | ((p[limb + 1] as u128) << 64);
    if bit == 0 {
        low
    } else {
        (low >> bit) | ((p[limb + 2] as u128) << (128 - bit))
    }
}

fn rem_pio32_large(ux: u64) -> (u32, f64, f64) {
    let negative = ux & sign_bit() != 0;
    let e = ((ux >> 52) & 0x7ff) as i32;
    let m = (ux & 0x000f_ffff_ffff_ffff) | (1u64 << 52);

    // x * 32/pi = m * 2^s * V with V = sum(word[k] * 2^(-32(k+1))) = 2^-64 * 2/pi.
    // Words before k0 only contribute multiples of 64 and are skipped.
    let s = e - 1007;
    let k0 = ((s - 6) >> 5) as usize;
    let w = &PI_INV_TABLE.0[k0..k0 + WINDOW_WORDS];
    let c3 = ((w[0] as u64) << 32) | w[1] as u64;
    let c2 = ((w[2] as u64) << 32) | w[3] as u64;
    let c1 = ((w[4] as u64) << 32) | w[5] as u64;
    let c0 = (w[6] as u64) << 32;

    let t0 = (m as u128) * (c0 as u128);
    let t1 = (m as u128) * (c1 as u128) + (t0 >> 64);
    let t2 = (m as u128) * (c2 as u128) + (t1 >> 64);
    let t3 = (m as u128) * (c3 as u128) + (t2 >> 64);
    let p = [t0 as u64, t1 as u64, t2 as u64, t3 as u64, (t3 >> 64) as u64];

    // c0 is padded by 32 zero bits, so p carries 32 * (k0 + 8) - s
    // fraction bits, always in (218, 250].
    let frac_bits = 32 * (k0 as i32 + WINDOW_WORDS as i32 + 1) - s;
    let window = window128(&p, (frac_bits - WINDOW_FRAC_BITS) as u32);

    // Round to the nearest multiple of pi/32; the remainder is signed.
    let n = (window.wrapping_add(1u128 << (WINDOW_FRAC_BITS - 1)) >> WINDOW_FRAC_BITS) as u32;
    let f = window.wrapping_sub((n as u128) << WINDOW_FRAC_BITS) as i128;
    let fh = f as f64;
    let fl = (f - fh as i128) as f64;

    let scale = f64::from_bits(((1023 - WINDOW_FRAC_BITS) as u64) << 52);
    let u = fh * scale;
    let ul = fl * scale;

    // pi/32 = (pi/4) / 8, scaling is exact.
    let pio32_hi = first_lane(&PI_4.0) * 0.125;
    let pio32_lo = first_lane(&PI_4.0[2..]) * 0.125;
    let (ph, pl) = two_prod(u, pio32_hi);
    let (y0, y1) = fast_two_sum(ph, pl + (u * pio32_lo + ul * pio32_hi));

    if negative {
        ((64 - n) & 63, -y0, -y1)
    } else {
        (n, y0, y1)
    }
}

/// Reduces `x` to `n * pi/32 + y_hi + y_lo`, returning `(n mod 64, y_hi, y_lo)`.
///
/// `|y_hi + y_lo|` is at most about pi/64. Non-finite input yields NaN parts.
pub fn rem_pio32(x: f64) -> (u32, f64, f64) {
    let ux = x.to_bits();
    let ix = abs_hi_word(ux);
    if ix >= EXP_HW {
        return (0, x - x, x - x);
    }
    if ix < MEDIUM_HW {
        return rem_pio32_medium(x);
    }
    rem_pio32_large(ux)
}

#[inline(always)]
pub(super) fn sin(x: f64) -> f64 {
    let ix = abs_hi_word(x.to_bits());
    if ix < TINY_HW {
        if x == 0.0 {
            return x;
        }
        // Rounds back to x; the scaling keeps subnormals away from underflow.
        return (x * first_lane(&TWO_POW_55.0) - x) * first_lane(&TWO_POW_M55.0);
    }
    if ix >= EXP_HW {
        return x - x;
    }

    let (n, y0, y1) = rem_pio32(x);
    kernel(n, y0, y1)
}

#[inline(always)]
pub(super) fn cos(x: f64) -> f64 {
    let ix = abs_hi_word(x.to_bits());
    if ix < TINY_HW {
        return first_lane(&ONE.0) - first_lane(&ONEHALF.0) * x * x;
    }
    if ix >= EXP_HW {
        return x - x;
    }

    let (n, y0, y1) = rem_pio32(x);
    kernel(n + QUARTER_TURN, y0, y1)
}
