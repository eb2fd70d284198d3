//! Typed readers for the structured tables.
//!
//! `Ctable` is 64 records of four doubles, `SC_1..SC_4` pack a sine and a
//! cosine coefficient side by side, and `PI_INV_TABLE` is a run of 2/pi bits.

use super::{CTABLE, PI_INV_TABLE, SC_1, SC_2, SC_3, SC_4, with_hi_lo};

/// Number of `k * pi/32` records in `Ctable`.
pub const CTABLE_ENTRIES: usize = 64;
const CTABLE_ENTRY_WORDS: usize = 8;

/// Zero words ahead of the first 2/pi chunk in `PI_INV_TABLE`.
pub const PI_INV_LEADING_ZEROS: usize = 2;

/// One `Ctable` record, for the angle `B = k * pi/32`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinCosEntry {
    /// `cos(B) - cos_hi`.
    pub cos_tail: f64,
    pub sin_hi: f64,
    pub sin_lo: f64,
    /// Signed power of two (or zero) close to `cos(B)`.
    pub cos_hi: f64,
}

impl SinCosEntry {
    pub fn sin(&self) -> f64 {
        self.sin_hi + self.sin_lo
    }

    pub fn cos(&self) -> f64 {
        self.cos_hi + self.cos_tail
    }
}

/// Record for `k = index mod 64`.
#[inline(always)]
pub fn ctable_entry(index: usize) -> SinCosEntry {
    let base = (index & (CTABLE_ENTRIES - 1)) * CTABLE_ENTRY_WORDS;
    let w = &CTABLE.0[base..base + CTABLE_ENTRY_WORDS];
    SinCosEntry {
        cos_tail: with_hi_lo(w[1], w[0]),
        sin_hi: with_hi_lo(w[3], w[2]),
        sin_lo: with_hi_lo(w[5], w[4]),
        cos_hi: with_hi_lo(w[7], w[6]),
    }
}

#[inline(always)]
fn sc_pair(w: &[u32; 4]) -> (f64, f64) {
    (with_hi_lo(w[1], w[0]), with_hi_lo(w[3], w[2]))
}

/// `SC_1..SC_4` as `(sin, cos)` coefficient pairs, lowest order first.
#[inline(always)]
pub fn sincos_coeffs() -> [(f64, f64); 4] {
    [
        sc_pair(&SC_1.0),
        sc_pair(&SC_2.0),
        sc_pair(&SC_3.0),
        sc_pair(&SC_4.0),
    ]
}

/// Word `k` of `PI_INV_TABLE`, zero padding included.
pub fn pi_inv_chunk(k: usize) -> Option<u32> {
    PI_INV_TABLE.0.get(k).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn ctable_matches_sin_cos_of_grid() {
        for k in 0..CTABLE_ENTRIES {
            let e = ctable_entry(k);
            let b = (k as f64) * PI / 32.0;
            assert!((e.sin() - b.sin()).abs() < 1e-15, "sin entry {k}");
            assert!((e.cos() - b.cos()).abs() < 1e-15, "cos entry {k}");
        }
    }

    #[test]
    fn ctable_cos_hi_is_power_of_two() {
        for k in 0..CTABLE_ENTRIES {
            let hi = ctable_entry(k).cos_hi;
            let mantissa = hi.to_bits() & 0x000f_ffff_ffff_ffff;
            assert_eq!(mantissa, 0, "entry {k}: cos_hi = {hi}");
        }
    }

    #[test]
    fn ctable_half_turn_negates() {
        for k in 0..32 {
            let a = ctable_entry(k);
            let b = ctable_entry(k + 32);
            assert_eq!(a.cos_tail, -b.cos_tail);
            assert_eq!(a.sin_hi, -b.sin_hi);
            assert_eq!(a.sin_lo, -b.sin_lo);
            assert_eq!(a.cos_hi, -b.cos_hi);
        }
    }

    #[test]
    fn ctable_index_wraps() {
        assert_eq!(ctable_entry(3), ctable_entry(3 + CTABLE_ENTRIES));
        assert_eq!(ctable_entry(16).sin_hi, 1.0);
        assert_eq!(ctable_entry(0).cos_hi, 1.0);
    }

    #[test]
    fn sincos_coefficients_are_taylor() {
        let c = sincos_coeffs();
        assert_eq!(c[0], (-1.0 / 6.0, -0.5));
        assert_eq!(c[1], (1.0 / 120.0, 1.0 / 24.0));
        assert_eq!(c[2], (-1.0 / 5040.0, -1.0 / 720.0));
        assert_eq!(c[3], (1.0 / 362880.0, 1.0 / 40320.0));
    }

    #[test]
    fn pi_inv_chunks_spell_two_over_pi() {
        assert_eq!(pi_inv_chunk(0), Some(0));
        assert_eq!(pi_inv_chunk(1), Some(0));
        let hi = pi_inv_chunk(PI_INV_LEADING_ZEROS).unwrap();
        let lo = pi_inv_chunk(PI_INV_LEADING_ZEROS + 1).unwrap();
        let two_over_pi = (((hi as u64) << 32) | lo as u64) as f64 / 2f64.powi(64);
        assert!((two_over_pi - 2.0 / PI).abs() < 1e-16);
        assert_eq!(pi_inv_chunk(40), Some(0xf0cfbc21));
        assert_eq!(pi_inv_chunk(41), None);
    }
}
