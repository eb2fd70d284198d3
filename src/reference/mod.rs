//! Scalar sin/cos evaluated straight from the stub constant tables.
//!
//! Follows the data flow of the generated stubs: tiny-argument shortcut,
//! reduction by pi/32, then a `Ctable` lookup combined with the `SC_n`
//! polynomials. Useful as an oracle for the emitted code and as a numerical
//! check that the tables are intact.

mod cos;
mod sin;
mod trig;

pub use cos::cos;
pub use sin::sin;
pub use trig::rem_pio32;

// ========= double-double helpers =========

/// Veltkamp split into a 26-bit high half and the remainder.
#[inline(always)]
fn split(a: f64) -> (f64, f64) {
    let c = 134217729.0 * a; // 2^27 + 1
    let hi = c - (c - a);
    (hi, a - hi)
}

/// `a * b` as an unevaluated sum `p + e` (Dekker).
#[inline(always)]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, e)
}

/// `a + b` as `s + e` without ordering requirements (Knuth).
#[inline(always)]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// `a + b` as `s + e`, assuming `|a| >= |b|`.
#[inline(always)]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_prod_is_exact() {
        let a = 1.0 + f64::EPSILON;
        let (p, e) = two_prod(a, a);
        assert_eq!(p, 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(e, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn two_sum_recovers_rounding() {
        let (s, e) = two_sum(1.0, 1e-20);
        assert_eq!(s, 1.0);
        assert_eq!(e, 1e-20);
        let (s, e) = two_sum(1e-20, 1.0);
        assert_eq!((s, e), (1.0, 1e-20));
        assert_eq!(fast_two_sum(1.0, 1e-20), (1.0, 1e-20));
    }
}
