//! sin(x) from the stub tables.
//!
//! Thin wrapper around the shared reducer and kernel in trig.rs.

#[inline(always)]
pub fn sin(x: f64) -> f64 {
    super::trig::sin(x)
}
