//! cos(x) from the stub tables.
//!
//! Evaluates the sine kernel a quarter turn (16 `Ctable` steps) ahead.

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    super::trig::cos(x)
}
