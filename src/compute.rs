//! The escape-time kernel.

use crate::pixel::Complex;

/// Squared bailout radius. Any orbit with `|z| >= 2` diverges.
pub const BAILOUT_SQUARED: f64 = 4.0;

/// Outcome of iterating a single point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitResult {
    /// The orbit reached the bailout radius after this many steps,
    /// `1 <= k < max_iter`.
    Escaped(u16),
    /// The orbit stayed inside the bailout radius for every allowed step.
    Bounded,
}

/**
Iterate `z' = z² + c` from `z = 0` for up to `max_iter - 1` steps.

Step `k` (1-indexed) is reported as soon as `|z|² >= 4`. With the real and
imaginary parts written out, one step is `u' = u² − v² + x`, `v' = 2uv + y`.

All iteration state lives on this stack frame, so calls from different
threads never share anything.
*/
pub fn evaluate(c: Complex, max_iter: u16) -> OrbitResult {
    let Complex {
        real: x,
        imaginary: y,
    } = c;

    let mut u = 0.0_f64;
    let mut v = 0.0_f64;
    let mut u2 = 0.0_f64;
    let mut v2 = 0.0_f64;

    for k in 1..max_iter {
        v = 2.0 * u * v + y;
        u = u2 - v2 + x;
        u2 = u * u;
        v2 = v * v;
        if u2 + v2 >= BAILOUT_SQUARED {
            return OrbitResult::Escaped(k);
        }
    }

    OrbitResult::Bounded
}
