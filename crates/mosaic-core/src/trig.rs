//! Unit-interval trig helpers.
//!
//! These take a phase measured in whole cycles rather than radians and return a
//! value in \[0, 1\] instead of \[-1, 1\]. The `i` variants are phase-inverted.

pub use std::f64::consts::TAU;

#[inline]
pub fn sin(phase: f64) -> f64 {
    ((phase * TAU).sin() + 1.0) / 2.0
}

#[inline]
pub fn isin(phase: f64) -> f64 {
    (-(phase * TAU).sin() + 1.0) / 2.0
}

#[inline]
pub fn cos(phase: f64) -> f64 {
    ((phase * TAU).cos() + 1.0) / 2.0
}

#[inline]
pub fn icos(phase: f64) -> f64 {
    (-(phase * TAU).cos() + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_cycle_landmarks() {
        assert!((sin(0.0) - 0.5).abs() < 1e-12);
        assert!((sin(0.25) - 1.0).abs() < 1e-12);
        assert!((sin(0.75) - 0.0).abs() < 1e-12);
        assert!((cos(0.0) - 1.0).abs() < 1e-12);
        assert!((cos(0.5) - 0.0).abs() < 1e-12);
        assert!((icos(0.0) - 0.0).abs() < 1e-12);
        assert!((isin(0.25) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn whole_cycles_repeat() {
        for p in [0.1, 0.37, 0.9] {
            assert!((cos(p) - cos(p + 3.0)).abs() < 1e-9);
            assert!((sin(p) - sin(p - 2.0)).abs() < 1e-9);
        }
    }
}
