pub mod chi_square;
pub mod estimator;

/// Tolerance for matching user-supplied significance levels.
pub const LEVEL_EPSILON: f64 = 1e-6;

pub fn levels_match(a: f64, b: f64) -> bool {
    (a - b).abs() < LEVEL_EPSILON
}
