use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error("unsupported significance level {alpha}; tabulated levels: 0.05")]
    UnsupportedSignificanceLevel { alpha: f64 },

    #[error("degrees of freedom {df} outside the tabulated range 1..=30")]
    DegreesOfFreedomOutOfRange { df: f64 },

    #[error("invalid expert count {experts}; at least 3 experts are required")]
    InvalidExpertCount { experts: u32 },

    #[error("preference matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("preference matrix has {n} objects; at least 3 are required")]
    TooFewObjects { n: usize },

    #[error("count {value} at [{row}][{col}] exceeds the expert count {experts}")]
    CountOutOfRange {
        row: usize,
        col: usize,
        value: u32,
        experts: u32,
    },
}
