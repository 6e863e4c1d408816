use crate::model::EstimationError;
use crate::stats::levels_match;

pub const MAX_DF: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    Upper,
    Lower,
}

/// Header of one table column: the probability mass beyond the tabulated
/// quantile and the side it sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub level: f64,
    pub tail: Tail,
}

pub const COLUMNS: [TableColumn; 6] = [
    TableColumn { level: 0.01, tail: Tail::Upper },
    TableColumn { level: 0.025, tail: Tail::Upper },
    TableColumn { level: 0.05, tail: Tail::Upper },
    TableColumn { level: 0.95, tail: Tail::Lower },
    TableColumn { level: 0.975, tail: Tail::Lower },
    TableColumn { level: 0.99, tail: Tail::Lower },
];

/// Columns of `COLUMNS` exposed for lookup.
const SUPPORTED_COLUMNS: &[usize] = &[2];

/// Row `k` holds the quantiles for `k + 1` degrees of freedom.
const CRITICAL_VALUES: [[f64; 6]; 30] = [
    [6.6, 5.0, 3.8, 0.0039, 0.00098, 0.00016],
    [9.2, 7.4, 6.0, 0.103, 0.051, 0.020],
    [11.3, 9.4, 7.8, 0.352, 0.216, 0.115],
    [13.3, 11.1, 9.5, 0.711, 0.484, 0.297],
    [15.1, 12.8, 11.1, 1.15, 0.831, 0.554],
    [16.8, 14.4, 12.6, 1.64, 1.24, 0.872],
    [18.5, 16.0, 14.1, 2.17, 1.69, 1.24],
    [20.1, 17.5, 15.5, 2.73, 2.18, 1.65],
    [21.7, 19.0, 16.9, 3.33, 2.70, 2.09],
    [23.2, 20.5, 18.3, 3.94, 3.25, 2.56],
    [24.7, 21.9, 19.7, 4.57, 3.82, 3.05],
    [26.2, 23.3, 21.0, 5.23, 4.40, 3.57],
    [27.7, 24.7, 22.4, 5.89, 5.01, 4.11],
    [29.1, 26.1, 23.7, 6.57, 5.63, 4.66],
    [30.6, 27.5, 25.0, 7.26, 6.26, 5.23],
    [32.0, 28.8, 26.3, 7.96, 6.91, 5.81],
    [33.4, 30.2, 27.6, 8.67, 7.56, 6.41],
    [34.8, 31.5, 28.9, 9.39, 8.23, 7.01],
    [36.2, 32.9, 30.1, 10.1, 8.91, 7.63],
    [37.6, 34.2, 31.4, 10.9, 9.59, 8.26],
    [38.9, 35.5, 32.7, 11.6, 10.3, 8.90],
    [40.3, 36.8, 33.9, 12.3, 11.0, 9.54],
    [41.6, 38.1, 35.2, 13.1, 11.7, 10.2],
    [43.0, 39.4, 36.4, 13.8, 12.4, 10.9],
    [44.3, 40.6, 37.7, 14.6, 13.1, 11.5],
    [45.6, 41.9, 38.9, 15.4, 13.8, 12.2],
    [47.0, 43.2, 40.1, 16.2, 14.6, 12.9],
    [48.3, 44.5, 41.3, 16.9, 15.3, 13.6],
    [49.6, 45.7, 42.6, 17.7, 16.0, 14.3],
    [50.9, 47.0, 43.8, 18.5, 16.8, 15.0],
];

/// Chi-square critical value for `df` degrees of freedom at significance
/// level `alpha` (upper tail).
///
/// The level is checked first, so an unsupported level is reported even when
/// `df` is also out of range.
pub fn critical_value(df: u32, alpha: f64) -> Result<f64, EstimationError> {
    let column = column_for_level(alpha)?;
    if df == 0 || df > MAX_DF {
        return Err(EstimationError::DegreesOfFreedomOutOfRange { df: df as f64 });
    }
    Ok(CRITICAL_VALUES[(df - 1) as usize][column])
}

fn column_for_level(alpha: f64) -> Result<usize, EstimationError> {
    SUPPORTED_COLUMNS
        .iter()
        .copied()
        .find(|&idx| {
            let column = COLUMNS[idx];
            column.tail == Tail::Upper && levels_match(alpha, column.level)
        })
        .ok_or(EstimationError::UnsupportedSignificanceLevel { alpha })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/chi_square.rs"]
mod tests;
