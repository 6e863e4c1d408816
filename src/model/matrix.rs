use crate::model::error::EstimationError;

/// Number of experts whose pairwise votes were tallied into a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertCount(u32);

impl ExpertCount {
    pub const MIN: u32 = 3;

    /// Rejects `m < 3`. For `m = 2` the degrees-of-freedom formula divides by
    /// zero, and for `m < 2` the pair count `C2m` vanishes.
    pub fn new(experts: u32) -> Result<Self, EstimationError> {
        if experts < Self::MIN {
            return Err(EstimationError::InvalidExpertCount { experts });
        }
        Ok(Self(experts))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Square matrix of pairwise preference counts among `n` objects.
///
/// Entry `[i][j]` is the number of experts preferring object `i` over `j`.
/// Only the strict lower triangle (`j < i`) enters the dispersion statistic,
/// while row sums use every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMatrix {
    rows: Vec<Vec<u32>>,
}

impl PreferenceMatrix {
    pub const MIN_OBJECTS: usize = 3;

    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, EstimationError> {
        let n = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(EstimationError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
        }
        if n < Self::MIN_OBJECTS {
            return Err(EstimationError::TooFewObjects { n });
        }
        Ok(Self { rows })
    }

    pub fn validate_counts(&self, experts: ExpertCount) -> Result<(), EstimationError> {
        let m = experts.get();
        for (row, values) in self.rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > m {
                    return Err(EstimationError::CountOutOfRange {
                        row,
                        col,
                        value,
                        experts: m,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// `(i, j, value)` for every `j < i`, row-major.
    pub fn lower_triangle(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row[..i].iter().enumerate().map(move |(j, &v)| (i, j, v)))
    }

    pub fn row_sums(&self) -> Vec<u64> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| v as u64).sum())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
