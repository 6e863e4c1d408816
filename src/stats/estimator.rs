use crate::model::{
    AgreementTest, EstimationError, EstimationResult, ExpertCount, PreferenceMatrix, Verdict,
};
use crate::stats::chi_square::{self, MAX_DF};
use crate::stats::levels_match;

pub const DEFAULT_ALPHA: f64 = 0.05;

/// One-sided standard normal quantiles keyed by significance level.
const NORMAL_QUANTILES: &[(f64, f64)] = &[(0.05, 1.64485363)];

#[derive(Debug, Clone)]
pub struct ConcordanceEstimator {
    matrix: PreferenceMatrix,
    experts: ExpertCount,
    alpha: f64,
}

impl ConcordanceEstimator {
    pub fn new(matrix: PreferenceMatrix, experts: ExpertCount) -> Result<Self, EstimationError> {
        matrix.validate_counts(experts)?;
        Ok(Self {
            matrix,
            experts,
            alpha: DEFAULT_ALPHA,
        })
    }

    pub fn with_significance(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn matrix(&self) -> &PreferenceMatrix {
        &self.matrix
    }

    pub fn estimate(&self) -> Result<EstimationResult, EstimationError> {
        let n = self.matrix.size() as f64;
        let m = self.experts.get() as f64;

        let c2n = choose2(n);
        let c2m = choose2(m);
        let d = dispersion(&self.matrix, m, c2n * c2m);
        let k0 = d / (c2m * c2n);
        let v = degrees_of_freedom(c2n, m)?;
        tracing::debug!(c2n, c2m, d, k0, v, "concordance coefficients");

        let test = if v > MAX_DF as f64 {
            tracing::debug!(v, "using normal approximation");
            normal_approximation(d, v, n, m, c2n, c2m, self.alpha)?
        } else {
            tracing::debug!(v, "using tabulated chi-square critical value");
            table_test(d, v, self.alpha)?
        };
        let verdict = Verdict::from_agreement(test.agreed());
        tracing::info!(
            statistic = test.statistic(),
            critical = test.critical(),
            %verdict,
            "expert agreement test finished"
        );

        let yj = self.matrix.row_sums();
        let betai = normalized_shares(&yj);

        Ok(EstimationResult {
            n: self.matrix.size(),
            m: self.experts.get(),
            alpha: self.alpha,
            c2n,
            c2m,
            d,
            k0,
            v,
            test,
            verdict,
            yj,
            betai,
        })
    }
}

fn choose2(k: f64) -> f64 {
    k * (k - 1.0) / 2.0
}

/// `Σ γ² − m·Σ γ + C2m·C2n` over the strict lower triangle.
fn dispersion(matrix: &PreferenceMatrix, m: f64, pair_product: f64) -> f64 {
    let (squares, sum) = matrix
        .lower_triangle()
        .fold((0.0, 0.0), |(sq, s), (_, _, g)| {
            let g = g as f64;
            (sq + g * g, s + g)
        });
    squares - m * sum + pair_product
}

fn degrees_of_freedom(c2n: f64, m: f64) -> Result<f64, EstimationError> {
    let denom = (m - 2.0).powi(2);
    if denom == 0.0 {
        return Err(EstimationError::InvalidExpertCount { experts: m as u32 });
    }
    Ok(c2n * m * (m - 1.0) / denom)
}

fn normal_quantile(alpha: f64) -> Result<f64, EstimationError> {
    NORMAL_QUANTILES
        .iter()
        .find(|(level, _)| levels_match(alpha, *level))
        .map(|&(_, z)| z)
        .ok_or(EstimationError::UnsupportedSignificanceLevel { alpha })
}

fn normal_approximation(
    d: f64,
    v: f64,
    n: f64,
    m: f64,
    c2n: f64,
    c2m: f64,
    alpha: f64,
) -> Result<AgreementTest, EstimationError> {
    let lambda = normal_quantile(alpha)?;
    let statistic = 4.0 / (m - 2.0) * (d - 0.5 * c2n * c2m * (m - 3.0) / (n - 2.0));
    let root = (2.0 * v).sqrt();
    let critical = v
        + lambda * root
        + 2.0 / 3.0 * (lambda.powi(2) - 1.0)
        + (lambda.powi(3) - 7.0 * lambda) / (9.0 * root);
    Ok(AgreementTest::NormalApproximation {
        lambda,
        statistic,
        critical,
    })
}

/// Compares the raw `D` against the tabulated quantile. Non-integral `v` is
/// rounded to the nearest whole degree of freedom.
fn table_test(d: f64, v: f64, alpha: f64) -> Result<AgreementTest, EstimationError> {
    let rounded = v.round();
    if !(1.0..=MAX_DF as f64).contains(&rounded) {
        return Err(EstimationError::DegreesOfFreedomOutOfRange { df: v });
    }
    let df = rounded as u32;
    let critical = chi_square::critical_value(df, alpha)?;
    Ok(AgreementTest::ChiSquareTable {
        df,
        statistic: d,
        critical,
    })
}

/// `y[i] / Σ y`; all zeros when nothing was preferred.
fn normalized_shares(totals: &[u64]) -> Vec<f64> {
    let total: u64 = totals.iter().sum();
    if total == 0 {
        return vec![0.0; totals.len()];
    }
    totals.iter().map(|&y| y as f64 / total as f64).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/estimator.rs"]
mod tests;
