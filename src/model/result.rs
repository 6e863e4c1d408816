use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Agreed,
    NotAgreed,
}

impl Verdict {
    pub fn from_agreement(agreed: bool) -> Self {
        if agreed {
            Verdict::Agreed
        } else {
            Verdict::NotAgreed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Agreed => "agreed",
            Verdict::NotAgreed => "not agreed",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which approximation decided the verdict.
///
/// The normal branch compares the transformed statistic `X`; the table
/// branch compares the raw dispersion `D`. The two are not interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AgreementTest {
    NormalApproximation {
        lambda: f64,
        statistic: f64,
        critical: f64,
    },
    ChiSquareTable {
        df: u32,
        statistic: f64,
        critical: f64,
    },
}

impl AgreementTest {
    pub fn statistic(&self) -> f64 {
        match self {
            AgreementTest::NormalApproximation { statistic, .. }
            | AgreementTest::ChiSquareTable { statistic, .. } => *statistic,
        }
    }

    pub fn critical(&self) -> f64 {
        match self {
            AgreementTest::NormalApproximation { critical, .. }
            | AgreementTest::ChiSquareTable { critical, .. } => *critical,
        }
    }

    pub fn agreed(&self) -> bool {
        self.statistic() >= self.critical()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub n: usize,
    pub m: u32,
    pub alpha: f64,
    pub c2n: f64,
    pub c2m: f64,
    pub d: f64,
    pub k0: f64,
    pub v: f64,
    pub test: AgreementTest,
    pub verdict: Verdict,
    pub yj: Vec<u64>,
    pub betai: Vec<f64>,
}
