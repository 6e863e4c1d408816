use crate::model::{AgreementTest, EstimationResult};
use crate::report::{format_row, format_value};

pub fn render_report_text(result: &EstimationResult) -> String {
    let mut out = String::new();

    out.push_str("Expert Concordance Report\n");
    out.push_str("=========================\n\n");

    out.push_str(&format!("Objects (n): {}\n", result.n));
    out.push_str(&format!("Experts (m): {}\n", result.m));
    out.push_str(&format!("Significance level: {}\n\n", result.alpha));

    push_param(&mut out, "C2n", result.c2n);
    push_param(&mut out, "C2m", result.c2m);
    push_param(&mut out, "D", result.d);
    push_param(&mut out, "K0", result.k0);
    push_param(&mut out, "Degrees of freedom (v)", result.v);

    match &result.test {
        AgreementTest::NormalApproximation {
            statistic,
            critical,
            ..
        } => {
            out.push_str("Method: normal approximation\n");
            push_param(&mut out, "Statistic (X observed)", *statistic);
            push_param(&mut out, "Critical value (X^2 crit)", *critical);
        }
        AgreementTest::ChiSquareTable {
            df,
            statistic,
            critical,
        } => {
            out.push_str(&format!("Method: chi-square table, df = {df}\n"));
            push_param(&mut out, "Statistic (D observed)", *statistic);
            push_param(&mut out, "Critical value (X^2 crit)", *critical);
        }
    }
    out.push_str(&format!("=> Expert opinions: {}\n\n", result.verdict));

    out.push_str("- Preference totals (y):\n");
    out.push_str(&format_row(result.yj.iter().map(|&y| y as f64)));
    out.push('\n');
    out.push_str("- Normalized preference totals (beta_i):\n");
    out.push_str(&format_row(result.betai.iter().copied()));
    out.push('\n');

    out
}

fn push_param(out: &mut String, name: &str, value: f64) {
    out.push_str(&format!("- {}: {}\n", name, format_value(value)));
}
