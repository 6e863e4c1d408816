use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::{ExpertCount, PreferenceMatrix, Verdict};
use crate::stats::estimator::ConcordanceEstimator;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("expert_concordance_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn golden_result() -> EstimationResult {
    let rows = vec![
        vec![0, 0, 3, 0, 0, 0, 0, 0],
        vec![3, 0, 3, 3, 2, 3, 0, 0],
        vec![0, 0, 0, 2, 3, 3, 0, 0],
        vec![3, 0, 1, 0, 3, 3, 0, 0],
        vec![3, 1, 0, 0, 0, 3, 0, 0],
        vec![3, 0, 0, 0, 0, 0, 0, 0],
        vec![3, 3, 3, 3, 3, 3, 0, 3],
        vec![3, 3, 3, 3, 3, 3, 0, 0],
    ];
    let matrix = PreferenceMatrix::new(rows).unwrap();
    ConcordanceEstimator::new(matrix, ExpertCount::new(3).unwrap())
        .unwrap()
        .estimate()
        .unwrap()
}

#[test]
fn test_round_to_four_places() {
    assert_eq!(round_to(80.0 / 84.0, 4), 0.9524);
    assert_eq!(round_to(199.244_876_343_844_9, 4), 199.2449);
    assert_eq!(round_to(0.000_04, 4), 0.0);
    assert_eq!(round_to(-1.234_56, 2), -1.23);
    assert!(round_to(f64::NAN, 4).is_nan());
    assert_eq!(round_to(f64::INFINITY, 4), f64::INFINITY);
}

#[test]
fn test_format_value_drops_trailing_zeros() {
    assert_eq!(format_value(28.0), "28");
    assert_eq!(format_value(0.952_380_952), "0.9524");
    assert_eq!(format_row([3.0, 0.25]), "3\t0.25");
}

#[test]
fn test_text_report_lines() {
    let text = text::render_report_text(&golden_result());
    assert!(text.contains("- C2n: 28\n"));
    assert!(text.contains("- C2m: 3\n"));
    assert!(text.contains("- D: 80\n"));
    assert!(text.contains("- K0: 0.9524\n"));
    assert!(text.contains("- Degrees of freedom (v): 168\n"));
    assert!(text.contains("Method: normal approximation\n"));
    assert!(text.contains("- Statistic (X observed): 320\n"));
    assert!(text.contains("- Critical value (X^2 crit): 199.2449\n"));
    assert!(text.contains("=> Expert opinions: agreed\n"));
    assert!(text.contains("3\t14\t8\t10\t7\t3\t21\t18\n"));
    assert!(text.contains("0.0357\t0.1667\t0.0952\t0.119\t0.0833\t0.0357\t0.25\t0.2143\n"));
}

#[test]
fn test_json_keeps_full_precision() {
    let result = golden_result();
    let json = json::render_summary_json(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "expert-concordance");
    assert_eq!(value["c2n"], 28.0);
    assert_eq!(value["k0"].as_f64().unwrap(), result.k0);
    assert_eq!(value["verdict"], "agreed");
    assert_eq!(value["test"]["method"], "normal_approximation");
    assert_eq!(value["test"]["statistic"], 320.0);
    assert_eq!(value["yj"][6], 21);
    assert_eq!(value["betai"].as_array().unwrap().len(), 8);
    assert_eq!(result.verdict, Verdict::Agreed);
}

#[test]
fn test_write_reports_formats() {
    let result = golden_result();

    let both = make_temp_dir().join("nested");
    let written = write_reports(&result, &both, ReportFormat::Both).unwrap();
    assert_eq!(
        written,
        vec![both.join("concordance.txt"), both.join("concordance.json")]
    );
    for path in &written {
        assert!(fs::metadata(path).unwrap().len() > 0);
    }

    let json_only = make_temp_dir();
    let written = write_reports(&result, &json_only, ReportFormat::Json).unwrap();
    assert_eq!(written, vec![json_only.join("concordance.json")]);
    assert!(!json_only.join("concordance.txt").exists());
}
