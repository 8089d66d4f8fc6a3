use super::*;
use crate::checker::CheckOutcome;

fn sample_report() -> Report {
    let mut filename = CheckOutcome::new("filename structure");
    filename.record_success();
    filename.record_failure("bad.nc is not a valid DRS filename");

    let mut report = Report::default();
    report.merge(filename);
    report.merge(CheckOutcome::new("directory structure"));
    report
}

#[test]
fn shows_score_fraction_and_messages() {
    let output = TextFormatter.format(&sample_report()).unwrap();

    assert!(output.contains("filename structure: 1/2"));
    assert!(output.contains("  - bad.nc is not a valid DRS filename"));
    assert!(output.contains("Result: FAILED"));
}

#[test]
fn zero_attempt_checks_render_as_not_applicable() {
    let output = TextFormatter.format(&sample_report()).unwrap();
    assert!(output.contains("directory structure: not applicable"));
}

#[test]
fn all_passing_report_renders_passed() {
    let mut outcome = CheckOutcome::new("filename structure");
    outcome.record_success();
    let report = Report::combine([outcome]);

    let output = TextFormatter.format(&report).unwrap();
    assert!(output.contains("filename structure: 1/1"));
    assert!(output.contains("Result: PASSED"));
}
