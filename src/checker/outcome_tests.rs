use super::*;

#[test]
fn fresh_outcome_is_not_applicable() {
    let outcome = CheckOutcome::new("filename structure");
    assert!(!outcome.is_applicable());
    assert!(outcome.passed());
    assert_eq!(outcome.attempts(), 0);
}

#[test]
fn record_success_and_failure_both_count_as_attempts() {
    let mut outcome = CheckOutcome::new("filename structure");
    outcome.record_success();
    outcome.record_failure("bad.nc is not a valid DRS filename");

    assert_eq!(outcome.successes(), 1);
    assert_eq!(outcome.attempts(), 2);
    assert!(!outcome.passed());
    assert_eq!(outcome.messages().len(), 1);
}

#[test]
fn record_failures_keeps_every_message_for_one_attempt() {
    let mut outcome = CheckOutcome::new("directory structure");
    outcome.record_failures(vec![
        "Attribute institution_id not found".to_string(),
        "DRS inconsistent with file contents: NCAR != IPSL (institution_id)".to_string(),
    ]);

    assert_eq!(outcome.attempts(), 1);
    assert_eq!(outcome.successes(), 0);
    assert_eq!(outcome.messages().len(), 2);
}

#[test]
fn merge_sums_outcomes_sharing_a_name() {
    let mut a = CheckOutcome::new("filename structure");
    a.record_success();
    let mut b = CheckOutcome::new("filename structure");
    b.record_failure("first".to_string());
    b.record_failure("second".to_string());

    let mut report = Report::default();
    report.merge(a);
    report.merge(b);

    let merged = report.get("filename structure").unwrap();
    assert_eq!(merged.successes(), 1);
    assert_eq!(merged.attempts(), 3);
    assert_eq!(merged.messages(), ["first", "second"]);
}

#[test]
fn combine_is_associative() {
    let make = |msgs: &[&str], successes: usize| {
        let mut o = CheckOutcome::new("directory structure");
        for _ in 0..successes {
            o.record_success();
        }
        for m in msgs {
            o.record_failure((*m).to_string());
        }
        o
    };

    let a = make(&["a1"], 1);
    let b = make(&["b1", "b2"], 0);
    let c = make(&[], 2);

    let mut left = Report::combine([a.clone(), b.clone()]);
    left.merge(c.clone());

    let mut right = Report::default();
    right.merge(a);
    right.merge(Report::combine([b, c]).get("directory structure").unwrap().clone());

    assert_eq!(left, right);
}

#[test]
fn report_preserves_check_insertion_order() {
    let mut report = Report::default();
    report.merge(CheckOutcome::new("filename structure"));
    report.merge(CheckOutcome::new("directory structure"));

    let names: Vec<&str> = report.outcomes().map(CheckOutcome::name).collect();
    assert_eq!(names, vec!["filename structure", "directory structure"]);
}
