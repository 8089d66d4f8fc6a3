use super::*;
use crate::checker::{MEMBER_ID_PATTERN, TIME_RANGE_PATTERN};
use crate::vocabulary::Collection;

fn test_vocab() -> VocabularySet {
    VocabularySet::from_collections([
        Collection::enumerated("variable-id", ["tas", "pr"]).unwrap(),
        Collection::enumerated("table-id", ["Amon", "day"]).unwrap(),
        Collection::enumerated("source-id", ["IPSL-CM6A-LR"]).unwrap(),
        Collection::enumerated("experiment-id", ["piControl"]).unwrap(),
        Collection::pattern("member-id", MEMBER_ID_PATTERN).unwrap(),
        Collection::pattern("time-range", TIME_RANGE_PATTERN).unwrap(),
    ])
    .unwrap()
}

#[test]
fn valid_basename_scores_one_success() {
    let checker = FilenameChecker::new(&test_vocab()).unwrap();
    let mut outcome = CheckOutcome::new(FILENAME_CHECK);

    checker.check("tas_Amon_IPSL-CM6A-LR_piControl_r1i1p1f1.nc", &mut outcome);

    assert_eq!(outcome.successes(), 1);
    assert_eq!(outcome.attempts(), 1);
    assert!(outcome.messages().is_empty());
}

#[test]
fn time_range_suffix_is_optional() {
    let checker = FilenameChecker::new(&test_vocab()).unwrap();
    let mut outcome = CheckOutcome::new(FILENAME_CHECK);

    checker.check(
        "tas_Amon_IPSL-CM6A-LR_piControl_r1i1p1f1_201601-210012.nc",
        &mut outcome,
    );
    checker.check("pr_day_IPSL-CM6A-LR_piControl_r2i1p1f1.nc", &mut outcome);

    assert_eq!(outcome.successes(), 2);
    assert_eq!(outcome.attempts(), 2);
}

#[test]
fn invalid_basename_records_the_parse_failure_verbatim() {
    let checker = FilenameChecker::new(&test_vocab()).unwrap();
    let mut outcome = CheckOutcome::new(FILENAME_CHECK);

    checker.check("tas_Amon_IPSL-CM6A-LR_piControl_r1i1p1.nc", &mut outcome);

    assert_eq!(outcome.successes(), 0);
    assert_eq!(outcome.attempts(), 1);
    assert_eq!(outcome.messages().len(), 1);
    let message = &outcome.messages()[0];
    assert!(message.contains("member-id"), "unexpected message: {message}");
    assert!(message.contains("r1i1p1"), "unexpected message: {message}");
}

#[test]
fn a_bad_file_does_not_stop_the_batch() {
    let checker = FilenameChecker::new(&test_vocab()).unwrap();
    let mut outcome = CheckOutcome::new(FILENAME_CHECK);

    checker.check("garbage.nc", &mut outcome);
    checker.check("tas_Amon_IPSL-CM6A-LR_piControl_r1i1p1f1.nc", &mut outcome);

    assert_eq!(outcome.successes(), 1);
    assert_eq!(outcome.attempts(), 2);
    assert_eq!(outcome.messages().len(), 1);
}

#[test]
fn missing_collection_is_a_setup_failure() {
    let vocab = VocabularySet::from_collections([
        Collection::enumerated("variable-id", ["tas"]).unwrap(),
    ])
    .unwrap();

    assert!(FilenameChecker::new(&vocab).is_err());
}
