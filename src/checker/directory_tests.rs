use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::attributes::SidecarReader;
use crate::checker::MEMBER_ID_PATTERN;
use crate::vocabulary::Collection;

fn test_vocab() -> VocabularySet {
    VocabularySet::from_collections([
        Collection::enumerated("activity-id", ["CMIP", "ScenarioMIP"]).unwrap(),
        Collection::enumerated("institution-id", ["IPSL", "NCAR"]).unwrap(),
        Collection::enumerated("source-id", ["IPSL-CM6A-LR"]).unwrap(),
        Collection::enumerated("experiment-id", ["piControl"]).unwrap(),
        Collection::pattern("member-id", MEMBER_ID_PATTERN).unwrap(),
    ])
    .unwrap()
}

fn write_data_file(root: &Path, relative: &str, attributes: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"").unwrap();
    let mut sidecar = path.into_os_string();
    sidecar.push(".json");
    std::fs::write(sidecar, attributes).unwrap();
}

const CONSISTENT_ATTRS: &str = r#"{
    "activity_id": "CMIP",
    "institution_id": "IPSL",
    "source_id": "IPSL-CM6A-LR",
    "experiment_id": "piControl",
    "variant_id": "r1i1p1f1"
}"#;

#[test]
fn consistent_file_counts_as_a_success() {
    let dir = TempDir::new().unwrap();
    write_data_file(
        dir.path(),
        "CMIP6/CMIP/IPSL/IPSL-CM6A-LR/piControl/r1i1p1f1/tas.nc",
        CONSISTENT_ATTRS,
    );

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert_eq!(outcome.successes(), 1);
    assert_eq!(outcome.attempts(), 1);
    assert!(outcome.messages().is_empty());
}

#[test]
fn attribute_mismatch_fails_the_file_but_not_its_neighbors() {
    let dir = TempDir::new().unwrap();
    write_data_file(
        dir.path(),
        "CMIP6/CMIP/IPSL/IPSL-CM6A-LR/piControl/r1i1p1f1/tas.nc",
        r#"{
            "activity_id": "CMIP",
            "institution_id": "NCAR",
            "source_id": "IPSL-CM6A-LR",
            "experiment_id": "piControl",
            "variant_id": "r1i1p1f1"
        }"#,
    );
    write_data_file(
        dir.path(),
        "CMIP6/CMIP/IPSL/IPSL-CM6A-LR/piControl/r2i1p1f1/tas.nc",
        r#"{
            "activity_id": "CMIP",
            "institution_id": "IPSL",
            "source_id": "IPSL-CM6A-LR",
            "experiment_id": "piControl",
            "variant_id": "r2i1p1f1"
        }"#,
    );

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert_eq!(outcome.successes(), 1);
    assert_eq!(outcome.attempts(), 2);
    assert_eq!(outcome.messages().len(), 1);
    let message = &outcome.messages()[0];
    assert!(message.contains("NCAR"), "unexpected message: {message}");
    assert!(message.contains("IPSL"), "unexpected message: {message}");
    assert!(
        message.contains("institution_id"),
        "unexpected message: {message}"
    );
}

#[test]
fn missing_attribute_does_not_short_circuit_the_remaining_collections() {
    let dir = TempDir::new().unwrap();
    // institution_id absent, experiment_id inconsistent: both must be reported.
    write_data_file(
        dir.path(),
        "CMIP6/CMIP/IPSL/IPSL-CM6A-LR/piControl/r1i1p1f1/tas.nc",
        r#"{
            "activity_id": "CMIP",
            "source_id": "IPSL-CM6A-LR",
            "experiment_id": "historical",
            "variant_id": "r1i1p1f1"
        }"#,
    );

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert_eq!(outcome.successes(), 0);
    assert_eq!(outcome.attempts(), 1);
    assert_eq!(outcome.messages().len(), 2);
    assert!(outcome.messages()[0].contains("institution_id"));
    assert!(outcome.messages()[1].contains("experiment_id"));
}

#[test]
fn invalid_hierarchy_is_recorded_and_skips_the_cross_check() {
    let dir = TempDir::new().unwrap();
    write_data_file(dir.path(), "CMIP6/NotAnActivity/tas.nc", CONSISTENT_ATTRS);

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert_eq!(outcome.successes(), 0);
    assert_eq!(outcome.attempts(), 1);
    assert_eq!(outcome.messages().len(), 1);
    assert!(outcome.messages()[0].contains("is not a valid DRS hierarchy"));
}

#[test]
fn unreadable_attributes_fail_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("CMIP6/CMIP/IPSL/IPSL-CM6A-LR/piControl/r1i1p1f1/tas.nc");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"").unwrap();
    // No sidecar.

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert_eq!(outcome.successes(), 0);
    assert_eq!(outcome.attempts(), 1);
    assert!(outcome.messages()[0].contains("Cannot read attributes"));
}

#[test]
fn empty_dataset_yields_a_not_applicable_outcome() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("CMIP6")).unwrap();

    let dataset = StructuredDataset::discover(dir.path(), "nc", &[]).unwrap();
    let checker = DirectoryChecker::new(&test_vocab(), SidecarReader, "CMIP6").unwrap();
    let outcome = checker.check_all(&dataset);

    assert!(!outcome.is_applicable());
    assert_eq!(outcome.attempts(), 0);
}
