//! Exports that fail leave nothing behind, and long names survive packing.

use crate::common::*;
use std::fs;

#[test]
fn long_report_and_artifact_names() {
    let env = ExportEnv::new();
    let artifact = env.write_file(&format!("{}.log", "x".repeat(80)), b"long lived");
    let mut case = TestCase::new("case", 0, Verdict::Passed).unwrap();
    case.add_artifact(&artifact, false).unwrap();
    let mut suite = TestSuite::new("long", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let report_name = format!("{}.json", "r".repeat(110));
    let info = env
        .generator
        .export(&suite, env.path(&report_name))
        .unwrap()
        .unwrap();

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    assert_eq!(names[0], report_name);
    assert!(names[1].len() > 100);
    assert!(names[1].ends_with(&format!("/{}.log", "x".repeat(80))));
    assert_eq!(
        ReportArchiveReader::read_entry(&info.archive_path, &names[1]).unwrap(),
        b"long lived"
    );
}

#[test]
fn vanished_artifact_writes_nothing() {
    let env = ExportEnv::new();
    let artifact = env.write_file("evidence.txt", b"soon gone");
    let suite = my_test_suite(&artifact);
    fs::remove_file(&artifact).unwrap();

    let json_path = env.path("example.json");
    let err = env.generator.export(&suite, &json_path).unwrap_err();

    assert!(err.is_not_found());
    assert!(!json_path.exists());
    assert!(!env.path("example.zip").exists());
    assert!(!env.path("example.tmp").exists());
}

#[test]
fn unwritable_report_removes_archive() {
    let env = ExportEnv::new();
    let json_path = env.path("blocked.json");
    fs::create_dir(&json_path).unwrap();
    env.write_file("blocked.json/keep", b"x");

    assert!(env
        .generator
        .export(&single_case_suite("blocked"), &json_path)
        .is_err());
    assert!(json_path.is_dir());
    assert!(!env.path("blocked.zip").exists());
    assert!(!env.path("blocked.json.tmp").exists());
}
