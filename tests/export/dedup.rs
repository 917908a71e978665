//! Artifacts referenced more than once are stored once.

use crate::common::*;

#[test]
fn same_file_from_two_cases() {
    let env = ExportEnv::new();
    let shared = env.write_file("shared.txt", b"shared evidence");

    let mut first = TestCase::new("first", 0, Verdict::Passed).unwrap();
    first.add_artifact(&shared, false).unwrap();
    let mut second = TestCase::new("second", 0, Verdict::Failed).unwrap();
    second.add_artifact(&shared, false).unwrap();
    let mut folder = TestCaseFolder::new("nested").unwrap();
    folder.add_testcase(second).unwrap();

    let mut suite = TestSuite::new("dedup", 0).unwrap();
    suite.add_testcase(first).unwrap();
    suite.add_testcase(folder).unwrap();

    let info = env
        .generator
        .export(&suite, env.path("dedup.json"))
        .unwrap()
        .unwrap();
    assert_eq!(info.artifact_count, 1);
    assert_eq!(info.skipped_duplicates, 1);

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    assert_eq!(names.len(), 2);
    assert!(names[1].ends_with("/shared.txt"));
}

#[test]
fn same_content_different_names_are_kept() {
    let env = ExportEnv::new();
    let a = env.write_file("a/evidence.txt", b"identical");
    let b = env.write_file("b/other.txt", b"identical");

    let mut case = TestCase::new("case", 0, Verdict::Passed).unwrap();
    case.add_artifact(&a, false).unwrap();
    case.add_artifact(&b, false).unwrap();
    let mut suite = TestSuite::new("names", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let info = env
        .generator
        .export(&suite, env.path("names.json"))
        .unwrap()
        .unwrap();
    assert_eq!(info.artifact_count, 2);

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    let hash = |name: &str| name.split('/').next().unwrap().to_string();
    assert_eq!(hash(&names[1]), hash(&names[2]));
    assert_ne!(names[1], names[2]);
}

#[test]
fn case_and_step_share_an_artifact() {
    let env = ExportEnv::new();
    let shot = env.write_file("shot.png", b"pixels");

    let mut step = TestStep::new("look", Verdict::Passed, "").unwrap();
    step.add_artifact(&shot, TestStepArtifactType::Image, false).unwrap();
    let mut case = TestCase::new("case", 0, Verdict::Passed).unwrap();
    case.add_artifact(&shot, false).unwrap();
    case.add_execution_teststep(step).unwrap();
    let mut suite = TestSuite::new("shared", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let info = env
        .generator
        .export(&suite, env.path("shared.json"))
        .unwrap()
        .unwrap();
    assert_eq!(info.artifact_count, 1);
    assert_eq!(info.skipped_duplicates, 1);
}
