//! The "MyTestSuite" report from construction to archive.

use crate::common::*;
use serde_json::Value;
use std::fs;

#[test]
fn my_test_suite_exports() {
    let env = ExportEnv::new();
    let artifact = env.write_file("artifacts/schema.json", b"{\"type\": \"object\"}");
    let suite = my_test_suite(&artifact);
    let json_path = env.path("example.json");

    let info = env.generator.export(&suite, &json_path).unwrap().unwrap();
    assert_eq!(info.json_path, json_path);
    assert_eq!(info.archive_path, env.path("example.zip"));
    assert_eq!(info.artifact_count, 1);
    assert_eq!(info.skipped_duplicates, 0);
    assert!(info.archive_size_bytes > 0);

    let report: Value = serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(report["name"], "MyTestSuite");
    assert_eq!(report["timestamp"], 1666698047000i64);

    let testcases = report["testcases"].as_array().unwrap();
    assert_eq!(testcases.len(), 2);
    assert_eq!(testcases[0]["@type"], "testcase");
    assert_eq!(testcases[1]["@type"], "testcasefolder");
    assert_eq!(testcases[1]["name"], "SubFolder");
    let nested = testcases[1]["testcases"].as_array().unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0]["verdict"], "FAILED");

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], "example.json");
    assert!(names[1].ends_with("/schema.json"));
    assert_eq!(testcases[0]["artifacts"][0], names[1].as_str());
}

#[test]
fn my_test_suite_case_details() {
    let env = ExportEnv::new();
    let artifact = env.write_file("schema.json", b"{}");
    let suite = my_test_suite(&artifact);
    let json_path = env.path("example.json");
    env.generator.export(&suite, &json_path).unwrap().unwrap();

    let report: Value = serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    let case = &report["testcases"][0];

    assert_eq!(case["name"], "TestCase_1");
    assert_eq!(case["verdict"], "PASSED");
    assert_eq!(case["paramSet"], "MyParameterSet");
    assert_eq!(case["parameters"][0]["direction"], "IN");
    assert_eq!(case["parameters"][0]["value"], 7);
    assert_eq!(case["parameters"][1]["direction"], "OUT");
    assert_eq!(case["constants"][0]["key"], "SOP");
    assert_eq!(case["constants"][0]["value"], "2042");
    assert_eq!(case["attributes"].as_array().unwrap().len(), 2);
    assert_eq!(case["environments"], serde_json::json!([]));

    let steps = case["executionTestSteps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1]["@type"], "teststepfolder");
    assert_eq!(steps[1]["teststeps"][0]["expected_result"], "ego >= 120");

    assert_eq!(case["review"]["comment"], "Review-Comment");
    assert_eq!(case["review"]["verdict"], "PASSED");
}

#[test]
fn archive_report_matches_json_file() {
    let env = ExportEnv::new();
    let artifact = env.write_file("schema.json", b"{}");
    let json_path = env.path("out/example.json");

    let info = env
        .generator
        .export(&my_test_suite(&artifact), &json_path)
        .unwrap()
        .unwrap();

    let packed = ReportArchiveReader::read_entry(&info.archive_path, "example.json").unwrap();
    assert_eq!(packed, fs::read(&json_path).unwrap());

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    let stored = ReportArchiveReader::read_entry(&info.archive_path, &names[1]).unwrap();
    assert_eq!(stored, b"{}");
}

#[test]
fn step_artifacts_are_packed() {
    let env = ExportEnv::new();
    let image = env.write_file("logo.png", b"\x89PNG fake");

    let mut step = TestStep::new("Check Picture2", Verdict::Passed, "Shows Ego Vehicle").unwrap();
    step.add_artifact(&image, TestStepArtifactType::Image, false).unwrap();
    let mut folder = TestStepFolder::new("Teardown").unwrap();
    folder.add_teststep(step).unwrap();
    let mut case = TestCase::new("with_image", 0, Verdict::Passed).unwrap();
    case.add_teardown_teststep(folder).unwrap();
    let mut suite = TestSuite::new("steps", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let info = env
        .generator
        .export(&suite, env.path("steps.json"))
        .unwrap()
        .unwrap();
    assert_eq!(info.artifact_count, 1);

    let names = ReportArchiveReader::entry_names(&info.archive_path).unwrap();
    assert!(names[1].ends_with("/logo.png"));
    assert_eq!(
        ReportArchiveReader::read_entry(&info.archive_path, &names[1]).unwrap(),
        b"\x89PNG fake"
    );
}

#[test]
fn ignored_artifact_still_exports() {
    let env = ExportEnv::new();
    let mut case = TestCase::new("lenient", 0, Verdict::Inconclusive).unwrap();
    case.add_artifact(env.path("missing.log"), true).unwrap();
    let mut suite = TestSuite::new("lenient", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let info = env
        .generator
        .export(&suite, env.path("lenient.json"))
        .unwrap()
        .unwrap();
    assert_eq!(info.artifact_count, 0);
    assert_eq!(
        ReportArchiveReader::entry_names(&info.archive_path).unwrap(),
        ["lenient.json"]
    );
}
