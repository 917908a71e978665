//! Layout of the written JSON report.

use crate::common::*;
use serde_json::Value;
use std::fs;

#[test]
fn report_uses_four_space_indent() {
    let env = ExportEnv::new();
    let json_path = env.path("report.json");
    env.generator
        .export(&single_case_suite("indent"), &json_path)
        .unwrap()
        .unwrap();

    let text = fs::read_to_string(&json_path).unwrap();
    assert!(text.starts_with("{\n    \"name\": \"indent\",\n    \"timestamp\": 0,\n    \"testcases\": ["));
    assert!(text.contains("\n        {\n            \"@type\": \"testcase\""));
    assert!(!text.contains('\t'));
}

#[test]
fn testcase_keys_keep_their_order() {
    let env = ExportEnv::new();
    let json_path = env.path("report.json");
    env.generator
        .export(&single_case_suite("order"), &json_path)
        .unwrap()
        .unwrap();

    let report: Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let keys: Vec<&str> = report["testcases"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "@type",
            "name",
            "verdict",
            "description",
            "timestamp",
            "executionTime",
            "parameters",
            "paramSet",
            "setupTestSteps",
            "executionTestSteps",
            "teardownTestSteps",
            "attributes",
            "constants",
            "environments",
            "artifacts",
        ]
    );
}

#[test]
fn review_without_verdict_reads_passed() {
    let env = ExportEnv::new();
    let mut review = Review::new("looks fine", "qa", 1423536765000).unwrap();
    review.add_tags(["nightly"]);
    let mut case = TestCase::new("reviewed", 0, Verdict::Failed).unwrap();
    case.set_review(review);
    let mut suite = TestSuite::new("review", 0).unwrap();
    suite.add_testcase(case).unwrap();

    let json_path = env.path("review.json");
    env.generator.export(&suite, &json_path).unwrap().unwrap();

    let report: Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let review = &report["testcases"][0]["review"];
    assert_eq!(review["verdict"], "PASSED");
    assert_eq!(review["summary"], Value::Null);
    assert_eq!(review["tags"][0], "nightly");
    assert_eq!(review["invalidRun"], false);
}

#[test]
fn exporting_twice_is_byte_identical() {
    let env = ExportEnv::new();
    let artifact = env.write_file("schema.json", b"{}");
    let suite = my_test_suite(&artifact);

    let first = env
        .generator
        .export(&suite, env.path("one/example.json"))
        .unwrap()
        .unwrap();
    let second = env
        .generator
        .export(&suite, env.path("two/example.json"))
        .unwrap()
        .unwrap();

    assert_eq!(
        fs::read(&first.json_path).unwrap(),
        fs::read(&second.json_path).unwrap()
    );
    assert_eq!(
        fs::read(&first.archive_path).unwrap(),
        fs::read(&second.archive_path).unwrap()
    );
}
