//! Reports the schema rejects leave nothing behind.

use crate::common::*;
use testguide_report::{ExportConfig, SchemaValidator};

#[test]
fn empty_suite_is_rejected() {
    let env = ExportEnv::new();
    let suite = TestSuite::new("empty", 1666698047000).unwrap();
    let json_path = env.path("empty.json");

    assert!(env.generator.export(&suite, &json_path).unwrap().is_none());
    assert!(!json_path.exists());
    assert!(!env.path("empty.zip").exists());
}

#[test]
fn stricter_schema_rejects_valid_report() {
    let env = ExportEnv::new();
    let schema = env.write_file(
        "strict.json",
        br#"{"type": "object", "required": ["name", "timestamp", "testcases", "owner"]}"#,
    );
    let generator = ReportGenerator::from_config(&ExportConfig {
        schema_path: Some(schema),
        ..ExportConfig::default()
    })
    .unwrap();

    let json_path = env.path("strict.json.out");
    assert!(generator
        .export(&single_case_suite("strict"), &json_path)
        .unwrap()
        .is_none());
    assert!(!json_path.exists());
}

#[test]
fn missing_schema_fails_construction() {
    let env = ExportEnv::new();
    let err = SchemaValidator::from_file(&env.path("absent.json")).unwrap_err();
    assert!(err.to_string().starts_with("Schema error:"));
}
