mod common;

use common::{answer_flags, TestEnv};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    for args in [
        answer_flags("no", "18_to_54", "14_to_17", "veteran"),
        answer_flags("yes", "55_to_64", "14_to_17", "none"),
        answer_flags("yes", "18_to_54", "over_18", "disabled"),
    ] {
        let out = env.run_json(&args);
        assert_eq!(out["ok"], true);
        validate("evaluation.schema.json", &out["data"]);
    }

    let incomplete = env.run_json_failure(&["evaluate", "--age", "over_64"]);
    assert_eq!(incomplete["ok"], false);
    validate("evaluation.schema.json", &incomplete["data"]);

    let questions = env.run_json(&["questions"]);
    assert_eq!(questions["ok"], true);
    validate("questions.schema.json", &questions["data"]);

    let rules = env.run_json(&["rules"]);
    assert_eq!(rules["ok"], true);
    validate("rules.schema.json", &rules["data"]);
}
