#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("snapcheck");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn write_answers(&self, name: &str, answers: &Value) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(
            &path,
            serde_json::to_string_pretty(answers).expect("serialize answers"),
        )
        .expect("write answers file");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn answer_flags<'a>(
    snap_recipient: &'a str,
    age: &'a str,
    children: &'a str,
    exemptions: &'a str,
) -> Vec<&'a str> {
    vec![
        "evaluate",
        "--snap-recipient",
        snap_recipient,
        "--age",
        age,
        "--children",
        children,
        "--exemptions",
        exemptions,
    ]
}
