use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub store: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let store = make_fixture_store(tmp.path());

        Self {
            _tmp: tmp,
            home,
            store,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rollcall");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--store")
            .arg(self.store.to_str().expect("store path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn make_fixture_store(base: &Path) -> PathBuf {
    let store = base.join("store");
    fs::create_dir_all(&store).expect("create store dir");

    let assignments = serde_json::json!([
        {
            "id": "ca-001",
            "student_id": "s-001",
            "assignments": [
                {"unit": "unit-01", "lesson": "1.1"},
                {"unit": "unit-01", "lesson": "1.2"}
            ],
            "assignment_count": 2
        },
        {
            "id": "ca-002",
            "student_id": "s-002",
            "assignments": [{"unit": "unit-02", "lesson": "2.1"}],
            "assignment_count": 3
        },
        {
            "id": "ca-003",
            "student_id": "s-001",
            "assignment_count": 1
        },
        {
            "id": "ca-004",
            "student_id": "s-003",
            "assignments": "corrupted",
            "assignment_count": 0
        }
    ]);
    fs::write(
        store.join("curriculum_assignments.json"),
        serde_json::to_string_pretty(&assignments).expect("serialize assignments"),
    )
    .expect("write assignments");

    let students = serde_json::json!([
        {"id": "s-001", "name": "Avery Chen", "grade": 3},
        {"id": "s-002", "name": "Noor Haddad", "grade": 3},
        {"id": "s-003", "name": "Milo Park", "grade": 4}
    ]);
    fs::write(
        store.join("students.json"),
        serde_json::to_string_pretty(&students).expect("serialize students"),
    )
    .expect("write students");

    let classes = serde_json::json!([
        {"id": "c-001", "name": "Math 3A", "teacher": "R. Okafor"}
    ]);
    fs::write(
        store.join("classes.json"),
        serde_json::to_string_pretty(&classes).expect("serialize classes"),
    )
    .expect("write classes");

    store
}
