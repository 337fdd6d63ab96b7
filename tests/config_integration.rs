use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

struct TestSetup {
    root: PathBuf,
}

impl TestSetup {
    fn new(prefix: &str, config_toml: &str) -> Self {
        let root = unique_temp_dir(prefix);
        fs::create_dir_all(&root).expect("create temp dir");
        fs::write(
            root.join("catalog.json"),
            r#"{"A": {"n": "A", "p": {"t": "AND", "c": ["B"]}}}"#,
        )
        .expect("write catalog");
        fs::write(root.join(".coursegraph.toml"), config_toml).expect("write config");
        Self { root }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(coursegraph_bin());
        cmd.current_dir(&self.root)
            .env_remove("COURSEGRAPH_CONFIG")
            .env_remove("COURSEGRAPH_CATALOG")
            .arg("--config")
            .arg(self.root.join(".coursegraph.toml"));
        cmd
    }
}

impl Drop for TestSetup {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn coursegraph_bin() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_coursegraph") {
        return PathBuf::from(path);
    }

    let current_exe = std::env::current_exe().expect("resolve current test binary path");
    let target_dir = current_exe
        .parent()
        .and_then(|path| path.parent())
        .expect("derive cargo target dir from test binary path");
    let bin_name = if cfg!(windows) {
        "coursegraph.exe"
    } else {
        "coursegraph"
    };
    let fallback = target_dir.join(bin_name);

    if fallback.is_file() {
        fallback
    } else {
        panic!(
            "CARGO_BIN_EXE_coursegraph is not set and fallback binary not found at {}",
            fallback.display()
        );
    }
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    let pid = std::process::id();
    std::env::temp_dir().join(format!("coursegraph-{prefix}-{pid}-{nanos}"))
}

#[test]
fn catalog_path_falls_back_to_the_config_file() {
    let setup = TestSetup::new(
        "config-catalog",
        "[catalog]\nfile = \"catalog.json\"\n",
    );
    let output = setup
        .command()
        .args(["render", "A"])
        .output()
        .expect("run render");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse render json");
    assert_eq!(snapshot["nodes"].as_array().expect("nodes").len(), 3);
}

#[test]
fn configured_key_color_is_applied_to_roots() {
    let setup = TestSetup::new(
        "config-color",
        "[catalog]\nfile = \"catalog.json\"\n\n[render]\nkey_color = \"rgb(9,9,9)\"\n",
    );
    let output = setup
        .command()
        .args(["render", "A"])
        .output()
        .expect("run render");
    assert!(output.status.success());

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse render json");
    let root = snapshot["nodes"]
        .as_array()
        .expect("nodes")
        .iter()
        .find(|n| n["label"] == "A")
        .expect("root node");
    assert_eq!(root["color"], "rgb(9,9,9)");
}

#[test]
fn configured_exact_fingerprint_mode_is_accepted() {
    let setup = TestSetup::new(
        "config-exact",
        "[catalog]\nfile = \"catalog.json\"\n\n[render]\nfingerprint = \"exact\"\n",
    );
    let output = setup
        .command()
        .args(["render", "A"])
        .output()
        .expect("run render");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_fingerprint_mode_fails_with_a_clear_error() {
    let setup = TestSetup::new(
        "config-bad-mode",
        "[catalog]\nfile = \"catalog.json\"\n\n[render]\nfingerprint = \"fuzzy\"\n",
    );
    let output = setup
        .command()
        .args(["render", "A"])
        .output()
        .expect("run render");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown fingerprint mode"));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let setup = TestSetup::new("config-missing", "[catalog]\nfile = \"catalog.json\"\n");
    let output = Command::new(coursegraph_bin())
        .current_dir(&setup.root)
        .env_remove("COURSEGRAPH_CONFIG")
        .env_remove("COURSEGRAPH_CATALOG")
        .arg("--config")
        .arg(setup.root.join("nope.toml"))
        .args(["render", "A"])
        .output()
        .expect("run render");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"));
}

#[test]
fn list_respects_the_filter_pattern() {
    let setup = TestSetup::new("config-list", "[catalog]\nfile = \"catalog.json\"\n");
    fs::write(
        setup.root.join("catalog.json"),
        r#"{"MATH 1A": {"n": "MATH 1A"}, "CHEM 1B": {"n": "CHEM 1B"}}"#,
    )
    .expect("rewrite catalog");

    let output = setup
        .command()
        .args(["list", "--filter", "^MATH"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "MATH 1A");
}
