use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

fn fixture_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/catalog.json")
        .to_string_lossy()
        .to_string()
}

/// Command isolated from any config on the host
fn patternbook(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_patternbook"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PATTERNBOOK_DATA")
        .env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    let home = tempdir().unwrap();
    patternbook(&home)
        .arg("--data")
        .arg(fixture_path())
        .args(args)
        .output()
        .expect("Failed to execute patternbook")
}

#[test]
fn test_cli_help_command() {
    let home = tempdir().unwrap();
    let output = patternbook(&home)
        .arg("--help")
        .output()
        .expect("Failed to execute patternbook --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gallery"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("walk"));
    assert!(stdout.contains("open"));
}

#[test]
fn test_gallery_lists_all_patterns() {
    let output = run(&["gallery"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Classic Teddy Bear"));
    assert!(stdout.contains("Granny Square Coaster"));
    assert!(stdout.contains("Lace Shawl"));
    assert!(stdout.contains("3 of 3 pattern(s)"));
}

#[test]
fn test_gallery_search_json() {
    let output = run(&["gallery", "HOME", "--field", "category", "--json"]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "coaster");
    assert_eq!(rows[0]["time"], "1 hour");
}

#[test]
fn test_gallery_no_match_warns() {
    let output = run(&["gallery", "dragon"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No patterns match 'dragon'"));
}

#[test]
fn test_show_pattern_details() {
    let output = run(&["show", "teddy"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Classic Teddy Bear"));
    assert!(stdout.contains("Steps:      3"));
    assert!(stdout.contains("  - Safety eyes"));
}

#[test]
fn test_show_unknown_pattern_fails() {
    let output = run(&["show", "dragon"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Pattern 'dragon' not found"));
}

#[test]
fn test_walk_plain_to_completion() {
    let home = tempdir().unwrap();
    let mut child = patternbook(&home)
        .arg("--data")
        .arg(fixture_path())
        .args(["walk", "teddy", "--plain"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn patternbook walk");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"p\nn\nn\np\nn\nn\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Step 1 of 3"));
    assert!(stdout.contains("33%"));
    assert!(stdout.contains("Step 3 of 3"));
    assert!(stdout.contains("100%"));
    assert!(stdout.contains("Video: videos/magic-ring.mp4"));
    assert!(stdout.contains("Image: images/teddy.jpg"));
    assert!(stdout.contains("[n] Finish"));
    assert!(stdout.contains("Tutorial complete: Classic Teddy Bear"));
}

#[test]
fn test_walk_json_lines() {
    let home = tempdir().unwrap();
    let mut child = patternbook(&home)
        .arg("--data")
        .arg(fixture_path())
        .args(["walk", "coaster", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn patternbook walk");

    child.stdin.take().unwrap().write_all(b"n\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["media_kind"], "video");
    assert_eq!(lines[0]["is_final"], true);
    assert_eq!(lines[0]["percent_complete"], 100.0);
    assert_eq!(lines[1]["event"], "completed");
}

#[test]
fn test_walk_empty_tutorial_fails() {
    let output = run(&["walk", "shawl", "--plain"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("has no steps"));
}

#[test]
fn test_open_location() {
    let output = run(&["open", "working.html?id=coaster"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Granny Square Coaster"));
    assert!(stdout.contains("Step 1 of 1"));

    let output = run(&["open", "working.html?id=dragon", "--json"]);
    assert_eq!(output.status.code(), Some(1));
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["state"], "not-found");
}

#[test]
fn test_missing_data_file_fails() {
    let home = tempdir().unwrap();
    let output = patternbook(&home)
        .args(["--data", "nowhere.json", "gallery"])
        .output()
        .expect("Failed to execute patternbook");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "{stderr}");
    assert!(lines[0].starts_with("Catalog data unavailable from nowhere.json"));
    assert_eq!(lines[0].matches("unavailable").count(), 1);
}

#[test]
fn test_open_not_found_reported_once() {
    let output = run(&["open", "working.html?id=dragon"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines, vec!["Pattern 'dragon' not found"]);
}

#[test]
fn test_open_without_id_is_not_found() {
    let output = run(&["open", "working.html?id="]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().collect::<Vec<_>>(), vec!["No pattern id given"]);

    let output = run(&["open", "index.html", "--json"]);
    assert!(output.status.success());
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["state"], "gallery");
}

#[test]
fn test_project_config_selects_data() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("patternbook.yaml"),
        format!("data: {}\nsearch_fields: [category]\n", fixture_path()),
    )
    .unwrap();

    let output = patternbook(&home)
        .args(["gallery", "wearables", "--json"])
        .output()
        .expect("Failed to execute patternbook");

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["id"], "shawl");
}
