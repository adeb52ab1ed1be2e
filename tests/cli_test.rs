use std::process::Command;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries.json");

const ALL_NAMES: [&str; 7] = [
    "France",
    "Germany",
    "Spain",
    "Italy",
    "Poland",
    "Switzerland",
    "Luxembourg",
];

fn geodle() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_geodle"));
    cmd.env("RUST_LOG", "warn,geodle=info")
        .args(["--countries", FIXTURE, "--date", "2026-10-17"]);
    cmd
}

/// Seven distinct guesses always finish a six-guess game
fn finishing_guesses() -> Vec<String> {
    ALL_NAMES
        .iter()
        .flat_map(|name| ["--guess".to_string(), name.to_string()])
        .collect()
}

#[test]
fn test_headless_game_prints_share_text() {
    let output = geodle()
        .arg("--memory")
        .args(finishing_guesses())
        .arg("--share")
        .output()
        .expect("Failed to execute geodle");

    assert!(
        output.status.success(),
        "geodle failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("🌍 Geodle 10/17/2026"), "stdout: {}", stdout);
    assert!(stdout.contains("geodle.app"), "stdout: {}", stdout);
    assert!(stdout.contains("Played: 1"), "stdout: {}", stdout);
}

#[test]
fn test_progress_survives_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_str().unwrap().to_string();

    let first = geodle()
        .args(["--data-dir", &data_dir])
        .args(finishing_guesses())
        .output()
        .expect("Failed to execute geodle");
    assert!(first.status.success());
    assert!(dir.path().join("geodle-state.json").exists());
    assert!(dir.path().join("geodle-stats.json").exists());

    // Replaying the same day must not count a second game
    let second = geodle()
        .args(["--data-dir", &data_dir])
        .args(finishing_guesses())
        .output()
        .expect("Failed to execute geodle");
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Played: 1"), "stdout: {}", stdout);
}

#[test]
fn test_stats_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = geodle()
        .args(["--data-dir", dir.path().to_str().unwrap(), "--stats"])
        .output()
        .expect("Failed to execute geodle");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Played: 0"), "stdout: {}", stdout);
}

#[test]
fn test_unknown_country_is_reported() {
    let output = geodle()
        .args(["--memory", "--guess", "Atlantis"])
        .output()
        .expect("Failed to execute geodle");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown country: Atlantis"), "stdout: {}", stdout);
}

#[test]
fn test_missing_dataset_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_geodle"))
        .args(["--memory", "--countries", "/nonexistent/countries.json"])
        .output()
        .expect("Failed to execute geodle");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read country dataset"), "stderr: {}", stderr);
}
