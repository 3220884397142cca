use std::fs;
use std::process::Command;

fn bin() -> String {
    env!("CARGO_BIN_EXE_juliaset").to_string()
}

#[test]
fn params_reflects_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(
        &cfg,
        "width = 128\nheight = 96\njulia_re = -0.8\njulia_im = 0.156\n",
    )
    .unwrap();

    let output = Command::new(bin())
        .args(["--config"])
        .arg(cfg.to_str().unwrap())
        .args(["params", "--iterations", "64"])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    // File values survive, the flag wins over the file default.
    assert!(stdout.contains("width = 128"), "stdout:\n{stdout}");
    assert!(stdout.contains("height = 96"));
    assert!(stdout.contains("julia_re = -0.8"));
    assert!(stdout.contains("max_iterations = 64"));
}

#[test]
fn missing_explicit_config_warns_and_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("nope.toml");

    let output = Command::new(bin())
        .args(["--config"])
        .arg(cfg.to_str().unwrap())
        .args(["params"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("width = 2048"));
    assert!(stdout.contains("max_iterations = 255"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "width = \"wide\"").unwrap();

    let output = Command::new(bin())
        .args(["--config"])
        .arg(cfg.to_str().unwrap())
        .args(["params"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
}
