use std::fs;
use std::process::Command;

fn bin() -> String {
    env!("CARGO_BIN_EXE_juliaset").to_string()
}

fn render_args(out: &std::path::Path, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "render".into(),
        "--width".into(),
        "4".into(),
        "--height".into(),
        "4".into(),
        "--quiet".into(),
        "-o".into(),
        out.to_str().unwrap().into(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

#[test]
fn truncate_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.pgm");

    for _ in 0..2 {
        let output = Command::new(bin())
            .args(render_args(&out, &[]))
            .output()
            .expect("run");
        assert!(output.status.success());
    }

    let image = fs::read_to_string(&out).unwrap();
    assert_eq!(image.matches("P2\n").count(), 1, "truncate keeps one image");

    // Deterministic sweep: a fresh path yields the same bytes.
    let out2 = dir.path().join("julia2.pgm");
    let output = Command::new(bin())
        .args(render_args(&out2, &[]))
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(image, fs::read_to_string(&out2).unwrap());
}

#[test]
fn append_accumulates_whole_images() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.pgm");

    for _ in 0..2 {
        let output = Command::new(bin())
            .args(render_args(&out, &["--append"]))
            .output()
            .expect("run");
        assert!(output.status.success());
    }

    let image = fs::read_to_string(&out).unwrap();
    assert_eq!(
        image.matches("P2\n# Fractal image\n").count(),
        2,
        "append concatenates headers:\n{image}"
    );
    let halves = image.len();
    assert_eq!(halves % 2, 0);
    assert_eq!(image[..halves / 2], image[halves / 2..]);
}
