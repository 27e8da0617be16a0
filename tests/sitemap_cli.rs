//! Runs the `generate-sitemap` binary in a scratch directory.

use std::fs;
use std::process::Command;

use kenetg_backend::sitemap::{build_xml, BASE_URL, DEFAULT_ROUTES};
use tempfile::TempDir;

fn run_generator(dir: &TempDir) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_generate-sitemap"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_writes_web_sitemap() {
    let dir = TempDir::new().unwrap();

    let output = run_generator(&dir);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("generated sitemap -> web/sitemap.xml"));

    let written = fs::read_to_string(dir.path().join("web").join("sitemap.xml")).unwrap();
    assert_eq!(written, build_xml(BASE_URL, DEFAULT_ROUTES));
    assert_eq!(written.matches("<url>").count(), 4);
    assert!(written.contains("<loc>https://kenetg.com/tienda/</loc>"));
}

#[test]
fn test_second_run_is_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("web").join("sitemap.xml");

    assert!(run_generator(&dir).status.success());
    let first = fs::read(&path).unwrap();
    assert!(run_generator(&dir).status.success());
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_blocked_output_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web"), "not a directory").unwrap();

    let output = run_generator(&dir);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}
