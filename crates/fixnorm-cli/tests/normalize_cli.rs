// crates/fixnorm-cli/tests/normalize_cli.rs

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fixnorm-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn write_case(root: &Path, dir: &str, files: &[(&str, &[u8])]) {
    let d = root.join(dir);
    fs::create_dir_all(&d).expect("mkdir");
    for (name, body) in files {
        fs::write(d.join(name), body).expect("write");
    }
}

#[test]
fn list_normalizes_and_reports_missing_headers() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write_case(root, "051_result", &[("result.expected.c", b"a\r\nb\nc\r\n")]);

    let out = run_ok(bin().args(["list", "051_result", "052_phase", "--root"]).arg(root));
    let text = stdout(&out);

    assert!(text.contains("Fixed: "), "{text}");
    assert!(text.contains("result.expected.c"), "{text}");
    assert_eq!(text.matches("Not found: ").count(), 3, "{text}");
    assert!(text.contains("Processed 2 test directories"), "{text}");
    assert_eq!(fs::read(root.join("051_result/result.expected.c")).expect("read"), b"a\nb\nc\n");
}

#[test]
fn range_normalizes_by_extension() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write_case(root, "46_binary", &[("binary.expected.c", b"x\r\n"), ("binary.expected.h", b"y\r\n")]);
    write_case(root, "47_tristate", &[("tristate.expected.c", b"z\n")]);

    let out = run_ok(
        bin()
            .args(["range", "--lo", "46", "--hi", "48", "--pattern", "{}_*", "--root"])
            .arg(root),
    );
    let text = stdout(&out);

    assert_eq!(text.matches("Fixed: ").count(), 2, "{text}");
    assert_eq!(text.matches("Clean: ").count(), 1, "{text}");
    assert!(text.contains("Processed 2 test directories"), "{text}");
    assert_eq!(fs::read(root.join("46_binary/binary.expected.h")).expect("read"), b"y\n");
}

#[test]
fn check_mode_fails_without_writing() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write_case(root, "058_gate", &[("gate.expected.c", b"g\r\n")]);

    let out = bin()
        .args(["list", "058_gate", "--check", "--root"])
        .arg(root)
        .output()
        .expect("spawn");

    assert!(!out.status.success());
    assert!(stdout(&out).contains("Would fix: "));
    assert_eq!(fs::read(root.join("058_gate/gate.expected.c")).expect("read"), b"g\r\n");

    // after a real run the check passes
    run_ok(bin().args(["list", "058_gate", "--root"]).arg(root));
    run_ok(bin().args(["list", "058_gate", "--check", "--root"]).arg(root));
}

#[test]
fn json_output_is_one_object_per_line() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write_case(root, "061_size", &[("size.expected.c", b"s\r\n")]);

    let out = run_ok(bin().args(["list", "061_size", "--json", "--root"]).arg(root));
    let text = stdout(&out);
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["case"], "061_size");
    assert_eq!(lines[0]["status"], "normalized");
    assert_eq!(lines[0]["written"], true);
    assert_eq!(lines[1]["status"], "not_found");
    assert_eq!(lines[2]["summary"]["test_cases"], 1);
    assert_eq!(lines[2]["summary"]["bytes_removed"], 1);
}

#[test]
fn file_command_and_names_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    let loose = root.join("loose.h");
    fs::write(&loose, b"#pragma once\r\n").expect("write");

    let out = run_ok(bin().arg("file").arg(&loose).arg("--verify"));
    assert!(stdout(&out).contains("Processed 1 files"));
    assert_eq!(fs::read(&loose).expect("read"), b"#pragma once\n");

    write_case(root, "067_link", &[("link.expected.c", b"l\r\n")]);
    let names = root.join("names.txt");
    fs::write(&names, "# corpus\n067_link\n").expect("write names");
    run_ok(bin().args(["list", "--names-file"]).arg(&names).arg("--root").arg(root));
    assert_eq!(fs::read(root.join("067_link/link.expected.c")).expect("read"), b"l\n");
}

#[test]
fn manifest_drives_run_and_show() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write_case(root, "001_sample", &[("sample.golden.rs", b"fn main() {}\r\n")]);

    let manifest = root.join("corpus.json");
    let body = serde_json::json!({
        "root": root,
        "resolve": { "names": { "names": ["001_sample"] } },
        "extensions": ["rs"],
        "infix": "golden"
    });
    fs::write(&manifest, body.to_string()).expect("write manifest");

    let shown = run_ok(bin().args(["show", "--fixtures", "--manifest"]).arg(&manifest));
    let text = stdout(&shown);
    assert!(text.contains("test_cases  = 1"), "{text}");
    assert!(text.contains("sample.golden.rs"), "{text}");

    run_ok(bin().args(["run", "--manifest"]).arg(&manifest));
    assert_eq!(fs::read(root.join("001_sample/sample.golden.rs")).expect("read"), b"fn main() {}\n");
}

#[test]
fn invalid_names_are_rejected_before_touching_disk() {
    let out = bin().args(["list", "../escape"]).output().expect("spawn");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("validation error"));
}

#[test]
fn show_defaults_to_the_named_corpus() {
    let tmp = TempDir::new().expect("tempdir");
    let out = run_ok(bin().args(["show", "--root"]).arg(tmp.path()));
    let text = stdout(&out);
    assert!(text.contains("locate_mode = ByName"), "{text}");
    assert!(text.contains("test_cases  = 25"), "{text}");

    let ranged = run_ok(bin().args(["show", "--builtin", "range", "--root"]).arg(tmp.path()));
    let text = stdout(&ranged);
    assert!(text.contains("{:03}_*"), "{text}");
    assert!(text.contains("test_cases  = 0"), "{text}");
}
