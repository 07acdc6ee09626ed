//! Integration tests for the `twodo` binary.
//!
//! Each test feeds an intent script to the binary (via stdin or a script
//! file) and verifies the rendered board state.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;

/// Get the path to the built `twodo` binary.
fn twodo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("twodo");
    path
}

/// Run the binary with the given args, feeding `script` on stdin.
/// Returns (stdout, stderr).
fn run_script(args: &[&str], script: &str) -> (String, String) {
    let mut child = Command::new(twodo_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn twodo");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let out = child.wait_with_output().unwrap();
    assert!(out.status.success(), "twodo exited with {}", out.status);
    (
        String::from_utf8(out.stdout).unwrap(),
        String::from_utf8(out.stderr).unwrap(),
    )
}

/// Run with --quiet --json and parse the single `show` at the end of the
/// script into (active texts+done, completed texts+done).
fn final_state(script: &str) -> (Vec<(String, bool)>, Vec<(String, bool)>) {
    let (stdout, _) = run_script(&["--quiet", "--json"], script);
    let state: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not JSON");

    let list = |name: &str| -> Vec<(String, bool)> {
        state[name]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| {
                (
                    t["text"].as_str().unwrap().to_string(),
                    t["done"].as_bool().unwrap(),
                )
            })
            .collect()
    };
    (list("active"), list("completed"))
}

fn entries(items: &[(&str, bool)]) -> Vec<(String, bool)> {
    items
        .iter()
        .map(|(text, done)| (text.to_string(), *done))
        .collect()
}

#[test]
fn test_add_appends_in_order() {
    let (active, completed) = final_state(
        "\
add First
add Second
add Third
show
",
    );
    assert_eq!(
        active,
        entries(&[("First", false), ("Second", false), ("Third", false)])
    );
    assert_eq!(completed, entries(&[]));
}

#[test]
fn test_same_list_reorder() {
    // [A,B,C,D], drag index 0 to index 2 → [B,C,A,D]
    let (active, _) = final_state(
        "\
add A
add B
add C
add D
move active 0 active 2
show
",
    );
    assert_eq!(
        active,
        entries(&[("B", false), ("C", false), ("A", false), ("D", false)])
    );
}

#[test]
fn test_cross_list_move_keeps_done_flag() {
    let (active, completed) = final_state(
        "\
add A
add B
move active 0 completed 0
show
",
    );
    assert_eq!(active, entries(&[("B", false)]));
    // dragged into completed, but the flag was never toggled
    assert_eq!(completed, entries(&[("A", false)]));
}

#[test]
fn test_cancelled_drag_changes_nothing() {
    let (active, completed) = final_state(
        "\
add A
add B
cancel active 0
show
",
    );
    assert_eq!(active, entries(&[("A", false), ("B", false)]));
    assert_eq!(completed, entries(&[]));
}

#[test]
fn test_malformed_lines_warn_and_are_skipped() {
    let (stdout, stderr) = run_script(
        &["--quiet", "--json"],
        "\
add A
frobnicate 12
move nowhere 0 active 0
show
",
    );
    assert!(stderr.contains("warning: line 2"));
    assert!(stderr.contains("warning: line 3"));
    let state: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(state["active"].as_array().unwrap().len(), 1);
}

#[test]
fn test_toggle_then_drag_session() {
    let (active, completed) = final_state(
        "\
add Buy milk
add Walk dog
add Write tests
toggle active 0
edit active 1 Walk the dog
move active 0 completed 0
delete active 1
show
",
    );
    assert_eq!(active, entries(&[("Walk the dog", false)]));
    assert_eq!(completed, entries(&[("Buy milk", true)]));
}

#[test]
fn test_toggle_twice_restores_flag() {
    let (active, _) = final_state(
        "\
add A
toggle active 0
toggle active 0
show
",
    );
    assert_eq!(active, entries(&[("A", false)]));
}

#[test]
fn test_confirmation_lines_and_script_file() {
    // add prints the assigned id; feed the script through a file this time
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("session.twodo");
    std::fs::write(
        &script_path,
        "\
# a comment, skipped
add Only task
show
",
    )
    .unwrap();

    let out = Command::new(twodo_bin())
        .arg(script_path.to_str().unwrap())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    let mut lines = stdout.lines();
    let id_line = lines.next().unwrap();
    let id: u64 = id_line.trim().parse().expect("first line is the new id");
    assert!(id > 0);

    let rest: Vec<&str> = lines.collect();
    assert_eq!(rest[0], "active:");
    assert_eq!(rest[1], format!("  0. [ ] {} Only task", id));
    assert_eq!(rest[2], "completed:");
    assert_eq!(rest[3], "  (empty)");
}
