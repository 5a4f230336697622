use std::io::Write;
use std::process::{Command, Stdio};

fn descriptor_json() -> &'static str {
    r#"{
        "languages": [],
        "venues": [{"id": 1, "name": "Main", "capacity": 100, "time_ranges": [{"start": "2026-07-27T09:00:00Z", "end": "2026-07-27T10:00:00Z"}]}],
        "people": [{"id": 1, "name": "alice", "attending": 1, "time_ranges": [{"start": "2026-07-27T09:00:00Z", "end": "2026-07-27T10:00:00Z"}], "preferred_time_ranges": [], "preferences": {}, "languages": []}],
        "talks": [{"id": 1, "duration": 30, "valid_venues": [1], "time_ranges": [{"start": "2026-07-27T09:00:00Z", "end": "2026-07-27T10:00:00Z"}], "speakers": ["alice"]}]
    }"#
}

#[test]
fn solves_a_descriptor_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scheduler-cli"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn scheduler-cli");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(descriptor_json().as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("wait for scheduler-cli");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON output");
    let talk = &parsed["talks"][0];
    assert_eq!(talk["slot"], 0);
    assert_eq!(talk["venue"], 1);
    assert_eq!(talk["attendees"][0], 1);
}
