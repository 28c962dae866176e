//! The headless binary keeps stdout machine-readable.

use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn test_stdout_carries_only_json_outcomes() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_blog-router"))
        .env("RUST_LOG", "blog_router=debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("blog-router should start");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"#/article/42\nback\n/irt-lab\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let outcomes: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every stdout line is JSON"))
        .collect();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0]["outcome"], "navigated");
    assert_eq!(outcomes[0]["route"], "article");
    assert_eq!(outcomes[1]["route"], "home");
    assert_eq!(outcomes[2]["view"], "IrtLabView");

    // Logs still happen, on stderr
    assert!(!output.stderr.is_empty());
}
