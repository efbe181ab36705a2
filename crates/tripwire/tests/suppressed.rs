//! With the `diagnostics` feature off, DefaultHandler must produce zero I/O.
//! Run with `--no-default-features`.

#![cfg(not(any(feature = "diagnostics", feature = "disable-checks")))]

use std::env;
use std::process::Command;

use tripwire::{DefaultHandler, check};

const CHILD_ENV: &str = "TRIPWIRE_SUPPRESSED_TEST_CHILD";

#[test]
fn suppressed_default_handler_is_silent() {
    if env::var_os(CHILD_ENV).is_some() {
        let x = -4i32;
        check!(x >= 0, DefaultHandler, "x was negative");
        return;
    }

    let output = Command::new(env::current_exe().expect("test binary path"))
        .args([
            "suppressed_default_handler_is_silent",
            "--test-threads=1",
            "--nocapture",
        ])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to respawn test binary");

    // The abort still happens, but nothing is printed first.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("[tripwire]"));
    assert!(!stderr.contains("x was negative"));
}
