//! Stamps the `--version` string into the binary as `USUARIOS_VERSION`.
//!
//! Order of preference: `USUARIOS_BUILD_VERSION` from the environment (for
//! packaged builds without a checkout), then `git describe`, then the crate
//! version.

use std::env;
use std::process::Command;

const OVERRIDE_VAR: &str = "USUARIOS_BUILD_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={OVERRIDE_VAR}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = env::var(OVERRIDE_VAR)
        .ok()
        .and_then(|v| non_empty(&v))
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=USUARIOS_VERSION={version}");
}

/// `git describe` with a `-dirty` suffix for uncommitted changes.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let raw = String::from_utf8(output.stdout).ok()?;
    non_empty(&raw)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
