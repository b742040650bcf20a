use std::process::Command;

use chrono::Utc;

// Stamps the version reported by `--version`: plain semver when built outside
// a git checkout, semver plus commit hash and build date otherwise.
fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let stamp = match git_short_hash() {
        Some(hash) => format!("{version}+{hash}.{}", Utc::now().format("%Y-%m-%d")),
        None => version.to_owned(),
    };

    println!("cargo:rustc-env=TRACING_PRESUBMIT_VERSION={stamp}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned())
}
