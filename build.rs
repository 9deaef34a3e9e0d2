//! bakes a startup banner into the binary, see
//! - <https://doc.rust-lang.org/cargo/reference/build-scripts.html>
//! - <https://doc.rust-lang.org/cargo/reference/environment-variables.html>

use std::process::Command;
use std::time::SystemTime;
use std::{env, io};

fn main() {
    let commit = match git_commit_hash() {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("WARN: couldn't retrieve commit hash, you probably have no `git`: {e}");
            String::from("<unknown>")
        }
    };

    let banner_msg = format!(
        "
-------------- {} --------------
{}
version: {} ({} build for {})
built on {} from commit {}
repo: {}
--------------------------------
",
        env!("CARGO_PKG_NAME").to_uppercase(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env::var("PROFILE").unwrap(),
        env::var("TARGET").unwrap(),
        humantime::format_rfc3339_seconds(SystemTime::now()),
        commit.trim(),
        env!("CARGO_PKG_REPOSITORY"),
    );

    println!("cargo:rustc-env=BANNER={banner_msg:?}"); // escape newlines and quote it
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

/// get current git commit hash
/// # Errors
/// if can't, i.d. no `git` installed
fn git_commit_hash() -> io::Result<String> {
    let git_output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()?;
    Ok(String::from_utf8_lossy(&git_output.stdout).to_string())
}
