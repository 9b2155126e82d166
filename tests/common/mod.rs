use assert_cmd::Command;
use std::path::Path;

/// Remote nothing listens on, so syncs and pushes fail fast
pub const OFFLINE_REMOTE: &str = "http://127.0.0.1:9/posts";

pub fn quotebook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.env_remove("QUOTEBOOK_ROOT");
    cmd.env_remove("QUOTEBOOK_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a quotebook at `path` pointed at `remote_url`
#[allow(dead_code)]
pub fn init_with_remote(path: &Path, remote_url: &str) {
    quotebook_cmd()
        .arg("init")
        .arg(path)
        .arg("--remote-url")
        .arg(remote_url)
        .assert()
        .success();
}
