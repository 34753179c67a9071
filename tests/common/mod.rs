use assert_cmd::Command;

pub fn notekeeper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notekeeper").unwrap();
    cmd.env_remove("NOTEKEEPER_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--no-color");
    cmd
}
