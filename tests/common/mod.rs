use assert_cmd::Command;

pub fn cheatset_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cheatset").unwrap();
    cmd.env_remove("CHEATSET_LOG");
    cmd.env_remove("CHEATSET_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}
