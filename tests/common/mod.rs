#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn todofile_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todofile").unwrap();
    cmd.env_remove("TODOFILE_ROOT");
    cmd.env_remove("TODOFILE_DATA_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized list at `root`
pub fn todofile_in(root: &Path) -> Command {
    let mut cmd = todofile_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_list(root: &Path) {
    todofile_cmd().arg("init").arg(root).assert().success();
}
