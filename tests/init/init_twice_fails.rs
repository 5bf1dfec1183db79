use crate::common::command::{init_repository_dir, run_questgit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(init_repository_dir: TempDir) {
    run_questgit_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository already initialized"));

    // the existing history survives
    run_questgit_command(init_repository_dir.path(), &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial commit"));
}
