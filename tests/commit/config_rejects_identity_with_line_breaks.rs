use crate::common::REPOSITORY_DIR;
use crate::common::command::{repository_dir, run_questgit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn config_rejects_identity_with_line_breaks(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();

    run_questgit_command(dir, &["config", "user.name", "Ada\nLovelace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid identity"))
        .stderr(predicate::str::contains("user.name"));
    run_questgit_command(dir, &["config", "user.email", "<ada@example.com>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user.email"));

    assert!(!dir.join(REPOSITORY_DIR).join("config").exists());
}
