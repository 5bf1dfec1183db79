use crate::common::REPOSITORY_DIR;
use crate::common::command::{repository_dir, run_questgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_without_identity_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_questgit_command(dir, &["add", "a.txt"]).assert().success();

    run_questgit_command(dir, &["commit", "-m", "anonymous"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing identity configuration"))
        .stderr(predicate::str::contains("user.name"));

    let branch = dir.join(REPOSITORY_DIR).join("refs/heads/master");
    assert_eq!(std::fs::read_to_string(branch)?, "");

    Ok(())
}
