use crate::common::command::{repository_with_multiple_commits, run_questgit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_oneline_format(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_questgit_command(repository_with_multiple_commits.path(), &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^[0-9a-f]{7} Commit 3\n[0-9a-f]{7} Commit 2\n[0-9a-f]{7} Commit 1\n$",
        )?);

    Ok(())
}
