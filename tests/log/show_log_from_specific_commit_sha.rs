use crate::common::command::{
    get_head_commit_sha, get_parent_commit_id, repository_with_multiple_commits,
    run_questgit_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_from_specific_commit_sha(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let head = get_head_commit_sha(dir)?;
    let middle = get_parent_commit_id(dir, &head)?.ok_or("head has no parent")?;

    let output = run_questgit_command(dir, &["log", "--oneline", &middle])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let messages = stdout
        .lines()
        .filter_map(|line| line.split_once(' ').map(|(_, message)| message))
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["Commit 2", "Commit 1"]);
    assert!(stdout.starts_with(&middle[..7]));

    Ok(())
}
