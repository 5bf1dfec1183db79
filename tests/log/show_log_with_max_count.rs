use crate::common::command::{repository_with_multiple_commits, run_questgit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("1", 1)]
#[case("2", 2)]
#[case("10", 3)]
fn show_log_with_max_count(
    repository_with_multiple_commits: TempDir,
    #[case] max_count: &str,
    #[case] expected: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_questgit_command(
        repository_with_multiple_commits.path(),
        &["log", "-n", max_count],
    )
    .assert()
    .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let shown = stdout
        .lines()
        .filter(|line| line.starts_with("commit "))
        .count();
    assert_eq!(shown, expected);

    Ok(())
}
