use crate::common::command::{
    get_head_commit_sha, repository_dir, run_questgit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_with_identity_from_config(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();
    run_questgit_command(dir, &["config", "user.name", "Ada Lovelace"])
        .assert()
        .success();
    run_questgit_command(dir, &["config", "user.email", "ada@example.com"])
        .assert()
        .success();

    run_questgit_command(dir, &["config", "user.name"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Ada Lovelace\n"));

    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_questgit_command(dir, &["add", "a.txt"]).assert().success();
    run_questgit_command(dir, &["commit", "-m", "configured"])
        .assert()
        .success();

    let head = get_head_commit_sha(dir)?;
    run_questgit_command(dir, &["cat-file", "-p", &head])
        .assert()
        .success()
        .stdout(predicate::str::contains("author Ada Lovelace <ada@example.com> "))
        .stdout(predicate::str::contains(
            "committer Ada Lovelace <ada@example.com> ",
        ));

    Ok(())
}
