use crate::common::command::{repository_dir, run_questgit_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(repository_dir: TempDir) {
    run_questgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let top_level = write_generated_files(repository_dir.path(), 3);
    let nested = write_generated_files(&repository_dir.path().join("a").join("b"), 2);
    let expected = top_level.len() + nested.len();

    run_questgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("staged {expected} file(s)\n")));

    // staging the nested directory again finds nothing new
    run_questgit_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 0 file(s)\n"));
}
