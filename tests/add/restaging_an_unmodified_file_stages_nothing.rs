use crate::common::command::{repository_dir, run_questgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn restaging_an_unmodified_file_stages_nothing(repository_dir: TempDir) {
    run_questgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let file = FileSpec::new(repository_dir.path().join("a.txt"), "hello".to_string());
    write_file(file.clone());

    run_questgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 1 file(s)\n"));

    run_questgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 0 file(s)\n"));

    write_file(FileSpec::new(file.path, "hello2".to_string()));
    run_questgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 1 file(s)\n"));
}
