use crate::common::command::{questgit_commit, repository_dir, run_questgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn files_modified_after_staging_remain_staged(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("kept.txt"), "kept".to_string()));
    write_file(FileSpec::new(dir.join("drift.txt"), "before".to_string()));
    run_questgit_command(dir, &["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 2 file(s)\n"));

    write_file(FileSpec::new(dir.join("drift.txt"), "after".to_string()));
    questgit_commit(dir, "partial")
        .assert()
        .success()
        .stderr(predicate::str::contains("drift.txt"));

    // drift.txt is still staged with stale content, so nothing is committable
    questgit_commit(dir, "still drifted")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    run_questgit_command(dir, &["add", "drift.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("staged 1 file(s)\n"));
    questgit_commit(dir, "restaged").assert().success();

    run_questgit_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restaged"))
        .stdout(predicate::str::contains("partial"));
}
