use crate::common::command::{object_path, repository_dir, run_questgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn cat_file_distinguishes_missing_from_corrupt(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    let output = run_questgit_command(dir, &["hash-object", "-w", "a.txt"])
        .assert()
        .success();
    let oid = String::from_utf8(output.get_output().stdout.clone())?
        .trim()
        .to_string();

    run_questgit_command(dir, &["cat-file", "-p", "0000000000000000000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    std::fs::write(object_path(dir, &oid), b"definitely not zlib")?;

    run_questgit_command(dir, &["cat-file", "-p", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupt"));

    Ok(())
}
