use crate::common::REPOSITORY_DIR;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::Path;

/// Committer timestamp used by `questgit_commit`, `%Y-%m-%d %H:%M:%S %z`
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_questgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_questgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    questgit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// Run the binary in `dir` with no author identity in the environment
pub fn run_questgit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("questgit").expect("Failed to find questgit binary");
    cmd.current_dir(dir)
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .env_remove("GIT_AUTHOR_DATE")
        .env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[derive(Debug, Clone, new)]
pub struct RandomAuthor {
    pub name: String,
    pub email: String,
}

pub fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

pub fn questgit_commit(dir: &Path, message: &str) -> Command {
    questgit_commit_as(dir, message, &RandomAuthor::new(
        "fake_user".to_string(),
        "fake_email@email.com".to_string(),
    ))
}

pub fn questgit_commit_as(dir: &Path, message: &str, author: &RandomAuthor) -> Command {
    let mut cmd = run_questgit_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", author.name.as_str()),
        ("GIT_AUTHOR_EMAIL", author.email.as_str()),
        ("GIT_AUTHOR_DATE", AUTHOR_DATE),
    ]);
    cmd
}

/// Parent of a commit, read back through `questgit cat-file -p`
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let output = run_questgit_command(dir, &["cat-file", "-p", commit_id])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    // headers end at the first blank line
    Ok(stdout
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("parent "))
        .map(str::to_string))
}

/// Commit the current branch points to, following HEAD
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let repository_path = dir.join(REPOSITORY_DIR);
    let head_content = std::fs::read_to_string(repository_path.join("HEAD"))?;

    if let Some(ref_path) = head_content.strip_prefix("ref: ") {
        let commit_sha = std::fs::read_to_string(repository_path.join(ref_path.trim()))?;
        Ok(commit_sha.trim().to_string())
    } else {
        Ok(head_content.trim().to_string())
    }
}

/// Path of a stored object inside the object database
pub fn object_path(dir: &Path, oid: &str) -> std::path::PathBuf {
    dir.join(REPOSITORY_DIR)
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..])
}

#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    run_questgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for n in 1..=3 {
        let file = FileSpec::new(
            repository_dir.path().join(format!("file{n}.txt")),
            format!("content {n}"),
        );
        write_file(file);
        run_questgit_command(repository_dir.path(), &["add", "."])
            .assert()
            .success();
        questgit_commit(repository_dir.path(), &format!("Commit {n}"))
            .assert()
            .success();
    }

    repository_dir
}
