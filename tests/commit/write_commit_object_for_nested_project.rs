use crate::common::command::{
    generate_random_author, get_head_commit_sha, questgit_commit_as, repository_dir,
    run_questgit_command,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn cat_file(dir: &std::path::Path, oid: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_questgit_command(dir, &["cat-file", "-p", oid])
        .assert()
        .success();

    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}

#[rstest]
fn write_commit_object_for_nested_project(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_questgit_command(dir, &["init"]).assert().success();

    let top_level = write_generated_files(dir, (1..=4).fake::<usize>());
    write_generated_files(&dir.join("src"), (1..=4).fake::<usize>());
    write_generated_files(&dir.join("src").join("nested"), 1);

    let author = generate_random_author();
    let message = Words(3..6).fake::<Vec<String>>().join(" ");

    run_questgit_command(dir, &["add", "."]).assert().success();
    questgit_commit_as(dir, &message, &author)
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] .+\n$",
        )?);

    let commit_oid = get_head_commit_sha(dir)?;
    assert_eq!(commit_oid.len(), 40);

    let commit = cat_file(dir, &commit_oid)?;
    let mut lines = commit.lines();
    let tree_oid = lines
        .next()
        .and_then(|line| line.strip_prefix("tree "))
        .ok_or("commit does not start with a tree line")?
        .to_string();
    assert_eq!(
        lines.next(),
        Some(format!("author {} <{}> 1672574400", author.name, author.email).as_str())
    );
    assert_eq!(
        lines.next(),
        Some(format!("committer {} <{}> 1672574400", author.name, author.email).as_str())
    );
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some(message.as_str()));

    // the root tree lists every top-level file plus one subtree, sorted by name
    let tree = cat_file(dir, &tree_oid)?;
    let mut expected_names = top_level
        .iter()
        .map(|file| {
            file.path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();
    expected_names.push("src".to_string());
    expected_names.sort();

    let names = tree
        .lines()
        .map(|line| line.split_once('\t').map(|(_, name)| name.to_string()))
        .collect::<Option<Vec<_>>>()
        .ok_or("tree line without a TAB separator")?;
    assert_eq!(names, expected_names);

    let src_line = tree
        .lines()
        .find(|line| line.ends_with("\tsrc"))
        .ok_or("no src entry")?;
    assert!(src_line.starts_with("040000 tree "));
    for line in tree.lines().filter(|line| !line.ends_with("\tsrc")) {
        assert!(line.starts_with("100644 blob "), "unexpected entry {line}");
    }

    Ok(())
}
