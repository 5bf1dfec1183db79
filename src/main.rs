use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use questgit::areas::repository::Repository;
use questgit::artifacts::core::error::RepositoryResult;
use questgit::commands::porcelain::log::LogOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "questgit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control core",
    long_about = "questgit stores file snapshots as content-addressed objects, \
    stages files in an index, records commits on a single branch \
    and walks their history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "config",
        about = "Get or set the author identity",
        long_about = "This command prints the value of user.name or user.email, \
        or sets it when a value is given."
    )]
    Config {
        #[arg(index = 1, help = "The key to read or write (user.name, user.email)")]
        key: String,
        #[arg(index = 2, help = "The new value")]
        value: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages the given files. Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files whose content still matches \
        the working tree as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists commits reachable from a branch, HEAD or a commit hash, newest first."
    )]
    Log {
        #[arg(index = 1, help = "The revision to start from (defaults to HEAD)")]
        revision: Option<String>,
        #[arg(short = 'n', long = "max-count", help = "Limit the number of commits shown")]
        max_count: Option<usize>,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object database",
        long_about = "This command prints the blob ID of a file and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    colored::control::set_override(std::io::stdout().is_terminal());

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => Ok(()),
        Err(error) if error.is_validation() => {
            eprintln!("{error}");
            std::process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}

fn run(command: &Commands) -> RepositoryResult<()> {
    let pwd = std::env::current_dir().map_err(anyhow::Error::from)?;
    let pwd = pwd.to_string_lossy();

    match command {
        Commands::Init { path } => {
            let path = path.as_deref().unwrap_or(&pwd);
            open_repository(path)?.init()
        }
        Commands::Config { key, value } => open_repository(&pwd)?.configure(key, value.as_deref()),
        Commands::Add { paths } => open_repository(&pwd)?.add(paths),
        Commands::Commit { message } => open_repository(&pwd)?.commit(message),
        Commands::Log {
            revision,
            max_count,
            oneline,
        } => open_repository(&pwd)?.log(&LogOptions {
            revision: revision.clone(),
            max_count: *max_count,
            oneline: *oneline,
        }),
        Commands::CatFile { sha } => open_repository(&pwd)?.cat_file(sha),
        Commands::HashObject { write, file } => open_repository(&pwd)?.hash_object(file, *write),
    }
}

fn open_repository(path: &str) -> RepositoryResult<Repository> {
    Ok(Repository::new(path, Box::new(std::io::stdout()))?)
}
