use anyhow::Result;
use clap::{Parser, Subcommand};
use minigit::areas::repository::Repository;
use minigit::artifacts::diff::diff_algorithm::DiffAlgorithmKind;
use minigit::commands::porcelain::diff::DiffOptions;
use minigit::commands::porcelain::log::LogOptions;
use minigit::config::RepositoryConfig;
use minigit::observability::{LogFormat, init_tracing};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control system",
    long_about = "Tracks snapshots of a working tree with content-addressed blobs, \
    an append-only commit log and named branches.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, help = "Log filter, e.g. `debug` or `minigit=trace`")]
    log_level: Option<String>,
    #[arg(long, global = true, value_enum, help = "Log output format")]
    log_format: Option<LogFormat>,
    #[arg(long, global = true, value_enum, help = "Line diff used for changed files")]
    diff_algorithm: Option<DiffAlgorithmKind>,
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
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files, or of every file below \
        the given directories, and stages them for the next commit."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command lists the commits reachable from the current branch, newest first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "This command creates a branch at the current commit, or lists all branches \
        when no name is given."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch",
        long_about = "This command restores the files of the branch's latest commit and makes it the current branch."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current one",
        long_about = "This command combines the latest commit of the given branch with the current branch. \
        Files changed on both sides keep the current branch's version and are reported as conflicts."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Compare two commits",
        long_about = "This command compares the files of two commits, given by full or abbreviated id."
    )]
    Diff {
        #[arg(index = 1, help = "The first commit id")]
        a: String,
        #[arg(index = 2, help = "The second commit id")]
        b: String,
        #[arg(long, help = "Only list the paths that differ")]
        name_only: bool,
    },
}

fn load_config(cli: &Cli) -> Result<RepositoryConfig> {
    let pwd = std::env::current_dir()?;
    let root = match &cli.command {
        Commands::Init { path: Some(path) } => pwd.join(path),
        _ => pwd,
    };

    let mut config = RepositoryConfig::load_from_env(root)?;
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }
    if let Some(diff_algorithm) = cli.diff_algorithm {
        config.diff_algorithm = diff_algorithm;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log)?;

    let writer = Box::new(std::io::stdout());

    match cli.command {
        Commands::Init { .. } => {
            let mut repository = Repository::new(config, writer)?;
            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = Repository::open(config, writer)?;
            repository.add(&paths)?
        }
        Commands::Commit { message } => {
            let mut repository = Repository::open(config, writer)?;
            repository.commit(&message)?;
        }
        Commands::Log { oneline } => {
            let repository = Repository::open(config, writer)?;
            repository.log(&LogOptions { oneline })?
        }
        Commands::Branch { name } => {
            let mut repository = Repository::open(config, writer)?;
            repository.branch(name.as_deref())?
        }
        Commands::Checkout { branch } => {
            let mut repository = Repository::open(config, writer)?;
            repository.checkout(&branch)?
        }
        Commands::Merge { branch } => {
            let mut repository = Repository::open(config, writer)?;
            repository.merge(&branch)?;
        }
        Commands::Diff { a, b, name_only } => {
            let repository = Repository::open(config, writer)?;
            repository.diff(&a, &b, &DiffOptions { name_only })?
        }
    }

    Ok(())
}
