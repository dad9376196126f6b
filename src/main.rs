use std::path::PathBuf;

use clap::Parser;
use verit::app::{self, Options, TagMode};
use verit::git::SystemGit;
use verit::logging;
use verit::project::Registry;
use verit::version::{Bump, Version};

#[derive(Parser)]
#[command(name = "verit")]
#[command(
    about = "Detect a project's type and manage the version in its manifest",
    disable_version_flag = true
)]
struct Cli {
    /// Version to set, like 1.2.3
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    set_version: Option<Version>,

    /// Bump major version: keep, inc or a number; bare flag increases by 1
    #[arg(short = 'M', long, value_name = "N", num_args = 0..=1, default_value = "keep", default_missing_value = "inc")]
    major: Bump,

    /// Bump minor version: keep, inc or a number; bare flag increases by 1
    #[arg(short = 'm', long, value_name = "N", num_args = 0..=1, default_value = "keep", default_missing_value = "inc")]
    minor: Bump,

    /// Bump patch version: keep, inc or a number; bare flag increases by 1
    #[arg(short = 'p', long, value_name = "N", num_args = 0..=1, default_value = "keep", default_missing_value = "inc")]
    patch: Bump,

    /// Set build metadata
    #[arg(short, long)]
    build: Option<String>,

    /// Work directory of the project, defaults to the current directory
    #[arg(short, long, value_name = "DIR")]
    work_dir: Option<PathBuf>,

    /// Create a git tag for the current version
    #[arg(short, long)]
    tag: bool,

    /// Create a git tag and push it with --force
    #[arg(short = 'T', long)]
    tag_push: bool,

    /// Verbose output
    #[arg(long)]
    verbose: bool,

    /// Show app version
    #[arg(short = 'V', long)]
    app_version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.app_version {
        println!("v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(cli.verbose);

    let work_dir = match cli.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let options = Options {
        work_dir,
        set_version: cli.set_version,
        major: cli.major,
        minor: cli.minor,
        patch: cli.patch,
        build: cli.build,
        tag: TagMode::from_flags(cli.tag, cli.tag_push),
    };

    let outcome = app::run(&Registry::standard(), &options, SystemGit)?;

    if cli.verbose {
        if outcome.changed {
            println!("version changed");
        }
        if let Some(tag) = &outcome.tag {
            match options.tag {
                TagMode::Push => println!("created and pushed tag '{}'", tag),
                _ => println!("created tag '{}'", tag),
            }
        }
        println!("{}", outcome.describe());
    } else {
        println!("{}", outcome.version);
    }

    Ok(())
}
