//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use crate::request::SourceKind;
use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: create a new project from a git or local template", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["git", "local"])))]
pub struct Args {
    /// Git repository URL of the template (https:// or git@)
    #[arg(long, value_name = "URL")]
    pub git: Option<String>,

    /// Path to a local template directory
    #[arg(long, value_name = "PATH")]
    pub local: Option<String>,

    /// Branch to clone from the git repository
    #[arg(long, requires = "git", conflicts_with = "local")]
    pub branch: Option<String>,

    /// Name of the generated project. Asked interactively when omitted.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Generate without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print progress events as JSON lines instead of log messages
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The template source and its kind.
    pub fn source(&self) -> (&str, SourceKind) {
        match (&self.git, &self.local) {
            (Some(url), _) => (url.as_str(), SourceKind::Remote),
            (None, Some(path)) => (path.as_str(), SourceKind::Local),
            // The required "source" group guarantees one of the two.
            (None, None) => ("", SourceKind::Local),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no template source is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("Please provide a template source using --git or --local.\n");
                if let Err(err) = Args::command().print_help() {
                    eprintln!("{}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
