//! Dirtag CLI application entry point
//!
//! Loads the tag database named by `--config` (default `.dirtag`), runs at
//! most one command against it and exits.
//!
//! # Usage
//!
//! ```bash
//! # Register a file, then tag it
//! dirtag new-file report.pdf
//! dirtag add-tag report.pdf work
//!
//! # Files carrying both tags, NUL separated
//! dirtag -d '\0' find-tag work:urgent | xargs -0 ls -l
//!
//! # Reset or forget a file
//! dirtag clear-tag report.pdf
//! dirtag remove-file report.pdf
//! ```
//!
//! Any failure prints `Error: <reason>` on stderr and exits with status 1.

use dirtag::{
    DirtagError,
    cli::{Cli, Commands, generate_completions},
    commands, logging,
    db::Database,
    output::error_line,
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, DirtagError>;

fn run(cli: &Cli) -> Result<()> {
    let resolved = cli.resolve(&cli.settings()?);
    let open = || -> Result<Database> {
        Ok(Database::open(&resolved.database)?.with_write_mode(resolved.write_mode))
    };

    match &cli.command {
        Some(Commands::AddTag { file, tag }) => commands::add_tag(&open()?, file, tag)?,
        Some(Commands::ClearTag { file }) => commands::clear_tag(&open()?, file)?,
        Some(Commands::FindTag { tagspec }) => {
            commands::find_tag(&open()?, tagspec, &resolved.delimiter, &mut io::stdout().lock())?;
        }
        Some(Commands::RemoveFile { file }) => commands::remove_file(&open()?, file)?,
        Some(Commands::NewFile { file, tagspec }) => commands::new_file(&open()?, file, tagspec.as_deref())?,
        Some(Commands::Completions { shell }) => generate_completions(*shell, &mut io::stdout()),
        Some(Commands::InitSettings) => {
            let path = commands::init_settings(&resolved, None)?;
            if !cli.quiet {
                println!("Settings written to {}", path.display());
            }
        }
        // Without a command the database is still loaded, so a broken file is reported
        None => {
            open()?;
        }
    }

    Ok(())
}

/// Main entry point for the dirtag application
///
/// Parses command-line arguments, sets up logging and dispatches to the
/// appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}
