mod completions;
mod new;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use new::NewCommand;

/// Extension trait for exiting on codegen errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cbgen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cbgen")]
#[command(version)]
#[command(about = "Generate cbitcoin structures inheriting CBObject")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the header and source files for a new structure
    New(NewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_with_flags() {
        let cli = Cli::try_parse_from([
            "cbgen",
            "new",
            "Widget",
            "--author",
            "Jane Doe",
            "-d",
            "A simple widget.",
            "--checked-init",
            "--yes",
        ])
        .unwrap();

        let Commands::New(cmd) = cli.command else {
            panic!("expected the new command");
        };
        assert_eq!(cmd.name.as_deref(), Some("Widget"));
        assert_eq!(cmd.author.as_deref(), Some("Jane Doe"));
        assert_eq!(cmd.description.as_deref(), Some("A simple widget."));
        assert!(cmd.checked_init);
        assert!(cmd.yes);
        assert!(!cmd.dry_run);
    }
}
