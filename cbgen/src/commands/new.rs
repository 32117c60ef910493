use std::path::PathBuf;

use cbgen_codegen::{ConstructorMode, GenerationRequest, GeneratorConfig};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, new::NewOptions},
    prompt,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Structure name without the CB prefix (prompted for if omitted)
    pub name: Option<String>,

    /// Author's first and last name (prompted for if omitted)
    #[arg(short, long)]
    pub author: Option<String>,

    /// One-line description of the structure (prompted for if omitted)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Project root the output directory is resolved against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to a configuration file (defaults to <root>/cbgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Make the constructor return NULL when allocation or initialisation fails
    #[arg(long)]
    pub checked_init: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing structure directory without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config();
        let request = self.read_request()?;
        request.validate().unwrap_or_exit();

        let report = ops::new_structure(
            &request,
            &config,
            NewOptions {
                root: &self.root,
                dry_run: self.dry_run,
            },
            |dir| {
                if self.yes {
                    Ok(true)
                } else {
                    prompt::confirm_overwrite(dir)
                }
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_config(&self) -> GeneratorConfig {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path),
            None => GeneratorConfig::discover(&self.root),
        }
        .unwrap_or_exit();

        if self.checked_init {
            config.constructor = ConstructorMode::Checked;
        }
        config
    }

    /// Prompts run in a fixed order: name, author, description.
    fn read_request(&self) -> Result<GenerationRequest> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompt::structure_name()?,
        };
        let author = match &self.author {
            Some(author) => author.clone(),
            None => prompt::author()?,
        };
        let description = match &self.description {
            Some(description) => description.clone(),
            None => prompt::description()?,
        };

        Ok(GenerationRequest::today(name, author, description))
    }
}
