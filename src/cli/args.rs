// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};

use super::value_enum::{CliFormat, CliLevel};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "freeze-scope",
    version = crate::VERSION,
    about = "Convert freeze window entity scopes between their stored and form shapes"
)]
pub struct Args {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the form path map of a declaration
    Form(FormArgs),
    /// Write an edited form back into a declaration
    Apply(ApplyArgs),
    /// Check a form against the required-field rules of a level
    Validate(ValidateArgs),
    /// Print an empty entity config row for a level
    Template(TemplateArgs),
    /// Print read-only summaries of every row of a declaration
    Summary(DocumentArgs),
    /// Print which hierarchy fields a level shows
    Visibility(LevelArgs),
}

/// Declaration plus the resources used to label it.
#[derive(ClapArgs, Debug)]
pub struct DocumentArgs {
    /// Freeze declaration (YAML)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub document: PathBuf,

    /// Resource snapshot (JSON, camelCase maps plus freezeWindowLevel)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub resources: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct FormArgs {
    #[command(flatten)]
    pub input: DocumentArgs,

    #[arg(long, value_enum, default_value = "json")]
    pub format: CliFormat,
}

#[derive(ClapArgs, Debug)]
pub struct ApplyArgs {
    /// Freeze declaration (YAML)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub document: PathBuf,

    /// Edited form path map (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub form: PathBuf,

    /// Apply only this row of the form
    #[arg(long)]
    pub row: Option<usize>,

    /// Scope level; defaults to the resources' level, then to the document's scope
    #[arg(long, value_enum, ignore_case = true)]
    pub level: Option<CliLevel>,

    /// Resource snapshot consulted for the level
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub resources: Option<PathBuf>,

    /// Write the updated declaration here instead of printing it
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ValidateArgs {
    /// Form path map (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub form: PathBuf,

    #[arg(long, value_enum, ignore_case = true)]
    pub level: CliLevel,
}

#[derive(ClapArgs, Debug)]
pub struct TemplateArgs {
    #[arg(long, value_enum, ignore_case = true)]
    pub level: CliLevel,

    /// Name of the new row
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, value_enum, default_value = "yaml")]
    pub format: CliFormat,
}

#[derive(ClapArgs, Debug)]
pub struct LevelArgs {
    #[arg(long, value_enum, ignore_case = true)]
    pub level: CliLevel,

    #[arg(long, value_enum, default_value = "json")]
    pub format: CliFormat,
}
