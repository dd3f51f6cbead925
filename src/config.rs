// src/config.rs
use std::path::PathBuf;

use freeze_scope_domain::FreezeWindowLevel;
use freeze_scope_ports::{FreezeDeclaration, Resources};

use crate::cli::{ApplyArgs, Args, Command, DocumentArgs, FormArgs, LevelArgs, TemplateArgs, ValidateArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Resolved settings of one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub verbosity: u8,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Form {
        document: PathBuf,
        resources: PathBuf,
        format: OutputFormat,
    },
    Apply {
        document: PathBuf,
        form: PathBuf,
        row: Option<usize>,
        level: Option<FreezeWindowLevel>,
        resources: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    Validate {
        form: PathBuf,
        level: FreezeWindowLevel,
    },
    Template {
        level: FreezeWindowLevel,
        name: String,
        format: OutputFormat,
    },
    Summary {
        document: PathBuf,
        resources: PathBuf,
    },
    Visibility {
        level: FreezeWindowLevel,
        format: OutputFormat,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Form(FormArgs { input: DocumentArgs { document, resources }, format }) => {
                Self::Form { document, resources, format: format.into() }
            }
            Command::Apply(ApplyArgs { document, form, row, level, resources, output }) => {
                Self::Apply { document, form, row, level: level.map(Into::into), resources, output }
            }
            Command::Validate(ValidateArgs { form, level }) => Self::Validate { form, level: level.into() },
            Command::Template(TemplateArgs { level, name, format }) => {
                Self::Template { level: level.into(), name, format: format.into() }
            }
            Command::Summary(DocumentArgs { document, resources }) => Self::Summary { document, resources },
            Command::Visibility(LevelArgs { level, format }) => {
                Self::Visibility { level: level.into(), format: format.into() }
            }
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { verbosity: args.verbose, action: args.command.into() }
    }
}

/// Scope level of an edit: an explicit level wins, then the resources' level,
/// then the level implied by the declaration's scope identifiers.
#[must_use]
pub fn resolve_level(
    explicit: Option<FreezeWindowLevel>,
    resources: Option<&Resources>,
    declaration: &FreezeDeclaration,
) -> FreezeWindowLevel {
    explicit
        .or_else(|| resources.map(|r| r.freeze_window_level))
        .unwrap_or_else(|| declaration.freeze.level())
}
