// src/cli/value_enum.rs
use clap::ValueEnum;
use freeze_scope_domain::FreezeWindowLevel;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliFormat {
    Json,
    Yaml,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLevel {
    Account,
    Org,
    Project,
}

impl From<CliLevel> for FreezeWindowLevel {
    fn from(value: CliLevel) -> Self {
        match value {
            CliLevel::Account => FreezeWindowLevel::Account,
            CliLevel::Org => FreezeWindowLevel::Org,
            CliLevel::Project => FreezeWindowLevel::Project,
        }
    }
}
