// src/cli.rs
mod args;
mod value_enum;

pub use args::{ApplyArgs, Args, Command, DocumentArgs, FormArgs, LevelArgs, TemplateArgs, ValidateArgs};
pub use value_enum::{CliFormat, CliLevel};
