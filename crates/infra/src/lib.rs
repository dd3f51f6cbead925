//! # Infra
//!
//! File-backed adapters for the ports, plus the flat path map exchanged with
//! the form-binding layer.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document_store;
pub mod form_paths;
pub mod labels;
pub mod persistence;
pub mod resources_file;

pub use document_store::{YamlDeclarationStore, parse_declaration, render_declaration};
pub use form_paths::{flatten, unflatten};
pub use labels::EnglishLabels;
pub use resources_file::JsonResourceFile;
