//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`resources`]: identifier→label maps supplied by the host
//! - [`labels`]: localized strings for synthetic options and summaries
//! - [`document`]: the persisted freeze declaration and its store
//!
//! These ports keep the converters independent of how resources are
//! fetched or where declarations live.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod labels;
pub mod resources;

pub use document::{DeclarationStore, FreezeDeclaration, FreezeWindowSpec};
pub use labels::{LabelKey, LabelProvider};
pub use resources::{OrgProjects, ResourceMap, ResourceProvider, Resources};
