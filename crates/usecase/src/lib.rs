//! # Use Cases
//!
//! Conversions between persisted entity configs and form state.
//!
//! - [`forward`]: entity configs → form state
//! - [`reverse`]: form state → entity configs, one adapter per field family
//! - [`editor`]: row list editing at a fixed level
//! - [`summary`]: read-only rendering of a row
//! - [`orchestrator`]: load/validate/save flows over the ports
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod editor;
pub mod forward;
pub mod orchestrator;
pub mod resolve;
pub mod reverse;
pub mod summary;

pub use editor::ScopeEditor;
pub use forward::{to_form_state, to_row_form_state};
pub use orchestrator::{AppliedForm, ApplyForm, SeedForm, SeededForm};
pub use reverse::{apply_row, to_entity_config};
pub use summary::{FieldSummary, summarize};
