//! # Domain
//!
//! Entity scope model for freeze windows:
//!
//! - [`model`]: filter entries and entity configs as persisted
//! - [`level`]: scope levels and the fields each level shows
//! - [`form`]: per-row form state and its field keys
//! - [`validation`]: level-dependent required-field rules
//! - [`routes`]: per-level path parameter templates

#![allow(clippy::multiple_crate_versions)]

pub mod form;
pub mod level;
pub mod model;
pub mod routes;
pub mod validation;

pub use form::{ExcludeFieldKeys, ExcludeSelection, FieldValue, FormKey, FormState, RowFormState};
pub use level::{FieldsVisibility, FreezeWindowLevel, empty_entity_config, fields_visibility};
pub use model::{EntityConfig, EntityFieldType, EntityFilter, EntityFilterEntry, FilterType};
pub use validation::{FieldError, FieldErrorKind, FieldRule, Requirement, ValidationSchema, validation_schema};
