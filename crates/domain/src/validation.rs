pub mod rules;
pub mod schema;

pub use rules::{FieldError, FieldErrorKind, FieldRule, Requirement};
pub use schema::{ValidationSchema, validation_schema};
