// crates/shared-kernel/src/value_objects/mod.rs
pub mod identifier;
pub mod select_option;

pub use identifier::Identifier;
pub use select_option::{ALL_SENTINEL, SelectOption};
