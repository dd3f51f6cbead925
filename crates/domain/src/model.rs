pub mod config;
pub mod entry;
pub mod field;
pub mod filter;

pub use config::{EntityConfig, upsert_entry};
pub use entry::EntityFilterEntry;
pub use field::EntityFieldType;
pub use filter::{EntityFilter, FilterType};
