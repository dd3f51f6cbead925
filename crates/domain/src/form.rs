pub mod keys;
pub mod state;

pub use keys::{ExcludeFieldKeys, FormKey, exclude_field_keys, field_path};
pub use state::{ExcludeSelection, FieldValue, FormState, RowFormState};
