// crates/shared-kernel/src/value_objects/select_option.rs
use serde::{Deserialize, Serialize};

use super::Identifier;

/// Value carried by the synthetic "All" option and by an EnvType set to all.
///
/// Reserved: a resource identified as `All` cannot be selected or persisted.
pub const ALL_SENTINEL: &str = "All";

/// A `{label, value}` pair as rendered by a select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }

    /// Option whose label is its own identifier, used when no resource label is known.
    pub fn bare(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { label: value.clone(), value }
    }

    /// The synthetic "All <X>" option.
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(label, ALL_SENTINEL)
    }

    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.value == ALL_SENTINEL
    }

    #[must_use]
    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.value.clone())
    }
}
