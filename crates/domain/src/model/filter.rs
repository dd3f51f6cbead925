// crates/domain/src/model/filter.rs
use std::{fmt, str::FromStr};

use freeze_scope_shared_kernel::{DomainError, Identifier};
use serde::{Deserialize, Serialize};

/// Persisted filter semantics of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    All,
    Equals,
    NotEquals,
}

impl FilterType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Self::All),
            "Equals" => Ok(Self::Equals),
            "NotEquals" => Ok(Self::NotEquals),
            other => Err(DomainError::UnknownFilterType { value: other.to_string() }),
        }
    }
}

/// A filter together with its refs.
///
/// `Equals` and `NotEquals` always carry at least one ref: the constructors
/// fall back to `All` for an empty set, so an empty `entityRefs` array can
/// never be produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntityFilter {
    #[default]
    All,
    Equals(Vec<Identifier>),
    NotEquals(Vec<Identifier>),
}

impl EntityFilter {
    /// Inclusion set; `All` when `refs` is empty.
    pub fn equals(refs: impl IntoIterator<Item = Identifier>) -> Self {
        let refs = collect_refs(refs);
        if refs.is_empty() { Self::All } else { Self::Equals(refs) }
    }

    /// Exclusion set; `All` when `refs` is empty.
    pub fn not_equals(refs: impl IntoIterator<Item = Identifier>) -> Self {
        let refs = collect_refs(refs);
        if refs.is_empty() { Self::All } else { Self::NotEquals(refs) }
    }

    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        match self {
            Self::All => FilterType::All,
            Self::Equals(_) => FilterType::Equals,
            Self::NotEquals(_) => FilterType::NotEquals,
        }
    }

    #[must_use]
    pub fn refs(&self) -> &[Identifier] {
        match self {
            Self::All => &[],
            Self::Equals(refs) | Self::NotEquals(refs) => refs,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// Empty identifiers carry no meaning for any field and are dropped.
fn collect_refs(refs: impl IntoIterator<Item = Identifier>) -> Vec<Identifier> {
    refs.into_iter().filter(|r| !r.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<Identifier> {
        values.iter().copied().map(Identifier::from).collect()
    }

    #[test]
    fn empty_sets_collapse_to_all() {
        assert_eq!(EntityFilter::equals(Vec::new()), EntityFilter::All);
        assert_eq!(EntityFilter::not_equals(ids(&[""])), EntityFilter::All);
    }

    #[test]
    fn keeps_refs_in_order() {
        let filter = EntityFilter::not_equals(ids(&["b", "a"]));
        assert_eq!(filter.filter_type(), FilterType::NotEquals);
        assert_eq!(filter.refs(), ids(&["b", "a"]).as_slice());
    }

    #[test]
    fn filter_type_parses_persisted_names() {
        assert_eq!("NotEquals".parse::<FilterType>(), Ok(FilterType::NotEquals));
        assert!("NOT_EQUALS".parse::<FilterType>().is_err());
    }
}
