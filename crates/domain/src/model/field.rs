// crates/domain/src/model/field.rs
use std::{fmt, str::FromStr};

use freeze_scope_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Field of the scope hierarchy a filter entry constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityFieldType {
    Org,
    Proj,
    Pipeline,
    Service,
    Environment,
    EnvType,
}

impl EntityFieldType {
    /// Every field, in display order.
    pub const ALL: [Self; 6] = [Self::Org, Self::Proj, Self::Pipeline, Self::Service, Self::Environment, Self::EnvType];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Org => "Org",
            Self::Proj => "Proj",
            Self::Pipeline => "Pipeline",
            Self::Service => "Service",
            Self::Environment => "Environment",
            Self::EnvType => "EnvType",
        }
    }

    /// Multi-valued fields hold a set of refs; EnvType holds at most one.
    #[inline]
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        !matches!(self, Self::EnvType)
    }
}

impl fmt::Display for EntityFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityFieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFieldType { value: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for field in EntityFieldType::ALL {
            assert_eq!(field.as_str().parse::<EntityFieldType>(), Ok(field));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Project".parse::<EntityFieldType>().expect_err("only `Proj` is accepted");
        assert_eq!(err, DomainError::UnknownFieldType { value: "Project".into() });
    }

    #[test]
    fn env_type_is_the_only_single_valued_field() {
        let single: Vec<_> = EntityFieldType::ALL.into_iter().filter(|f| !f.is_multi_valued()).collect();
        assert_eq!(single, vec![EntityFieldType::EnvType]);
    }
}
