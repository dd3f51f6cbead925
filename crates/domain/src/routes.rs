// crates/domain/src/routes.rs
//! Path parameter templates of the freeze window pages of each level.

use crate::level::FreezeWindowLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParams {
    pub level: FreezeWindowLevel,
    pub template: &'static str,
    pub params: &'static [&'static str],
}

pub static PATH_PARAMS: [PathParams; 3] = [
    PathParams {
        level: FreezeWindowLevel::Account,
        template: "/account/:accountId/settings/freeze-windows",
        params: &["accountId"],
    },
    PathParams {
        level: FreezeWindowLevel::Org,
        template: "/account/:accountId/settings/organizations/:orgIdentifier/setup/freeze-windows",
        params: &["accountId", "orgIdentifier"],
    },
    PathParams {
        level: FreezeWindowLevel::Project,
        template: "/account/:accountId/cd/orgs/:orgIdentifier/projects/:projectIdentifier/setup/freeze-windows",
        params: &["accountId", "orgIdentifier", "projectIdentifier"],
    },
];

#[must_use]
pub fn path_params(level: FreezeWindowLevel) -> &'static PathParams {
    match level {
        FreezeWindowLevel::Account => &PATH_PARAMS[0],
        FreezeWindowLevel::Org => &PATH_PARAMS[1],
        FreezeWindowLevel::Project => &PATH_PARAMS[2],
    }
}
