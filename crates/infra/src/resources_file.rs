// crates/infra/src/resources_file.rs
use std::path::{Path, PathBuf};

use freeze_scope_ports::{ResourceProvider, Resources};
use freeze_scope_shared_kernel::{ErrorContext, Result};
use log::debug;

use crate::persistence::FileReader;

/// [`ResourceProvider`] reading a JSON snapshot in the host's camelCase shape.
#[derive(Debug, Clone)]
pub struct JsonResourceFile {
    path: PathBuf,
}

impl JsonResourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResourceProvider for JsonResourceFile {
    fn resources(&self) -> Result<Resources> {
        let text = FileReader::read_to_string(&self.path)?;
        let resources: Resources = serde_json::from_str(&text)
            .with_context(|| format!("parsing resources {}", self.path.display()))?;
        debug!(
            "resources for {} level: {} org(s), {} project(s), {} service(s), {} environment(s), {} pipeline(s)",
            resources.freeze_window_level,
            resources.orgs_map.len(),
            resources.projects_map.len(),
            resources.services_map.len(),
            resources.environments_map.len(),
            resources.pipelines_map.len()
        );
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use freeze_scope_domain::FreezeWindowLevel;
    use freeze_scope_shared_kernel::Identifier;

    use super::*;

    #[test]
    fn reads_snapshot_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resources.json");
        std::fs::write(
            &path,
            r#"{"servicesMap": {"svc_1": {"label": "Checkout", "value": "svc_1"}}, "freezeWindowLevel": "PROJECT"}"#,
        )
        .expect("seed resources");

        let resources = JsonResourceFile::new(&path).resources().expect("loads");

        assert_eq!(resources.freeze_window_level, FreezeWindowLevel::Project);
        assert_eq!(resources.services_map[&Identifier::from("svc_1")].label, "Checkout");
    }

    #[test]
    fn missing_level_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resources.json");
        std::fs::write(&path, "{}").expect("seed resources");

        let err = JsonResourceFile::new(&path).resources().expect_err("level is required");

        assert!(err.to_string().contains("freezeWindowLevel"));
    }
}
