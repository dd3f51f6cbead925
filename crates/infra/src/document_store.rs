// crates/infra/src/document_store.rs
use std::path::{Path, PathBuf};

use freeze_scope_ports::{DeclarationStore, FreezeDeclaration};
use freeze_scope_shared_kernel::{ErrorContext, Result};
use log::{debug, info};

use crate::persistence::{FileReader, FileWriter};

/// Parse a freeze declaration from YAML text.
pub fn parse_declaration(text: &str) -> Result<FreezeDeclaration> {
    Ok(serde_yaml::from_str(text)?)
}

/// Render a freeze declaration as YAML text.
pub fn render_declaration(declaration: &FreezeDeclaration) -> Result<String> {
    Ok(serde_yaml::to_string(declaration)?)
}

/// [`DeclarationStore`] backed by a YAML file.
///
/// Reads from `source`. Saves go to `target`; without one, saving leaves the
/// source untouched and the caller is expected to print the result.
#[derive(Debug, Clone)]
pub struct YamlDeclarationStore {
    source: PathBuf,
    target: Option<PathBuf>,
}

impl YamlDeclarationStore {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), target: None }
    }

    /// Save back over the source file.
    pub fn in_place(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self { target: Some(source.clone()), source }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }
}

impl DeclarationStore for YamlDeclarationStore {
    fn load(&self) -> Result<FreezeDeclaration> {
        let text = FileReader::read_to_string(&self.source)?;
        let declaration =
            parse_declaration(&text).with_context(|| format!("parsing {}", self.source.display()))?;
        debug!(
            "loaded '{}' with {} entity config(s) from {}",
            declaration.freeze.identifier,
            declaration.freeze.entities.len(),
            self.source.display()
        );
        Ok(declaration)
    }

    fn save(&self, declaration: &FreezeDeclaration) -> Result<()> {
        let Some(target) = &self.target else {
            debug!("no save target; {} left unchanged", self.source.display());
            return Ok(());
        };
        let text = render_declaration(declaration)?;
        FileWriter::atomic_write(target, text.as_bytes())?;
        info!("wrote {}", target.display());
        Ok(())
    }
}
