// crates/usecase/src/orchestrator.rs
use freeze_scope_domain::{FieldError, FormState, FreezeWindowLevel, RowFormState};
use freeze_scope_ports::{DeclarationStore, FreezeDeclaration, LabelProvider, ResourceProvider};
use freeze_scope_shared_kernel::{ErrorContext, Result};

use crate::editor::ScopeEditor;

/// Output of [`SeedForm::run`].
#[derive(Debug, Clone)]
pub struct SeededForm {
    pub declaration: FreezeDeclaration,
    pub level: FreezeWindowLevel,
    pub form: FormState,
}

/// Load a declaration and its resources and build the initial form state.
pub struct SeedForm<'a> {
    store: &'a dyn DeclarationStore,
    resources: &'a dyn ResourceProvider,
    labels: &'a dyn LabelProvider,
}

impl<'a> SeedForm<'a> {
    pub fn new(
        store: &'a dyn DeclarationStore,
        resources: &'a dyn ResourceProvider,
        labels: &'a dyn LabelProvider,
    ) -> Self {
        Self { store, resources, labels }
    }

    pub fn run(&self) -> Result<SeededForm> {
        let declaration = self.store.load().context("loading freeze declaration")?;
        let resources = self.resources.resources().context("loading resources")?;
        let level = resources.freeze_window_level;
        let form = ScopeEditor::new(level).seed(&declaration.freeze.entities, self.labels, &resources);
        Ok(SeededForm { declaration, level, form })
    }
}

/// Outcome of [`ApplyForm::run`]. Nothing is saved when `errors` is non-empty.
#[derive(Debug, Clone)]
pub struct AppliedForm {
    pub declaration: FreezeDeclaration,
    pub errors: Vec<FieldError>,
}

impl AppliedForm {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate an edited form, write it back into the declaration and save it.
pub struct ApplyForm<'a> {
    store: &'a dyn DeclarationStore,
}

impl<'a> ApplyForm<'a> {
    pub fn new(store: &'a dyn DeclarationStore) -> Self {
        Self { store }
    }

    pub fn run(&self, level: FreezeWindowLevel, form: &FormState) -> Result<AppliedForm> {
        let mut declaration = self.store.load().context("loading freeze declaration")?;
        let editor = ScopeEditor::new(level);

        let errors = editor.validate(form);
        if !errors.is_empty() {
            return Ok(AppliedForm { declaration, errors });
        }

        declaration.freeze.entities = editor.apply_form(&declaration.freeze.entities, form);
        self.store.save(&declaration).context("saving freeze declaration")?;
        Ok(AppliedForm { declaration, errors })
    }

    /// Like [`ApplyForm::run`] for row `index` alone; other rows are kept.
    pub fn run_row(&self, level: FreezeWindowLevel, index: usize, row: &RowFormState) -> Result<AppliedForm> {
        let mut declaration = self.store.load().context("loading freeze declaration")?;
        let editor = ScopeEditor::new(level);

        let errors = editor.schema().validate(index, row);
        if !errors.is_empty() {
            return Ok(AppliedForm { declaration, errors });
        }

        editor.update_row(&mut declaration.freeze.entities, index, row)?;
        self.store.save(&declaration).context("saving freeze declaration")?;
        Ok(AppliedForm { declaration, errors })
    }
}
