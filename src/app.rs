// src/app.rs
use std::path::Path;

use anyhow::{Context, Result};
use freeze_scope_domain::{
    EntityConfig, FormState, FreezeWindowLevel, empty_entity_config, fields_visibility, validation_schema,
};
use freeze_scope_infra::{
    EnglishLabels, JsonResourceFile, YamlDeclarationStore, flatten, form_paths::FormPaths,
    persistence::FileReader, render_declaration, unflatten,
};
use freeze_scope_ports::{DeclarationStore, ResourceProvider};
use freeze_scope_shared_kernel::PresentationError;
use freeze_scope_usecase::{ApplyForm, SeedForm, summarize};
use log::info;

use crate::{
    config::{Action, Config, OutputFormat, resolve_level},
    presentation,
};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The form failed validation; nothing was written.
    Invalid,
}

pub fn run(config: &Config) -> Result<Outcome> {
    match &config.action {
        Action::Form { document, resources, format } => form(document, resources, *format),
        Action::Apply { document, form, row, level, resources, output } => apply(&ApplyRequest {
            document,
            form,
            row: *row,
            level: *level,
            resources: resources.as_deref(),
            output: output.as_deref(),
        }),
        Action::Validate { form, level } => validate(form, *level),
        Action::Template { level, name, format } => template(*level, name, *format),
        Action::Summary { document, resources } => summary(document, resources),
        Action::Visibility { level, format } => {
            presentation::print_data(&fields_visibility(*level), *format)?;
            Ok(Outcome::Done)
        }
    }
}

fn form(document: &Path, resources: &Path, format: OutputFormat) -> Result<Outcome> {
    let store = YamlDeclarationStore::new(document);
    let provider = JsonResourceFile::new(resources);
    let seeded = SeedForm::new(&store, &provider, &EnglishLabels).run()?;
    info!("{} row(s) at {} level", seeded.form.len(), seeded.level);
    presentation::print_data(&flatten(&seeded.form), format)?;
    Ok(Outcome::Done)
}

struct ApplyRequest<'a> {
    document: &'a Path,
    form: &'a Path,
    row: Option<usize>,
    level: Option<FreezeWindowLevel>,
    resources: Option<&'a Path>,
    output: Option<&'a Path>,
}

fn apply(request: &ApplyRequest<'_>) -> Result<Outcome> {
    let store = match request.output {
        Some(output) => YamlDeclarationStore::new(request.document).with_target(output),
        None => YamlDeclarationStore::new(request.document),
    };
    let form = read_form(request.form)?;
    let resources = request.resources.map(|path| JsonResourceFile::new(path).resources()).transpose()?;
    let level = resolve_level(request.level, resources.as_ref(), &store.load()?);
    info!("applying form at {level} level");

    let use_case = ApplyForm::new(&store);
    let applied = match request.row {
        Some(index) => {
            let row = form.row(index).ok_or_else(|| PresentationError::InvalidValue {
                flag: "--row".to_string(),
                value: index.to_string(),
                reason: format!("form has {} row(s)", form.len()),
            })?;
            use_case.run_row(level, index, row)?
        }
        None => use_case.run(level, &form)?,
    };

    if !applied.is_saved() {
        eprint!("{}", presentation::render_errors(&applied.errors));
        return Ok(Outcome::Invalid);
    }
    match request.output {
        Some(output) => info!("updated declaration written to {}", output.display()),
        None => print!("{}", render_declaration(&applied.declaration)?),
    }
    Ok(Outcome::Done)
}

fn validate(form: &Path, level: FreezeWindowLevel) -> Result<Outcome> {
    let form = read_form(form)?;
    let errors = validation_schema(level).validate_form(&form);
    if errors.is_empty() {
        info!("{} row(s) valid at {level} level", form.len());
        return Ok(Outcome::Done);
    }
    print!("{}", presentation::render_errors(&errors));
    Ok(Outcome::Invalid)
}

fn template(level: FreezeWindowLevel, name: &str, format: OutputFormat) -> Result<Outcome> {
    let row = EntityConfig::new(name, empty_entity_config(&fields_visibility(level)));
    presentation::print_data(&row, format)?;
    Ok(Outcome::Done)
}

fn summary(document: &Path, resources: &Path) -> Result<Outcome> {
    let declaration = YamlDeclarationStore::new(document).load()?;
    let resources = JsonResourceFile::new(resources).resources()?;
    let rows: Vec<_> = declaration
        .freeze
        .entities
        .iter()
        .map(|config| (config.name.clone(), summarize(config, &EnglishLabels, &resources)))
        .collect();
    print!("{}", presentation::render_summaries(&rows));
    Ok(Outcome::Done)
}

fn read_form(path: &Path) -> Result<FormState> {
    let text = FileReader::read_to_string(path)?;
    let paths: FormPaths = serde_json::from_str(&text).with_context(|| format!("parsing form {}", path.display()))?;
    Ok(unflatten(&paths)?)
}
