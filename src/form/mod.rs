//! Editable view of a blueprint.
//!
//! Rows are decoded and re-encoded only through the codecs; nothing in here
//! knows the line grammar. A form is built when a blueprint is opened and
//! dropped when it is closed.

use crate::codec::{DependencyCodec, EnvVarCodec};
use crate::error::FormatError;
use crate::models::{BlueprintDocument, DependencyEntry, EnvVarEntry};
use log::debug;

/// A row of the form: either a decoded entry or the raw text that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    Parsed(T),
    Invalid { raw: String, error: FormatError },
}

impl<T> Row<T> {
    fn decode(line: &str, parse: impl Fn(&str) -> Result<T, FormatError>) -> Self {
        match parse(line) {
            Ok(entry) => Row::Parsed(entry),
            Err(error) => Row::Invalid {
                raw: line.to_string(),
                error,
            },
        }
    }

    fn encode(&self, render: impl Fn(&T) -> String) -> String {
        match self {
            Row::Parsed(entry) => render(entry),
            Row::Invalid { raw, .. } => raw.clone(),
        }
    }

    pub fn entry(&self) -> Option<&T> {
        match self {
            Row::Parsed(entry) => Some(entry),
            Row::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&FormatError> {
        match self {
            Row::Parsed(_) => None,
            Row::Invalid { error, .. } => Some(error),
        }
    }
}

pub type DependencyRow = Row<DependencyEntry>;
pub type EnvVarRow = Row<EnvVarEntry>;

/// In-memory form state for one blueprint
#[derive(Debug, Clone)]
pub struct BlueprintForm {
    /// Every field other than DEPEND and ENVVAR, untouched
    fields: BlueprintDocument,
    pub dependencies: Vec<DependencyRow>,
    pub env_vars: Vec<EnvVarRow>,
}

impl BlueprintForm {
    /// Builds a form from a document, decoding every DEPEND and ENVVAR line.
    /// Blank lines are dropped, matching list decoding.
    pub fn load(mut document: BlueprintDocument) -> Self {
        let dependencies = std::mem::take(&mut document.depend)
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Row::decode(line, DependencyCodec::parse))
            .collect();
        let env_vars = std::mem::take(&mut document.envvar)
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Row::decode(line, EnvVarCodec::parse))
            .collect();

        let form = Self {
            fields: document,
            dependencies,
            env_vars,
        };
        debug!(
            "Loaded form with {} dependency rows and {} environment rows",
            form.dependencies.len(),
            form.env_vars.len()
        );
        form
    }

    /// Scalar and passthrough fields of the blueprint
    pub fn fields(&self) -> &BlueprintDocument {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut BlueprintDocument {
        &mut self.fields
    }

    pub fn add_dependency(&mut self, entry: DependencyEntry) {
        self.dependencies.push(Row::Parsed(entry));
    }

    /// Replaces a dependency row with freshly parsed text. Returns the new
    /// row, or `None` if `index` is out of range.
    pub fn set_dependency(&mut self, index: usize, line: &str) -> Option<&DependencyRow> {
        let row = self.dependencies.get_mut(index)?;
        *row = Row::decode(line, DependencyCodec::parse);
        Some(&*row)
    }

    pub fn remove_dependency(&mut self, index: usize) -> Option<DependencyRow> {
        (index < self.dependencies.len()).then(|| self.dependencies.remove(index))
    }

    pub fn add_env_var(&mut self, entry: EnvVarEntry) {
        self.env_vars.push(Row::Parsed(entry));
    }

    /// Replaces an environment row with freshly parsed text
    pub fn set_env_var(&mut self, index: usize, line: &str) -> Option<&EnvVarRow> {
        let row = self.env_vars.get_mut(index)?;
        *row = Row::decode(line, EnvVarCodec::parse);
        Some(&*row)
    }

    pub fn remove_env_var(&mut self, index: usize) -> Option<EnvVarRow> {
        (index < self.env_vars.len()).then(|| self.env_vars.remove(index))
    }

    /// Number of rows that failed to decode
    pub fn invalid_rows(&self) -> usize {
        let dependencies = self.dependencies.iter().filter(|r| r.error().is_some());
        let env_vars = self.env_vars.iter().filter(|r| r.error().is_some());
        dependencies.count() + env_vars.count()
    }

    /// Renders the form back into a document. Parsed rows are written in
    /// canonical form and invalid rows verbatim, keeping row order.
    pub fn to_document(&self) -> BlueprintDocument {
        let mut document = self.fields.clone();
        document.depend = self
            .dependencies
            .iter()
            .map(|row| row.encode(DependencyCodec::render))
            .collect();
        document.envvar = self
            .env_vars
            .iter()
            .map(|row| row.encode(EnvVarCodec::render))
            .collect();
        document
    }
}
