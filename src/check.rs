use crate::codec::{
    DecodedLines, DependencyCodec, EnvVarCodec, decode_dependencies, decode_env_vars,
};
use crate::error::{Error, Result};
use crate::form::BlueprintForm;
use crate::models::{BlueprintDocument, DependencyEntry, EnvVarEntry};
use crate::utils::{find_blueprint_file, read_blueprint, write_blueprint};
use log::{info, warn};
use std::path::Path;

/// Per-section outcome of checking a blueprint
#[derive(Debug)]
pub struct CheckReport {
    pub dependencies: DecodedLines<DependencyEntry>,
    pub env_vars: DecodedLines<EnvVarEntry>,
}

impl CheckReport {
    pub fn invalid_lines(&self) -> usize {
        self.dependencies.errors.len() + self.env_vars.errors.len()
    }
}

/// Decodes every DEPEND and ENVVAR line of a document and logs each failure
pub fn check_document(document: &BlueprintDocument) -> CheckReport {
    let dependencies = decode_dependencies(&document.depend);
    for failure in &dependencies.errors {
        warn!("DEPEND {}", failure);
    }

    let env_vars = decode_env_vars(&document.envvar);
    for failure in &env_vars.errors {
        warn!("ENVVAR {}", failure);
    }

    info!(
        "DEPEND: {} valid, {} invalid; ENVVAR: {} valid, {} invalid",
        dependencies.entries.len(),
        dependencies.errors.len(),
        env_vars.entries.len(),
        env_vars.errors.len()
    );

    CheckReport {
        dependencies,
        env_vars,
    }
}

/// Checks the blueprint at `path` (a file or a directory holding
/// blueprint.json), optionally rewriting it in canonical form.
///
/// When rewriting, invalid lines are kept verbatim. Any invalid line makes
/// the result an error, whether or not the file was rewritten.
pub fn check_blueprint(path: &Path, write: bool) -> Result<()> {
    let blueprint_path = find_blueprint_file(path)?;
    info!("Checking blueprint at: {}", blueprint_path.display());

    let document = read_blueprint(&blueprint_path)?;
    let invalid = check_document(&document).invalid_lines();

    if write {
        let form = BlueprintForm::load(document);
        write_blueprint(&blueprint_path, &form.to_document())?;
    }

    if invalid > 0 {
        return Err(Error::InvalidLines {
            path: blueprint_path,
            count: invalid,
        });
    }

    info!("All lines are valid");
    Ok(())
}

/// Checks standalone lines and returns their canonical renderings, in the
/// order given. Dependencies come before environment variables.
pub fn check_lines(dependency_lines: &[String], env_lines: &[String]) -> Result<Vec<String>> {
    let mut rendered = Vec::new();
    let mut invalid = 0;

    for line in dependency_lines {
        match DependencyCodec::parse(line) {
            Ok(entry) => rendered.push(DependencyCodec::render(&entry)),
            Err(e) => {
                warn!("{}", e);
                invalid += 1;
            }
        }
    }

    for line in env_lines {
        match EnvVarCodec::parse(line) {
            Ok(entry) => rendered.push(EnvVarCodec::render(&entry)),
            Err(e) => {
                warn!("{}", e);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        return Err(Error::General(format!("{} invalid line(s)", invalid)));
    }

    Ok(rendered)
}
