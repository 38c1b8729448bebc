use crate::error::{Error, Result};
use crate::models::BlueprintDocument;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// File name the panel reads from and saves to
pub const BLUEPRINT_FILE_NAME: &str = "blueprint.json";

/// Resolves a path argument to a blueprint file. Directories are searched
/// for `blueprint.json`.
pub fn find_blueprint_file(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        let candidate = path.join(BLUEPRINT_FILE_NAME);
        if candidate.is_file() {
            debug!("Found blueprint file: {}", candidate.display());
            return Ok(candidate);
        }
        return Err(Error::FileOperation {
            path: path.to_path_buf(),
            message: format!("No {} found in directory", BLUEPRINT_FILE_NAME),
        });
    }

    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    Err(Error::FileOperation {
        path: path.to_path_buf(),
        message: "Path does not exist".to_string(),
    })
}

/// Reads and deserializes a blueprint file
pub fn read_blueprint(path: &Path) -> Result<BlueprintDocument> {
    let content = fs::read_to_string(path).map_err(|e| Error::FileOperation {
        path: path.to_path_buf(),
        message: format!("Failed to read blueprint: {}", e),
    })?;

    let document: BlueprintDocument =
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded blueprint '{}' with {} dependencies and {} environment variables",
        document.name,
        document.depend.len(),
        document.envvar.len()
    );
    Ok(document)
}

/// Writes a blueprint as pretty JSON with two-space indentation
pub fn write_blueprint(path: &Path, document: &BlueprintDocument) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');

    fs::write(path, content).map_err(|e| Error::FileOperation {
        path: path.to_path_buf(),
        message: format!("Failed to write blueprint: {}", e),
    })?;

    info!("Saved blueprint to {}", path.display());
    Ok(())
}
