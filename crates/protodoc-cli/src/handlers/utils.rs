//! Shared utilities for command handlers

use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use protodoc_core::{SchemaLoader, SchemaSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a schema document from disk
pub fn load_schema(path: &Path) -> Result<SchemaSet> {
    let _timer = Timer::with_details("schema_loading", &path.display().to_string());

    let set = SchemaLoader::new().load(path)?;
    debug!(
        path = %path.display(),
        files = set.files().len(),
        messages = set.message_count(),
        "Schema ready"
    );
    Ok(set)
}

/// Write rendered text to `path`, creating parent directories as needed
pub fn write_output_file(path: &Path, content: &str) -> Result<()> {
    if path.is_dir() {
        return Err(Error::invalid_args(format!(
            "--save-to {} is a directory",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_schema() {
        let err = load_schema(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_write_output_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs/api.md");

        write_output_file(&path, "# Docs\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Docs\n");

        let err = write_output_file(dir.path(), "# Docs\n").unwrap_err();
        assert!(err.should_show_help());
    }
}
