//! Directory walker driving the extract → map → emit pipeline.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use typesync_core::{Result, TypesyncError};

use crate::extract::extract_models;
use crate::typescript::TypeScriptGenerator;

/// File name that marks a Django model file. Other files are not opened.
pub const MODEL_FILE_NAME: &str = "models.py";

/// One interface written during a run.
#[derive(Debug, Clone)]
pub struct EmittedInterface {
    /// Model class name.
    pub model: String,

    /// Path of the written `.ts` file.
    pub path: PathBuf,
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Interfaces written, in emission order.
    pub emitted: Vec<EmittedInterface>,
}

impl GenerateReport {
    /// Total number of interfaces written.
    pub fn count(&self) -> usize {
        self.emitted.len()
    }
}

/// Scan `source_root` recursively for model files and write one interface
/// file per extracted model under `dest_root`, mirroring the source
/// directory structure.
///
/// Visit order is filesystem-dependent and not guaranteed stable across
/// runs or platforms; output content does not depend on it.
///
/// Unreadable files are logged and skipped unless `strict` is set, in which
/// case the first read failure aborts the run. Write failures always abort.
pub fn generate(source_root: &Path, dest_root: &Path, strict: bool) -> Result<GenerateReport> {
    if !source_root.is_dir() {
        return Err(TypesyncError::SourceRootNotFound(source_root.to_path_buf()));
    }

    let generator = TypeScriptGenerator::new(dest_root);
    let mut report = GenerateReport::default();

    for entry in WalkDir::new(source_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == MODEL_FILE_NAME)
    {
        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) if strict => {
                return Err(TypesyncError::SourceRead {
                    path: entry.path().to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!(file = ?entry.path(), error = %e, "Skipping unreadable file");
                continue;
            }
        };

        let models = extract_models(&content);
        if models.is_empty() {
            continue;
        }

        let relative_dir = entry
            .path()
            .parent()
            .and_then(|p| p.strip_prefix(source_root).ok())
            .unwrap_or(Path::new(""));

        for model in models {
            let path = generator.write_model(&model, relative_dir)?;
            tracing::info!(model = %model.name, path = ?path, "Generated interface");
            report.emitted.push(EmittedInterface {
                model: model.name,
                path,
            });
        }
    }

    Ok(report)
}
