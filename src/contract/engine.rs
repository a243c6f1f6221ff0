//! Typst rendering engine.
//!
//! Writes Typst source to a temporary directory, stages any referenced assets
//! next to it, invokes the compiler and reads back the PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::GeneratorError;

const SOURCE_FILENAME: &str = "contract.typ";
const OUTPUT_FILENAME: &str = "contract.pdf";

/// Engine for rendering Typst sources to PDF through the `typst` CLI.
#[derive(Debug, Clone)]
pub struct TypstRenderEngine {
    typst_bin: String,
}

impl Default for TypstRenderEngine {
    fn default() -> Self {
        Self::new("typst")
    }
}

impl TypstRenderEngine {
    pub fn new(typst_bin: impl Into<String>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
        }
    }

    /// Render a Typst source string to PDF bytes.
    ///
    /// # Arguments
    /// * `typst_source` - The complete Typst source code.
    /// * `assets` - Files referenced by the source by file name (e.g. images).
    pub fn render(&self, typst_source: &str, assets: &[PathBuf]) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;

        fs::write(temp_dir.path().join(SOURCE_FILENAME), typst_source)
            .map_err(GeneratorError::WriteTypst)?;

        for asset in assets {
            stage_asset(&temp_dir, asset)?;
        }

        self.compile(&temp_dir)
    }

    fn compile(&self, temp_dir: &TempDir) -> Result<Vec<u8>, GeneratorError> {
        let typ_path = temp_dir.path().join(SOURCE_FILENAME);
        let output_path = temp_dir.path().join(OUTPUT_FILENAME);

        let status = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&typ_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .status()
            .map_err(GeneratorError::TypstIo)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(GeneratorError::TypstExit(code));
        }

        fs::read(&output_path).map_err(GeneratorError::ReadPdf)
    }
}

fn stage_asset(temp_dir: &TempDir, asset: &Path) -> Result<(), GeneratorError> {
    let name = asset
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    fs::copy(asset, temp_dir.path().join(&name))
        .map(|_| ())
        .map_err(|e| GeneratorError::StageAsset(name, e))
}
