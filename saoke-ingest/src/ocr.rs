//! Optional OCR pass that turns scanned receipts into a searchable PDF.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::backend::require_file;
use crate::error::IngestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrSettings {
    /// Executable to run (default: `ocrmypdf`)
    pub command: String,
    /// Tesseract language code (default: `vie`)
    pub language: String,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            command: "ocrmypdf".to_string(),
            language: "vie".to_string(),
        }
    }
}

/// Run OCR on `input` into `output` unless `output` already exists.
pub fn ensure_searchable(
    settings: &OcrSettings,
    input: &Path,
    output: &Path,
) -> Result<(), IngestError> {
    if output.is_file() {
        info!("reusing OCR output {}", output.display());
        return Ok(());
    }
    require_file(input)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    which::which(&settings.command).map_err(|_| IngestError::ToolMissing {
        tool: settings.command.clone(),
    })?;

    info!("running {} on {}", settings.command, input.display());
    let status = Command::new(&settings.command)
        .args(["-l", &settings.language])
        .arg(input)
        .arg(output)
        .status()?;

    if !status.success() {
        return Err(IngestError::Tool {
            tool: settings.command.clone(),
            message: format!("exited with {status}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_output_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("receipts.pdf");
        fs::write(&output, b"%PDF-1.4").unwrap();

        // Neither the input nor the tool needs to exist.
        let settings = OcrSettings {
            command: "definitely-not-installed-ocr".to_string(),
            ..OcrSettings::default()
        };
        ensure_searchable(&settings, &dir.path().join("missing.pdf"), &output).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_searchable(
            &OcrSettings::default(),
            &dir.path().join("scan.pdf"),
            &dir.path().join("ocr/scan.pdf"),
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::MissingInput(_)));
    }

    #[test]
    fn test_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.pdf");
        fs::write(&input, b"%PDF-1.4").unwrap();
        let settings = OcrSettings {
            command: "definitely-not-installed-ocr".to_string(),
            ..OcrSettings::default()
        };
        let err = ensure_searchable(&settings, &input, &dir.path().join("ocr/scan.pdf")).unwrap_err();
        assert!(matches!(err, IngestError::ToolMissing { .. }));
    }
}
