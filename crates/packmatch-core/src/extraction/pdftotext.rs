use crate::error::PackmatchError;
use crate::extraction::{pages_from_text, PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// By default text is emitted in reading order, one text block per line,
/// which is the shape bare code windows are recognized in. With
/// `preserve_layout` set, `-layout` keeps each printed row on one line.
pub struct PdftotextExtractor {
    preserve_layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor {
            preserve_layout: false,
        }
    }

    pub fn with_layout(preserve_layout: bool) -> Self {
        PdftotextExtractor { preserve_layout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PackmatchError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PackmatchError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PackmatchError::Extraction(e.to_string()))?;

        let mut cmd = Command::new("pdftotext");
        if self.preserve_layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PackmatchError::PdftotextNotFound
                } else {
                    PackmatchError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PackmatchError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = pages_from_text(&text);
        debug!(
            pages = pages.len(),
            preserve_layout = self.preserve_layout,
            "pdftotext extracted text"
        );

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        if self.preserve_layout {
            "pdftotext -layout"
        } else {
            "pdftotext"
        }
    }
}
