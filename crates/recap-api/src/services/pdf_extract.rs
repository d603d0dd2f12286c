//! PDF text extraction using `pdftotext` (poppler-utils).

use std::io::Write;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use recap_core::defaults::{EXTRACTION_CMD_TIMEOUT_SECS, MIN_EXTRACTED_TEXT_CHARS};
use recap_core::{Error, Result, TextExtractor};

/// Extracts text from uploaded PDFs by shelling out to `pdftotext`.
///
/// Each invocation is guarded by a per-command timeout. PDFs whose text
/// layer is empty or near-empty (scanned documents) are rejected as
/// unreadable rather than summarized into nothing.
pub struct PdfTextExtractor;

/// Run a command with a timeout, returning stdout as a string.
async fn run_cmd_with_timeout(cmd: &mut Command, timeout_secs: u64) -> Result<String> {
    let output = tokio::time::timeout(std::time::Duration::from_secs(timeout_secs), cmd.output())
        .await
        .map_err(|_| {
            Error::Extraction(format!("External command timed out after {}s", timeout_secs))
        })?
        .map_err(|e| Error::Extraction(format!("Failed to execute command: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Extraction(format!(
            "Command failed (exit {}): {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: &[u8], filename: &str) -> Result<String> {
        if data.is_empty() {
            return Err(Error::InvalidInput(
                "Cannot extract text from empty PDF data".to_string(),
            ));
        }

        // Validate PDF magic bytes (%PDF)
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::InvalidInput(format!(
                "File '{}' is not a valid PDF (missing %PDF header)",
                filename
            )));
        }

        // pdftotext reads from a file path, so spool to a temp file
        let mut tmpfile = NamedTempFile::new()
            .map_err(|e| Error::Extraction(format!("Failed to create temp file: {}", e)))?;
        tmpfile
            .write_all(data)
            .map_err(|e| Error::Extraction(format!("Failed to write temp file: {}", e)))?;
        let tmp_path = tmpfile.path().to_string_lossy().to_string();

        let text = run_cmd_with_timeout(
            Command::new("pdftotext").arg(&tmp_path).arg("-"),
            EXTRACTION_CMD_TIMEOUT_SECS,
        )
        .await?;

        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_EXTRACTED_TEXT_CHARS {
            return Err(Error::Extraction(format!(
                "Could not read document '{}': no extractable text layer",
                filename
            )));
        }

        debug!(
            filename,
            char_count = text.len(),
            line_count = text.lines().count(),
            "PDF text extracted"
        );

        Ok(trimmed.to_string())
    }

    async fn health_check(&self) -> Result<bool> {
        match Command::new("pdftotext").arg("-v").output().await {
            Ok(output) => {
                // pdftotext -v prints version to stderr and exits with 0 or 99
                // depending on the version. Both indicate the binary exists.
                Ok(output.status.success() || output.status.code() == Some(99))
            }
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "pdf_text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let extractor = PdfTextExtractor;
        assert_eq!(extractor.name(), "pdf_text");
    }

    #[tokio::test]
    async fn test_health_check() {
        let extractor = PdfTextExtractor;
        // Passes whether or not pdftotext is installed
        assert!(extractor.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_input() {
        let extractor = PdfTextExtractor;
        let result = extractor.extract(b"", "empty.pdf").await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("empty"), "Error should mention empty data: {}", err);
    }

    #[tokio::test]
    async fn test_invalid_pdf() {
        let extractor = PdfTextExtractor;
        let result = extractor.extract(b"not a pdf at all", "bad.pdf").await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("not a valid PDF"),
            "Error should mention invalid PDF: {}",
            err
        );
    }

    #[tokio::test]
    async fn test_extraction() {
        // Minimal valid PDF that contains the text "Hello World PDF sample"
        let pdf_bytes = b"%PDF-1.0
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj

2 0 obj
<< /Type /Pages /Kids [3 0 R] /Count 1 >>
endobj

3 0 obj
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792]
   /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>
endobj

4 0 obj
<< /Length 55 >>
stream
BT /F1 12 Tf 100 700 Td (Hello World PDF sample text) Tj ET
endstream
endobj

5 0 obj
<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>
endobj

xref
0 6
0000000000 65535 f
0000000009 00000 n
0000000058 00000 n
0000000115 00000 n
0000000266 00000 n
0000000371 00000 n

trailer
<< /Size 6 /Root 1 0 R >>
startxref
445
%%EOF";

        let extractor = PdfTextExtractor;
        // Only run if pdftotext is available
        if !extractor.health_check().await.unwrap_or(false) {
            eprintln!("Skipping test_extraction: pdftotext not installed");
            return;
        }

        let result = extractor.extract(pdf_bytes, "hello.pdf").await;
        assert!(result.is_ok(), "Extraction failed: {:?}", result.err());
        let text = result.unwrap();
        assert!(
            text.contains("Hello World PDF sample"),
            "Extracted text should contain the sample sentence, got: {}",
            text
        );
    }
}
