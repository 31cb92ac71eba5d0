//! Text extraction from uploaded document bytes

use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::FileType;

pub trait TextExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;
    fn supported_types(&self) -> Vec<FileType>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeCheckerError::DocumentDecode(format!("Failed to extract text from PDF: {}", e))
        })?;

        // A well-formed but image-only (scanned) PDF extracts to nothing
        if text.trim().is_empty() {
            return Err(ResumeCheckerError::DocumentDecode(
                "PDF contains no extractable text; it may be a scanned image".to_string(),
            ));
        }

        Ok(text)
    }

    fn supported_types(&self) -> Vec<FileType> {
        vec![FileType::Pdf]
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ResumeCheckerError::DocumentDecode(format!("Text file is not valid UTF-8: {}", e))
        })?;

        Ok(text.to_string())
    }

    fn supported_types(&self) -> Vec<FileType> {
        vec![FileType::Text]
    }
}

/// Word documents are accepted as an ATS-friendly upload format, but their
/// body text has to come from the upstream document converter; raw
/// `.docx`/`.doc` bytes cannot be decoded here.
pub struct WordExtractor;

impl TextExtractor for WordExtractor {
    fn extract_bytes(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeCheckerError::DocumentDecode(
            "Word documents must be converted to plain text by the upstream converter before analysis".to_string(),
        ))
    }

    fn supported_types(&self) -> Vec<FileType> {
        vec![FileType::Docx, FileType::Doc]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor
            .extract_bytes("John Smith\nSoftware Engineer".as_bytes())
            .unwrap();

        assert_eq!(text, "John Smith\nSoftware Engineer");
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let result = PlainTextExtractor.extract_bytes(&[0xff, 0xfe, 0x80]);

        assert!(matches!(result, Err(ResumeCheckerError::DocumentDecode(_))));
    }

    #[test]
    fn test_corrupt_pdf_is_a_decode_error() {
        let result = PdfExtractor.extract_bytes(b"not a pdf at all");

        assert!(matches!(result, Err(ResumeCheckerError::DocumentDecode(_))));
    }

    #[test]
    fn test_word_bytes_need_upstream_conversion() {
        let result = WordExtractor.extract_bytes(b"PK\x03\x04fake docx");

        assert!(matches!(result, Err(ResumeCheckerError::DocumentDecode(_))));
    }

    #[test]
    fn test_supported_types_cover_the_ats_formats() {
        assert_eq!(PdfExtractor.supported_types(), vec![FileType::Pdf]);
        assert_eq!(PlainTextExtractor.supported_types(), vec![FileType::Text]);
        assert_eq!(
            WordExtractor.supported_types(),
            vec![FileType::Docx, FileType::Doc]
        );
    }
}
