//! Input manager for handling different file types

use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor, WordExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Decodes raw document bytes into plain text by declared extension.
pub struct DocumentDecoder;

impl DocumentDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Gate the declared extension against the supported set, then dispatch
    /// to the matching extractor.
    pub fn decode(&self, bytes: &[u8], declared_extension: &str) -> Result<String> {
        let file_type = FileType::from_extension(declared_extension);

        let text = match file_type {
            FileType::Pdf => {
                info!("Decoding PDF document ({} bytes)", bytes.len());
                PdfExtractor.extract_bytes(bytes)?
            }
            FileType::Text => {
                info!("Decoding plain text document ({} bytes)", bytes.len());
                PlainTextExtractor.extract_bytes(bytes)?
            }
            FileType::Docx | FileType::Doc => {
                info!("Decoding Word document ({} bytes)", bytes.len());
                WordExtractor.extract_bytes(bytes)?
            }
            FileType::Unknown => {
                return Err(ResumeCheckerError::UnsupportedFormat(
                    declared_extension.to_string(),
                ));
            }
        };

        debug!("Decoded {} characters of text", text.chars().count());
        Ok(text)
    }
}

impl Default for DocumentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path-based convenience wrapper around the decoder for the CLI.
pub struct InputManager {
    decoder: DocumentDecoder,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            decoder: DocumentDecoder::new(),
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeCheckerError::InvalidRequest(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = Self::file_extension(path)?;
        let bytes = std::fs::read(path)?;

        info!("Extracting text from: {}", path.display());
        let text = self.decoder.decode(&bytes, &extension)?;
        debug!(
            "Extracted {} words from {}",
            text.split_whitespace().count(),
            path.display()
        );

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn file_extension(path: &Path) -> Result<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_string())
            .ok_or_else(|| {
                ResumeCheckerError::UnsupportedFormat(format!(
                    "{} (no file extension)",
                    path.display()
                ))
            })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_decode_routes_by_extension() {
        let decoder = DocumentDecoder::new();
        let text = decoder.decode(b"resume body", "txt").unwrap();

        assert_eq!(text, "resume body");
    }

    #[test]
    fn test_decode_rejects_unknown_extension() {
        let decoder = DocumentDecoder::new();
        let result = decoder.decode(b"resume body", "odt");

        assert!(matches!(
            result,
            Err(ResumeCheckerError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_decode_word_bytes_requires_upstream_conversion() {
        let decoder = DocumentDecoder::new();
        let result = decoder.decode(b"\xd0\xcf\x11\xe0old word file", "doc");

        assert!(matches!(result, Err(ResumeCheckerError::DocumentDecode(_))));
    }

    #[test]
    fn test_extract_text_reads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "John Smith\nSoftware Engineer").unwrap();

        let mut manager = InputManager::new();
        let first = manager.extract_text(&path).unwrap();
        assert_eq!(manager.cache_size(), 1);

        let second = manager.extract_text(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);

        manager.clear_cache();
        assert_eq!(manager.cache_size(), 0);
    }

    #[test]
    fn test_extract_text_without_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "plain body").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        manager.extract_text(&path).unwrap();

        assert_eq!(manager.cache_size(), 0);
    }

    #[test]
    fn test_extract_text_missing_file() {
        let mut manager = InputManager::new();
        let result = manager.extract_text(Path::new("tests/fixtures/absent.txt"));

        assert!(matches!(result, Err(ResumeCheckerError::InvalidRequest(_))));
    }

    #[test]
    fn test_extract_text_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, [0xff, 0xfe, 0x80]).unwrap();

        let mut manager = InputManager::new();
        let result = manager.extract_text(&path);

        assert!(matches!(result, Err(ResumeCheckerError::DocumentDecode(_))));
    }
}
