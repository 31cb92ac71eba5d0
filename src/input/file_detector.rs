//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Text,
    Unknown,
}

impl FileType {
    /// Detect a file type from its extension, dot optional.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "doc" => FileType::Doc,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }
}
