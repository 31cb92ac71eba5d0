//! Input processing module
//! Handles file detection, document decoding, and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
