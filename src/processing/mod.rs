//! Text processing and analysis module

pub mod text_processor;
pub mod vocabulary;
pub mod resume_parser;
pub mod format_checker;
pub mod keyword_matcher;
pub mod score_calculator;
pub mod analyzer;
