//! Output module
//! Report assembly and formatting

pub mod report;
pub mod formatter;
