//! Rule-based ATS format validation

use crate::error::{Result, ResumeCheckerError};
use crate::processing::text_processor::{find_ascii_case_insensitive, is_whole_word, word_count};
use crate::processing::vocabulary::Vocabulary;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const ATS_COMPATIBLE_EXTENSIONS: [&str; 4] = ["pdf", "docx", "doc", "txt"];
const BULLET_SECTION_TERMINATORS: [&str; 4] = ["EDUCATION", "SKILLS", "CERTIFICATIONS", "PROJECTS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatIssue {
    pub issue: String,
    pub severity: Severity,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    pub issues: Vec<FormatIssue>,
    pub passes_format_check: bool,
}

/// Six independent rule checks run in a fixed order. Checks never suppress
/// each other; the report fails only on high-severity findings.
pub struct FormatChecker {
    header_matcher: AhoCorasick,
    email_regex: Regex,
    phone_regex: Regex,
    spacing_regex: Regex,
}

impl FormatChecker {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        // Overlapping scan: "WORK EXPERIENCE" must also count as a hit for
        // the shorter "EXPERIENCE" entry, as each header is tested on its own.
        let header_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary.standard_headers)
            .map_err(|e| {
                ResumeCheckerError::Configuration(format!("Failed to build header matcher: {}", e))
            })?;

        let email_regex =
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"\b(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b")
                .expect("Invalid phone regex");

        let spacing_regex = Regex::new(r"\s{3,}").expect("Invalid spacing regex");

        Ok(Self {
            header_matcher,
            email_regex,
            phone_regex,
            spacing_regex,
        })
    }

    /// Run every check against the resume text and declared file extension.
    pub fn check_format(&self, text: &str, file_extension: &str) -> FormatReport {
        let mut issues = Vec::new();

        self.check_length(text, &mut issues);
        self.check_headers(text, &mut issues);
        self.check_bullet_points(text, &mut issues);
        self.check_spacing(text, &mut issues);
        self.check_contact_info(text, &mut issues);
        self.check_file_format(file_extension, &mut issues);

        let passes_format_check = !issues.iter().any(|i| i.severity == Severity::High);

        FormatReport {
            issues,
            passes_format_check,
        }
    }

    fn check_length(&self, text: &str, issues: &mut Vec<FormatIssue>) {
        let words = word_count(text);

        if words < 300 {
            issues.push(FormatIssue {
                issue: "Resume might be too short".to_string(),
                severity: Severity::Medium,
                recommendation: "Aim for a resume that contains at least 300-600 words to provide sufficient information for ATS systems and recruiters.".to_string(),
            });
        } else if words > 1000 {
            issues.push(FormatIssue {
                issue: "Resume might be too long".to_string(),
                severity: Severity::Low,
                recommendation: "Consider shortening your resume to keep it focused and concise. Most ATS systems work best with resumes under 1000 words.".to_string(),
            });
        }
    }

    fn check_headers(&self, text: &str, issues: &mut Vec<FormatIssue>) {
        let mut present: HashSet<usize> = HashSet::new();

        for mat in self.header_matcher.find_overlapping_iter(text) {
            if is_whole_word(text, mat.start(), mat.end()) {
                present.insert(mat.pattern().as_usize());
            }
        }

        if present.len() < 3 {
            issues.push(FormatIssue {
                issue: "Missing standard section headers".to_string(),
                severity: Severity::High,
                recommendation: "Use standard section headers like \"Experience\", \"Education\", \"Skills\" to ensure ATS systems can properly categorize your information.".to_string(),
            });
        }
    }

    fn check_bullet_points(&self, text: &str, issues: &mut Vec<FormatIssue>) {
        let start = match find_ascii_case_insensitive(text, "EXPERIENCE") {
            Some(pos) => pos,
            None => return,
        };
        let scan_from = start + "EXPERIENCE".len();

        let end = BULLET_SECTION_TERMINATORS
            .iter()
            .filter_map(|header| {
                find_ascii_case_insensitive(&text[scan_from..], header).map(|pos| scan_from + pos)
            })
            .min()
            .unwrap_or(text.len());

        let section = &text[start..end];
        let has_bullet_points = section.chars().any(|c| matches!(c, '-' | '•' | '*'));

        if !has_bullet_points {
            issues.push(FormatIssue {
                issue: "No bullet points in experience section".to_string(),
                severity: Severity::Medium,
                recommendation: "Use bullet points to highlight achievements and responsibilities in your experience section for better readability and ATS parsing.".to_string(),
            });
        }
    }

    fn check_spacing(&self, text: &str, issues: &mut Vec<FormatIssue>) {
        if self.spacing_regex.is_match(text) {
            issues.push(FormatIssue {
                issue: "Potential inconsistent formatting detected".to_string(),
                severity: Severity::Low,
                recommendation: "Ensure consistent spacing and formatting throughout your resume. Use the same font family and size for each section category.".to_string(),
            });
        }
    }

    fn check_contact_info(&self, text: &str, issues: &mut Vec<FormatIssue>) {
        if !self.email_regex.is_match(text) {
            issues.push(FormatIssue {
                issue: "Missing email address".to_string(),
                severity: Severity::High,
                recommendation: "Include a professional email address in your contact information for recruiters to reach you.".to_string(),
            });
        }

        if !self.phone_regex.is_match(text) {
            issues.push(FormatIssue {
                issue: "Missing phone number".to_string(),
                severity: Severity::Medium,
                recommendation: "Include a phone number in your contact information. Format it consistently (e.g., XXX-XXX-XXXX).".to_string(),
            });
        }
    }

    fn check_file_format(&self, file_extension: &str, issues: &mut Vec<FormatIssue>) {
        let extension = file_extension.trim_start_matches('.').to_lowercase();

        if !ATS_COMPATIBLE_EXTENSIONS.contains(&extension.as_str()) {
            issues.push(FormatIssue {
                issue: "Non-ATS-friendly file format".to_string(),
                severity: Severity::High,
                recommendation: "Use a standard file format like PDF or DOCX. Avoid image-based formats, specialized formats, or scanned documents.".to_string(),
            });
        }

        if extension == "pdf" {
            issues.push(FormatIssue {
                issue: "Ensure PDF is text-based".to_string(),
                severity: Severity::Low,
                recommendation: "Make sure your PDF is created from a text document and not scanned. Scanned PDFs may not be properly read by ATS systems.".to_string(),
            });
        }
    }
}

impl Default for FormatChecker {
    fn default() -> Self {
        Self::new(&Vocabulary::default()).expect("Failed to create default format checker")
    }
}
