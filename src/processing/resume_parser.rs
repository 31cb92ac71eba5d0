//! Structured field extraction from raw resume text

use crate::error::{Result, ResumeCheckerError};
use crate::processing::text_processor::{find_ascii_case_insensitive, is_whole_word};
use crate::processing::vocabulary::Vocabulary;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

const EDUCATION_HEADERS: [&str; 3] = ["EDUCATION", "ACADEMIC BACKGROUND", "ACADEMIC CREDENTIALS"];
const EXPERIENCE_HEADERS: [&str; 4] = [
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "EMPLOYMENT",
];

/// Pattern-rule extractor for contact details, skills, education and
/// experience. Extraction is total: a pattern that does not match yields an
/// empty field, never an error.
pub struct ResumeParser {
    name_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    degree_regex: Regex,
    date_range_regex: Regex,
    caps_header_regex: Regex,
    skills_matcher: AhoCorasick,
    reference_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date: String,
    pub description: String,
}

impl ResumeParser {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let name_regex =
            Regex::new(r"(?m)^[A-Z][a-z]+ [A-Z][a-z]+").expect("Invalid name regex");

        let email_regex =
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"\b(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b")
                .expect("Invalid phone regex");

        let degree_regex = Regex::new(
            r"(?i)(Bachelor|Master|PhD|B\.S\.|M\.S\.|M\.B\.A\.|B\.A\.|B\.E\.)\s+(?:of|in)?\s+[A-Za-z\s]+",
        )
        .expect("Invalid degree regex");

        let date_range_regex =
            Regex::new(r"(?i)\d{4}\s*-\s*(\d{4}|present)").expect("Invalid date range regex");

        let caps_header_regex =
            Regex::new(r"^\s*[A-Z][A-Z\s]+:?\s*$").expect("Invalid header regex");

        let skills_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&vocabulary.reference_skills)
            .map_err(|e| {
                ResumeCheckerError::Configuration(format!("Failed to build skills matcher: {}", e))
            })?;

        Ok(Self {
            name_regex,
            email_regex,
            phone_regex,
            degree_regex,
            date_range_regex,
            caps_header_regex,
            skills_matcher,
            reference_skills: vocabulary.reference_skills.clone(),
        })
    }

    /// Extract all structured fields from resume text.
    pub fn extract(&self, text: &str) -> ParsedResume {
        ParsedResume {
            full_name: self.extract_full_name(text),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            skills: self.extract_skills(text),
            education: self.extract_education(text),
            experience: self.extract_experience(text),
        }
    }

    /// First line-start run of two capitalized words.
    fn extract_full_name(&self, text: &str) -> String {
        self.name_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Whole-word intersection of the text with the reference skills list,
    /// preserving list order.
    fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut present = vec![false; self.reference_skills.len()];

        for mat in self.skills_matcher.find_iter(text) {
            if is_whole_word(text, mat.start(), mat.end()) {
                present[mat.pattern().as_usize()] = true;
            }
        }

        self.reference_skills
            .iter()
            .zip(&present)
            .filter(|(_, found)| **found)
            .map(|(skill, _)| skill.clone())
            .collect()
    }

    fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let section = match self.extract_section(text, &EDUCATION_HEADERS) {
            Some(section) => section,
            None => return Vec::new(),
        };

        self.degree_regex
            .find_iter(&section)
            .map(|m| EducationEntry {
                degree: m.as_str().to_string(),
                institution: String::new(),
                date: String::new(),
            })
            .collect()
    }

    /// Line-adjacency heuristic: a line holding a date range is taken as an
    /// employment entry, with title and company read from the two lines
    /// above and the description from the line below. Missing neighbors
    /// degrade to empty strings.
    fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let section = match self.extract_section(text, &EXPERIENCE_HEADERS) {
            Some(section) => section,
            None => return Vec::new(),
        };

        let lines: Vec<&str> = section.lines().filter(|l| !l.trim().is_empty()).collect();
        let mut entries = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if !self.date_range_regex.is_match(line) {
                continue;
            }
            entries.push(ExperienceEntry {
                title: if i >= 1 { lines[i - 1].to_string() } else { String::new() },
                company: if i >= 2 { lines[i - 2].to_string() } else { String::new() },
                date: line.to_string(),
                description: lines.get(i + 1).map(|l| l.to_string()).unwrap_or_default(),
            });
        }

        entries
    }

    /// Body of the first labeled section among the header aliases: text
    /// after the header (and any `:`/whitespace run) up to the next ALL-CAPS
    /// header line or the end of the document.
    fn extract_section(&self, text: &str, headers: &[&str]) -> Option<String> {
        for header in headers {
            let start = match find_ascii_case_insensitive(text, header) {
                Some(pos) => pos + header.len(),
                None => continue,
            };

            let after = &text[start..];
            let body_start = after
                .find(|c: char| c != ':' && !c.is_whitespace())
                .unwrap_or(after.len());
            let body = self.truncate_at_next_header(&after[body_start..]);

            if !body.is_empty() {
                return Some(body.to_string());
            }
        }

        None
    }

    /// Cut the body at the first subsequent line that looks like an ALL-CAPS
    /// section header. The body's own first line is never treated as one.
    fn truncate_at_next_header<'a>(&self, body: &'a str) -> &'a str {
        let mut line_start = match body.find('\n') {
            Some(pos) => pos + 1,
            None => return body,
        };

        loop {
            let line_end = body[line_start..]
                .find('\n')
                .map(|pos| line_start + pos)
                .unwrap_or(body.len());

            if self.caps_header_regex.is_match(&body[line_start..line_end]) {
                return &body[..line_start];
            }
            if line_end == body.len() {
                return body;
            }
            line_start = line_end + 1;
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(&Vocabulary::default()).expect("Failed to create default resume parser")
    }
}
