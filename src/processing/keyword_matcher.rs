//! Keyword-importance extraction and overlap scoring

use crate::processing::text_processor::normalize;
use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const MAX_KEYWORDS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedKeyword {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub matched: Vec<MatchedKeyword>,
    pub missing: Vec<String>,
    pub score: u8,
}

/// Derives the important-keyword set from a job description and scores a
/// resume's coverage of it.
pub struct KeywordMatcher {
    stop_words: HashSet<String>,
    common_phrases: Vec<String>,
    technical_skills: Vec<String>,
}

impl KeywordMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            stop_words: vocabulary.stop_words.clone(),
            common_phrases: vocabulary.common_phrases.clone(),
            technical_skills: vocabulary.technical_skills.clone(),
        }
    }

    /// The importance-keyword set, capped at 30 entries with exact-string
    /// duplicates removed. Order is first-seen: repeated description tokens,
    /// then common phrases, then technical skills.
    pub fn extract_important_keywords(&self, job_description: &str) -> Vec<String> {
        let tokens = normalize(job_description);
        let lowered = job_description.to_lowercase();

        // Content tokens that occur more than once
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            if token.chars().count() > 2 && !self.stop_words.contains(token.as_str()) {
                *frequency.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let mut keywords: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for token in &tokens {
            if frequency.get(token.as_str()).copied().unwrap_or(0) > 1
                && seen.insert(token.as_str())
            {
                keywords.push(token.clone());
            }
        }

        // Common phrases present as literal substrings
        for phrase in &self.common_phrases {
            if lowered.contains(phrase.as_str()) {
                keywords.push(phrase.clone());
            }
        }

        // Technical skills present as case-insensitive substrings, kept in
        // their vocabulary casing
        for skill in &self.technical_skills {
            if lowered.contains(&skill.to_lowercase()) && !keywords.contains(skill) {
                keywords.push(skill.clone());
            }
        }

        let mut unique = Vec::new();
        let mut seen_exact: HashSet<&String> = HashSet::new();
        for keyword in &keywords {
            if seen_exact.insert(keyword) {
                unique.push(keyword.clone());
            }
        }
        unique.truncate(MAX_KEYWORDS);

        unique
    }

    /// Partition the importance-keyword set into matched (with occurrence
    /// counts) and missing, and score the coverage 0..=100.
    pub fn match_keywords(&self, resume_text: &str, job_description: &str) -> KeywordMatchResult {
        let keywords = self.extract_important_keywords(job_description);

        let resume_tokens = normalize(resume_text);
        let mut token_counts: HashMap<&str, usize> = HashMap::new();
        for token in &resume_tokens {
            *token_counts.entry(token.as_str()).or_insert(0) += 1;
        }
        let lowered_resume = resume_text.to_lowercase();

        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for keyword in &keywords {
            let lowered_keyword = keyword.to_lowercase();

            // Multi-word keywords match as substrings of the raw text,
            // single words against the normalized token stream
            let count = if keyword.contains(char::is_whitespace) {
                lowered_resume.matches(lowered_keyword.as_str()).count()
            } else {
                token_counts
                    .get(lowered_keyword.as_str())
                    .copied()
                    .unwrap_or(0)
            };

            if count > 0 {
                matched.push(MatchedKeyword {
                    keyword: keyword.clone(),
                    count,
                });
            } else {
                missing.push(keyword.clone());
            }
        }

        let score = if keywords.is_empty() {
            0
        } else {
            (matched.len() as f64 / keywords.len() as f64 * 100.0).round() as u8
        };

        KeywordMatchResult {
            matched,
            missing,
            score,
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}
