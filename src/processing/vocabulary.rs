//! Reference vocabularies used by the analysis pipeline

use std::collections::HashSet;

/// Immutable vocabulary tables shared by the pipeline components.
///
/// Built once (defaults plus any configured additions) and injected into
/// each component at construction, so the components themselves stay free
/// of global state.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Skills recognized by the field extractor (whole-word match).
    pub reference_skills: Vec<String>,
    /// Section headers an ATS expects to find.
    pub standard_headers: Vec<String>,
    /// Multi-word phrases scanned for in job descriptions.
    pub common_phrases: Vec<String>,
    /// Technical skills scanned for in job descriptions (substring match).
    pub technical_skills: Vec<String>,
    /// Stop words excluded from keyword-importance extraction.
    pub stop_words: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            reference_skills: Self::default_reference_skills(),
            standard_headers: Self::default_standard_headers(),
            common_phrases: Self::default_common_phrases(),
            technical_skills: Self::default_technical_skills(),
            stop_words: Self::default_stop_words(),
        }
    }
}

impl Vocabulary {
    /// Build the default vocabulary extended with user-configured skills.
    ///
    /// Additions land after the defaults so default ordering is stable;
    /// duplicates are dropped case-insensitively.
    pub fn with_additional_skills(additional_skills: &[String]) -> Self {
        let mut vocab = Self::default();

        for skill in additional_skills {
            let skill = skill.trim();
            if skill.is_empty() {
                continue;
            }
            if !vocab
                .reference_skills
                .iter()
                .any(|s| s.eq_ignore_ascii_case(skill))
            {
                vocab.reference_skills.push(skill.to_string());
            }
        }

        vocab
    }

    fn default_reference_skills() -> Vec<String> {
        vec![
            "JavaScript", "React", "Node.js", "Python", "Java", "SQL", "MongoDB",
            "AWS", "Docker", "Git", "Agile", "Communication", "Leadership",
            "Project Management", "Machine Learning", "Data Analysis",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_standard_headers() -> Vec<String> {
        vec![
            "EXPERIENCE", "WORK EXPERIENCE", "EMPLOYMENT",
            "EDUCATION", "SKILLS", "TECHNICAL SKILLS",
            "PROJECTS", "CERTIFICATIONS", "SUMMARY", "PROFILE",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_common_phrases() -> Vec<String> {
        vec![
            "problem solving", "team player", "attention to detail",
            "communication skills", "project management", "time management",
            "critical thinking", "product development", "user experience",
            "cross-functional", "self-motivated", "fast-paced environment",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_technical_skills() -> Vec<String> {
        vec![
            "JavaScript", "React", "Node.js", "Express", "MongoDB", "SQL", "Java", "Python",
            "AWS", "Docker", "Kubernetes", "Git", "CI/CD", "Agile", "Scrum", "REST API",
            "Frontend", "Backend", "Full Stack", "DevOps", "Cloud", "Microservices",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Standard English stop words.
    fn default_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "against", "all", "am",
            "an", "and", "any", "are", "aren't", "as", "at", "be", "because",
            "been", "before", "being", "below", "between", "both", "but", "by",
            "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
            "doesn't", "doing", "don't", "down", "during", "each", "few", "for",
            "from", "further", "had", "hadn't", "has", "hasn't", "have",
            "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
            "here's", "hers", "herself", "him", "himself", "his", "how",
            "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into",
            "is", "isn't", "it", "it's", "its", "itself", "just", "let's",
            "me", "more", "most", "mustn't", "my", "myself", "no", "nor",
            "not", "now", "of", "off", "on", "once", "only", "or", "other",
            "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
            "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't",
            "so", "some", "such", "than", "that", "that's", "the", "their",
            "theirs", "them", "themselves", "then", "there", "there's",
            "these", "they", "they'd", "they'll", "they're", "they've",
            "this", "those", "through", "to", "too", "under", "until", "up",
            "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
            "were", "weren't", "what", "what's", "when", "when's", "where",
            "where's", "which", "while", "who", "who's", "whom", "why",
            "why's", "with", "won't", "would", "wouldn't", "you", "you'd",
            "you'll", "you're", "you've", "your", "yours", "yourself",
            "yourselves",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}
