//! Main analysis engine coordinating the resume checking pipeline

use crate::config::Config;
use crate::error::{Result, ResumeCheckerError};
use crate::processing::format_checker::{FormatChecker, FormatReport};
use crate::processing::keyword_matcher::KeywordMatcher;
use crate::processing::resume_parser::ResumeParser;
use crate::processing::score_calculator::{self, Recommendation, ScoreReport};
use crate::processing::vocabulary::Vocabulary;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// How many missing keywords the analysis reports back to the caller.
/// Recommendations are generated from the full list before it is cut.
const MISSING_KEYWORDS_LIMIT: usize = 10;

/// Main analysis engine that coordinates all pipeline components
pub struct AnalysisEngine {
    parser: ResumeParser,
    format_checker: FormatChecker,
    keyword_matcher: KeywordMatcher,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub format: FormatReport,
    pub scores: ScoreReport,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let vocabulary =
            Vocabulary::with_additional_skills(&config.vocabulary.additional_skills);
        Self::with_vocabulary(&vocabulary)
    }

    /// Create an engine from an explicit vocabulary.
    pub fn with_vocabulary(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            parser: ResumeParser::new(vocabulary)?,
            format_checker: FormatChecker::new(vocabulary)?,
            keyword_matcher: KeywordMatcher::new(vocabulary),
        })
    }

    /// Run the full pipeline over decoded resume text.
    ///
    /// `file_extension` is the declared extension of the uploaded resume and
    /// feeds only the file-format check. The operation holds no mutable
    /// state, so identical inputs always produce an identical `Analysis`.
    pub fn analyze(
        &self,
        resume_text: &str,
        file_extension: &str,
        job_title: &str,
        job_description: &str,
    ) -> Result<Analysis> {
        if job_title.trim().is_empty() {
            return Err(ResumeCheckerError::InvalidRequest(
                "Job title is required".to_string(),
            ));
        }
        if job_description.trim().is_empty() {
            return Err(ResumeCheckerError::InvalidRequest(
                "Job description is required".to_string(),
            ));
        }

        info!("Starting resume analysis for job title: {}", job_title);

        let parsed = self.parser.extract(resume_text);
        debug!(
            "Extracted fields: {} skills, {} education entries, {} experience entries",
            parsed.skills.len(),
            parsed.education.len(),
            parsed.experience.len()
        );

        let format = self.format_checker.check_format(resume_text, file_extension);
        debug!("Format check produced {} issues", format.issues.len());

        let keyword_result = self
            .keyword_matcher
            .match_keywords(resume_text, job_description);
        if keyword_result.matched.is_empty() && keyword_result.missing.is_empty() {
            warn!("Job description produced no important keywords");
        }
        debug!(
            "Keyword matching: {} matched, {} missing",
            keyword_result.matched.len(),
            keyword_result.missing.len()
        );

        let scores = score_calculator::calculate_score(&parsed, &keyword_result, &format);
        let recommendations =
            score_calculator::generate_recommendations(&parsed, &keyword_result, &format);

        info!(
            "Analysis complete: overall score {}, {} recommendations",
            scores.overall,
            recommendations.len()
        );

        let matched_keywords = keyword_result
            .matched
            .into_iter()
            .map(|m| m.keyword)
            .collect();
        let mut missing_keywords = keyword_result.missing;
        missing_keywords.truncate(MISSING_KEYWORDS_LIMIT);

        Ok(Analysis {
            format,
            scores,
            matched_keywords,
            missing_keywords,
            recommendations,
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::with_vocabulary(&Vocabulary::default())
            .expect("Failed to create default analysis engine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeCheckerError;

    const SAMPLE_RESUME: &str = "\
John Smith
john.smith@example.com
555-123-4567

SUMMARY
JavaScript developer and team player building web tools.

EXPERIENCE
Acme Corp
Frontend Developer
2019 - 2022
- Built dashboards used by thousands of customers every day.

EDUCATION
Bachelor of Science in Computer Science

SKILLS
JavaScript, Git, Docker
";

    const SAMPLE_JOB: &str = "We need a JavaScript developer with AWS and React \
experience, team player, problem solving skills";

    #[test]
    fn test_analyze_requires_job_title() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze(SAMPLE_RESUME, "pdf", "  ", SAMPLE_JOB);

        assert!(matches!(result, Err(ResumeCheckerError::InvalidRequest(_))));
    }

    #[test]
    fn test_analyze_requires_job_description() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze(SAMPLE_RESUME, "pdf", "Frontend Developer", "\n\t");

        assert!(matches!(result, Err(ResumeCheckerError::InvalidRequest(_))));
    }

    #[test]
    fn test_analyze_end_to_end() {
        let engine = AnalysisEngine::default();
        let analysis = engine
            .analyze(SAMPLE_RESUME, "pdf", "Frontend Developer", SAMPLE_JOB)
            .unwrap();

        assert_eq!(analysis.matched_keywords, vec!["team player", "JavaScript"]);
        assert_eq!(
            analysis.missing_keywords,
            vec!["problem solving", "React", "Java", "AWS"]
        );

        // 2 of 6 keywords matched
        assert_eq!(analysis.scores.keyword_match, 33);
        // Short resume (medium) plus the PDF advisory (low)
        assert_eq!(analysis.scores.format_compatibility, 85);
        // Full contact + some skills + education + one experience entry
        assert_eq!(analysis.scores.section_completeness, 70);
        assert_eq!(analysis.scores.overall, 51);

        assert!(analysis.format.passes_format_check);
        assert_eq!(analysis.recommendations[0].section, "Keywords");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let engine = AnalysisEngine::default();
        let first = engine
            .analyze(SAMPLE_RESUME, "pdf", "Frontend Developer", SAMPLE_JOB)
            .unwrap();
        let second = engine
            .analyze(SAMPLE_RESUME, "pdf", "Frontend Developer", SAMPLE_JOB)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_keywords_cut_after_recommendations() {
        // Fifteen repeated content words, none present in the resume
        let job = "alpha bravo charlie delta echo foxtrot golf hotel india \
juliet kilo lima mike november oscar alpha bravo charlie delta echo foxtrot \
golf hotel india juliet kilo lima mike november oscar";
        let resume = "A seasoned professional with broad leadership experience.";

        let engine = AnalysisEngine::default();
        let analysis = engine.analyze(resume, "txt", "Manager", job).unwrap();

        // The response carries at most ten missing keywords, while the
        // keyword recommendation was built from the full list
        assert_eq!(analysis.missing_keywords.len(), 10);
        assert_eq!(analysis.missing_keywords[9], "juliet");
        assert_eq!(
            analysis.recommendations[0].recommendation,
            "Consider adding these keywords to your resume: alpha, bravo, charlie, delta, echo and others"
        );
    }

    #[test]
    fn test_analyze_with_configured_skills() {
        let resume = "Jane Doe\njane@example.com\nSkilled in JavaScript, Python, Docker, Git and Terraform.";
        let job = "Managing infrastructure as code deployments";

        let limited = |analysis: &Analysis| {
            analysis
                .recommendations
                .iter()
                .any(|r| r.issue == "Limited skills section")
        };

        // Four recognized skills with the stock vocabulary
        let stock = AnalysisEngine::default()
            .analyze(resume, "txt", "Platform Engineer", job)
            .unwrap();
        assert!(limited(&stock));

        // Adding Terraform lifts the resume to five recognized skills
        let vocabulary = Vocabulary::with_additional_skills(&["Terraform".to_string()]);
        let extended = AnalysisEngine::with_vocabulary(&vocabulary)
            .unwrap()
            .analyze(resume, "txt", "Platform Engineer", job)
            .unwrap();
        assert!(!limited(&extended));
    }
}
