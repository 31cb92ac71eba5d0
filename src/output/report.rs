//! Report envelope around the pipeline analysis

use crate::processing::analyzer::Analysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation wrapper for one analysis run. The summary and metadata are
/// derived here, outside the idempotent pipeline; the embedded `Analysis`
/// is carried unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Executive summary with verdict and key findings
    pub summary: ReportSummary,

    /// Full pipeline output
    pub analysis: Analysis,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

/// Executive summary with key findings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Overall compatibility score (0-100)
    pub overall_score: u8,

    /// One-line verdict
    pub verdict: String,

    /// Key strengths identified
    pub strengths: Vec<String>,

    /// Top areas for improvement
    pub improvement_areas: Vec<String>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Resume file analyzed
    pub resume_file: String,

    /// Job title the resume was checked against
    pub job_title: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the checker used
    pub version: String,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl CheckReport {
    /// Wrap a pipeline analysis for presentation.
    pub fn from_analysis(
        analysis: Analysis,
        resume_file: &str,
        job_title: &str,
        processing_time_ms: u64,
    ) -> Self {
        let summary = Self::create_summary(&analysis);
        let metadata = Self::create_metadata(resume_file, job_title, processing_time_ms);

        Self {
            summary,
            analysis,
            metadata,
        }
    }

    /// Pure function of the analysis: identical analyses always produce the
    /// same summary.
    fn create_summary(analysis: &Analysis) -> ReportSummary {
        let overall_score = analysis.scores.overall;

        let mut strengths = Vec::new();
        if analysis.scores.keyword_match >= 70 {
            strengths.push("Good keyword coverage for ATS systems".to_string());
        }
        if analysis.format.passes_format_check {
            strengths.push("Format passes all high-severity ATS checks".to_string());
        }
        if analysis.scores.section_completeness >= 80 {
            strengths.push("Resume sections are well populated".to_string());
        }

        let mut improvement_areas = Vec::new();
        if analysis.scores.keyword_match < 50 {
            improvement_areas
                .push("Add more relevant keywords from the job description".to_string());
        }
        if !analysis.format.passes_format_check {
            improvement_areas.push("Resolve high-severity format issues".to_string());
        }
        if analysis.scores.section_completeness < 50 {
            improvement_areas.push("Fill out missing resume sections".to_string());
        }

        let verdict = match overall_score {
            90..=100 => "Excellent match - strong candidate for this role".to_string(),
            80..=89 => "Very good match - minor improvements could help".to_string(),
            70..=79 => "Good match - some targeted improvements recommended".to_string(),
            60..=69 => "Fair match - several improvements needed".to_string(),
            50..=59 => "Below average match - significant improvements required".to_string(),
            _ => "Poor match - major revisions needed".to_string(),
        };

        ReportSummary {
            overall_score,
            verdict,
            strengths,
            improvement_areas,
        }
    }

    fn create_metadata(
        resume_file: &str,
        job_title: &str,
        processing_time_ms: u64,
    ) -> ReportMetadata {
        ReportMetadata {
            resume_file: resume_file.to_string(),
            job_title: job_title.to_string(),
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::format_checker::{FormatIssue, FormatReport, Severity};
    use crate::processing::score_calculator::ScoreReport;

    fn analysis(overall: u8, keyword: u8, completeness: u8, passes: bool) -> Analysis {
        let issues = if passes {
            Vec::new()
        } else {
            vec![FormatIssue {
                issue: "Missing email address".to_string(),
                severity: Severity::High,
                recommendation: "Add an email address.".to_string(),
            }]
        };

        Analysis {
            format: FormatReport {
                issues,
                passes_format_check: passes,
            },
            scores: ScoreReport {
                overall,
                keyword_match: keyword,
                format_compatibility: 80,
                section_completeness: completeness,
            },
            matched_keywords: vec!["python".to_string()],
            missing_keywords: vec!["aws".to_string()],
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn test_verdict_bands() {
        let verdict = |score| {
            CheckReport::from_analysis(analysis(score, 50, 50, true), "resume.pdf", "Engineer", 1)
                .summary
                .verdict
        };

        assert!(verdict(95).starts_with("Excellent match"));
        assert!(verdict(85).starts_with("Very good match"));
        assert!(verdict(72).starts_with("Good match"));
        assert!(verdict(64).starts_with("Fair match"));
        assert!(verdict(53).starts_with("Below average match"));
        assert!(verdict(20).starts_with("Poor match"));
    }

    #[test]
    fn test_strengths_reflect_sub_scores() {
        let report =
            CheckReport::from_analysis(analysis(80, 85, 90, true), "resume.pdf", "Engineer", 1);

        assert_eq!(report.summary.strengths.len(), 3);
        assert!(report.summary.improvement_areas.is_empty());
    }

    #[test]
    fn test_improvement_areas_reflect_weak_sub_scores() {
        let report =
            CheckReport::from_analysis(analysis(30, 20, 30, false), "resume.pdf", "Engineer", 1);

        assert!(report.summary.strengths.is_empty());
        assert_eq!(report.summary.improvement_areas.len(), 3);
    }

    #[test]
    fn test_metadata_carries_request_context() {
        let report =
            CheckReport::from_analysis(analysis(70, 70, 70, true), "cv.docx", "Data Analyst", 12);

        assert_eq!(report.metadata.resume_file, "cv.docx");
        assert_eq!(report.metadata.job_title, "Data Analyst");
        assert_eq!(report.metadata.processing_time_ms, 12);
        assert_eq!(report.metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_report_serializes_round_trip() {
        let report =
            CheckReport::from_analysis(analysis(70, 70, 70, true), "resume.pdf", "Engineer", 5);

        let json = serde_json::to_string(&report).unwrap();
        let restored: CheckReport = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.summary.overall_score, 70);
        assert_eq!(restored.analysis.matched_keywords, vec!["python"]);
    }
}
