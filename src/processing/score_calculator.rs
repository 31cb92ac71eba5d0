//! Weighted score aggregation and recommendation synthesis

use crate::processing::format_checker::{FormatReport, Severity};
use crate::processing::keyword_matcher::KeywordMatchResult;
use crate::processing::resume_parser::ParsedResume;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall: u8,
    pub keyword_match: u8,
    pub format_compatibility: u8,
    pub section_completeness: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub section: String,
    pub issue: String,
    pub recommendation: String,
}

/// Combine the three sub-scores into the weighted overall score. Keyword
/// coverage dominates: it is the primary ATS-relevance signal.
pub fn calculate_score(
    parsed: &ParsedResume,
    keyword_result: &KeywordMatchResult,
    format_report: &FormatReport,
) -> ScoreReport {
    let keyword_match = keyword_result.score;
    let format_compatibility = format_compatibility_score(format_report);
    let section_completeness = section_completeness_score(parsed);

    let overall = (0.6 * f64::from(keyword_match)
        + 0.2 * f64::from(format_compatibility)
        + 0.2 * f64::from(section_completeness))
    .round() as u8;

    ScoreReport {
        overall,
        keyword_match,
        format_compatibility,
        section_completeness,
    }
}

/// 100 minus a per-issue penalty, floored at zero.
fn format_compatibility_score(report: &FormatReport) -> u8 {
    let penalty: u32 = report
        .issues
        .iter()
        .map(|issue| match issue.severity {
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        })
        .sum();

    100u32.saturating_sub(penalty) as u8
}

/// Additive credit for populated resume sections, capped at 100 in total:
/// contact 20, skills 20, education 20, experience 40.
fn section_completeness_score(parsed: &ParsedResume) -> u8 {
    let mut score = 0;

    let contact_fields = [&parsed.full_name, &parsed.email, &parsed.phone]
        .iter()
        .filter(|field| !field.is_empty())
        .count();
    score += match contact_fields {
        3 => 20,
        2 => 10,
        _ => 0,
    };

    score += if parsed.skills.len() >= 5 {
        20
    } else if !parsed.skills.is_empty() {
        10
    } else {
        0
    };

    if !parsed.education.is_empty() {
        score += 20;
    }

    score += match parsed.experience.len() {
        0 => 0,
        1 => 20,
        _ => 40,
    };

    score
}

/// Actionable recommendations in fixed stage order: keywords, then one per
/// format issue, then contact, skills and experience completeness.
pub fn generate_recommendations(
    parsed: &ParsedResume,
    keyword_result: &KeywordMatchResult,
    format_report: &FormatReport,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !keyword_result.missing.is_empty() {
        let listed: Vec<&str> = keyword_result
            .missing
            .iter()
            .take(5)
            .map(|k| k.as_str())
            .collect();
        let mut recommendation = format!(
            "Consider adding these keywords to your resume: {}",
            listed.join(", ")
        );
        if keyword_result.missing.len() > 5 {
            recommendation.push_str(" and others");
        }
        recommendations.push(Recommendation {
            section: "Keywords".to_string(),
            issue: "Missing important keywords".to_string(),
            recommendation,
        });
    }

    for issue in &format_report.issues {
        recommendations.push(Recommendation {
            section: "Format".to_string(),
            issue: issue.issue.clone(),
            recommendation: issue.recommendation.clone(),
        });
    }

    if parsed.email.is_empty() || parsed.phone.is_empty() {
        recommendations.push(Recommendation {
            section: "Contact Information".to_string(),
            issue: "Incomplete contact details".to_string(),
            recommendation: "Ensure your resume includes both email and phone number for ATS to properly extract your contact information.".to_string(),
        });
    }

    if parsed.skills.len() < 5 {
        recommendations.push(Recommendation {
            section: "Skills".to_string(),
            issue: "Limited skills section".to_string(),
            recommendation: "Expand your skills section to include more relevant technical and soft skills that match the job description.".to_string(),
        });
    }

    if parsed.experience.is_empty() {
        recommendations.push(Recommendation {
            section: "Experience".to_string(),
            issue: "Missing work experience".to_string(),
            recommendation: "Add detailed work experience with measurable achievements and results.".to_string(),
        });
    } else if parsed
        .experience
        .iter()
        .any(|entry| entry.description.chars().count() < 50)
    {
        recommendations.push(Recommendation {
            section: "Experience".to_string(),
            issue: "Limited experience descriptions".to_string(),
            recommendation: "Enhance your experience descriptions with specific accomplishments, metrics, and relevant keywords.".to_string(),
        });
    }

    recommendations
}
