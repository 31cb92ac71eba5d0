//! Integration tests for the resume checking pipeline

use resume_checker::config::OutputFormat;
use resume_checker::error::ResumeCheckerError;
use resume_checker::input::manager::{DocumentDecoder, InputManager};
use resume_checker::output::formatter::ReportGenerator;
use resume_checker::output::report::CheckReport;
use resume_checker::processing::analyzer::AnalysisEngine;
use resume_checker::processing::format_checker::Severity;
use std::path::Path;

fn load_fixtures() -> (String, String) {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .expect("resume fixture should decode");
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .expect("job fixture should decode");
    (resume, job)
}

#[test]
fn test_analyze_fixture_end_to_end() {
    let (resume, job) = load_fixtures();
    let engine = AnalysisEngine::default();

    let analysis = engine
        .analyze(&resume, "txt", "Frontend Developer", &job)
        .unwrap();

    assert_eq!(analysis.matched_keywords, vec!["team player", "JavaScript"]);
    assert_eq!(
        analysis.missing_keywords,
        vec!["problem solving", "React", "Java", "AWS"]
    );

    // 2 of 6 job keywords are covered
    assert_eq!(analysis.scores.keyword_match, 33);
    // The only finding is the medium "too short" length issue
    assert_eq!(analysis.scores.format_compatibility, 90);
    // Contact, skills, education and two experience entries all present
    assert_eq!(analysis.scores.section_completeness, 100);
    assert_eq!(analysis.scores.overall, 58);

    assert!(analysis.format.passes_format_check);
    assert!(analysis
        .format
        .issues
        .iter()
        .all(|i| i.severity != Severity::High));

    let sections: Vec<&str> = analysis
        .recommendations
        .iter()
        .map(|r| r.section.as_str())
        .collect();
    assert_eq!(sections, vec!["Keywords", "Format"]);
}

#[test]
fn test_analyze_is_idempotent_across_runs() {
    let (resume, job) = load_fixtures();
    let engine = AnalysisEngine::default();

    let first = engine
        .analyze(&resume, "txt", "Frontend Developer", &job)
        .unwrap();
    let second = engine
        .analyze(&resume, "txt", "Frontend Developer", &job)
        .unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_scores_stay_within_bounds() {
    let (resume, job) = load_fixtures();
    let engine = AnalysisEngine::default();

    let analysis = engine.analyze(&resume, "txt", "Engineer", &job).unwrap();

    for score in [
        analysis.scores.overall,
        analysis.scores.keyword_match,
        analysis.scores.format_compatibility,
        analysis.scores.section_completeness,
    ] {
        assert!(score <= 100);
    }

    // The overall score is the fixed weighted sum of the sub-scores
    let expected = (0.6 * f64::from(analysis.scores.keyword_match)
        + 0.2 * f64::from(analysis.scores.format_compatibility)
        + 0.2 * f64::from(analysis.scores.section_completeness))
    .round() as u8;
    assert_eq!(analysis.scores.overall, expected);
}

#[test]
fn test_bare_resume_fails_format_check() {
    let resume = "a plain note of fifty words ".repeat(8);
    let engine = AnalysisEngine::default();

    let analysis = engine
        .analyze(&resume, "txt", "Engineer", "hiring hiring developers developers")
        .unwrap();

    // No headers and no email both rate high severity
    assert!(analysis
        .format
        .issues
        .iter()
        .any(|i| i.severity == Severity::High));
    assert!(!analysis.format.passes_format_check);
}

#[test]
fn test_empty_job_description_is_rejected() {
    let (resume, _) = load_fixtures();
    let engine = AnalysisEngine::default();

    let result = engine.analyze(&resume, "txt", "Engineer", "   ");
    assert!(matches!(result, Err(ResumeCheckerError::InvalidRequest(_))));
}

#[test]
fn test_decoder_gates_unsupported_extensions() {
    let decoder = DocumentDecoder::new();

    let result = decoder.decode(b"some bytes", "odt");
    assert!(matches!(
        result,
        Err(ResumeCheckerError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_decoder_propagates_decode_failures() {
    let decoder = DocumentDecoder::new();

    // Word bytes need upstream conversion; corrupt PDFs cannot be extracted
    let word = decoder.decode(b"PK\x03\x04fake docx", "docx");
    assert!(matches!(word, Err(ResumeCheckerError::DocumentDecode(_))));

    let pdf = decoder.decode(b"not a pdf", "pdf");
    assert!(matches!(pdf, Err(ResumeCheckerError::DocumentDecode(_))));
}

#[test]
fn test_report_renders_in_every_format() {
    let (resume, job) = load_fixtures();
    let engine = AnalysisEngine::default();

    let analysis = engine
        .analyze(&resume, "txt", "Frontend Developer", &job)
        .unwrap();
    let report = CheckReport::from_analysis(
        analysis,
        "tests/fixtures/sample_resume.txt",
        "Frontend Developer",
        3,
    );
    let generator = ReportGenerator::with_options(false, true, true, true);

    let console = generator.generate(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("Overall Score: 58%"));
    assert!(console.contains("Missing (4): problem solving, React, Java, AWS"));

    let json = generator.generate(&report, &OutputFormat::Json).unwrap();
    let restored: CheckReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.summary.overall_score, 58);

    let markdown = generator
        .generate(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("**Overall Compatibility Score:** 58%"));
    assert!(markdown.contains("| 🔍 Keyword Match | 33% | 60% |"));
}

#[test]
fn test_save_report_writes_to_disk() {
    let (resume, job) = load_fixtures();
    let engine = AnalysisEngine::default();

    let analysis = engine.analyze(&resume, "txt", "Engineer", &job).unwrap();
    let report = CheckReport::from_analysis(analysis, "sample_resume.txt", "Engineer", 2);
    let generator = ReportGenerator::with_options(false, false, true, true);
    let markdown = generator
        .generate(&report, &OutputFormat::Markdown)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_resume_report.md");
    resume_checker::output::formatter::save_report_to_file(&markdown, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, markdown);
}
