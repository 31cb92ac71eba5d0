//! Output formatters with multiple format support

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::CheckReport;
use crate::processing::format_checker::Severity;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting check reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String>;
    fn supports_format(&self, format: &str) -> bool;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::High => Color::Red,
            Severity::Medium => Color::Yellow,
            Severity::Low => Color::Blue,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!(
            "Resume: {} | Job: {}\n",
            report.metadata.resume_file, report.metadata.job_title
        ));

        output.push_str(&self.format_header("Executive Summary", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.summary.overall_score,
            self.format_score_badge(report.summary.overall_score)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "🔍 Keyword Match: {}% (weight: 60%)\n",
            report.analysis.scores.keyword_match
        ));
        output.push_str(&format!(
            "📄 Format Compatibility: {}% (weight: 20%)\n",
            report.analysis.scores.format_compatibility
        ));
        output.push_str(&format!(
            "🧩 Section Completeness: {}% (weight: 20%)\n",
            report.analysis.scores.section_completeness
        ));

        if !report.summary.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &report.summary.strengths {
                output.push_str(&format!("  ✅ {}\n", strength));
            }
        }

        if !report.summary.improvement_areas.is_empty() {
            output.push_str(&self.format_header("Areas for Improvement", 3));
            for area in &report.summary.improvement_areas {
                output.push_str(&format!("  🎯 {}\n", area));
            }
        }

        output.push_str(&self.format_header("Format Check", 2));
        if report.analysis.format.issues.is_empty() {
            output.push_str("No format issues detected.\n");
        } else {
            for issue in &report.analysis.format.issues {
                let severity = self.colorize(
                    &format!("[{}]", issue.severity),
                    Self::severity_color(issue.severity),
                );
                output.push_str(&format!("  {} {}\n", severity, issue.issue));
                if self.detailed {
                    output.push_str(&format!("      {}\n", issue.recommendation));
                }
            }
        }

        output.push_str(&self.format_header("Keywords", 2));
        if report.analysis.matched_keywords.is_empty() {
            output.push_str("No job keywords found in the resume.\n");
        } else {
            output.push_str(&format!(
                "Matched ({}): {}\n",
                report.analysis.matched_keywords.len(),
                report.analysis.matched_keywords.join(", ")
            ));
        }
        if !report.analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "Missing ({}): {}\n",
                report.analysis.missing_keywords.len(),
                self.colorize(&report.analysis.missing_keywords.join(", "), Color::Yellow)
            ));
        }

        if !report.analysis.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            for (i, rec) in report.analysis.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} — {}\n",
                    i + 1,
                    self.colorize(&rec.section, Color::Cyan),
                    rec.issue
                ));
                output.push_str(&format!("     {}\n", rec.recommendation));
            }
        }

        Ok(output)
    }

    fn supports_format(&self, format: &str) -> bool {
        format.eq_ignore_ascii_case("console")
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self, format: &str) -> bool {
        format.eq_ignore_ascii_case("json")
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** {}\n\n",
                report.metadata.resume_file, report.metadata.job_title
            ));
        }

        output.push_str("## Executive Summary\n\n");
        output.push_str(&format!(
            "**Overall Compatibility Score:** {}% {}\n\n",
            report.summary.overall_score,
            Self::markdown_score_badge(report.summary.overall_score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        output.push_str(&format!(
            "| 🔍 Keyword Match | {}% | 60% |\n",
            report.analysis.scores.keyword_match
        ));
        output.push_str(&format!(
            "| 📄 Format Compatibility | {}% | 20% |\n",
            report.analysis.scores.format_compatibility
        ));
        output.push_str(&format!(
            "| 🧩 Section Completeness | {}% | 20% |\n\n",
            report.analysis.scores.section_completeness
        ));

        if !report.summary.strengths.is_empty() {
            output.push_str("### ✅ Key Strengths\n\n");
            for strength in &report.summary.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push_str("\n");
        }

        if !report.summary.improvement_areas.is_empty() {
            output.push_str("### 🎯 Areas for Improvement\n\n");
            for area in &report.summary.improvement_areas {
                output.push_str(&format!("- {}\n", area));
            }
            output.push_str("\n");
        }

        output.push_str("## Format Check\n\n");
        if report.analysis.format.issues.is_empty() {
            output.push_str("No format issues detected.\n\n");
        } else {
            output.push_str("| Severity | Issue | Recommendation |\n");
            output.push_str("|----------|-------|----------------|\n");
            for issue in &report.analysis.format.issues {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    issue.severity, issue.issue, issue.recommendation
                ));
            }
            output.push_str("\n");
        }

        output.push_str("## Keywords\n\n");
        if !report.analysis.matched_keywords.is_empty() {
            output.push_str(&format!(
                "**Matched:** `{}`\n\n",
                report.analysis.matched_keywords.join("`, `")
            ));
        }
        if !report.analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "**Missing:** `{}`\n\n",
                report.analysis.missing_keywords.join("`, `")
            ));
        }

        if !report.analysis.recommendations.is_empty() {
            output.push_str("## 📋 Recommendations\n\n");
            for (i, rec) in report.analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("### {}. {}: {}\n\n", i + 1, rec.section, rec.issue));
                output.push_str(&format!("{}\n\n", rec.recommendation));
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Checker v{}*\n",
                report.metadata.version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self, format: &str) -> bool {
        format.eq_ignore_ascii_case("markdown") || format.eq_ignore_ascii_case("md")
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate(&self, report: &CheckReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_report.txt", base_name),
        OutputFormat::Json => format!("{}_report.json", base_name),
        OutputFormat::Markdown => format!("{}_report.md", base_name),
    }
}
