//! Resume checker: ATS compatibility scoring for resumes and job postings

use clap::Parser;
use log::{error, info};
use resume_checker::cli::{self, Cli, Commands, ConfigAction};
use resume_checker::config::Config;
use resume_checker::error::{Result, ResumeCheckerError};
use resume_checker::input::manager::InputManager;
use resume_checker::output::formatter::{save_report_to_file, ReportGenerator};
use resume_checker::output::report::CheckReport;
use resume_checker::processing::analyzer::AnalysisEngine;
use std::process;
use std::time::Instant;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job_title,
            job_description,
            job_file,
            output,
            save,
            detailed,
            no_color,
        } => {
            info!("Starting resume compatibility analysis");

            // Validate input file and output format up front
            cli::validate_file_extension(&resume, &["pdf", "docx", "doc", "txt"])
                .map_err(|e| ResumeCheckerError::UnsupportedFormat(format!("Resume file: {}", e)))?;

            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(ResumeCheckerError::InvalidRequest)?
                }
                None => config.output.default_format,
            };

            // The job description comes inline or from a plain-text file
            let job_description = match (job_description, job_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)?,
                (None, None) => {
                    return Err(ResumeCheckerError::InvalidRequest(
                        "Provide a job description with --job-description or --job-file"
                            .to_string(),
                    ));
                }
            };

            println!("🚀 Resume compatibility analysis");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Title: {}", job_title);

            // Decode the resume document to plain text
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            info!(
                "Decoded {} characters of resume text",
                resume_text.chars().count()
            );

            let extension = resume
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default();

            // Run the analysis pipeline
            let engine = AnalysisEngine::new(&config)?;
            let started = Instant::now();
            let analysis = engine.analyze(&resume_text, extension, &job_title, &job_description)?;
            let processing_time_ms = started.elapsed().as_millis() as u64;

            let report = CheckReport::from_analysis(
                analysis,
                &resume.to_string_lossy(),
                &job_title,
                processing_time_ms,
            );

            // Render and emit the report
            let use_colors = config.output.color_output && !no_color && save.is_none();
            let detailed = detailed || config.output.detailed;
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to: {}", path.display());
                }
                None => println!("{}", rendered),
            }

            println!(
                "🎯 Analysis complete! Overall compatibility score: {}%",
                report.summary.overall_score
            );
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeCheckerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("✅ Configuration reset to defaults");
            }
            ConfigAction::Path => {
                println!("{}", Config::default_path().display());
            }
        },
    }

    Ok(())
}
