//! Job matcher: skill matching and scoring for job postings

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputFormat};
use job_matcher::input::InputManager;
use job_matcher::llm::prompts::{PromptParams, PromptTemplates};
use job_matcher::output::{save_report_to_file, EvaluationReport, PostingReport, ReportGenerator};
use job_matcher::processing::gap_analyzer::GapOptions;
use job_matcher::processing::keyword_matcher::MatchType;
use job_matcher::{JobMatcherError, Result, SkillEngine};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "json"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Evaluate {
            job,
            gaps,
            detailed,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let engine = SkillEngine::new()?;
            let mut input_manager = InputManager::new();
            let known = config.known_skills();

            let mut postings = Vec::new();
            for path in &job {
                validate_job_file(path)?;
                for posting in input_manager.load_postings(path).await? {
                    let evaluation = engine.evaluate_job(&posting, &config.filter);
                    let gap_report = gaps.then(|| {
                        engine.missing_skills_with_details(&posting.search_text(), &known, &config.gaps)
                    });
                    postings.push(PostingReport::new(&posting, evaluation, gap_report));
                }
            }
            info!("Evaluated {} postings from {} files", postings.len(), job.len());

            let sources = job.iter().map(|p| p.display().to_string()).collect();
            let report = EvaluationReport::new(postings, sources);
            emit_report(&report, &config, format, detailed, save.as_deref())
        }

        Commands::Match {
            job,
            skills,
            fuzzy,
            min_similarity,
            exact,
        } => {
            validate_job_file(&job)?;
            let engine = SkillEngine::new()?;
            let posting = InputManager::new().load_posting(&job).await?;

            let mut options = config.matching.clone();
            options.exact_match |= exact;
            if fuzzy {
                let threshold = min_similarity.unwrap_or(options.min_similarity);
                options = options.with_fuzzy(threshold);
            }

            let results = engine.match_keywords_detailed(&posting.search_text(), &skills, &options);
            println!("🔍 Skills in '{}':", posting.title);
            for result in &results {
                let marker = if result.matched { "✅" } else { "❌" };
                let detail = match result.match_type {
                    MatchType::Fuzzy => format!(" (fuzzy {:.2} via '{}')", result.similarity, result.matched_alias),
                    MatchType::None => String::new(),
                    _ => format!(" (via '{}')", result.matched_alias),
                };
                println!("  {} {}{}", marker, result.skill, detail);
            }
            let matched = results.iter().filter(|r| r.matched).count();
            println!("\n{}/{} skills matched", matched, results.len());
            Ok(())
        }

        Commands::Score { job } => {
            validate_job_file(&job)?;
            let engine = SkillEngine::new()?;
            let mut input_manager = InputManager::new();

            for posting in input_manager.load_postings(&job).await? {
                let result = engine.calculate_skill_score_with_aliases(
                    &posting.search_text(),
                    &config.filter.skill_levels,
                    &config.filter.skill_weights,
                    &config.filter.custom_aliases,
                );
                println!("📊 {}: {} points ({} primary)", posting.title, result.total_score, result.primary_skill_count);
                println!("   {}", result.breakdown);
            }
            Ok(())
        }

        Commands::Gaps {
            job,
            known,
            soft_skills,
            max_results,
            output,
            save,
        } => {
            validate_job_file(&job)?;
            let format = resolve_format(output.as_deref(), &config)?;
            let engine = SkillEngine::new()?;
            let posting = InputManager::new().load_posting(&job).await?;

            let known = if known.is_empty() { config.known_skills() } else { known };
            let options = GapOptions {
                include_soft_skills: soft_skills || config.gaps.include_soft_skills,
                max_results: max_results.unwrap_or(config.gaps.max_results),
                ..config.gaps.clone()
            };

            let evaluation = engine.evaluate_job(&posting, &config.filter);
            let gap_report = engine.missing_skills_with_details(&posting.search_text(), &known, &options);
            let report = EvaluationReport::new(
                vec![PostingReport::new(&posting, evaluation, Some(gap_report))],
                vec![job.display().to_string()],
            );
            emit_report(&report, &config, format, true, save.as_deref())
        }

        Commands::AtsPrompt { job, resume } => {
            validate_job_file(&job)?;
            let posting = InputManager::new().load_posting(&job).await?;
            let resume_content = tokio::fs::read_to_string(&resume).await?;
            if resume_content.trim().is_empty() {
                return Err(JobMatcherError::InvalidInput(format!("Resume is empty: {}", resume.display())));
            }

            let prompt = PromptTemplates::default().render_ats_analysis(&PromptParams {
                resume_content,
                job_content: posting.search_text(),
            });
            println!("{}\n\n{}", prompt.system, prompt.user);
            println!("\nSave the scorer's reply as `ats_response` in a JSON posting to apply the ATS gate.");
            Ok(())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    println!("⚙️  Configuration ({})\n", path.display());
                    println!("{}", config.to_toml()?);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset to defaults: {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
            Ok(())
        }
    }
}

fn validate_job_file(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, JOB_EXTENSIONS)
        .map_err(|e| JobMatcherError::InvalidInput(format!("Job posting file {}: {}", path.display(), e)))
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(JobMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit_report(
    report: &EvaluationReport,
    config: &Config,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
        config.output.pretty_json,
        config.output.include_metadata,
    );
    let content = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
