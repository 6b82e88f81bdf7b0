//! CLI interface for the job matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Skill matching and scoring for job postings")]
#[command(
    long_about = "Match job postings against your skills, score them by tier, filter them by location, language and visa signals, and find the skills you are missing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Accept or reject postings using the configured filter settings
    Evaluate {
        /// Job posting files (TXT, MD, JSON)
        #[arg(short, long, required = true, num_args = 1..)]
        job: Vec<PathBuf>,

        /// Also run gap analysis against your configured skills
        #[arg(short, long)]
        gaps: bool,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Check which skills a posting mentions
    Match {
        /// Job posting file (TXT, MD, JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Comma-separated skills to look for
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Enable fuzzy matching
        #[arg(long)]
        fuzzy: bool,

        /// Minimum similarity for fuzzy matches
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Require whole-word matches
        #[arg(long)]
        exact: bool,
    },

    /// Score a posting against your configured skill tiers
    Score {
        /// Job posting file (TXT, MD, JSON)
        #[arg(short, long)]
        job: PathBuf,
    },

    /// List the skills a posting asks for that you do not have
    Gaps {
        /// Job posting file (TXT, MD, JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Comma-separated skills you already have (defaults to your configured tiers)
        #[arg(short, long, value_delimiter = ',')]
        known: Vec<String>,

        /// Include soft skills
        #[arg(long)]
        soft_skills: bool,

        /// Maximum number of missing skills to report
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print the prompt to send an external ATS scorer for a resume and a posting
    AtsPrompt {
        /// Job posting file (TXT, MD, JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Resume as plain text
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_skills() {
        let cli = Cli::parse_from(["job-matcher", "match", "--job", "a.txt", "--skills", "rust,go", "--fuzzy"]);
        match cli.command {
            Commands::Match { skills, fuzzy, .. } => {
                assert_eq!(skills, vec!["rust", "go"]);
                assert!(fuzzy);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_parse_evaluate_many_files() {
        let cli = Cli::parse_from(["job-matcher", "-v", "evaluate", "-j", "a.txt", "b.json", "--gaps"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Evaluate { job, gaps, .. } => {
                assert_eq!(job.len(), 2);
                assert!(gaps);
            }
            _ => panic!("expected evaluate command"),
        }
    }

    #[test]
    fn test_parse_ats_prompt() {
        let cli = Cli::parse_from(["job-matcher", "ats-prompt", "-j", "job.md", "-r", "resume.txt"]);
        match cli.command {
            Commands::AtsPrompt { job, resume } => {
                assert_eq!(job, PathBuf::from("job.md"));
                assert_eq!(resume, PathBuf::from("resume.txt"));
            }
            _ => panic!("expected ats-prompt command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["txt", "md", "json"];
        assert!(validate_file_extension(Path::new("job.TXT"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("job"), &allowed).is_err());
    }
}
