//! Output formatters for console, JSON and Markdown reports

use crate::config::OutputFormat;
use crate::error::{JobMatcherError, Result};
use crate::output::report::*;
use crate::processing::gap_analyzer::EnrichedGapReport;
use crate::processing::skill_scorer::Tier;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting evaluation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
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
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_status_badge(&self, accepted: bool) -> String {
        let (badge, color) = if accepted {
            ("ACCEPTED", Color::Green)
        } else {
            ("REJECTED", Color::Red)
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_coverage_badge(&self, coverage: u32) -> String {
        let (badge, color) = match coverage {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::BrightGreen),
            40..=59 => ("PARTIAL", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_gaps(&self, gaps: &EnrichedGapReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Skill Gaps", 3));
        output.push_str(&format!(
            "Coverage: {}% {} ({} found, {} missing)\n",
            gaps.coverage_percentage,
            self.format_coverage_badge(gaps.coverage_percentage),
            gaps.total_found,
            gaps.total_missing
        ));

        let shown = if self.detailed { gaps.missing_skills.len() } else { 5 };
        for skill in gaps.missing_skills.iter().take(shown) {
            let level = skill
                .skill
                .level
                .map(|level| format!(", {}", level))
                .unwrap_or_default();
            output.push_str(&format!(
                "  • {} {} ROI {}{}\n",
                self.colorize(&skill.skill.skill, Color::Yellow),
                self.colorize(&format!("({})", skill.skill.category), Color::BrightBlack),
                skill.roi_score,
                level
            ));
            if self.detailed {
                for context in skill.skill.contexts.iter().take(2) {
                    output.push_str(&format!("      \"{}\"\n", context));
                }
            }
        }

        let plan = &gaps.learning_plan;
        if !plan.immediate.is_empty() {
            output.push_str(&format!("Learn first: {}\n", self.colorize(&plan.immediate.join(", "), Color::Cyan)));
        }
        if self.detailed {
            if !plan.short_term.is_empty() {
                output.push_str(&format!("Short term: {}\n", plan.short_term.join(", ")));
            }
            if !plan.long_term.is_empty() {
                output.push_str(&format!("Long term: {}\n", plan.long_term.join(", ")));
            }
            for win in &gaps.strategic_insights.quick_wins {
                output.push_str(&format!(
                    "💡 Quick win: {} ({}, {})\n",
                    win.skill, win.time_investment, win.expected_roi
                ));
            }
        }
        if gaps.time_estimate.total_weeks > 0 {
            output.push_str(&format!(
                "Estimated time: {} weeks focused, {} weeks in parallel\n",
                gaps.time_estimate.focused_learning, gaps.time_estimate.parallel_learning
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 JOB MATCH REPORT", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Postings: {} | Accepted: {} | Rejected: {}\n",
            report.summary.total,
            self.colorize(&report.summary.accepted.to_string(), Color::Green),
            self.colorize(&report.summary.rejected.to_string(), Color::Red)
        ));
        output.push_str(&format!("Average skill score: {:.1}\n", report.summary.average_score));
        for (reason, count) in &report.summary.rejection_counts {
            output.push_str(&format!("  • {}: {}\n", reason, count));
        }

        for (i, posting) in report.postings.iter().enumerate() {
            let evaluation = &posting.evaluation;
            output.push_str(&self.format_header(&format!("{}. {}", i + 1, posting.display_name()), 2));
            output.push_str(&format!(
                "Status: {} Score: {}\n",
                self.format_status_badge(evaluation.accepted),
                evaluation.score.total_score
            ));
            if let Some(reason) = &evaluation.reason {
                output.push_str(&format!("Reason: {}\n", self.colorize(&reason.to_string(), Color::Red)));
            }
            if !evaluation.matched_keywords.is_empty() {
                output.push_str(&format!("Keywords: {}\n", evaluation.matched_keywords.join(", ")));
            }

            for tier in Tier::ALL {
                let matched = evaluation.score.matched_skills.get(tier);
                if !matched.is_empty() {
                    output.push_str(&format!(
                        "  {} {}\n",
                        self.colorize(&format!("{}:", tier.label()), Color::Cyan),
                        matched.join(", ")
                    ));
                }
            }

            if self.detailed {
                let q = &evaluation.qualifiers;
                output.push_str(&format!(
                    "Signals: english={} remote={} local={} language_req={} visa={}\n",
                    q.english, q.remote, q.local, q.language_requirements, q.visa_sponsorship
                ));
            }

            if let Some(gaps) = &posting.gaps {
                output.push_str(&self.format_gaps(gaps));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Job Matcher v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn status_badge(accepted: bool) -> &'static str {
        if accepted {
            "🟢 Accepted"
        } else {
            "🔴 Rejected"
        }
    }

    fn format_markdown_gaps(gaps: &EnrichedGapReport) -> String {
        let mut output = format!(
            "#### Skill Gaps\n\n**Coverage:** {}% ({} found, {} missing)\n\n",
            gaps.coverage_percentage, gaps.total_found, gaps.total_missing
        );

        if !gaps.missing_skills.is_empty() {
            output.push_str("| Skill | Category | Priority | ROI | Weeks |\n");
            output.push_str("|-------|----------|----------|-----|-------|\n");
            for skill in &gaps.missing_skills {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    skill.skill.skill,
                    skill.skill.category,
                    skill.skill.priority,
                    skill.roi_score,
                    skill.profile.learning_weeks
                ));
            }
            output.push('\n');
        }

        for rec in &gaps.recommendations {
            output.push_str(&format!("- **{}:** {}\n", rec.category, rec.recommendation));
        }
        if !gaps.recommendations.is_empty() {
            output.push('\n');
        }

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Job Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            if !report.metadata.source_files.is_empty() {
                let files: Vec<String> = report
                    .metadata
                    .source_files
                    .iter()
                    .map(|file| {
                        Path::new(file)
                            .file_name()
                            .map(|name| name.to_string_lossy().to_string())
                            .unwrap_or_else(|| file.clone())
                    })
                    .collect();
                output.push_str(&format!("**Sources:** `{}`\n", files.join("`, `")));
            }
            output.push('\n');
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Postings | Accepted | Rejected | Average Score |\n");
        output.push_str("|----------|----------|----------|---------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {:.1} |\n\n",
            report.summary.total, report.summary.accepted, report.summary.rejected, report.summary.average_score
        ));

        if !report.summary.rejection_counts.is_empty() {
            output.push_str("### Rejections\n\n");
            for (reason, count) in &report.summary.rejection_counts {
                output.push_str(&format!("- {}: {}\n", reason, count));
            }
            output.push('\n');
        }

        output.push_str("## Postings\n\n");
        for (i, posting) in report.postings.iter().enumerate() {
            let evaluation = &posting.evaluation;
            output.push_str(&format!("### {}. {}\n\n", i + 1, posting.display_name()));
            output.push_str(&format!(
                "**Status:** {} | **Score:** {}\n\n",
                Self::status_badge(evaluation.accepted),
                evaluation.score.total_score
            ));
            if let Some(reason) = &evaluation.reason {
                output.push_str(&format!("**Reason:** {}\n\n", reason));
            }
            if !evaluation.score.breakdown.is_empty() {
                output.push_str(&format!("`{}`\n\n", evaluation.score.breakdown));
            }
            if let Some(gaps) = &posting.gaps {
                output.push_str(&Self::format_markdown_gaps(gaps));
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by Job Matcher v{}*\n", report.metadata.matcher_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
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

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &EvaluationReport, format: &OutputFormat) -> Result<String> {
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

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content).map_err(|e| {
        JobMatcherError::OutputFormatting(format!("Failed to write report to {}: {}", file_path.display(), e))
    })
}

pub fn suggest_filename(format: &OutputFormat, job_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(job_name).file_stem().unwrap_or_default().to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_matches{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_matches{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_matches{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::gap_analyzer::{GapAnalyzer, GapOptions};
    use crate::processing::job_filter::{evaluate_job, FilterSettings, JobPosting};
    use crate::processing::keyword_matcher::KeywordMatcher;
    use crate::processing::skill_scorer::SkillTiers;

    fn sample_report() -> EvaluationReport {
        let matcher = KeywordMatcher::new().unwrap();
        let gaps = GapAnalyzer::new().unwrap();
        let settings = FilterSettings {
            skill_levels: SkillTiers {
                primary: vec!["rust".to_string()],
                ..Default::default()
            },
            english_only: false,
            ..Default::default()
        };

        let mut posting = JobPosting::new(
            "Rust Engineer",
            "We need Rust and Kubernetes experience. Docker is required.",
        );
        posting.company = "Ferris Inc".to_string();

        let evaluation = evaluate_job(&matcher, &posting, &settings);
        let gap_report = gaps.missing_skills_with_details(&posting.search_text(), &["rust"], &GapOptions::default());

        EvaluationReport::new(
            vec![PostingReport::new(&posting, evaluation, Some(gap_report))],
            vec!["jobs/rust.md".to_string()],
        )
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(output.contains("█ 📊 JOB MATCH REPORT"));
        assert!(output.contains("1. Rust Engineer at Ferris Inc"));
        assert!(output.contains("[ACCEPTED]"));
        assert!(output.contains("Primary: rust"));
        assert!(output.contains("kubernetes"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_output_parses() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["summary"]["accepted"], 1);
        assert_eq!(value["postings"][0]["company"], "Ferris Inc");
        assert!(value["postings"][0]["gaps"]["missing_skills"].is_array());
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# 📊 Job Match Report"));
        assert!(output.contains("**Sources:** `rust.md`"));
        assert!(output.contains("| Skill | Category | Priority | ROI | Weeks |"));
        assert!(output.contains("🟢 Accepted"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = sample_report();

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));

        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(!markdown.contains("**Generated:**"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "jobs/backend.txt", false), "backend_matches.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "backend", false), "backend_matches.md");
        assert!(suggest_filename(&OutputFormat::Console, "a.md", true).starts_with("a_matches_"));
    }

    #[test]
    fn test_save_report_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
