//! Report structures collecting job evaluations and skill gap results

use crate::processing::gap_analyzer::EnrichedGapReport;
use crate::processing::job_filter::{JobEvaluation, JobPosting};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything one run of the matcher produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Totals across every evaluated posting
    pub summary: EvaluationSummary,

    /// One entry per posting, in load order
    pub postings: Vec<PostingReport>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingReport {
    pub title: String,
    pub company: String,
    pub evaluation: JobEvaluation,

    /// Present when gap analysis was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaps: Option<EnrichedGapReport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,

    /// Rejections keyed by the reason's display text
    pub rejection_counts: BTreeMap<String, usize>,

    /// Mean tiered skill score over all postings
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,

    /// Files the postings were loaded from
    pub source_files: Vec<String>,
}

impl PostingReport {
    pub fn new(posting: &JobPosting, evaluation: JobEvaluation, gaps: Option<EnrichedGapReport>) -> Self {
        Self {
            title: posting.title.clone(),
            company: posting.company.clone(),
            evaluation,
            gaps,
        }
    }

    /// "Title at Company", or just the title when the company is unknown
    pub fn display_name(&self) -> String {
        if self.company.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} at {}", self.title, self.company)
        }
    }
}

impl EvaluationReport {
    pub fn new(postings: Vec<PostingReport>, source_files: Vec<String>) -> Self {
        let summary = Self::create_summary(&postings);

        Self {
            summary,
            postings,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                source_files,
            },
        }
    }

    fn create_summary(postings: &[PostingReport]) -> EvaluationSummary {
        let mut summary = EvaluationSummary {
            total: postings.len(),
            ..Default::default()
        };

        let mut score_sum = 0.0;
        for posting in postings {
            score_sum += posting.evaluation.score.total_score;
            match &posting.evaluation.reason {
                None => summary.accepted += 1,
                Some(reason) => {
                    summary.rejected += 1;
                    *summary.rejection_counts.entry(reason.to_string()).or_insert(0) += 1;
                }
            }
        }

        if !postings.is_empty() {
            summary.average_score = score_sum / postings.len() as f64;
        }
        summary
    }

    pub fn accepted(&self) -> impl Iterator<Item = &PostingReport> {
        self.postings.iter().filter(|p| p.evaluation.accepted)
    }
}
