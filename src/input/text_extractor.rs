//! Job posting extraction from various file formats

use crate::error::{JobMatcherError, Result};
use crate::processing::job_filter::JobPosting;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait PostingExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<JobPosting>>> + Send;
}

/// First non-empty line is the title, the rest is the description
pub fn posting_from_text(content: &str) -> Option<JobPosting> {
    let mut lines = content.lines().map(str::trim).skip_while(|line| line.is_empty());
    let title = lines.next()?.to_string();
    let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    let description = if description.is_empty() { title.clone() } else { description };
    Some(JobPosting::new(title, description))
}

fn empty_file(path: &Path) -> JobMatcherError {
    JobMatcherError::InvalidInput(format!("No job posting found in: {}", path.display()))
}

pub struct PlainTextExtractor;

impl PostingExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<Vec<JobPosting>> {
        let content = fs::read_to_string(path).await?;
        let posting = posting_from_text(&content).ok_or_else(|| empty_file(path))?;
        Ok(vec![posting])
    }
}

pub struct MarkdownExtractor;

impl PostingExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<Vec<JobPosting>> {
        let markdown_content = fs::read_to_string(path).await?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = self.html_to_text(&html_output);
        let posting = posting_from_text(&text).ok_or_else(|| empty_file(path))?;
        Ok(vec![posting])
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let clean_text = HTML_TAG.replace_all(&text, "");

        clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PostingFile {
    Many(Vec<JobPosting>),
    One(JobPosting),
}

/// A single posting object or an array of them
pub struct JsonExtractor;

impl PostingExtractor for JsonExtractor {
    async fn extract(&self, path: &Path) -> Result<Vec<JobPosting>> {
        let content = fs::read_to_string(path).await?;
        let parsed: PostingFile = serde_json::from_str(&content).map_err(|e| {
            JobMatcherError::InvalidInput(format!("Invalid job posting JSON '{}': {}", path.display(), e))
        })?;

        let postings = match parsed {
            PostingFile::Many(postings) => postings,
            PostingFile::One(posting) => vec![posting],
        };
        if postings.is_empty() {
            return Err(empty_file(path));
        }
        Ok(postings)
    }
}
