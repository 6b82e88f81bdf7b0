//! Input manager for loading job postings from different file types

use crate::error::{JobMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{JsonExtractor, MarkdownExtractor, PlainTextExtractor, PostingExtractor};
use crate::processing::job_filter::JobPosting;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, Vec<JobPosting>>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load every posting a file contains
    pub async fn load_postings(&mut self, path: &Path) -> Result<Vec<JobPosting>> {
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                info!("Using cached postings for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(JobMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let postings = match self.detect_file_type(path)? {
            FileType::Text => {
                info!("Reading plain text posting: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown posting: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Json => {
                info!("Parsing JSON postings: {}", path.display());
                JsonExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(JobMatcherError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), postings.clone());
        }

        Ok(postings)
    }

    /// Load a file that must hold exactly one posting
    pub async fn load_posting(&mut self, path: &Path) -> Result<JobPosting> {
        let mut postings = self.load_postings(path).await?;
        if postings.len() != 1 {
            return Err(JobMatcherError::InvalidInput(format!(
                "Expected one job posting in {}, found {}",
                path.display(),
                postings.len()
            )));
        }
        Ok(postings.remove(0))
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| JobMatcherError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
