//! Job matcher library: skill matching, tiered scoring, qualifier filters and gap analysis for job postings

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{JobMatcherError, Result};
pub use processing::engine::SkillEngine;
pub use processing::text_processor::normalize;
