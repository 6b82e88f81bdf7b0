//! Skill matching, scoring and analysis

pub mod engine;
pub mod gap_analyzer;
pub mod job_filter;
pub mod keyword_matcher;
pub mod qualifiers;
pub mod skill_database;
pub mod skill_metadata;
pub mod skill_scorer;
pub mod text_processor;
