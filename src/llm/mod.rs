//! Prompt building and response parsing for an external ATS scorer

pub mod ats;
pub mod prompts;
