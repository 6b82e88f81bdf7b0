//! Parsing of ATS scorer responses

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d+)").expect("Invalid score pattern"));
static MATCHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Matches:[ \t]*([^\n]+)").expect("Invalid matches pattern"));
static MISSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Missing:[ \t]*([^\n]+)").expect("Invalid missing pattern"));
static SUGGESTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Suggestions:[ \t]*([^\n]+)").expect("Invalid suggestions pattern"));

/// What an ATS scorer said about a resume and a posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsAssessment {
    /// 0-100, 0 when the response carried no score
    pub score: u8,
    pub matches: String,
    pub missing: String,
    pub suggestions: String,
}

/// Pull the `Score:`, `Matches:`, `Missing:` and `Suggestions:` lines out of a response
pub fn parse_ats_response(response: &str) -> AtsAssessment {
    let score = SCORE.captures(response).map(|c| clamp_score(&c[1])).unwrap_or(0);

    let line = |pattern: &Regex| {
        pattern
            .captures(response)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default()
    };

    AtsAssessment {
        score,
        matches: line(&MATCHES),
        missing: line(&MISSING),
        suggestions: line(&SUGGESTIONS),
    }
}

/// Saturates at 100 however long the digit run is
fn clamp_score(digits: &str) -> u8 {
    let digits = digits.trim_start_matches('0');
    if digits.len() > 3 {
        return 100;
    }
    digits.parse::<u16>().map(|s| s.min(100) as u8).unwrap_or(0)
}
