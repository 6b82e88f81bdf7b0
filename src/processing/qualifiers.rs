//! Advisory qualifier signals: language requirements, work location, visa sponsorship, English text
//!
//! Every predicate is pure and only reports what the text says. Whether a signal
//! rejects a posting is decided by the filter settings.

use crate::error::JobMatcherError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid qualifier pattern"))
        .collect()
}

static LANGUAGE_NAMES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(german|deutsch|alemán)\b",
        r"(?i)\b(french|français|francés)\b",
        r"(?i)\b(spanish|español|castilian)\b",
        r"(?i)\b(italian|italiano)\b",
        r"(?i)\b(dutch|nederlands|neerlandés)\b",
        r"(?i)\b(portuguese|português|portugués)\b",
        r"(?i)\b(chinese|mandarin|中文|普通话)\b",
        r"(?i)\b(japanese|日本語|nihongo)\b",
        r"(?i)\b(korean|한국어|hangugeo)\b",
        r"(?i)\b(russian|русский|pусский)\b",
        r"(?i)\b(arabic|عربي|arabe)\b",
        r"(?i)\b(hindi|हिन्दी)\b",
    ])
});

/// A second language is implied whatever else is named nearby
static MULTILINGUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(bilingual|multilingual)\b").expect("Invalid multilingual pattern"));

static LANGUAGE_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\blanguage.{0,20}required?\b",
        r"(?i)\b(native.{0,10}speaker|fluent.{0,10}in)\b",
        r"(?i)\b(must.{0,20}speak|required?.{0,20}language)\b",
    ])
});

static ENGLISH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(english|inglés|anglais)\b").expect("Invalid English pattern"));

/// Bytes inspected on each side of a requirement phrase for an English mention
const ENGLISH_WINDOW: usize = 25;

static REMOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(remote|work.from.home|wfh|distributed.team|anywhere|location.independent)\b",
        r"(?i)\b(fully.remote|100%.remote|remote.first|remote.ok|remote.friendly)\b",
        r"(?i)\b(telecommute|telework|home.based|virtual.team)\b",
    ])
});

static LOCAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(on.?site|office.based|in.person|local.candidates?)\b",
        r"(?i)\b(must.be.local|local.hire|no.remote|office.only)\b",
        r"(?i)\b(commute|daily.presence|physical.presence)\b",
        r"(?i)\b(hybrid.{0,20}office|partial.remote)\b",
    ])
});

static VISA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(visa.sponsorship|sponsor.visa|h1b.sponsorship)\b",
        r"(?i)\b(work.authorization.required|employment.authorization)\b",
        r"(?i)\b(eligible.to.work|authorized.to.work)\b",
        r"(?i)\b(no.visa.sponsorship|cannot.sponsor.visa)\b",
        r"(?i)\b(must.be.authorized|legal.right.to.work)\b",
        r"(?i)\b(us.citizen|permanent.resident|green.card)\b",
    ])
});

static ENGLISH_WORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(the|and|or|but|in|on|at|to|for|of|with|by|from|about|into|through|during|before|after|above|below|up|down|out|off|over|under|again|further|then|once)\b",
        r"\b(we|you|they|our|your|their|this|that|these|those|here|there|where|when|what|why|how)\b",
        r"\b(experience|required|responsibilities|qualifications|skills|years|work|team|company|position|job|role|candidate)\b",
        r"\b(will|would|should|could|must|may|can|need|want|looking|seeking|require)\b",
    ])
});

/// Texts shorter than this are assumed to be English
const MIN_LANGUAGE_SAMPLE_CHARS: usize = 30;
const LANGUAGE_SAMPLE_WORDS: usize = 150;
const ENGLISH_DENSITY_THRESHOLD: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkLocation {
    Remote,
    Local,
}

impl fmt::Display for WorkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkLocation::Remote => f.write_str("remote"),
            WorkLocation::Local => f.write_str("local"),
        }
    }
}

impl FromStr for WorkLocation {
    type Err = JobMatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(WorkLocation::Remote),
            "local" | "onsite" | "on-site" => Ok(WorkLocation::Local),
            other => Err(JobMatcherError::InvalidInput(format!(
                "Unknown work location preference: {}. Supported: remote, local",
                other
            ))),
        }
    }
}

/// True when the text asks for a language other than English
pub fn has_language_requirements(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    if MULTILINGUAL.is_match(text) || LANGUAGE_NAMES.iter().any(|p| p.is_match(text)) {
        return true;
    }

    LANGUAGE_PHRASES.iter().any(|pattern| {
        pattern
            .find_iter(text)
            .any(|m| !ENGLISH.is_match(window(text, m.start(), m.end())))
    })
}

/// True when the text matches the indicator set for `preference`
pub fn check_work_location_preference(text: &str, preference: WorkLocation) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let patterns = match preference {
        WorkLocation::Remote => &*REMOTE_PATTERNS,
        WorkLocation::Local => &*LOCAL_PATTERNS,
    };
    patterns.iter().any(|p| p.is_match(text))
}

/// True when the text mentions visa sponsorship or work authorization
pub fn has_visa_sponsorship_requirement(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    VISA_PATTERNS.iter().any(|p| p.is_match(text))
}

/// Heuristic English detection based on the density of common English words
pub fn is_english_text(text: &str) -> bool {
    if text.chars().count() < MIN_LANGUAGE_SAMPLE_CHARS {
        return true;
    }

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().take(LANGUAGE_SAMPLE_WORDS).collect();
    if words.is_empty() {
        return false;
    }

    let sample = words.join(" ");
    let hits: usize = ENGLISH_WORDS.iter().map(|p| p.find_iter(&sample).count()).sum();

    hits as f64 / words.len() as f64 > ENGLISH_DENSITY_THRESHOLD
}

/// Slice of `text` around `start..end`, widened to char boundaries
fn window(text: &str, start: usize, end: usize) -> &str {
    let mut from = start.saturating_sub(ENGLISH_WINDOW);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + ENGLISH_WINDOW).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

/// All qualifier signals for one posting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierSignals {
    pub language_requirements: bool,
    pub remote: bool,
    pub local: bool,
    pub visa_sponsorship: bool,
    pub english: bool,
}

impl QualifierSignals {
    pub fn detect(text: &str) -> Self {
        Self {
            language_requirements: has_language_requirements(text),
            remote: check_work_location_preference(text, WorkLocation::Remote),
            local: check_work_location_preference(text, WorkLocation::Local),
            visa_sponsorship: has_visa_sponsorship_requirement(text),
            english: is_english_text(text),
        }
    }
}
