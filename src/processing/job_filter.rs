//! Accept/reject decision for a job posting

use crate::llm::ats::parse_ats_response;
use crate::processing::keyword_matcher::{KeywordMatcher, MatchOptions};
use crate::processing::qualifiers::QualifierSignals;
use crate::processing::skill_scorer::{calculate_skill_score, ScoreResult, SkillTiers, TierWeights};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a posting is applied to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyType {
    EasyApply,
    ExternalApply,
    #[default]
    Unknown,
}

impl fmt::Display for ApplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyType::EasyApply => f.write_str("Easy Apply"),
            ApplyType::ExternalApply => f.write_str("External Apply"),
            ApplyType::Unknown => f.write_str("Unknown"),
        }
    }
}

/// A scraped job posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub applicants: Option<u32>,
    pub apply_type: ApplyType,
    /// Score from an external ATS assessment, if one was obtained
    pub ats_score: Option<u8>,
    /// Raw reply from the ATS scorer; its `Score:` line stands in for a missing `ats_score`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats_response: Option<String>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn effective_ats_score(&self) -> Option<u8> {
        self.ats_score
            .or_else(|| self.ats_response.as_deref().map(|response| parse_ats_response(response).score))
    }

    /// Title and description, the text every check runs on
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// The user's filtering criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub keywords: Vec<String>,
    pub skill_levels: SkillTiers,
    pub skill_weights: TierWeights,
    pub min_skill_score: f64,
    pub min_primary_skills: usize,
    pub skip_language_requirements: bool,
    pub remote_only: bool,
    pub local_hire_only: bool,
    pub skip_visa_sponsorship: bool,
    pub english_only: bool,
    pub max_applicants: Option<u32>,
    pub min_applicants: u32,
    pub easy_apply_only: bool,
    pub external_apply_only: bool,
    pub use_ats: bool,
    pub min_ats_score: u8,
    pub custom_aliases: BTreeMap<String, Vec<String>>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            skill_levels: SkillTiers::default(),
            skill_weights: TierWeights::default(),
            min_skill_score: 0.0,
            min_primary_skills: 0,
            skip_language_requirements: false,
            remote_only: false,
            local_hire_only: false,
            skip_visa_sponsorship: false,
            english_only: true,
            max_applicants: Some(100),
            min_applicants: 0,
            easy_apply_only: false,
            external_apply_only: false,
            use_ats: false,
            min_ats_score: 70,
            custom_aliases: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    TooManyApplicants { count: u32, max: u32 },
    TooFewApplicants { count: u32, min: u32 },
    NotEasyApply,
    NotExternalApply,
    NoKeywordMatches,
    NotEnglish,
    SkillScoreTooLow { score: f64, min: f64 },
    TooFewPrimarySkills { count: usize, min: usize },
    LanguageRequirement,
    NotRemote,
    NotLocal,
    VisaSponsorship,
    AtsScoreTooLow { score: u8, min: u8 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooManyApplicants { count, max } => write!(f, "Too many applicants ({} > {})", count, max),
            RejectReason::TooFewApplicants { count, min } => write!(f, "Too few applicants ({} < {})", count, min),
            RejectReason::NotEasyApply => f.write_str("Not Easy Apply"),
            RejectReason::NotExternalApply => f.write_str("Not External Apply"),
            RejectReason::NoKeywordMatches => f.write_str("No keyword matches"),
            RejectReason::NotEnglish => f.write_str("Not in English"),
            RejectReason::SkillScoreTooLow { score, min } => write!(f, "Skill score too low ({} < {})", score, min),
            RejectReason::TooFewPrimarySkills { count, min } => {
                write!(f, "Too few primary skills ({} < {})", count, min)
            }
            RejectReason::LanguageRequirement => f.write_str("Requires a language other than English"),
            RejectReason::NotRemote => f.write_str("Not a remote position"),
            RejectReason::NotLocal => f.write_str("Not a local hire position"),
            RejectReason::VisaSponsorship => f.write_str("Mentions visa sponsorship or work authorization"),
            RejectReason::AtsScoreTooLow { score, min } => write!(f, "ATS Score too low ({} < {})", score, min),
        }
    }
}

/// Everything learned about a posting plus the decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEvaluation {
    pub accepted: bool,
    pub reason: Option<RejectReason>,
    pub score: ScoreResult,
    pub matched_keywords: Vec<String>,
    pub qualifiers: QualifierSignals,
}

/// Run every gate in order; the first failing gate is the reject reason
pub fn evaluate_job(matcher: &KeywordMatcher, posting: &JobPosting, settings: &FilterSettings) -> JobEvaluation {
    let text = posting.search_text();
    let options = MatchOptions::default().with_custom_aliases(settings.custom_aliases.clone());

    let matched_keywords = if settings.keywords.is_empty() {
        Vec::new()
    } else {
        matcher.match_keywords(&text, &settings.keywords, &options)
    };
    let score = calculate_skill_score(
        matcher,
        &text,
        &settings.skill_levels,
        &settings.skill_weights,
        &settings.custom_aliases,
    );
    let qualifiers = QualifierSignals::detect(&text);

    let reason = first_rejection(posting, settings, &matched_keywords, &score, &qualifiers);
    debug!(
        "Evaluated '{}': {}",
        posting.title,
        reason.as_ref().map_or_else(|| "accepted".to_string(), |r| r.to_string())
    );

    JobEvaluation {
        accepted: reason.is_none(),
        reason,
        score,
        matched_keywords,
        qualifiers,
    }
}

fn first_rejection(
    posting: &JobPosting,
    settings: &FilterSettings,
    matched_keywords: &[String],
    score: &ScoreResult,
    qualifiers: &QualifierSignals,
) -> Option<RejectReason> {
    if let Some(count) = posting.applicants {
        if let Some(max) = settings.max_applicants {
            if count > max {
                return Some(RejectReason::TooManyApplicants { count, max });
            }
        }
        if count < settings.min_applicants {
            return Some(RejectReason::TooFewApplicants { count, min: settings.min_applicants });
        }
    }

    if settings.easy_apply_only && posting.apply_type != ApplyType::EasyApply {
        return Some(RejectReason::NotEasyApply);
    }
    if settings.external_apply_only && posting.apply_type != ApplyType::ExternalApply {
        return Some(RejectReason::NotExternalApply);
    }
    if !settings.keywords.is_empty() && matched_keywords.is_empty() {
        return Some(RejectReason::NoKeywordMatches);
    }
    if settings.english_only && !qualifiers.english {
        return Some(RejectReason::NotEnglish);
    }

    if score.total_score < settings.min_skill_score {
        return Some(RejectReason::SkillScoreTooLow {
            score: score.total_score,
            min: settings.min_skill_score,
        });
    }
    if score.primary_skill_count < settings.min_primary_skills {
        return Some(RejectReason::TooFewPrimarySkills {
            count: score.primary_skill_count,
            min: settings.min_primary_skills,
        });
    }

    if settings.skip_language_requirements && qualifiers.language_requirements {
        return Some(RejectReason::LanguageRequirement);
    }
    if settings.remote_only && !qualifiers.remote {
        return Some(RejectReason::NotRemote);
    }
    if settings.local_hire_only && !qualifiers.local {
        return Some(RejectReason::NotLocal);
    }
    if settings.skip_visa_sponsorship && qualifiers.visa_sponsorship {
        return Some(RejectReason::VisaSponsorship);
    }

    if settings.use_ats {
        if let Some(ats) = posting.effective_ats_score() {
            if ats < settings.min_ats_score {
                return Some(RejectReason::AtsScoreTooLow { score: ats, min: settings.min_ats_score });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "We are looking for a senior engineer with strong JavaScript and React experience. \
                               This is a fully remote position and the team works across time zones.";

    fn evaluate(posting: &JobPosting, settings: &FilterSettings) -> JobEvaluation {
        evaluate_job(&KeywordMatcher::new().unwrap(), posting, settings)
    }

    fn posting() -> JobPosting {
        JobPosting {
            applicants: Some(40),
            apply_type: ApplyType::EasyApply,
            ..JobPosting::new("Frontend Engineer", DESCRIPTION)
        }
    }

    fn settings() -> FilterSettings {
        FilterSettings {
            keywords: vec!["React".to_string(), "Vue".to_string()],
            skill_levels: SkillTiers {
                primary: vec!["JavaScript".to_string(), "React".to_string()],
                secondary: vec!["Docker".to_string()],
                tertiary: Vec::new(),
            },
            min_skill_score: 15.0,
            min_primary_skills: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_matching_posting() {
        let evaluation = evaluate(&posting(), &settings());
        assert!(evaluation.accepted, "{:?}", evaluation.reason);
        assert_eq!(evaluation.matched_keywords, vec!["React"]);
        assert_eq!(evaluation.score.total_score, 20.0);
        assert!(evaluation.qualifiers.remote);
    }

    #[test]
    fn test_applicant_gates_come_first() {
        let busy = JobPosting { applicants: Some(250), ..posting() };
        let mut strict = settings();
        strict.min_skill_score = 100.0;

        let evaluation = evaluate(&busy, &strict);
        assert_eq!(evaluation.reason, Some(RejectReason::TooManyApplicants { count: 250, max: 100 }));
        assert_eq!(evaluation.reason.unwrap().to_string(), "Too many applicants (250 > 100)");

        let unknown = JobPosting { applicants: None, ..posting() };
        assert!(evaluate(&unknown, &settings()).accepted);
    }

    #[test]
    fn test_apply_type_gates() {
        let mut external = settings();
        external.external_apply_only = true;
        assert_eq!(evaluate(&posting(), &external).reason, Some(RejectReason::NotExternalApply));
    }

    #[test]
    fn test_keyword_gate() {
        let mut settings = settings();
        settings.keywords = vec!["Elixir".to_string()];
        assert_eq!(evaluate(&posting(), &settings).reason, Some(RejectReason::NoKeywordMatches));
    }

    #[test]
    fn test_score_and_primary_gates_are_independent() {
        let mut high_score = settings();
        high_score.min_skill_score = 25.0;
        let reason = evaluate(&posting(), &high_score).reason;
        assert_eq!(reason, Some(RejectReason::SkillScoreTooLow { score: 20.0, min: 25.0 }));

        let mut many_primary = settings();
        many_primary.skill_levels.primary.push("Node.js".to_string());
        many_primary.min_primary_skills = 3;
        let reason = evaluate(&posting(), &many_primary).reason;
        assert_eq!(reason, Some(RejectReason::TooFewPrimarySkills { count: 2, min: 3 }));
    }

    #[test]
    fn test_qualifier_toggles() {
        let mut local = settings();
        local.local_hire_only = true;
        assert_eq!(evaluate(&posting(), &local).reason, Some(RejectReason::NotLocal));

        let visa_posting = JobPosting::new(
            "Frontend Engineer",
            format!("{} Candidates must be authorized to work in the US.", DESCRIPTION),
        );
        let mut visa = settings();
        visa.skip_visa_sponsorship = true;
        assert_eq!(evaluate(&visa_posting, &visa).reason, Some(RejectReason::VisaSponsorship));
        // The signal alone never rejects
        assert!(evaluate(&visa_posting, &settings()).accepted);
    }

    #[test]
    fn test_ats_gate() {
        let mut ats = settings();
        ats.use_ats = true;

        let low = JobPosting { ats_score: Some(55), ..posting() };
        let reason = evaluate(&low, &ats).reason.unwrap();
        assert_eq!(reason.to_string(), "ATS Score too low (55 < 70)");

        // No score obtained means the gate does not apply
        assert!(evaluate(&posting(), &ats).accepted);
    }

    #[test]
    fn test_ats_gate_reads_raw_response() {
        let mut ats = settings();
        ats.use_ats = true;

        let low = JobPosting { ats_response: Some("Score: 40/100\nMissing: Vue".to_string()), ..posting() };
        assert_eq!(low.effective_ats_score(), Some(40));
        assert_eq!(
            evaluate(&low, &ats).reason,
            Some(RejectReason::AtsScoreTooLow { score: 40, min: 70 })
        );

        // An explicit score wins over the response
        let explicit = JobPosting { ats_score: Some(90), ..low };
        assert!(evaluate(&explicit, &ats).accepted);
    }

    #[test]
    fn test_non_english_posting() {
        let spanish = JobPosting::new(
            "Desarrollador Frontend",
            "Buscamos un desarrollador con experiencia en React y JavaScript para nuestro equipo remoto.",
        );
        let evaluation = evaluate(&spanish, &settings());
        assert_eq!(evaluation.reason, Some(RejectReason::NotEnglish));
        assert_eq!(evaluation.reason.unwrap().to_string(), "Not in English");
    }
}
