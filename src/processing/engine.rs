//! Skill engine: the compiled tables behind every matching and scoring call

use crate::error::Result;
use crate::processing::gap_analyzer::{
    EnrichedGapReport, GapAnalyzer, GapOptions, GapReport, MissingSkill, SkillGapAnalysis,
};
use crate::processing::job_filter::{self, FilterSettings, JobEvaluation, JobPosting};
use crate::processing::keyword_matcher::{KeywordMatcher, MatchOptions, MatchResult};
use crate::processing::skill_scorer::{self, ScoreResult, SkillTiers, TierWeights};
use std::collections::BTreeMap;

/// Read-only after construction; share it freely across threads
#[derive(Debug)]
pub struct SkillEngine {
    matcher: KeywordMatcher,
    gaps: GapAnalyzer,
}

impl SkillEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new()?,
            gaps: GapAnalyzer::new()?,
        })
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn match_keywords<S: AsRef<str>>(&self, text: &str, skills: &[S], options: &MatchOptions) -> Vec<String> {
        self.matcher.match_keywords(text, skills, options)
    }

    pub fn match_keywords_detailed<S: AsRef<str>>(
        &self,
        text: &str,
        skills: &[S],
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        self.matcher.match_keywords_detailed(text, skills, options)
    }

    pub fn calculate_skill_score(&self, text: &str, tiers: &SkillTiers, weights: &TierWeights) -> ScoreResult {
        skill_scorer::calculate_skill_score(&self.matcher, text, tiers, weights, &BTreeMap::new())
    }

    pub fn calculate_skill_score_with_aliases(
        &self,
        text: &str,
        tiers: &SkillTiers,
        weights: &TierWeights,
        custom_aliases: &BTreeMap<String, Vec<String>>,
    ) -> ScoreResult {
        skill_scorer::calculate_skill_score(&self.matcher, text, tiers, weights, custom_aliases)
    }

    pub fn find_missing_skills<S: AsRef<str>>(&self, job_text: &str, known: &[S], options: &GapOptions) -> Vec<MissingSkill> {
        self.gaps.find_missing_skills(job_text, known, options)
    }

    pub fn missing_skills_report<S: AsRef<str>>(&self, job_text: &str, known: &[S], options: &GapOptions) -> GapReport {
        self.gaps.missing_skills_report(job_text, known, options)
    }

    pub fn missing_skills_with_details<S: AsRef<str>>(
        &self,
        job_text: &str,
        known: &[S],
        options: &GapOptions,
    ) -> EnrichedGapReport {
        self.gaps.missing_skills_with_details(job_text, known, options)
    }

    pub fn analyze_skill_gaps<S: AsRef<str>>(&self, user_skills: &[S], missing: &[MissingSkill]) -> SkillGapAnalysis {
        self.gaps.analyze_skill_gaps(user_skills, missing)
    }

    pub fn evaluate_job(&self, posting: &JobPosting, settings: &FilterSettings) -> JobEvaluation {
        job_filter::evaluate_job(&self.matcher, posting, settings)
    }
}
