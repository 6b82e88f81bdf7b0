//! Missing-skill gap analysis against the comprehensive skill database

use crate::error::Result;
use crate::processing::skill_database::{flattened_skills, SkillCategory, SkillEntry};
use crate::processing::skill_metadata::{self, LearningResources, SkillProfile};
use crate::processing::text_processor::{boundary_pattern, normalize, split_sentences};
use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Phrases that raise the priority of a skill mentioned in the same sentence
pub const PRIORITY_INDICATORS: &[&str] = &[
    "required", "must have", "essential", "critical", "mandatory", "key", "important", "primary",
    "core", "fundamental", "strong", "expert", "advanced", "proficient", "senior",
];

const LEVEL_INDICATORS: &[(SkillLevel, &[&str])] = &[
    (SkillLevel::Senior, &["senior", "lead", "principal", "staff", "architect"]),
    (SkillLevel::Mid, &["mid-level", "intermediate", "experienced"]),
    (SkillLevel::Junior, &["junior", "entry-level", "graduate", "intern"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapOptions {
    pub include_level: bool,
    pub include_soft_skills: bool,
    pub min_occurrence: usize,
    /// Indicators add 2 instead of 1 and results sort by priority rather than occurrences
    pub priority_weighting: bool,
    /// Empty means every category
    pub category_filter: Vec<SkillCategory>,
    pub max_results: usize,
}

impl Default for GapOptions {
    fn default() -> Self {
        Self {
            include_level: true,
            include_soft_skills: false,
            min_occurrence: 1,
            priority_weighting: true,
            category_filter: Vec::new(),
            max_results: 20,
        }
    }
}

impl GapOptions {
    fn includes(&self, category: SkillCategory) -> bool {
        if !self.category_filter.is_empty() && !self.category_filter.contains(&category) {
            return false;
        }
        category != SkillCategory::Soft || self.include_soft_skills
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Senior,
    Mid,
    Junior,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillLevel::Senior => "senior",
            SkillLevel::Mid => "mid",
            SkillLevel::Junior => "junior",
        };
        f.write_str(name)
    }
}

/// A skill the posting asks for that the caller does not list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub category: SkillCategory,
    pub occurrences: usize,
    /// Occurrences plus the indicator bonus
    pub priority: usize,
    pub level: Option<SkillLevel>,
    /// Aliases that were actually found in the text
    pub aliases: Vec<String>,
    pub contexts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecommendation {
    pub category: SkillCategory,
    pub skills: Vec<String>,
    pub recommendation: String,
    /// Average priority of the category's missing skills
    pub priority: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub total_found: usize,
    pub total_missing: usize,
    pub user_skills_count: usize,
    pub coverage_percentage: u32,
    pub missing_skills: Vec<MissingSkill>,
    pub recommendations: Vec<CategoryRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSkill {
    #[serde(flatten)]
    pub skill: MissingSkill,
    #[serde(flatten)]
    pub profile: SkillProfile,
    pub roi_score: u8,
    pub resources: LearningResources,
    pub learning_path: Vec<String>,
}

/// Skill names bucketed by how soon they are worth learning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    /// 1-6 weeks
    pub immediate: Vec<String>,
    /// 2-3 months
    pub short_term: Vec<String>,
    /// 6+ months
    pub long_term: Vec<String>,
    /// As time permits
    pub optional: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub total_weeks: u32,
    pub total_months: u32,
    pub average_weeks_per_skill: u32,
    /// Two skills at a time
    pub parallel_learning: u32,
    pub focused_learning: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickWin {
    pub skill: String,
    pub reason: String,
    pub time_investment: String,
    pub expected_roi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMove {
    pub skill: String,
    pub reason: String,
    pub category: SkillCategory,
    pub market_demand: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub skill: String,
    pub demand_level: u8,
    pub category: SkillCategory,
    pub trend: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategicInsights {
    pub quick_wins: Vec<QuickWin>,
    pub career_advancement: Vec<CareerMove>,
    pub market_trends: Vec<MarketTrend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedGapReport {
    pub total_found: usize,
    pub total_missing: usize,
    pub user_skills_count: usize,
    pub coverage_percentage: u32,
    pub recommendations: Vec<CategoryRecommendation>,
    /// Sorted by ROI, highest first
    pub missing_skills: Vec<EnrichedSkill>,
    pub learning_plan: LearningPlan,
    pub time_estimate: TimeEstimate,
    pub strategic_insights: StrategicInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapArea {
    pub category: SkillCategory,
    pub avg_priority: f64,
    pub skill_count: usize,
    pub is_new_area: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecommendation {
    pub category: SkillCategory,
    pub reason: String,
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub strong_areas: Vec<SkillCategory>,
    pub gap_areas: Vec<GapArea>,
    pub immediate: Vec<AreaRecommendation>,
    pub expansion: Vec<AreaRecommendation>,
}

struct CompiledAlias {
    raw: &'static str,
    normalized: String,
    pattern: Regex,
}

struct CompiledSkill {
    entry: SkillEntry,
    aliases: Vec<CompiledAlias>,
}

struct Sentence<'a> {
    raw: &'a str,
    normalized: String,
}

/// Everything found in one posting, before known skills are removed
struct Scan {
    found: Vec<MissingSkill>,
    missing: Vec<MissingSkill>,
    known_count: usize,
}

/// Finds skills a posting asks for that the caller lacks
pub struct GapAnalyzer {
    skills: Vec<CompiledSkill>,
    prefilter: AhoCorasick,
    /// Skill index for each prefilter pattern
    pattern_owner: Vec<usize>,
    priority_indicators: Vec<Regex>,
    level_indicators: Vec<(SkillLevel, Regex)>,
}

impl fmt::Debug for GapAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapAnalyzer")
            .field("skills", &self.skills.len())
            .field("patterns", &self.pattern_owner.len())
            .finish()
    }
}

impl GapAnalyzer {
    /// Compile the comprehensive database and the indicator lists
    pub fn new() -> Result<Self> {
        let mut skills = Vec::new();
        let mut prefilter_patterns = Vec::new();
        let mut pattern_owner = Vec::new();

        for entry in flattened_skills() {
            let mut aliases = Vec::with_capacity(entry.aliases.len());
            for &raw in entry.aliases {
                let normalized = normalize(raw, false);
                if normalized.is_empty() {
                    continue;
                }
                let pattern = boundary_pattern(&normalized, false)?;
                prefilter_patterns.push(normalized.clone());
                pattern_owner.push(skills.len());
                aliases.push(CompiledAlias { raw, normalized, pattern });
            }
            skills.push(CompiledSkill { entry, aliases });
        }

        let prefilter = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&prefilter_patterns)?;

        let priority_indicators = PRIORITY_INDICATORS
            .iter()
            .map(|phrase| boundary_pattern(&normalize(phrase, false), false))
            .collect::<Result<Vec<_>>>()?;

        let mut level_indicators = Vec::new();
        for (level, phrases) in LEVEL_INDICATORS {
            for phrase in *phrases {
                level_indicators.push((*level, boundary_pattern(&normalize(phrase, false), false)?));
            }
        }

        debug!(
            "Gap analyzer ready: {} skills, {} alias patterns",
            skills.len(),
            pattern_owner.len()
        );

        Ok(Self {
            skills,
            prefilter,
            pattern_owner,
            priority_indicators,
            level_indicators,
        })
    }

    /// Ranked missing skills, at most `max_results`
    pub fn find_missing_skills<S: AsRef<str>>(
        &self,
        job_text: &str,
        known_skills: &[S],
        options: &GapOptions,
    ) -> Vec<MissingSkill> {
        match self.scan(job_text, known_skills, options) {
            Some(scan) => limit(scan.missing, options.max_results),
            None => Vec::new(),
        }
    }

    /// Ranked missing skills with aggregate statistics and per-category advice
    pub fn missing_skills_report<S: AsRef<str>>(
        &self,
        job_text: &str,
        known_skills: &[S],
        options: &GapOptions,
    ) -> GapReport {
        match self.scan(job_text, known_skills, options) {
            Some(scan) => build_report(scan, options.max_results),
            None => GapReport::default(),
        }
    }

    /// Report enriched with learning metadata, ROI ordering and a study plan
    pub fn missing_skills_with_details<S: AsRef<str>>(
        &self,
        job_text: &str,
        known_skills: &[S],
        options: &GapOptions,
    ) -> EnrichedGapReport {
        let report = self.missing_skills_report(job_text, known_skills, options);

        let mut enriched: Vec<EnrichedSkill> = report.missing_skills.into_iter().map(enrich).collect();
        enriched.sort_by(|a, b| b.roi_score.cmp(&a.roi_score));

        EnrichedGapReport {
            total_found: report.total_found,
            total_missing: report.total_missing,
            user_skills_count: report.user_skills_count,
            coverage_percentage: report.coverage_percentage,
            recommendations: report.recommendations,
            learning_plan: learning_plan(&enriched),
            time_estimate: time_estimate(&enriched),
            strategic_insights: strategic_insights(&enriched),
            missing_skills: enriched,
        }
    }

    /// Where the user is already strong and which categories the gaps fall into
    pub fn analyze_skill_gaps<S: AsRef<str>>(&self, user_skills: &[S], missing: &[MissingSkill]) -> SkillGapAnalysis {
        let mut strong_areas = Vec::new();
        for skill in user_skills {
            let wanted = normalize(skill.as_ref(), false);
            if wanted.is_empty() {
                continue;
            }
            let category = self
                .skills
                .iter()
                .find(|s| s.aliases.iter().any(|a| a.normalized.contains(&wanted)))
                .map(|s| s.entry.category);
            if let Some(category) = category {
                if !strong_areas.contains(&category) {
                    strong_areas.push(category);
                }
            }
        }

        let mut gap_areas: Vec<GapArea> = group_by_category(missing)
            .into_iter()
            .map(|(category, mut skills)| {
                let total: usize = skills.iter().map(|s| s.priority).sum();
                skills.sort_by(|a, b| b.priority.cmp(&a.priority));
                GapArea {
                    category,
                    avg_priority: total as f64 / skills.len() as f64,
                    skill_count: skills.len(),
                    is_new_area: !strong_areas.contains(&category),
                    skills: skills.iter().map(|s| s.skill.clone()).collect(),
                }
            })
            .collect();
        gap_areas.sort_by(|a, b| b.avg_priority.total_cmp(&a.avg_priority));

        let recommend = |area: &GapArea, reason: String| AreaRecommendation {
            category: area.category,
            reason,
            top_skills: area.skills.iter().take(3).cloned().collect(),
        };

        let immediate = gap_areas
            .iter()
            .take(2)
            .map(|area| recommend(area, format!("High priority area with {} missing skills", area.skill_count)))
            .collect();
        let expansion = gap_areas
            .iter()
            .filter(|area| area.is_new_area)
            .take(2)
            .map(|area| recommend(area, "New skill area to diversify your expertise".to_string()))
            .collect();

        SkillGapAnalysis { strong_areas, gap_areas, immediate, expansion }
    }

    fn scan<S: AsRef<str>>(&self, job_text: &str, known_skills: &[S], options: &GapOptions) -> Option<Scan> {
        if job_text.trim().is_empty() || known_skills.is_empty() {
            warn!("Gap analysis skipped: job text and known skills must both be non-empty");
            return None;
        }

        let normalized_job = normalize(job_text, false);
        let known: Vec<String> = known_skills
            .iter()
            .map(|k| normalize(k.as_ref(), false))
            .filter(|k| !k.is_empty())
            .collect();
        let sentences: Vec<Sentence> = split_sentences(job_text)
            .into_iter()
            .map(|raw| Sentence { raw, normalized: normalize(raw, false) })
            .collect();

        let candidates: HashSet<usize> = self
            .prefilter
            .find_overlapping_iter(&normalized_job)
            .map(|m| self.pattern_owner[m.pattern().as_usize()])
            .collect();

        let min_occurrence = options.min_occurrence.max(1);
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for (idx, skill) in self.skills.iter().enumerate() {
            if !candidates.contains(&idx) || !options.includes(skill.entry.category) {
                continue;
            }

            let hit = self.scan_skill(skill, &normalized_job, &sentences, options);
            if hit.occurrences >= min_occurrence {
                if !is_known(skill, &known) {
                    missing.push(hit.clone());
                }
                found.push(hit);
            }
        }

        if options.priority_weighting {
            missing.sort_by(|a, b| b.priority.cmp(&a.priority));
        } else {
            missing.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        }

        debug!("Gap scan: {} skills found, {} missing", found.len(), missing.len());

        Some(Scan { found, missing, known_count: known_skills.len() })
    }

    fn scan_skill(&self, skill: &CompiledSkill, normalized_job: &str, sentences: &[Sentence], options: &GapOptions) -> MissingSkill {
        let step = if options.priority_weighting { 2 } else { 1 };
        let mut occurrences = 0;
        let mut bonus = 0;
        let mut level = None;
        let mut aliases = Vec::new();
        let mut contexts: Vec<String> = Vec::new();

        for alias in &skill.aliases {
            let count = alias.pattern.find_iter(normalized_job).count();
            if count == 0 {
                continue;
            }
            occurrences += count;
            aliases.push(alias.raw.to_string());

            for sentence in sentences {
                if !alias.pattern.is_match(&sentence.normalized) || contexts.iter().any(|c| c == sentence.raw) {
                    continue;
                }
                contexts.push(sentence.raw.to_string());

                bonus += step * self
                    .priority_indicators
                    .iter()
                    .filter(|indicator| indicator.is_match(&sentence.normalized))
                    .count();

                if options.include_level {
                    for (candidate, indicator) in &self.level_indicators {
                        if indicator.is_match(&sentence.normalized) {
                            level = Some(*candidate);
                        }
                    }
                }
            }
        }

        MissingSkill {
            skill: skill.entry.name.to_string(),
            category: skill.entry.category,
            occurrences,
            priority: bonus + occurrences,
            level,
            aliases,
            contexts,
        }
    }
}

/// Below this length an alias or known skill only relates to whole words
const MIN_SUBSTRING_CHARS: usize = 3;

/// A skill is known when any of its aliases, found in the posting or not,
/// and a known skill contain one another
fn is_known(skill: &CompiledSkill, known: &[String]) -> bool {
    skill
        .aliases
        .iter()
        .any(|alias| known.iter().any(|k| aliases_related(&alias.normalized, k)))
}

fn aliases_related(alias: &str, known: &str) -> bool {
    if alias.chars().count() < MIN_SUBSTRING_CHARS || known.chars().count() < MIN_SUBSTRING_CHARS {
        return alias == known
            || alias.split(' ').any(|word| word == known)
            || known.split(' ').any(|word| word == alias);
    }
    alias.contains(known) || known.contains(alias)
}

fn limit(mut skills: Vec<MissingSkill>, max_results: usize) -> Vec<MissingSkill> {
    skills.truncate(max_results);
    skills
}

fn build_report(scan: Scan, max_results: usize) -> GapReport {
    let total_missing = scan.missing.len();
    let known = scan.known_count as f64;
    // Known count over known plus missing, not a true overlap ratio
    let coverage_percentage = (known / (known + total_missing as f64) * 100.0).round() as u32;

    let missing_skills = limit(scan.missing, max_results);
    let recommendations = category_recommendations(&missing_skills);

    GapReport {
        total_found: scan.found.len(),
        total_missing,
        user_skills_count: scan.known_count,
        coverage_percentage,
        missing_skills,
        recommendations,
    }
}

fn group_by_category(skills: &[MissingSkill]) -> Vec<(SkillCategory, Vec<&MissingSkill>)> {
    let mut groups: Vec<(SkillCategory, Vec<&MissingSkill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category, vec![skill])),
        }
    }
    groups
}

/// Advice per category, highest average priority first
pub fn category_recommendations(missing: &[MissingSkill]) -> Vec<CategoryRecommendation> {
    let mut recommendations: Vec<CategoryRecommendation> = group_by_category(missing)
        .into_iter()
        .map(|(category, skills)| {
            let top: Vec<String> = skills.iter().take(3).map(|s| s.skill.clone()).collect();
            let total: usize = skills.iter().map(|s| s.priority).sum();
            CategoryRecommendation {
                category,
                recommendation: recommendation_text(category, &top.join(", ")),
                skills: top,
                priority: total as f64 / skills.len() as f64,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    recommendations
}

fn recommendation_text(category: SkillCategory, skills: &str) -> String {
    match category {
        SkillCategory::Frontend => format!("Consider learning {} to strengthen your frontend development skills.", skills),
        SkillCategory::Backend => format!("Focus on {} to enhance your backend capabilities.", skills),
        SkillCategory::Database => format!("Database skills in {} would complement your existing knowledge.", skills),
        SkillCategory::Cloud => format!("Cloud technologies like {} are highly valued in the job market.", skills),
        SkillCategory::Testing => format!("Testing skills in {} would make you a more well-rounded developer.", skills),
        SkillCategory::Programming => format!("Programming languages like {} could expand your development options.", skills),
        SkillCategory::Mobile => format!("Mobile development skills in {} are increasingly in demand.", skills),
        SkillCategory::Data => format!("Data science skills in {} are valuable across many industries.", skills),
        SkillCategory::Architecture => format!("Architectural knowledge in {} is crucial for senior roles.", skills),
        SkillCategory::Soft => format!("Soft skills like {} are essential for career advancement.", skills),
    }
}

fn enrich(skill: MissingSkill) -> EnrichedSkill {
    let profile = skill_metadata::profile(&skill.skill);
    EnrichedSkill {
        roi_score: profile.roi_score(),
        resources: skill_metadata::resources(&skill.skill),
        learning_path: skill_metadata::learning_path(&skill.skill),
        profile,
        skill,
    }
}

pub fn learning_plan(skills: &[EnrichedSkill]) -> LearningPlan {
    let mut plan = LearningPlan::default();
    for skill in skills {
        let name = skill.skill.skill.clone();
        let weeks = skill.profile.learning_weeks;
        let roi = skill.roi_score;

        if roi >= 70 && weeks <= 6 {
            plan.immediate.push(name);
        } else if roi >= 50 && weeks <= 12 {
            plan.short_term.push(name);
        } else if skill.profile.market_demand >= 7 || roi >= 60 {
            plan.long_term.push(name);
        } else {
            plan.optional.push(name);
        }
    }
    plan
}

pub fn time_estimate(skills: &[EnrichedSkill]) -> TimeEstimate {
    let total_weeks: u32 = skills.iter().map(|s| s.profile.learning_weeks).sum();
    let average_weeks_per_skill = if skills.is_empty() {
        0
    } else {
        (f64::from(total_weeks) / skills.len() as f64).round() as u32
    };

    TimeEstimate {
        total_weeks,
        total_months: (f64::from(total_weeks) / 4.3).round() as u32,
        average_weeks_per_skill,
        parallel_learning: total_weeks.div_ceil(2),
        focused_learning: total_weeks,
    }
}

pub fn strategic_insights(skills: &[EnrichedSkill]) -> StrategicInsights {
    let quick_wins = skills
        .iter()
        .filter(|s| s.roi_score >= 60 && s.profile.difficulty <= 3 && s.profile.learning_weeks <= 6)
        .take(3)
        .map(|s| QuickWin {
            skill: s.skill.skill.clone(),
            reason: format!(
                "High market demand ({}/10) with relatively easy learning curve",
                s.profile.market_demand
            ),
            time_investment: format!("{} weeks", s.profile.learning_weeks),
            expected_roi: format!("{}/100", s.roi_score),
        })
        .collect();

    let career_advancement = skills
        .iter()
        .filter(|s| s.profile.salary_impact >= 1.3)
        .take(3)
        .map(|s| CareerMove {
            skill: s.skill.skill.clone(),
            reason: format!(
                "Significant salary impact (+{}%)",
                ((s.profile.salary_impact - 1.0) * 100.0).round()
            ),
            category: s.skill.category,
            market_demand: s.profile.market_demand,
        })
        .collect();

    let market_trends = skills
        .iter()
        .filter(|s| s.profile.market_demand >= 8)
        .take(5)
        .map(|s| MarketTrend {
            skill: s.skill.skill.clone(),
            demand_level: s.profile.market_demand,
            category: s.skill.category,
            trend: "Increasing".to_string(),
        })
        .collect();

    StrategicInsights { quick_wins, career_advancement, market_trends }
}
