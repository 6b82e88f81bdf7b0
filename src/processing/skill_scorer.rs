//! Tiered weighted skill scoring

use crate::processing::keyword_matcher::{KeywordMatcher, MatchOptions};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Primary, Tier::Secondary, Tier::Tertiary];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Primary => "Primary",
            Tier::Secondary => "Secondary",
            Tier::Tertiary => "Tertiary",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's skills grouped by importance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTiers {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub tertiary: Vec<String>,
}

impl SkillTiers {
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Primary => &self.primary,
            Tier::Secondary => &self.secondary,
            Tier::Tertiary => &self.tertiary,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Primary => &mut self.primary,
            Tier::Secondary => &mut self.secondary,
            Tier::Tertiary => &mut self.tertiary,
        }
    }

    /// Every declared skill, primary first
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.primary.iter().chain(&self.secondary).chain(&self.tertiary)
    }

    pub fn is_empty(&self) -> bool {
        self.all().next().is_none()
    }
}

/// Points earned per matched skill in each tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    pub primary: f64,
    pub secondary: f64,
    pub tertiary: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self { primary: 10.0, secondary: 5.0, tertiary: 1.0 }
    }
}

impl TierWeights {
    /// Weight of a tier; non-positive or non-finite weights count as 1
    pub fn get(&self, tier: Tier) -> f64 {
        let weight = match tier {
            Tier::Primary => self.primary,
            Tier::Secondary => self.secondary,
            Tier::Tertiary => self.tertiary,
        };
        if weight.is_finite() && weight > 0.0 { weight } else { 1.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub matched_skills: SkillTiers,
    pub primary_skill_count: usize,
    pub breakdown: String,
}

/// Score `text` against the tiers using boundary matching only.
///
/// Each tier contributes `weight × matched skills`. Empty tiers contribute nothing.
pub fn calculate_skill_score(
    matcher: &KeywordMatcher,
    text: &str,
    tiers: &SkillTiers,
    weights: &TierWeights,
    custom_aliases: &BTreeMap<String, Vec<String>>,
) -> ScoreResult {
    let options = MatchOptions::default().with_custom_aliases(custom_aliases.clone());
    let mut matched_skills = SkillTiers::default();
    let mut total_score = 0.0;

    for tier in Tier::ALL {
        let skills = tiers.get(tier);
        if skills.is_empty() {
            continue;
        }

        let matched = matcher.match_keywords(text, skills, &options);
        total_score += weights.get(tier) * matched.len() as f64;
        *matched_skills.get_mut(tier) = matched;
    }

    let breakdown = Tier::ALL
        .iter()
        .map(|tier| format!("{}: {}", tier.label(), matched_skills.get(*tier).join(", ")))
        .collect::<Vec<_>>()
        .join(" | ");

    debug!("Skill score {} ({})", total_score, breakdown);

    ScoreResult {
        total_score,
        primary_skill_count: matched_skills.primary.len(),
        matched_skills,
        breakdown,
    }
}
