//! Skill keyword matching against job text: alias resolution, boundary and fuzzy matching

use crate::error::Result;
use crate::processing::skill_database::{AliasTable, ResolvedSkill};
use crate::processing::text_processor::{boundary_pattern, normalize, tokens};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use strsim::levenshtein;

/// Short aliases still eligible for fuzzy matching
pub const FUZZY_SHORT_ALLOW_LIST: &[&str] = &["js", "ts", "go", "c#"];

/// Generic words never used as fuzzy candidates
pub const FUZZY_STOPWORDS: &[&str] = &[
    "and", "or", "the", "with", "for", "in", "on", "at", "to", "from", "of", "is", "are", "was",
    "were", "have", "has", "had", "will", "would", "could", "should", "can", "may", "might",
    "must", "shall", "this", "that", "these", "those", "a", "an", "be", "been", "being",
];

const MIN_FUZZY_ALIAS_CHARS: usize = 3;
const MIN_FUZZY_TOKEN_CHARS: usize = 3;

/// How a keyword lookup should behave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    /// Only whole-text equality counts
    pub exact_match: bool,
    pub fuzzy_match: bool,
    pub min_similarity: f64,
    /// Extra aliases unioned into the base table
    pub custom_aliases: BTreeMap<String, Vec<String>>,
    /// Skip generic stopwords as fuzzy candidates
    pub exclude_common: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            exact_match: false,
            fuzzy_match: false,
            min_similarity: 0.8,
            custom_aliases: BTreeMap::new(),
            exclude_common: true,
        }
    }
}

impl MatchOptions {
    pub fn with_custom_aliases(mut self, custom_aliases: BTreeMap<String, Vec<String>>) -> Self {
        self.custom_aliases = custom_aliases;
        self
    }

    pub fn with_fuzzy(mut self, min_similarity: f64) -> Self {
        self.fuzzy_match = true;
        self.min_similarity = min_similarity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Boundary,
    Fuzzy,
    None,
}

/// Outcome of matching one requested skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Skill as the caller declared it
    pub skill: String,
    pub canonical: String,
    pub matched: bool,
    pub match_type: MatchType,
    pub similarity: f64,
    /// Surface form that triggered the match, empty when unmatched
    pub matched_alias: String,
}

impl MatchResult {
    fn unmatched(skill: &str, canonical: String) -> Self {
        Self {
            skill: skill.to_string(),
            canonical,
            matched: false,
            match_type: MatchType::None,
            similarity: 0.0,
            matched_alias: String::new(),
        }
    }
}

/// Matcher over the basic alias table with precompiled boundary patterns
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    aliases: AliasTable,
    patterns: HashMap<String, Regex>,
    stopwords: HashSet<&'static str>,
}

impl KeywordMatcher {
    /// Create a matcher over the built-in alias table
    pub fn new() -> Result<Self> {
        Self::with_alias_table(AliasTable::basic())
    }

    /// Create a matcher over any alias table
    pub fn with_alias_table(aliases: AliasTable) -> Result<Self> {
        let mut patterns = HashMap::new();
        for (_, forms) in aliases.iter() {
            for form in forms {
                let normalized = normalize(form, false);
                if normalized.is_empty() || patterns.contains_key(&normalized) {
                    continue;
                }
                let pattern = boundary_pattern(&normalized, false)?;
                patterns.insert(normalized, pattern);
            }
        }

        debug!("Compiled {} alias patterns for {} skills", patterns.len(), aliases.len());

        Ok(Self {
            aliases,
            patterns,
            stopwords: FUZZY_STOPWORDS.iter().copied().collect(),
        })
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.aliases
    }

    /// Names of the requested skills found in `text`, in request order
    pub fn match_keywords<S: AsRef<str>>(&self, text: &str, skills: &[S], options: &MatchOptions) -> Vec<String> {
        self.match_keywords_detailed(text, skills, options)
            .into_iter()
            .filter(|result| result.matched)
            .map(|result| result.skill)
            .collect()
    }

    /// One [`MatchResult`] per distinct requested skill, matched or not
    pub fn match_keywords_detailed<S: AsRef<str>>(
        &self,
        text: &str,
        skills: &[S],
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        if text.trim().is_empty() || skills.is_empty() {
            warn!("Keyword matching skipped: text and skill list must both be non-empty");
            return Vec::new();
        }

        let normalized_text = normalize(text, options.case_sensitive);
        let merged;
        let table = if options.custom_aliases.is_empty() {
            &self.aliases
        } else {
            merged = self.aliases.merged_with(&options.custom_aliases);
            &merged
        };

        let mut seen = HashSet::new();
        let mut results = Vec::with_capacity(skills.len());

        for skill in skills {
            let skill = skill.as_ref();
            if !seen.insert(skill) {
                continue;
            }

            let resolved = table.resolve(skill, options.case_sensitive);
            let result = self.match_skill(skill, resolved, &normalized_text, options);
            debug!("Skill '{}' → {:?} via '{}'", skill, result.match_type, result.matched_alias);
            results.push(result);
        }

        results
    }

    fn match_skill(&self, skill: &str, resolved: ResolvedSkill, normalized_text: &str, options: &MatchOptions) -> MatchResult {
        let ResolvedSkill { canonical, aliases } = resolved;

        for alias in &aliases {
            let normalized_alias = normalize(alias, options.case_sensitive);
            if normalized_alias.is_empty() {
                continue;
            }

            let found = if options.exact_match {
                normalized_text == normalized_alias
            } else {
                self.contains_alias(normalized_text, &normalized_alias, options.case_sensitive)
            };

            if found {
                return MatchResult {
                    skill: skill.to_string(),
                    canonical,
                    matched: true,
                    match_type: if options.exact_match { MatchType::Exact } else { MatchType::Boundary },
                    similarity: 1.0,
                    matched_alias: alias.clone(),
                };
            }
        }

        if options.fuzzy_match {
            if let Some((alias, similarity)) = self.best_fuzzy_alias(&aliases, normalized_text, options) {
                return MatchResult {
                    skill: skill.to_string(),
                    canonical,
                    matched: true,
                    match_type: MatchType::Fuzzy,
                    similarity,
                    matched_alias: alias.to_string(),
                };
            }
        }

        MatchResult::unmatched(skill, canonical)
    }

    fn contains_alias(&self, normalized_text: &str, normalized_alias: &str, case_sensitive: bool) -> bool {
        if !case_sensitive {
            if let Some(pattern) = self.patterns.get(normalized_alias) {
                return pattern.is_match(normalized_text);
            }
        }

        match boundary_pattern(normalized_alias, case_sensitive) {
            Ok(pattern) => pattern.is_match(normalized_text),
            Err(e) => {
                warn!("Skipping alias '{}': {}", normalized_alias, e);
                false
            }
        }
    }

    /// Best alias by Levenshtein similarity against the text tokens, if any reaches the threshold
    fn best_fuzzy_alias<'a>(
        &self,
        aliases: &'a [String],
        normalized_text: &str,
        options: &MatchOptions,
    ) -> Option<(&'a str, f64)> {
        let min_similarity = options.min_similarity.clamp(0.0, 1.0);
        let mut best: Option<(&'a str, f64)> = None;

        for alias in aliases {
            let candidate = normalize(alias, options.case_sensitive);
            if candidate.chars().count() < MIN_FUZZY_ALIAS_CHARS
                && !FUZZY_SHORT_ALLOW_LIST.contains(&candidate.as_str())
            {
                continue;
            }
            if options.exclude_common && self.stopwords.contains(candidate.as_str()) {
                continue;
            }

            for token in tokens(normalized_text, MIN_FUZZY_TOKEN_CHARS) {
                let similarity = similarity(&candidate, token);
                let best_so_far = best.map_or(0.0, |(_, s)| s);
                if similarity >= min_similarity && similarity > best_so_far {
                    best = Some((alias.as_str(), similarity));
                }
            }
        }

        best
    }
}

/// `1 - levenshtein / max_len`, in characters
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}
