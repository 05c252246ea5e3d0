//! Additive relevance scoring.
//!
//! A score is the sum of an ordered list of named rules ([`SCORING_RULES`]),
//! each looking at one record's [`SearchMeta`] and the parsed [`Query`].
//! Several rules can fire for the same record; the exact, prefix and
//! substring name bonuses are cumulative, so an exact name match collects
//! all three. A total of zero means "not a match".

use canonical::{normalize, tokenize};
use index::SearchMeta;
use serde::Serialize;

use crate::levenshtein::levenshtein;

const EXACT_NAME_BONUS: i32 = 200;
const NAME_PREFIX_BONUS: i32 = 120;
const NAME_SUBSTRING_BONUS: i32 = 80;

const TOKEN_EXACT: u32 = 70;
const TOKEN_PREFIX: u32 = 55;
const TOKEN_REVERSE_PREFIX: u32 = 40;
const TOKEN_FUZZY_BASE: u32 = 45;
const TOKEN_FUZZY_STEP: u32 = 8;
const LEADING_TOKEN_BONUS: u32 = 15;

const PARTY_EXACT: u32 = 25;
const PARTY_PREFIX: u32 = 18;
const PARTY_FUZZY: u32 = 12;

const WHOLE_NAME_FUZZY_BASE: i32 = 60;
const WHOLE_NAME_FUZZY_STEP: i32 = 8;
const PER_MATCHED_TOKEN: i32 = 10;
const FULL_COVERAGE_BONUS: i32 = 25;

/// A query in canonical form, split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    tokens: Vec<String>,
}

impl Query {
    /// Normalizes and tokenizes `raw`. Returns `None` when nothing searchable
    /// remains (empty, whitespace or punctuation only).
    pub fn parse(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        let tokens = tokenize(&text);
        if tokens.is_empty() {
            return None;
        }
        Some(Self { text, tokens })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Everything a rule may look at.
///
/// `token_scores` holds the per-query-token score (name pass, then party
/// fallback), aligned with `query.tokens()`. It is computed once per record
/// and shared by the rules that need it.
pub struct RuleInput<'a> {
    pub meta: &'a SearchMeta,
    pub query: &'a Query,
    pub token_scores: &'a [u32],
}

impl RuleInput<'_> {
    fn matched_tokens(&self) -> usize {
        self.token_scores.iter().filter(|score| **score > 0).count()
    }
}

/// A named scoring rule returning a signed delta.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub apply: fn(&RuleInput<'_>) -> i32,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule").field("name", &self.name).finish()
    }
}

/// Rules in evaluation order.
pub const SCORING_RULES: [ScoringRule; 6] = [
    ScoringRule {
        name: "exact_name",
        apply: exact_name,
    },
    ScoringRule {
        name: "name_prefix",
        apply: name_prefix,
    },
    ScoringRule {
        name: "name_substring",
        apply: name_substring,
    },
    ScoringRule {
        name: "token_matches",
        apply: token_matches,
    },
    ScoringRule {
        name: "match_breadth",
        apply: match_breadth,
    },
    ScoringRule {
        name: "full_coverage",
        apply: full_coverage,
    },
];

/// One rule's contribution to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub delta: i32,
}

/// Per-rule breakdown of a score; `total` always equals [`score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Delta of the named rule, if such a rule exists.
    pub fn delta(&self, rule: &str) -> Option<i32> {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.delta)
    }
}

/// Relevance of one record for `query`. Zero means no match.
pub fn score(meta: &SearchMeta, query: &Query) -> u32 {
    explain(meta, query).total
}

/// Runs every rule and reports each delta alongside the total.
pub fn explain(meta: &SearchMeta, query: &Query) -> ScoreBreakdown {
    let token_scores = token_scores(meta, query);
    let input = RuleInput {
        meta,
        query,
        token_scores: &token_scores,
    };

    let contributions: Vec<RuleContribution> = SCORING_RULES
        .iter()
        .map(|rule| RuleContribution {
            rule: rule.name,
            delta: (rule.apply)(&input),
        })
        .collect();
    let sum: i64 = contributions.iter().map(|c| i64::from(c.delta)).sum();
    let total = u32::try_from(sum.max(0)).unwrap_or(u32::MAX);

    ScoreBreakdown {
        contributions,
        total,
    }
}

/// Per-query-token scores: best name-token score, or the party fallback when
/// the name pass scored zero.
pub fn token_scores(meta: &SearchMeta, query: &Query) -> Vec<u32> {
    query
        .tokens()
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let name_score = best_name_token_score(&meta.tokens, token, index == 0);
            if name_score > 0 {
                name_score
            } else {
                best_party_token_score(&meta.party_tokens, token)
            }
        })
        .collect()
}

fn exact_name(input: &RuleInput<'_>) -> i32 {
    if input.meta.full_name == input.query.text() {
        EXACT_NAME_BONUS
    } else {
        0
    }
}

fn name_prefix(input: &RuleInput<'_>) -> i32 {
    if input.meta.full_name.starts_with(input.query.text()) {
        NAME_PREFIX_BONUS
    } else {
        0
    }
}

fn name_substring(input: &RuleInput<'_>) -> i32 {
    if input.meta.full_name.contains(input.query.text()) {
        NAME_SUBSTRING_BONUS
    } else {
        0
    }
}

fn token_matches(input: &RuleInput<'_>) -> i32 {
    let sum: u32 = input.token_scores.iter().sum();
    i32::try_from(sum).unwrap_or(i32::MAX)
}

/// Whole-name fuzzy fallback when no token matched, otherwise a reward per
/// matched token.
fn match_breadth(input: &RuleInput<'_>) -> i32 {
    let matched = input.matched_tokens();
    if matched > 0 {
        return i32::try_from(matched)
            .unwrap_or(i32::MAX)
            .saturating_mul(PER_MATCHED_TOKEN);
    }

    let query = input.query.text();
    let distance = levenshtein(&input.meta.full_name, query);
    let threshold = query.chars().count().div_ceil(3);
    if distance > threshold {
        return 0;
    }
    let distance = i32::try_from(distance).unwrap_or(i32::MAX);
    (WHOLE_NAME_FUZZY_BASE - WHOLE_NAME_FUZZY_STEP.saturating_mul(distance)).max(0)
}

/// Multi-token queries whose every token appears inside some record token.
fn full_coverage(input: &RuleInput<'_>) -> i32 {
    let tokens = input.query.tokens();
    let covered = tokens.len() > 1
        && tokens
            .iter()
            .all(|q| input.meta.tokens.iter().any(|t| t.contains(q.as_str())));
    if covered {
        FULL_COVERAGE_BONUS
    } else {
        0
    }
}

fn best_name_token_score(name_tokens: &[String], query_token: &str, first_query_token: bool) -> u32 {
    name_tokens
        .iter()
        .enumerate()
        .map(|(position, name_token)| {
            let mut value = name_token_value(query_token, name_token);
            if first_query_token && position == 0 && name_token.starts_with(query_token) {
                value += LEADING_TOKEN_BONUS;
            }
            value
        })
        .max()
        .unwrap_or(0)
}

fn name_token_value(query_token: &str, name_token: &str) -> u32 {
    if name_token == query_token {
        TOKEN_EXACT
    } else if name_token.starts_with(query_token) {
        TOKEN_PREFIX
    } else if query_token.starts_with(name_token) {
        TOKEN_REVERSE_PREFIX
    } else {
        let tolerance = if query_token.chars().count() <= 4 { 1 } else { 2 };
        let distance = levenshtein(name_token, query_token);
        if distance <= tolerance {
            // distance <= 2 here, so the subtraction stays positive.
            TOKEN_FUZZY_BASE - TOKEN_FUZZY_STEP * distance as u32
        } else {
            0
        }
    }
}

fn best_party_token_score(party_tokens: &[String], query_token: &str) -> u32 {
    party_tokens
        .iter()
        .map(|party_token| {
            if party_token == query_token {
                PARTY_EXACT
            } else if party_token.starts_with(query_token) {
                PARTY_PREFIX
            } else if levenshtein(party_token, query_token) <= 1 {
                PARTY_FUZZY
            } else {
                0
            }
        })
        .max()
        .unwrap_or(0)
}
