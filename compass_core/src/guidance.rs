//! Presentation derivations for the results and guidance stages.
//!
//! Pure functions from [`AssessmentData`] to display rows: score
//! badges, recommendation copy, role fits, skill-gap rows, and the
//! per-tier learning and alternative paths. No stored state.

use crate::question_bank::{
    AlternativePath, RoleProfile, ALTERNATIVE_PATHS, LEARNING_PATH_MAYBE, LEARNING_PATH_NO,
    LEARNING_PATH_YES, ROLE_PROFILES, SKILL_REQUIREMENTS,
};
use crate::scoring::{self, GapLevel};
use crate::types::{AssessmentData, Recommendation};
use serde::Serialize;

/// Strength label attached to a single 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBadge {
    Strong,           // 75..=100
    Moderate,         // 50..=74
    NeedsDevelopment, // 0..=49
}

impl ScoreBadge {
    pub fn from_score(score: u8) -> ScoreBadge {
        if score >= 75 {
            ScoreBadge::Strong
        } else if score >= 50 {
            ScoreBadge::Moderate
        } else {
            ScoreBadge::NeedsDevelopment
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBadge::Strong => "Strong",
            ScoreBadge::Moderate => "Moderate",
            ScoreBadge::NeedsDevelopment => "Needs Development",
        }
    }
}

/// Emotional register of the recommendation copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Cautious,
    Negative,
}

/// Headline and message shown with the final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationSummary {
    pub headline: &'static str,
    pub message: &'static str,
    pub tone: Tone,
}

pub fn recommendation_summary(tier: Recommendation) -> RecommendationSummary {
    match tier {
        Recommendation::Yes => RecommendationSummary {
            headline: "Excellent Fit!",
            message: "You show strong alignment with Salesforce career requirements.",
            tone: Tone::Positive,
        },
        Recommendation::Maybe => RecommendationSummary {
            headline: "Potential Fit",
            message: "With some development, you could succeed in Salesforce.",
            tone: Tone::Cautious,
        },
        Recommendation::No => RecommendationSummary {
            headline: "Consider Alternatives",
            message: "Other career paths might be a better fit for your profile.",
            tone: Tone::Negative,
        },
    }
}

/// How well the assessment supports a given career role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitLevel {
    Excellent,
    Good,
    ConsiderDevelopment,
}

impl FitLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitLevel::Excellent => "Excellent",
            FitLevel::Good => "Good",
            FitLevel::ConsiderDevelopment => "Consider Development",
        }
    }
}

/// One evaluated row of the career-paths table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleFit {
    pub role: &'static RoleProfile,
    /// The metric value the fit was judged on.
    pub score: u8,
    pub fit: FitLevel,
}

pub fn role_fits(data: &AssessmentData) -> Vec<RoleFit> {
    ROLE_PROFILES
        .iter()
        .map(|role| {
            let score = role.metric.read(data);
            let fit = if score >= role.excellent_at {
                FitLevel::Excellent
            } else if score >= role.good_at {
                FitLevel::Good
            } else {
                FitLevel::ConsiderDevelopment
            };
            RoleFit { role, score, fit }
        })
        .collect()
}

/// One evaluated row of the skill-gap table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGapRow {
    pub skill: &'static str,
    pub provided: u8,
    pub required: u8,
    pub level: GapLevel,
}

impl SkillGapRow {
    /// Points short of the requirement; zero when met.
    pub fn shortfall(&self) -> u8 {
        self.required.saturating_sub(self.provided)
    }
}

pub fn skill_gaps(data: &AssessmentData) -> Vec<SkillGapRow> {
    SKILL_REQUIREMENTS
        .iter()
        .map(|requirement| {
            let provided = requirement.source.provided(data);
            SkillGapRow {
                skill: requirement.skill,
                provided,
                required: requirement.required,
                level: scoring::skill_gap(provided, requirement.required),
            }
        })
        .collect()
}

pub fn learning_path(tier: Recommendation) -> &'static [&'static str] {
    match tier {
        Recommendation::Yes => &LEARNING_PATH_YES,
        Recommendation::Maybe => &LEARNING_PATH_MAYBE,
        Recommendation::No => &LEARNING_PATH_NO,
    }
}

/// Alternative career directions; empty when the tier is Yes.
pub fn alternative_paths(tier: Recommendation) -> &'static [AlternativePath] {
    match tier {
        Recommendation::Yes => &[],
        Recommendation::Maybe | Recommendation::No => &ALTERNATIVE_PATHS,
    }
}
