// Shared records and enums for the Career Compass assessment.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("no rating recorded for statement {0}")]
    MissingRating(usize),

    #[error("no answer recorded for question '{0}'")]
    MissingChoice(&'static str),

    #[error("rating {value} for statement {index} is outside 1-5")]
    RatingOutOfRange { index: usize, value: u8 },

    #[error("option {option} for question '{id}' does not exist")]
    ChoiceOutOfRange { id: &'static str, option: usize },

    #[error("{name} score {value} is outside 0-100")]
    ScoreOutOfRange { name: &'static str, value: u8 },

    #[error("statement index {0} does not exist")]
    UnknownStatement(usize),

    #[error("question '{0}' does not exist")]
    UnknownQuestion(String),
}

/// Final verdict tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Lowest overall score that still earns a YES.
    pub const YES_AT: u8 = 75;
    /// Lowest overall score that still earns a MAYBE.
    pub const MAYBE_AT: u8 = 55;

    pub fn from_overall(overall: u8) -> Recommendation {
        if overall >= Recommendation::YES_AT {
            Recommendation::Yes
        } else if overall >= Recommendation::MAYBE_AT {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::Maybe => "MAYBE",
            Recommendation::No => "NO",
        }
    }
}

/// One of the six readiness dimensions scored by slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    /// Field name used in reports and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "realWorld",
        }
    }
}

/// Per-dimension 0-100 scores for the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    /// All six dimensions set to the same value.
    pub fn uniform(value: u8) -> WiscarScores {
        WiscarScores {
            will: value,
            interest: value,
            skill: value,
            cognitive: value,
            ability: value,
            real_world: value,
        }
    }

    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, value: u8) {
        match dimension {
            WiscarDimension::Will => self.will = value,
            WiscarDimension::Interest => self.interest = value,
            WiscarDimension::Skill => self.skill = value,
            WiscarDimension::Cognitive => self.cognitive = value,
            WiscarDimension::Ability => self.ability = value,
            WiscarDimension::RealWorld => self.real_world = value,
        }
    }

    pub fn as_array(&self) -> [u8; 6] {
        [
            self.will,
            self.interest,
            self.skill,
            self.cognitive,
            self.ability,
            self.real_world,
        ]
    }

    /// Unrounded mean of the six dimensions.
    pub fn average(&self) -> f64 {
        let sum: u16 = self.as_array().iter().map(|&v| v as u16).sum();
        sum as f64 / 6.0
    }
}

/// Accumulated scores for one assessment run.
///
/// Starts zeroed with a NO recommendation and is filled in stage by
/// stage as sections complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentData {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
}

impl AssessmentData {
    pub fn new() -> AssessmentData {
        AssessmentData {
            psychometric_score: 0,
            technical_score: 0,
            wiscar_scores: WiscarScores::default(),
            overall_score: 0,
            recommendation: Recommendation::No,
        }
    }
}

impl Default for AssessmentData {
    fn default() -> AssessmentData {
        AssessmentData::new()
    }
}
