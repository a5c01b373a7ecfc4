//! Wizard session state machine.
//!
//! Six ordered stages: Introduction -> Psychometric -> Technical ->
//! Wiscar -> Results -> Guidance. Psychometric steps through the 15
//! statements one at a time, Technical through the 3 subsections, and
//! WISCAR shows all six sliders at once. Stage answers live in
//! transient maps owned by the session; completing a stage converts
//! them into a score and merges it into [`AssessmentData`], recomputing
//! the overall score and recommendation after every merge. Re-entering
//! an input stage resets its transient answers.

use crate::question_bank::{
    self, TechnicalSection, LIKERT_MAX, LIKERT_MIN, LIKERT_STATEMENTS, SLIDER_DEFAULT, SLIDER_MAX,
    TECHNICAL_SECTIONS,
};
use crate::scoring;
use crate::types::{AssessmentData, AssessmentError, WiscarDimension, WiscarScores};
use serde::Serialize;
use std::collections::HashMap;

/// One of the six top-level wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Introduction,
    Psychometric,
    Technical,
    Wiscar,
    Results,
    Guidance,
}

impl Stage {
    pub const COUNT: usize = 6;

    pub const ALL: [Stage; 6] = [
        Stage::Introduction,
        Stage::Psychometric,
        Stage::Technical,
        Stage::Wiscar,
        Stage::Results,
        Stage::Guidance,
    ];

    pub fn index(&self) -> usize {
        match self {
            Stage::Introduction => 0,
            Stage::Psychometric => 1,
            Stage::Technical => 2,
            Stage::Wiscar => 3,
            Stage::Results => 4,
            Stage::Guidance => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Introduction => "Introduction",
            Stage::Psychometric => "Psychometric",
            Stage::Technical => "Technical",
            Stage::Wiscar => "WISCAR",
            Stage::Results => "Results",
            Stage::Guidance => "Career Path",
        }
    }
}

/// Outcome of an [`AssessmentSession::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    Advanced,
    /// Gating condition unmet; state unchanged.
    Blocked,
    /// Already at the terminal stage.
    AtEnd,
}

/// Position within the wizard, for progress chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageProgress {
    pub stage_index: usize,
    pub stage_count: usize,
    pub sub_step: usize,
    pub sub_total: usize,
}

impl StageProgress {
    /// Whole-assessment completion percentage, counted by stage.
    pub fn percent(&self) -> u8 {
        (((self.stage_index + 1) as f64 / self.stage_count as f64) * 100.0).round() as u8
    }
}

/// Holds one assessment run: the current stage, the transient answer
/// maps, and the accumulated [`AssessmentData`].
pub struct AssessmentSession {
    stage: Stage,
    data: AssessmentData,
    statement_index: usize,
    ratings: HashMap<usize, u8>,
    section_index: usize,
    choices: HashMap<&'static str, usize>,
    sliders: WiscarScores,
}

impl AssessmentSession {
    pub fn new() -> AssessmentSession {
        AssessmentSession {
            stage: Stage::Introduction,
            data: AssessmentData::new(),
            statement_index: 0,
            ratings: HashMap::new(),
            section_index: 0,
            choices: HashMap::new(),
            sliders: WiscarScores::uniform(SLIDER_DEFAULT),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn data(&self) -> &AssessmentData {
        &self.data
    }

    pub fn statement_index(&self) -> usize {
        self.statement_index
    }

    pub fn current_statement(&self) -> &'static str {
        LIKERT_STATEMENTS[self.statement_index]
    }

    /// Rating recorded for the statement currently shown, if any.
    pub fn current_rating(&self) -> Option<u8> {
        self.ratings.get(&self.statement_index).copied()
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn current_section(&self) -> &'static TechnicalSection {
        &TECHNICAL_SECTIONS[self.section_index]
    }

    /// Chosen option index for a technical question, if any.
    pub fn choice(&self, id: &str) -> Option<usize> {
        self.choices.get(id).copied()
    }

    pub fn slider(&self, dimension: WiscarDimension) -> u8 {
        self.sliders.get(dimension)
    }

    pub fn progress(&self) -> StageProgress {
        let (sub_step, sub_total) = match self.stage {
            Stage::Psychometric => (self.statement_index, LIKERT_STATEMENTS.len()),
            Stage::Technical => (self.section_index, TECHNICAL_SECTIONS.len()),
            _ => (0, 1),
        };
        StageProgress {
            stage_index: self.stage.index(),
            stage_count: Stage::COUNT,
            sub_step,
            sub_total,
        }
    }

    /// Stores a rating for a Likert statement. Overwrites any prior
    /// rating for the same statement.
    pub fn record_rating(&mut self, index: usize, rating: u8) -> Result<(), AssessmentError> {
        if index >= LIKERT_STATEMENTS.len() {
            return Err(AssessmentError::UnknownStatement(index));
        }
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&rating) {
            return Err(AssessmentError::RatingOutOfRange {
                index,
                value: rating,
            });
        }
        self.ratings.insert(index, rating);
        Ok(())
    }

    /// Stores the chosen option for a technical question.
    pub fn record_choice(&mut self, id: &'static str, option: usize) -> Result<(), AssessmentError> {
        let question = question_bank::find_question(id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(id.to_string()))?;
        if option >= question.options.len() {
            return Err(AssessmentError::ChoiceOutOfRange { id, option });
        }
        self.choices.insert(id, option);
        Ok(())
    }

    /// Stores a slider value for a WISCAR dimension.
    pub fn record_slider(
        &mut self,
        dimension: WiscarDimension,
        value: u8,
    ) -> Result<(), AssessmentError> {
        if value > SLIDER_MAX {
            return Err(AssessmentError::ScoreOutOfRange {
                name: dimension.key(),
                value,
            });
        }
        self.sliders.set(dimension, value);
        Ok(())
    }

    /// Whether the current sub-step's gate is satisfied.
    pub fn can_advance(&self) -> bool {
        match self.stage {
            Stage::Psychometric => self.ratings.contains_key(&self.statement_index),
            Stage::Technical => self.section_complete(),
            Stage::Guidance => false,
            _ => true,
        }
    }

    /// Moves to the next sub-step or stage. Completing an input stage
    /// scores it and merges the result into the assessment data.
    pub fn advance(&mut self) -> Result<Progression, AssessmentError> {
        match self.stage {
            Stage::Introduction => {
                self.enter(Stage::Psychometric);
                Ok(Progression::Advanced)
            }
            Stage::Psychometric => {
                if !self.ratings.contains_key(&self.statement_index) {
                    return Ok(Progression::Blocked);
                }
                if self.statement_index + 1 < LIKERT_STATEMENTS.len() {
                    self.statement_index += 1;
                    return Ok(Progression::Advanced);
                }
                let score = scoring::psychometric_score(&self.ratings, LIKERT_STATEMENTS.len())?;
                self.data.psychometric_score = score;
                log::info!("[SCORE] Psychometric section complete: {}", score);
                self.refresh_overall()?;
                self.enter(Stage::Technical);
                Ok(Progression::Advanced)
            }
            Stage::Technical => {
                if !self.section_complete() {
                    return Ok(Progression::Blocked);
                }
                if self.section_index + 1 < TECHNICAL_SECTIONS.len() {
                    self.section_index += 1;
                    return Ok(Progression::Advanced);
                }
                let score = scoring::technical_score(&self.choices, &TECHNICAL_SECTIONS)?;
                self.data.technical_score = score;
                log::info!("[SCORE] Technical section complete: {}", score);
                self.refresh_overall()?;
                self.enter(Stage::Wiscar);
                Ok(Progression::Advanced)
            }
            Stage::Wiscar => {
                self.data.wiscar_scores = self.sliders;
                log::info!(
                    "[SCORE] WISCAR section complete: average {:.1}",
                    self.sliders.average()
                );
                self.refresh_overall()?;
                self.enter(Stage::Results);
                Ok(Progression::Advanced)
            }
            Stage::Results => {
                self.enter(Stage::Guidance);
                Ok(Progression::Advanced)
            }
            Stage::Guidance => Ok(Progression::AtEnd),
        }
    }

    /// Moves to the previous sub-step, or the previous stage from a
    /// stage's first sub-step. Returns false at Introduction.
    pub fn retreat(&mut self) -> bool {
        match self.stage {
            Stage::Introduction => false,
            Stage::Psychometric => {
                if self.statement_index > 0 {
                    self.statement_index -= 1;
                } else {
                    self.enter(Stage::Introduction);
                }
                true
            }
            Stage::Technical => {
                if self.section_index > 0 {
                    self.section_index -= 1;
                } else {
                    self.enter(Stage::Psychometric);
                }
                true
            }
            Stage::Wiscar => {
                self.enter(Stage::Technical);
                true
            }
            Stage::Results => {
                self.enter(Stage::Wiscar);
                true
            }
            Stage::Guidance => {
                self.enter(Stage::Results);
                true
            }
        }
    }

    /// Discards all answers and scores and returns to Introduction.
    pub fn restart(&mut self) {
        log::info!("[SESSION] Restarting assessment");
        *self = AssessmentSession::new();
    }

    fn section_complete(&self) -> bool {
        self.current_section()
            .questions
            .iter()
            .all(|q| self.choices.contains_key(q.id))
    }

    fn refresh_overall(&mut self) -> Result<(), AssessmentError> {
        let (overall, recommendation) = scoring::overall_score(
            self.data.psychometric_score,
            self.data.technical_score,
            &self.data.wiscar_scores,
        )?;
        self.data.overall_score = overall;
        self.data.recommendation = recommendation;
        log::info!(
            "[SCORE] Overall {} -> {}",
            overall,
            recommendation.as_str()
        );
        Ok(())
    }

    fn enter(&mut self, stage: Stage) {
        log::info!(
            "[SESSION] Stage {} -> {}",
            self.stage.title(),
            stage.title()
        );
        match stage {
            Stage::Psychometric => {
                self.statement_index = 0;
                self.ratings.clear();
            }
            Stage::Technical => {
                self.section_index = 0;
                self.choices.clear();
            }
            Stage::Wiscar => {
                self.sliders = WiscarScores::uniform(SLIDER_DEFAULT);
            }
            _ => {}
        }
        self.stage = stage;
    }
}

impl Default for AssessmentSession {
    fn default() -> AssessmentSession {
        AssessmentSession::new()
    }
}
