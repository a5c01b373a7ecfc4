//! Score aggregation.
//!
//! Three published scores, all integers in [0, 100]:
//!
//!   psychometric = round(sum(ratings) / (count * 5) * 100)
//!   technical    = round(correct / total * 100)
//!   overall      = round((psychometric + technical + wiscar_average) / 3)
//!
//! where wiscar_average is the unrounded mean of the six WISCAR slider
//! values. The recommendation tier is a pure function of the overall
//! score. Missing answers and out-of-range inputs are contract
//! violations and return errors; nothing here clamps or under-scores.

use crate::question_bank::{TechnicalSection, LIKERT_MAX, LIKERT_MIN};
use crate::types::{AssessmentError, Recommendation, WiscarScores};
use serde::Serialize;
use std::collections::HashMap;

/// Scores the Likert section. `ratings` must hold one entry in
/// [1, 5] for every statement index in `[0, question_count)`.
pub fn psychometric_score(
    ratings: &HashMap<usize, u8>,
    question_count: usize,
) -> Result<u8, AssessmentError> {
    if question_count == 0 {
        return Ok(0);
    }

    let mut sum: u32 = 0;
    for index in 0..question_count {
        let rating = *ratings
            .get(&index)
            .ok_or(AssessmentError::MissingRating(index))?;
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&rating) {
            return Err(AssessmentError::RatingOutOfRange {
                index,
                value: rating,
            });
        }
        sum += rating as u32;
    }

    let max = (question_count as f64) * (LIKERT_MAX as f64);
    Ok(((sum as f64 / max) * 100.0).round() as u8)
}

/// Scores the technical section. `choices` must hold one entry for
/// every question id, with the chosen option index in range.
pub fn technical_score(
    choices: &HashMap<&'static str, usize>,
    sections: &[TechnicalSection],
) -> Result<u8, AssessmentError> {
    let mut total: u32 = 0;
    let mut correct: u32 = 0;
    for section in sections {
        for question in section.questions {
            let chosen = *choices
                .get(question.id)
                .ok_or(AssessmentError::MissingChoice(question.id))?;
            if chosen >= question.options.len() {
                return Err(AssessmentError::ChoiceOutOfRange {
                    id: question.id,
                    option: chosen,
                });
            }
            total += 1;
            if chosen == question.correct {
                correct += 1;
            }
        }
    }

    if total == 0 {
        return Ok(0);
    }
    Ok(((correct as f64 / total as f64) * 100.0).round() as u8)
}

/// Combines the three section scores into the overall score and its
/// recommendation tier.
pub fn overall_score(
    psychometric: u8,
    technical: u8,
    wiscar: &WiscarScores,
) -> Result<(u8, Recommendation), AssessmentError> {
    check_range("psychometric", psychometric)?;
    check_range("technical", technical)?;
    for (dimension, value) in crate::types::WiscarDimension::ALL
        .iter()
        .zip(wiscar.as_array().iter())
    {
        check_range(dimension.key(), *value)?;
    }

    let mean = (psychometric as f64 + technical as f64 + wiscar.average()) / 3.0;
    let overall = mean.round() as u8;
    Ok((overall, Recommendation::from_overall(overall)))
}

fn check_range(name: &'static str, value: u8) -> Result<(), AssessmentError> {
    if value > 100 {
        return Err(AssessmentError::ScoreOutOfRange { name, value });
    }
    Ok(())
}

/// Severity of the shortfall between a provided and a required score.
/// Display-only; never feeds the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapLevel {
    None,     // gap <= 0
    Low,      // 1..=15
    Moderate, // 16..=30
    High,     // 31..
}

impl GapLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapLevel::None => "None",
            GapLevel::Low => "Low",
            GapLevel::Moderate => "Moderate",
            GapLevel::High => "High",
        }
    }
}

/// Classifies `required - provided`.
pub fn skill_gap(provided: u8, required: u8) -> GapLevel {
    let gap = required as i16 - provided as i16;
    if gap <= 0 {
        GapLevel::None
    } else if gap <= 15 {
        GapLevel::Low
    } else if gap <= 30 {
        GapLevel::Moderate
    } else {
        GapLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_bank::{technical_question_count, LIKERT_STATEMENTS, TECHNICAL_SECTIONS};

    fn uniform_ratings(rating: u8) -> HashMap<usize, u8> {
        (0..LIKERT_STATEMENTS.len()).map(|i| (i, rating)).collect()
    }

    fn all_correct() -> HashMap<&'static str, usize> {
        TECHNICAL_SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter())
            .map(|q| (q.id, q.correct))
            .collect()
    }

    fn all_wrong() -> HashMap<&'static str, usize> {
        TECHNICAL_SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter())
            .map(|q| (q.id, (q.correct + 1) % q.options.len()))
            .collect()
    }

    #[test]
    fn test_psychometric_bounds() {
        assert_eq!(psychometric_score(&uniform_ratings(1), 15), Ok(20));
        assert_eq!(psychometric_score(&uniform_ratings(5), 15), Ok(100));
        assert_eq!(psychometric_score(&uniform_ratings(4), 15), Ok(80));
    }

    #[test]
    fn test_psychometric_rounds_to_nearest() {
        // 7 fours and 8 threes: 52/75 = 69.33 -> 69
        let mut ratings = HashMap::new();
        for i in 0..7 {
            ratings.insert(i, 4);
        }
        for i in 7..15 {
            ratings.insert(i, 3);
        }
        assert_eq!(psychometric_score(&ratings, 15), Ok(69));
    }

    #[test]
    fn test_psychometric_missing_rating_is_error() {
        let mut ratings = uniform_ratings(3);
        ratings.remove(&4);
        assert_eq!(
            psychometric_score(&ratings, 15),
            Err(AssessmentError::MissingRating(4))
        );
    }

    #[test]
    fn test_psychometric_out_of_range_is_error() {
        let mut ratings = uniform_ratings(3);
        ratings.insert(2, 6);
        assert_eq!(
            psychometric_score(&ratings, 15),
            Err(AssessmentError::RatingOutOfRange { index: 2, value: 6 })
        );
    }

    #[test]
    fn test_psychometric_empty_bank() {
        assert_eq!(psychometric_score(&HashMap::new(), 0), Ok(0));
    }

    #[test]
    fn test_technical_bounds() {
        assert_eq!(technical_score(&all_correct(), &TECHNICAL_SECTIONS), Ok(100));
        assert_eq!(technical_score(&all_wrong(), &TECHNICAL_SECTIONS), Ok(0));
    }

    #[test]
    fn test_technical_monotone_in_correct_count() {
        let mut previous = 0;
        let mut choices = all_wrong();
        let ids: Vec<&'static str> = TECHNICAL_SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.id))
            .collect();
        for id in ids {
            let question = crate::question_bank::find_question(id).unwrap();
            choices.insert(id, question.correct);
            let score = technical_score(&choices, &TECHNICAL_SECTIONS).unwrap();
            assert!(score >= previous, "score dropped after fixing {}", id);
            previous = score;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_technical_partial_credit_rounds() {
        // 6 of 9 correct: 66.67 -> 67
        let mut choices = all_correct();
        let wrong = all_wrong();
        for id in ["aptitude_1", "tech_2", "sf_3"] {
            choices.insert(id, wrong[id]);
        }
        assert_eq!(technical_score(&choices, &TECHNICAL_SECTIONS), Ok(67));
        assert_eq!(technical_question_count(), 9);
    }

    #[test]
    fn test_technical_missing_choice_is_error() {
        let mut choices = all_correct();
        choices.remove("tech_1");
        assert_eq!(
            technical_score(&choices, &TECHNICAL_SECTIONS),
            Err(AssessmentError::MissingChoice("tech_1"))
        );
    }

    #[test]
    fn test_technical_choice_out_of_range_is_error() {
        let mut choices = all_correct();
        choices.insert("sf_1", 9);
        assert_eq!(
            technical_score(&choices, &TECHNICAL_SECTIONS),
            Err(AssessmentError::ChoiceOutOfRange {
                id: "sf_1",
                option: 9
            })
        );
    }

    #[test]
    fn test_overall_unweighted_mean() {
        let (overall, tier) = overall_score(80, 100, &WiscarScores::uniform(60)).unwrap();
        assert_eq!(overall, 80);
        assert_eq!(tier, Recommendation::Yes);

        // Permuting the three inputs does not change the result.
        let (permuted, _) = overall_score(100, 60, &WiscarScores::uniform(80)).unwrap();
        assert_eq!(permuted, 80);
    }

    #[test]
    fn test_overall_uses_unrounded_wiscar_mean() {
        // wiscar average 50.8333; (60 + 60 + 50.8333) / 3 = 56.94 -> 57
        let mut wiscar = WiscarScores::uniform(50);
        wiscar.will = 55;
        let (overall, tier) = overall_score(60, 60, &wiscar).unwrap();
        assert_eq!(overall, 57);
        assert_eq!(tier, Recommendation::Maybe);
    }

    #[test]
    fn test_overall_tier_boundaries() {
        let cases = [
            (75, Recommendation::Yes),
            (74, Recommendation::Maybe),
            (55, Recommendation::Maybe),
            (54, Recommendation::No),
        ];
        for (target, expected) in cases {
            let (overall, tier) =
                overall_score(target, target, &WiscarScores::uniform(target)).unwrap();
            assert_eq!(overall, target);
            assert_eq!(tier, expected, "tier mismatch at {}", target);
        }
    }

    #[test]
    fn test_overall_rejects_out_of_range_inputs() {
        assert_eq!(
            overall_score(101, 50, &WiscarScores::uniform(50)),
            Err(AssessmentError::ScoreOutOfRange {
                name: "psychometric",
                value: 101
            })
        );
        let mut wiscar = WiscarScores::uniform(50);
        wiscar.cognitive = 120;
        assert_eq!(
            overall_score(50, 50, &wiscar),
            Err(AssessmentError::ScoreOutOfRange {
                name: "cognitive",
                value: 120
            })
        );
    }

    #[test]
    fn test_skill_gap_levels() {
        assert_eq!(skill_gap(80, 70), GapLevel::None);
        assert_eq!(skill_gap(70, 70), GapLevel::None);
        assert_eq!(skill_gap(60, 70), GapLevel::Low);
        assert_eq!(skill_gap(55, 70), GapLevel::Low);
        assert_eq!(skill_gap(45, 70), GapLevel::Moderate);
        assert_eq!(skill_gap(40, 70), GapLevel::Moderate);
        assert_eq!(skill_gap(30, 70), GapLevel::High);
        assert_eq!(skill_gap(0, 100), GapLevel::High);
    }

    #[test]
    fn test_gap_labels() {
        assert_eq!(GapLevel::None.as_str(), "None");
        assert_eq!(GapLevel::High.as_str(), "High");
    }
}
