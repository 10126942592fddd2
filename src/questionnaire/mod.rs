//! Questionnaire helpers that sit in front of profile derivation.
//!
//! - [`assessment`]: 1-to-5 self-assessment answers converted into readings
//! - [`blockage`]: frequency-of-symptom answers scored into tiered practices

pub mod assessment;
pub mod blockage;

use serde::Serialize;
use thiserror::Error;

pub use assessment::{readings_from_responses, ASSESSMENT_QUESTIONS};
pub use blockage::{recommend, BlockageAnswer, CenterRecommendations, BLOCKAGE_QUESTIONS};

use crate::profile::EnergyCenter;

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub center: EnergyCenter,
    pub text: &'static str,
}

/// Errors raised while scoring questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Answer for '{id}' must be between 1 and 5, got {value}")]
    AnswerOutOfRange { id: String, value: i64 },
}

pub(crate) fn find_question<'a>(
    questions: &'a [Question],
    id: &str,
) -> Result<&'a Question, QuestionnaireError> {
    questions
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| QuestionnaireError::UnknownQuestion(id.to_string()))
}
