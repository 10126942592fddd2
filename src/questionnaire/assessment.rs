//! Self-assessment questionnaire: four 1-to-5 questions per center.
//!
//! Higher answers mean a healthier center. Per center the mean answer `a`
//! becomes `frequency = balance = round((a - 1) * 20 + 20)` and
//! `blockage = round((6 - a) * 15 + 10)`, each clamped to `[0, 100]`.
//! Unanswered questions count as the neutral answer 3.

use std::collections::HashMap;

use super::{find_question, Question, QuestionnaireError};
use crate::profile::{EnergyCenter, EnergyCenterReading, EnergyCenterReadings};

/// Answer assumed for questions left blank.
pub const NEUTRAL_ANSWER: i64 = 3;

const MIN_ANSWER: i64 = 1;
const MAX_ANSWER: i64 = 5;

const fn q(id: &'static str, center: EnergyCenter, text: &'static str) -> Question {
    Question { id, center, text }
}

/// The 28 self-assessment questions, grouped by center in canonical order.
pub const ASSESSMENT_QUESTIONS: [Question; 28] = [
    q("financial_security", EnergyCenter::Root, "How secure do you feel about your financial situation?"),
    q("physical_safety", EnergyCenter::Root, "How safe do you feel in your living environment?"),
    q("basic_needs", EnergyCenter::Root, "How well are your basic needs (food, shelter, healthcare) met?"),
    q("family_support", EnergyCenter::Root, "How connected do you feel to your family/ancestral roots?"),
    q("creativity_expression", EnergyCenter::Sacral, "How freely do you express your creativity?"),
    q("emotional_expression", EnergyCenter::Sacral, "How comfortable are you expressing emotions?"),
    q("intimate_relationships", EnergyCenter::Sacral, "How fulfilling are your intimate relationships?"),
    q("pleasure_guilt", EnergyCenter::Sacral, "How do you relate to pleasure and enjoyment?"),
    q("self_confidence", EnergyCenter::SolarPlexus, "How confident do you feel in making decisions?"),
    q("personal_power", EnergyCenter::SolarPlexus, "How empowered do you feel in your life?"),
    q("boundaries", EnergyCenter::SolarPlexus, "How well do you maintain healthy boundaries?"),
    q("self_worth", EnergyCenter::SolarPlexus, "How do you feel about your self-worth and value?"),
    q("self_love", EnergyCenter::Heart, "How much compassion do you have for yourself?"),
    q("forgiveness", EnergyCenter::Heart, "How easily can you forgive others and yourself?"),
    q("relationships", EnergyCenter::Heart, "How fulfilling are your close relationships?"),
    q("compassion_others", EnergyCenter::Heart, "How easily do you feel compassion for others?"),
    q("authentic_expression", EnergyCenter::Throat, "How authentically do you express yourself?"),
    q("speaking_truth", EnergyCenter::Throat, "How comfortable are you speaking your truth?"),
    q("listening_skills", EnergyCenter::Throat, "How well do you listen to others?"),
    q("creative_voice", EnergyCenter::Throat, "How much do you use your voice creatively (singing, writing, etc.)?"),
    q("intuitive_trust", EnergyCenter::ThirdEye, "How much do you trust your intuition?"),
    q("mental_clarity", EnergyCenter::ThirdEye, "How clear is your thinking and mental focus?"),
    q("spiritual_insight", EnergyCenter::ThirdEye, "How often do you experience spiritual insights or \"aha\" moments?"),
    q("imagination_dreams", EnergyCenter::ThirdEye, "How active are your imagination and dream life?"),
    q("spiritual_connection", EnergyCenter::Crown, "How connected do you feel to something greater than yourself?"),
    q("life_purpose", EnergyCenter::Crown, "How clear are you about your life's purpose and meaning?"),
    q("transcendent_experiences", EnergyCenter::Crown, "How often do you experience states of transcendence or unity?"),
    q("wisdom_understanding", EnergyCenter::Crown, "How much do you feel you understand about life and existence?"),
];

/// Convert self-assessment answers (question id -> 1..=5) into readings for
/// all seven centers.
pub fn readings_from_responses(
    responses: &HashMap<String, i64>,
) -> Result<EnergyCenterReadings, QuestionnaireError> {
    for (id, &value) in responses {
        find_question(&ASSESSMENT_QUESTIONS, id)?;
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(QuestionnaireError::AnswerOutOfRange {
                id: id.clone(),
                value,
            });
        }
    }

    Ok(EnergyCenter::ALL
        .iter()
        .map(|&center| {
            let answers: Vec<i64> = ASSESSMENT_QUESTIONS
                .iter()
                .filter(|q| q.center == center)
                .map(|q| responses.get(q.id).copied().unwrap_or(NEUTRAL_ANSWER))
                .collect();
            let mean = answers.iter().sum::<i64>() as f64 / answers.len() as f64;
            (center, reading_from_mean(mean))
        })
        .collect())
}

fn reading_from_mean(mean: f64) -> EnergyCenterReading {
    let scaled = to_reading_value((mean - 1.0) * 20.0 + 20.0);
    let blockage = to_reading_value((6.0 - mean) * 15.0 + 10.0);
    EnergyCenterReading::new(scaled, scaled, blockage)
}

fn to_reading_value(raw: f64) -> i32 {
    (raw.round() as i32).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_answers(value: i64) -> HashMap<String, i64> {
        ASSESSMENT_QUESTIONS
            .iter()
            .map(|q| (q.id.to_string(), value))
            .collect()
    }

    #[test]
    fn test_four_questions_per_center() {
        for center in EnergyCenter::ALL {
            let count = ASSESSMENT_QUESTIONS
                .iter()
                .filter(|q| q.center == center)
                .count();
            assert_eq!(count, 4, "{center}");
        }
    }

    #[test]
    fn test_all_fives_give_top_readings() {
        let readings = readings_from_responses(&all_answers(5)).unwrap();
        for (_, reading) in readings.iter() {
            assert_eq!(*reading, EnergyCenterReading::new(100, 100, 25));
        }
        assert!(readings.validate().is_ok());
    }

    #[test]
    fn test_all_ones_give_low_readings() {
        let readings = readings_from_responses(&all_answers(1)).unwrap();
        assert_eq!(
            readings.get(EnergyCenter::Heart),
            Some(&EnergyCenterReading::new(20, 20, 85))
        );
    }

    #[test]
    fn test_empty_responses_default_to_neutral() {
        let readings = readings_from_responses(&HashMap::new()).unwrap();
        assert_eq!(readings.len(), 7);
        assert_eq!(
            readings.get(EnergyCenter::Root),
            Some(&EnergyCenterReading::new(60, 60, 55))
        );
    }

    #[test]
    fn test_half_values_round_up() {
        // mean 3.5 -> blockage 2.5 * 15 + 10 = 47.5 -> 48
        let mut responses = HashMap::new();
        responses.insert("financial_security".to_string(), 4);
        responses.insert("physical_safety".to_string(), 4);
        responses.insert("basic_needs".to_string(), 3);
        responses.insert("family_support".to_string(), 3);
        let readings = readings_from_responses(&responses).unwrap();
        assert_eq!(
            readings.get(EnergyCenter::Root),
            Some(&EnergyCenterReading::new(70, 70, 48))
        );
    }

    #[test]
    fn test_rejects_unknown_question() {
        let mut responses = HashMap::new();
        responses.insert("favourite_colour".to_string(), 3);
        assert_eq!(
            readings_from_responses(&responses),
            Err(QuestionnaireError::UnknownQuestion("favourite_colour".into()))
        );
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let mut responses = HashMap::new();
        responses.insert("self_love".to_string(), 6);
        assert!(matches!(
            readings_from_responses(&responses),
            Err(QuestionnaireError::AnswerOutOfRange { value: 6, .. })
        ));
    }
}
