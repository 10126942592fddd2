//! Blockage questionnaire: how often symptoms of a blocked center show up.
//!
//! Answers score `Rarely` 0, `Sometimes` 1, `Often` 2, `Very Often` 3, summed
//! per center. Every center with a positive score gets a general line, an
//! extra line at score 4 or more, and one practice for each tier from 1 to 5
//! that the score reaches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{find_question, Question, QuestionnaireError};
use crate::profile::EnergyCenter;

/// Score at which a center is flagged for deeper work.
pub const SIGNIFICANT_BLOCKAGE: u32 = 4;

/// How often a symptom is experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockageAnswer {
    Rarely,
    Sometimes,
    Often,
    #[serde(rename = "Very Often")]
    VeryOften,
}

impl BlockageAnswer {
    pub fn points(&self) -> u32 {
        match self {
            Self::Rarely => 0,
            Self::Sometimes => 1,
            Self::Often => 2,
            Self::VeryOften => 3,
        }
    }
}

/// Scored recommendations for one center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterRecommendations {
    pub center: EnergyCenter,
    pub chakra: &'static str,
    pub score: u32,
    pub recommendations: Vec<String>,
}

const fn q(id: &'static str, center: EnergyCenter, text: &'static str) -> Question {
    Question { id, center, text }
}

/// The 28 blockage questions, grouped by center in canonical order.
pub const BLOCKAGE_QUESTIONS: [Question; 28] = [
    q("root-security-money", EnergyCenter::Root, "Do you worry excessively about money or financial security?"),
    q("root-security-safety", EnergyCenter::Root, "Do you feel unsafe or vulnerable in your environment?"),
    q("root-stability-grounded", EnergyCenter::Root, "Do you feel ungrounded or disconnected from your body?"),
    q("root-stability-belonging", EnergyCenter::Root, "Do you struggle with a sense of belonging or feeling at home?"),
    q("sacral-creativity-expression", EnergyCenter::Sacral, "Do you have difficulty expressing your creativity?"),
    q("sacral-emotions-flow", EnergyCenter::Sacral, "Do you suppress your emotions or find it hard to feel them fully?"),
    q("sacral-pleasure-intimacy", EnergyCenter::Sacral, "Do you struggle with intimacy or experiencing pleasure?"),
    q("sacral-pleasure-guilt", EnergyCenter::Sacral, "Do you feel guilty or ashamed about pleasure?"),
    q("solar-power-selfesteem", EnergyCenter::SolarPlexus, "Do you have low self-esteem or lack confidence?"),
    q("solar-power-willpower", EnergyCenter::SolarPlexus, "Do you struggle with willpower or taking action?"),
    q("solar-control-need", EnergyCenter::SolarPlexus, "Do you feel a strong need to control situations or people?"),
    q("solar-control-anger", EnergyCenter::SolarPlexus, "Do you experience frequent anger or frustration?"),
    q("heart-love-giving", EnergyCenter::Heart, "Do you find it hard to give love or compassion to yourself or others?"),
    q("heart-love-receiving", EnergyCenter::Heart, "Do you find it hard to receive love or affection?"),
    q("heart-connection-isolation", EnergyCenter::Heart, "Do you feel isolated or disconnected from others?"),
    q("heart-connection-trust", EnergyCenter::Heart, "Do you have difficulty trusting others?"),
    q("throat-expression-truth", EnergyCenter::Throat, "Do you find it difficult to speak your truth or express yourself honestly?"),
    q("throat-expression-fear", EnergyCenter::Throat, "Do you fear judgment or criticism when expressing yourself?"),
    q("throat-listening-difficulty", EnergyCenter::Throat, "Do you struggle to listen to others or receive feedback?"),
    q("throat-listening-interrupting", EnergyCenter::Throat, "Do you tend to interrupt others when they are speaking?"),
    q("third-intuition-trust", EnergyCenter::ThirdEye, "Do you struggle to trust your intuition or inner guidance?"),
    q("third-intuition-dreams", EnergyCenter::ThirdEye, "Do you have difficulty remembering or understanding your dreams?"),
    q("third-clarity-direction", EnergyCenter::ThirdEye, "Do you lack clarity or feel unsure about your life path?"),
    q("third-clarity-vision", EnergyCenter::ThirdEye, "Do you struggle with visualization or creative imagination?"),
    q("crown-connection-spiritual", EnergyCenter::Crown, "Do you feel disconnected from a higher power or spiritual source?"),
    q("crown-connection-purpose", EnergyCenter::Crown, "Do you question your life's purpose or feel a lack of meaning?"),
    q("crown-awareness-present", EnergyCenter::Crown, "Do you have difficulty being present in the moment?"),
    q("crown-awareness-oneness", EnergyCenter::Crown, "Do you struggle to feel a sense of connection to all things?"),
];

/// Tiered practices per center; entry `i` applies once the score reaches `i + 1`.
const TIERED_PRACTICES: [[&str; 5]; 7] = [
    [
        "Meditate on the color red or the Muladhara mantra LAM.",
        "Engage in grounding activities like walking in nature, gardening, or yoga poses such as Mountain Pose or Warrior I.",
        "Use grounding crystals like Red Jasper, Black Tourmaline, or Hematite.",
        "Explore journaling about your sense of safety, security, and belonging.",
        "Consider working with a therapist to address deep-seated fears or insecurities.",
    ],
    [
        "Meditate on the color orange or the Svadhisthana mantra VAM.",
        "Engage in creative activities like painting, drawing, writing, or playing music.",
        "Practice mindful movement or dance to connect with your body and emotions.",
        "Use sacral chakra crystals like Carnelian, Orange Calcite, or Sunstone.",
        "Explore healthy expressions of sensuality and pleasure without guilt.",
    ],
    [
        "Meditate on the color yellow or the Manipura mantra RAM.",
        "Practice affirmations for self-esteem and personal power.",
        "Engage in core-strengthening exercises or yoga poses like Boat Pose or Warrior III.",
        "Use solar plexus crystals like Citrine, Tiger's Eye, or Yellow Jasper.",
        "Work with a coach or therapist to address control issues, boundaries, and assertiveness.",
    ],
    [
        "Meditate on the color green or the Anahata mantra YAM.",
        "Practice loving-kindness meditation towards yourself and others.",
        "Engage in acts of service and compassion.",
        "Use heart chakra crystals like Rose Quartz, Green Aventurine, or Emerald.",
        "Explore forgiveness practices for deep emotional healing and releasing grudges.",
    ],
    [
        "Meditate on the color blue or the Vishuddha mantra HAM.",
        "Practice vocal exercises, singing, chanting, or humming.",
        "Journaling or writing down your thoughts and feelings.",
        "Practice mindful listening and assertive, honest communication.",
        "Consider working with a speech therapist or communication coach.",
    ],
    [
        "Meditate on the color indigo or the Ajna mantra OM.",
        "Engage in meditation and mindfulness practices to quiet the mind.",
        "Pay attention to your dreams, synchronicities, and intuitive nudges.",
        "Use third eye crystals like Amethyst, Lapis Lazuli, or Sodalite.",
        "Explore practices like visualization and creative imagination exercises.",
    ],
    [
        "Meditate on the color violet or white, or the Sahasrara mantra OM.",
        "Engage in spiritual practices such as meditation, prayer, or contemplation.",
        "Spend time in nature and cultivate a sense of awe and wonder.",
        "Seek knowledge and wisdom from spiritual texts or teachers.",
        "Practice being present in the moment and cultivating a sense of oneness.",
    ],
];

/// Score blockage answers and build recommendations for every center with a
/// positive score, in canonical order. Unanswered questions score zero.
pub fn recommend(
    answers: &HashMap<String, BlockageAnswer>,
) -> Result<Vec<CenterRecommendations>, QuestionnaireError> {
    let mut scores = [0u32; 7];
    for (id, answer) in answers {
        let question = find_question(&BLOCKAGE_QUESTIONS, id)?;
        scores[question.center as usize] += answer.points();
    }

    Ok(EnergyCenter::ALL
        .iter()
        .filter(|c| scores[**c as usize] > 0)
        .map(|&center| {
            let score = scores[center as usize];
            CenterRecommendations {
                center,
                chakra: center.chakra_name(),
                score,
                recommendations: recommendations_for(center, score),
            }
        })
        .collect())
}

fn recommendations_for(center: EnergyCenter, score: u32) -> Vec<String> {
    let name = center.chakra_name();
    let mut lines = vec![format!("Focus on practices to balance your {name}.")];
    if score >= SIGNIFICANT_BLOCKAGE {
        lines.push(format!(
            "Consider deeper exploration and dedicated practices for {name} healing."
        ));
    }
    lines.extend(
        TIERED_PRACTICES[center as usize]
            .iter()
            .take(score.min(5) as usize)
            .map(|s| s.to_string()),
    );
    lines
}
