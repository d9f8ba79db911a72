use serde::{Deserialize, Serialize};

/// Quiz categories matching the frontend filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizCategory {
    Math,
    Bengali,
    Sports,
    General,
}

impl std::fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Math => "Math",
            Self::Bengali => "Bengali",
            Self::Sports => "Sports",
            Self::General => "General",
        };
        f.write_str(name)
    }
}

/// One-time quiz task. Answering correctly credits `reward` and marks the
/// id permanently completed; a wrong answer leaves it re-attemptable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub category: QuizCategory,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub reward: f64,
}

impl QuizQuestion {
    pub fn new(
        id: &str,
        category: QuizCategory,
        question: &str,
        options: &[&str],
        answer: &str,
        reward: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            reward,
        }
    }
}
