use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    ConfigError, QuizCategory, QuizQuestion, WheelSegment, DEFAULT_GLOBAL_NOTICE,
    DEFAULT_INITIAL_BALANCE, DEFAULT_MAX_WITHDRAWAL, DEFAULT_MIN_WITHDRAWAL,
    DEFAULT_REFERRAL_BONUS,
};

/// Admin-controlled configuration singleton.
///
/// Gates feature availability, bounds withdrawal amounts, supplies quiz
/// content, and parametrizes the spin wheel. Every read merges the persisted
/// partial blob onto these defaults, so fields added after a blob was written
/// still show up with their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Global kill switch for all mutating actions.
    pub maintenance_mode: bool,
    pub min_withdrawal: f64,
    pub max_withdrawal: f64,
    pub global_notice: String,
    pub is_notice_visible: bool,
    /// Seed balance for first-time profiles.
    pub initial_balance: f64,
    pub referral_bonus: f64,
    pub is_daily_income_enabled: bool,
    pub is_lucky_spin_enabled: bool,
    pub is_referral_enabled: bool,
    pub spin_wheel_rewards: Vec<WheelSegment>,
    pub quiz_questions: Vec<QuizQuestion>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            max_withdrawal: DEFAULT_MAX_WITHDRAWAL,
            global_notice: DEFAULT_GLOBAL_NOTICE.to_string(),
            is_notice_visible: true,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            referral_bonus: DEFAULT_REFERRAL_BONUS,
            is_daily_income_enabled: true,
            is_lucky_spin_enabled: true,
            is_referral_enabled: true,
            spin_wheel_rewards: default_wheel(),
            quiz_questions: default_quizzes(),
        }
    }
}

/// Partial settings overlay.
///
/// Deserialized from persisted blobs (which may predate newer fields) and
/// from admin panel saves. `None` means "keep the current value"; sequences
/// are wholesale-replaced when present, never element-merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_withdrawal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_withdrawal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_notice_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_daily_income_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lucky_spin_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_referral_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_wheel_rewards: Option<Vec<WheelSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_questions: Option<Vec<QuizQuestion>>,
}

impl Settings {
    /// Overlay a partial patch on top of these settings.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.maintenance_mode {
            self.maintenance_mode = v;
        }
        if let Some(v) = patch.min_withdrawal {
            self.min_withdrawal = v;
        }
        if let Some(v) = patch.max_withdrawal {
            self.max_withdrawal = v;
        }
        if let Some(v) = patch.global_notice {
            self.global_notice = v;
        }
        if let Some(v) = patch.is_notice_visible {
            self.is_notice_visible = v;
        }
        if let Some(v) = patch.initial_balance {
            self.initial_balance = v;
        }
        if let Some(v) = patch.referral_bonus {
            self.referral_bonus = v;
        }
        if let Some(v) = patch.is_daily_income_enabled {
            self.is_daily_income_enabled = v;
        }
        if let Some(v) = patch.is_lucky_spin_enabled {
            self.is_lucky_spin_enabled = v;
        }
        if let Some(v) = patch.is_referral_enabled {
            self.is_referral_enabled = v;
        }
        if let Some(v) = patch.spin_wheel_rewards {
            self.spin_wheel_rewards = v;
        }
        if let Some(v) = patch.quiz_questions {
            self.quiz_questions = v;
        }
    }

    /// Check the invariants enforced at the settings-write boundary.
    ///
    /// Numeric fields must be finite: `NaN` slips past ordering comparisons
    /// (`NaN > x` and `NaN < x` are both false), which would disarm the
    /// withdrawal bounds checks downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("minWithdrawal", self.min_withdrawal),
            ("maxWithdrawal", self.max_withdrawal),
            ("initialBalance", self.initial_balance),
            ("referralBonus", self.referral_bonus),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.min_withdrawal < 0.0 {
            return Err(ConfigError::NegativeMinimum {
                min: self.min_withdrawal,
            });
        }
        if self.min_withdrawal > self.max_withdrawal {
            return Err(ConfigError::BoundsInverted {
                min: self.min_withdrawal,
                max: self.max_withdrawal,
            });
        }
        if self.spin_wheel_rewards.is_empty() {
            return Err(ConfigError::EmptyWheel);
        }
        for (index, segment) in self.spin_wheel_rewards.iter().enumerate() {
            if !segment.value.is_finite() {
                return Err(ConfigError::NonFiniteSegmentValue { index });
            }
        }
        if self.quiz_questions.is_empty() {
            return Err(ConfigError::NoQuizQuestions);
        }
        let mut seen = HashSet::new();
        for quiz in &self.quiz_questions {
            if !seen.insert(quiz.id.as_str()) {
                return Err(ConfigError::DuplicateQuizId {
                    id: quiz.id.clone(),
                });
            }
            if quiz.options.len() < 2 {
                return Err(ConfigError::TooFewOptions {
                    id: quiz.id.clone(),
                    got: quiz.options.len(),
                });
            }
            if !quiz.options.contains(&quiz.answer) {
                return Err(ConfigError::AnswerNotInOptions {
                    id: quiz.id.clone(),
                });
            }
            if !quiz.reward.is_finite() {
                return Err(ConfigError::NonFiniteReward {
                    id: quiz.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Distinct quiz categories in content order, for building filter chips.
    pub fn quiz_categories(&self) -> Vec<QuizCategory> {
        let mut seen = HashSet::new();
        self.quiz_questions
            .iter()
            .map(|q| q.category)
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

fn default_wheel() -> Vec<WheelSegment> {
    vec![
        WheelSegment::new(5.0, "#6366f1", "৳5"),
        WheelSegment::new(0.0, "#1e293b", "৳0"),
        WheelSegment::new(10.0, "#a855f7", "৳10"),
        WheelSegment::new(1.0, "#4f46e5", "৳1"),
        WheelSegment::new(5.0, "#8b5cf6", "৳5"),
        WheelSegment::new(0.0, "#334155", "৳0"),
        WheelSegment::new(1.0, "#6366f1", "৳1"),
        WheelSegment::new(10.0, "#7c3aed", "৳10"),
    ]
}

fn default_quizzes() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "m1",
            QuizCategory::Math,
            "12 + 48 = ?",
            &["50", "60", "70", "68"],
            "60",
            1.0,
        ),
        QuizQuestion::new(
            "m2",
            QuizCategory::Math,
            "150 + 250 = ?",
            &["300", "400", "450", "500"],
            "400",
            1.0,
        ),
        QuizQuestion::new(
            "b1",
            QuizCategory::Bengali,
            "What is the national fruit of Bangladesh?",
            &["Mango", "Jackfruit", "Litchi", "Guava"],
            "Jackfruit",
            1.0,
        ),
        QuizQuestion::new(
            "b2",
            QuizCategory::Bengali,
            "Who wrote the national anthem?",
            &["Nazrul", "Jashimuddin", "Tagore", "Lalon"],
            "Tagore",
            1.0,
        ),
        QuizQuestion::new(
            "s1",
            QuizCategory::Sports,
            "How many players are in a football team?",
            &["10", "11", "12", "9"],
            "11",
            1.0,
        ),
        QuizQuestion::new(
            "s2",
            QuizCategory::Sports,
            "Which country won the 2023 Cricket World Cup?",
            &["India", "Australia", "South Africa", "England"],
            "Australia",
            1.0,
        ),
        QuizQuestion::new(
            "s3",
            QuizCategory::Sports,
            "How many goals in a Hat-trick?",
            &["2", "3", "4", "5"],
            "3",
            1.0,
        ),
    ]
}
