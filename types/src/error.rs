use thiserror::Error;

/// Rejections raised when an admin save would persist inconsistent settings.
///
/// The previous valid settings remain in effect whenever one of these fires.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("minimum withdrawal must not be negative (got {min})")]
    NegativeMinimum { min: f64 },
    #[error("withdrawal bounds inverted (min={min}, max={max})")]
    BoundsInverted { min: f64, max: f64 },
    #[error("wheel segment {index} value must be a finite number")]
    NonFiniteSegmentValue { index: usize },
    #[error("quiz '{id}' reward must be a finite number")]
    NonFiniteReward { id: String },
    #[error("spin wheel must have at least one segment")]
    EmptyWheel,
    #[error("quiz question list must not be empty")]
    NoQuizQuestions,
    #[error("duplicate quiz id '{id}'")]
    DuplicateQuizId { id: String },
    #[error("quiz '{id}' needs at least 2 options (got {got})")]
    TooFewOptions { id: String, got: usize },
    #[error("quiz '{id}' answer is not one of its options")]
    AnswerNotInOptions { id: String },
}

/// Rejections for quiz submissions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("daily income is currently disabled")]
    FeatureDisabled,
    #[error("system is under maintenance")]
    MaintenancePause,
    #[error("unknown quiz '{id}'")]
    UnknownQuiz { id: String },
    #[error("quiz '{id}' was already completed")]
    AlreadyCompleted { id: String },
}

/// Rejections for spin attempts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("lucky spin is currently disabled")]
    FeatureDisabled,
    #[error("system is under maintenance")]
    MaintenancePause,
    #[error("spin wheel has no segments configured")]
    EmptyWheel,
    #[error("already spun today, come back tomorrow")]
    AlreadySpunToday,
}

/// Rejections for withdrawal requests, in validation order: the first
/// failing check wins and later checks are not evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum WithdrawalError {
    #[error("system is under maintenance, withdrawals are paused")]
    MaintenancePause,
    #[error("withdrawal amount is not a valid number")]
    InvalidAmount,
    #[error("minimum withdrawal limit is {min}")]
    BelowMinimum { min: f64 },
    #[error("maximum withdrawal limit is {max} per transaction")]
    AboveMaximum { max: f64 },
    #[error("insufficient balance ({balance} available)")]
    InsufficientBalance { balance: f64 },
}
