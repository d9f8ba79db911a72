//! Quiz flow: one-time tasks that credit a fixed reward on the first
//! correct answer.
//!
//! Per-attempt state machine: Idle -> Presented -> {Correct, Incorrect} ->
//! Idle. A correct answer yields a [`RewardTicket`]; the credit and the
//! permanent completion mark happen only when the ticket settles, so
//! dropping it (navigating away during the feedback pause) cancels both.

use std::time::Duration;

use payra_types::{QuizCategory, QuizError, QuizQuestion, Settings};
use tracing::debug;

use crate::ledger::LedgerStore;
use crate::store::KeyValue;

/// Category filter for the task list. `All` bypasses filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Category(QuizCategory),
}

/// One task row: the question plus whether it was already claimed.
/// Completed tasks stay listed but are non-actionable.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskView {
    pub question: QuizQuestion,
    pub completed: bool,
}

/// Outcome of a submission.
#[derive(Debug)]
pub enum Answer {
    Correct(RewardTicket),
    Incorrect,
}

/// Pending credit for a correct answer.
#[derive(Debug)]
pub struct RewardTicket {
    quiz_id: String,
    reward: f64,
}

impl RewardTicket {
    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Credit the reward and mark the quiz permanently completed, after the
    /// feedback pause. Dropping the future before it completes leaves the
    /// ledger untouched.
    pub async fn settle<S: KeyValue>(self, ledger: &mut LedgerStore<S>, delay: Duration) -> f64 {
        tokio::time::sleep(delay).await;
        ledger.mark_quiz_completed(&self.quiz_id);
        let balance = ledger.update_balance(self.reward);
        debug!(quiz_id = %self.quiz_id, reward = self.reward, balance, "quiz reward credited");
        balance
    }
}

/// List tasks matching `filter`, flagging already-completed ones.
pub fn tasks<S: KeyValue>(
    settings: &Settings,
    ledger: &LedgerStore<S>,
    filter: TaskFilter,
) -> Vec<TaskView> {
    let completed = ledger.completed_quizzes();
    settings
        .quiz_questions
        .iter()
        .filter(|q| match filter {
            TaskFilter::All => true,
            TaskFilter::Category(category) => q.category == category,
        })
        .map(|q| TaskView {
            completed: completed.iter().any(|done| done == &q.id),
            question: q.clone(),
        })
        .collect()
}

/// Compare `option` to the stored answer (exact, case-sensitive).
///
/// An incorrect answer changes nothing and the quiz stays re-attemptable;
/// a completed quiz can never pay out again.
pub fn submit<S: KeyValue>(
    settings: &Settings,
    ledger: &LedgerStore<S>,
    quiz_id: &str,
    option: &str,
) -> Result<Answer, QuizError> {
    if settings.maintenance_mode {
        return Err(QuizError::MaintenancePause);
    }
    if !settings.is_daily_income_enabled {
        return Err(QuizError::FeatureDisabled);
    }
    let quiz = settings
        .quiz_questions
        .iter()
        .find(|q| q.id == quiz_id)
        .ok_or_else(|| QuizError::UnknownQuiz {
            id: quiz_id.to_string(),
        })?;
    if ledger.is_quiz_completed(quiz_id) {
        return Err(QuizError::AlreadyCompleted {
            id: quiz_id.to_string(),
        });
    }
    if option == quiz.answer {
        Ok(Answer::Correct(RewardTicket {
            quiz_id: quiz.id.clone(),
            reward: quiz.reward,
        }))
    } else {
        Ok(Answer::Incorrect)
    }
}
