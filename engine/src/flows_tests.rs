use std::time::Duration;

use chrono::NaiveDate;
use payra_types::{QuizCategory, QuizError, Settings, SpinError, WheelSegment, WithdrawalError};
use rand::{rngs::StdRng, SeedableRng};

use crate::clock::FixedClock;
use crate::ledger::LedgerStore;
use crate::quiz::{self, Answer, TaskFilter};
use crate::spin;
use crate::store::MemStore;
use crate::withdraw;

fn open_ledger(settings: &Settings) -> LedgerStore<MemStore> {
    LedgerStore::open(MemStore::new(), settings)
}

fn day(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// === Quiz flow ===

#[tokio::test]
async fn test_correct_answer_credits_exactly_once() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    let start = ledger.balance();

    let answer = quiz::submit(&settings, &ledger, "m1", "60").unwrap();
    let Answer::Correct(ticket) = answer else {
        panic!("expected correct answer");
    };
    assert_eq!(ticket.reward(), 1.0);
    let balance = ticket.settle(&mut ledger, Duration::ZERO).await;
    assert_eq!(balance, start + 1.0);
    assert!(ledger.is_quiz_completed("m1"));

    // Permanent completion: a second attempt can never pay again.
    assert_eq!(
        quiz::submit(&settings, &ledger, "m1", "60").unwrap_err(),
        QuizError::AlreadyCompleted {
            id: "m1".to_string()
        }
    );
    assert_eq!(ledger.balance(), start + 1.0);
}

#[tokio::test]
async fn test_incorrect_answer_leaves_quiz_reattemptable() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    let start = ledger.balance();

    let answer = quiz::submit(&settings, &ledger, "m1", "70").unwrap();
    assert!(matches!(answer, Answer::Incorrect));
    assert_eq!(ledger.balance(), start);
    assert!(!ledger.is_quiz_completed("m1"));

    // Retry until correct is allowed.
    let answer = quiz::submit(&settings, &ledger, "m1", "60").unwrap();
    let Answer::Correct(ticket) = answer else {
        panic!("expected correct answer");
    };
    ticket.settle(&mut ledger, Duration::ZERO).await;
    assert_eq!(ledger.balance(), start + 1.0);
}

#[test]
fn test_dropped_reward_ticket_mutates_nothing() {
    let settings = Settings::default();
    let ledger = open_ledger(&settings);
    let start = ledger.balance();

    let answer = quiz::submit(&settings, &ledger, "b1", "Jackfruit").unwrap();
    assert!(matches!(answer, Answer::Correct(_)));
    drop(answer);

    assert_eq!(ledger.balance(), start);
    assert!(!ledger.is_quiz_completed("b1"));
}

#[test]
fn test_quiz_gates_and_unknown_id() {
    let mut settings = Settings::default();
    let ledger = open_ledger(&settings);

    assert_eq!(
        quiz::submit(&settings, &ledger, "nope", "x").unwrap_err(),
        QuizError::UnknownQuiz {
            id: "nope".to_string()
        }
    );

    settings.is_daily_income_enabled = false;
    assert_eq!(
        quiz::submit(&settings, &ledger, "m1", "60").unwrap_err(),
        QuizError::FeatureDisabled
    );

    settings.maintenance_mode = true;
    // Maintenance outranks the feature toggle.
    assert_eq!(
        quiz::submit(&settings, &ledger, "m1", "60").unwrap_err(),
        QuizError::MaintenancePause
    );
}

#[test]
fn test_answer_comparison_is_case_sensitive() {
    let settings = Settings::default();
    let ledger = open_ledger(&settings);
    let answer = quiz::submit(&settings, &ledger, "b1", "jackfruit").unwrap();
    assert!(matches!(answer, Answer::Incorrect));
}

#[tokio::test]
async fn test_task_listing_filters_and_flags_completed() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);

    let all = quiz::tasks(&settings, &ledger, TaskFilter::All);
    assert_eq!(all.len(), 7);

    let sports = quiz::tasks(&settings, &ledger, TaskFilter::Category(QuizCategory::Sports));
    assert_eq!(sports.len(), 3);
    assert!(sports.iter().all(|t| t.question.category == QuizCategory::Sports));

    let Answer::Correct(ticket) = quiz::submit(&settings, &ledger, "s1", "11").unwrap() else {
        panic!("expected correct answer");
    };
    ticket.settle(&mut ledger, Duration::ZERO).await;

    // Completed quizzes stay listed, flagged non-actionable.
    let sports = quiz::tasks(&settings, &ledger, TaskFilter::Category(QuizCategory::Sports));
    assert_eq!(sports.len(), 3);
    let done: Vec<_> = sports.iter().filter(|t| t.completed).collect();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].question.id, "s1");
}

// === Spin flow ===

#[tokio::test]
async fn test_spin_credits_and_consumes_daily_gate() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    let clock = day(2024, 3, 21);
    let mut rng = StdRng::seed_from_u64(7);
    let start = ledger.balance();

    assert!(spin::can_spin(&ledger, &clock));
    let ticket = spin::spin(&settings, &ledger, &clock, &mut rng).unwrap();
    let value = ticket.segment().value;
    let balance = ticket.settle(&mut ledger, &clock, Duration::ZERO).await;
    assert_eq!(balance, start + value);
    assert_eq!(ledger.last_spin_date().as_deref(), Some("2024-03-21"));

    // Same-day repeats are rejected no matter how often checked.
    assert!(!spin::can_spin(&ledger, &clock));
    assert!(!spin::can_spin(&ledger, &clock));
    assert_eq!(
        spin::spin(&settings, &ledger, &clock, &mut rng).unwrap_err(),
        SpinError::AlreadySpunToday
    );

    // The next local calendar day unlocks again.
    let tomorrow = day(2024, 3, 22);
    assert!(spin::can_spin(&ledger, &tomorrow));
    assert!(spin::spin(&settings, &ledger, &tomorrow, &mut rng).is_ok());
}

#[test]
fn test_dropped_spin_ticket_keeps_gate_open() {
    let settings = Settings::default();
    let ledger = open_ledger(&settings);
    let clock = day(2024, 3, 21);
    let mut rng = StdRng::seed_from_u64(7);
    let start = ledger.balance();

    let ticket = spin::spin(&settings, &ledger, &clock, &mut rng).unwrap();
    drop(ticket);

    assert_eq!(ledger.balance(), start);
    assert!(spin::can_spin(&ledger, &clock));
}

#[test]
fn test_spin_rejects_disabled_maintenance_and_empty_wheel() {
    let mut settings = Settings::default();
    let ledger = open_ledger(&settings);
    let clock = day(2024, 3, 21);
    let mut rng = StdRng::seed_from_u64(7);

    settings.spin_wheel_rewards.clear();
    assert_eq!(
        spin::spin(&settings, &ledger, &clock, &mut rng).unwrap_err(),
        SpinError::EmptyWheel
    );

    settings = Settings::default();
    settings.is_lucky_spin_enabled = false;
    assert_eq!(
        spin::spin(&settings, &ledger, &clock, &mut rng).unwrap_err(),
        SpinError::FeatureDisabled
    );

    settings.maintenance_mode = true;
    assert_eq!(
        spin::spin(&settings, &ledger, &clock, &mut rng).unwrap_err(),
        SpinError::MaintenancePause
    );
}

#[test]
fn test_spin_is_uniform_over_segments_not_values() {
    let mut settings = Settings::default();
    settings.spin_wheel_rewards = vec![
        WheelSegment::new(0.0, "#111", "৳0"),
        WheelSegment::new(0.0, "#222", "৳0"),
        WheelSegment::new(10.0, "#333", "৳10"),
    ];
    let ledger = open_ledger(&settings);
    let clock = day(2024, 3, 21);
    let mut rng = StdRng::seed_from_u64(42);

    // Tickets are never settled, so the daily gate stays open.
    let mut wins = 0;
    for _ in 0..3_000 {
        let ticket = spin::spin(&settings, &ledger, &clock, &mut rng).unwrap();
        if ticket.segment().value == 10.0 {
            wins += 1;
        }
    }

    // Uniform over segments: the single ৳10 wedge lands ~1/3 of the time,
    // even though only half the *distinct* values are wins.
    assert!((900..=1_100).contains(&wins), "wins={wins}");
}

// === Withdrawal gate ===

#[test]
fn test_withdrawal_limit_boundaries() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    ledger.update_balance(1_000_000.0);

    assert_eq!(
        withdraw::request(499.0, &settings, &ledger).unwrap_err(),
        WithdrawalError::BelowMinimum { min: 500.0 }
    );
    assert!(withdraw::request(500.0, &settings, &ledger).is_ok());
    assert!(withdraw::request(500_000.0, &settings, &ledger).is_ok());
    assert_eq!(
        withdraw::request(500_001.0, &settings, &ledger).unwrap_err(),
        WithdrawalError::AboveMaximum { max: 500_000.0 }
    );
}

#[test]
fn test_withdrawal_rejects_over_balance_within_bounds() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    ledger.update_balance(599.5); // seeded 0.5 -> 600.0

    assert_eq!(
        withdraw::request(601.0, &settings, &ledger).unwrap_err(),
        WithdrawalError::InsufficientBalance { balance: 600.0 }
    );
    assert!(withdraw::request(600.0, &settings, &ledger).is_ok());
}

#[test]
fn test_admin_cannot_disarm_the_withdrawal_floor() {
    use crate::config::ConfigStore;
    use payra_types::{ConfigError, SettingsPatch};

    let mut config = ConfigStore::new(MemStore::new());

    // A NaN minimum would make every `amount < min` comparison false,
    // accepting sub-minimum withdrawals. The write boundary rejects it.
    let result = config.update(SettingsPatch {
        min_withdrawal: Some(f64::NAN),
        ..Default::default()
    });
    assert_eq!(
        result,
        Err(ConfigError::NonFinite {
            field: "minWithdrawal"
        })
    );

    // The floor from the still-persisted settings keeps holding.
    let settings = config.settings();
    let mut ledger = open_ledger(&settings);
    ledger.update_balance(1_000.0);
    assert_eq!(
        withdraw::request(0.25, &settings, &ledger).unwrap_err(),
        WithdrawalError::BelowMinimum { min: 500.0 }
    );
}

#[test]
fn test_negative_amounts_never_reach_a_credit() {
    // With a non-negative minimum enforced at the settings boundary, a
    // negative amount always fails the floor check and can never flow into
    // `update_balance` as a credit.
    let settings = Settings::default();
    let ledger = open_ledger(&settings);
    assert_eq!(
        withdraw::request(-50.0, &settings, &ledger).unwrap_err(),
        WithdrawalError::BelowMinimum { min: 500.0 }
    );
}

#[test]
fn test_withdrawal_validation_order_first_failure_wins() {
    let mut settings = Settings::default();
    let ledger = open_ledger(&settings);

    // Non-finite amounts are invalid, not "below minimum".
    assert_eq!(
        withdraw::request(f64::NAN, &settings, &ledger).unwrap_err(),
        WithdrawalError::InvalidAmount
    );
    assert_eq!(
        withdraw::request(f64::INFINITY, &settings, &ledger).unwrap_err(),
        WithdrawalError::InvalidAmount
    );

    // Maintenance outranks everything, including invalid amounts.
    settings.maintenance_mode = true;
    assert_eq!(
        withdraw::request(f64::NAN, &settings, &ledger).unwrap_err(),
        WithdrawalError::MaintenancePause
    );
}

#[tokio::test]
async fn test_settled_withdrawal_debits_and_never_goes_negative() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    ledger.update_balance(599.5);

    let pending = withdraw::request(600.0, &settings, &ledger).unwrap();
    assert_eq!(pending.amount(), 600.0);
    let balance = pending.settle(&mut ledger, Duration::ZERO).await;
    assert_eq!(balance, 0.0);

    // Nothing left: even the minimum is now more than the balance.
    assert_eq!(
        withdraw::request(500.0, &settings, &ledger).unwrap_err(),
        WithdrawalError::InsufficientBalance { balance: 0.0 }
    );
}

#[test]
fn test_dropped_pending_withdrawal_keeps_balance() {
    let settings = Settings::default();
    let mut ledger = open_ledger(&settings);
    ledger.update_balance(999.5);

    let pending = withdraw::request(500.0, &settings, &ledger).unwrap();
    drop(pending);
    assert_eq!(ledger.balance(), 1_000.0);
}
