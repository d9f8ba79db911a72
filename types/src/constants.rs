use std::time::Duration;

/// Minimum withdrawal amount when no override is persisted.
pub const DEFAULT_MIN_WITHDRAWAL: f64 = 500.0;

/// Maximum withdrawal amount per transaction when no override is persisted.
pub const DEFAULT_MAX_WITHDRAWAL: f64 = 500_000.0;

/// Balance seeded into a brand-new profile.
pub const DEFAULT_INITIAL_BALANCE: f64 = 0.5;

/// Bonus credited per verified referral.
pub const DEFAULT_REFERRAL_BONUS: f64 = 50.0;

/// Notice banner shown on the home screen by default.
pub const DEFAULT_GLOBAL_NOTICE: &str =
    "Welcome to Payra! Withdrawals are processed within 24 hours.";

/// Identity fallbacks for profiles that never registered.
pub const GUEST_NAME: &str = "Guest User";
pub const GUEST_EMAIL: &str = "guest@example.com";
pub const GUEST_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Lucky";

/// Pause between a correct quiz answer and the balance credit.
pub const QUIZ_FEEDBACK_DELAY: Duration = Duration::from_millis(1_000);

/// Wheel animation time before the spin reward lands.
pub const SPIN_SETTLE_DELAY: Duration = Duration::from_millis(4_500);

/// Simulated processing latency for a withdrawal request.
pub const WITHDRAWAL_PROCESSING_DELAY: Duration = Duration::from_millis(2_000);
