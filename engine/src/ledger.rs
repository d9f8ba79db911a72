//! Profile ledger: identity fields, balance, and gating markers.

use payra_types::{Account, Settings};
use tracing::{debug, warn};

use crate::store::KeyValue;

const KEY_NAME: &str = "user_name";
const KEY_EMAIL: &str = "user_email";
const KEY_PHOTO: &str = "user_photo";
const KEY_PHONE: &str = "user_phone";
const KEY_BALANCE: &str = "user_balance";
const KEY_COMPLETED_QUIZZES: &str = "completed_quizzes";
const KEY_LAST_SPIN_DATE: &str = "last_spin_date";

/// Owns the profile namespace. Sole writer of the balance.
///
/// The balance is seeded from `Settings::initial_balance` exactly once, at
/// `open`; afterwards the key is always present, so there is no separate
/// "default to zero" read path.
#[derive(Debug)]
pub struct LedgerStore<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> LedgerStore<S> {
    pub fn open(store: S, settings: &Settings) -> Self {
        let mut ledger = Self { store };
        if ledger.store.get(KEY_BALANCE).is_none() {
            debug!(
                initial_balance = settings.initial_balance,
                "seeding first-time profile balance"
            );
            ledger
                .store
                .set(KEY_BALANCE, &settings.initial_balance.to_string());
        }
        ledger
    }

    pub fn account(&self) -> Account {
        let mut account = Account::guest(self.balance());
        if let Some(name) = self.store.get(KEY_NAME) {
            account.name = name;
        }
        if let Some(email) = self.store.get(KEY_EMAIL) {
            account.email = email;
        }
        if let Some(photo) = self.store.get(KEY_PHOTO) {
            account.photo = photo;
        }
        account.phone = self.store.get(KEY_PHONE);
        account
    }

    /// Upsert identity fields. A `None` photo leaves any stored photo
    /// untouched.
    pub fn save_account(
        &mut self,
        name: &str,
        email: &str,
        photo: Option<&str>,
        phone: Option<&str>,
    ) {
        self.store.set(KEY_NAME, name);
        self.store.set(KEY_EMAIL, email);
        if let Some(photo) = photo {
            self.store.set(KEY_PHOTO, photo);
        }
        if let Some(phone) = phone {
            self.store.set(KEY_PHONE, phone);
        }
    }

    pub fn balance(&self) -> f64 {
        match self.store.get(KEY_BALANCE) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(%raw, "unparsable stored balance, treating as zero");
                0.0
            }),
            None => 0.0,
        }
    }

    /// Add `delta` (positive credit, negative debit) and persist the result.
    ///
    /// No floor or ceiling is enforced here; the quiz/spin flows and the
    /// withdrawal gate validate before calling.
    pub fn update_balance(&mut self, delta: f64) -> f64 {
        let updated = self.balance() + delta;
        self.store.set(KEY_BALANCE, &updated.to_string());
        updated
    }

    /// Quiz ids completed so far, in completion order. Persists forever:
    /// quizzes are one-time-ever, not daily.
    pub fn completed_quizzes(&self) -> Vec<String> {
        match self.store.get(KEY_COMPLETED_QUIZZES) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, "unparsable completed quiz list, treating as empty");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    pub fn is_quiz_completed(&self, id: &str) -> bool {
        self.completed_quizzes().iter().any(|done| done == id)
    }

    pub fn mark_quiz_completed(&mut self, id: &str) {
        let mut completed = self.completed_quizzes();
        if completed.iter().any(|done| done == id) {
            return;
        }
        completed.push(id.to_string());
        let blob =
            serde_json::to_string(&completed).expect("quiz id list serialization is infallible");
        self.store.set(KEY_COMPLETED_QUIZZES, &blob);
    }

    /// Device-local date string of the last spin, if any.
    pub fn last_spin_date(&self) -> Option<String> {
        self.store.get(KEY_LAST_SPIN_DATE)
    }

    pub fn record_spin(&mut self, date: &str) {
        self.store.set(KEY_LAST_SPIN_DATE, date);
    }

    /// Wipe the profile namespace (logout). Settings live in their own
    /// namespace and are deliberately not touched.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use payra_types::{GUEST_EMAIL, GUEST_NAME};

    fn open_default() -> LedgerStore<MemStore> {
        LedgerStore::open(MemStore::new(), &Settings::default())
    }

    #[test]
    fn test_open_seeds_initial_balance_once() {
        let settings = Settings::default();
        let mut ledger = LedgerStore::open(MemStore::new(), &settings);
        assert_eq!(ledger.balance(), 0.5);

        // Re-opening with a different initial balance must not re-seed.
        ledger.update_balance(10.0);
        let mut richer = settings.clone();
        richer.initial_balance = 999.0;
        let inner = ledger.store;
        let reopened = LedgerStore::open(inner, &richer);
        assert_eq!(reopened.balance(), 10.5);
    }

    #[test]
    fn test_balance_is_sum_of_deltas() {
        let mut ledger = open_default();
        let start = ledger.balance();
        ledger.update_balance(5.0);
        ledger.update_balance(-2.0);
        ledger.update_balance(0.25);
        assert_eq!(ledger.balance(), start + 5.0 - 2.0 + 0.25);
    }

    #[test]
    fn test_account_guest_fallbacks_until_registration() {
        let mut ledger = open_default();
        let account = ledger.account();
        assert_eq!(account.name, GUEST_NAME);
        assert_eq!(account.email, GUEST_EMAIL);

        ledger.save_account("Rahim", "rahim@example.com", None, Some("01700000000"));
        let account = ledger.account();
        assert_eq!(account.name, "Rahim");
        assert_eq!(account.email, "rahim@example.com");
        assert_eq!(account.phone.as_deref(), Some("01700000000"));
    }

    #[test]
    fn test_save_account_without_photo_keeps_stored_photo() {
        let mut ledger = open_default();
        ledger.save_account("Rahim", "rahim@example.com", Some("https://cdn/p.png"), None);
        ledger.save_account("Rahim Uddin", "rahim@example.com", None, None);
        assert_eq!(ledger.account().photo, "https://cdn/p.png");
        assert_eq!(ledger.account().name, "Rahim Uddin");
    }

    #[test]
    fn test_completed_quizzes_round_trip_and_dedupe() {
        let mut ledger = open_default();
        assert!(ledger.completed_quizzes().is_empty());
        ledger.mark_quiz_completed("m1");
        ledger.mark_quiz_completed("s2");
        ledger.mark_quiz_completed("m1");
        assert_eq!(ledger.completed_quizzes(), vec!["m1", "s2"]);
        assert!(ledger.is_quiz_completed("m1"));
        assert!(!ledger.is_quiz_completed("b1"));
    }

    #[test]
    fn test_clear_wipes_profile_and_next_open_reseeds() {
        let settings = Settings::default();
        let mut ledger = LedgerStore::open(MemStore::new(), &settings);
        ledger.save_account("Rahim", "rahim@example.com", None, None);
        ledger.update_balance(100.0);
        ledger.record_spin("2024-03-21");
        ledger.clear();

        let reopened = LedgerStore::open(ledger.store, &settings);
        assert_eq!(reopened.balance(), 0.5);
        assert_eq!(reopened.account().name, GUEST_NAME);
        assert_eq!(reopened.last_spin_date(), None);
    }

    #[test]
    fn test_unparsable_balance_reads_as_zero() {
        let mut store = MemStore::new();
        store.set("user_balance", "not-a-number");
        let ledger = LedgerStore::open(store, &Settings::default());
        assert_eq!(ledger.balance(), 0.0);
    }
}
