//! Withdrawal gate: bounds and balance validation, then a simulated
//! processing debit.
//!
//! Checks run in a fixed order and the first failure wins. There is no
//! persisted withdrawal record; the ledger deliberately has no transaction
//! log (history screens elsewhere show static mock data).

use std::time::Duration;

use payra_types::{Settings, WithdrawalError};
use tracing::debug;

use crate::ledger::LedgerStore;
use crate::store::KeyValue;

/// Accepted request waiting on its simulated processing latency.
#[derive(Debug)]
pub struct PendingWithdrawal {
    amount: f64,
}

impl PendingWithdrawal {
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Debit the ledger after the processing delay. Dropping the future
    /// before it completes cancels the debit.
    pub async fn settle<S: KeyValue>(self, ledger: &mut LedgerStore<S>, delay: Duration) -> f64 {
        tokio::time::sleep(delay).await;
        let balance = ledger.update_balance(-self.amount);
        debug!(amount = self.amount, balance, "withdrawal debited");
        balance
    }
}

/// Validate `amount` against settings limits and the current balance.
///
/// Order: maintenance pause, non-finite amount, below minimum, above
/// maximum, insufficient balance. Later checks are not evaluated once one
/// fails.
pub fn request<S: KeyValue>(
    amount: f64,
    settings: &Settings,
    ledger: &LedgerStore<S>,
) -> Result<PendingWithdrawal, WithdrawalError> {
    if settings.maintenance_mode {
        return Err(WithdrawalError::MaintenancePause);
    }
    if !amount.is_finite() {
        return Err(WithdrawalError::InvalidAmount);
    }
    if amount < settings.min_withdrawal {
        return Err(WithdrawalError::BelowMinimum {
            min: settings.min_withdrawal,
        });
    }
    if amount > settings.max_withdrawal {
        return Err(WithdrawalError::AboveMaximum {
            max: settings.max_withdrawal,
        });
    }
    let balance = ledger.balance();
    if amount > balance {
        return Err(WithdrawalError::InsufficientBalance { balance });
    }
    Ok(PendingWithdrawal { amount })
}
