//! Lucky spin flow: one uniformly random wheel segment per local calendar
//! day.
//!
//! The draw is uniform over *segments*, not distinct values; an admin skews
//! the expected payout by duplicating entries (two ৳0 wedges against one
//! ৳10). A 0-value segment is an ordinary outcome, not a special branch.
//! Wheel rotation angles are presentation and live with the caller.

use std::time::Duration;

use payra_types::{Settings, SpinError, WheelSegment};
use rand::Rng;
use tracing::debug;

use crate::clock::Clock;
use crate::ledger::LedgerStore;
use crate::store::KeyValue;

/// True iff no spin was recorded on today's device-local date.
pub fn can_spin<S: KeyValue>(ledger: &LedgerStore<S>, clock: &impl Clock) -> bool {
    match ledger.last_spin_date() {
        Some(date) => date != clock.today().to_string(),
        None => true,
    }
}

/// Pending credit for a drawn segment.
#[derive(Debug)]
pub struct SpinTicket {
    index: usize,
    segment: WheelSegment,
}

impl SpinTicket {
    /// Index of the winning segment within `Settings::spin_wheel_rewards`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn segment(&self) -> &WheelSegment {
        &self.segment
    }

    /// Credit the segment value and consume today's spin, after the wheel
    /// animation delay. Dropping the future before it completes leaves
    /// balance and gate untouched.
    pub async fn settle<S: KeyValue>(
        self,
        ledger: &mut LedgerStore<S>,
        clock: &impl Clock,
        delay: Duration,
    ) -> f64 {
        tokio::time::sleep(delay).await;
        ledger.record_spin(&clock.today().to_string());
        let balance = ledger.update_balance(self.segment.value);
        debug!(
            index = self.index,
            value = self.segment.value,
            balance,
            "spin reward credited"
        );
        balance
    }
}

/// Draw a uniformly random segment, failing fast on a disabled feature,
/// maintenance, an unconfigured wheel, or a same-day repeat.
pub fn spin<S: KeyValue>(
    settings: &Settings,
    ledger: &LedgerStore<S>,
    clock: &impl Clock,
    rng: &mut impl Rng,
) -> Result<SpinTicket, SpinError> {
    if settings.maintenance_mode {
        return Err(SpinError::MaintenancePause);
    }
    if !settings.is_lucky_spin_enabled {
        return Err(SpinError::FeatureDisabled);
    }
    if settings.spin_wheel_rewards.is_empty() {
        return Err(SpinError::EmptyWheel);
    }
    if !can_spin(ledger, clock) {
        return Err(SpinError::AlreadySpunToday);
    }
    let index = rng.gen_range(0..settings.spin_wheel_rewards.len());
    Ok(SpinTicket {
        index,
        segment: settings.spin_wheel_rewards[index].clone(),
    })
}
