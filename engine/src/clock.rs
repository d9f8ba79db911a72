//! Calendar seam for the once-per-day spin gate.
//!
//! The gate compares device-local calendar dates, not UTC-normalized ones,
//! so a spin just before local midnight unlocks again right after it.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Today's device-local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock backed implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned date for tests and simulations.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
