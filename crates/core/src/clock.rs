// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// A clock that provides the current UTC time
pub trait Clock: Clone + Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fake clock for testing with controllable time
///
/// Time stands still unless advanced explicitly or via a per-read tick:
/// `tick` makes every `now_utc` call return the current time and then step
/// it forward, so code that takes two timestamps around an operation sees a
/// deterministic delta.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
    step: Arc<Mutex<TimeDelta>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a fake clock starting at a specific instant
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
            step: Arc::new(Mutex::new(TimeDelta::zero())),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, delta: TimeDelta) {
        *self.current.lock() += delta;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }

    /// Advance the clock by `delta` after every `now_utc` read
    pub fn tick(&self, delta: TimeDelta) {
        *self.step.lock() = delta;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_utc(&self) -> DateTime<Utc> {
        let mut current = self.current.lock();
        let now = *current;
        *current += *self.step.lock();
        now
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
