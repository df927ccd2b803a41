//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod fixtures;

use vocab_core::FixedClock;

/// 2023-11-14T22:13:20Z.
pub const NOW_MS: i64 = 1_700_000_000_000;

pub const DAY_MS: i64 = 86_400_000;

pub fn clock() -> FixedClock {
    FixedClock::from_millis(NOW_MS).unwrap()
}

pub fn clock_after_days(days: i64) -> FixedClock {
    FixedClock::from_millis(NOW_MS + days * DAY_MS).unwrap()
}
