// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Fixed-period tick accumulator.
///
/// Hosts feed it elapsed wall time; it reports how many whole periods have
/// passed and carries the remainder over to the next call.
///
/// ```
/// use core::time::Duration;
/// use easel::Ticker;
///
/// let mut ticker = Ticker::new(50);
/// assert_eq!(ticker.advance(Duration::from_millis(45)), 2);
/// assert_eq!(ticker.advance(Duration::from_millis(15)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    pending: Duration,
}

impl Ticker {
    /// Ticks `framerate` times per second. A rate of `0` is treated as `1`.
    #[must_use]
    pub fn new(framerate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / framerate.max(1),
            pending: Duration::ZERO,
        }
    }

    /// Length of one tick.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated toward the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        self.pending
    }

    /// Adds `elapsed` and returns how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let mut due = 0;
        while self.pending >= self.period {
            self.pending -= self.period;
            due += 1;
        }
        due
    }

    /// Drops any partially accumulated time.
    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}
