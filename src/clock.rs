// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Time sources for elapsed-time fields.
//!
//! Layouts that render elapsed time read a [`Clock`] instead of the wall
//! clock directly, so tests can substitute a [`ManualClock`] and advance it
//! explicitly rather than sleeping.

use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;

use jiff::SignedDuration;
use jiff::Timestamp;

// Captured the first time any system clock is queried.
static PROCESS_START: LazyLock<Timestamp> = LazyLock::new(Timestamp::now);

/// A time source.
///
/// The default [`Clock::System`] reads the wall clock and keeps one
/// process-wide start reference. [`Clock::Manual`] wraps a [`ManualClock`]
/// whose time only moves when told to.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    /// The system wall clock.
    #[default]
    System,
    /// A clock under caller control.
    Manual(ManualClock),
}

impl Clock {
    /// The current time.
    pub fn now(&self) -> Timestamp {
        match self {
            Clock::System => Timestamp::now(),
            Clock::Manual(clock) => clock.now(),
        }
    }

    /// The start reference used for elapsed-since-start values.
    ///
    /// For the system clock this is captured once per process, on first use
    /// of any system clock. For a manual clock it is the time the clock was
    /// constructed with.
    pub fn start_time(&self) -> Timestamp {
        match self {
            Clock::System => *PROCESS_START,
            Clock::Manual(clock) => clock.start_time(),
        }
    }

    /// Whether this clock resolves sub-second time.
    ///
    /// Elapsed fields fall back from milliseconds to whole seconds when this
    /// returns `false`.
    pub fn is_high_resolution(&self) -> bool {
        match self {
            Clock::System => true,
            Clock::Manual(clock) => clock.is_high_resolution(),
        }
    }
}

impl From<ManualClock> for Clock {
    fn from(clock: ManualClock) -> Self {
        Clock::Manual(clock)
    }
}

/// A clock whose time could be reset.
///
/// Cloning returns a handle on the same underlying time, so a test can keep
/// one handle while layouts own the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Debug)]
struct ManualState {
    now: Timestamp,
    start: Timestamp,
    high_resolution: bool,
}

impl ManualClock {
    /// Create a clock at `now`, which also becomes its start reference.
    pub fn new(now: Timestamp) -> ManualClock {
        ManualClock {
            state: Arc::new(Mutex::new(ManualState {
                now,
                start: now,
                high_resolution: true,
            })),
        }
    }

    /// Create a clock that only resolves whole seconds.
    pub fn low_resolution(now: Timestamp) -> ManualClock {
        let clock = ManualClock::new(now);
        clock.state().high_resolution = false;
        clock
    }

    /// The current time.
    pub fn now(&self) -> Timestamp {
        self.state().now
    }

    /// Reset the current time.
    pub fn set_now(&self, now: Timestamp) {
        self.state().now = now;
    }

    /// Move the current time forward by `duration`.
    pub fn advance(&self, duration: SignedDuration) {
        let mut state = self.state();
        state.now = state
            .now
            .saturating_add(duration)
            .expect("adding a SignedDuration to a Timestamp saturates instead of failing");
    }

    fn start_time(&self) -> Timestamp {
        self.state().start
    }

    fn is_high_resolution(&self) -> bool {
        self.state().high_resolution
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
