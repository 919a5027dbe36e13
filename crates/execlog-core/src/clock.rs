//! Time sources for execution records
//!
//! Durations and displayed timestamps come from two independent readings:
//! a monotonic one for elapsed time and a wall-clock one for the timestamps
//! printed in log lines. `Clock` bundles both so tests can substitute a
//! `ManualClock` and get exact, repeatable numbers.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Source of wall-clock timestamps and monotonic readings
pub trait Clock: fmt::Debug + Send + Sync {
    /// Current calendar time, used only for display
    fn wall_now(&self) -> DateTime<Local>;

    /// Monotonic reading since an arbitrary fixed origin
    ///
    /// Only differences between two readings of the same clock are meaningful.
    fn monotonic_now(&self) -> Duration;
}

static PROCESS_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Clock backed by the operating system
///
/// All instances share one monotonic origin, so readings taken through
/// different `SystemClock` values are comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn wall_now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn monotonic_now(&self) -> Duration {
        PROCESS_ORIGIN.get_or_init(Instant::now).elapsed()
    }
}

/// Shared handle to the process clock
pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[derive(Debug)]
struct ManualState {
    wall: DateTime<Local>,
    monotonic: Duration,
}

/// Manually driven clock
///
/// Clones share state: advancing one handle advances every clone, which
/// lets a test keep a handle while a logger owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl ManualClock {
    /// Create a clock frozen at `wall` with a monotonic reading of zero
    pub fn new(wall: DateTime<Local>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                wall,
                monotonic: Duration::ZERO,
            })),
        }
    }

    /// Move both readings forward by `by`
    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        let mut state = self.lock();
        state.monotonic += by;
        state.wall = state.wall + step;
    }

    /// Move both readings forward by `ms` milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Replace the wall-clock reading; the monotonic reading is untouched
    pub fn set_wall(&self, wall: DateTime<Local>) {
        self.lock().wall = wall;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        // State is two plain values; a panic elsewhere cannot leave it torn.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

impl Clock for ManualClock {
    fn wall_now(&self) -> DateTime<Local> {
        self.lock().wall
    }

    fn monotonic_now(&self) -> Duration {
        self.lock().monotonic
    }
}
