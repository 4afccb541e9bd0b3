//! Frame and operation timing.
//!
//! - **Scoped timers**: RAII timing for a block, warning past a threshold
//! - **Frame statistics**: rolling frame times with slow-frame warnings
//! - **Conditional compilation**: `profile_scope!` compiles to nothing unless
//!   the `profiling` feature is enabled
//!
//! ```ignore
//! fn rebuild() {
//!     profile_scope!("geometry_rebuild");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of frames kept for rolling averages
const SAMPLE_COUNT: usize = 60;

/// A frame slower than `TARGET_FRAME_MS * WARN_THRESHOLD` is reported
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macro
// ============================================================================

/// Time the enclosing scope. Compiles away without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Frame Statistics
// ============================================================================

/// Rolling statistics over the most recent rendered frames.
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: VecDeque<f64>,
    frame_start: Option<Instant>,
    slow_frames: u64,
    total_frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frames: 0,
            total_frames: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Close the frame opened by `begin_frame` and return its time in ms.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        Some(self.record_frame(start.elapsed()))
    }

    /// Record a frame of known duration.
    pub fn record_frame(&mut self, elapsed: Duration) -> f64 {
        let ms = elapsed.as_secs_f64() * 1000.0;

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frames += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }

        ms
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frames
    }

    /// Average over the retained samples, 0 when nothing was recorded.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Times a scope and reports on drop when the threshold is exceeded.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a 1ms threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Run `f` and return its result with the elapsed time in ms.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
