//! Performance monitoring utilities.
//!
//! Pointer handlers and the gpui view record their timings into a
//! `PerfMonitor`, keyed by `Operation`. Hot paths are also wrapped in
//! `profile_scope!`, which compiles to nothing unless the `profiling`
//! feature is on.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Frames slower than this multiple of the target count as slow
const SLOW_FRAME_FACTOR: f64 = 2.0;

/// Samples kept per operation for the rolling average
const WINDOW: usize = 60;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// ```ignore
/// fn handle_pointer_move() {
///     profile_scope!("handle_pointer_move");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Things worth timing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Frame,
    PointerDown,
    PointerMove,
    PointerUp,
}

/// Rolling timing statistics for one operation.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    recent: VecDeque<f64>,
    count: u64,
    min_ms: Option<f64>,
    max_ms: f64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(ms);
        self.count += 1;
        self.min_ms = Some(self.min_ms.map_or(ms, |m| m.min(ms)));
        self.max_ms = self.max_ms.max(ms);
    }

    /// Mean of the most recent samples, 0 when empty.
    pub fn average(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    /// Total samples ever recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        self.min_ms.unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

/// Frame and pointer-handler timings.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    frame_start: Option<Instant>,
    slow_frames: u64,
    stats: HashMap<Operation, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Close the frame opened by `begin_frame` and return its length in ms.
    pub fn end_frame(&mut self) -> Option<f64> {
        let ms = self.frame_start.take()?.elapsed().as_secs_f64() * 1000.0;
        self.record(Operation::Frame, ms);

        if ms > TARGET_FRAME_MS * SLOW_FRAME_FACTOR {
            self.slow_frames += 1;
            warn!(frame_ms = format!("{:.2}", ms), "Slow frame");
        }
        Some(ms)
    }

    pub fn record(&mut self, op: Operation, ms: f64) {
        self.stats.entry(op).or_default().record(ms);
    }

    pub fn stats(&self, op: Operation) -> Option<&OperationStats> {
        self.stats.get(&op)
    }

    pub fn average_frame_time(&self) -> f64 {
        self.stats(Operation::Frame).map_or(0.0, OperationStats::average)
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        match self.stats(Operation::Frame).map(OperationStats::count) {
            Some(total) if total > 0 => self.slow_frames as f64 * 100.0 / total as f64,
            _ => 0.0,
        }
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }
}

/// Logs its lifetime on drop when it runs past `threshold_ms`.
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

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
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
            "Slow operation"
        );
    }
}

/// Run `f` and return its result together with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
