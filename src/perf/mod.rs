//! Runtime performance metrics for the viewer.
//!
//! Tracks frames drawn per second, draw time, initial load time and
//! resident memory, and condenses them into warnings and a 0..=100 score.
//! The clock is passed in explicitly (`Instant`) so sampling is testable.

use std::time::{Duration, Instant};
use tracing::info;

mod memory;

pub use memory::resident_memory_mb;

/// FPS below this is flagged.
pub const LOW_FPS: u32 = 30;
/// FPS below this costs score.
pub const TARGET_FPS: u32 = 60;
/// Memory above this (MiB) is flagged.
pub const HIGH_MEMORY_MB: u64 = 100;
/// Memory above this (MiB) costs score.
pub const ELEVATED_MEMORY_MB: u64 = 50;
/// One frame at 60 Hz.
pub const SLOW_RENDER: Duration = Duration::from_millis(16);
/// Two frames at 60 Hz.
pub const VERY_SLOW_RENDER: Duration = Duration::from_millis(32);
/// Load time that costs score.
pub const ELEVATED_LOAD: Duration = Duration::from_millis(500);
/// Load time above this is flagged.
pub const SLOW_LOAD: Duration = Duration::from_millis(1000);

/// Latest metric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerformanceMetrics {
    /// Frames drawn per second over the last sample window.
    pub fps: u32,
    /// Resident memory in whole MiB; 0 if unknown.
    pub memory_usage_mb: u64,
    /// Duration of the last measured draw.
    pub render_time: Duration,
    /// Duration of the last measured load.
    pub load_time: Duration,
}

/// Sampling intervals and logging switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorOptions {
    /// Minimum time between FPS samples.
    pub fps_interval: Duration,
    /// Minimum time between memory samples.
    pub memory_interval: Duration,
    /// Emit every sample as an info event.
    pub log_metrics: bool,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            fps_interval: Duration::from_millis(1000),
            memory_interval: Duration::from_millis(5000),
            log_metrics: false,
        }
    }
}

/// Qualitative grade of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    /// 80 and above.
    Good,
    /// 60..80.
    Fair,
    /// Below 60.
    Poor,
}

impl ScoreGrade {
    /// Grade a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreGrade::Good,
            60..=79 => ScoreGrade::Fair,
            _ => ScoreGrade::Poor,
        }
    }
}

/// Whether a metric is within its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    /// Within threshold.
    Normal,
    /// Outside threshold.
    Flagged,
}

impl PerformanceMetrics {
    /// Human-readable warnings for every flagged metric.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.fps < LOW_FPS {
            warnings.push("Low FPS detected. Consider reducing redraw frequency.");
        }
        if self.memory_usage_mb > HIGH_MEMORY_MB {
            warnings.push("High memory usage detected. Check for unbounded buffers.");
        }
        if self.render_time > SLOW_RENDER {
            warnings.push("Slow render time detected. Consider a smaller overscan.");
        }
        if self.load_time > SLOW_LOAD {
            warnings.push("Slow load time detected. Consider streaming the input.");
        }
        warnings
    }

    /// Score from 0 to 100; each threshold crossed subtracts a penalty.
    pub fn score(&self) -> u8 {
        let mut score: i32 = 100;

        if self.fps < TARGET_FPS {
            score -= 20;
        }
        if self.fps < LOW_FPS {
            score -= 30;
        }

        if self.memory_usage_mb > ELEVATED_MEMORY_MB {
            score -= 15;
        }
        if self.memory_usage_mb > HIGH_MEMORY_MB {
            score -= 25;
        }

        if self.render_time > SLOW_RENDER {
            score -= 15;
        }
        if self.render_time > VERY_SLOW_RENDER {
            score -= 25;
        }

        if self.load_time > ELEVATED_LOAD {
            score -= 10;
        }
        if self.load_time > SLOW_LOAD {
            score -= 20;
        }

        score.max(0) as u8
    }

    /// Grade of [`Self::score`].
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score())
    }

    /// FPS status (flagged when low).
    pub fn fps_status(&self) -> MetricStatus {
        flag(self.fps < LOW_FPS)
    }

    /// Memory status.
    pub fn memory_status(&self) -> MetricStatus {
        flag(self.memory_usage_mb > HIGH_MEMORY_MB)
    }

    /// Render time status.
    pub fn render_status(&self) -> MetricStatus {
        flag(self.render_time > SLOW_RENDER)
    }

    /// Load time status.
    pub fn load_status(&self) -> MetricStatus {
        flag(self.load_time > SLOW_LOAD)
    }
}

fn flag(flagged: bool) -> MetricStatus {
    if flagged {
        MetricStatus::Flagged
    } else {
        MetricStatus::Normal
    }
}

/// Collects metric samples as the event loop runs.
#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    options: MonitorOptions,
    metrics: PerformanceMetrics,
    frame_count: u32,
    last_fps_sample: Instant,
    last_memory_sample: Option<Instant>,
}

impl PerformanceMonitor {
    /// Start monitoring at `now`.
    pub fn new(options: MonitorOptions, now: Instant) -> Self {
        Self {
            options,
            metrics: PerformanceMetrics::default(),
            frame_count: 0,
            last_fps_sample: now,
            last_memory_sample: None,
        }
    }

    /// Latest metrics.
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Sampling options.
    pub fn options(&self) -> &MonitorOptions {
        &self.options
    }

    /// Count one drawn frame; samples FPS once the interval has elapsed.
    ///
    /// The sample covers the frames recorded before this one; this frame
    /// opens the next window. Returns the new FPS value when sampled.
    pub fn record_frame(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_fps_sample);
        let sampled = if elapsed >= self.options.fps_interval && !elapsed.is_zero() {
            let fps = (f64::from(self.frame_count) / elapsed.as_secs_f64()).round() as u32;
            self.metrics.fps = fps;
            self.frame_count = 0;
            self.last_fps_sample = now;

            if self.options.log_metrics {
                info!(fps, "fps sample");
            }
            Some(fps)
        } else {
            None
        };

        self.frame_count = self.frame_count.saturating_add(1);
        sampled
    }

    /// Whether the memory interval has elapsed (or memory was never sampled).
    pub fn memory_sample_due(&self, now: Instant) -> bool {
        match self.last_memory_sample {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.options.memory_interval,
        }
    }

    /// Store a memory sample taken at `now`. `None` leaves the value unchanged.
    pub fn record_memory(&mut self, memory_usage_mb: Option<u64>, now: Instant) {
        self.last_memory_sample = Some(now);
        if let Some(mb) = memory_usage_mb {
            self.metrics.memory_usage_mb = mb;
            if self.options.log_metrics {
                info!(memory_usage_mb = mb, "memory sample");
            }
        }
    }

    /// Sample process memory if the interval has elapsed.
    pub fn sample_memory_if_due(&mut self, now: Instant) {
        if self.memory_sample_due(now) {
            self.record_memory(resident_memory_mb(), now);
        }
    }

    /// Store a draw duration.
    pub fn record_render_time(&mut self, render_time: Duration) {
        self.metrics.render_time = render_time;
        if self.options.log_metrics {
            info!(render_ms = render_time.as_secs_f64() * 1000.0, "render time");
        }
    }

    /// Store a load duration.
    pub fn record_load_time(&mut self, load_time: Duration) {
        self.metrics.load_time = load_time;
        if self.options.log_metrics {
            info!(load_ms = load_time.as_secs_f64() * 1000.0, "load time");
        }
    }

    /// Time `f` and store the result as render time.
    pub fn measure_render<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record_render_time(start.elapsed());
        result
    }

    /// Time `f` and store the result as load time.
    pub fn measure_load<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record_load_time(start.elapsed());
        result
    }
}

#[cfg(test)]
#[path = "perf_tests.rs"]
mod tests;
