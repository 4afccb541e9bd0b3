//! Unit tests for perf module.

use crate::helpers::capture_logs;
use diagram_core::perf::{FrameStats, ScopedTimer, TARGET_FRAME_MS, measure};
use std::time::Duration;

#[test]
fn test_frame_stats_basic() {
    let mut stats = FrameStats::new();

    stats.begin_frame();
    let time = stats.end_frame();

    assert!(time.unwrap() >= 0.0);
    assert_eq!(stats.total_frames(), 1);
}

#[test]
fn test_end_without_begin_records_nothing() {
    let mut stats = FrameStats::new();

    assert!(stats.end_frame().is_none());
    assert_eq!(stats.total_frames(), 0);
    assert_eq!(stats.average_frame_time(), 0.0);
    assert_eq!(stats.estimated_fps(), 0.0);
}

#[test]
fn test_average_and_max() {
    let mut stats = FrameStats::new();
    stats.record_frame(Duration::from_millis(4));
    stats.record_frame(Duration::from_millis(8));
    stats.record_frame(Duration::from_millis(12));

    assert!((stats.average_frame_time() - 8.0).abs() < 1e-9);
    assert!((stats.max_frame_time() - 12.0).abs() < 1e-9);
    assert!((stats.estimated_fps() - 125.0).abs() < 1e-6);
}

#[test]
fn test_rolling_window_drops_old_samples() {
    let mut stats = FrameStats::new();
    stats.record_frame(Duration::from_millis(30));
    for _ in 0..60 {
        stats.record_frame(Duration::from_millis(2));
    }

    assert_eq!(stats.total_frames(), 61);
    assert!((stats.max_frame_time() - 2.0).abs() < 1e-9);
}

#[test]
fn test_slow_frame_is_counted_and_logged() {
    let mut stats = FrameStats::new();
    let slow = Duration::from_secs_f64(TARGET_FRAME_MS * 3.0 / 1000.0);

    let (_, logs) = capture_logs(|| {
        stats.record_frame(Duration::from_millis(1));
        stats.record_frame(slow);
    });

    assert_eq!(stats.slow_frames(), 1);
    assert!(logs.contains("Slow frame detected"), "logs: {logs}");
}

#[test]
fn test_reset_clears_everything() {
    let mut stats = FrameStats::new();
    stats.record_frame(Duration::from_millis(100));

    stats.reset();

    assert_eq!(stats.total_frames(), 0);
    assert_eq!(stats.slow_frames(), 0);
    assert_eq!(stats.max_frame_time(), 0.0);
}

#[test]
fn test_scoped_timer_under_threshold_is_silent() {
    let (_, logs) = capture_logs(|| {
        let timer = ScopedTimer::new("quick_op", 10_000.0);
        assert_eq!(timer.name(), "quick_op");
        assert!(timer.elapsed_ms() >= 0.0);
    });

    assert!(!logs.contains("Slow operation"), "logs: {logs}");
}

#[test]
fn test_measure_returns_result() {
    let (value, ms) = measure(|| 21 * 2);

    assert_eq!(value, 42);
    assert!(ms >= 0.0);
}
