//! Rolling performance telemetry
//!
//! Both lanes record per-piece metrics into a bounded history window; the
//! report averages over that window. Reading a report copies a handful of
//! numbers under a short lock, so it never blocks generation.

use atelier_core::PerformanceMetrics;
use std::collections::VecDeque;

/// Bounded history of per-piece metrics
#[derive(Debug)]
pub struct TelemetryWindow {
    history: VecDeque<PerformanceMetrics>,
    capacity: usize,
    total_pieces: u64,
}

impl TelemetryWindow {
    /// Create a window averaging over at most `capacity` recent pieces
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            total_pieces: 0,
        }
    }

    /// Record one generated piece
    pub fn record(&mut self, metrics: PerformanceMetrics) {
        self.history.push_back(metrics);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
        self.total_pieces += 1;
    }

    /// Snapshot the rolling averages
    pub fn report(&self) -> PerformanceReport {
        if self.history.is_empty() {
            return PerformanceReport {
                pieces_generated: self.total_pieces,
                average_generation_time_ms: 0.0,
                average_polygon_count: 0.0,
                average_memory_usage_bytes: 0.0,
            };
        }
        let n = self.history.len() as f64;
        PerformanceReport {
            pieces_generated: self.total_pieces,
            average_generation_time_ms: self
                .history
                .iter()
                .map(|m| m.generation_time_ms)
                .sum::<f64>()
                / n,
            average_polygon_count: self
                .history
                .iter()
                .map(|m| m.polygon_count as f64)
                .sum::<f64>()
                / n,
            average_memory_usage_bytes: self
                .history
                .iter()
                .map(|m| m.memory_usage_bytes as f64)
                .sum::<f64>()
                / n,
        }
    }
}

/// Averages over the recent telemetry window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    /// Total pieces generated over the session lifetime
    pub pieces_generated: u64,
    /// Mean generation time over the window, in milliseconds
    pub average_generation_time_ms: f64,
    /// Mean triangle count over the window
    pub average_polygon_count: f64,
    /// Mean mesh memory footprint over the window, in bytes
    pub average_memory_usage_bytes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(time_ms: f64, polygons: usize) -> PerformanceMetrics {
        PerformanceMetrics {
            generation_time_ms: time_ms,
            polygon_count: polygons,
            memory_usage_bytes: polygons * 36,
        }
    }

    #[test]
    fn test_empty_window_reports_zero() {
        let window = TelemetryWindow::new(8);
        let report = window.report();
        assert_eq!(report.pieces_generated, 0);
        assert_eq!(report.average_generation_time_ms, 0.0);
    }

    #[test]
    fn test_averages() {
        let mut window = TelemetryWindow::new(8);
        window.record(metrics(10.0, 100));
        window.record(metrics(20.0, 300));

        let report = window.report();
        assert_eq!(report.pieces_generated, 2);
        assert!((report.average_generation_time_ms - 15.0).abs() < 1e-9);
        assert!((report.average_polygon_count - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_is_bounded_but_total_is_not() {
        let mut window = TelemetryWindow::new(2);
        for i in 0..10 {
            window.record(metrics(i as f64, 10));
        }
        let report = window.report();
        assert_eq!(report.pieces_generated, 10);
        // Only the last two samples (8.0 and 9.0) remain in the window
        assert!((report.average_generation_time_ms - 8.5).abs() < 1e-9);
    }
}
