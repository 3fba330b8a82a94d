//! Per-stage execution statistics.

use serde::Serialize;
use std::time::Duration;

/// Counters owned by a single stage runner.
///
/// Mutated only by the owning runner's retry wrapper; read externally via
/// [`ExecutionStats::snapshot`]. Only successful terminal calls are counted.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    executions: u64,
    total_time: Duration,
}

impl ExecutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one successful invocation and its elapsed wall-clock time.
    pub fn record(&mut self, elapsed: Duration) {
        self.executions += 1;
        self.total_time += elapsed;
    }

    pub fn executions(&self) -> u64 {
        self.executions
    }

    /// Read-only snapshot for external reporting.
    pub fn snapshot(&self, name: &str) -> StatsSnapshot {
        let total_time = self.total_time.as_secs_f64();
        let average_time = if self.executions > 0 {
            total_time / self.executions as f64
        } else {
            0.0
        };
        StatsSnapshot {
            name: name.to_string(),
            executions: self.executions,
            total_time,
            average_time,
        }
    }
}

/// A point-in-time view of one stage's counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub name: String,
    pub executions: u64,
    pub total_time: f64,
    pub average_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_zero_before_any_invocation() {
        let stats = ExecutionStats::new();
        let snapshot = stats.snapshot("parse");
        assert_eq!(snapshot.executions, 0);
        assert_eq!(snapshot.average_time, 0.0);
    }

    #[test]
    fn record_accumulates_time_and_count() {
        let mut stats = ExecutionStats::new();
        stats.record(Duration::from_millis(100));
        stats.record(Duration::from_millis(300));
        let snapshot = stats.snapshot("parse");
        assert_eq!(snapshot.executions, 2);
        assert!((snapshot.total_time - 0.4).abs() < 1e-9);
        assert!((snapshot.average_time - 0.2).abs() < 1e-9);
    }
}
