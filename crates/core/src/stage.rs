//! The uniform stage contract and its retry/statistics wrapper.

use crate::error::PipelineError;
use pagesmith_types::{ExecutionStats, StatsSnapshot, ValidationError};
use pagesmith_blocks::BlockError;
use pagesmith_templates::TemplateRenderError;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// A failure raised inside a stage.
///
/// The two variants drive retry behavior: `Validation` failures are
/// structural problems with the input and are never retried, everything else
/// is treated as transient and retried up to the policy's budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Execution(String),
}

impl From<TemplateRenderError> for StageError {
    fn from(err: TemplateRenderError) -> Self {
        StageError::Execution(err.to_string())
    }
}

impl From<BlockError> for StageError {
    fn from(err: BlockError) -> Self {
        StageError::Execution(err.to_string())
    }
}

/// One transformation with a declared input contract.
///
/// Concrete stages stay oblivious to retries and timing; [`StageRunner`]
/// composes those around any implementation by delegation.
pub trait Stage {
    type Input;
    type Output;

    /// Stage identity, used in logs, errors, and stats snapshots.
    fn name(&self) -> &'static str;

    /// Checks the input's structure before any execution attempt. Stages
    /// with a stricter contract than "present" override this.
    fn validate_input(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Runs the transformation once.
    fn execute(&self, input: &Self::Input) -> Result<Self::Output, StageError>;
}

/// Bounded-retry policy with linear backoff.
///
/// The delay before re-attempt `k` (zero-based) is `base_delay * (k + 1)`:
/// linear, not exponential.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// A policy that never sleeps between attempts. Intended for tests.
    pub fn without_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
        }
    }
}

/// Wraps a stage with validation, bounded retry, per-attempt logging, and
/// success-only statistics.
#[derive(Debug)]
pub struct StageRunner<S: Stage> {
    stage: S,
    policy: RetryPolicy,
    stats: ExecutionStats,
}

impl<S: Stage> StageRunner<S> {
    pub fn new(stage: S, policy: RetryPolicy) -> Self {
        Self {
            stage,
            policy,
            stats: ExecutionStats::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.stage.name()
    }

    /// Read-only statistics snapshot for external reporting.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.stage.name())
    }

    /// Executes the stage, retrying transient failures.
    ///
    /// Validation failures short-circuit without retry or backoff. A failed
    /// run records nothing in the success counters; a successful attempt
    /// increments the invocation count and accumulates its elapsed time.
    pub fn run(&mut self, input: &S::Input) -> Result<S::Output, PipelineError> {
        let stage = self.stage.name();

        if let Err(source) = self.stage.validate_input(input) {
            return Err(Self::input_rejected(stage, source));
        }

        let mut last_message = String::new();
        for attempt in 0..self.policy.max_attempts {
            let start = Instant::now();
            match self.stage.execute(input) {
                Ok(output) => {
                    let elapsed = start.elapsed();
                    self.stats.record(elapsed);
                    log::debug!(
                        "[{stage}] attempt {}/{} succeeded in {elapsed:.2?}",
                        attempt + 1,
                        self.policy.max_attempts
                    );
                    return Ok(output);
                }
                Err(StageError::Validation(source)) => {
                    return Err(Self::input_rejected(stage, source));
                }
                Err(StageError::Execution(message)) => {
                    log::warn!(
                        "[{stage}] attempt {}/{} failed: {message}",
                        attempt + 1,
                        self.policy.max_attempts
                    );
                    last_message = message;
                    if attempt + 1 < self.policy.max_attempts {
                        thread::sleep(self.policy.base_delay * (attempt + 1));
                    }
                }
            }
        }

        Err(PipelineError::StageExhausted {
            stage,
            attempts: self.policy.max_attempts,
            message: last_message,
        })
    }

    fn input_rejected(stage: &'static str, source: ValidationError) -> PipelineError {
        log::warn!("[{stage}] input rejected: {source}");
        PipelineError::InvalidInput { stage, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Fails the first `failures` executions, then succeeds.
    struct Flaky {
        failures: u32,
        calls: Cell<u32>,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: Cell::new(0),
            }
        }
    }

    impl Stage for Flaky {
        type Input = u32;
        type Output = u32;

        fn name(&self) -> &'static str {
            "flaky"
        }

        fn execute(&self, input: &u32) -> Result<u32, StageError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call < self.failures {
                Err(StageError::Execution(format!("boom #{call}")))
            } else {
                Ok(input * 2)
            }
        }
    }

    struct RejectsOdd;

    impl Stage for RejectsOdd {
        type Input = u32;
        type Output = u32;

        fn name(&self) -> &'static str {
            "rejects-odd"
        }

        fn validate_input(&self, input: &u32) -> Result<(), ValidationError> {
            if input % 2 == 1 {
                return Err(ValidationError::BlankField("odd input".to_string()));
            }
            Ok(())
        }

        fn execute(&self, input: &u32) -> Result<u32, StageError> {
            Ok(*input)
        }
    }

    #[test]
    fn success_after_transient_failures_records_one_invocation() {
        let mut runner = StageRunner::new(Flaky::new(2), RetryPolicy::without_backoff(3));
        let output = runner.run(&21).unwrap();
        assert_eq!(output, 42);
        assert_eq!(runner.stats().executions, 1);
    }

    #[test]
    fn exhaustion_reports_stage_attempts_and_last_cause() {
        let mut runner = StageRunner::new(Flaky::new(5), RetryPolicy::without_backoff(3));
        let err = runner.run(&1).unwrap_err();
        match err {
            PipelineError::StageExhausted {
                stage,
                attempts,
                message,
            } => {
                assert_eq!(stage, "flaky");
                assert_eq!(attempts, 3);
                assert_eq!(message, "boom #2");
            }
            other => panic!("expected StageExhausted, got {other:?}"),
        }
        assert_eq!(runner.stats().executions, 0);
    }

    #[test]
    fn validation_failure_is_not_retried() {
        let mut runner = StageRunner::new(RejectsOdd, RetryPolicy::default());
        let err = runner.run(&3).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput { stage, .. } if stage == "rejects-odd"));
        assert_eq!(runner.stats().executions, 0);
    }

    #[test]
    fn stats_accumulate_across_successful_runs() {
        let mut runner = StageRunner::new(Flaky::new(0), RetryPolicy::default());
        runner.run(&1).unwrap();
        runner.run(&2).unwrap();
        let stats = runner.stats();
        assert_eq!(stats.executions, 2);
        assert!(stats.average_time >= 0.0);
    }
}
