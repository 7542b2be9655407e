use std::time::Instant;

use crate::executor::Executor;
use crate::types::{Invocation, Sample, Trial};

// Upper bound on the up-front allocation; huge repetition counts grow lazily.
const MAX_PREALLOCATED_TRIALS: usize = 4096;

/// Runs `invocation` `repetition` times, one after another, and returns the
/// elapsed time of each run in order. A repetition of zero or less runs nothing.
///
/// Child exit codes are kept on each `Trial` but never stop the loop.
pub fn run_trials(
    invocation: &Invocation,
    repetition: i64,
    executor: &mut impl Executor,
) -> Sample {
    let planned = usize::try_from(repetition).unwrap_or(0);
    let mut sample = Sample::with_capacity(planned.min(MAX_PREALLOCATED_TRIALS));

    for index in 0..repetition.max(0) {
        let start = Instant::now();
        let status = executor.execute(invocation.command());
        let elapsed = start.elapsed();

        tracing::debug!(
            trial = index + 1,
            of = repetition,
            elapsed_secs = elapsed.as_secs_f64(),
            status = ?status,
            "trial finished"
        );
        sample.push(Trial { elapsed, status });
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    /// Records every command it is asked to run.
    struct RecordingExecutor {
        commands: Vec<String>,
        status: Option<i32>,
        delay: Duration,
    }

    impl RecordingExecutor {
        fn new(status: Option<i32>) -> Self {
            Self {
                commands: Vec::new(),
                status,
                delay: Duration::ZERO,
            }
        }
    }

    impl Executor for RecordingExecutor {
        fn execute(&mut self, command: &str) -> Option<i32> {
            self.commands.push(command.to_string());
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            self.status
        }
    }

    #[test]
    fn test_one_trial_per_repetition() {
        let inv = Invocation::new("go run", "bench.go");
        let mut exec = RecordingExecutor::new(Some(0));
        let sample = run_trials(&inv, 5, &mut exec);

        assert_eq!(sample.len(), 5);
        assert_eq!(exec.commands.len(), 5);
        assert!(exec.commands.iter().all(|c| c == "go run bench.go"));
        assert!(sample.seconds().iter().all(|s| *s >= 0.0));
    }

    #[test]
    fn test_zero_repetition_runs_nothing() {
        let inv = Invocation::new("go run", "bench.go");
        let mut exec = RecordingExecutor::new(Some(0));
        let sample = run_trials(&inv, 0, &mut exec);

        assert!(sample.is_empty());
        assert!(exec.commands.is_empty());
    }

    #[test]
    fn test_negative_repetition_runs_nothing() {
        let inv = Invocation::new("go run", "bench.go");
        let mut exec = RecordingExecutor::new(Some(0));
        let sample = run_trials(&inv, -3, &mut exec);

        assert!(sample.is_empty());
        assert!(exec.commands.is_empty());
    }

    #[test]
    fn test_failures_do_not_stop_the_loop() {
        let inv = Invocation::new("go run", "missing.go");
        let mut exec = RecordingExecutor::new(None);
        let sample = run_trials(&inv, 3, &mut exec);

        assert_eq!(sample.len(), 3);
        assert_eq!(sample.exit_codes(), vec![None, None, None]);
    }

    #[test]
    fn test_elapsed_covers_execution() {
        let inv = Invocation::new("go run", "bench.go");
        let mut exec = RecordingExecutor::new(Some(0));
        exec.delay = Duration::from_millis(20);
        let sample = run_trials(&inv, 2, &mut exec);

        for trial in sample.trials() {
            assert!(trial.elapsed >= Duration::from_millis(20));
        }
    }
}
