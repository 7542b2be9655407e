use std::time::Duration;

use clap::ValueEnum;

use crate::errors::BenchError;

pub const DEFAULT_LAUNCHER: &str = "go run";

/// The program under test and the shell command that runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    entry: String,
    command: String,
}

impl Invocation {
    /// Builds `"<launcher> <entry>"`. The entry is passed to the shell verbatim.
    pub fn new(launcher: &str, entry: &str) -> Self {
        Self {
            entry: entry.to_string(),
            command: format!("{} {}", launcher, entry),
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn description(&self) -> String {
        format!("Experiment using {}", self.entry)
    }
}

/// Parses the repetition argument as a base-10 integer, ignoring surrounding
/// whitespace. Zero and negative values are valid and simply mean "run nothing".
pub fn parse_repetition(raw: &str) -> Result<i64, BenchError> {
    raw.trim().parse::<i64>().map_err(|_| BenchError::InvalidRepetition {
        value: raw.to_string(),
    })
}

/// One timed invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub elapsed: Duration,
    /// Exit code of the child; `None` if it could not be spawned or died by signal.
    pub status: Option<i32>,
}

impl Trial {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Trials in execution order. Append-only.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    trials: Vec<Trial>,
}

impl Sample {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trials: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, trial: Trial) {
        self.trials.push(trial);
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn seconds(&self) -> Vec<f64> {
        self.trials.iter().map(Trial::seconds).collect()
    }

    pub fn exit_codes(&self) -> Vec<Option<i32>> {
        self.trials.iter().map(|t| t.status).collect()
    }
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Default,
    Plain,
}
