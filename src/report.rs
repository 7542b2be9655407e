use chrono::{DateTime, SecondsFormat, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::errors::BenchError;
use crate::stats;
use crate::types::{Invocation, OutputFormat, Sample};

/// Summary derived from a finished sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    /// Two or more measurements.
    Summary {
        mean: f64,
        std_dev: f64,
        standard_error: f64,
    },
    /// Exactly one measurement, in seconds.
    Single(f64),
    Empty,
}

impl Report {
    /// Branches on sample size up front so the std-dev path only ever sees
    /// two or more values.
    pub fn from_values(values: &[f64], repetition: i64) -> Result<Self, BenchError> {
        match values {
            [] => Ok(Report::Empty),
            [only] => Ok(Report::Single(*only)),
            _ => {
                let mean = stats::mean(values)?;
                let std_dev = stats::std_dev(values)?;
                Ok(Report::Summary {
                    mean,
                    std_dev,
                    standard_error: stats::standard_error(std_dev, repetition),
                })
            }
        }
    }
}

fn paint_value(value: f64, colored: bool) -> String {
    let text = value.to_string();
    if colored {
        text.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    } else {
        text
    }
}

/// Text report. Tabs, trailing spaces and the blank line before `Time:` are
/// part of the output format.
pub fn format_text(
    invocation: &Invocation,
    repetition: i64,
    report: &Report,
    format: &OutputFormat,
) -> String {
    let colored = matches!(format, OutputFormat::Default);
    let description = invocation.description();
    let header = if colored {
        description
            .if_supports_color(Stream::Stdout, |s| s.bold())
            .to_string()
    } else {
        description
    };

    let mut out = format!("{}\n\tNumber of repetition: {}\n", header, repetition);

    match report {
        Report::Summary {
            mean,
            std_dev,
            standard_error,
        } => {
            out.push_str(&format!(
                "\tAverage of sample is {} \n",
                paint_value(*mean, colored)
            ));
            out.push_str(&format!(
                "\tStandard Deviation of sample is {} \n",
                paint_value(*std_dev, colored)
            ));
            out.push_str(&format!(
                "\tStandard error of the mean is {}\n",
                paint_value(*standard_error, colored)
            ));
        }
        Report::Single(secs) => {
            out.push_str(&format!("\nTime: {}\n", paint_value(*secs, colored)));
        }
        Report::Empty => {}
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entry: &'a str,
    command: &'a str,
    repetition: i64,
    started_at: String,
    samples: Vec<f64>,
    exit_codes: Vec<Option<i32>>,
    mean: Option<f64>,
    std_dev: Option<f64>,
    standard_error: Option<f64>,
}

pub fn format_json(
    invocation: &Invocation,
    repetition: i64,
    sample: &Sample,
    report: &Report,
    started_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let (mean, std_dev, standard_error) = match *report {
        Report::Summary {
            mean,
            std_dev,
            standard_error,
        } => (Some(mean), Some(std_dev), Some(standard_error)),
        Report::Single(_) | Report::Empty => (None, None, None),
    };

    let json = JsonReport {
        entry: invocation.entry(),
        command: invocation.command(),
        repetition,
        started_at: started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        samples: sample.seconds(),
        exit_codes: sample.exit_codes(),
        mean,
        std_dev,
        standard_error,
    };

    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}
