use crate::errors::BenchError;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, BenchError> {
    if values.is_empty() {
        return Err(BenchError::InsufficientSample { got: 0, min: 1 });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divisor `n - 1`).
pub fn std_dev(values: &[f64]) -> Result<f64, BenchError> {
    if values.len() < 2 {
        return Err(BenchError::InsufficientSample {
            got: values.len(),
            min: 2,
        });
    }
    let n = values.len() as f64;
    let m = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1.0);
    Ok(variance.sqrt())
}

/// Standard error of the mean over `repetition` runs.
///
/// Divides by the configured repetition count rather than the number of
/// values; the runner appends exactly one value per repetition.
pub fn standard_error(std_dev: f64, repetition: i64) -> f64 {
    std_dev / (repetition as f64).sqrt()
}
