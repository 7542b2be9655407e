#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("usage:\n\tgobench <entry=FILE> <repetition=int>")]
    Usage,

    #[error("err: The repetition parameter must be an int.")]
    InvalidRepetition { value: String },

    #[error("Not enough measurements: got {got}, need at least {min}")]
    InsufficientSample { got: usize, min: usize },
}
