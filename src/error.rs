use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dataset shape mismatch: {labels} labels vs {values} values")]
    ShapeMismatch { labels: usize, values: usize },

    #[error(
        "no even step count in [{min_steps}, {max_steps}] evenly divides the value span {span}"
    )]
    ScaleNotFound {
        span: f64,
        min_steps: usize,
        max_steps: usize,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
