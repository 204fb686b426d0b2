use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejection reasons produced by the chart data validation gate.
///
/// Every variant is terminal for the render attempt: the view is not built and
/// nothing is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("malformed chart json: {0}")]
    MalformedJson(String),

    #[error("malformed value: expected a number or a string, found {found}")]
    MalformedValue { found: String },

    #[error("chart json contains no series")]
    NoData,

    #[error(
        "series {series} has {horizontal} horizontal and {vertical} vertical values, expected {expected} of each"
    )]
    LengthMismatch {
        series: usize,
        horizontal: usize,
        vertical: usize,
        expected: usize,
    },

    #[error("series {series} vertical value {index} is not numeric: `{value}`")]
    NonNumericVertical {
        series: usize,
        index: usize,
        value: String,
    },
}
