use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),
    #[error("replacement ratio must be within 0.0..=1.0, got {0}")]
    InvalidRatio(f64),
    #[error("missing required column: {0:?}")]
    MissingColumn(String),
    #[error("span {start}..{end} conflicts within source of {source_len} bytes")]
    SpanConflict {
        start: usize,
        end: usize,
        source_len: usize,
    },
    #[error("input table has no rows")]
    EmptyTable,
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SwitchError>;
