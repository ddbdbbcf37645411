use thiserror::Error;

/// Invalid layout configuration. Raised while building a `LayoutConfig`,
/// never during a layout pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid configuration: palette color {index} is blank")]
    BlankColor { index: usize },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid label list: {0}")]
    InvalidJson(String),
    #[error("label {index} must be a string or null")]
    InvalidEntry { index: usize },
}
