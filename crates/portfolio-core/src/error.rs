use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("unknown section label: {0:?}")]
    UnknownSection(String),
    #[error("viewport must have a positive size, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
