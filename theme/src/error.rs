#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ThemeError {
    #[error("invalid color format: {input:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidColorFormat { input: String },
    #[error("opacity out of range: {value} (expected 0.0..=1.0)")]
    OpacityOutOfRange { value: f64 },
    #[error("unknown palette role: {name:?}")]
    UnknownRole { name: String },
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
