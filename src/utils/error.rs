use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TourError>;
