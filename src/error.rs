use thiserror::Error;

pub type SlcspResult<T> = Result<T, SlcspError>;

#[derive(Error, Debug)]
pub enum SlcspError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row does not carry a field the stage needs
    #[error("Missing field '{field}' in record")]
    MissingField { field: String },

    /// A header row does not declare a column the stage needs
    #[error("{source_name}: missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("Invalid rate '{value}': {reason}")]
    InvalidRate { value: String, reason: String },
}

impl SlcspError {
    pub fn missing_field(field: &str) -> Self {
        SlcspError::MissingField {
            field: field.to_string(),
        }
    }
}
