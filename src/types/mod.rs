use thiserror::Error;

mod domain_types;
mod ids;
mod properties;

pub use domain_types::*;
pub use ids::*;
pub use properties::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid file path: {path} - {reason}")]
    InvalidFilePath { path: String, reason: String },
}
