use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("incomplete submission for '{category}': {answered} of {total} questions answered")]
    Incomplete {
        category: String,
        answered: u32,
        total: u32,
    },
}
