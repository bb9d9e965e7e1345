use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("malformed assessment result '{result_id}': {source}")]
    MalformedRecord {
        result_id: String,
        #[source]
        source: konnekt_core::error::CoreError,
    },
}
