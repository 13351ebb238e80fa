use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    UnexpectedStatus { service: &'static str, status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} returned an empty result")]
    EmptyResponse { service: &'static str },

    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}
