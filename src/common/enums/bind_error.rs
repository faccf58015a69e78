use crate::common::enums::ssl_config_error::SslConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    Configuration(#[from] SslConfigError),
    #[error("Unable to bind {name} listener on {address}: {source}")]
    Io {
        name: String,
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("The {name} listener offers only {protocols} over TLS, but actix-web always negotiates h2 first; enable http2 for the secure connector")]
    Http2Required {
        name: String,
        protocols: String,
    },
}
