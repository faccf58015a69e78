use crate::common::enums::ssl_config_error::SslConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("Cannot reload before the listeners have been created, or when the secure connector is disabled")]
    NotStarted,
    #[error(transparent)]
    Configuration(#[from] SslConfigError),
}
