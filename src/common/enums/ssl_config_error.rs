use crate::common::enums::material_error::MaterialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SslConfigError {
    #[error("Invalid host provided: '{0}'")]
    InvalidHost(String),
    #[error("Invalid SSL port provided: {0}")]
    InvalidSslPort(i32),
    #[error("Invalid insecure port provided: {0}")]
    InvalidInsecurePort(i32),
    #[error("Invalid HTTP3 port provided: {0}")]
    InvalidHttp3Port(i32),
    #[error("There is no certificate or key file provided")]
    MissingCertAndKeyFile,
    #[error("Both the certificate and key must be provided using the same method")]
    MultipleIdentityLoadingOptions,
    #[error("HTTP/3 is not supported yet")]
    Http3Unsupported,
    #[error("Unsupported security provider: {0}")]
    UnsupportedSecurityProvider(String),
    #[error(transparent)]
    Material(#[from] MaterialError),
    #[error("TLS configuration rejected: {0}")]
    Tls(#[from] rustls::Error),
}
