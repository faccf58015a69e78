use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Keystore file not found: {0}")]
    KeystoreFileNotFound(String),
    #[error("Resource not found in any resource directory: {0}")]
    ResourceNotFound(String),
    #[error("Failed to read {0}: {1}")]
    ReadError(String, String),
    #[error("Reader for {0} was already consumed")]
    ReaderConsumed(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No certificate found in {0}")]
    NoCertificateFound(String),
    #[error("No private key found in {0}")]
    NoKeyFound(String),
    #[error("Private key in {0} is encrypted but no password was provided")]
    MissingKeyPassword(String),
    #[error("Failed to decrypt private key: {0}")]
    KeyDecryptError(String),
    #[error("Failed to open keystore: {0}")]
    KeystoreError(String),
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Failed to build trust material: {0}")]
    TrustError(String),
}
