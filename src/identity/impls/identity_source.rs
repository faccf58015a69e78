use crate::common::enums::ssl_config_error::SslConfigError;
use crate::identity::enums::identity_source::IdentitySource;
use std::fmt;

impl Default for IdentitySource {
    fn default() -> Self {
        IdentitySource::Unset
    }
}

impl fmt::Debug for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySource::Unset => f.write_str("Unset"),
            IdentitySource::PemPath { certificate, private_key, password } => f
                .debug_struct("PemPath")
                .field("certificate", certificate)
                .field("private_key", private_key)
                .field("password", &password.as_ref().map(|_| "***"))
                .finish(),
            IdentitySource::PemResource { certificate, private_key, password } => f
                .debug_struct("PemResource")
                .field("certificate", certificate)
                .field("private_key", private_key)
                .field("password", &password.as_ref().map(|_| "***"))
                .finish(),
            IdentitySource::PemString { password, .. } => f
                .debug_struct("PemString")
                .field("password", &password.as_ref().map(|_| "***"))
                .finish_non_exhaustive(),
            IdentitySource::PemReader { certificate, password, .. } => f
                .debug_struct("PemReader")
                .field("consumed", &certificate.is_none())
                .field("password", &password.as_ref().map(|_| "***"))
                .finish_non_exhaustive(),
            IdentitySource::KeystorePath { path, password } => f
                .debug_struct("KeystorePath")
                .field("path", path)
                .field("password", &password.as_ref().map(|_| "***"))
                .finish(),
            IdentitySource::KeystoreResource { name, password } => f
                .debug_struct("KeystoreResource")
                .field("name", name)
                .field("password", &password.as_ref().map(|_| "***"))
                .finish(),
            IdentitySource::KeystoreReader { reader, password } => f
                .debug_struct("KeystoreReader")
                .field("consumed", &reader.is_none())
                .field("password", &password.as_ref().map(|_| "***"))
                .finish(),
        }
    }
}

impl IdentitySource {
    pub fn is_set(&self) -> bool {
        !matches!(self, IdentitySource::Unset)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            IdentitySource::Unset => "unset",
            IdentitySource::PemPath { .. } => "pem-path",
            IdentitySource::PemResource { .. } => "pem-resource",
            IdentitySource::PemString { .. } => "pem-string",
            IdentitySource::PemReader { .. } => "pem-reader",
            IdentitySource::KeystorePath { .. } => "keystore-path",
            IdentitySource::KeystoreResource { .. } => "keystore-resource",
            IdentitySource::KeystoreReader { .. } => "keystore-reader",
        }
    }

    /// Records `source` if nothing has been recorded yet.
    pub fn try_set(&mut self, source: IdentitySource) -> Result<(), SslConfigError> {
        if self.is_set() {
            return Err(SslConfigError::MultipleIdentityLoadingOptions);
        }
        *self = source;
        Ok(())
    }
}
