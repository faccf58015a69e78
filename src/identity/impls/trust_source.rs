use crate::identity::enums::trust_source::TrustSource;
use std::fmt;

impl fmt::Debug for TrustSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustSource::CertificatePath(path) => f.debug_tuple("CertificatePath").field(path).finish(),
            TrustSource::CertificateResource(name) => f.debug_tuple("CertificateResource").field(name).finish(),
            TrustSource::CertificateReader(reader) => f
                .debug_struct("CertificateReader")
                .field("consumed", &reader.is_none())
                .finish(),
            TrustSource::PemString(_) => f.write_str("PemString(..)"),
            TrustSource::TrustStorePath { path, .. } => f
                .debug_struct("TrustStorePath")
                .field("path", path)
                .finish_non_exhaustive(),
            TrustSource::TrustStoreResource { name, .. } => f
                .debug_struct("TrustStoreResource")
                .field("name", name)
                .finish_non_exhaustive(),
            TrustSource::TrustStoreReader { reader, .. } => f
                .debug_struct("TrustStoreReader")
                .field("consumed", &reader.is_none())
                .finish_non_exhaustive(),
        }
    }
}

impl TrustSource {
    pub fn kind(&self) -> &'static str {
        match self {
            TrustSource::CertificatePath(_) => "certificate-path",
            TrustSource::CertificateResource(_) => "certificate-resource",
            TrustSource::CertificateReader(_) => "certificate-reader",
            TrustSource::PemString(_) => "pem-string",
            TrustSource::TrustStorePath { .. } => "trust-store-path",
            TrustSource::TrustStoreResource { .. } => "trust-store-resource",
            TrustSource::TrustStoreReader { .. } => "trust-store-reader",
        }
    }
}
