use crate::identity::enums::identity_source::MaterialReader;
use std::path::PathBuf;

/// Certificate variants accept PEM or a single DER certificate.
pub enum TrustSource {
    CertificatePath(PathBuf),
    CertificateResource(String),
    CertificateReader(Option<MaterialReader>),
    PemString(String),
    TrustStorePath { path: PathBuf, password: String },
    TrustStoreResource { name: String, password: String },
    TrustStoreReader { reader: Option<MaterialReader>, password: String },
}
