use std::io::Read;
use std::path::PathBuf;

pub type MaterialReader = Box<dyn Read + Send>;

/// PEM variants carry a certificate chain and a private key plus the optional
/// key password; keystore variants carry a PKCS#12 file and its password.
///
/// Reader variants are consumed when the security context is built.
pub enum IdentitySource {
    Unset,
    PemPath {
        certificate: PathBuf,
        private_key: PathBuf,
        password: Option<String>,
    },
    PemResource {
        certificate: String,
        private_key: String,
        password: Option<String>,
    },
    PemString {
        certificate: String,
        private_key: String,
        password: Option<String>,
    },
    PemReader {
        certificate: Option<MaterialReader>,
        private_key: Option<MaterialReader>,
        password: Option<String>,
    },
    KeystorePath {
        path: PathBuf,
        password: Option<String>,
    },
    KeystoreResource {
        name: String,
        password: Option<String>,
    },
    KeystoreReader {
        reader: Option<MaterialReader>,
        password: Option<String>,
    },
}
