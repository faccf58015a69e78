use chrono::{DateTime, Utc};
use rustls::server::danger::ClientCertVerifier;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct SecurityMaterial {
    pub certified_key: Arc<CertifiedKey>,
    pub client_verifier: Option<Arc<dyn ClientCertVerifier>>,
    /// Identity source kind, e.g. `pem-path`.
    pub source: &'static str,
    pub loaded_at: DateTime<Utc>,
}
