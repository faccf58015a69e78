use crate::ssl::structs::security_material::SecurityMaterial;
use crate::ssl::structs::swappable_certificate_resolver::SwappableCertificateResolver;
use arc_swap::ArcSwap;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for SwappableCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let material = self.material.load();
        f.debug_struct("SwappableCertificateResolver")
            .field("source", &material.source)
            .field("loaded_at", &material.loaded_at)
            .finish()
    }
}

impl SwappableCertificateResolver {
    pub fn new(material: Arc<ArcSwap<SecurityMaterial>>) -> Self {
        Self { material }
    }

    pub fn current(&self) -> Arc<CertifiedKey> {
        self.material.load().certified_key.clone()
    }
}

impl ResolvesServerCert for SwappableCertificateResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(self.current())
    }
}
