use crate::common::common::hosts_match;
use crate::connector::structs::sni_host_resolver::SniHostResolver;
use log::warn;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for SniHostResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SniHostResolver")
            .field("host", &self.host)
            .field("inner", &self.inner)
            .finish()
    }
}

impl SniHostResolver {
    pub fn new(inner: Arc<dyn ResolvesServerCert>, host: String) -> Self {
        Self { inner, host }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl ResolvesServerCert for SniHostResolver {
    /// Hellos without SNI pass; the HTTP guard checks their `Host` instead.
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        if let Some(server_name) = client_hello.server_name() {
            if !hosts_match(server_name, &self.host) {
                warn!("[CONNECTOR] Refusing handshake for SNI '{}', expected '{}'", server_name, self.host);
                return None;
            }
        }
        self.inner.resolve(client_hello)
    }
}
