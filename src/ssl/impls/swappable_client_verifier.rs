use crate::ssl::structs::security_material::SecurityMaterial;
use crate::ssl::structs::swappable_client_verifier::SwappableClientVerifier;
use arc_swap::ArcSwap;
use rustls::client::danger::HandshakeSignatureValid;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::{DigitallySignedStruct, DistinguishedName, SignatureScheme};
use std::sync::Arc;

impl std::fmt::Debug for SwappableClientVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwappableClientVerifier")
            .field("has_verifier", &self.material.load().client_verifier.is_some())
            .finish()
    }
}

impl SwappableClientVerifier {
    pub fn new(material: Arc<ArcSwap<SecurityMaterial>>, fallback_schemes: Vec<SignatureScheme>) -> Self {
        Self { material, fallback_schemes }
    }

    fn current(&self) -> Result<Arc<dyn ClientCertVerifier>, rustls::Error> {
        self.material
            .load()
            .client_verifier
            .clone()
            .ok_or_else(|| rustls::Error::General(String::from("no client certificate trust loaded")))
    }
}

impl ClientCertVerifier for SwappableClientVerifier {
    fn offer_client_auth(&self) -> bool {
        true
    }

    fn client_auth_mandatory(&self) -> bool {
        true
    }

    // No hints: trust may be replaced by a reload.
    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(&self, end_entity: &CertificateDer<'_>, intermediates: &[CertificateDer<'_>], now: UnixTime) -> Result<ClientCertVerified, rustls::Error> {
        self.current()?.verify_client_cert(end_entity, intermediates, now)
    }

    fn verify_tls12_signature(&self, message: &[u8], cert: &CertificateDer<'_>, dss: &DigitallySignedStruct) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.current()?.verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(&self, message: &[u8], cert: &CertificateDer<'_>, dss: &DigitallySignedStruct) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.current()?.verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        match self.material.load().client_verifier.as_ref() {
            Some(verifier) => verifier.supported_verify_schemes(),
            None => self.fallback_schemes.clone(),
        }
    }
}
