use crate::common::enums::material_error::MaterialError;
use crate::common::enums::ssl_config_error::SslConfigError;
use crate::identity::enums::identity_source::MaterialReader;
use crate::ssl::structs::self_signed_certificate::SelfSignedCertificate;
use log::{debug, info};
use p12_keystore::{KeyStore, KeyStoreEntry};
use rcgen::{CertificateParams, KeyPair};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::sign::CertifiedKey;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::sync::Arc;

pub const RING_PROVIDER: &str = "ring";
pub const PROCESS_DEFAULT_PROVIDER: &str = "process-default";

const ENCRYPTED_PRIVATE_KEY_TAG: &str = "ENCRYPTED PRIVATE KEY";

pub fn read_file(path: &Path, missing: fn(String) -> MaterialError) -> Result<Vec<u8>, MaterialError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => missing(path.display().to_string()),
        _ => MaterialError::ReadError(path.display().to_string(), e.to_string()),
    })
}

/// Drains a reader; a reader can only be drained once.
pub fn read_stream(reader: Option<MaterialReader>, label: &str) -> Result<Vec<u8>, MaterialError> {
    let mut reader = reader.ok_or_else(|| MaterialError::ReaderConsumed(label.to_string()))?;
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| MaterialError::ReadError(label.to_string(), e.to_string()))?;
    Ok(data)
}

pub fn parse_certificates(data: &[u8], origin: &str) -> Result<Vec<CertificateDer<'static>>, MaterialError> {
    let certs = rustls_pemfile::certs(&mut &data[..])
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| MaterialError::CertParseError(format!("{}: {}", origin, e)))?;
    if certs.is_empty() {
        return Err(MaterialError::NoCertificateFound(origin.to_string()));
    }
    Ok(certs)
}

/// Like [`parse_certificates`], but also accepts a single DER encoded certificate.
pub fn parse_trusted_certificates(data: &[u8], origin: &str) -> Result<Vec<CertificateDer<'static>>, MaterialError> {
    match parse_certificates(data, origin) {
        Err(MaterialError::NoCertificateFound(_)) if data.first() == Some(&0x30) => {
            Ok(vec![CertificateDer::from(data.to_vec())])
        }
        result => result,
    }
}

/// Reads the first private key of a PEM document.
///
/// PKCS#8, PKCS#1 and SEC1 keys are taken as they are; an encrypted PKCS#8
/// key needs `password`.
pub fn parse_private_key(data: &[u8], password: Option<&str>, origin: &str) -> Result<PrivateKeyDer<'static>, MaterialError> {
    let plain = rustls_pemfile::private_key(&mut &data[..])
        .map_err(|e| MaterialError::KeyParseError(format!("{}: {}", origin, e)))?;
    if let Some(key) = plain {
        return Ok(key);
    }

    let sections = pem::parse_many(data).map_err(|e| MaterialError::KeyParseError(format!("{}: {}", origin, e)))?;
    let encrypted = sections
        .iter()
        .find(|section| section.tag() == ENCRYPTED_PRIVATE_KEY_TAG)
        .ok_or_else(|| MaterialError::NoKeyFound(origin.to_string()))?;
    let password = password.ok_or_else(|| MaterialError::MissingKeyPassword(origin.to_string()))?;
    decrypt_private_key(encrypted.contents(), password)
}

pub fn decrypt_private_key(der: &[u8], password: &str) -> Result<PrivateKeyDer<'static>, MaterialError> {
    let info = pkcs8::EncryptedPrivateKeyInfo::try_from(der)
        .map_err(|e| MaterialError::KeyParseError(e.to_string()))?;
    let document = info
        .decrypt(password)
        .map_err(|e| MaterialError::KeyDecryptError(e.to_string()))?;
    Ok(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(document.as_bytes().to_vec())))
}

/// Extracts the first private key entry and its chain from a PKCS#12 keystore.
pub fn parse_keystore(data: &[u8], password: Option<&str>, origin: &str) -> Result<(Vec<CertificateDer<'static>>, PrivateKeyDer<'static>), MaterialError> {
    let keystore = KeyStore::from_pkcs12(data, password.unwrap_or_default())
        .map_err(|e| MaterialError::KeystoreError(format!("{}: {}", origin, e)))?;
    let (alias, chain) = keystore
        .private_key_chain()
        .ok_or_else(|| MaterialError::NoKeyFound(origin.to_string()))?;
    debug!("[SSL] Using keystore entry '{}' from {}", alias, origin);

    let certs: Vec<CertificateDer<'static>> = chain
        .chain()
        .iter()
        .map(|certificate| CertificateDer::from(certificate.as_der().to_vec()))
        .collect();
    if certs.is_empty() {
        return Err(MaterialError::NoCertificateFound(origin.to_string()));
    }
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(chain.key().to_vec()));
    Ok((certs, key))
}

/// Collects every trusted certificate entry of a PKCS#12 trust store.
pub fn parse_trust_store(data: &[u8], password: &str, origin: &str) -> Result<Vec<CertificateDer<'static>>, MaterialError> {
    let keystore = KeyStore::from_pkcs12(data, password)
        .map_err(|e| MaterialError::KeystoreError(format!("{}: {}", origin, e)))?;
    let certs: Vec<CertificateDer<'static>> = keystore
        .entries()
        .filter_map(|(_, entry)| match entry {
            KeyStoreEntry::Certificate(certificate) => Some(CertificateDer::from(certificate.as_der().to_vec())),
            _ => None,
        })
        .collect();
    if certs.is_empty() {
        return Err(MaterialError::NoCertificateFound(origin.to_string()));
    }
    Ok(certs)
}

pub fn certified_key(provider: &CryptoProvider, certs: Vec<CertificateDer<'static>>, key: PrivateKeyDer<'static>) -> Result<CertifiedKey, MaterialError> {
    let signing_key = provider
        .key_provider
        .load_private_key(key)
        .map_err(|e| MaterialError::CertifiedKeyError(format!("{}", e)))?;
    let certified = CertifiedKey::new(certs, signing_key);
    match certified.keys_match() {
        Ok(()) | Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => Ok(certified),
        Err(e) => Err(MaterialError::CertifiedKeyError(format!("{}", e))),
    }
}

/// Names a provider by comparing its cipher suites and key exchange groups with ring's defaults.
///
/// Anything else, such as aws-lc-rs or a trimmed ring provider, reports as `process-default`.
pub fn provider_name_of(provider: &CryptoProvider) -> &'static str {
    let ring = rustls::crypto::ring::default_provider();
    let same_suites = provider.cipher_suites.iter().map(|suite| suite.suite()).eq(ring.cipher_suites.iter().map(|suite| suite.suite()));
    let same_groups = provider.kx_groups.iter().map(|group| group.name()).eq(ring.kx_groups.iter().map(|group| group.name()));
    if same_suites && same_groups {
        RING_PROVIDER
    } else {
        PROCESS_DEFAULT_PROVIDER
    }
}

/// Resolves the configured provider name into a rustls provider and the name it reports.
pub fn select_crypto_provider(name: Option<&str>) -> Result<(Arc<CryptoProvider>, String), SslConfigError> {
    match name {
        Some(name) if name.trim().eq_ignore_ascii_case(RING_PROVIDER) => {
            Ok((Arc::new(rustls::crypto::ring::default_provider()), RING_PROVIDER.to_string()))
        }
        Some(name) => Err(SslConfigError::UnsupportedSecurityProvider(name.to_string())),
        None => match CryptoProvider::get_default() {
            Some(provider) => Ok((provider.clone(), provider_name_of(provider).to_string())),
            None => Ok((Arc::new(rustls::crypto::ring::default_provider()), RING_PROVIDER.to_string())),
        },
    }
}

/// Generates a self-signed certificate for `domains`, meant for development only.
pub fn generate_self_signed(domains: Vec<String>) -> Result<SelfSignedCertificate, rcgen::Error> {
    info!("[CERTGEN] Generating a self-signed certificate for {:?}", domains);
    let key_pair = KeyPair::generate()?;
    let params = CertificateParams::new(domains)?;
    let certificate = params.self_signed(&key_pair)?;
    Ok(SelfSignedCertificate {
        certificate_pem: certificate.pem(),
        private_key_pem: key_pair.serialize_pem(),
    })
}
