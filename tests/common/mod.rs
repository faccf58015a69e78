#![allow(dead_code)]
use actix_ssl::config::structs::ssl_config::SslConfig;
use actix_ssl::ssl::ssl::generate_self_signed;
use actix_ssl::ssl::structs::self_signed_certificate::SelfSignedCertificate;
use p12_keystore::{Certificate, KeyStore, KeyStoreEntry, PrivateKeyChain};
use pkcs8::der::Decode;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, RootCertStore, ServerConfig, SupportedProtocolVersion};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{duplex, DuplexStream};
use tokio_rustls::{client, server, TlsAcceptor, TlsConnector};

pub const TEST_HOST: &str = "localhost";

pub fn self_signed(names: &[&str]) -> SelfSignedCertificate {
    generate_self_signed(names.iter().map(|name| name.to_string()).collect()).unwrap()
}

pub fn certificate_der(certificate: &SelfSignedCertificate) -> CertificateDer<'static> {
    CertificateDer::from(pem::parse(&certificate.certificate_pem).unwrap().into_contents())
}

pub fn write_pem(dir: &Path, certificate: &SelfSignedCertificate) -> (PathBuf, PathBuf) {
    let certificate_path = dir.join("cert.pem");
    let key_path = dir.join("key.pem");
    std::fs::write(&certificate_path, &certificate.certificate_pem).unwrap();
    std::fs::write(&key_path, &certificate.private_key_pem).unwrap();
    (certificate_path, key_path)
}

pub fn encrypt_key(private_key_pem: &str, password: &str) -> String {
    let document = pem::parse(private_key_pem).unwrap();
    let info = pkcs8::PrivateKeyInfo::from_der(document.contents()).unwrap();
    let salt = [3u8; 16];
    let iv = [5u8; 16];
    let params = pkcs8::pkcs5::pbes2::Parameters::pbkdf2_sha256_aes256cbc(2048, &salt, &iv).unwrap();
    let encrypted = info.encrypt_with_params(params, password).unwrap();
    pem::encode(&pem::Pem::new("ENCRYPTED PRIVATE KEY", encrypted.as_bytes().to_vec()))
}

/// PKCS#12 keystore holding the certificate and its key under `alias`.
pub fn keystore(certificate: &SelfSignedCertificate, alias: &str, password: &str) -> Vec<u8> {
    let key = pem::parse(&certificate.private_key_pem).unwrap();
    let leaf = Certificate::from_der(certificate_der(certificate).as_ref()).unwrap();
    let chain = PrivateKeyChain::new(key.contents(), [1u8; 20], [leaf]);
    let mut store = KeyStore::new();
    store.add_entry(alias, KeyStoreEntry::PrivateKeyChain(chain));
    store.writer(password).write().unwrap()
}

/// PKCS#12 trust store with one certificate entry per certificate.
pub fn trust_store(certificates: &[&SelfSignedCertificate], password: &str) -> Vec<u8> {
    let mut store = KeyStore::new();
    for (index, certificate) in certificates.iter().enumerate() {
        let entry = Certificate::from_der(certificate_der(certificate).as_ref()).unwrap();
        store.add_entry(&format!("trusted-{}", index), KeyStoreEntry::Certificate(entry));
    }
    store.writer(password).write().unwrap()
}

/// Secure-only configuration on an ephemeral port, identity from PEM strings.
pub fn secure_config(certificate: &SelfSignedCertificate) -> SslConfig {
    let mut config = SslConfig::default();
    config.host = Some(String::from(TEST_HOST));
    config.insecure = false;
    config.secure_port = 0;
    config
        .pem_from_string(certificate.certificate_pem.clone(), certificate.private_key_pem.clone())
        .unwrap();
    config
}

pub fn client_config(trusted: &[&SelfSignedCertificate], versions: &[&'static SupportedProtocolVersion], alpn: &[&[u8]]) -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    for certificate in trusted {
        roots.add(certificate_der(certificate)).unwrap();
    }
    let mut config = ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_protocol_versions(versions)
        .unwrap()
        .with_root_certificates(roots)
        .with_no_client_auth();
    config.alpn_protocols = alpn.iter().map(|protocol| protocol.to_vec()).collect();
    Arc::new(config)
}

pub fn default_client(trusted: &SelfSignedCertificate) -> Arc<ClientConfig> {
    client_config(&[trusted], rustls::DEFAULT_VERSIONS, &[])
}

/// Runs a full handshake over an in-memory pipe.
pub async fn handshake(server_config: Arc<ServerConfig>, client_config: Arc<ClientConfig>, server_name: &str) -> (io::Result<server::TlsStream<DuplexStream>>, io::Result<client::TlsStream<DuplexStream>>) {
    let (client_io, server_io) = duplex(64 * 1024);
    let acceptor = TlsAcceptor::from(server_config);
    let connector = TlsConnector::from(client_config);
    let name = ServerName::try_from(server_name.to_string()).unwrap();
    tokio::join!(acceptor.accept(server_io), connector.connect(name, client_io))
}

pub fn peer_leaf(stream: &client::TlsStream<DuplexStream>) -> CertificateDer<'static> {
    stream.get_ref().1.peer_certificates().unwrap()[0].clone().into_owned()
}
