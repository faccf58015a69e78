mod common;

use actix_ssl::common::enums::material_error::MaterialError;
use actix_ssl::common::enums::ssl_config_error::SslConfigError;
use actix_ssl::config::structs::ssl_config::SslConfig;
use actix_ssl::ssl::structs::security_context::SecurityContext;
use actix_ssl::tls::enums::tls_policy::TlsPolicy;
use actix_ssl::identity::structs::trust_config::TrustConfig;
use actix_ssl::ssl::structs::self_signed_certificate::SelfSignedCertificate;
use common::{certificate_der, client_config, default_client, encrypt_key, handshake, keystore, peer_leaf, secure_config, self_signed, trust_store, write_pem, TEST_HOST};
use std::io::Cursor;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::test]
async fn test_handshake_with_pem_files() {
    let certificate = self_signed(&[TEST_HOST]);
    let dir = tempfile::tempdir().unwrap();
    let (certificate_path, key_path) = write_pem(dir.path(), &certificate);

    let mut config = SslConfig::default();
    config.pem_from_path(certificate_path, key_path).unwrap();
    let context = SecurityContext::build(&mut config).unwrap();
    assert_eq!(context.material().source, "pem-path");

    let (server, client) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert!(server.is_ok());
    assert_eq!(peer_leaf(&client.unwrap()), certificate_der(&certificate));
}

#[tokio::test]
async fn test_handshake_with_pem_resources() {
    let certificate = self_signed(&[TEST_HOST]);
    let dir = tempfile::tempdir().unwrap();
    write_pem(dir.path(), &certificate);

    let mut config = SslConfig::default();
    config.resource_dirs = vec![dir.path().to_path_buf()];
    config.pem_from_resource("/cert.pem", "key.pem").unwrap();
    let context = SecurityContext::build(&mut config).unwrap();

    let (_, client) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert_eq!(peer_leaf(&client.unwrap()), certificate_der(&certificate));
}

#[tokio::test]
async fn test_handshake_with_pem_readers() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = SslConfig::default();
    config
        .pem_from_reader(
            Cursor::new(certificate.certificate_pem.clone().into_bytes()),
            Cursor::new(certificate.private_key_pem.clone().into_bytes()),
        )
        .unwrap();
    let context = SecurityContext::build(&mut config).unwrap();
    assert_eq!(context.material().source, "pem-reader");

    let (_, client) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert!(client.is_ok());
}

async fn assert_serves(config: &mut SslConfig, certificate: &SelfSignedCertificate, source: &str) {
    let context = SecurityContext::build(config).unwrap();
    let material = context.material();
    assert_eq!(material.source, source);
    assert_eq!(material.leaf_certificate(), Some(&certificate_der(certificate)));

    let (server, client) = handshake(context.server_config(), default_client(certificate), TEST_HOST).await;
    assert!(server.is_ok());
    assert_eq!(peer_leaf(&client.unwrap()), certificate_der(certificate));
}

#[tokio::test]
async fn test_handshake_with_keystore_file() {
    let certificate = self_signed(&[TEST_HOST]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keystore.p12");
    std::fs::write(&path, keystore(&certificate, "server", "changeit")).unwrap();

    let mut config = SslConfig::default();
    config.keystore_from_path(path, "changeit").unwrap();
    assert_serves(&mut config, &certificate, "keystore-path").await;
}

#[tokio::test]
async fn test_handshake_with_keystore_resource() {
    let certificate = self_signed(&[TEST_HOST]);
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("keystore.p12"), keystore(&certificate, "server", "changeit")).unwrap();

    let mut config = SslConfig::default();
    config.resource_dirs = vec![dir.path().to_path_buf()];
    config.keystore_from_resource("keystore.p12", "changeit").unwrap();
    assert_serves(&mut config, &certificate, "keystore-resource").await;
}

#[tokio::test]
async fn test_handshake_with_keystore_reader() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = SslConfig::default();
    config
        .keystore_from_reader(Cursor::new(keystore(&certificate, "server", "changeit")), "changeit")
        .unwrap();
    assert_serves(&mut config, &certificate, "keystore-reader").await;
}

#[tokio::test]
async fn test_keystore_with_wrong_password() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = SslConfig::default();
    config
        .keystore_from_reader(Cursor::new(keystore(&certificate, "server", "changeit")), "hunter2")
        .unwrap();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::KeystoreError(_)))));
}

#[tokio::test]
async fn test_encrypted_key_with_password() {
    let certificate = self_signed(&[TEST_HOST]);
    let encrypted = encrypt_key(&certificate.private_key_pem, "changeit");

    let mut config = SslConfig::default();
    config
        .pem_from_string_with_password(certificate.certificate_pem.clone(), encrypted.clone(), "changeit")
        .unwrap();
    let context = SecurityContext::build(&mut config).unwrap();
    let (_, client) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert!(client.is_ok());

    let mut config = SslConfig::default();
    config.pem_from_string(certificate.certificate_pem.clone(), encrypted).unwrap();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::MissingKeyPassword(_)))));
}

#[tokio::test]
async fn test_missing_identity() {
    let mut config = SslConfig::default();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::MissingCertAndKeyFile)));
}

#[tokio::test]
async fn test_missing_files_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SslConfig::default();
    config
        .pem_from_path(dir.path().join("absent-cert.pem"), dir.path().join("absent-key.pem"))
        .unwrap();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::CertFileNotFound(_)))));

    let mut config = SslConfig::default();
    config.resource_dirs = vec![dir.path().to_path_buf()];
    config.keystore_from_resource("absent.p12", "secret").unwrap();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::ResourceNotFound(_)))));
}

#[tokio::test]
async fn test_empty_pem_strings_fail_at_build() {
    let mut config = SslConfig::default();
    config.pem_from_string("", "").unwrap();
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::NoCertificateFound(_)))));
}

#[tokio::test]
async fn test_reader_is_consumed_once() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = SslConfig::default();
    config
        .pem_from_reader(
            Cursor::new(certificate.certificate_pem.clone().into_bytes()),
            Cursor::new(certificate.private_key_pem.clone().into_bytes()),
        )
        .unwrap();
    assert!(SecurityContext::build(&mut config).is_ok());
    let second = SecurityContext::build(&mut config);
    assert!(matches!(second, Err(SslConfigError::Material(MaterialError::ReaderConsumed(_)))));
}

#[tokio::test]
async fn test_security_provider_selection() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.security_provider = Some(String::from("ring"));
    let context = SecurityContext::build(&mut config).unwrap();
    assert_eq!(context.provider_name(), "ring");

    let mut config = secure_config(&certificate);
    config.security_provider = Some(String::from("Conscrypt"));
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::UnsupportedSecurityProvider(_))));
}

#[tokio::test]
async fn test_installed_ring_default_is_named() {
    let _ = rustls::crypto::ring::default_provider().install_default();
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    assert!(config.security_provider.is_none());
    let context = SecurityContext::build(&mut config).unwrap();
    assert_eq!(context.provider_name(), "ring");
}

#[tokio::test]
async fn test_modern_rejects_tls12_clients() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.tls_config = TlsPolicy::Modern;
    let context = SecurityContext::build(&mut config).unwrap();

    let tls12 = client_config(&[&certificate], &[&rustls::version::TLS12], &[]);
    let (server, client) = handshake(context.server_config(), tls12, TEST_HOST).await;
    assert!(server.is_err());
    assert!(client.is_err());

    let tls13 = client_config(&[&certificate], &[&rustls::version::TLS13], &[]);
    let (_, client) = handshake(context.server_config(), tls13, TEST_HOST).await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_intermediate_accepts_tls12_clients() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.tls_config = TlsPolicy::Intermediate;
    let context = SecurityContext::build(&mut config).unwrap();

    let tls12 = client_config(&[&certificate], &[&rustls::version::TLS12], &[]);
    let (_, client) = handshake(context.server_config(), tls12, TEST_HOST).await;
    let client = client.unwrap();
    assert_eq!(client.get_ref().1.protocol_version(), Some(rustls::ProtocolVersion::TLSv1_2));
}

#[tokio::test]
async fn test_old_still_negotiates_tls13() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.tls_config = TlsPolicy::Old;
    let context = SecurityContext::build(&mut config).unwrap();

    let tls13 = client_config(&[&certificate], &[&rustls::version::TLS13], &[]);
    let (_, client) = handshake(context.server_config(), tls13, TEST_HOST).await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_policy_without_usable_suites() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.tls_config = TlsPolicy::custom(["TLS_RSA_WITH_3DES_EDE_CBC_SHA"], ["TLSv1"]);
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Tls(_))));
}

#[tokio::test]
async fn test_reload_swaps_identity_for_new_handshakes() {
    let first = self_signed(&[TEST_HOST]);
    let second = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&first);
    let context = SecurityContext::build(&mut config).unwrap();
    let clients = client_config(&[&first, &second], rustls::DEFAULT_VERSIONS, &[]);

    let (server, client) = handshake(context.server_config(), clients.clone(), TEST_HOST).await;
    let mut established_server = server.unwrap();
    let mut established_client = client.unwrap();
    assert_eq!(peer_leaf(&established_client), certificate_der(&first));

    let mut renewed = SslConfig::default();
    renewed
        .pem_from_string(second.certificate_pem.clone(), second.private_key_pem.clone())
        .unwrap();
    context.reload(&mut renewed).unwrap();

    let (_, client) = handshake(context.server_config(), clients, TEST_HOST).await;
    assert_eq!(peer_leaf(&client.unwrap()), certificate_der(&second));

    assert_eq!(peer_leaf(&established_client), certificate_der(&first));
    established_client.write_all(b"ping").await.unwrap();
    established_client.flush().await.unwrap();
    let mut buffer = [0u8; 4];
    established_server.read_exact(&mut buffer).await.unwrap();
    assert_eq!(&buffer, b"ping");
}

#[tokio::test]
async fn test_failed_reload_keeps_material() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    let context = SecurityContext::build(&mut config).unwrap();
    let loaded_at = context.material().loaded_at;

    let mut broken = SslConfig::default();
    broken.pem_from_string("not a certificate", "not a key").unwrap();
    assert!(context.reload(&mut broken).is_err());
    assert_eq!(context.material().loaded_at, loaded_at);

    let (_, client) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert_eq!(peer_leaf(&client.unwrap()), certificate_der(&certificate));
}

#[tokio::test]
async fn test_trust_requires_client_certificates() {
    let certificate = self_signed(&[TEST_HOST]);
    let client_ca = self_signed(&["client"]);
    let mut config = secure_config(&certificate);
    let trusted = client_ca.certificate_pem.clone();
    config.with_trust_config(|trust| {
        trust.pem_from_string(trusted);
    });
    let context = SecurityContext::build(&mut config).unwrap();
    assert!(context.requires_client_auth());
    assert!(context.material().client_verifier.is_some());

    let (server, _) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert!(server.is_err());

    let mut renewed = SslConfig::default();
    renewed
        .pem_from_string(certificate.certificate_pem.clone(), certificate.private_key_pem.clone())
        .unwrap();
    context.reload(&mut renewed).unwrap();
    assert!(context.material().client_verifier.is_some());
}

async fn assert_client_auth_required(certificate: &SelfSignedCertificate, configure: impl FnOnce(&mut TrustConfig)) {
    let mut config = secure_config(certificate);
    config.with_trust_config(configure);
    let context = SecurityContext::build(&mut config).unwrap();
    assert!(context.requires_client_auth());

    let (server, _) = handshake(context.server_config(), default_client(certificate), TEST_HOST).await;
    assert!(server.is_err());
}

#[tokio::test]
async fn test_trust_store_sources_require_client_certificates() {
    let certificate = self_signed(&[TEST_HOST]);
    let first = self_signed(&["client-a"]);
    let second = self_signed(&["client-b"]);
    let store = trust_store(&[&first, &second], "trustit");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truststore.p12");
    std::fs::write(&path, &store).unwrap();

    let trusted_path = path.clone();
    assert_client_auth_required(&certificate, move |trust| {
        trust.trust_store_from_path(trusted_path, "trustit");
    })
    .await;

    let resource_dir = dir.path().to_path_buf();
    let mut config = secure_config(&certificate);
    config.resource_dirs = vec![resource_dir];
    config.with_trust_config(|trust| {
        trust.trust_store_from_resource("truststore.p12", "trustit");
    });
    let context = SecurityContext::build(&mut config).unwrap();
    assert!(context.requires_client_auth());
    let (server, _) = handshake(context.server_config(), default_client(&certificate), TEST_HOST).await;
    assert!(server.is_err());

    let reader_store = store.clone();
    assert_client_auth_required(&certificate, move |trust| {
        trust.trust_store_from_reader(Cursor::new(reader_store), "trustit");
    })
    .await;
}

#[tokio::test]
async fn test_trust_store_with_wrong_password() {
    let certificate = self_signed(&[TEST_HOST]);
    let store = trust_store(&[&self_signed(&["client"])], "trustit");
    let mut config = secure_config(&certificate);
    config.with_trust_config(|trust| {
        trust.trust_store_from_reader(Cursor::new(store), "wrong");
    });
    let result = SecurityContext::build(&mut config);
    assert!(matches!(result, Err(SslConfigError::Material(MaterialError::KeystoreError(_)))));
}

#[tokio::test]
async fn test_trust_is_ignored_on_reload_without_startup_trust() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    let context = SecurityContext::build(&mut config).unwrap();
    assert!(!context.requires_client_auth());

    let mut renewed = SslConfig::default();
    renewed
        .pem_from_string(certificate.certificate_pem.clone(), certificate.private_key_pem.clone())
        .unwrap();
    let trusted = certificate.certificate_pem.clone();
    renewed.with_trust_config(|trust| {
        trust.pem_from_string(trusted);
    });
    let material = context.reload(&mut renewed).unwrap();
    assert!(material.client_verifier.is_none());
}
