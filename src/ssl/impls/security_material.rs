use crate::common::enums::material_error::MaterialError;
use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::structs::ssl_config::SslConfig;
use crate::identity::enums::identity_source::IdentitySource;
use crate::identity::enums::trust_source::TrustSource;
use crate::identity::identity::resolve_resource;
use crate::ssl::ssl::{certified_key, parse_certificates, parse_keystore, parse_private_key, parse_trust_store, parse_trusted_certificates, read_file, read_stream};
use crate::ssl::structs::security_material::SecurityMaterial;
use chrono::Utc;
use log::info;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::danger::ClientCertVerifier;
use rustls::server::WebPkiClientVerifier;
use rustls::RootCertStore;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

type Identity = (Vec<CertificateDer<'static>>, PrivateKeyDer<'static>);

impl fmt::Debug for SecurityMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityMaterial")
            .field("source", &self.source)
            .field("chain_length", &self.certified_key.cert.len())
            .field("client_auth", &self.client_verifier.is_some())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl SecurityMaterial {
    /// Reads identity and trust from `config`, consuming any reader sources.
    pub fn load(config: &mut SslConfig, provider: &Arc<CryptoProvider>) -> Result<Self, SslConfigError> {
        let resource_dirs = config.resource_dirs.clone();
        let source = config.identity().kind();
        let (certs, key) = load_identity(config.identity_mut(), &resource_dirs)?;
        let certified_key = certified_key(provider, certs, key)?;

        let client_verifier = if config.has_trust() {
            let sources = config.trust_mut().sources_mut();
            Some(load_client_verifier(sources, &resource_dirs, provider)?)
        } else {
            None
        };

        info!(
            "[SSL] Loaded {} identity ({} certificate(s)){}",
            source,
            certified_key.cert.len(),
            if client_verifier.is_some() { " with client certificate trust" } else { "" }
        );
        Ok(SecurityMaterial {
            certified_key: Arc::new(certified_key),
            client_verifier,
            source,
            loaded_at: Utc::now(),
        })
    }

    /// DER encoding of the leaf certificate.
    pub fn leaf_certificate(&self) -> Option<&CertificateDer<'_>> {
        self.certified_key.end_entity_cert().ok()
    }
}

fn load_identity(identity: &mut IdentitySource, resource_dirs: &[PathBuf]) -> Result<Identity, SslConfigError> {
    let identity = match identity {
        IdentitySource::Unset => return Err(SslConfigError::MissingCertAndKeyFile),
        IdentitySource::PemPath { certificate, private_key, password } => {
            let certificate_data = read_file(certificate, MaterialError::CertFileNotFound)?;
            let key_data = read_file(private_key, MaterialError::KeyFileNotFound)?;
            pem_identity(
                &certificate_data,
                &key_data,
                password.as_deref(),
                &certificate.display().to_string(),
                &private_key.display().to_string(),
            )?
        }
        IdentitySource::PemResource { certificate, private_key, password } => {
            let certificate_data = read_file(&resolve_resource(resource_dirs, certificate)?, MaterialError::CertFileNotFound)?;
            let key_data = read_file(&resolve_resource(resource_dirs, private_key)?, MaterialError::KeyFileNotFound)?;
            pem_identity(&certificate_data, &key_data, password.as_deref(), certificate, private_key)?
        }
        IdentitySource::PemString { certificate, private_key, password } => pem_identity(
            certificate.as_bytes(),
            private_key.as_bytes(),
            password.as_deref(),
            "certificate string",
            "private key string",
        )?,
        IdentitySource::PemReader { certificate, private_key, password } => {
            let certificate_data = read_stream(certificate.take(), "certificate reader")?;
            let key_data = read_stream(private_key.take(), "private key reader")?;
            pem_identity(&certificate_data, &key_data, password.as_deref(), "certificate reader", "private key reader")?
        }
        IdentitySource::KeystorePath { path, password } => {
            let data = read_file(path, MaterialError::KeystoreFileNotFound)?;
            parse_keystore(&data, password.as_deref(), &path.display().to_string())?
        }
        IdentitySource::KeystoreResource { name, password } => {
            let data = read_file(&resolve_resource(resource_dirs, name)?, MaterialError::KeystoreFileNotFound)?;
            parse_keystore(&data, password.as_deref(), name)?
        }
        IdentitySource::KeystoreReader { reader, password } => {
            let data = read_stream(reader.take(), "keystore reader")?;
            parse_keystore(&data, password.as_deref(), "keystore reader")?
        }
    };
    Ok(identity)
}

fn pem_identity(certificate: &[u8], private_key: &[u8], password: Option<&str>, certificate_origin: &str, key_origin: &str) -> Result<Identity, MaterialError> {
    let certs = parse_certificates(certificate, certificate_origin)?;
    let key = parse_private_key(private_key, password, key_origin)?;
    Ok((certs, key))
}

fn load_client_verifier(sources: &mut [TrustSource], resource_dirs: &[PathBuf], provider: &Arc<CryptoProvider>) -> Result<Arc<dyn ClientCertVerifier>, MaterialError> {
    let mut roots = RootCertStore::empty();
    for source in sources.iter_mut() {
        let certs = match source {
            TrustSource::CertificatePath(path) => {
                let data = read_file(path, MaterialError::CertFileNotFound)?;
                parse_trusted_certificates(&data, &path.display().to_string())?
            }
            TrustSource::CertificateResource(name) => {
                let data = read_file(&resolve_resource(resource_dirs, name)?, MaterialError::CertFileNotFound)?;
                parse_trusted_certificates(&data, name)?
            }
            TrustSource::CertificateReader(reader) => {
                let data = read_stream(reader.take(), "trust certificate reader")?;
                parse_trusted_certificates(&data, "trust certificate reader")?
            }
            TrustSource::PemString(pem) => parse_certificates(pem.as_bytes(), "trust certificate string")?,
            TrustSource::TrustStorePath { path, password } => {
                let data = read_file(path, MaterialError::KeystoreFileNotFound)?;
                parse_trust_store(&data, password, &path.display().to_string())?
            }
            TrustSource::TrustStoreResource { name, password } => {
                let data = read_file(&resolve_resource(resource_dirs, name)?, MaterialError::KeystoreFileNotFound)?;
                parse_trust_store(&data, password, name)?
            }
            TrustSource::TrustStoreReader { reader, password } => {
                let data = read_stream(reader.take(), "trust store reader")?;
                parse_trust_store(&data, password, "trust store reader")?
            }
        };
        for certificate in certs {
            roots
                .add(certificate)
                .map_err(|e| MaterialError::TrustError(e.to_string()))?;
        }
    }

    WebPkiClientVerifier::builder_with_provider(Arc::new(roots), provider.clone())
        .build()
        .map_err(|e| MaterialError::TrustError(e.to_string()))
}
