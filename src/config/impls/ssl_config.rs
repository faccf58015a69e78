use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::structs::ssl_config::SslConfig;
use crate::config::types::ConnectorHook;
use crate::connector::structs::listener_descriptor::ListenerDescriptor;
use crate::identity::enums::identity_source::IdentitySource;
use crate::identity::structs::trust_config::TrustConfig;
use crate::tls::enums::tls_policy::TlsPolicy;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_INSECURE_PORT: i32 = 80;
pub const DEFAULT_SECURE_PORT: i32 = 443;
pub const DEFAULT_HTTP3_PORT: i32 = 443;
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

impl Default for SslConfig {
    fn default() -> Self {
        SslConfig {
            host: None,
            insecure: true,
            secure: true,
            http2: true,
            sni_host_check: true,
            redirect: false,
            insecure_port: DEFAULT_INSECURE_PORT,
            secure_port: DEFAULT_SECURE_PORT,
            http3: false,
            http3_port: DEFAULT_HTTP3_PORT,
            security_provider: None,
            tls_config: TlsPolicy::default(),
            resource_dirs: vec![PathBuf::from(DEFAULT_RESOURCE_DIR)],
            identity: IdentitySource::Unset,
            trust: TrustConfig::default(),
            connector_hook: None,
        }
    }
}

impl fmt::Debug for SslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SslConfig")
            .field("host", &self.host)
            .field("insecure", &self.insecure)
            .field("secure", &self.secure)
            .field("http2", &self.http2)
            .field("sni_host_check", &self.sni_host_check)
            .field("redirect", &self.redirect)
            .field("insecure_port", &self.insecure_port)
            .field("secure_port", &self.secure_port)
            .field("http3", &self.http3)
            .field("http3_port", &self.http3_port)
            .field("security_provider", &self.security_provider)
            .field("tls_config", &self.tls_config.name())
            .field("resource_dirs", &self.resource_dirs)
            .field("identity", &self.identity)
            .field("trust", &self.trust)
            .field("connector_hook", &self.connector_hook.is_some())
            .finish()
    }
}

impl SslConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> &IdentitySource {
        &self.identity
    }

    pub fn trust(&self) -> &TrustConfig {
        &self.trust
    }

    pub fn has_trust(&self) -> bool {
        !self.trust.is_empty()
    }

    pub(crate) fn identity_mut(&mut self) -> &mut IdentitySource {
        &mut self.identity
    }

    pub(crate) fn trust_mut(&mut self) -> &mut TrustConfig {
        &mut self.trust
    }

    pub(crate) fn connector_hook(&self) -> Option<&ConnectorHook> {
        self.connector_hook.as_ref()
    }

    pub fn pem_from_path<C: Into<PathBuf>, K: Into<PathBuf>>(&mut self, certificate: C, private_key: K) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemPath {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: None,
        })
    }

    pub fn pem_from_path_with_password<C: Into<PathBuf>, K: Into<PathBuf>, P: Into<String>>(&mut self, certificate: C, private_key: K, password: P) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemPath {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: Some(password.into()),
        })
    }

    pub fn pem_from_resource<C: Into<String>, K: Into<String>>(&mut self, certificate: C, private_key: K) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemResource {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: None,
        })
    }

    pub fn pem_from_resource_with_password<C: Into<String>, K: Into<String>, P: Into<String>>(&mut self, certificate: C, private_key: K, password: P) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemResource {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: Some(password.into()),
        })
    }

    pub fn pem_from_string<C: Into<String>, K: Into<String>>(&mut self, certificate: C, private_key: K) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemString {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: None,
        })
    }

    pub fn pem_from_string_with_password<C: Into<String>, K: Into<String>, P: Into<String>>(&mut self, certificate: C, private_key: K, password: P) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::PemString {
            certificate: certificate.into(),
            private_key: private_key.into(),
            password: Some(password.into()),
        })
    }

    pub fn pem_from_reader<C, K>(&mut self, certificate: C, private_key: K) -> Result<(), SslConfigError>
    where
        C: Read + Send + 'static,
        K: Read + Send + 'static,
    {
        self.identity.try_set(IdentitySource::PemReader {
            certificate: Some(Box::new(certificate)),
            private_key: Some(Box::new(private_key)),
            password: None,
        })
    }

    pub fn pem_from_reader_with_password<C, K, P>(&mut self, certificate: C, private_key: K, password: P) -> Result<(), SslConfigError>
    where
        C: Read + Send + 'static,
        K: Read + Send + 'static,
        P: Into<String>,
    {
        self.identity.try_set(IdentitySource::PemReader {
            certificate: Some(Box::new(certificate)),
            private_key: Some(Box::new(private_key)),
            password: Some(password.into()),
        })
    }

    pub fn keystore_from_path<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, password: S) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::KeystorePath {
            path: path.into(),
            password: Some(password.into()),
        })
    }

    pub fn keystore_from_resource<N: Into<String>, S: Into<String>>(&mut self, name: N, password: S) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::KeystoreResource {
            name: name.into(),
            password: Some(password.into()),
        })
    }

    pub fn keystore_from_reader<R: Read + Send + 'static, S: Into<String>>(&mut self, reader: R, password: S) -> Result<(), SslConfigError> {
        self.identity.try_set(IdentitySource::KeystoreReader {
            reader: Some(Box::new(reader)),
            password: Some(password.into()),
        })
    }

    /// Records trust sources; any source makes client certificates mandatory.
    pub fn with_trust_config<F: FnOnce(&mut TrustConfig)>(&mut self, configure: F) -> &mut Self {
        configure(&mut self.trust);
        self
    }

    /// Registers a hook run once per listener descriptor, after every default has been applied.
    pub fn config_connectors<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut ListenerDescriptor) + Send + Sync + 'static,
    {
        self.connector_hook = Some(Arc::new(hook));
        self
    }
}
