use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::structs::ssl_config::SslConfig;
use crate::ssl::ssl::select_crypto_provider;
use crate::ssl::structs::security_context::SecurityContext;
use crate::ssl::structs::security_material::SecurityMaterial;
use crate::ssl::structs::swappable_certificate_resolver::SwappableCertificateResolver;
use crate::ssl::structs::swappable_client_verifier::SwappableClientVerifier;
use crate::tls::enums::tls_policy::TlsPolicy;
use arc_swap::ArcSwap;
use log::{debug, info, warn};
use rustls::crypto::CryptoProvider;
use rustls::ServerConfig;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityContext")
            .field("provider", &self.provider_name)
            .field("policy", &self.policy.name())
            .field("client_auth", &self.client_auth)
            .field("material", &*self.material.load())
            .finish()
    }
}

impl SecurityContext {
    /// Builds the context for the secure listener from `config`.
    ///
    /// Reader sources in `config` are consumed.
    pub fn build(config: &mut SslConfig) -> Result<Self, SslConfigError> {
        let (provider, provider_name) = select_crypto_provider(config.security_provider.as_deref())?;
        let (restricted, versions) = config.tls_config.restrict(&provider);
        let provider = Arc::new(restricted);
        let builder = ServerConfig::builder_with_provider(provider.clone()).with_protocol_versions(&versions)?;

        let material = SecurityMaterial::load(config, &provider)?;
        let client_auth = material.client_verifier.is_some();
        let material = Arc::new(ArcSwap::from_pointee(material));

        let builder = if client_auth {
            let schemes = provider.signature_verification_algorithms.supported_schemes();
            builder.with_client_cert_verifier(Arc::new(SwappableClientVerifier::new(material.clone(), schemes)))
        } else {
            builder.with_no_client_auth()
        };
        let server_config = builder.with_cert_resolver(Arc::new(SwappableCertificateResolver::new(material.clone())));

        info!(
            "[SSL] Security context ready: provider {}, policy {}, {} cipher suite(s)",
            provider_name,
            config.tls_config.name(),
            provider.cipher_suites.len()
        );
        Ok(SecurityContext {
            material,
            server_config: Arc::new(server_config),
            policy: config.tls_config.clone(),
            provider,
            provider_name,
            client_auth,
        })
    }

    /// Loads identity and trust from `config` and swaps them in for new handshakes.
    ///
    /// Policy, provider and connector options of `config` are ignored. Without
    /// trust sources the current trust is kept; trust is ignored when client
    /// authentication was off when the context was built.
    pub fn reload(&self, config: &mut SslConfig) -> Result<Arc<SecurityMaterial>, SslConfigError> {
        let mut material = SecurityMaterial::load(config, &self.provider)?;
        match (self.client_auth, material.client_verifier.is_some()) {
            (true, false) => {
                debug!("[RELOAD] No trust sources given, keeping the current client certificate trust");
                material.client_verifier = self.material.load().client_verifier.clone();
            }
            (false, true) => {
                warn!("[RELOAD] Ignoring trust sources, client authentication was not enabled at startup");
                material.client_verifier = None;
            }
            _ => {}
        }
        if config.tls_config != self.policy {
            debug!("[RELOAD] Keeping TLS policy {} of the running listeners", self.policy.name());
        }

        let material = Arc::new(material);
        self.material.store(material.clone());
        info!("[RELOAD] Swapped in {} identity loaded at {}", material.source, material.loaded_at);
        Ok(material)
    }

    /// Base server config; its resolver and verifier follow reloads.
    pub fn server_config(&self) -> Arc<ServerConfig> {
        self.server_config.clone()
    }

    pub fn material(&self) -> Arc<SecurityMaterial> {
        self.material.load_full()
    }

    pub fn provider(&self) -> Arc<CryptoProvider> {
        self.provider.clone()
    }

    /// `ring` when configured or recognised, `process-default` for an installed default that is not ring's.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn policy(&self) -> &TlsPolicy {
        &self.policy
    }

    pub fn requires_client_auth(&self) -> bool {
        self.client_auth
    }
}
