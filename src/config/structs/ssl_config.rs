use crate::config::types::ConnectorHook;
use crate::identity::enums::identity_source::IdentitySource;
use crate::identity::structs::trust_config::TrustConfig;
use crate::tls::enums::tls_policy::TlsPolicy;
use std::path::PathBuf;

pub struct SslConfig {
    /// Host to bind to; `None` binds every interface.
    pub host: Option<String>,
    pub insecure: bool,
    pub secure: bool,
    pub http2: bool,
    /// Reject requests whose SNI or Host differs from `host`.
    pub sni_host_check: bool,
    /// Send insecure requests to the secure listener.
    pub redirect: bool,
    pub insecure_port: i32,
    pub secure_port: i32,
    /// Reserved; enabling it fails listener creation.
    pub http3: bool,
    pub http3_port: i32,
    /// `None` uses the process-default rustls provider, falling back to ring.
    pub security_provider: Option<String>,
    pub tls_config: TlsPolicy,
    pub resource_dirs: Vec<PathBuf>,
    pub(crate) identity: IdentitySource,
    pub(crate) trust: TrustConfig,
    pub(crate) connector_hook: Option<ConnectorHook>,
}
