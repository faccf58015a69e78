use crate::ssl::structs::security_material::SecurityMaterial;
use crate::tls::enums::tls_policy::TlsPolicy;
use arc_swap::ArcSwap;
use rustls::crypto::CryptoProvider;
use rustls::ServerConfig;
use std::sync::Arc;

pub struct SecurityContext {
    pub(crate) material: Arc<ArcSwap<SecurityMaterial>>,
    pub(crate) server_config: Arc<ServerConfig>,
    pub(crate) policy: TlsPolicy,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) provider_name: String,
    pub(crate) client_auth: bool,
}
