use crate::config::structs::identity_file_config::IdentityFileConfig;
use crate::config::structs::trust_file_config::TrustFileConfig;
use crate::tls::enums::tls_policy::TlsPolicy;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SslConfigFile {
    pub log_level: String,
    pub host: Option<String>,
    pub insecure: bool,
    pub secure: bool,
    pub http2: bool,
    pub sni_host_check: bool,
    pub redirect: bool,
    pub insecure_port: i32,
    pub secure_port: i32,
    pub workers: Option<usize>,
    pub security_provider: Option<String>,
    pub tls_config: TlsPolicy,
    pub resource_dirs: Vec<String>,
    pub identity: Option<IdentityFileConfig>,
    pub trust: Option<TrustFileConfig>,
}
