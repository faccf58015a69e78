use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IdentityFileConfig {
    pub pem_certificate: Option<String>,
    pub pem_private_key: Option<String>,
    pub private_key_password: Option<String>,
    pub keystore: Option<String>,
    pub keystore_password: Option<String>,
}
