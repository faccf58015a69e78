use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrustStoreFileConfig {
    pub path: String,
    pub password: String,
}
