use crate::config::structs::trust_store_file_config::TrustStoreFileConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TrustFileConfig {
    pub certificates: Vec<String>,
    pub trust_stores: Vec<TrustStoreFileConfig>,
}
