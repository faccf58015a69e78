use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsPolicy {
    Modern,
    Intermediate,
    Old,
    Custom {
        cipher_suites: Vec<String>,
        protocols: Vec<String>,
    },
}
