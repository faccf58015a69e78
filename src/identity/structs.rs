/// Ordered list of trust sources.
pub mod trust_config;
