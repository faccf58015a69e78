//! Configuration data structures.

/// In-memory plugin configuration.
pub mod ssl_config;

/// Root of the TOML configuration file.
pub mod ssl_config_file;

/// `[identity]` section of the configuration file.
pub mod identity_file_config;

/// `[trust]` section of the configuration file.
pub mod trust_file_config;

/// One `[[trust.trust_stores]]` entry.
pub mod trust_store_file_config;
