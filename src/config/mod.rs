//! Configuration management module.
//!
//! [`SslConfig`](structs::ssl_config::SslConfig) is the in-memory
//! configuration consumed by the plugin: host binding, connector flags,
//! ports, TLS policy, the exclusive identity source, trust sources and the
//! connector customization hook. Identity setters enforce that exactly one
//! loading strategy is chosen.
//!
//! [`SslConfigFile`](structs::ssl_config_file::SslConfigFile) is its TOML
//! representation, used by the binary:
//!
//! ```toml
//! log_level = "info"
//! host = "localhost"
//! insecure_port = 8080
//! secure_port = 8443
//! tls_config = "intermediate"
//!
//! [identity]
//! pem_certificate = "cert.pem"
//! pem_private_key = "key.pem"
//! ```
//!
//! # Example
//!
//! ```rust
//! use actix_ssl::config::structs::ssl_config::SslConfig;
//!
//! let mut config = SslConfig::default();
//! config.pem_from_path("cert.pem", "key.pem").unwrap();
//! assert!(config.keystore_from_path("keystore.p12", "secret").is_err());
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for setters, loading and saving.
pub mod impls;

/// Shared type aliases.
pub mod types;
