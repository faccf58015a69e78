//! Security context construction and hot-swappable TLS material.
//!
//! A [`SecurityContext`](structs::security_context::SecurityContext) owns the
//! base `rustls::ServerConfig` of the secure listener. That config never holds
//! a certificate directly: its resolver and (with trust configured) its client
//! verifier read the current [`SecurityMaterial`](structs::security_material::SecurityMaterial)
//! from an `ArcSwap` cell, so a reload replaces identity and trust for new
//! handshakes while in-flight ones keep the `Arc` they already resolved.
//!
//! # Material sources
//!
//! - PEM certificate chain + private key (PKCS#8, PKCS#1, SEC1 or encrypted
//!   PKCS#8 with a password) from a path, resource, string or reader
//! - PKCS#12 keystore from a path, resource or reader
//! - Trusted client roots as PEM/DER certificates or PKCS#12 trust stores
//!
//! # Crypto provider
//!
//! `security_provider = Some("ring")` selects rustls' ring provider; `None`
//! uses the process-wide default provider when one is installed and ring
//! otherwise. An installed default reports as `ring` when its suites and key
//! exchange groups match ring's defaults and as `process-default` when they
//! do not. The provider is narrowed to the configured
//! [`TlsPolicy`](crate::tls::enums::tls_policy::TlsPolicy).
//!
//! # Example
//!
//! ```rust,ignore
//! use actix_ssl::config::structs::ssl_config::SslConfig;
//! use actix_ssl::ssl::structs::security_context::SecurityContext;
//!
//! let mut config = SslConfig::default();
//! config.pem_from_path("cert.pem", "key.pem")?;
//! let context = SecurityContext::build(&mut config)?;
//! println!("using {}", context.provider_name());
//! ```

/// Material parsing and certificate generation helpers.
pub mod ssl;

/// Context, material and swappable rustls hooks.
pub mod structs;

/// Implementation blocks.
pub mod impls;
