//! TLS policy presets.
//!
//! A [`TlsPolicy`](enums::tls_policy::TlsPolicy) names the protocol versions
//! and cipher suites a secure listener accepts. Three presets follow the
//! Mozilla server side TLS guidelines (version 5.7):
//!
//! - **Modern**: TLSv1.3 only, for clients with no need for backwards compatibility
//! - **Intermediate**: TLSv1.2 and TLSv1.3, the recommended general-purpose setting
//! - **Old**: everything down to TLSv1, for very old clients and libraries
//!
//! A `Custom` policy carries caller-supplied lists verbatim.
//!
//! Policies are plain data. When a security context is built the policy is
//! narrowed onto a rustls `CryptoProvider`: suites and versions rustls does
//! not implement (DHE, CBC, 3DES, TLSv1, TLSv1.1) are skipped with a debug
//! line, and the provider's TLSv1.3 suites are kept whenever TLSv1.3 is
//! enabled but the policy lists none of them.
//!
//! # Example
//!
//! ```rust
//! use actix_ssl::tls::enums::tls_policy::TlsPolicy;
//!
//! let policy = TlsPolicy::Intermediate;
//! assert!(policy.supports_protocol("TLSv1.2"));
//! assert!(!TlsPolicy::Modern.supports_protocol("TLSv1.2"));
//! ```

/// Preset literals and IANA name lookups.
pub mod tls;

/// The policy enumeration.
pub mod enums;

/// Policy helpers and the rustls translation.
pub mod impls;
