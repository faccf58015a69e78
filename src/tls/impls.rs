/// Containment helpers, display and provider narrowing for `TlsPolicy`.
pub mod tls_policy;
