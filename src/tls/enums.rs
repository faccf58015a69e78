/// Named or custom protocol/cipher-suite bundles.
pub mod tls_policy;
