/// Live context of the secure listener.
pub mod security_context;

/// One immutable generation of identity and trust material.
pub mod security_material;

/// Certificate resolver reading the live material.
pub mod swappable_certificate_resolver;

/// Client certificate verifier reading the live material.
pub mod swappable_client_verifier;

/// PEM output of the self-signed certificate generator.
pub mod self_signed_certificate;
