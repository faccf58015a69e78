pub mod security_context;
pub mod security_material;
pub mod swappable_certificate_resolver;
pub mod swappable_client_verifier;
