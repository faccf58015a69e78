//! Credential source resolution.
//!
//! An [`IdentitySource`](enums::identity_source::IdentitySource) records
//! *where* the server certificate and private key come from, without reading
//! anything. Exactly one loading strategy may be chosen per configuration:
//! every setter funnels through [`IdentitySource::try_set`], which refuses a
//! second strategy (or the same one twice) with
//! `SslConfigError::MultipleIdentityLoadingOptions` and leaves the recorded
//! source untouched.
//!
//! Trust material for client certificate authentication is recorded the same
//! way in a [`TrustConfig`](structs::trust_config::TrustConfig), except that
//! any number of trust sources may be combined.
//!
//! # Resources
//!
//! Resource variants name files relative to the configured resource
//! directories (`resources/` by default). They are resolved in directory
//! order by [`resolve_resource`](identity::resolve_resource) when the
//! security context is built.

/// Resource lookup.
pub mod identity;

/// Identity and trust source enumerations.
pub mod enums;

/// Trust configuration container.
pub mod structs;

/// Implementation blocks.
pub mod impls;
