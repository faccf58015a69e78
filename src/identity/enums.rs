/// Where the server identity comes from.
pub mod identity_source;

/// Where trusted client certificates come from.
pub mod trust_source;
