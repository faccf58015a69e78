/// Exclusivity and labelling for identity sources.
pub mod identity_source;

/// Labelling for trust sources.
pub mod trust_source;

/// Trust configuration setters.
pub mod trust_config;
