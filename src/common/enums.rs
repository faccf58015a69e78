/// Errors raised while binding listeners onto a server.
pub mod bind_error;

/// Errors raised while reading or parsing certificates, keys and keystores.
pub mod material_error;

/// Errors raised by a hot reload.
pub mod reload_error;

/// Errors raised by configuration setters and listener creation.
pub mod ssl_config_error;
