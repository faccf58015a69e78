//! Shared error types and host-name helpers.
//!
//! Every fallible operation of the crate reports one of the enums defined
//! here. Configuration setters and the listener build return
//! [`SslConfigError`](enums::ssl_config_error::SslConfigError), material
//! loading wraps [`MaterialError`](enums::material_error::MaterialError),
//! reloads add the "not started yet" case through
//! [`ReloadError`](enums::reload_error::ReloadError) and binding onto an
//! actix server adds socket failures through
//! [`BindError`](enums::bind_error::BindError).

/// Host normalisation and comparison helpers.
pub mod common;

/// Error enumerations.
pub mod enums;
