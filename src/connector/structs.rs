/// Validates options and builds listener descriptors.
pub mod connector_factory;

/// Redirect and SNI settings shared by the guard middleware.
pub mod guard_settings;

/// Middleware factory wrapped around the application.
pub mod http_guard;

/// Per-worker middleware service.
pub mod http_guard_middleware;

/// One listener with its socket options and TLS config.
pub mod listener_descriptor;

/// Certificate resolver refusing foreign SNI names.
pub mod sni_host_resolver;
