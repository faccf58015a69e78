/// Configuration, security context and listener lifecycle.
pub mod ssl_plugin;
