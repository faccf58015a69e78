pub mod application_protocol;
pub mod connector_factory;
pub mod guard_settings;
pub mod http_guard;
pub mod listener_descriptor;
pub mod listener_kind;
pub mod sni_host_resolver;
