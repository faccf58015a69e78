/// Application protocols a listener negotiates.
pub mod application_protocol;

/// Outcome of the HTTP guard for one request.
pub mod guard_decision;

/// Plain or TLS listener.
pub mod listener_kind;
