//! Listener creation and binding.
//!
//! The [`ConnectorFactory`](structs::connector_factory::ConnectorFactory)
//! validates host and ports, then turns an `SslConfig` into at most two
//! [`ListenerDescriptor`](structs::listener_descriptor::ListenerDescriptor)s:
//!
//! - **insecure**: HTTP/1.1, plus h2c with prior knowledge when `http2` is on
//! - **secure**: TLS with ALPN `h2, http/1.1`, served with the security
//!   context's live material. actix-web always offers h2 on TLS listeners,
//!   so a secure listener without h2 is refused with
//!   `BindError::Http2Required` before any socket is opened
//!
//! Each descriptor carries its socket options and is handed to the
//! connector hook last, so callers can adjust anything the defaults set.
//! Descriptors open their own sockets (socket2) and attach them to an actix
//! `HttpServer`.
//!
//! # SNI host check
//!
//! With `sni_host_check` on and a concrete `host`, the secure listener
//! rejects handshakes whose SNI names another host, and the
//! [`HttpGuard`](structs::http_guard::HttpGuard) middleware answers
//! `400 Error 400 Invalid SNI` to requests on the secure listener whose
//! `Host` names another host (for example a connection made by IP address,
//! which carries no SNI). The same middleware redirects the insecure
//! listener to HTTPS when `redirect` is on.

/// Protocol identifiers and socket defaults.
pub mod connector;

/// Listener and protocol enumerations.
pub mod enums;

/// Descriptor, factory, resolver and middleware structures.
pub mod structs;

/// Implementation blocks.
pub mod impls;
