//! # actix-ssl
//!
//! Exclusive TLS identity configuration, vetted TLS policies and
//! hot-reloadable HTTPS listeners for actix-web.
//!
//! ## Overview
//!
//! A caller describes where the server identity comes from (PEM files,
//! resources, strings or readers, or a PKCS#12 keystore), which TLS policy to
//! apply and which connectors to open. The crate validates that exactly one
//! identity strategy was chosen, turns the description into a rustls
//! security context plus listener descriptors, binds them onto an actix-web
//! `HttpServer`, and can swap the live certificate material at runtime
//! without closing the listening sockets.
//!
//! ## Features
//!
//! - **Exclusive identity sources**: a second loading strategy is an error, never a silent override
//! - **TLS policies**: Mozilla Modern, Intermediate and Old presets, or custom lists
//! - **Connectors**: plain HTTP/1.1 + h2c and TLS with ALPN `h2`/`http/1.1`
//! - **SNI host check**: foreign SNI names are refused, foreign `Host` headers get `400`
//! - **Redirect**: plain HTTP requests can be redirected to HTTPS
//! - **Client certificates**: optional trust sources enable mandatory client authentication
//! - **Hot reload**: identity and trust are swapped atomically for new handshakes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use actix_ssl::plugin::structs::ssl_plugin::SslPlugin;
//!
//! let plugin = SslPlugin::configure(|config| {
//!     config.secure_port = 8443;
//!     config.insecure_port = 8080;
//!     config.pem_from_path("cert.pem", "key.pem")
//! })?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Error taxonomy and host helpers
//! - [`config`] - In-memory configuration and the TOML config file
//! - [`connector`] - Listener descriptors, socket binding and the HTTP guard
//! - [`identity`] - Identity and trust source recording
//! - [`plugin`] - The plugin facade and reload coordinator
//! - [`ssl`] - Security context and material loading
//! - [`tls`] - TLS policy presets

/// Shared error types and host helpers.
pub mod common;

/// Configuration management module.
///
/// Holds the in-memory `SslConfig` with its exclusive identity setters and
/// the TOML configuration file used by the binary.
pub mod config;

/// Listener creation, socket binding and request guarding.
pub mod connector;

/// Identity and trust source recording.
pub mod identity;

/// Console logging setup.
pub mod logging;

/// The plugin facade tying configuration, context and listeners together.
pub mod plugin;

/// Security context construction and hot-swappable TLS material.
///
/// Reads certificates, keys and keystores, narrows the crypto provider to the
/// configured TLS policy and keeps the live material in a swappable cell.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

/// TLS policy presets and their translation onto rustls.
pub mod tls;
