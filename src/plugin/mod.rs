//! The SSL plugin: configure, create listeners, bind, reload.
//!
//! [`SslPlugin`](structs::ssl_plugin::SslPlugin) owns one `SslConfig` and at
//! most one `SecurityContext`, shared by the listeners it creates.
//!
//! ```rust,ignore
//! use actix_ssl::plugin::structs::ssl_plugin::SslPlugin;
//! use actix_web::{web, App, HttpServer};
//!
//! let plugin = SslPlugin::configure(|config| {
//!     config.host = Some(String::from("localhost"));
//!     config.pem_from_path("cert.pem", "key.pem")
//! })?;
//! let guard = plugin.guard();
//! let server = HttpServer::new(move || App::new().wrap(guard.clone()).route("/", web::get().to(|| async { "hello" })));
//! let server = plugin.apply(server)?.run();
//!
//! // later, without restarting the listeners
//! plugin.reload(|config| config.pem_from_path("renewed-cert.pem", "renewed-key.pem"))?;
//! ```

/// Plugin structure.
pub mod structs;

/// Plugin operations.
pub mod impls;
