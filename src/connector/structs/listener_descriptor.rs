use crate::connector::enums::application_protocol::ApplicationProtocol;
use crate::connector::enums::listener_kind::ListenerKind;
use rustls::ServerConfig;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct ListenerDescriptor {
    pub name: String,
    pub kind: ListenerKind,
    /// `None` binds every interface.
    pub host: Option<String>,
    pub port: u16,
    /// Ordered by preference.
    pub protocols: Vec<ApplicationProtocol>,
    pub backlog: u32,
    pub reuse_address: bool,
    /// Idle time before TCP keep-alive probes start.
    pub tcp_keepalive: Option<Duration>,
    pub tls: Option<Arc<ServerConfig>>,
}
