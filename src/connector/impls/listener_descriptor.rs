use crate::common::common::join_host_port;
use crate::common::enums::bind_error::BindError;
use crate::connector::connector::DEFAULT_WILDCARD_ADDRESS;
use crate::connector::enums::application_protocol::ApplicationProtocol;
use crate::connector::enums::listener_kind::ListenerKind;
use crate::connector::structs::listener_descriptor::ListenerDescriptor;
use actix_http::{Request, Response};
use actix_service::{IntoServiceFactory, Service, ServiceFactory};
use actix_web::body::MessageBody;
use actix_web::dev::AppConfig;
use actix_web::{Error, HttpServer};
use log::info;
use rustls::ServerConfig;
use socket2::{Domain, Protocol, Socket, TcpKeepalive, Type};
use std::fmt;
use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

impl fmt::Debug for ListenerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocols", &self.protocols)
            .field("backlog", &self.backlog)
            .field("reuse_address", &self.reuse_address)
            .field("tcp_keepalive", &self.tcp_keepalive)
            .field("tls", &self.tls.is_some())
            .finish()
    }
}

impl ListenerDescriptor {
    pub fn is_secure(&self) -> bool {
        self.kind == ListenerKind::Secure
    }

    pub fn bind_address(&self) -> String {
        let host = self.host.as_deref().unwrap_or(DEFAULT_WILDCARD_ADDRESS);
        join_host_port(host, self.port)
    }

    pub fn socket_addrs(&self) -> io::Result<Vec<SocketAddr>> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_WILDCARD_ADDRESS);
        let host = host.trim_start_matches('[').trim_end_matches(']');
        Ok((host, self.port).to_socket_addrs()?.collect())
    }

    /// ALPN identifiers derived from `protocols`, in preference order.
    pub fn alpn_protocols(&self) -> Vec<Vec<u8>> {
        self.protocols
            .iter()
            .filter_map(ApplicationProtocol::alpn_id)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// TLS config of a secure listener with ALPN matching the current `protocols`.
    pub fn server_config(&self) -> Option<ServerConfig> {
        self.tls.as_ref().map(|tls| {
            let mut config = (**tls).clone();
            config.alpn_protocols = self.alpn_protocols();
            config
        })
    }

    /// Opens the listening socket with this descriptor's socket options.
    pub fn open(&self) -> io::Result<TcpListener> {
        let address = self
            .socket_addrs()?
            .into_iter()
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, format!("{} did not resolve", self.bind_address())))?;
        let domain = if address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(self.reuse_address)?;
        if let Some(idle) = self.tcp_keepalive {
            socket.set_tcp_keepalive(&TcpKeepalive::new().with_time(idle))?;
        }
        socket.bind(&address.into())?;
        socket.listen(i32::try_from(self.backlog).unwrap_or(i32::MAX))?;
        socket.set_nonblocking(true)?;
        Ok(socket.into())
    }

    fn protocol_list(&self) -> String {
        self.protocols.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }

    /// Checks that the listener can be served as described.
    ///
    /// actix-web puts h2 and http/1.1 in front of the ALPN list of every TLS listener, so a secure
    /// listener without `H2` would still negotiate h2 with any client offering it.
    pub fn ensure_servable(&self) -> Result<(), BindError> {
        if self.is_secure() && !self.protocols.contains(&ApplicationProtocol::H2) {
            return Err(BindError::Http2Required {
                name: self.name.clone(),
                protocols: self.protocol_list(),
            });
        }
        Ok(())
    }

    /// Opens the socket and hands it to `server`.
    pub fn attach<F, I, S, B>(&self, server: HttpServer<F, I, S, B>) -> Result<HttpServer<F, I, S, B>, BindError>
    where
        F: Fn() -> I + Send + Clone + 'static,
        I: IntoServiceFactory<S, Request>,
        S: ServiceFactory<Request, Config = AppConfig> + 'static,
        S::Error: Into<Error> + 'static,
        S::InitError: fmt::Debug,
        S::Response: Into<Response<B>> + 'static,
        <S::Service as Service<Request>>::Future: 'static,
        S::Service: 'static,
        B: MessageBody + 'static,
    {
        self.ensure_servable()?;
        let bind_error = |source: io::Error| BindError::Io {
            name: self.name.clone(),
            address: self.bind_address(),
            source,
        };
        let listener = self.open().map_err(bind_error)?;
        let local = listener.local_addr().map_err(bind_error)?;
        let server = match self.server_config() {
            Some(tls) => server.listen_rustls_0_23(listener, tls),
            None if self.protocols.contains(&ApplicationProtocol::H2c) => server.listen_auto_h2c(listener),
            None => server.listen(listener),
        }
        .map_err(bind_error)?;
        info!("[CONNECTOR] {} listener on {}://{} ({})", self.name, self.kind.scheme(), local, self.protocol_list());
        Ok(server)
    }
}
