use crate::common::common::is_wildcard_host;
use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::structs::ssl_config::SslConfig;
use crate::connector::connector::{DEFAULT_BACKLOG, DEFAULT_REDIRECT_HOST, INSECURE_LISTENER_NAME, SECURE_LISTENER_NAME};
use crate::connector::enums::application_protocol::ApplicationProtocol;
use crate::connector::enums::listener_kind::ListenerKind;
use crate::connector::structs::connector_factory::ConnectorFactory;
use crate::connector::structs::guard_settings::GuardSettings;
use crate::connector::structs::http_guard::HttpGuard;
use crate::connector::structs::listener_descriptor::ListenerDescriptor;
use crate::connector::structs::sni_host_resolver::SniHostResolver;
use crate::ssl::structs::security_context::SecurityContext;
use log::debug;
use std::sync::Arc;

fn port(value: i32, error: fn(i32) -> SslConfigError) -> Result<u16, SslConfigError> {
    u16::try_from(value).map_err(|_| error(value))
}

impl<'a> ConnectorFactory<'a> {
    pub fn new(config: &'a SslConfig, context: Option<Arc<SecurityContext>>) -> Self {
        Self { config, context }
    }

    /// Checks host and ports; nothing is opened or built.
    pub fn validate(config: &SslConfig) -> Result<(), SslConfigError> {
        if let Some(host) = &config.host {
            if host.trim().is_empty() {
                return Err(SslConfigError::InvalidHost(host.clone()));
            }
        }
        port(config.insecure_port, SslConfigError::InvalidInsecurePort)?;
        port(config.secure_port, SslConfigError::InvalidSslPort)?;
        port(config.http3_port, SslConfigError::InvalidHttp3Port)?;
        if config.http3 {
            return Err(SslConfigError::Http3Unsupported);
        }
        Ok(())
    }

    /// Builds every enabled listener, then runs the connector hook on each.
    pub fn create_listeners(&self) -> Result<Vec<ListenerDescriptor>, SslConfigError> {
        Self::validate(self.config)?;
        let mut listeners = Vec::with_capacity(2);
        if self.config.insecure {
            listeners.push(self.insecure_listener()?);
        }
        if self.config.secure {
            listeners.push(self.secure_listener()?);
        }
        if let Some(hook) = self.config.connector_hook() {
            for listener in listeners.iter_mut() {
                hook(listener);
            }
        }
        Ok(listeners)
    }

    pub fn insecure_listener(&self) -> Result<ListenerDescriptor, SslConfigError> {
        let mut protocols = vec![ApplicationProtocol::Http11];
        if self.config.http2 {
            protocols.push(ApplicationProtocol::H2c);
        }
        Ok(ListenerDescriptor {
            name: String::from(INSECURE_LISTENER_NAME),
            kind: ListenerKind::Insecure,
            host: self.config.host.clone(),
            port: port(self.config.insecure_port, SslConfigError::InvalidInsecurePort)?,
            protocols,
            backlog: DEFAULT_BACKLOG,
            reuse_address: true,
            tcp_keepalive: None,
            tls: None,
        })
    }

    pub fn secure_listener(&self) -> Result<ListenerDescriptor, SslConfigError> {
        let context = self.context.as_ref().ok_or(SslConfigError::MissingCertAndKeyFile)?;
        let protocols = if self.config.http2 {
            vec![ApplicationProtocol::H2, ApplicationProtocol::Http11]
        } else {
            vec![ApplicationProtocol::Http11]
        };

        let mut tls = (*context.server_config()).clone();
        tls.alpn_protocols = protocols
            .iter()
            .filter_map(ApplicationProtocol::alpn_id)
            .map(<[u8]>::to_vec)
            .collect();
        if let Some(host) = self.sni_host() {
            debug!("[CONNECTOR] Enforcing SNI host '{}' on the secure listener", host);
            tls.cert_resolver = Arc::new(SniHostResolver::new(tls.cert_resolver.clone(), host));
        }

        Ok(ListenerDescriptor {
            name: String::from(SECURE_LISTENER_NAME),
            kind: ListenerKind::Secure,
            host: self.config.host.clone(),
            port: port(self.config.secure_port, SslConfigError::InvalidSslPort)?,
            protocols,
            backlog: DEFAULT_BACKLOG,
            reuse_address: true,
            tcp_keepalive: None,
            tls: Some(Arc::new(tls)),
        })
    }

    /// Host enforced by the SNI check, if the check applies.
    pub fn sni_host(&self) -> Option<String> {
        if !self.config.sni_host_check {
            return None;
        }
        self.config
            .host
            .as_deref()
            .map(str::trim)
            .filter(|host| !is_wildcard_host(host))
            .map(str::to_owned)
    }

    pub fn guard_settings(&self) -> GuardSettings {
        let redirect_port = if self.config.redirect && self.config.secure && self.config.insecure {
            u16::try_from(self.config.secure_port).ok()
        } else {
            None
        };
        let sni_host = if self.config.secure { self.sni_host() } else { None };
        let fallback_host = self
            .config
            .host
            .as_deref()
            .map(str::trim)
            .filter(|host| !is_wildcard_host(host))
            .unwrap_or(DEFAULT_REDIRECT_HOST)
            .to_string();
        GuardSettings { redirect_port, sni_host, fallback_host }
    }

    pub fn guard(&self) -> HttpGuard {
        HttpGuard::new(self.guard_settings())
    }
}
