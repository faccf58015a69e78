use crate::common::enums::bind_error::BindError;
use crate::common::enums::reload_error::ReloadError;
use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::structs::ssl_config::SslConfig;
use crate::connector::structs::connector_factory::ConnectorFactory;
use crate::connector::structs::http_guard::HttpGuard;
use crate::connector::structs::listener_descriptor::ListenerDescriptor;
use crate::plugin::structs::ssl_plugin::SslPlugin;
use crate::ssl::structs::security_context::SecurityContext;
use actix_http::{Request, Response};
use actix_service::{IntoServiceFactory, Service, ServiceFactory};
use actix_web::body::MessageBody;
use actix_web::dev::AppConfig;
use actix_web::{Error, HttpServer};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;

pub const PLUGIN_NAME: &str = "SSL Plugin";

impl fmt::Debug for SslPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SslPlugin")
            .field("config", &*self.config.lock())
            .field("context", &*self.context.read())
            .finish()
    }
}

impl SslPlugin {
    pub fn new(config: SslConfig) -> Self {
        Self {
            config: Mutex::new(config),
            context: RwLock::new(None),
        }
    }

    /// Creates a plugin from a default configuration adjusted by `configure`.
    pub fn configure<F>(configure: F) -> Result<Self, SslConfigError>
    where
        F: FnOnce(&mut SslConfig) -> Result<(), SslConfigError>,
    {
        let mut config = SslConfig::default();
        configure(&mut config)?;
        Ok(Self::new(config))
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn security_context(&self) -> Option<Arc<SecurityContext>> {
        self.context.read().clone()
    }

    /// Validates the configuration, builds the security context once and describes every listener.
    pub fn create_listeners(&self) -> Result<Vec<ListenerDescriptor>, SslConfigError> {
        let mut config = self.config.lock();
        ConnectorFactory::validate(&config)?;
        let context = if config.secure {
            Some(self.ensure_context(&mut config)?)
        } else {
            None
        };
        ConnectorFactory::new(&config, context).create_listeners()
    }

    fn ensure_context(&self, config: &mut SslConfig) -> Result<Arc<SecurityContext>, SslConfigError> {
        if let Some(context) = self.security_context() {
            return Ok(context);
        }
        let context = Arc::new(SecurityContext::build(config)?);
        *self.context.write() = Some(context.clone());
        Ok(context)
    }

    /// Middleware handling redirects and the SNI host check; wrap the application with it.
    pub fn guard(&self) -> HttpGuard {
        let config = self.config.lock();
        ConnectorFactory::new(&config, None).guard()
    }

    /// Opens every listener and attaches it to `server`. Nothing is bound unless every listener can be served.
    pub fn apply<F, I, S, B>(&self, server: HttpServer<F, I, S, B>) -> Result<HttpServer<F, I, S, B>, BindError>
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
        let listeners = self.create_listeners()?;
        for listener in &listeners {
            listener.ensure_servable()?;
        }
        let mut server = server;
        for listener in &listeners {
            server = listener.attach(server)?;
        }
        Ok(server)
    }

    /// Reloads identity (and trust) from a fresh configuration adjusted by `configure`.
    pub fn reload<F>(&self, configure: F) -> Result<(), ReloadError>
    where
        F: FnOnce(&mut SslConfig) -> Result<(), SslConfigError>,
    {
        let context = self.security_context().ok_or(ReloadError::NotStarted)?;
        let mut config = SslConfig::default();
        configure(&mut config)?;
        context.reload(&mut config)?;
        Ok(())
    }

    pub fn reload_with(&self, mut config: SslConfig) -> Result<(), ReloadError> {
        let context = self.security_context().ok_or(ReloadError::NotStarted)?;
        context.reload(&mut config)?;
        Ok(())
    }
}
