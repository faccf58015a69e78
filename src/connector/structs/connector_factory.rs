use crate::config::structs::ssl_config::SslConfig;
use crate::ssl::structs::security_context::SecurityContext;
use std::sync::Arc;

pub struct ConnectorFactory<'a> {
    pub(crate) config: &'a SslConfig,
    pub(crate) context: Option<Arc<SecurityContext>>,
}
