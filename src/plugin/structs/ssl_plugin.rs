use crate::config::structs::ssl_config::SslConfig;
use crate::ssl::structs::security_context::SecurityContext;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

pub struct SslPlugin {
    pub(crate) config: Mutex<SslConfig>,
    pub(crate) context: RwLock<Option<Arc<SecurityContext>>>,
}
