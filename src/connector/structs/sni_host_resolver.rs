use rustls::server::ResolvesServerCert;
use std::sync::Arc;

pub struct SniHostResolver {
    pub(crate) inner: Arc<dyn ResolvesServerCert>,
    pub(crate) host: String,
}
