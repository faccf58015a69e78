use crate::ssl::structs::security_material::SecurityMaterial;
use arc_swap::ArcSwap;
use rustls::SignatureScheme;
use std::sync::Arc;

pub struct SwappableClientVerifier {
    pub(crate) material: Arc<ArcSwap<SecurityMaterial>>,
    pub(crate) fallback_schemes: Vec<SignatureScheme>,
}
