use crate::ssl::structs::security_material::SecurityMaterial;
use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct SwappableCertificateResolver {
    pub(crate) material: Arc<ArcSwap<SecurityMaterial>>,
}
