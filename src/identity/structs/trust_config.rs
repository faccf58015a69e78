use crate::identity::enums::trust_source::TrustSource;

#[derive(Default)]
pub struct TrustConfig {
    pub(crate) sources: Vec<TrustSource>,
}
