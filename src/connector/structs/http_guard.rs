use crate::connector::structs::guard_settings::GuardSettings;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HttpGuard {
    pub(crate) settings: Arc<GuardSettings>,
}
