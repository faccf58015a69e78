use crate::connector::structs::guard_settings::GuardSettings;
use std::sync::Arc;

pub struct HttpGuardMiddleware<S> {
    pub(crate) service: S,
    pub(crate) settings: Arc<GuardSettings>,
}
