use crate::connector::structs::listener_descriptor::ListenerDescriptor;
use std::sync::Arc;

pub type ConnectorHook = Arc<dyn Fn(&mut ListenerDescriptor) + Send + Sync>;
