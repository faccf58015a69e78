use crate::connector::enums::listener_kind::ListenerKind;
use std::fmt;

impl ListenerKind {
    pub fn scheme(&self) -> &'static str {
        match self {
            ListenerKind::Insecure => "http",
            ListenerKind::Secure => "https",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerKind::Insecure => write!(f, "insecure"),
            ListenerKind::Secure => write!(f, "secure"),
        }
    }
}
