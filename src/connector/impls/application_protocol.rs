use crate::connector::connector::{ALPN_H2, ALPN_HTTP_1_1};
use crate::connector::enums::application_protocol::ApplicationProtocol;
use std::fmt;

impl ApplicationProtocol {
    /// ALPN identifier, `None` for protocols never negotiated through TLS.
    pub fn alpn_id(&self) -> Option<&'static [u8]> {
        match self {
            ApplicationProtocol::Http11 => Some(ALPN_HTTP_1_1),
            ApplicationProtocol::H2 => Some(ALPN_H2),
            ApplicationProtocol::H2c => None,
        }
    }
}

impl fmt::Display for ApplicationProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationProtocol::Http11 => write!(f, "http/1.1"),
            ApplicationProtocol::H2 => write!(f, "h2"),
            ApplicationProtocol::H2c => write!(f, "h2c"),
        }
    }
}
