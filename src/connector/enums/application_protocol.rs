#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationProtocol {
    Http11,
    /// HTTP/2 over TLS.
    H2,
    /// HTTP/2 over cleartext, prior knowledge.
    H2c,
}
