pub const ALPN_HTTP_1_1: &[u8] = b"http/1.1";
pub const ALPN_H2: &[u8] = b"h2";

pub const INSECURE_LISTENER_NAME: &str = "insecure";
pub const SECURE_LISTENER_NAME: &str = "secure";

pub const DEFAULT_BACKLOG: u32 = 2048;
pub const DEFAULT_WILDCARD_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_REDIRECT_HOST: &str = "localhost";
pub const HTTPS_DEFAULT_PORT: u16 = 443;

pub const INVALID_SNI_BODY: &str = "Error 400 Invalid SNI";
