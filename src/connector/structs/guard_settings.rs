#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardSettings {
    /// Secure port to redirect insecure requests to.
    pub redirect_port: Option<u16>,
    /// Host every secure request must name.
    pub sni_host: Option<String>,
    /// Redirect host when the request carries none.
    pub fallback_host: String,
}
