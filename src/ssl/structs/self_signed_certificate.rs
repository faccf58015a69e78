#[derive(Debug, Clone)]
pub struct SelfSignedCertificate {
    pub certificate_pem: String,
    pub private_key_pem: String,
}
