use crate::tls::enums::tls_policy::TlsPolicy;
use crate::tls::tls::{
    cipher_suite_by_name, protocol_version_by_name, INTERMEDIATE_CIPHER_SUITES, INTERMEDIATE_PROTOCOLS,
    MODERN_CIPHER_SUITES, MODERN_PROTOCOLS, OLD_CIPHER_SUITES, OLD_PROTOCOLS,
};
use log::debug;
use rustls::crypto::CryptoProvider;
use rustls::{SupportedCipherSuite, SupportedProtocolVersion};
use std::fmt;

impl Default for TlsPolicy {
    fn default() -> Self {
        TlsPolicy::Intermediate
    }
}

impl fmt::Display for TlsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(cipher_suites={:?}, protocols={:?})",
            self.name(),
            self.cipher_suites(),
            self.protocols()
        )
    }
}

impl TlsPolicy {
    pub fn custom<C, P>(cipher_suites: C, protocols: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        TlsPolicy::Custom {
            cipher_suites: cipher_suites.into_iter().map(Into::into).collect(),
            protocols: protocols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TlsPolicy::Modern => "Modern",
            TlsPolicy::Intermediate => "Intermediate",
            TlsPolicy::Old => "Old",
            TlsPolicy::Custom { .. } => "Custom",
        }
    }

    pub fn cipher_suites(&self) -> Vec<&str> {
        match self {
            TlsPolicy::Modern => MODERN_CIPHER_SUITES.to_vec(),
            TlsPolicy::Intermediate => INTERMEDIATE_CIPHER_SUITES.to_vec(),
            TlsPolicy::Old => OLD_CIPHER_SUITES.to_vec(),
            TlsPolicy::Custom { cipher_suites, .. } => cipher_suites.iter().map(String::as_str).collect(),
        }
    }

    pub fn protocols(&self) -> Vec<&str> {
        match self {
            TlsPolicy::Modern => MODERN_PROTOCOLS.to_vec(),
            TlsPolicy::Intermediate => INTERMEDIATE_PROTOCOLS.to_vec(),
            TlsPolicy::Old => OLD_PROTOCOLS.to_vec(),
            TlsPolicy::Custom { protocols, .. } => protocols.iter().map(String::as_str).collect(),
        }
    }

    pub fn supports_protocol(&self, protocol: &str) -> bool {
        self.protocols().contains(&protocol)
    }

    pub fn supports_cipher_suite(&self, cipher_suite: &str) -> bool {
        self.cipher_suites().contains(&cipher_suite)
    }

    /// Narrows `provider` to the suites of this policy and returns the usable protocol versions.
    ///
    /// The result may be empty; rustls rejects such a combination when the
    /// server config is built.
    pub fn restrict(&self, provider: &CryptoProvider) -> (CryptoProvider, Vec<&'static SupportedProtocolVersion>) {
        let mut versions: Vec<&'static SupportedProtocolVersion> = Vec::new();
        for name in self.protocols() {
            match protocol_version_by_name(name) {
                Some(version) if !versions.iter().any(|v| v.version == version.version) => versions.push(version),
                Some(_) => {}
                None => debug!("[TLS] Protocol {} is not available, skipping", name),
            }
        }

        let mut suites: Vec<SupportedCipherSuite> = Vec::new();
        for name in self.cipher_suites() {
            let found = cipher_suite_by_name(name)
                .and_then(|id| provider.cipher_suites.iter().find(|suite| suite.suite() == id));
            match found {
                Some(suite) if !suites.iter().any(|s| s.suite() == suite.suite()) => suites.push(*suite),
                Some(_) => {}
                None => debug!("[TLS] Cipher suite {} is not available, skipping", name),
            }
        }

        let tls13 = rustls::version::TLS13.version;
        let lists_tls13 = suites.iter().any(|s| s.version().version == tls13);
        if versions.iter().any(|v| v.version == tls13) && !lists_tls13 {
            debug!("[TLS] No TLSv1.3 cipher suite listed, keeping the provider defaults for TLSv1.3");
            suites.extend(
                provider
                    .cipher_suites
                    .iter()
                    .filter(|suite| suite.version().version == tls13)
                    .copied(),
            );
        }

        versions.retain(|version| {
            let usable = suites.iter().any(|s| s.version().version == version.version);
            if !usable {
                debug!("[TLS] No usable cipher suite for {:?}, disabling it", version.version);
            }
            usable
        });

        let mut restricted = provider.clone();
        restricted.cipher_suites = suites;
        (restricted, versions)
    }
}
