use crate::common::common::{host_without_port, hosts_match, join_host_port};
use crate::connector::connector::HTTPS_DEFAULT_PORT;
use crate::connector::enums::guard_decision::GuardDecision;
use crate::connector::structs::guard_settings::GuardSettings;

impl GuardSettings {
    pub fn is_active(&self) -> bool {
        self.redirect_port.is_some() || self.sni_host.is_some()
    }

    /// Decides what to do with a request given its listener and `Host` authority.
    pub fn decide(&self, secure: bool, host: Option<&str>, path_and_query: &str) -> GuardDecision {
        if secure {
            return match (&self.sni_host, host) {
                (Some(expected), Some(host)) if !hosts_match(host_without_port(host), expected) => GuardDecision::InvalidSni,
                _ => GuardDecision::Pass,
            };
        }

        match self.redirect_port {
            Some(port) => {
                let host = host
                    .map(host_without_port)
                    .filter(|host| !host.is_empty())
                    .unwrap_or(&self.fallback_host);
                let authority = if port == HTTPS_DEFAULT_PORT {
                    host.to_string()
                } else {
                    join_host_port(host, port)
                };
                let path = if path_and_query.is_empty() { "/" } else { path_and_query };
                GuardDecision::Redirect(format!("https://{}{}", authority, path))
            }
            None => GuardDecision::Pass,
        }
    }
}
