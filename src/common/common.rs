/// Hosts that mean "every interface" rather than one concrete name.
pub const WILDCARD_HOSTS: [&str; 5] = ["0.0.0.0", "::", "[::]", "*", ""];

pub fn is_wildcard_host(host: &str) -> bool {
    WILDCARD_HOSTS.contains(&host.trim())
}

/// Strips an optional `:port` suffix from an authority, keeping IPv6 brackets.
pub fn host_without_port(authority: &str) -> &str {
    let authority = authority.trim();
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    match authority.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    }
}

fn normalize_host(host: &str) -> &str {
    let host = host.trim();
    let host = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(host);
    host.strip_suffix('.').unwrap_or(host)
}

/// Case-insensitive host comparison ignoring brackets and a trailing root dot.
pub fn hosts_match(left: &str, right: &str) -> bool {
    normalize_host(left).eq_ignore_ascii_case(normalize_host(right))
}

/// Formats `host:port`, bracketing bare IPv6 literals.
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
