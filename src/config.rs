use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Resolves the listen address from `HOST` and `PORT`.
pub fn resolve_addr() -> Result<SocketAddr, String> {
    addr_from(env::var("HOST").ok(), env::var("PORT").ok())
}

fn addr_from(host: Option<String>, port: Option<String>) -> Result<SocketAddr, String> {
    let ip = match host {
        Some(value) => value
            .trim()
            .parse::<IpAddr>()
            .map_err(|err| format!("invalid HOST `{value}`: {err}"))?,
        None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    };

    let port = match port {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| format!("invalid PORT `{value}`: {err}"))?,
        None => DEFAULT_PORT,
    };

    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_8080() {
        let addr = addr_from(None, None).unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn reads_host_and_port() {
        let addr = addr_from(Some("127.0.0.1".into()), Some(" 9000 ".into())).unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn rejects_bad_port() {
        let err = addr_from(None, Some("eighty".into())).unwrap_err();
        assert!(err.contains("invalid PORT"));
    }
}
