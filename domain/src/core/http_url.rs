//! Strict parsing for URL-valued configuration fields.

use super::error::DomainError;
use std::net::IpAddr;
use url::{Host, Url};

/// Parse `value` as an absolute `http` or `https` URL with a host.
///
/// `field` names the configuration key and is carried in the error.
pub fn parse_http_url(field: &'static str, value: &str) -> Result<Url, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField(field));
    }

    let url = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(DomainError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            });
        }
    }

    if url.host().is_none() {
        return Err(DomainError::InvalidUrl {
            field,
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Whether the URL points at the local machine (`localhost`, `127.0.0.0/8`, `::1`).
pub fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => {
            domain.eq_ignore_ascii_case("localhost") || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_http_and_https() {
        assert!(parse_http_url("api_server_url", "http://127.0.0.1:5000").is_ok());
        assert!(parse_http_url("api_server_url", "https://api.example.com/v1").is_ok());
    }

    #[test]
    fn test_parse_rejects_relative() {
        let err = parse_http_url("api_server_url", "127.0.0.1:5000/drinks").unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl { .. } | DomainError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        let err = parse_http_url("auth0.callback_url", "ftp://example.com").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedScheme {
                field: "auth0.callback_url",
                scheme: "ftp".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(
            parse_http_url("auth0.callback_url", "  ").unwrap_err(),
            DomainError::EmptyField("auth0.callback_url")
        );
    }

    #[test]
    fn test_loopback_detection() {
        let local = Url::parse("http://localhost:8100").unwrap();
        let v4 = Url::parse("http://127.0.0.1:5000").unwrap();
        let v6 = Url::parse("http://[::1]:5000").unwrap();
        let remote = Url::parse("https://coffee.example.com").unwrap();
        assert!(is_loopback(&local));
        assert!(is_loopback(&v4));
        assert!(is_loopback(&v6));
        assert!(!is_loopback(&remote));
    }
}
