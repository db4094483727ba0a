use url::Url;

/// `true` only for absolute `http://` or `https://` URLs.
pub fn is_valid_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_http_url;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_http_url("http://example.com"));
        assert!(is_valid_http_url("https://example.com/path?q=1"));
        assert!(is_valid_http_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn rejects_other_schemes_and_relative_urls() {
        assert!(!is_valid_http_url("ftp://example.com"));
        assert!(!is_valid_http_url("mailto:someone@example.com"));
        assert!(!is_valid_http_url("example.com"));
        assert!(!is_valid_http_url(""));
    }
}
