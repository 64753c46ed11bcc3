use axum::http::HeaderMap;
use logolab_core::rate_limit::UNKNOWN_CLIENT;

/// Rate-limit key for a request: first `X-Forwarded-For` hop, else
/// `X-Real-IP`, else `"unknown"`. Values are used as opaque strings.
pub fn client_identifier(headers: &HeaderMap) -> String {
    header_value(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .or_else(|| header_value(headers, "x-real-ip").map(|v| v.trim().to_string()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn first_forwarded_hop_wins() {
        let map = headers(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1"), ("x-real-ip", "10.0.0.2")]);
        assert_eq!(client_identifier(&map), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_real_ip_then_unknown() {
        assert_eq!(client_identifier(&headers(&[("x-real-ip", "10.0.0.2")])), "10.0.0.2");
        assert_eq!(client_identifier(&HeaderMap::new()), "unknown");
    }
}
