use logolab_types::UpstreamProxyConfig;
use std::time::Duration;

/// Build HTTP client with optional upstream proxy and timeout.
pub fn build_http_client(
    upstream_proxy: Option<&UpstreamProxyConfig>,
    timeout_secs: u64,
) -> Result<reqwest::Client, String> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(timeout_secs.max(5)))
        .tcp_nodelay(true);

    if let Some(config) = upstream_proxy {
        if config.enabled && !config.url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.url)
                .map_err(|e| format!("Invalid upstream proxy url: {}", e))?;
            builder = builder.proxy(proxy);
        }
    }

    builder.build().map_err(|e| format!("Failed to build HTTP client: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_proxy() {
        assert!(build_http_client(None, 30).is_ok());
    }

    #[test]
    fn disabled_proxy_is_ignored() {
        let config = UpstreamProxyConfig { enabled: false, url: "::not a url::".to_string() };
        assert!(build_http_client(Some(&config), 30).is_ok());
    }
}
