use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use logolab_core::modules::config as core_config;
use logolab_types::GatewayConfig;

pub fn show_config(path: Option<&Path>, json: bool) -> Result<()> {
    let config = core_config::load_config(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render_config(&config));
    }
    Ok(())
}

fn render_config(config: &GatewayConfig) -> String {
    let limits = config.rate_limits;
    let key = config.credential().map_or_else(|| "not set".red().to_string(), mask_key);

    [
        format!("{}", "Gateway Configuration:".cyan().bold()),
        format!("  Bind: {}", config.get_socket_addr()),
        format!("  API Key: {}", key),
        format!("  Text model: {}", config.text_model),
        format!("  Image model: {}", config.image_model),
        format!("  Gemini base URL: {}", config.gemini_base_url),
        format!("  Fallback: {} ({}px)", config.pollinations_base_url, config.fallback_image_size),
        format!(
            "  Rate limits: analysis {}/{}s, image {}/{}s",
            limits.text_limit, limits.window_secs, limits.image_limit, limits.window_secs
        ),
        format!("  Request timeout: {}s", config.request_timeout),
        format!(
            "  Upstream proxy: {}",
            if config.upstream_proxy.enabled { config.upstream_proxy.url.as_str() } else { "disabled" }
        ),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_and_short_keys() {
        assert_eq!(mask_key("AIzaSyExample1234"), "AIza...1234");
        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn rendered_config_never_shows_full_key() {
        colored::control::set_override(false);
        let config = GatewayConfig { api_key: Some("AIzaSyExample1234".to_string()), ..Default::default() };

        let text = render_config(&config);

        assert!(text.contains("AIza...1234"));
        assert!(!text.contains("AIzaSyExample1234"));
        assert!(text.contains("analysis 10/60s, image 20/60s"));
    }
}
