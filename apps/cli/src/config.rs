use std::{collections::HashMap, fs};

use anyhow::Context;
use shared::blend::BlendMode;
use url::Url;

#[derive(Debug)]
pub struct Settings {
    pub api_url: String,
    pub blend_mode: BlendMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".into(),
            blend_mode: BlendMode::Naive,
        }
    }
}

/// Defaults, then `palette.toml`, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("palette.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("blend_mode") {
                settings.blend_mode = parse_blend_mode(v);
            }
        }
    }

    if let Ok(v) = std::env::var("PALETTE_API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    if let Ok(v) = std::env::var("PALETTE_BLEND_MODE") {
        settings.blend_mode = parse_blend_mode(&v);
    }
    if let Ok(v) = std::env::var("APP__BLEND_MODE") {
        settings.blend_mode = parse_blend_mode(&v);
    }

    settings
}

/// Unknown mode names fall back to naive averaging, the store's historical
/// behavior.
pub fn parse_blend_mode(raw: &str) -> BlendMode {
    if raw.eq_ignore_ascii_case("linear") || raw.eq_ignore_ascii_case("perceptual") {
        BlendMode::Linear
    } else {
        BlendMode::Naive
    }
}

pub fn validate_api_url(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw).with_context(|| format!("invalid api url: {raw}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("api url must be http or https, got {}", url.scheme());
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_mode_names() {
        assert_eq!(parse_blend_mode("linear"), BlendMode::Linear);
        assert_eq!(parse_blend_mode("Perceptual"), BlendMode::Linear);
        assert_eq!(parse_blend_mode("naive"), BlendMode::Naive);
        assert_eq!(parse_blend_mode("anything-else"), BlendMode::Naive);
    }

    #[test]
    fn api_url_validation() {
        assert_eq!(
            validate_api_url("http://127.0.0.1:8000/").unwrap(),
            "http://127.0.0.1:8000"
        );
        assert!(validate_api_url("ftp://example.com").is_err());
        assert!(validate_api_url("not a url").is_err());
    }
}
