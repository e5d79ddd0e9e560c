// src/config.rs
use std::{path::PathBuf, str::FromStr};

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Server configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_image_bytes: usize,
    /// Required in the `x-admin-key` header for `/admin` routes. Unset disables them.
    pub admin_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            upload_dir: PathBuf::from("uploads"),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            admin_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_image_bytes: parse_env("MAX_IMAGE_BYTES", defaults.max_image_bytes),
            admin_key: non_blank(std::env::var("ADMIN_KEY").ok()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upper bound for a whole multipart request: one image plus form overhead.
    pub fn body_limit(&self) -> usize {
        self.max_image_bytes.saturating_add(64 * 1024)
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    parse_value(key, std::env::var(key).ok(), default)
}

fn parse_value<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            default
        }),
        None => default,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frontend() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(config.admin_key.is_none());
    }

    #[test]
    fn body_limit_leaves_room_for_form_fields() {
        let config = Config {
            max_image_bytes: 10,
            ..Default::default()
        };
        assert_eq!(config.body_limit(), 10 + 64 * 1024);
    }

    #[test]
    fn unparseable_numbers_fall_back() {
        assert_eq!(parse_value("PORT", Some("http".to_string()), 5000u16), 5000);
        assert_eq!(parse_value("PORT", Some("70000".to_string()), 5000u16), 5000);
        assert_eq!(parse_value("MAX_IMAGE_BYTES", Some("-1".to_string()), 42usize), 42);
    }

    #[test]
    fn padded_numbers_are_trimmed() {
        assert_eq!(parse_value("PORT", Some(" 8080\n".to_string()), 5000u16), 8080);
    }

    #[test]
    fn missing_key_uses_default() {
        assert_eq!(parse_value("PORT", None, 5000u16), 5000);
        assert_eq!(parse_env("THOLINI_CHAT_CONFIG_TEST_UNSET_KEY", 7usize), 7);
    }

    #[test]
    fn blank_admin_key_is_unset() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some("s3cret".to_string())), Some("s3cret".to_string()));
    }
}
