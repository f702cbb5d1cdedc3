//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.barbershop/config.toml`. If missing on first run, a
//! commented-out default is generated so the EmailJS keys are easy to find.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::BuildMode;
use crate::core::booking::DEFAULT_MOCK_DELAY;
use crate::core::content::BOOKING_URL;
use crate::mail::{EmailJsConfig, Templates};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub emailjs: EmailJsSection,
    #[serde(default)]
    pub booking: BookingSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub mode: Option<BuildMode>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EmailJsSection {
    pub service_id: Option<String>,
    pub owner_template_id: Option<String>,
    pub reply_template_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookingSection {
    pub url: Option<String>,
    pub availability_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "barbershop.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub mode: BuildMode,
    pub log_file: String,
    pub emailjs: EmailJsConfig,
    pub templates: Templates,
    pub booking_url: String,
    pub availability_delay: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.barbershop/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".barbershop").join("config.toml"))
}

/// Load config from `~/.barbershop/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SiteConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SiteConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SiteConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SiteConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", redacted(&config));
    Ok(config)
}

/// Debug view of the config with keys masked.
fn redacted(config: &SiteConfig) -> String {
    let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
    format!(
        "mode={:?} service_id={:?} templates=({:?}, {:?}) public_key={:?} private_key={:?} booking_url={:?}",
        config.general.mode,
        config.emailjs.service_id,
        config.emailjs.owner_template_id,
        config.emailjs.reply_template_id,
        mask(&config.emailjs.public_key),
        mask(&config.emailjs.private_key),
        config.booking.url,
    )
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Barbershop Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# mode = "production"                # "development" or "production"
# log_file = "barbershop.log"

# [emailjs]
# service_id = "service_xxxxxxx"     # Or set EMAILJS_SERVICE_ID
# owner_template_id = "template_owner"
# reply_template_id = "template_reply"
# public_key = "your-public-key"     # Or set EMAILJS_PUBLIC_KEY
# private_key = "your-private-key"   # Only if your account requires it
# base_url = "https://api.emailjs.com"

# [booking]
# url = "https://booking.example.com/calendar?cart=..."
# availability_delay_ms = 600
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_or(name: &str, fallback: &Option<String>) -> Option<String> {
    std::env::var(name).ok().or_else(|| fallback.clone())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_mode` is the `--mode` flag (None = not specified).
pub fn resolve(config: &SiteConfig, cli_mode: Option<BuildMode>) -> ResolvedConfig {
    // Mode: CLI → env → config → default
    let mode = cli_mode
        .or_else(|| {
            std::env::var("BARBERSHOP_MODE")
                .ok()
                .and_then(|v| BuildMode::parse(&v))
        })
        .or(config.general.mode)
        .unwrap_or_default();

    let emailjs = EmailJsConfig {
        service_id: env_or("EMAILJS_SERVICE_ID", &config.emailjs.service_id).unwrap_or_default(),
        public_key: env_or("EMAILJS_PUBLIC_KEY", &config.emailjs.public_key).unwrap_or_default(),
        private_key: env_or("EMAILJS_PRIVATE_KEY", &config.emailjs.private_key),
        base_url: env_or("EMAILJS_BASE_URL", &config.emailjs.base_url),
    };

    let templates = Templates {
        owner_notification: env_or("EMAILJS_OWNER_TEMPLATE_ID", &config.emailjs.owner_template_id)
            .unwrap_or_default(),
        auto_reply: env_or("EMAILJS_REPLY_TEMPLATE_ID", &config.emailjs.reply_template_id)
            .unwrap_or_default(),
    };

    let booking_url = env_or("BOOKING_URL", &config.booking.url)
        .unwrap_or_else(|| BOOKING_URL.to_string());

    ResolvedConfig {
        mode,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        emailjs,
        templates,
        booking_url,
        availability_delay: config
            .booking
            .availability_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MOCK_DELAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = SiteConfig::default();
        assert!(config.general.mode.is_none());
        assert!(config.emailjs.service_id.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SiteConfig::default();
        let resolved = resolve(&config, Some(BuildMode::Production));
        assert_eq!(resolved.mode, BuildMode::Production);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
        assert_eq!(resolved.availability_delay, DEFAULT_MOCK_DELAY);
    }

    #[test]
    fn test_resolve_cli_mode_wins() {
        let config = SiteConfig {
            general: GeneralConfig {
                mode: Some(BuildMode::Production),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(BuildMode::Development));
        assert_eq!(resolved.mode, BuildMode::Development);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
mode = "development"
log_file = "/tmp/shop.log"

[emailjs]
service_id = "service_abc"
owner_template_id = "template_owner"
reply_template_id = "template_reply"
public_key = "pk-123"

[booking]
url = "https://book.example.com/?cart=1"
availability_delay_ms = 50
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.mode, Some(BuildMode::Development));
        assert_eq!(config.emailjs.service_id.as_deref(), Some("service_abc"));
        assert_eq!(config.emailjs.public_key.as_deref(), Some("pk-123"));
        assert!(config.emailjs.private_key.is_none());
        assert_eq!(config.booking.availability_delay_ms, Some(50));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[booking]
availability_delay_ms = 10
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.booking.availability_delay_ms, Some(10));
        assert!(config.booking.url.is_none());
        assert!(config.general.mode.is_none());
        let resolved = resolve(&config, None);
        assert_eq!(resolved.availability_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_redacted_masks_keys() {
        let config = SiteConfig {
            emailjs: EmailJsSection {
                public_key: Some("pk-secret".into()),
                private_key: Some("sk-secret".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = redacted(&config);
        assert!(!out.contains("secret"));
        assert!(out.contains("***"));
    }
}
