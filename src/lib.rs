//! Barbershop library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod mail;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which build the site runs as. Development logs at debug level and
/// shows provider details in the log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// Parses `BARBERSHOP_MODE` style values. Unknown values give `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(BuildMode::Development),
            "production" | "prod" => Some(BuildMode::Production),
            _ => None,
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_long_names() {
        assert_eq!(BuildMode::parse("dev"), Some(BuildMode::Development));
        assert_eq!(BuildMode::parse(" Production "), Some(BuildMode::Production));
        assert_eq!(BuildMode::parse("staging"), None);
    }
}
