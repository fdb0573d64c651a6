//! Tauros environment configuration.
//!
//! Supports production and staging environments with their REST base URLs.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the environment.
pub const ENVIRONMENT_ENV: &str = "TAUROS_ENVIRONMENT";

/// Tauros environment (production or staging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaurosEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Staging environment for integration testing.
    Staging,
}

impl TaurosEnvironment {
    /// Pick the environment from a staging flag.
    pub fn from_staging_flag(staging: bool) -> Self {
        if staging {
            Self::Staging
        } else {
            Self::Production
        }
    }

    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.tauros.io",
            Self::Staging => "https://api.staging.tauros.io",
        }
    }

    /// Load environment from `TAUROS_ENVIRONMENT` env var.
    ///
    /// Returns `Production` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for TaurosEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Staging => write!(f, "staging"),
        }
    }
}

impl FromStr for TaurosEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "mainnet" => Ok(Self::Production),
            "staging" | "stage" | "test" | "sandbox" => Ok(Self::Staging),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'staging'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_url() {
        let env = TaurosEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://api.tauros.io");
    }

    #[test]
    fn test_staging_url() {
        let env = TaurosEnvironment::Staging;
        assert_eq!(env.rest_base_url(), "https://api.staging.tauros.io");
    }

    #[test]
    fn test_from_staging_flag() {
        assert_eq!(
            TaurosEnvironment::from_staging_flag(false),
            TaurosEnvironment::Production
        );
        assert_eq!(
            TaurosEnvironment::from_staging_flag(true),
            TaurosEnvironment::Staging
        );
    }

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<TaurosEnvironment>().unwrap(),
            TaurosEnvironment::Production
        );
        assert_eq!(
            "PROD".parse::<TaurosEnvironment>().unwrap(),
            TaurosEnvironment::Production
        );
    }

    #[test]
    fn test_parse_staging() {
        assert_eq!(
            "staging".parse::<TaurosEnvironment>().unwrap(),
            TaurosEnvironment::Staging
        );
        assert_eq!(
            "Sandbox".parse::<TaurosEnvironment>().unwrap(),
            TaurosEnvironment::Staging
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = "testnet".parse::<TaurosEnvironment>().unwrap_err();
        assert!(err.to_string().contains("testnet"));
    }

    #[test]
    fn test_default() {
        assert_eq!(TaurosEnvironment::default(), TaurosEnvironment::Production);
    }

    #[test]
    fn test_display_round_trips() {
        for env in [TaurosEnvironment::Production, TaurosEnvironment::Staging] {
            assert_eq!(env.to_string().parse::<TaurosEnvironment>().unwrap(), env);
        }
    }
}
