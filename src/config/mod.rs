//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SATYA_*` environment variables.
//! Model provider credentials are read by `genai` from its own variables
//! (`OPENAI_API_KEY`, `GEMINI_API_KEY`, ...).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::constants::DEFAULT_MAX_CONTENT_CHARS;
use crate::scoring::ScorerMode;
use crate::verdict::VerdictPolicy;

/// Default chat model used by the LLM scorer.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Content scorer the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    /// Chat model via `genai`, behind the assessment cache.
    Llm,
    /// Offline sensationalism scan; no model calls.
    Heuristic,
}

impl ScorerBackend {
    pub fn mode(&self) -> ScorerMode {
        match self {
            ScorerBackend::Llm => ScorerMode::Llm,
            ScorerBackend::Heuristic => ScorerMode::Heuristic,
        }
    }
}

impl std::str::FromStr for ScorerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "llm" | "model" => Ok(Self::Llm),
            "heuristic" | "stub" => Ok(Self::Heuristic),
            _ => Err(format!("unknown scorer: {}", s)),
        }
    }
}

impl fmt::Display for ScorerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode().as_str())
    }
}

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SATYA_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// JSON file with source records. The built-in registry is used when unset.
    pub registry_path: Option<PathBuf>,

    /// Model identifier passed to `genai`. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Which content scorer to run. Default: [`ScorerBackend::Llm`].
    pub scorer: ScorerBackend,

    /// Characters of content sent to the scorer. Default: `4000`.
    pub max_content_chars: usize,

    /// Upper bound on a single scorer call, in seconds. Default: `30`.
    pub scorer_timeout_secs: u64,

    /// Max entries in the assessment cache; `0` disables it. Default: `1000`.
    pub cache_capacity: u64,

    /// Weights and thresholds for verdict resolution.
    pub policy: VerdictPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            registry_path: None,
            model: DEFAULT_MODEL.to_string(),
            scorer: ScorerBackend::Llm,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            scorer_timeout_secs: 30,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            policy: VerdictPolicy::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SATYA_PORT";
    const ENV_BIND_ADDR: &'static str = "SATYA_BIND_ADDR";
    const ENV_REGISTRY_PATH: &'static str = "SATYA_REGISTRY_PATH";
    const ENV_MODEL: &'static str = "SATYA_MODEL";
    const ENV_SCORER: &'static str = "SATYA_SCORER";
    const ENV_MAX_CONTENT_CHARS: &'static str = "SATYA_MAX_CONTENT_CHARS";
    const ENV_SCORER_TIMEOUT_SECS: &'static str = "SATYA_SCORER_TIMEOUT_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "SATYA_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let registry_path = Self::parse_optional_path_from_env(Self::ENV_REGISTRY_PATH);
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let scorer = Self::parse_scorer_from_env(defaults.scorer)?;
        let max_content_chars =
            Self::parse_number_from_env(Self::ENV_MAX_CONTENT_CHARS, defaults.max_content_chars)?;
        let scorer_timeout_secs = Self::parse_number_from_env(
            Self::ENV_SCORER_TIMEOUT_SECS,
            defaults.scorer_timeout_secs,
        )?;
        let cache_capacity =
            Self::parse_number_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;
        let policy = VerdictPolicy::from_env()?;

        Ok(Self {
            port,
            bind_addr,
            registry_path,
            model,
            scorer,
            max_content_chars,
            scorer_timeout_secs,
            cache_capacity,
            policy,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.registry_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.max_content_chars == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_MAX_CONTENT_CHARS,
            });
        }
        if self.scorer_timeout_secs == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_SCORER_TIMEOUT_SECS,
            });
        }
        self.policy.validate()?;
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    #[inline]
    pub fn scorer_timeout(&self) -> Duration {
        Duration::from_secs(self.scorer_timeout_secs)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_scorer_from_env(default: ScorerBackend) -> Result<ScorerBackend, ConfigError> {
        match env::var(Self::ENV_SCORER) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidScorerMode { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_number_from_env<T: std::str::FromStr>(
        var_name: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                }),
            Err(_) => Ok(default),
        }
    }
}
