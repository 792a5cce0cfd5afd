//! Service configuration from the environment
//!
//! Settings are read once at startup. A missing or unparsable value falls
//! back to its default with a warning rather than failing the launch.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_SESSIONS: usize = 1000;
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;
/// One year
const MAX_SESSION_IDLE_MINUTES: i64 = 525_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Upper bound on concurrently held chat sessions
    pub max_sessions: usize,
    pub session_idle_minutes: i64,
    /// Directory served when an asset is not embedded in the binary
    pub assets_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_sessions: DEFAULT_MAX_SESSIONS,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: parse_or(&lookup, "VIRMA_BIND", defaults.bind),
            port: parse_or(&lookup, "VIRMA_PORT", defaults.port),
            max_sessions: parse_or(&lookup, "VIRMA_MAX_SESSIONS", defaults.max_sessions),
            session_idle_minutes: clamp_idle_minutes(parse_or(
                &lookup,
                "VIRMA_SESSION_IDLE_MINUTES",
                defaults.session_idle_minutes,
            )),
            assets_dir: lookup("VIRMA_ASSETS_DIR").map_or(defaults.assets_dir, PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn session_idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(clamp_idle_minutes(self.session_idle_minutes))
    }
}

fn clamp_idle_minutes(minutes: i64) -> i64 {
    let clamped = minutes.clamp(1, MAX_SESSION_IDLE_MINUTES);
    if clamped != minutes {
        tracing::warn!(
            key = "VIRMA_SESSION_IDLE_MINUTES",
            value = minutes,
            using = clamped,
            "Session idle timeout out of range, clamping"
        );
    }
    clamped
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring invalid setting, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VIRMA_BIND", "127.0.0.1"),
            ("VIRMA_PORT", " 9090 "),
            ("VIRMA_MAX_SESSIONS", "5"),
            ("VIRMA_SESSION_IDLE_MINUTES", "2"),
            ("VIRMA_ASSETS_DIR", "/srv/virma"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.max_sessions, 5);
        assert_eq!(config.session_idle_timeout(), chrono::Duration::minutes(2));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/virma"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("VIRMA_PORT", "eighty"), ("VIRMA_BIND", "localhost")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_idle_timeout_has_a_floor() {
        let config = config_from(&[("VIRMA_SESSION_IDLE_MINUTES", "0")]);
        assert_eq!(config.session_idle_minutes, 1);
        assert_eq!(config.session_idle_timeout(), chrono::Duration::minutes(1));
    }

    #[test]
    fn test_idle_timeout_has_a_ceiling() {
        let year = chrono::Duration::minutes(MAX_SESSION_IDLE_MINUTES);
        for huge in [i64::MAX.to_string(), "200000000000".to_string()] {
            let config = config_from(&[("VIRMA_SESSION_IDLE_MINUTES", huge.as_str())]);
            assert_eq!(config.session_idle_minutes, MAX_SESSION_IDLE_MINUTES);
            assert_eq!(config.session_idle_timeout(), year);
        }

        let config = SiteConfig {
            session_idle_minutes: i64::MAX,
            ..SiteConfig::default()
        };
        assert_eq!(config.session_idle_timeout(), year);
    }
}
