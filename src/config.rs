//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Runtime settings; every flag can also come from the environment.
#[derive(Clone, Debug, Parser)]
#[command(name = "user-roster", version, about)]
pub struct Config {
    /// Base URL of the REST API; users live at `{base}/users`.
    #[arg(long, env = "USER_ROSTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "USER_ROSTER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Theme file, created with defaults if missing.
    #[arg(long, env = "USER_ROSTER_THEME", default_value = "theme.conf")]
    pub theme: PathBuf,

    /// Keybindings file, created with defaults if missing.
    #[arg(long, env = "USER_ROSTER_KEYBINDS", default_value = "keybinds.conf")]
    pub keybinds: PathBuf,

    /// Log destination. The terminal is taken by the UI.
    #[arg(long, env = "USER_ROSTER_LOG_FILE", default_value = "user-roster.log")]
    pub log_file: PathBuf,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cfg = Config::parse_from(["user-roster"]);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.theme, PathBuf::from("theme.conf"));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::parse_from([
            "user-roster",
            "--base-url",
            "http://localhost:3000",
            "--timeout-secs",
            "0",
        ]);
        assert_eq!(cfg.base_url, "http://localhost:3000");
        assert_eq!(cfg.timeout(), Duration::from_secs(1));
    }
}
