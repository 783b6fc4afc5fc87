//! Environment configuration
//!
//! Credentials and runtime knobs are read from environment variables. Before
//! anything reads them, `load_environment()` may seed the process environment
//! from an env file, checked in this order:
//!
//! 1. `$AC_ENV_FILE`
//! 2. `/etc/ac-node/environment`
//! 3. `/etc/ac-node.env`
//! 4. `.env` in the working directory
//!
//! ```no_run
//! use ac_core::config::load_environment;
//!
//! load_environment();
//! let url = ac_core::config::get_config_opt("ACTIVECAMPAIGN_API_URL");
//! ```

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Variable naming a custom env file
pub const ENV_FILE_VAR: &str = "AC_ENV_FILE";

/// Env files checked when `AC_ENV_FILE` is unset or missing
pub const ENV_FILE_PATHS: &[&str] = &["/etc/ac-node/environment", "/etc/ac-node.env", ".env"];

/// What a single env file contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileReport {
    pub path: String,
    pub loaded: usize,
    pub skipped: usize,
}

/// Load the first env file found. Existing variables always win.
pub fn load_environment() -> Option<EnvFileReport> {
    let custom = std::env::var(ENV_FILE_VAR).ok();
    let candidates = custom.iter().map(String::as_str).chain(ENV_FILE_PATHS.iter().copied());

    for path in candidates {
        if !Path::new(path).exists() {
            continue;
        }
        match load_env_file(path) {
            Ok(report) => {
                info!(
                    path = %report.path,
                    loaded = report.loaded,
                    skipped = report.skipped,
                    "Loaded environment file"
                );
                return Some(report);
            }
            Err(e) => warn!(path = %path, error = %e, "Failed to read environment file"),
        }
    }

    debug!("No environment file found, using existing environment");
    None
}

/// Apply one env file to the process environment.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<EnvFileReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut report = EnvFileReport {
        path: path.display().to_string(),
        loaded: 0,
        skipped: 0,
    };

    for (key, value) in content.lines().filter_map(parse_env_line) {
        if std::env::var_os(&key).is_some() {
            report.skipped += 1;
            debug!(key = %key, "Skipped (already set)");
            continue;
        }
        debug!(key = %key, value = %mask_secret(&key, &value), "Loaded");
        std::env::set_var(&key, &value);
        report.loaded += 1;
    }

    Ok(report)
}

/// Parse `KEY=VALUE`, `KEY="VALUE"` or `KEY='VALUE'`; comments and blanks yield `None`.
fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_start_matches("export ").trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let value = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value);

    Some((key.to_string(), value.to_string()))
}

fn mask_secret<'a>(key: &str, value: &'a str) -> &'a str {
    if ["KEY", "TOKEN", "SECRET"].iter().any(|s| key.contains(s)) {
        "***"
    } else {
        value
    }
}

/// Get a configuration value with a default.
pub fn get_config(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an optional, non-empty configuration value.
pub fn get_config_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get a boolean configuration value.
pub fn get_config_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(default)
}

/// Get an integer configuration value.
pub fn get_config_int(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_env_line_simple() {
        let (k, v) = parse_env_line("ACTIVECAMPAIGN_API_URL=https://acme.api-us1.com").unwrap();
        assert_eq!(k, "ACTIVECAMPAIGN_API_URL");
        assert_eq!(v, "https://acme.api-us1.com");
    }

    #[test]
    fn test_parse_env_line_quoted_and_exported() {
        let (k, v) = parse_env_line("export FOO=\"bar baz\"").unwrap();
        assert_eq!(k, "FOO");
        assert_eq!(v, "bar baz");

        let (_, v) = parse_env_line("FOO='bar'").unwrap();
        assert_eq!(v, "bar");
    }

    #[test]
    fn test_parse_env_line_ignored() {
        assert!(parse_env_line("").is_none());
        assert!(parse_env_line("   # comment").is_none());
        assert!(parse_env_line("=value").is_none());
        assert!(parse_env_line("NO_EQUALS").is_none());
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("ACTIVECAMPAIGN_API_KEY", "abc"), "***");
        assert_eq!(mask_secret("ACTIVECAMPAIGN_API_URL", "abc"), "abc");
    }

    #[test]
    fn test_load_env_file_does_not_override() {
        let path = std::env::temp_dir().join(format!("ac-core-env-{}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# test file").unwrap();
        writeln!(file, "AC_CORE_TEST_PRESET=from-file").unwrap();
        writeln!(file, "AC_CORE_TEST_FRESH=\"fresh value\"").unwrap();
        drop(file);

        std::env::set_var("AC_CORE_TEST_PRESET", "from-env");
        let report = load_env_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(get_config("AC_CORE_TEST_PRESET", ""), "from-env");
        assert_eq!(get_config("AC_CORE_TEST_FRESH", ""), "fresh value");
    }

    #[test]
    fn test_typed_getters_fall_back() {
        assert!(get_config_bool("AC_CORE_TEST_UNSET_BOOL", true));
        assert_eq!(get_config_int("AC_CORE_TEST_UNSET_INT", 30), 30);
        assert!(get_config_opt("AC_CORE_TEST_UNSET_OPT").is_none());
    }
}
