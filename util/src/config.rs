//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Default test suite used when none is given on the command line.
    pub test_suite_path: Option<String>,
    /// Optional grading config JSON. Defaults are used when unset.
    pub grading_config_path: Option<String>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "char-count-grader".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "grader=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "grader.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            test_suite_path: non_empty_var("TEST_SUITE_PATH"),
            grading_config_path: non_empty_var("GRADING_CONFIG_PATH"),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_test_suite_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.test_suite_path = Some(value.into()));
    }

    pub fn set_grading_config_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.grading_config_path = Some(value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vars() {
        unsafe {
            for key in [
                "APP_ENV",
                "PROJECT_NAME",
                "LOG_LEVEL",
                "LOG_FILE",
                "LOG_TO_STDOUT",
                "TEST_SUITE_PATH",
                "GRADING_CONFIG_PATH",
            ] {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_vars();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.env, "development");
        assert_eq!(cfg.log_level, "grader=info");
        assert!(!cfg.log_to_stdout);
        assert!(cfg.test_suite_path.is_none());
        assert!(cfg.grading_config_path.is_none());
    }

    #[test]
    #[serial]
    fn reads_overrides_from_env() {
        clear_vars();
        unsafe {
            env::set_var("LOG_TO_STDOUT", "true");
            env::set_var("TEST_SUITE_PATH", "suites/count.json");
            env::set_var("GRADING_CONFIG_PATH", "   ");
        }
        let cfg = AppConfig::from_env();
        assert!(cfg.log_to_stdout);
        assert_eq!(cfg.test_suite_path.as_deref(), Some("suites/count.json"));
        assert!(cfg.grading_config_path.is_none(), "blank values count as unset");
        clear_vars();
    }

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        clear_vars();
        AppConfig::reset();
        AppConfig::set_test_suite_path("override.json");
        assert_eq!(
            AppConfig::global().test_suite_path.as_deref(),
            Some("override.json")
        );
        AppConfig::reset();
        assert!(AppConfig::global().test_suite_path.is_none());
    }

    #[test]
    #[serial]
    fn command_line_overrides_win_over_env() {
        clear_vars();
        unsafe {
            env::set_var("TEST_SUITE_PATH", "from_env.json");
            env::set_var("GRADING_CONFIG_PATH", "from_env_config.json");
        }
        AppConfig::reset();
        assert_eq!(
            AppConfig::global().test_suite_path.as_deref(),
            Some("from_env.json")
        );

        AppConfig::set_test_suite_path("from_args.json");
        AppConfig::set_grading_config_path("args_config.json");
        AppConfig::set_log_to_stdout(true);
        let cfg = AppConfig::global().clone();
        assert_eq!(cfg.test_suite_path.as_deref(), Some("from_args.json"));
        assert_eq!(cfg.grading_config_path.as_deref(), Some("args_config.json"));
        assert!(cfg.log_to_stdout);

        clear_vars();
        AppConfig::reset();
        let cfg = AppConfig::global().clone();
        assert!(cfg.test_suite_path.is_none());
        assert!(cfg.grading_config_path.is_none());
        assert!(!cfg.log_to_stdout);
    }
}
