use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackScheme {
    Auto,
    None,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkingOptions {
    /// Marks available for the exercise; the weighted score is scaled onto this.
    #[serde(default = "default_points")]
    pub points: f64,

    #[serde(default = "default_feedback_scheme")]
    pub feedback_scheme: FeedbackScheme,
}

impl Default for MarkingOptions {
    fn default() -> Self {
        Self {
            points: default_points(),
            feedback_scheme: default_feedback_scheme(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutionOptions {
    /// Compare the reference output with each test case's declared expected output
    /// and warn on disagreement.
    #[serde(default = "default_check_expected_outputs")]
    pub check_expected_outputs: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            check_expected_outputs: default_check_expected_outputs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuiteOptions {
    /// Largest test suite file accepted, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradingConfig {
    #[serde(default)]
    pub marking: MarkingOptions,

    #[serde(default)]
    pub execution: ExecutionOptions,

    #[serde(default)]
    pub suite: SuiteOptions,
}

impl GradingConfig {
    pub fn default_config() -> Self {
        GradingConfig {
            marking: MarkingOptions::default(),
            execution: ExecutionOptions::default(),
            suite: SuiteOptions::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let file_contents = fs::read_to_string(path)
            .map_err(|_| format!("Failed to read config file at {path:?}"))?;

        let mut cfg: GradingConfig = serde_json::from_str(&file_contents)
            .map_err(|_| "Invalid config JSON format".to_string())?;

        if !cfg.marking.points.is_finite() || cfg.marking.points < 0.0 {
            warn!(points = cfg.marking.points, "Unusable marking.points; using the default");
            cfg.marking.points = default_points();
        }
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {e:?}"))?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {e}"))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file to disk: {e:?}"))?;

        Ok(())
    }
}

//Default Functions

fn default_points() -> f64 {
    100.0
}

fn default_feedback_scheme() -> FeedbackScheme {
    FeedbackScheme::Auto
}

fn default_check_expected_outputs() -> bool {
    true
}

fn default_max_file_size() -> u64 {
    2 * 1024 * 1024
}
