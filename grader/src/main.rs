use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grader::GradingJob;
use grader::implementations::reference::ReferenceCounter;
use grader::report::GradingStatus;
use grader::utilities::suite_loader::load_test_suite;
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use util::config::AppConfig;
use util::grading_config::GradingConfig;
use util::logging::init_logging;

/// Grades the reference counter against itself to validate a test suite.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Test suite JSON. Defaults to TEST_SUITE_PATH.
    suite: Option<String>,
    /// Grading config JSON. Defaults to GRADING_CONFIG_PATH, then built-in defaults.
    #[arg(long)]
    config: Option<String>,
    /// Mirror log output to stderr (same as LOG_TO_STDOUT=true).
    #[arg(long)]
    log_to_stdout: bool,
    /// Also write the JSON report to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    if let Some(suite) = &args.suite {
        AppConfig::set_test_suite_path(suite.as_str());
    }
    if let Some(config) = &args.config {
        AppConfig::set_grading_config_path(config.as_str());
    }
    if args.log_to_stdout {
        AppConfig::set_log_to_stdout(true);
    }
    let app = AppConfig::global().clone();
    let _log_guard = init_logging(&app.log_file, &app.log_level, app.log_to_stdout);

    let suite_path = app
        .test_suite_path
        .as_deref()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("no test suite given and TEST_SUITE_PATH is not set"))?;

    let config = match app.grading_config_path.as_deref() {
        Some(path) => GradingConfig::load(Path::new(path)).map_err(|e| anyhow!(e))?,
        None => GradingConfig::default_config(),
    };

    let cases = load_test_suite(&suite_path, config.suite.max_file_size)
        .with_context(|| format!("loading test suite {}", suite_path.display()))?;
    info!(
        project = %app.project_name,
        env = %app.env,
        suite = %suite_path.display(),
        cases = cases.len(),
        "Loaded test suite"
    );

    let response = GradingJob::new(cases, ReferenceCounter, ReferenceCounter, config)
        .run()
        .context("grading the reference against itself")?;

    let drifted: Vec<i64> = response
        .data
        .report
        .results
        .iter()
        .filter(|r| r.expected_matches() == Some(false))
        .map(|r| r.test_case_id())
        .collect();
    if !drifted.is_empty() {
        warn!(?drifted, "Declared expected outputs disagree with the reference");
    }

    let json = serde_json::to_string_pretty(&response)?;
    println!("{json}");

    if let Some(out) = &args.out {
        save_json(&json, out)?;
        eprintln!("Saved report to {}", out.display());
    }

    if response.data.report.status == GradingStatus::AllPassed && drifted.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn save_json(json: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
