//! CLI entrypoint for Specialist Panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use panel_application::{
    ExecutionParams, GatewayOpinionSource, NoProgress, ProgressNotifier, RunPanelUseCase,
};
use panel_domain::{GatePolicy, Model, OutputFormat, Roster};
use panel_infrastructure::{
    ConfigLoader, CredentialConfig, CredentialError, FileConfig, FileReportSink, GroqLlmGateway,
    read_document,
};
use panel_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status when the run finished without a diagnosis under `strict_exit`
const EXIT_NO_DIAGNOSIS: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Specialist Panel");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", ConfigLoader::to_toml(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let credentials = CredentialConfig::resolve_with_file(&cli.env_file);
    run(&cli, &config, credentials).await
}

/// Run the panel once the configuration is settled
///
/// Nothing is read, submitted or written unless a credential was resolved.
async fn run(
    cli: &Cli,
    config: &FileConfig,
    credentials: Result<CredentialConfig, CredentialError>,
) -> Result<ExitCode> {
    // === Credential precondition ===
    let credentials = match credentials {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Set it in the environment or add it to {}", cli.env_file.display());
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(
        "Using API key {} ({:?})",
        credentials.redacted(),
        credentials.source()
    );

    // === Input ===
    let document = read_document(&config.panel.input).await?;
    let mut roster = Roster::new(config.panel.specialists.iter().cloned(), document)?;
    if !config.panel.required.is_empty() {
        roster = roster.with_required(config.panel.required.iter().cloned())?;
    }

    // === Dependency Injection ===
    let gateway = Arc::new(GroqLlmGateway::new(
        credentials,
        &config.models.api_base,
        Some(config.models.temperature),
    )?);
    let source = Arc::new(GatewayOpinionSource::new(
        gateway,
        config.models.specialist.clone(),
        config.models.synthesis.clone(),
    ));
    let sink = Arc::new(FileReportSink::new(&config.panel.output));

    let params = ExecutionParams::default()
        .with_timeout_seconds(config.behavior.timeout_seconds)
        .with_max_concurrency(config.behavior.max_concurrency)
        .with_gate_policy(config.behavior.gate_policy);

    let cancel = CancellationToken::new();
    spawn_ctrl_c_handler(cancel.clone());

    let use_case = RunPanelUseCase::new(source, sink)
        .with_params(params)
        .with_cancellation(cancel);

    // === Run ===
    let progress: Box<dyn ProgressNotifier> = if cli.quiet || !config.output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let output = use_case
        .execute_with_progress(&roster, progress.as_ref())
        .await?;

    let format = config.output.format.unwrap_or_default();
    if !(cli.quiet && format == OutputFormat::Summary) {
        println!("{}", ConsoleFormatter::render(&output, format));
    }

    if config.behavior.strict_exit && !output.succeeded() {
        warn!("No diagnosis was produced; exiting with status {}", EXIT_NO_DIAGNOSIS);
        return Ok(ExitCode::from(EXIT_NO_DIAGNOSIS));
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level, optionally mirrored to files
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "specialist-panel.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// CLI flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.panel.input = input.display().to_string();
    }
    if let Some(output) = &cli.output {
        config.panel.output = output.display().to_string();
    }
    if !cli.specialist.is_empty() {
        config.panel.specialists = cli.specialist.clone();
        // A required list from files may name specialists that are no longer on the panel
        config.panel.required.clear();
    }
    if !cli.require.is_empty() {
        config.panel.required = cli.require.clone();
    }
    if let Some(model) = &cli.model {
        config.models.specialist = Model::from(model.as_str());
    }
    if let Some(model) = &cli.synthesis_model {
        config.models.synthesis = Model::from(model.as_str());
    }
    if let Some(timeout) = cli.timeout {
        config.behavior.timeout_seconds = Some(timeout);
    }
    if let Some(max) = cli.max_concurrency {
        config.behavior.max_concurrency = Some(max);
    }
    if cli.strict_gate {
        config.behavior.gate_policy = GatePolicy::RequireGenuine;
    }
    if cli.strict_exit {
        config.behavior.strict_exit = true;
    }
    if let Some(format) = cli.format {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Cancel outstanding work on the first Ctrl-C; the run still publishes a report
fn spawn_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding specialists");
            cancel.cancel();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_infrastructure::API_KEY_VAR;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_replace_config_values() {
        let mut config = FileConfig::default();
        config.panel.required = vec!["Cardiologist".to_string()];
        let cli = Cli::parse_from([
            "specialist-panel",
            "-s",
            "Neurologist",
            "-s",
            "Dermatologist",
            "--timeout",
            "15",
            "--strict-gate",
            "--strict-exit",
            "-f",
            "report",
        ]);

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.panel.specialists, vec!["Neurologist", "Dermatologist"]);
        assert!(config.panel.required.is_empty());
        assert_eq!(config.behavior.timeout_seconds, Some(15));
        assert_eq!(config.behavior.gate_policy, GatePolicy::RequireGenuine);
        assert!(config.behavior.strict_exit);
        assert_eq!(config.output.format, Some(OutputFormat::Report));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = FileConfig::default();
        config.behavior.timeout_seconds = Some(45);
        apply_cli_overrides(&mut config, &Cli::parse_from(["specialist-panel"]));
        assert_eq!(config.behavior.timeout_seconds, Some(45));
        assert_eq!(config.panel.specialists.len(), 3);
        assert_eq!(config.behavior.gate_policy, GatePolicy::KeyPresence);
    }

    #[tokio::test]
    async fn test_missing_credential_exits_before_any_work() {
        let temp_dir = TempDir::new().unwrap();
        // Input does not exist: reading it would surface as an error, not an exit code
        let input = temp_dir.path().join("medical_report.txt");
        let output = temp_dir.path().join("results").join("final_diagnosis.txt");

        let cli = Cli::parse_from([
            "specialist-panel",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--quiet",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);

        let code = run(
            &cli,
            &config,
            Err(CredentialError::Missing { var: API_KEY_VAR }),
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(!output.exists());
        assert!(!temp_dir.path().join("results").exists());
    }
}
