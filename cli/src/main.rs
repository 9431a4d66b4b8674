//! CLI entrypoint for orgsettings
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use orgsettings_application::{
    CatalogFetcher, CommitOutcome, DataverseTransport, EventLog, FanoutEventLog, NoNotifier,
    Notifier, SettingsSession,
};
use orgsettings_domain::DomainError;
use orgsettings_infrastructure::{
    ConfigLoader, DataverseWebApiTransport, FileConfig, HttpCatalogFetcher, JsonlEventLog,
    StaticConnection, TracingEventLog, build_client,
};
use orgsettings_presentation::{
    Cli, Command, ConsoleFormatter, ConsoleNotifier, EditShell, ListOptions, ProgressReporter,
    ShellConfig, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    colored::control::set_override(config.output.color);

    info!("Starting orgsettings");

    // === Dependency Injection ===
    let client = build_client(Duration::from_secs(config.connection.timeout_seconds))
        .context("Failed to build HTTP client")?;

    let base_url = cli
        .url
        .as_deref()
        .or_else(|| config.connection.base_url());
    let connection = Arc::new(StaticConnection::new(base_url));

    let mut transport = DataverseWebApiTransport::new(
        client.clone(),
        connection.base_url().unwrap_or_default(),
        config.connection.api_version.clone(),
    );
    if let Some(token) = &config.connection.token {
        transport = transport.with_token(token.clone());
    }
    let fetcher = Arc::new(HttpCatalogFetcher::new(client));

    // Spinner on a terminal, plain progress lines when stderr is redirected
    let show_progress = !cli.quiet && !cli.json;
    let progress = (show_progress && std::io::stderr().is_terminal())
        .then(|| Arc::new(ProgressReporter::new()));
    let progress_sink: Option<Arc<dyn EventLog>> = match &progress {
        Some(spinner) => Some(spinner.clone()),
        None if show_progress => Some(Arc::new(SimpleProgress)),
        None => None,
    };
    let log = event_log(&config, progress_sink);

    // JSON output stays machine-readable: no banners
    let notifier: Arc<dyn Notifier> = if cli.json {
        Arc::new(NoNotifier)
    } else {
        Arc::new(ConsoleNotifier)
    };

    let session = Arc::new(SettingsSession::new(
        connection,
        Arc::new(transport),
        fetcher,
        notifier,
        log,
        config.session_config(),
    ));

    // === Mount ===
    if let Some(progress) = &progress {
        progress.start("Loading settings catalogs...");
    }
    let report = session.mount().await;
    if let Some(progress) = &progress {
        progress.finish();
    }
    if !cli.quiet && !cli.json {
        eprint!("{}", ConsoleFormatter::format_mount(&report));
    }

    match cli.command.unwrap_or(Command::List {
        filter: None,
        dirty: false,
        sort: Default::default(),
    }) {
        Command::List {
            filter,
            dirty,
            sort,
        } => {
            let snapshot = session.snapshot();
            if cli.json {
                println!("{}", ConsoleFormatter::format_json(&snapshot));
            } else {
                let mut options = ListOptions::default().dirty_only(dirty).sorted_by(sort);
                if let Some(filter) = filter {
                    options = options.with_filter(filter);
                }
                print!("{}", ConsoleFormatter::format_table(&options.select(&snapshot)));
            }
        }
        Command::Show { name } => {
            let snapshot = session.snapshot();
            let Some(record) = snapshot.find(&name) else {
                bail!(DomainError::UnknownSetting(name.trim().to_string()));
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
                );
            } else {
                println!("{}", ConsoleFormatter::format_detail(record));
            }
        }
        Command::Set {
            assignments,
            dry_run,
        } => run_set(&session, &assignments, dry_run).await?,
        Command::Shell => {
            EditShell::new(session)
                .with_config(ShellConfig::default())
                .run()
                .await
                .context("Shell terminated")?;
        }
    }

    Ok(())
}

/// Event sinks: tracing always, JSONL file and progress output when configured.
fn event_log(config: &FileConfig, progress: Option<Arc<dyn EventLog>>) -> Arc<dyn EventLog> {
    let mut log = FanoutEventLog::new(vec![Arc::new(TracingEventLog)]);

    if let Some(path) = &config.log_file {
        match JsonlEventLog::new(path) {
            Some(jsonl) => log.push(Arc::new(jsonl)),
            None => warn!("Cannot open event log file {}", path.display()),
        }
    }
    if let Some(progress) = progress {
        log.push(progress);
    }
    Arc::new(log)
}

/// Stage every assignment, print the payload, then save it in one update.
async fn run_set<T, F>(
    session: &SettingsSession<T, F>,
    assignments: &[(String, String)],
    dry_run: bool,
) -> Result<()>
where
    T: DataverseTransport + 'static,
    F: CatalogFetcher + 'static,
{
    for (name, value) in assignments {
        let stored = session.stage(name, value).await?;
        if stored != *value {
            eprintln!("{}: '{}' stored as '{}'", name, value, stored);
        }
    }

    let payload = session.preview_payload().await;
    print!("{}", ConsoleFormatter::format_payload(payload.as_deref()));
    if dry_run || payload.is_none() {
        return Ok(());
    }

    let outcome = session.save().await;
    print!("{}", ConsoleFormatter::format_commit(&outcome));
    match outcome {
        CommitOutcome::Failed(e) => Err(e.into()),
        CommitOutcome::NothingToSave | CommitOutcome::Saved { .. } => Ok(()),
    }
}
