mod app;
mod cli;
mod ui;

use bulk_todo::config;
use bulk_todo::todo;
use bulk_todo::utils;

use anyhow::Result;
use app::AppState;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::fs;
use std::io::{self, Write};
use std::panic;
use todo::{TodoItem, TodoStore};
use ui::theme::Theme;
use utils::paths::{get_crash_log_path, get_logs_dir};

/// Settings a crash report is tagged with, so a report can be matched to the
/// session that produced it.
#[derive(Debug, Clone)]
struct CrashContext {
    seed_count: usize,
    theme: String,
}

impl CrashContext {
    fn from_config(config: &Config) -> Self {
        Self {
            seed_count: config.seed_count,
            theme: config.theme.clone(),
        }
    }
}

/// Crash report text without the backtrace.
fn format_crash_report(
    context: &CrashContext,
    timestamp: &str,
    message: Option<&str>,
    location: Option<String>,
) -> String {
    let mut report = format!(
        "=== CRASH at {timestamp} (bulktodo v{}) ===\nSession: seed_count={} theme={}\n",
        env!("CARGO_PKG_VERSION"),
        context.seed_count,
        context.theme
    );
    if let Some(message) = message {
        report.push_str(&format!("Message: {message}\n"));
    }
    if let Some(location) = location {
        report.push_str(&format!("Location: {location}\n"));
    }
    report
}

/// Install a panic hook that appends a crash report to the crash log, then
/// defers to the default hook.
fn install_crash_handler(context: CrashContext) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let payload = panic_info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str));
            let location = panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

            let mut crash_report = format_crash_report(&context, &timestamp, message, location);
            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to ~/.bulk-todo/logs/bulktodo.log.<date>, level from
/// RUST_LOG (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {e}");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "bulktodo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?.with_overrides(cli.seed_count, cli.theme);

    install_crash_handler(CrashContext::from_config(&config));

    match cli.command {
        Some(Commands::Show { json, limit }) => {
            let store = TodoStore::with_seed(config.seed_count);
            handle_show(store.items(), json, limit, &mut io::stdout().lock())?;
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!(seed_count = config.seed_count, theme = %config.theme, "bulktodo starting");

            let store = TodoStore::with_seed(config.seed_count);
            let state = AppState::new(store, Theme::from_config(&config));
            ui::run_tui(state)?;

            tracing::info!("bulktodo exiting");
        }
    }

    Ok(())
}

fn handle_show(
    items: &[TodoItem],
    json: bool,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let shown = &items[..limit.unwrap_or(items.len()).min(items.len())];

    if json {
        serde_json::to_writer_pretty(&mut *out, shown)?;
        writeln!(out)?;
        return Ok(());
    }

    for item in shown {
        let checkbox = if item.checked { "[x]" } else { "[ ]" };
        writeln!(out, "{:>5}. {} {}", item.id, checkbox, item.text)?;
    }
    if shown.len() < items.len() {
        writeln!(out, "  ... {} more", items.len() - shown.len())?;
    }

    Ok(())
}
