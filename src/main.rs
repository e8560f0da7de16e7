use anyhow::Result;
use clap::Parser;
use roomrent::cli::{resolve_theme, Cli};
use roomrent::styles::init_theme;
use roomrent::utils::get_log_dir;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("roomrent.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file; stdout belongs to the TUI or the command output
    let file_appender = tracing_appender::rolling::never(&log_dir, "roomrent.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Loaded once; `execute` reuses it
    let config = if cli.needs_config() {
        Some(cli.load_config()?)
    } else {
        None
    };
    let theme_name = config
        .as_ref()
        .map(|c| c.theme.clone())
        .or_else(|| cli.theme.clone())
        .unwrap_or_default();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    init_theme(resolve_theme(&theme_name, no_color));

    if cli.launches_tui() {
        eprintln!("Logs are being written to: {:?}", log_file);
    }

    let result = cli.execute(config);

    drop(guard);

    result
}
