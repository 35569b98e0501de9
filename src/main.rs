use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod terminal;
mod tui;

use passgen::Settings;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 if cli::quiet::is_interactive() && cli::quiet::stdout_is_tty() => {
            tui::run(Settings::default())
        }
        _ => cli::run(args),
    };
    std::process::exit(code);
}
