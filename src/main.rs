use clap::Parser;
use tracing_subscriber::EnvFilter;

use docreg::cli::{handle_shell, run_session_command, Cli, Commands};
use docreg::RegistryConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCREG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> docreg::Result<()> {
    let config = RegistryConfig::load(cli.config.as_deref())?;
    let mut store = config.build_store();

    match cli.command {
        Commands::Session(command) => run_session_command(&mut store, &config, command),
        Commands::Shell => handle_shell(&mut store, &config),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
