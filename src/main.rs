use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatty::config::AppConfig;
use chatty::session::Session;
use chatty::storage::Storage;
use chatty::{repl, ui};

#[derive(Parser)]
#[command(name = "chatty")]
#[command(about = "Task tracking assistant driven by short text commands")]
struct Cli {
    /// File the task list is saved to
    #[arg(long, env = "CHATTY_DATA_FILE")]
    data_file: Option<PathBuf>,
}

/// Logs go to stderr so stdout carries only the conversation.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "chatty=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let data_file = AppConfig::load().resolve_data_file(cli.data_file)?;
    tracing::info!("Using data file {}", data_file.display());
    let storage = Storage::new(data_file);

    let (mut session, failure) = Session::open_or_recover(storage);
    if let Some(failure) = failure {
        print!("{}", ui::load_failure(&failure));
    }

    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())
}
