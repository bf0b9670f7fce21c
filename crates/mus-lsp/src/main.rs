use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

mod capabilities;
mod config;
mod document;
mod handlers;
mod server;
mod session;
mod store;

#[derive(Parser)]
#[command(name = "mus-lsp")]
#[command(about = "Language Server for Mus")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

/// Log to stderr; stdout carries the protocol
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env("MUS_LSP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

// Messages are handled one at a time, in arrival order
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();

    if !args.stdio {
        eprintln!("Error: --stdio flag is required");
        std::process::exit(1);
    }

    init_tracing(args.debug);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting mus-lsp");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| server::Backend::new(client, args.debug));

    Server::new(stdin, stdout, socket)
        .concurrency_level(1)
        .serve(service)
        .await;
}
