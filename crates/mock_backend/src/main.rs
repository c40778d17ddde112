use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fbfs_mock_backend::MockBackendServer;

/// Mock fbfs computation backend
#[derive(Parser, Debug)]
#[command(name = "fbfs-mock-backend")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, short, default_value = "3001", env = "MOCK_BACKEND_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fbfs_mock_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    MockBackendServer::new(cli.port).run().await?;

    Ok(())
}
