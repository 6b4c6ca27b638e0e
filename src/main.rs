use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use b360_spec::Emitter;

#[derive(Parser)]
#[command(name = "b360-spec")]
#[command(about = "Write the Business 360 feature table and mobile layout specification")]
struct Cli {
    /// Directory to write both files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

/// Initialize tracing on stderr so stdout only carries the summary
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "b360_spec=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let report = Emitter::new(cli.out_dir).run()?;
    tracing::debug!(rows = report.rows, "specification emitted");

    Ok(())
}
