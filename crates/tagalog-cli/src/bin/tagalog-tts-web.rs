use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tagalog_cli::ModelArgs;
use tagalog_serve::{ServerConfig, serve};

#[derive(Parser)]
#[command(name = "tagalog-tts-web")]
#[command(about = "Serve Tagalog text-to-speech over HTTP", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Directory for generated audio (defaults to the system temp directory)
    #[arg(long)]
    audio_dir: Option<PathBuf>,

    #[command(flatten)]
    model: ModelArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        audio_dir: cli.audio_dir.unwrap_or_else(std::env::temp_dir),
    };

    // Loaded before binding so the first request does not pay for it
    let provider = cli.model.load().await?;

    serve(config, provider).await?;

    Ok(())
}
