use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tagalog_cli::ModelArgs;
use tagalog_speech::rate::DEFAULT_RATE;
use tagalog_speech::{FileNaming, SpeechRate, synthesis};

#[derive(Parser)]
#[command(name = "tagalog-tts")]
#[command(about = "Synthesize Tagalog text into a WAV file", long_about = None)]
struct Cli {
    /// Text to speak
    #[arg(short, long, default_value = "magandang tanghali")]
    text: String,

    /// Speech rate multiplier in [0.3, 2.0]; values outside fall back to 0.7
    #[arg(short, long, default_value_t = DEFAULT_RATE, allow_negative_numbers = true)]
    speech_rate: f64,

    /// Directory for the generated file
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    #[command(flatten)]
    model: ModelArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rate = SpeechRate::new(cli.speech_rate);

    let provider = cli.model.load().await?;

    log::info!("Generating speech for: '{}'", cli.text);
    let output = synthesis::synthesize_to_file(
        provider.as_ref(),
        &cli.text,
        rate,
        &cli.output_dir,
        &FileNaming::timestamp(rate),
    )
    .await
    .context("Failed to generate audio")?;

    log::info!(
        "Rate {}: {} ms of speech became {} ms",
        rate,
        output.source_duration_ms,
        output.audio.duration_ms()
    );
    println!("Audio saved to: {}", output.path.display());

    Ok(())
}
