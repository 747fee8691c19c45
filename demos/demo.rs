//! Manual smoke test: start the engine, list the default output device,
//! load a WAV file given on the command line, and play it through a static
//! source.
//!
//! Run with: `cargo run --example demo -- path/to/file.wav`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .context("no default output device")?;
    println!("using output device: {}", device.name().unwrap_or_default());

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: demo <path/to/file.wav>")?;

    let config = seal::config::EngineConfig::load();
    let engine = seal::Engine::startup(config).context("engine startup")?;

    let buffer = seal::buf::Buffer::init(engine);
    buffer
        .load_from_file(engine, &path, None)
        .context("decoding input file")?;
    println!(
        "loaded {} bytes, {} Hz, {} channel(s), {}-bit",
        buffer.size(engine)?,
        buffer.freq(engine)?,
        buffer.channels(engine)?,
        buffer.bps(engine)?
    );

    let frames = buffer.size(engine)? / 2 / buffer.channels(engine)? as usize;
    let duration = Duration::from_secs_f64(frames as f64 / buffer.freq(engine)? as f64);

    let source = seal::Source::init(engine)?;
    source.set_buffer(&buffer)?;
    source.play()?;

    // This crate models the source/queue state machine, not real-time
    // mixing (see SPEC_FULL.md §1 Non-goals), so there is no device-driven
    // "playback finished" signal to poll for: sleep the buffer's estimated
    // duration, then stop explicitly.
    std::thread::sleep(duration);
    source.stop()?;
    source.destroy()?;
    buffer.destroy(engine)?;
    seal::Engine::cleanup();

    Ok(())
}
