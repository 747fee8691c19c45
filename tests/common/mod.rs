//! Shared scaffolding for the integration tests under `tests/`. Lives in a
//! `common/mod.rs` subdirectory (not `common.rs`) so cargo doesn't treat it
//! as its own test binary.

use std::io::Write;

use seal::config::EngineConfig;
use seal::Engine;

/// Every integration test file in this crate runs in the same process, so
/// the engine's `OnceLock` is shared across all of them; mirrors the
/// `test_engine()` helper already used by `src/source/mod.rs`'s unit tests.
pub fn test_engine() -> &'static Engine {
    Engine::get().unwrap_or_else(|| Engine::startup(EngineConfig::default()).expect("engine startup"))
}

/// Builds a minimal PCM WAV file on disk, same layout as
/// `src/decoder/wav.rs`'s private test helper of the same shape.
pub fn write_minimal_wav(
    sample_rate: u32,
    bits: u16,
    channels: u16,
    data: &[u8],
) -> tempfile::NamedTempFile {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    let byte_rate = sample_rate * channels as u32 * (bits as u32 / 8);
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    let block_align = channels * (bits / 8);
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(data);

    let mut file = tempfile::NamedTempFile::new().expect("create temp wav file");
    file.write_all(&bytes).expect("write temp wav file");
    file
}
