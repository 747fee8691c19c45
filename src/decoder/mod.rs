//! Decoder collaborator contract (§1 Out of scope, §4.4): "open a file →
//! produce a stream handle with a known sample format; pull N bytes of
//! interleaved PCM; rewind; close." The core (`crate::stream`, `crate::buf`)
//! depends only on the [`Decoder`] trait; concrete backends live in
//! submodules so the WAV chunk parser can stay a near-literal, dependency-free
//! port of the original while OV/MPG lean on `symphonia` the way the teacher
//! does for all of its format support.

mod symphonia_backend;
mod wav;

use std::path::Path;

use crate::error::Result;
use crate::fmt::{self, AudioFormat};
use crate::raw::{RawPcm, RawPcmAttr};

/// A decoder session: open once, pull chunks, rewind, close (drop).
pub trait Decoder: Send {
    /// Sample attributes established at open time; stable for the session's
    /// lifetime (a format change requires closing and reopening).
    fn attr(&self) -> RawPcmAttr;

    /// Pull up to `max_bytes` of interleaved PCM. Returns the number of
    /// bytes written into `out`. `Ok(0)` with no error means end of stream.
    fn read(&mut self, out: &mut Vec<u8>, max_bytes: usize) -> Result<usize>;

    /// Seek back to the first sample.
    fn rewind(&mut self) -> Result<()>;
}

/// Sniff (if unspecified) and open a decoder session for `path`.
pub fn open(path: &Path, fmt: Option<AudioFormat>) -> Result<Box<dyn Decoder>> {
    let fmt = match fmt {
        Some(crate::fmt::AudioFormat::Unknown) | None => sniff(path)?,
        Some(f) => f,
    };

    match fmt {
        AudioFormat::Wav => Ok(Box::new(wav::WavDecoder::open(path)?)),
        AudioFormat::Ov => Ok(Box::new(symphonia_backend::SymphoniaDecoder::open(
            path,
            AudioFormat::Ov,
        )?)),
        AudioFormat::Mpg => Ok(Box::new(symphonia_backend::SymphoniaDecoder::open(
            path,
            AudioFormat::Mpg,
        )?)),
        AudioFormat::Unknown => Err(crate::error::SealError::BadAudio),
    }
}

/// Fully decode `path` into one in-memory [`RawPcm`] region (used by
/// `Buffer::load_from_file`, which needs the whole thing up front rather
/// than a rewindable session).
pub fn load_full(path: &Path, fmt: Option<AudioFormat>) -> Result<RawPcm> {
    let mut decoder = open(path, fmt)?;
    let attr = decoder.attr();
    let mut data = Vec::new();
    loop {
        let mut chunk = Vec::new();
        let n = decoder.read(&mut chunk, 1 << 20)?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);
    }
    Ok(RawPcm::with_data(data, attr))
}

fn sniff(path: &Path) -> Result<AudioFormat> {
    use std::io::Read;
    let mut file = std::fs::File::open(path)
        .map_err(|_| crate::error::SealError::CannotOpenFile(path.to_path_buf()))?;
    let mut header = [0u8; 12];
    let n = file.read(&mut header)?;
    let format = fmt::recognize(&header[..n]);
    if format == AudioFormat::Unknown {
        return Err(crate::error::SealError::BadAudio);
    }
    Ok(format)
}
