//! Hand-rolled WAV decoder, a near-literal port of `src/seal/wav.c`: chunk
//! walk, `fmt `/`data` handling, skip-and-ignore for the other recognized
//! chunks, reject-unknown-chunk-id, PCM-only enforcement.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Result, SealError};
use crate::raw::RawPcmAttr;

use super::Decoder;

const FMT_: u32 = u32::from_le_bytes(*b"fmt ");
const DATA: u32 = u32::from_le_bytes(*b"data");
const FACT: u32 = u32::from_le_bytes(*b"fact");
const WAVL: u32 = u32::from_le_bytes(*b"wavl");
const SLNT: u32 = u32::from_le_bytes(*b"slnt");
const CUE_: u32 = u32::from_le_bytes(*b"cue ");
const PLST: u32 = u32::from_le_bytes(*b"plst");
const LIST: u32 = u32::from_le_bytes(*b"list");
const LABL: u32 = u32::from_le_bytes(*b"labl");
const NOTE: u32 = u32::from_le_bytes(*b"note");
const LTXT: u32 = u32::from_le_bytes(*b"ltxt");
const SMPL: u32 = u32::from_le_bytes(*b"smpl");
const INST: u32 = u32::from_le_bytes(*b"inst");

const PCM_CODE: u16 = 1;
const CHUNK_MIN_SIZE: u32 = 4;

pub struct WavDecoder {
    file: File,
    attr: RawPcmAttr,
    base_offset: u64,
    offset: u64,
    end_offset: u64,
}

impl WavDecoder {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).map_err(|_| SealError::CannotOpenFile(path.to_path_buf()))?;

        let mut attr = RawPcmAttr::default();
        let (base_offset, end_offset) = read_chunks(&mut file, &mut attr)?;

        if base_offset == end_offset || attr.sample_rate_hz == 0 {
            return Err(SealError::AbsentWavChunk);
        }

        file.seek(SeekFrom::Start(base_offset))?;

        Ok(Self {
            file,
            attr,
            base_offset,
            offset: base_offset,
            end_offset,
        })
    }
}

impl Decoder for WavDecoder {
    fn attr(&self) -> RawPcmAttr {
        self.attr
    }

    fn read(&mut self, out: &mut Vec<u8>, max_bytes: usize) -> Result<usize> {
        if self.offset >= self.end_offset {
            return Ok(0);
        }

        let remaining = (self.end_offset - self.offset) as usize;
        let nbytes = remaining.min(max_bytes);

        out.resize(nbytes, 0);
        self.file.read_exact(&mut out[..nbytes])?;
        self.offset += nbytes as u64;

        Ok(nbytes)
    }

    fn rewind(&mut self) -> Result<()> {
        self.offset = self.base_offset;
        self.file
            .seek(SeekFrom::Start(self.base_offset))
            .map_err(|_| SealError::CannotRewindWav)?;
        Ok(())
    }
}

/// Walks the chunk list starting after the 12-byte RIFF/WAVE header
/// (assumed correct, matching the original's `/* Assumes the first 12 bytes
/// are correct. */`), returning the `data` chunk's byte range.
fn read_chunks(file: &mut File, attr: &mut RawPcmAttr) -> Result<(u64, u64)> {
    file.seek(SeekFrom::Start(12))?;

    let mut base_offset = 0u64;
    let mut end_offset = 0u64;

    loop {
        let mut id_buf = [0u8; 4];
        match file.read_exact(&mut id_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        let chunk_id = u32::from_le_bytes(id_buf);

        let mut size_buf = [0u8; 4];
        file.read_exact(&mut size_buf)?;
        let chunk_size = u32::from_le_bytes(size_buf);
        if chunk_size <= CHUNK_MIN_SIZE {
            return Err(SealError::BadWavChunkSize);
        }

        match chunk_id {
            FMT_ => read_fmt(file, attr, chunk_size)?,
            DATA => {
                base_offset = file.stream_position()?;
                end_offset = base_offset + chunk_size as u64;
                file.seek(SeekFrom::Start(end_offset))?;
            }
            FACT | WAVL | SLNT | CUE_ | PLST | LIST | LABL | NOTE | LTXT | SMPL | INST => {
                file.seek(SeekFrom::Current(chunk_size as i64))?;
            }
            _ => return Err(SealError::BadWavChunk),
        }
    }

    Ok((base_offset, end_offset))
}

fn read_fmt(file: &mut File, attr: &mut RawPcmAttr, chunk_size: u32) -> Result<()> {
    let mut u16_buf = [0u8; 2];

    file.read_exact(&mut u16_buf)?;
    let compression_code = u16::from_le_bytes(u16_buf);
    if compression_code != PCM_CODE {
        return Err(SealError::BadWavSubtype);
    }

    file.read_exact(&mut u16_buf)?;
    let channels = u16::from_le_bytes(u16_buf);

    let mut u32_buf = [0u8; 4];
    file.read_exact(&mut u32_buf)?;
    let freq = u32::from_le_bytes(u32_buf);
    if freq == 0 {
        return Err(SealError::BadWavFreq);
    }

    // Average bytes/sec and block align are ignored.
    file.seek(SeekFrom::Current(6))?;

    file.read_exact(&mut u16_buf)?;
    let bit_depth = u16::from_le_bytes(u16_buf);

    attr.channels = channels;
    attr.bit_depth = bit_depth;
    attr.sample_rate_hz = freq;

    // Extra format data (cbSize and beyond) is ignored.
    if chunk_size > 16 {
        file.seek(SeekFrom::Current((chunk_size - 16) as i64))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal_wav(sample_rate: u32, bits: u16, channels: u16, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");

        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
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

        bytes
    }

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn s1_static_wav_attrs_roundtrip() {
        let data = vec![0x7fu8; 4096];
        let bytes = minimal_wav(11025, 8, 1, &data);
        let file = write_temp(&bytes);

        let decoder = WavDecoder::open(file.path()).unwrap();
        assert_eq!(decoder.attr().sample_rate_hz, 11025);
        assert_eq!(decoder.attr().bit_depth, 8);
        assert_eq!(decoder.attr().channels, 1);
    }

    #[test]
    fn full_read_then_eof_then_rewind() {
        let data = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let bytes = minimal_wav(44100, 16, 2, &data);
        let file = write_temp(&bytes);

        let mut decoder = WavDecoder::open(file.path()).unwrap();
        let mut out = Vec::new();
        let n = decoder.read(&mut out, 1024).unwrap();
        assert_eq!(n, data.len());
        assert_eq!(&out[..n], &data[..]);

        let n2 = decoder.read(&mut out, 1024).unwrap();
        assert_eq!(n2, 0);

        decoder.rewind().unwrap();
        let n3 = decoder.read(&mut out, 1024).unwrap();
        assert_eq!(n3, data.len());
    }

    #[test]
    fn non_pcm_subtype_rejected() {
        let mut bytes = minimal_wav(44100, 16, 2, &[0u8; 16]);
        // Flip the compression code field (offset 20) away from PCM.
        bytes[20] = 3;
        let file = write_temp(&bytes);
        let result = WavDecoder::open(file.path());
        assert!(matches!(result, Err(SealError::BadWavSubtype)));
    }

    #[test]
    fn unknown_chunk_id_rejected() {
        let mut bytes = minimal_wav(44100, 16, 2, &[0u8; 16]);
        // Splice an unrecognized chunk ("zzzz") before the data chunk.
        let fmt_chunk_end = 12 + 8 + 16; // RIFF header + "fmt " chunk header + body
        let mut bogus_chunk = Vec::new();
        bogus_chunk.extend_from_slice(b"zzzz");
        bogus_chunk.extend_from_slice(&8u32.to_le_bytes());
        bogus_chunk.extend_from_slice(&[0u8; 8]);
        bytes.splice(fmt_chunk_end..fmt_chunk_end, bogus_chunk);

        let file = write_temp(&bytes);
        let result = WavDecoder::open(file.path());
        assert!(matches!(result, Err(SealError::BadWavChunk)));
    }

    #[test]
    fn chunk_reads_in_chunked_pulls() {
        let data = vec![9u8; 20000];
        let bytes = minimal_wav(22050, 16, 1, &data);
        let file = write_temp(&bytes);
        let mut decoder = WavDecoder::open(file.path()).unwrap();

        let mut total = 0usize;
        let mut out = Vec::new();
        loop {
            let n = decoder.read(&mut out, 9216).unwrap();
            if n == 0 {
                break;
            }
            total += n;
        }
        assert_eq!(total, data.len());
    }
}
