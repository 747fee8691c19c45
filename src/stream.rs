//! Stream: a rewindable decoder session producing PCM chunks on demand
//! (§4.4). Owning discipline mirrors `crate::buf::Buffer`: a `Stream` handle
//! is an `Arc`, and "at most one source may reference a stream" is checked
//! via `Arc::strong_count` rather than relying on undefined behaviour.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::decoder::{self, Decoder};
use crate::error::{Result, SealError};
use crate::fmt::AudioFormat;
use crate::raw::RawPcmAttr;

/// A decoder session handle, shareable (by reference) with at most one
/// source at a time.
#[derive(Clone)]
pub struct Stream {
    inner: Arc<StreamInner>,
}

struct StreamInner {
    decoder: Mutex<Box<dyn Decoder>>,
    format_tag: AudioFormat,
    attr: RawPcmAttr,
}

impl Stream {
    /// `open(stream, path, fmt?)`: sniff if unknown, dispatch to the
    /// decoder's session-open, and populate `attr` from the decoder.
    pub fn open(path: &Path, fmt: Option<AudioFormat>) -> Result<Self> {
        let decoder = decoder::open(path, fmt)?;
        let attr = decoder.attr();
        let format_tag = fmt.unwrap_or_else(|| sniff_tag(path));

        Ok(Self {
            inner: Arc::new(StreamInner {
                decoder: Mutex::new(decoder),
                format_tag,
                attr,
            }),
        })
    }

    pub fn attr(&self) -> RawPcmAttr {
        self.inner.attr
    }

    pub fn format_tag(&self) -> AudioFormat {
        self.inner.format_tag
    }

    /// `read(stream, out_raw, &out_size)`: request at most `max_bytes`;
    /// returns the actual number of bytes read. `Ok(0)` at end-of-stream,
    /// no error.
    pub fn read(&self, out: &mut Vec<u8>, max_bytes: usize) -> Result<usize> {
        let mut decoder = self.inner.decoder.lock().expect("stream mutex poisoned");
        decoder.read(out, max_bytes)
    }

    /// `rewind`: delegated to the decoder.
    pub fn rewind(&self) -> Result<()> {
        let mut decoder = self.inner.decoder.lock().expect("stream mutex poisoned");
        decoder.rewind()
    }

    /// Whether this handle is shared with a source beyond this reference
    /// (used by `Source::set_stream` to reject an already-bound stream with
    /// `StreamInUse`).
    pub fn is_in_use_elsewhere(&self) -> bool {
        Arc::strong_count(&self.inner) > 1
    }

    /// Two streams are "the same" for `set_stream`'s no-op check if they
    /// share the underlying decoder session.
    pub fn is_same_session(&self, other: &Stream) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// `close`: no explicit action needed beyond dropping the last handle —
    /// the decoder's `Drop` (closing the underlying file) runs then. Exposed
    /// as an explicit method for symmetry with the vendor API and to surface
    /// `StreamInUse` if called while still referenced by a source.
    pub fn close(self) -> Result<()> {
        if self.is_in_use_elsewhere() {
            return Err(SealError::StreamInUse);
        }
        Ok(())
    }
}

fn sniff_tag(path: &Path) -> AudioFormat {
    use std::io::Read;
    let Ok(mut file) = std::fs::File::open(path) else {
        return AudioFormat::Unknown;
    };
    let mut header = [0u8; 12];
    let n = file.read(&mut header).unwrap_or(0);
    crate::fmt::recognize(&header[..n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_use_detection_mirrors_buffer() {
        // Build a fake stream without touching the filesystem by
        // constructing the Arc directly, mirroring buf.rs's unit test.
        struct NullDecoder;
        impl Decoder for NullDecoder {
            fn attr(&self) -> RawPcmAttr {
                RawPcmAttr::default()
            }
            fn read(&mut self, _out: &mut Vec<u8>, _max_bytes: usize) -> Result<usize> {
                Ok(0)
            }
            fn rewind(&mut self) -> Result<()> {
                Ok(())
            }
        }

        let inner = Arc::new(StreamInner {
            decoder: Mutex::new(Box::new(NullDecoder) as Box<dyn Decoder>),
            format_tag: AudioFormat::Wav,
            attr: RawPcmAttr::default(),
        });
        let stream = Stream { inner: inner.clone() };
        assert!(!stream.is_in_use_elsewhere());

        let held_by_source = stream.clone();
        assert!(stream.is_in_use_elsewhere());
        drop(held_by_source);
        assert!(!stream.is_in_use_elsewhere());
    }
}
