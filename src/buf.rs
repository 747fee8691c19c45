//! Decoded buffer: an immutable, device-side PCM blob used by static
//! sources (§4.3).

use std::path::Path;
use std::sync::Arc;

use crate::decoder;
use crate::engine::Engine;
use crate::error::{Result, SealError};
use crate::fmt::AudioFormat;
use crate::raw::{RawPcm, RawPcmAttr};

/// A decoded, device-resident PCM buffer.
///
/// Cloning a `Buffer` clones the handle (an `Arc`), not the underlying
/// device object — this is how the port expresses "a source references its
/// buffer, non-owning": the source holds a clone, and `Arc::strong_count`
/// tells `load_from_file`/`copy_from_raw` whether any source still has a
/// reference, turning "buffer in use" from the vendor's undefined behaviour
/// into a checked `BufInUse` error.
#[derive(Clone)]
pub struct Buffer {
    inner: Arc<BufferHandle>,
}

struct BufferHandle {
    id: u32,
}

impl Buffer {
    /// `init`: allocate a device buffer id.
    pub fn init(engine: &'static Engine) -> Self {
        let id = engine.device().alloc_buffer();
        Self {
            inner: Arc::new(BufferHandle { id }),
        }
    }

    pub fn id(&self) -> u32 {
        self.inner.id
    }

    fn ensure_not_in_use(&self) -> Result<()> {
        // The engine itself never holds a clone; only sources do. So any
        // strong count above 1 means at least one source still references
        // this buffer.
        if Arc::strong_count(&self.inner) > 1 {
            return Err(SealError::BufInUse);
        }
        Ok(())
    }

    /// `load_from_file`: sniff format if unspecified, decode fully, upload.
    pub fn load_from_file(
        &self,
        engine: &'static Engine,
        path: &Path,
        fmt: Option<AudioFormat>,
    ) -> Result<()> {
        self.ensure_not_in_use()?;
        let raw = decoder::load_full(path, fmt)?;
        self.upload(engine, &raw)
    }

    /// `copy_from_raw`: upload a caller-provided PCM region.
    pub fn copy_from_raw(&self, engine: &'static Engine, raw: &RawPcm) -> Result<()> {
        self.ensure_not_in_use()?;
        self.upload(engine, raw)
    }

    fn upload(&self, engine: &'static Engine, raw: &RawPcm) -> Result<()> {
        let mut device = engine.device();
        let record = device
            .buffers
            .get_mut(&self.inner.id)
            .ok_or(SealError::BadObject)?;
        record.attr = raw.attr;
        record.size = raw.size();
        tracing::debug!(buffer_id = self.inner.id, bytes = raw.size(), "uploaded buffer");
        Ok(())
    }

    pub fn size(&self, engine: &'static Engine) -> Result<usize> {
        self.attr_and_size(engine).map(|(_, size)| size)
    }

    pub fn freq(&self, engine: &'static Engine) -> Result<u32> {
        self.attr_and_size(engine).map(|(attr, _)| attr.sample_rate_hz)
    }

    pub fn bps(&self, engine: &'static Engine) -> Result<u16> {
        self.attr_and_size(engine).map(|(attr, _)| attr.bit_depth)
    }

    pub fn channels(&self, engine: &'static Engine) -> Result<u16> {
        self.attr_and_size(engine).map(|(attr, _)| attr.channels)
    }

    fn attr_and_size(&self, engine: &'static Engine) -> Result<(RawPcmAttr, usize)> {
        let device = engine.device();
        let record = device.buffers.get(&self.inner.id).ok_or(SealError::BadObject)?;
        Ok((record.attr, record.size))
    }

    /// `destroy`: free the device id. Rejected with `BufInUse` while any
    /// source still references this handle.
    pub fn destroy(self, engine: &'static Engine) -> Result<()> {
        self.ensure_not_in_use()?;
        engine.device().free_buffer(self.inner.id);
        Ok(())
    }
}
