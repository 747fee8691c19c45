//! Raw PCM: a growable byte region plus the sample attributes describing it.

/// Sample format attributes shared by raw PCM, buffers, and streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPcmAttr {
    pub bit_depth: u16,
    pub channels: u16,
    pub sample_rate_hz: u32,
}

impl Default for RawPcmAttr {
    fn default() -> Self {
        Self {
            bit_depth: 16,
            channels: 1,
            sample_rate_hz: 0,
        }
    }
}

/// An owned, growable region of interleaved PCM bytes.
///
/// Mirrors `seal_raw_t`: the vendor struct's manual `alloc_raw_data` /
/// `extend_raw_data` / `ensure_raw_data_size` dance collapses onto `Vec<u8>`,
/// which already owns its growth strategy.
#[derive(Debug, Clone, Default)]
pub struct RawPcm {
    pub data: Vec<u8>,
    pub attr: RawPcmAttr,
}

impl RawPcm {
    pub fn new(attr: RawPcmAttr) -> Self {
        Self {
            data: Vec::new(),
            attr,
        }
    }

    pub fn with_data(data: Vec<u8>, attr: RawPcmAttr) -> Self {
        Self { data, attr }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attr_matches_wav_stream_close_defaults() {
        let attr = RawPcmAttr::default();
        assert_eq!(attr.bit_depth, 16);
        assert_eq!(attr.channels, 1);
        assert_eq!(attr.sample_rate_hz, 0);
    }

    #[test]
    fn size_tracks_data_len() {
        let raw = RawPcm::with_data(vec![0u8; 128], RawPcmAttr::default());
        assert_eq!(raw.size(), 128);
    }
}
