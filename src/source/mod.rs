//! Source: an emitter in the scene, attached to a buffer or a stream
//! (§4.2). The dominant module of this crate — state machine, streaming
//! queue bookkeeping, and the shared updater integration live here.

pub(crate) mod queue;
pub mod updater;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::buf::Buffer;
use crate::effect::slot::EffectSlot;
use crate::engine::{DeviceSourceState, DeviceState, Engine, QueuedBuf, EFFECTS_PER_SOURCE};
use crate::error::{Result, SealError};
use crate::stream::Stream;

/// `[2, 63]` (`seal_set_src_queue_size`).
pub const MIN_QUEUE_SIZE: u8 = 2;
pub const MAX_QUEUE_SIZE: u8 = 63;
/// The default is 3 (triple buffering).
pub const DEFAULT_QUEUE_SIZE: u8 = 3;

/// LCM(36, 1024) — the smallest chunk size that divides evenly into both a
/// typical sample frame alignment and a disk block.
pub const MIN_CHUNK_SIZE: u32 = 9216;
pub const DEFAULT_CHUNK_SIZE: u32 = MIN_CHUNK_SIZE * 4;
pub const MAX_CHUNK_SIZE: u32 = 16_773_120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Initial,
    Playing,
    Paused,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Undetermined,
    Static,
    Streaming,
}

enum Attachment {
    None,
    Static(Buffer),
    Streaming(Stream),
}

struct SourceProps {
    position: [f32; 3],
    velocity: [f32; 3],
    pitch: f32,
    gain: f32,
    relative: bool,
    looping: bool,
    automatic: bool,
    queue_size: u8,
    chunk_size: u32,
    feeds: [Option<u32>; EFFECTS_PER_SOURCE as usize],
}

impl Default for SourceProps {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            velocity: [0.0; 3],
            pitch: 1.0,
            gain: 1.0,
            relative: false,
            looping: false,
            automatic: true,
            queue_size: DEFAULT_QUEUE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            feeds: [None; EFFECTS_PER_SOURCE as usize],
        }
    }
}

impl SourceProps {
    /// Seeds `queue_size`/`chunk_size` from the engine's configured
    /// defaults rather than the hardcoded constants, clamping and aligning
    /// the same way the setters do in case a config file carries a stale or
    /// hand-edited value.
    fn from_config(engine: &Engine) -> Self {
        let config = engine.config();
        let queue_size = config.default_queue_size.clamp(MIN_QUEUE_SIZE, MAX_QUEUE_SIZE);
        let chunk_size = config
            .default_chunk_size
            .clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
            / MIN_CHUNK_SIZE
            * MIN_CHUNK_SIZE;
        Self {
            queue_size,
            chunk_size,
            ..Self::default()
        }
    }
}

/// The shared, possibly updater-watched state behind a [`Source`] handle.
/// Split out from `Source` so the shared updater can hold a `Weak`
/// reference to a playing source without extending its lifetime past the
/// owner dropping the handle (§9 Design Notes).
struct SourceShared {
    id: u32,
    engine: &'static Engine,
    props: RwLock<SourceProps>,
    attachment: RwLock<Attachment>,
}

impl SourceShared {
    fn id(&self) -> u32 {
        self.id
    }

    fn wants_auto_update(&self) -> bool {
        if !self.props.read().automatic {
            return false;
        }
        let device = self.engine.device();
        matches!(
            device.sources.get(&self.id).map(|r| r.state),
            Some(DeviceSourceState::Playing)
        )
    }

    fn poll_streaming(&self) -> Result<()> {
        let attachment = self.attachment.read();
        if let Attachment::Streaming(stream) = &*attachment {
            let (queue_size, chunk_size, looping) = {
                let p = self.props.read();
                (p.queue_size, p.chunk_size, p.looping)
            };
            queue::update(self.engine, self.id, stream, looping, queue_size, chunk_size)
        } else {
            Ok(())
        }
    }
}

fn clear_queue(device: &mut DeviceState, id: u32) {
    let ids: Vec<u32> = match device.sources.get_mut(&id) {
        Some(record) => record.queue.drain(..).map(|q| q.id).collect(),
        None => Vec::new(),
    };
    for buf_id in ids {
        device.buffers.remove(&buf_id);
    }
}

/// A source emits the audio carried by whatever it is attached to, filtered
/// by its own position/velocity/pitch/gain and (combined with the listener)
/// rendered in 3-D. See the state-transition table in SPEC_FULL.md §4.2.
pub struct Source {
    inner: Arc<SourceShared>,
}

impl Source {
    /// `init`: allocate a device source id.
    pub fn init(engine: &'static Engine) -> Result<Self> {
        let id = engine.device().alloc_source()?;
        Ok(Self {
            inner: Arc::new(SourceShared {
                id,
                engine,
                props: RwLock::new(SourceProps::from_config(engine)),
                attachment: RwLock::new(Attachment::None),
            }),
        })
    }

    pub fn id(&self) -> u32 {
        self.inner.id
    }

    /// `destroy`: stops playback (if any), empties the streaming queue, and
    /// frees the device id. Does not free the attached buffer or stream.
    pub fn destroy(self) -> Result<()> {
        let engine = self.inner.engine;
        let mut device = engine.device();
        clear_queue(&mut device, self.inner.id);
        device.free_source(self.inner.id);
        Ok(())
    }

    fn prior_state(&self) -> Result<DeviceSourceState> {
        let device = self.inner.engine.device();
        device
            .sources
            .get(&self.inner.id)
            .map(|r| r.state)
            .ok_or(SealError::BadObject)
    }

    fn restart_queuing(&self, stream: &Stream) -> Result<()> {
        let engine = self.inner.engine;
        let mut device = engine.device();
        if let Some(record) = device.sources.get_mut(&self.inner.id) {
            record.state = DeviceSourceState::Stopped;
        }
        clear_queue(&mut device, self.inner.id);
        drop(device);
        stream.rewind()
    }

    /// `play`: see the module doc and `src.h`'s `seal_play_src` contract —
    /// restarts from the beginning if already playing (rewinding a stream,
    /// if attached), otherwise resumes (paused) or starts fresh
    /// (initial/stopped). Streaming sources get one immediate refill so
    /// playback can start without waiting for the next updater tick.
    pub fn play(&self) -> Result<()> {
        let prior_state = self.prior_state()?;

        {
            let attachment = self.inner.attachment.read();
            if let Attachment::Streaming(stream) = &*attachment {
                if prior_state == DeviceSourceState::Playing {
                    self.restart_queuing(stream)?;
                }
                let (queue_size, chunk_size, looping) = {
                    let p = self.inner.props.read();
                    (p.queue_size, p.chunk_size, p.looping)
                };
                queue::update(self.inner.engine, self.inner.id, stream, looping, queue_size, chunk_size)?;
            }
        }

        {
            let mut device = self.inner.engine.device();
            let record = device
                .sources
                .get_mut(&self.inner.id)
                .ok_or(SealError::BadObject)?;
            record.state = DeviceSourceState::Playing;
            record.play_started_at = Some(Instant::now());
            if prior_state != DeviceSourceState::Paused {
                record.elapsed_before_pause = Duration::ZERO;
            }
        }

        let is_streaming = matches!(&*self.inner.attachment.read(), Attachment::Streaming(_));
        if is_streaming && self.inner.props.read().automatic {
            self.inner.engine.updater.watch(&self.inner);
        }

        Ok(())
    }

    /// `pause`: no-op unless currently playing.
    pub fn pause(&self) -> Result<()> {
        let mut device = self.inner.engine.device();
        let record = device
            .sources
            .get_mut(&self.inner.id)
            .ok_or(SealError::BadObject)?;
        if record.state == DeviceSourceState::Playing {
            if let Some(started) = record.play_started_at.take() {
                record.elapsed_before_pause += started.elapsed();
            }
            record.state = DeviceSourceState::Paused;
        }
        Ok(())
    }

    /// `stop`: no-op unless currently playing or paused. Resets the
    /// sampling offset and, for streaming sources, empties and rewinds.
    pub fn stop(&self) -> Result<()> {
        let attachment = self.inner.attachment.read();
        let mut device = self.inner.engine.device();
        let transitioned = {
            let record = device
                .sources
                .get_mut(&self.inner.id)
                .ok_or(SealError::BadObject)?;
            if matches!(record.state, DeviceSourceState::Playing | DeviceSourceState::Paused) {
                record.state = DeviceSourceState::Stopped;
                record.play_started_at = None;
                record.elapsed_before_pause = Duration::ZERO;
                true
            } else {
                false
            }
        };

        if transitioned {
            if let Attachment::Streaming(stream) = &*attachment {
                clear_queue(&mut device, self.inner.id);
                drop(device);
                stream.rewind()?;
            }
        }
        Ok(())
    }

    /// `rewind`: no-op if already initial. Otherwise resets the sampling
    /// offset and, for streaming sources, empties and rewinds the stream.
    pub fn rewind(&self) -> Result<()> {
        let prior_state = self.prior_state()?;
        {
            let attachment = self.inner.attachment.read();
            if let Attachment::Streaming(stream) = &*attachment {
                match prior_state {
                    DeviceSourceState::Playing | DeviceSourceState::Paused => {
                        self.restart_queuing(stream)?;
                    }
                    DeviceSourceState::Stopped => {
                        stream.rewind()?;
                    }
                    DeviceSourceState::Initial => {}
                }
            }
        }

        if prior_state != DeviceSourceState::Initial {
            let mut device = self.inner.engine.device();
            if let Some(record) = device.sources.get_mut(&self.inner.id) {
                record.state = DeviceSourceState::Initial;
                record.play_started_at = None;
                record.elapsed_before_pause = Duration::ZERO;
            }
        }
        Ok(())
    }

    /// `set_buffer`: only on an initial/stopped, non-streaming source.
    pub fn set_buffer(&self, buffer: &Buffer) -> Result<()> {
        if matches!(&*self.inner.attachment.read(), Attachment::Streaming(_)) {
            return Err(SealError::MixingSrcType);
        }

        let prior_state = self.prior_state()?;
        if !matches!(prior_state, DeviceSourceState::Initial | DeviceSourceState::Stopped) {
            return Err(SealError::BadOperation);
        }

        let looping = self.inner.props.read().looping;
        let engine = self.inner.engine;
        let attr = {
            let device = engine.device();
            let record = device.buffers.get(&buffer.id()).ok_or(SealError::BadObject)?;
            record.attr
        };
        let size = buffer.size(engine)?;
        let duration = queue::duration_of(attr, size);

        {
            let mut device = engine.device();
            let record = device
                .sources
                .get_mut(&self.inner.id)
                .ok_or(SealError::BadObject)?;
            record.looping = looping;
            record.static_buffer = Some(buffer.id());
            record.queue = VecDeque::new();
            record.queue.push_back(QueuedBuf {
                id: buffer.id(),
                duration,
            });
        }

        *self.inner.attachment.write() = Attachment::Static(buffer.clone());
        Ok(())
    }

    /// `set_stream`: rejected if this source is static, if the stream is
    /// already owned by another source, or if it carries a different
    /// format than a stream this source already owns. Triggers one
    /// immediate queue fill.
    pub fn set_stream(&self, stream: &Stream) -> Result<()> {
        {
            let attachment = self.inner.attachment.read();
            match &*attachment {
                Attachment::Streaming(existing) if existing.is_same_session(stream) => return Ok(()),
                Attachment::Static(_) => return Err(SealError::MixingSrcType),
                Attachment::Streaming(existing) if existing.attr() != stream.attr() => {
                    return Err(SealError::MixingStreamFmt);
                }
                _ => {}
            }
        }

        if stream.is_in_use_elsewhere() {
            return Err(SealError::StreamInUse);
        }

        *self.inner.attachment.write() = Attachment::Streaming(stream.clone());
        {
            let mut device = self.inner.engine.device();
            if let Some(record) = device.sources.get_mut(&self.inner.id) {
                record.static_buffer = None;
            }
        }

        let (queue_size, chunk_size, looping) = {
            let p = self.inner.props.read();
            (p.queue_size, p.chunk_size, p.looping)
        };
        queue::update(self.inner.engine, self.inner.id, stream, looping, queue_size, chunk_size)
    }

    /// `detach_audio`: releases the buffer or stream. Resets type to
    /// undetermined and state to stopped. Does not free the buffer/stream
    /// itself.
    pub fn detach_audio(&self) -> Result<()> {
        let mut device = self.inner.engine.device();
        clear_queue(&mut device, self.inner.id);
        if let Some(record) = device.sources.get_mut(&self.inner.id) {
            record.state = DeviceSourceState::Stopped;
            record.static_buffer = None;
            record.play_started_at = None;
            record.elapsed_before_pause = Duration::ZERO;
        }
        drop(device);
        *self.inner.attachment.write() = Attachment::None;
        Ok(())
    }

    /// `feed_effect_slot`: `index` must be `< Engine::effects_per_source()`.
    pub fn feed_effect_slot(&self, slot: Option<&EffectSlot>, index: u32) -> Result<()> {
        if index >= EFFECTS_PER_SOURCE {
            return Err(SealError::BadValue(format!(
                "effect index must be < {EFFECTS_PER_SOURCE}"
            )));
        }
        self.inner.props.write().feeds[index as usize] = slot.map(|s| s.id());
        Ok(())
    }

    /// `update`: manual streaming refill. No-op for non-streaming sources
    /// and a no-op while auto update is on (the shared updater already
    /// handles it).
    pub fn update(&self) -> Result<()> {
        if self.inner.props.read().automatic {
            return Ok(());
        }
        self.inner.poll_streaming()
    }

    pub fn position(&self) -> [f32; 3] {
        self.inner.props.read().position
    }

    pub fn set_position(&self, position: [f32; 3]) {
        self.inner.props.write().position = position;
    }

    pub fn velocity(&self) -> [f32; 3] {
        self.inner.props.read().velocity
    }

    pub fn set_velocity(&self, velocity: [f32; 3]) {
        self.inner.props.write().velocity = velocity;
    }

    pub fn pitch(&self) -> f32 {
        self.inner.props.read().pitch
    }

    /// Pitch must be in `(0, +inf)`.
    pub fn set_pitch(&self, pitch: f32) -> Result<()> {
        if !(pitch > 0.0) {
            return Err(SealError::BadValue("pitch must be > 0".into()));
        }
        self.inner.props.write().pitch = pitch;
        Ok(())
    }

    pub fn gain(&self) -> f32 {
        self.inner.props.read().gain
    }

    /// Gain must be in `[0, +inf)`.
    pub fn set_gain(&self, gain: f32) -> Result<()> {
        if gain < 0.0 {
            return Err(SealError::BadValue("gain must be >= 0".into()));
        }
        self.inner.props.write().gain = gain;
        Ok(())
    }

    pub fn is_relative(&self) -> bool {
        self.inner.props.read().relative
    }

    pub fn set_relative(&self, relative: bool) {
        self.inner.props.write().relative = relative;
    }

    pub fn is_looping(&self) -> bool {
        self.inner.props.read().looping
    }

    /// Looping only ever applies manually inside the streaming refill loop
    /// and the static-buffer duration bookkeeping; it is never forwarded
    /// to a device-level "loop" flag the way a static-only device would,
    /// because streaming buffers would then never report as processed.
    pub fn set_looping(&self, looping: bool) {
        self.inner.props.write().looping = looping;
    }

    pub fn is_auto_update(&self) -> bool {
        self.inner.props.read().automatic
    }

    pub fn set_auto_update(&self, automatic: bool) {
        self.inner.props.write().automatic = automatic;
    }

    pub fn queue_size(&self) -> u8 {
        self.inner.props.read().queue_size
    }

    pub fn set_queue_size(&self, size: u8) {
        self.inner.props.write().queue_size = size.clamp(MIN_QUEUE_SIZE, MAX_QUEUE_SIZE);
    }

    pub fn chunk_size(&self) -> u32 {
        self.inner.props.read().chunk_size
    }

    /// Adjusted down to the nearest multiple of [`MIN_CHUNK_SIZE`] after
    /// clamping, matching `seal_set_src_chunk_size`.
    pub fn set_chunk_size(&self, size: u32) {
        let clamped = size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self.inner.props.write().chunk_size = clamped / MIN_CHUNK_SIZE * MIN_CHUNK_SIZE;
    }

    pub fn source_type(&self) -> SourceType {
        match &*self.inner.attachment.read() {
            Attachment::None => SourceType::Undetermined,
            Attachment::Static(_) => SourceType::Static,
            Attachment::Streaming(_) => SourceType::Streaming,
        }
    }

    pub fn state(&self) -> Result<SourceState> {
        let device = self.inner.engine.device();
        let record = device.sources.get(&self.inner.id).ok_or(SealError::BadObject)?;
        Ok(match record.state {
            DeviceSourceState::Initial => SourceState::Initial,
            DeviceSourceState::Playing => SourceState::Playing,
            DeviceSourceState::Paused => SourceState::Paused,
            DeviceSourceState::Stopped => SourceState::Stopped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn test_engine() -> &'static Engine {
        Engine::get().unwrap_or_else(|| Engine::startup(EngineConfig::default()).expect("startup"))
    }

    #[test]
    fn fresh_source_is_undetermined_and_initial() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        assert_eq!(source.source_type(), SourceType::Undetermined);
        assert_eq!(source.state().unwrap(), SourceState::Initial);
        source.destroy().unwrap();
    }

    #[test]
    fn defaults_match_header_documented_values() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        assert_eq!(source.queue_size(), DEFAULT_QUEUE_SIZE);
        assert_eq!(source.chunk_size(), 36_864);
        assert_eq!(source.pitch(), 1.0);
        assert_eq!(source.gain(), 1.0);
        assert!(!source.is_looping());
        assert!(source.is_auto_update());
        source.destroy().unwrap();
    }

    #[test]
    fn negative_gain_rejected() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        assert!(matches!(source.set_gain(-1.0), Err(SealError::BadValue(_))));
        source.destroy().unwrap();
    }

    #[test]
    fn zero_pitch_rejected() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        assert!(matches!(source.set_pitch(0.0), Err(SealError::BadValue(_))));
        source.destroy().unwrap();
    }

    #[test]
    fn queue_and_chunk_sizes_clamp_into_range() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        source.set_queue_size(1);
        assert_eq!(source.queue_size(), MIN_QUEUE_SIZE);
        source.set_queue_size(200);
        assert_eq!(source.queue_size(), MAX_QUEUE_SIZE);
        source.set_chunk_size(1);
        assert_eq!(source.chunk_size(), MIN_CHUNK_SIZE);
        source.set_chunk_size(MIN_CHUNK_SIZE + 1);
        assert_eq!(source.chunk_size(), MIN_CHUNK_SIZE);
        source.destroy().unwrap();
    }

    #[test]
    fn static_buffer_attach_requires_initial_or_stopped() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        let buffer = Buffer::init(engine);
        let raw = crate::raw::RawPcm::with_data(
            vec![0u8; 8000],
            crate::raw::RawPcmAttr {
                bit_depth: 16,
                channels: 1,
                sample_rate_hz: 8000,
            },
        );
        buffer.copy_from_raw(engine, &raw).unwrap();

        source.set_buffer(&buffer).unwrap();
        assert_eq!(source.source_type(), SourceType::Static);

        source.play().unwrap();
        assert_eq!(source.state().unwrap(), SourceState::Playing);
        assert!(matches!(source.set_buffer(&buffer), Err(SealError::BadOperation)));

        source.stop().unwrap();
        assert_eq!(source.state().unwrap(), SourceState::Stopped);

        source.detach_audio().unwrap();
        assert_eq!(source.source_type(), SourceType::Undetermined);
        buffer.destroy(engine).unwrap();
        source.destroy().unwrap();
    }

    #[test]
    fn feed_effect_slot_rejects_out_of_range_index() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        let err = source.feed_effect_slot(None, EFFECTS_PER_SOURCE).unwrap_err();
        assert!(matches!(err, SealError::BadValue(_)));
        source.destroy().unwrap();
    }

    #[test]
    fn pause_then_play_resumes_without_resetting_offset() {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        let buffer = Buffer::init(engine);
        let raw = crate::raw::RawPcm::with_data(
            vec![0u8; 8000],
            crate::raw::RawPcmAttr {
                bit_depth: 16,
                channels: 1,
                sample_rate_hz: 8000,
            },
        );
        buffer.copy_from_raw(engine, &raw).unwrap();
        source.set_buffer(&buffer).unwrap();

        source.play().unwrap();
        std::thread::sleep(Duration::from_millis(5));
        source.pause().unwrap();
        assert_eq!(source.state().unwrap(), SourceState::Paused);

        source.play().unwrap();
        assert_eq!(source.state().unwrap(), SourceState::Playing);

        source.detach_audio().unwrap();
        buffer.destroy(engine).unwrap();
        source.destroy().unwrap();
    }
}
