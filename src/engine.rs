//! Engine lifecycle: device acquisition, the process-wide mutex, and the
//! scoped [`DeviceGuard`] that replaces the vendor's implicit
//! lock/call/read-error/unlock coupling (§9 Design Notes).

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{Result, SealError};
use crate::listener::Listener;
use crate::raw::RawPcmAttr;
use crate::source::updater::SharedUpdater;

/// Number of auxiliary effect-slot sends available per source.
///
/// The vendor queries this from the device; this port fixes it at the spec's
/// `max_auxiliary_sends = 4`, the same ceiling the original requests when
/// creating its rendering context.
pub const EFFECTS_PER_SOURCE: u32 = 4;

/// Soft cap on concurrently alive source objects.
///
/// The vendor's `seal_init_src` has no numeric limit of its own — it calls
/// `alGenSources` and lets the real OpenAL driver's own ceiling (a few
/// hundred on most implementations) produce `CannotAllocMem` via whatever
/// `alGetError` returns. This port's `DeviceState` stands in for that driver,
/// so it carries an explicit cap instead, giving `CannotAllocMem` (spec.md
/// §4.2's `init`) a real failure path rather than leaving it unreachable.
pub const MAX_SOURCES: usize = 256;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// The process-wide handle owning the (software) device, its object
/// registries, and the shared streaming updater worker.
///
/// Replaces the original's implicit globals (device, context, extension
/// vtable, mutex) with one typed handle behind a `OnceLock`.
pub struct Engine {
    device: Mutex<DeviceState>,
    pub(crate) updater: SharedUpdater,
    config: EngineConfig,
    listener: Listener,
}

/// Internal object registries modeling the OpenAL-like device this engine
/// delegates to. Mixing and D/A conversion are explicitly out of scope
/// (§1 Non-goals); this struct only tracks identities, attributes, and
/// queue bookkeeping, which is all the source subsystem needs to observe.
pub(crate) struct DeviceState {
    next_id: AtomicU32,
    pub(crate) buffers: HashMap<u32, BufferRecord>,
    pub(crate) effect_slots: HashMap<u32, EffectSlotRecord>,
    pub(crate) sources: HashMap<u32, SourceDeviceRecord>,
}

pub(crate) struct BufferRecord {
    pub attr: RawPcmAttr,
    pub size: usize,
}

pub(crate) struct EffectSlotRecord {
    pub bound_effect_id: Option<u32>,
    pub gain: f32,
    pub auto_adjust: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSourceState {
    Initial,
    Playing,
    Paused,
    Stopped,
}

pub(crate) struct QueuedBuf {
    pub id: u32,
    pub duration: Duration,
}

pub(crate) struct SourceDeviceRecord {
    pub state: DeviceSourceState,
    pub looping: bool,
    pub static_buffer: Option<u32>,
    pub queue: VecDeque<QueuedBuf>,
    pub play_started_at: Option<Instant>,
    pub elapsed_before_pause: Duration,
}

impl DeviceState {
    fn new() -> Self {
        Self {
            next_id: AtomicU32::new(1),
            buffers: HashMap::new(),
            effect_slots: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    pub(crate) fn alloc_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Engine {
    /// `startup(device_name?)`: resolve the requested output device (failing
    /// with `CannotOpenDevice` if a named device isn't enumerated), require
    /// the effect extension (always present in this software device — see
    /// the `NoEffectExtension` note below), cache `effects_per_source`, and
    /// spin up the shared updater worker.
    ///
    /// Not re-entrant: calling this twice without `cleanup` between errors
    /// with `BadOperation`.
    ///
    /// `NoEffectExtension`/`NoExtFunc` are part of the closed error set (see
    /// `error.rs`) but have no path that produces them here: the vendor's
    /// probe-the-extension-table step models a thing this software device
    /// always has, since there is no real extension table to come back
    /// missing. Disclosed rather than silently dropped; see DESIGN.md.
    pub fn startup(config: EngineConfig) -> Result<&'static Engine> {
        if ENGINE.get().is_some() {
            return Err(SealError::BadOperation);
        }

        let device_label = match &config.device_name {
            Some(name) => {
                if !Self::output_device_exists(name) {
                    return Err(SealError::CannotOpenDevice);
                }
                name.clone()
            }
            None => Self::default_output_device_name().unwrap_or_else(|| "default".to_string()),
        };
        let span = tracing::info_span!("engine_startup", device = %device_label);
        let _enter = span.enter();
        info!("acquiring audio device");

        let engine = Engine {
            device: Mutex::new(DeviceState::new()),
            updater: SharedUpdater::spawn(),
            config,
            listener: Listener::default(),
        };

        // OnceLock::set fails only if another thread raced us; startup is
        // documented as single-threaded, so treat that as the re-entrancy
        // error rather than silently succeeding with the other instance.
        ENGINE
            .set(engine)
            .map_err(|_| SealError::BadOperation)?;

        Ok(ENGINE.get().expect("just set"))
    }

    /// `cleanup`: idempotent. No-op if `startup` never succeeded.
    pub fn cleanup() {
        // OnceLock has no `take`; in the original, cleanup zeroes globals so
        // a subsequent startup can re-run. This port's OnceLock can't be
        // un-set either, which is an accepted limitation: within one process
        // lifetime, startup succeeds at most once. Tests that need multiple
        // engines exercise the engine's methods directly rather than through
        // the global singleton.
        if let Some(engine) = ENGINE.get() {
            engine.updater.request_shutdown();
        }
    }

    pub fn get() -> Option<&'static Engine> {
        ENGINE.get()
    }

    pub fn effects_per_source(&self) -> u32 {
        EFFECTS_PER_SOURCE
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The process-wide listener singleton.
    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    /// Last error observed by the shared updater, if any (additive
    /// pollable diagnostic; see `source::updater::SharedUpdater`).
    pub fn last_updater_error(&self) -> Option<String> {
        self.updater.last_error()
    }

    fn default_output_device_name() -> Option<String> {
        use cpal::traits::{DeviceTrait, HostTrait};
        let host = cpal::default_host();
        host.default_output_device().and_then(|d| d.name().ok())
    }

    /// Whether `name` matches an enumerated output device on the host.
    /// `CannotOpenDevice` fires when a caller names a device that isn't in
    /// this list. Devices with unreadable names are treated as absent.
    fn output_device_exists(name: &str) -> bool {
        use cpal::traits::{DeviceTrait, HostTrait};
        let host = cpal::default_host();
        match host.output_devices() {
            Ok(mut devices) => devices.any(|d| d.name().map(|n| n == name).unwrap_or(false)),
            Err(_) => false,
        }
    }

    pub(crate) fn device(&self) -> DeviceGuard<'_> {
        DeviceGuard {
            guard: self.device.lock(),
        }
    }
}

/// Scoped RAII acquisition of the device mutex. Every device-touching call
/// goes through `Engine::device()` to get one of these; the guard is the
/// only way to reach `DeviceState`, so "forgot to take the lock" cannot
/// happen. There is no separate "read the error register" step because in
/// this port every device operation already returns its own `Result`
/// directly rather than requiring a side-channel fetch (see SPEC_FULL.md §9).
pub(crate) struct DeviceGuard<'a> {
    guard: parking_lot::MutexGuard<'a, DeviceState>,
}

impl<'a> std::ops::Deref for DeviceGuard<'a> {
    type Target = DeviceState;
    fn deref(&self) -> &DeviceState {
        &self.guard
    }
}

impl<'a> std::ops::DerefMut for DeviceGuard<'a> {
    fn deref_mut(&mut self) -> &mut DeviceState {
        &mut self.guard
    }
}

impl DeviceState {
    pub(crate) fn alloc_buffer(&mut self) -> u32 {
        let id = self.alloc_id();
        self.buffers.insert(
            id,
            BufferRecord {
                attr: RawPcmAttr::default(),
                size: 0,
            },
        );
        id
    }

    pub(crate) fn free_buffer(&mut self, id: u32) {
        self.buffers.remove(&id);
    }

    pub(crate) fn alloc_effect_slot(&mut self) -> u32 {
        let id = self.alloc_id();
        self.effect_slots.insert(
            id,
            EffectSlotRecord {
                bound_effect_id: None,
                gain: 1.0,
                auto_adjust: true,
            },
        );
        id
    }

    pub(crate) fn alloc_source(&mut self) -> Result<u32> {
        if self.sources.len() >= MAX_SOURCES {
            return Err(SealError::CannotAllocMem);
        }
        let id = self.alloc_id();
        self.sources.insert(
            id,
            SourceDeviceRecord {
                state: DeviceSourceState::Initial,
                looping: false,
                static_buffer: None,
                queue: VecDeque::new(),
                play_started_at: None,
                elapsed_before_pause: Duration::ZERO,
            },
        );
        Ok(id)
    }

    pub(crate) fn free_source(&mut self, id: u32) {
        self.sources.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn alloc_ids_are_unique() {
        let device = DeviceState::new();
        let a = device.alloc_id();
        let b = device.alloc_id();
        assert_ne!(a, b);
    }

    #[test]
    fn effects_per_source_matches_max_auxiliary_sends() {
        assert_eq!(EFFECTS_PER_SOURCE, 4);
    }

    #[test]
    fn alloc_source_fails_once_the_cap_is_reached() {
        let mut device = DeviceState::new();
        for _ in 0..MAX_SOURCES {
            device.alloc_source().unwrap();
        }
        assert!(matches!(device.alloc_source(), Err(SealError::CannotAllocMem)));
    }

    #[test]
    fn bogus_device_name_is_never_reported_present() {
        // A pure, deterministic check of the helper `startup` consults for
        // `CannotOpenDevice`; exercising the full `startup` path isn't
        // possible here since `ENGINE` is a process-wide `OnceLock` that
        // another test in this binary may have already set.
        assert!(!Engine::output_device_exists("definitely-not-a-real-device-seal-test"));
    }

    #[test]
    fn startup_twice_in_process_is_rejected() {
        // The global OnceLock is process-wide, so only the first call in the
        // whole test binary actually starts up; this test only asserts the
        // *shape* of the re-entrancy guard (a second concurrent attempt must
        // not silently replace the engine), exercised via the OnceLock race
        // path rather than calling Engine::startup twice in-process.
        let _ = Engine::startup(EngineConfig::default());
        let second = Engine::startup(EngineConfig::default());
        assert!(second.is_err());
    }
}
