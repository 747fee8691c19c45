//! Effect (reverb): a device-side effect object with 13 reverb parameters,
//! loadable from a preset (§3, §6).

pub mod presets;
pub mod slot;

use crate::engine::Engine;
use crate::error::{Result, SealError};

pub use presets::ReverbPreset;

/// The 13 EAX/EFX-style reverb parameters, with the ranges the vendor
/// enforces (`include/seal/rvb.h`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbParams {
    pub density: f32,
    pub diffusion: f32,
    pub gain: f32,
    pub hfgain: f32,
    pub decay_time: f32,
    pub hfdecay_ratio: f32,
    pub reflections_gain: f32,
    pub reflections_delay: f32,
    pub late_gain: f32,
    pub late_delay: f32,
    pub air_absorption_hfgain: f32,
    pub room_rolloff_factor: f32,
    pub hfdecay_limited: bool,
}

impl Default for ReverbParams {
    fn default() -> Self {
        presets::table(ReverbPreset::Generic)
    }
}

/// A device-side reverb effect object.
pub struct Reverb {
    id: u32,
    params: ReverbParams,
}

macro_rules! range_setter {
    ($name:ident, $field:ident, $min:expr, $max:expr) => {
        pub fn $name(&mut self, value: f32) -> Result<()> {
            if !(($min)..=($max)).contains(&value) {
                return Err(SealError::BadValue(format!(
                    "{} must be in [{}, {}]",
                    stringify!($field),
                    $min,
                    $max
                )));
            }
            self.params.$field = value;
            Ok(())
        }
    };
}

impl Reverb {
    /// `init`: allocate a device effect id with the `GENERIC` preset loaded.
    pub fn init(engine: &'static Engine) -> Self {
        let id = engine.device().alloc_id();
        Self {
            id,
            params: ReverbParams::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn params(&self) -> ReverbParams {
        self.params
    }

    /// Loading a preset replaces all 13 parameters atomically.
    pub fn load_preset(&mut self, preset: ReverbPreset) {
        self.params = presets::table(preset);
    }

    range_setter!(set_density, density, 0.0, 1.0);
    range_setter!(set_diffusion, diffusion, 0.0, 1.0);
    range_setter!(set_gain, gain, 0.0, 1.0);
    range_setter!(set_hfgain, hfgain, 0.0, 1.0);
    range_setter!(set_decay_time, decay_time, 0.1, 20.0);
    range_setter!(set_hfdecay_ratio, hfdecay_ratio, 0.1, 20.0);
    range_setter!(set_reflections_gain, reflections_gain, 0.0, 3.16);
    range_setter!(set_reflections_delay, reflections_delay, 0.0, 0.3);
    range_setter!(set_late_gain, late_gain, 0.0, 10.0);
    range_setter!(set_late_delay, late_delay, 0.0, 0.1);
    range_setter!(set_air_absorption_hfgain, air_absorption_hfgain, 0.892, 1.0);
    range_setter!(set_room_rolloff_factor, room_rolloff_factor, 0.0, 10.0);

    pub fn set_hfdecay_limited(&mut self, value: bool) {
        self.params.hfdecay_limited = value;
    }
}
