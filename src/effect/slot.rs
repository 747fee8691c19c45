//! Effect slot: a container binding one effect so that sources can feed it
//! (§4.5).

use crate::effect::Reverb;
use crate::engine::Engine;
use crate::error::{Result, SealError};

/// `{ device_id, bound_effect: optional Effect, gain, auto_adjust: bool }`.
/// Binding an effect overwrites any previous binding; multiple sources may
/// feed the same slot.
pub struct EffectSlot {
    id: u32,
}

impl EffectSlot {
    /// `init`: allocate a device auxiliary-effect-slot id.
    pub fn init(engine: &'static Engine) -> Self {
        let id = engine.device().alloc_effect_slot();
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// `set_effect(slot, effect?)`: binds or unbinds (`None` → unbound).
    pub fn set_effect(&self, engine: &'static Engine, effect: Option<&Reverb>) -> Result<()> {
        let mut device = engine.device();
        let record = device
            .effect_slots
            .get_mut(&self.id)
            .ok_or(SealError::BadObject)?;
        record.bound_effect_id = effect.map(|e| e.id());
        Ok(())
    }

    /// `set_gain(slot, gain)`: output level [0,1].
    pub fn set_gain(&self, engine: &'static Engine, gain: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&gain) {
            return Err(SealError::BadValue("effect slot gain must be in [0,1]".into()));
        }
        let mut device = engine.device();
        let record = device
            .effect_slots
            .get_mut(&self.id)
            .ok_or(SealError::BadObject)?;
        record.gain = gain;
        Ok(())
    }

    pub fn gain(&self, engine: &'static Engine) -> Result<f32> {
        let device = engine.device();
        device
            .effect_slots
            .get(&self.id)
            .map(|r| r.gain)
            .ok_or(SealError::BadObject)
    }

    /// `set_auto_adjust(slot, flag)`: whether the device auto-corrects for
    /// source/listener geometry.
    pub fn set_auto_adjust(&self, engine: &'static Engine, flag: bool) -> Result<()> {
        let mut device = engine.device();
        let record = device
            .effect_slots
            .get_mut(&self.id)
            .ok_or(SealError::BadObject)?;
        record.auto_adjust = flag;
        Ok(())
    }

    pub fn is_auto_adjust(&self, engine: &'static Engine) -> Result<bool> {
        let device = engine.device();
        device
            .effect_slots
            .get(&self.id)
            .map(|r| r.auto_adjust)
            .ok_or(SealError::BadObject)
    }

    pub fn destroy(self, engine: &'static Engine) {
        engine.device().effect_slots.remove(&self.id);
    }
}
