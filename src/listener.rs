//! Listener: the process-wide singleton ear in the scene (§3, §4.1 Glossary).

use parking_lot::RwLock;

/// `{ gain, position, velocity, orientation=(at, up) }`.
///
/// Orientation vectors must be linearly independent; behaviour is undefined
/// otherwise (the original doesn't validate this either, so this port
/// doesn't invent a check that wasn't part of the contract).
pub struct Listener {
    state: RwLock<ListenerState>,
}

#[derive(Debug, Clone, Copy)]
struct ListenerState {
    gain: f32,
    position: [f32; 3],
    velocity: [f32; 3],
    at: [f32; 3],
    up: [f32; 3],
}

impl Default for ListenerState {
    fn default() -> Self {
        Self {
            gain: 1.0,
            position: [0.0; 3],
            velocity: [0.0; 3],
            at: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl Default for Listener {
    fn default() -> Self {
        Self {
            state: RwLock::new(ListenerState::default()),
        }
    }
}

impl Listener {
    pub fn gain(&self) -> f32 {
        self.state.read().gain
    }

    pub fn set_gain(&self, gain: f32) -> crate::error::Result<()> {
        if gain < 0.0 {
            return Err(crate::error::SealError::BadValue(
                "listener gain must be >= 0".into(),
            ));
        }
        self.state.write().gain = gain;
        Ok(())
    }

    pub fn position(&self) -> [f32; 3] {
        self.state.read().position
    }

    pub fn set_position(&self, position: [f32; 3]) {
        self.state.write().position = position;
    }

    pub fn velocity(&self) -> [f32; 3] {
        self.state.read().velocity
    }

    pub fn set_velocity(&self, velocity: [f32; 3]) {
        self.state.write().velocity = velocity;
    }

    pub fn orientation(&self) -> ([f32; 3], [f32; 3]) {
        let s = self.state.read();
        (s.at, s.up)
    }

    pub fn set_orientation(&self, at: [f32; 3], up: [f32; 3]) {
        let mut s = self.state.write();
        s.at = at;
        s.up = up;
    }
}
