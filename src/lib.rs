//! A 3D spatial audio engine core.
//!
//! Sources emit audio drawn from a static [`buf::Buffer`] or a decoded
//! [`stream::Stream`], are positioned and filtered relative to the
//! [`listener::Listener`] singleton, and may feed an [`effect::slot::EffectSlot`]
//! carrying a [`effect::Reverb`]. Playback, decoding, and real-time mixing to a
//! physical device are out of scope — this crate models the object graph,
//! state machine, and streaming queue bookkeeping an audio mixer would sit
//! behind.
//!
//! Start with [`engine::Engine::startup`].

pub mod buf;
pub mod config;
pub mod decoder;
pub mod effect;
pub mod engine;
pub mod error;
pub mod fmt;
pub mod listener;
pub mod raw;
pub mod source;
pub mod stream;

pub use engine::Engine;
pub use error::{Result, SealError};
pub use listener::Listener;
pub use source::Source;
