//! Deterministic reply-text classification for avatar animation.
//!
//! Maps a short natural-language reply to presentation cues (facial
//! expression, gesture, intensity, tempo) with ordered keyword
//! heuristics, and normalizes Signal-shaped values coming from
//! untrusted producers. Pure, synchronous, stateless: safe to call
//! from any number of threads with no setup.

pub mod classifier;
pub mod message;
pub mod sanitize;
pub mod signal;

pub use classifier::classify;
pub use message::Message;
pub use sanitize::{sanitize, sanitize_value, RawSignal};
pub use signal::{clamp01, Signal};
