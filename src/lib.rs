//! Varnamala — a terminal arcade game for learning Devanagari letters.
//!
//! Guide the sprite through scrolling letter tiles and collect them in the
//! order they appear in the target word. Word lists and pronunciation clips
//! come from an external word service; this crate only consumes it.
//!
//! This module exposes the game logic for testing and external use.

pub mod audio;
pub mod build_info;
pub mod constants;
pub mod core;
pub mod source;
pub mod ui;
pub mod words;

pub use constants::FRAME_INTERVAL_MS;
pub use core::{GameConfig, Phase, RoundResult, TickEvent, WordGame};
pub use words::WordEntry;
