//! Terminal rendering. Scenes draw from the read-only [`Snapshot`] produced
//! by the core; nothing in here touches game state.
//!
//! [`Snapshot`]: crate::core::types::Snapshot

pub mod game_scene;
pub mod menu_scene;
