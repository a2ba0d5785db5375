//! Simulation module
//!
//! All gameplay logic lives here. It has no rendering or platform
//! dependencies and is deterministic for a given seed and input sequence:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Time only enters through `TickInput::current_time`

pub mod collision;
pub mod rect;
pub mod scroll;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Contact, ContactBody, detect_contacts, resolve_contact};
pub use rect::Rect;
pub use scroll::{move_camera, move_player, recycle_background};
pub use spawner::{Spawner, playable_rect, spawn_band, spawn_obstacle, spawn_x};
pub use state::{
    BackgroundTile, Body, Camera, FrameClock, GameEvent, GameState, NodeKind, Obstacle, Player,
    Sprite,
};
pub use tick::{TickInput, TouchEvent, tick};
