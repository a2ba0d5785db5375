//! Dumbo - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Simulation (camera scroll, background recycling, spawning, contacts)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Scene dimensions (points). The scene origin is at its center.
    pub const SCENE_WIDTH: f32 = 1920.0;
    pub const SCENE_HEIGHT: f32 = 1080.0;

    /// Camera scroll speed (points per second)
    pub const CAMERA_SPEED: f32 = 150.0;

    /// Longest frame the simulation will take in one tick; a host that was
    /// suspended resumes instead of replaying the gap
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum spawns per tick to prevent a spawn backlog
    pub const MAX_SPAWNS_PER_TICK: usize = 8;

    /// Widest supported aspect ratio for a regular display
    pub const ASPECT_RATIO_DEFAULT: f32 = 16.0 / 9.0;
    /// Widest supported aspect ratio for notched displays
    pub const ASPECT_RATIO_NOTCHED: f32 = 2.16;

    /// Background tile size; three of them cover the scroll window
    pub const BG_TILE_WIDTH: f32 = 2048.0;
    pub const BG_TILE_HEIGHT: f32 = 1536.0;
    pub const BG_TILE_COUNT: usize = 3;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 160.0;
    pub const PLAYER_HEIGHT: f32 = 120.0;

    /// Obstacle sprite size
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    pub const OBSTACLE_HEIGHT: f32 = 100.0;
    pub const OBSTACLE_MASS: f32 = 1.0;

    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 1.0;

    /// Upward float force, applied for `FLOAT_PHASE_SECS`
    pub const FLOAT_FORCE_UP: f32 = 10.0;
    /// Downward float force, applied for `FLOAT_PHASE_SECS`
    pub const FLOAT_FORCE_DOWN: f32 = 20.0;
    pub const FLOAT_PHASE_SECS: f32 = 1.0;

    /// Draw order
    pub const BG_Z: i32 = -1;
    pub const OBSTACLE_Z: i32 = 0;
    pub const PLAYER_Z: i32 = 5;
}

/// Collision category bits
pub mod category {
    pub const PLAYER: u32 = 1 << 0;
    pub const OBSTACLE: u32 = 1 << 1;
}
