//! Data-driven game balance
//!
//! Every value has a default in [`crate::consts`]; a JSON file only needs to
//! name the fields it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scene size in points
    pub scene_width: f32,
    pub scene_height: f32,
    /// Camera (and player) scroll speed, points per second
    pub camera_speed: f32,
    /// Widest aspect ratio the playable band must fit
    pub max_aspect_ratio: f32,
    /// Frame deltas are clamped to this many seconds
    pub max_frame_dt: f32,

    pub bg_tile_width: f32,
    pub bg_tile_height: f32,

    pub player_width: f32,
    pub player_height: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_mass: f32,

    /// Seconds between spawns
    pub spawn_interval: f32,
    pub float_force_up: f32,
    pub float_force_down: f32,
    /// Duration of each half of the float cycle
    pub float_phase_secs: f32,

    /// Remove obstacles that scrolled behind the camera without being hit
    pub cull_passed_obstacles: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            camera_speed: CAMERA_SPEED,
            max_aspect_ratio: ASPECT_RATIO_DEFAULT,
            max_frame_dt: MAX_FRAME_DT,

            bg_tile_width: BG_TILE_WIDTH,
            bg_tile_height: BG_TILE_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_mass: OBSTACLE_MASS,

            spawn_interval: SPAWN_INTERVAL,
            float_force_up: FLOAT_FORCE_UP,
            float_force_down: FLOAT_FORCE_DOWN,
            float_phase_secs: FLOAT_PHASE_SECS,

            cull_passed_obstacles: false,
        }
    }
}

impl Tuning {
    /// Tuning for displays wider than 16:9
    pub fn notched() -> Self {
        Self {
            max_aspect_ratio: ASPECT_RATIO_NOTCHED,
            ..Self::default()
        }
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps or non-finite keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("scene_width", self.scene_width),
            ("scene_height", self.scene_height),
            ("max_aspect_ratio", self.max_aspect_ratio),
            ("max_frame_dt", self.max_frame_dt),
            ("bg_tile_width", self.bg_tile_width),
            ("bg_tile_height", self.bg_tile_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("obstacle_mass", self.obstacle_mass),
            ("spawn_interval", self.spawn_interval),
            ("float_phase_secs", self.float_phase_secs),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("camera_speed", self.camera_speed),
            ("float_force_up", self.float_force_up),
            ("float_force_down", self.float_force_down),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn scene_size(&self) -> Vec2 {
        Vec2::new(self.scene_width, self.scene_height)
    }

    #[inline]
    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    #[inline]
    pub fn obstacle_size(&self) -> Vec2 {
        Vec2::new(self.obstacle_width, self.obstacle_height)
    }

    #[inline]
    pub fn bg_tile_size(&self) -> Vec2 {
        Vec2::new(self.bg_tile_width, self.bg_tile_height)
    }
}
