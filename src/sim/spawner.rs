//! Timed obstacle spawning
//!
//! A repeating "spawn, then wait one interval" action. Obstacles appear just
//! past the right edge of the view at a random height inside the playable band.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GameState, Obstacle};
use crate::consts::MAX_SPAWNS_PER_TICK;
use crate::tuning::Tuning;

/// Repeating spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns
    pub interval: f32,
    /// Seconds until the next spawn; `None` until the action first runs
    until_next: Option<f32>,
    running: bool,
    /// Total obstacles spawned by this timer
    pub spawned: u64,
}

impl Spawner {
    /// A running spawner whose first spawn is due immediately
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            until_next: None,
            running: true,
            spawned: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Restart the action. A restart spawns immediately, like a fresh run.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.until_next = None;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the timer by `dt`. Returns one entry per spawn that fell due,
    /// oldest first: how many seconds before the end of the step it was due.
    ///
    /// At most `MAX_SPAWNS_PER_TICK` spawns are returned; any further backlog
    /// is dropped while keeping the timer's phase.
    pub fn advance(&mut self, dt: f32) -> Vec<f32> {
        let mut lags = Vec::new();
        if !self.running || !(self.interval > 0.0) {
            return lags;
        }

        // Time into this step at which the next spawn falls due. A freshly
        // started action spawns at the end of the step; time spent stopped
        // is ignored.
        let mut next_at = match self.until_next {
            Some(until_next) => until_next,
            None => dt,
        };
        while next_at <= dt && lags.len() < MAX_SPAWNS_PER_TICK {
            lags.push(dt - next_at);
            next_at += self.interval;
        }
        let until_next = if next_at <= dt {
            let skipped = dt - next_at;
            log::warn!("Spawn backlog of {:.1}s dropped", skipped);
            self.interval - skipped.rem_euclid(self.interval)
        } else {
            next_at - dt
        };

        self.until_next = Some(until_next);
        self.spawned += lags.len() as u64;
        lags
    }
}

/// The band of the scene guaranteed visible on the widest supported display.
/// Full scene width, vertically centered on the scene origin.
pub fn playable_rect(tuning: &Tuning) -> Rect {
    let playable_height = (tuning.scene_width / tuning.max_aspect_ratio).min(tuning.scene_height);
    let margin = (tuning.scene_height - playable_height) / 2.0;
    Rect::from_min_size(
        Vec2::new(-tuning.scene_width / 2.0, -tuning.scene_height / 2.0 + margin),
        Vec2::new(tuning.scene_width, playable_height),
    )
}

/// Inclusive range of obstacle center heights. The bottom margin is half an
/// obstacle, the top margin two obstacles. Collapses to the lower bound when
/// the band is too small for an obstacle.
pub fn spawn_band(tuning: &Tuning) -> (f32, f32) {
    let playable = playable_rect(tuning);
    let min_y = playable.min_y() + tuning.obstacle_height / 2.0;
    let max_y = playable.max_y() - tuning.obstacle_height * 2.0;
    (min_y, max_y.max(min_y))
}

/// Horizontal spawn position: one screen width plus one obstacle width ahead
/// of the camera's left edge.
pub fn spawn_x(state: &GameState) -> f32 {
    state.camera.left_edge() + state.tuning.scene_width + state.tuning.obstacle_width
}

/// Create one obstacle that fell due `lag` seconds ago and return its id and
/// spawn position. The spawn position is taken where the camera was at that
/// moment, and the obstacle has since floated for `lag` seconds.
pub fn spawn_obstacle(state: &mut GameState, lag: f32) -> (u32, Vec2) {
    let (min_y, max_y) = spawn_band(&state.tuning);
    let y = if max_y > min_y {
        state.rng.random_range(min_y..=max_y)
    } else {
        min_y
    };
    let pos = Vec2::new(spawn_x(state) - state.tuning.camera_speed * lag, y);

    let id = state.next_entity_id();
    let mut obstacle = Obstacle::new(id, pos, &state.tuning);
    if lag > 0.0 {
        let force = obstacle.float_force(&state.tuning);
        obstacle.integrate(force, lag);
    }
    state.obstacles.push(obstacle);

    log::debug!("Spawned obstacle {} at ({:.1}, {:.1})", id, pos.x, pos.y);
    (id, pos)
}
