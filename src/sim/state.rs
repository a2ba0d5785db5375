//! Game state and core simulation types
//!
//! Everything a host needs to snapshot or replay a run lives here.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner::Spawner;
use crate::category;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Physics body flags for contact filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Category this body belongs to
    pub category: u32,
    /// Categories that raise a contact event with this body
    pub contact_test_mask: u32,
}

impl Body {
    pub fn player() -> Self {
        Self {
            category: category::PLAYER,
            contact_test_mask: category::OBSTACLE,
        }
    }

    pub fn obstacle() -> Self {
        Self {
            category: category::OBSTACLE,
            contact_test_mask: category::PLAYER,
        }
    }

    /// Whether a contact between `self` and `other` should be reported
    pub fn tests_contact_with(&self, other: &Body) -> bool {
        self.contact_test_mask & other.category != 0
            || other.contact_test_mask & self.category != 0
    }
}

/// The scrolling camera. `pos` is the center of the view in world space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    /// Visible area in world units (the scene size)
    pub view_size: Vec2,
}

impl Camera {
    pub fn new(view_size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            view_size,
        }
    }

    pub fn view_rect(&self) -> Rect {
        Rect::new(self.pos, self.view_size)
    }

    #[inline]
    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.view_size.x / 2.0
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.view_size.x / 2.0
    }

    /// Convert a view-space point (origin top-left, y down, in `viewport`
    /// pixels) to world space. The scene is stretched to fill the viewport.
    pub fn view_to_world(&self, point: Vec2, viewport: Vec2) -> Vec2 {
        let scale = self.view_size / viewport;
        let local = Vec2::new(
            point.x * scale.x - self.view_size.x / 2.0,
            self.view_size.y / 2.0 - point.y * scale.y,
        );
        self.pos + local
    }
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub body: Body,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// One of the recycled background tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundTile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl BackgroundTile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A floating obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub mass: f32,
    /// Seconds since spawn; drives the float cycle
    pub age: f32,
    pub body: Body,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size: tuning.obstacle_size(),
            mass: tuning.obstacle_mass,
            age: 0.0,
            body: Body::obstacle(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Force of the float cycle at the current age: up for one phase, down
    /// for the next, forever.
    pub fn float_force(&self, tuning: &Tuning) -> Vec2 {
        let phase = (self.age / tuning.float_phase_secs).floor() as u64;
        if phase % 2 == 0 {
            Vec2::new(0.0, tuning.float_force_up)
        } else {
            Vec2::new(0.0, -tuning.float_force_down)
        }
    }

    /// Apply `force` for `dt` seconds (semi-implicit Euler) and age the body
    pub fn integrate(&mut self, force: Vec2, dt: f32) {
        self.vel += force / self.mass * dt;
        self.pos += self.vel * dt;
        self.age += dt;
    }
}

/// Variable-timestep frame clock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    /// Absolute time of the previous tick
    pub last_update_time: Option<f64>,
    /// Delta computed by the most recent tick
    pub dt: f32,
}

impl FrameClock {
    /// Record `current_time` and return the delta since the previous call,
    /// clamped to `max_dt`. The first call yields zero, as does a clock that
    /// went backwards.
    pub fn advance(&mut self, current_time: f64, max_dt: f32) -> f32 {
        self.dt = match self.last_update_time {
            Some(last) => ((current_time - last) as f32).clamp(0.0, max_dt),
            None => 0.0,
        };
        self.last_update_time = Some(current_time);
        self.dt
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { id: u32, pos: Vec2 },
    TileRecycled { id: u32, from_x: f32, to_x: f32 },
    /// Obstacle removed by a player contact
    ObstacleHit { id: u32 },
    /// Obstacle removed after scrolling behind the camera
    ObstacleCulled { id: u32 },
}

/// Node kind for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Background,
    Obstacle,
    Player,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Background => "BG",
            NodeKind::Obstacle => "Obstacle",
            NodeKind::Player => "Player",
        }
    }

    pub fn z(&self) -> i32 {
        match self {
            NodeKind::Background => BG_Z,
            NodeKind::Obstacle => OBSTACLE_Z,
            NodeKind::Player => PLAYER_Z,
        }
    }
}

/// Draw list entry handed to the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: u32,
    pub kind: NodeKind,
    pub rect: Rect,
    pub z: i32,
}

impl Sprite {
    fn new(id: u32, kind: NodeKind, rect: Rect) -> Self {
        Self {
            id,
            kind,
            rect,
            z: kind.z(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Spawn RNG, seeded from `seed`
    pub rng: Pcg32,
    pub clock: FrameClock,
    /// Simulated seconds since the first tick
    pub elapsed: f64,
    pub camera: Camera,
    pub player: Player,
    /// Always exactly `BG_TILE_COUNT` tiles
    pub background: Vec<BackgroundTile>,
    /// Live obstacles, in spawn (= id) order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    /// Last touch location in world space
    pub touch_location: Option<Vec2>,
    /// Body pairs overlapping at the end of the previous tick
    pub active_contacts: BTreeSet<(u32, u32)>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new scene with background, player, camera and a running spawner
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::default(),
            elapsed: 0.0,
            camera: Camera::new(tuning.scene_size()),
            player: Player {
                id: 0,
                pos: Vec2::ZERO,
                size: tuning.player_size(),
                body: Body::player(),
            },
            background: Vec::with_capacity(BG_TILE_COUNT),
            obstacles: Vec::new(),
            spawner: Spawner::new(tuning.spawn_interval),
            touch_location: None,
            active_contacts: BTreeSet::new(),
            next_id: 1,
            tuning,
        };

        state.create_background();
        state.create_player();
        log::debug!(
            "Scene created: seed={} camera={:?} player={:?}",
            seed,
            state.camera.pos,
            state.player.pos
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn create_background(&mut self) {
        let size = self.tuning.bg_tile_size();
        for i in 0..BG_TILE_COUNT {
            let id = self.next_entity_id();
            self.background.push(BackgroundTile {
                id,
                pos: Vec2::new(i as f32 * size.x, 0.0),
                size,
            });
        }
    }

    fn create_player(&mut self) {
        self.player.id = self.next_entity_id();
        self.player.pos = Vec2::new(-self.tuning.scene_width / 3.0, 0.0);
    }

    /// Resume the repeating spawn action; spawns on the next tick
    pub fn start_spawning(&mut self) {
        self.spawner.start();
    }

    /// Cancel the repeating spawn action
    pub fn stop_spawning(&mut self) {
        self.spawner.stop();
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Remove an obstacle by id. Returns false if it was already gone.
    pub fn remove_obstacle(&mut self, id: u32) -> bool {
        match self.obstacles.iter().position(|o| o.id == id) {
            Some(index) => {
                self.obstacles.remove(index);
                true
            }
            None => false,
        }
    }

    /// Every node, ordered back to front (by z, then id)
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(self.background.len() + self.obstacles.len() + 1);
        sprites.extend(
            self.background
                .iter()
                .map(|t| Sprite::new(t.id, NodeKind::Background, t.rect())),
        );
        sprites.extend(
            self.obstacles
                .iter()
                .map(|o| Sprite::new(o.id, NodeKind::Obstacle, o.rect())),
        );
        sprites.push(Sprite::new(
            self.player.id,
            NodeKind::Player,
            self.player.rect(),
        ));
        sprites.sort_by_key(|s| (s.z, s.id));
        sprites
    }
}
