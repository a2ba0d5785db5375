//! Per-frame update
//!
//! Variable timestep: each tick carries the host's absolute frame time and
//! the delta is taken from the previous tick.

use glam::Vec2;

use super::collision::{detect_contacts, resolve_contact};
use super::scroll::{move_camera, move_player, recycle_background};
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GameState};

/// A touch in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Began(Vec2),
    Moved(Vec2),
}

impl TouchEvent {
    pub fn location(&self) -> Vec2 {
        match *self {
            TouchEvent::Began(p) | TouchEvent::Moved(p) => p,
        }
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Absolute frame time in seconds
    pub current_time: f64,
    /// Touches delivered since the previous frame, oldest first
    pub touches: Vec<TouchEvent>,
}

impl TickInput {
    pub fn at(current_time: f64) -> Self {
        Self {
            current_time,
            touches: Vec::new(),
        }
    }

    pub fn with_touch(mut self, touch: TouchEvent) -> Self {
        self.touches.push(touch);
        self
    }
}

/// Snap the player's height to each touch in turn
fn apply_touches(state: &mut GameState, touches: &[TouchEvent]) {
    for touch in touches {
        let location = touch.location();
        state.touch_location = Some(location);
        state.player.pos.y = location.y;
    }
}

/// Integrate obstacle motion, then run the spawn action. Obstacles that fell
/// due part-way through the frame only float for the remainder of it.
fn run_actions(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let tuning = &state.tuning;
    for obstacle in &mut state.obstacles {
        let force = obstacle.float_force(tuning);
        obstacle.integrate(force, dt);
    }

    for lag in state.spawner.advance(dt) {
        let (id, pos) = spawn_obstacle(state, lag);
        events.push(GameEvent::ObstacleSpawned { id, pos });
    }
}

/// Drop obstacles that are entirely behind the camera
fn cull_passed_obstacles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let left_edge = state.camera.left_edge();
    state.obstacles.retain(|o| {
        let passed = o.rect().max_x() < left_edge;
        if passed {
            log::debug!("Culled obstacle {}", o.id);
            events.push(GameEvent::ObstacleCulled { id: o.id });
        }
        !passed
    });
}

/// Advance the game by one frame and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    apply_touches(state, &input.touches);

    let dt = state
        .clock
        .advance(input.current_time, state.tuning.max_frame_dt);
    state.elapsed += f64::from(dt);

    move_camera(state, dt);
    recycle_background(state, &mut events);
    move_player(state, dt);

    run_actions(state, dt, &mut events);

    for contact in detect_contacts(state) {
        if let Some(id) = resolve_contact(state, &contact) {
            events.push(GameEvent::ObstacleHit { id });
        }
    }

    if state.tuning.cull_passed_obstacles {
        cull_passed_obstacles(state, &mut events);
    }

    events
}
