//! Camera scrolling and background recycling

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Advance the camera by `speed * dt` along x
pub fn move_camera(state: &mut GameState, dt: f32) {
    state.camera.pos += Vec2::new(state.tuning.camera_speed * dt, 0.0);
}

/// Keep the player level with the camera
pub fn move_player(state: &mut GameState, dt: f32) {
    state.player.pos.x += state.tuning.camera_speed * dt;
}

/// Move every tile that is fully behind the camera's left edge to the front
/// of the row. The leftmost tile is always the one recycled, so the row stays
/// contiguous even when a long frame passes several tiles at once.
pub fn recycle_background(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let left_edge = state.camera.left_edge();

    loop {
        let Some(leftmost) = (0..state.background.len())
            .min_by(|&a, &b| state.background[a].pos.x.total_cmp(&state.background[b].pos.x))
        else {
            return;
        };
        let rightmost_x = state
            .background
            .iter()
            .map(|t| t.pos.x)
            .fold(f32::NEG_INFINITY, f32::max);

        let tile = &mut state.background[leftmost];
        if tile.rect().max_x() >= left_edge {
            return;
        }

        let from_x = tile.pos.x;
        tile.pos.x = rightmost_x + tile.size.x;
        log::debug!("Recycled background tile {}: {:.1} -> {:.1}", tile.id, from_x, tile.pos.x);
        events.push(GameEvent::TileRecycled {
            id: tile.id,
            from_x,
            to_x: tile.pos.x,
        });
    }
}
