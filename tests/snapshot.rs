//! A snapshotted run continues exactly like the original

use dumbo::Tuning;
use dumbo::sim::{GameState, NodeKind, TickInput, TouchEvent, tick};
use glam::Vec2;

fn input(frame: u32) -> TickInput {
    let t = f64::from(frame) / 60.0;
    TickInput::at(t).with_touch(TouchEvent::Moved(Vec2::new(0.0, (t.sin() * 300.0) as f32)))
}

#[test]
fn snapshot_resumes_identically() {
    let mut original = GameState::new(2024, Tuning::default()).unwrap();
    for frame in 0..300 {
        tick(&mut original, &input(frame));
    }

    let json = serde_json::to_string(&original).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();

    for frame in 300..900 {
        let a = tick(&mut original, &input(frame));
        let b = tick(&mut restored, &input(frame));
        assert_eq!(a, b, "frame {frame}");
    }

    assert_eq!(original.camera.pos, restored.camera.pos);
    assert_eq!(original.player.pos, restored.player.pos);
    assert_eq!(original.spawner.spawned, restored.spawner.spawned);
    let ids = |s: &GameState| s.obstacles.iter().map(|o| o.id).collect::<Vec<_>>();
    assert_eq!(ids(&original), ids(&restored));
}

#[test]
fn draw_list_tracks_the_scene() {
    let mut state = GameState::new(7, Tuning::default()).unwrap();
    for frame in 0..120 {
        tick(&mut state, &input(frame));
    }

    let sprites = state.sprites();
    let count = |kind| sprites.iter().filter(|s| s.kind == kind).count();
    assert_eq!(count(NodeKind::Background), 3);
    assert_eq!(count(NodeKind::Player), 1);
    assert_eq!(count(NodeKind::Obstacle), state.obstacles.len());

    let player = sprites.last().unwrap();
    assert_eq!(player.name(), "Player");
    assert_eq!(player.rect.center, state.player.pos);
    assert!(state.camera.view_rect().contains_point(player.rect.center));
}
