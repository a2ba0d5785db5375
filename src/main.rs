//! Dumbo headless runner
//!
//! Drives the simulation at 60 Hz with a scripted touch pattern and logs what
//! happened. Usage: `dumbo [SECONDS] [TUNING_JSON]`

use glam::Vec2;

use dumbo::Tuning;
use dumbo::sim::{GameEvent, GameState, TickInput, TouchEvent, playable_rect, tick};

const FRAME_RATE: f64 = 60.0;
const DEFAULT_SECONDS: f64 = 30.0;

#[derive(Debug, Default)]
struct Summary {
    spawned: usize,
    hit: usize,
    culled: usize,
    recycled: usize,
}

impl Summary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ObstacleSpawned { .. } => self.spawned += 1,
                GameEvent::ObstacleHit { .. } => self.hit += 1,
                GameEvent::ObstacleCulled { .. } => self.culled += 1,
                GameEvent::TileRecycled { .. } => self.recycled += 1,
            }
        }
    }
}

fn load_tuning(path: Option<String>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(&path) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::error!("{}; using default tuning", e);
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seconds = match args.next().map(|s| s.parse::<f64>()) {
        Some(Ok(s)) if s > 0.0 => s,
        Some(_) => {
            log::warn!("Invalid duration, running for {} seconds", DEFAULT_SECONDS);
            DEFAULT_SECONDS
        }
        None => DEFAULT_SECONDS,
    };
    let tuning = load_tuning(args.next());

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Dumbo (headless) starting, seed {}", seed);

    // Sweep the finger up and down the playable band, two seconds per sweep
    let band = playable_rect(&tuning);
    let mut state = match GameState::new(seed, tuning) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let mut summary = Summary::default();

    let frames = (seconds * FRAME_RATE).round() as u64;
    for frame in 0..frames {
        let t = frame as f64 / FRAME_RATE;
        let finger_y = band.center.y + (t * std::f64::consts::PI).sin() as f32 * band.height() / 2.0;
        let touch = if frame == 0 {
            TouchEvent::Began(Vec2::new(0.0, finger_y))
        } else {
            TouchEvent::Moved(Vec2::new(0.0, finger_y))
        };

        let events = tick(&mut state, &TickInput::at(t).with_touch(touch));
        summary.record(&events);
    }

    log::info!(
        "Ran {:.1}s: camera at x={:.1}, {} spawned, {} hit, {} culled, {} still alive, {} tile recycles",
        state.elapsed,
        state.camera.pos.x,
        summary.spawned,
        summary.hit,
        summary.culled,
        state.obstacles.len(),
        summary.recycled
    );
}
