//! Blob Volley headless demo driver
//!
//! Runs the simulation loop the simplest correct way: process input, run
//! at most one due tick, log, all on one thread against a monotonic
//! clock. Dropped ticks are acceptable; there is no catch-up. The serve
//! countdown advances once per elapsed real-time second, independent of
//! the tick rate.

use std::time::{Duration, Instant};

use blob_volley::consts::SIM_DT;
use blob_volley::sim::{BlobInput, GameEvent, SimConfig, Simulation, TickInput, tick};

/// First player to reach this many points ends the demo
const TARGET_POINTS: u32 = 5;

fn main() {
    env_logger::init();

    let mut sim = Simulation::new(SimConfig::default());
    log::info!("blob-volley demo starting");

    let tick_interval = Duration::from_secs_f32(SIM_DT);
    let start = Instant::now();
    let mut next_tick = Instant::now();
    let mut next_second = Instant::now() + Duration::from_secs(1);

    loop {
        let now = Instant::now();

        if now >= next_second {
            sim.tick_countdown();
            next_second += Duration::from_secs(1);
        }

        if now >= next_tick {
            let input = scripted_input(sim.tick_count());
            tick(&mut sim, &input);
            next_tick = now + tick_interval;

            for event in sim.events() {
                match *event {
                    GameEvent::BlobHit { blob } => log::info!("*plop* blob {blob}"),
                    GameEvent::NetHit => log::info!("*twang*"),
                    GameEvent::PointScored { player } => {
                        let [p1, p2] = sim.scores();
                        log::info!("point for player {}: {p1} | {p2}", player + 1);
                    }
                }
            }
        }

        if sim.scores().iter().any(|&s| s >= TARGET_POINTS) {
            break;
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    let [p1, p2] = sim.scores();
    log::info!("demo over after {:.1?}: {p1} | {p2}", start.elapsed());

    match serde_json::to_string_pretty(&sim) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("state dump failed: {err}"),
    }
}

/// A fixed, non-reactive input pattern so the demo shows some movement:
/// both blobs shuffle in, shuffle out, hop once, then hold still.
fn scripted_input(tick_count: u64) -> TickInput {
    let phase = tick_count % 360;
    let drive = if phase < 90 {
        Some(2.0)
    } else if phase < 180 {
        Some(-2.0)
    } else {
        None
    };

    TickInput {
        blobs: [
            BlobInput {
                drive,
                jump: phase == 200,
            },
            BlobInput {
                drive: drive.map(|d| -d),
                jump: phase == 260,
            },
        ],
    }
}
