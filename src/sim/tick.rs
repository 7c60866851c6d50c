//! Fixed timestep simulation tick
//!
//! One call advances the whole simulation by a single 60 Hz step:
//! queued input, ball kinematics, collision resolution, match state.
//! During the serve delay the tick is a no-op, so the frozen serve
//! snapshot is exactly what a renderer sees until play resumes.

use super::collision;
use super::config::SimConfig;
use super::geom::{FieldBounds, Rect, circle_vs_rect};
use super::kinematics::{apply_boundary_circle, apply_boundary_rect, apply_friction, apply_gravity};
use super::state::{Actor, GameEvent, MatchPhase, NUM_BLOBS, Simulation};

/// Input for one blob for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobInput {
    /// Horizontal drive in units/tick, clamped to ±`move_speed`. A
    /// digital pad drives the full speed, an analog stick a fraction.
    pub drive: Option<f32>,
    /// Jump, honored only when the blob is standing on the floor
    pub jump: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub blobs: [BlobInput; NUM_BLOBS],
}

/// Advance the simulation by one fixed timestep.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    sim.events.clear();

    // Serve delay: everything stays frozen until the countdown elapses
    if sim.phase() == MatchPhase::Serving {
        return;
    }

    apply_input(sim, input);

    // A point ends the moment the ball's lower edge would touch the
    // floor; the reset state is left untouched until the next live tick
    if let Some(scorer) = floor_contact(sim) {
        sim.end_point(scorer);
        sim.events.push(GameEvent::PointScored { player: scorer });
        return;
    }

    // Ball first, in fixed order: bounds, friction, gravity, then net
    let radius = sim.config.ball_radius;
    apply_boundary_circle(&mut sim.ball, radius, &sim.bounds, &sim.config);
    apply_friction(&mut sim.ball, &sim.bounds, &sim.config);
    apply_gravity(&mut sim.ball, &sim.bounds, &sim.config);

    if collision::resolve_ball_net(&mut sim.ball, radius, &sim.net).is_some() {
        sim.events.push(GameEvent::NetHit);
    }

    // Blobs by index: kinematics, net clamp, then the ball
    let size = sim.config.blob_size;
    for i in 0..NUM_BLOBS {
        let blob = &mut sim.blobs[i];
        apply_boundary_rect(blob, size, &sim.bounds, &sim.config);
        apply_friction(blob, &sim.bounds, &sim.config);
        apply_gravity(blob, &sim.bounds, &sim.config);
        collision::keep_blob_off_net(blob, size, &sim.net);

        let body = Rect {
            pos: sim.blobs[i].pos,
            size,
        };
        let mut contact = circle_vs_rect(sim.ball.pos, radius, &body);
        if contact.hit() && sim.match_state.may_hit(i, sim.config.max_consecutive_hits) {
            collision::resolve_ball_blob(&mut sim.ball, radius, sim.blobs[i].vel, &body, &mut contact);
            let streak = sim.match_state.register_hit(i);
            log::debug!("blob {i} played the ball (touch {streak})");
            sim.events.push(GameEvent::BlobHit { blob: i });
        }
        sim.contacts[i] = contact;
    }

    sim.tick_count += 1;
}

/// Apply queued input deltas to blob velocities at the start of the tick
fn apply_input(sim: &mut Simulation, input: &TickInput) {
    let max = sim.config.move_speed;
    for (blob, cmd) in sim.blobs.iter_mut().zip(&input.blobs) {
        if let Some(drive) = cmd.drive {
            blob.vel.x = drive.clamp(-max, max);
        }
        if cmd.jump && standing(blob, sim.config.blob_size.y, &sim.bounds, &sim.config) {
            blob.vel.y = -sim.config.jump_speed;
        }
    }
}

/// A blob can jump only when its feet are within `position_epsilon` of
/// the floor
fn standing(blob: &Actor, height: f32, bounds: &FieldBounds, config: &SimConfig) -> bool {
    bounds.max.y - blob.pos.y - height < config.position_epsilon
}

/// Projected floor test: when the ball's lower edge would cross the
/// floor this tick, the player on the other half of the field takes the
/// point.
fn floor_contact(sim: &Simulation) -> Option<usize> {
    let next_bottom = sim.ball.pos.y + sim.ball.vel.y + sim.config.ball_radius;
    if next_bottom < sim.bounds.max.y {
        return None;
    }
    Some(if sim.ball.pos.x < sim.net.min_x() { 1 } else { 0 })
}
