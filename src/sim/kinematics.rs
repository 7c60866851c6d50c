//! Per-actor velocity integration
//!
//! Boundary bouncing, friction, and gravity, applied in that order each
//! tick. Velocities are in field units per tick; the integration step is
//! the boundary projection itself, so an actor ends `apply_boundary_*`
//! at its new position.

use glam::Vec2;

use super::config::SimConfig;
use super::geom::FieldBounds;
use super::state::Actor;
use crate::consts::TICK_RATE;

/// Project `pos + vel` and reflect any overstepped field bound back into
/// range by the amount of the overstep, negating the matching velocity
/// component. The floor keeps only `floor_restitution` of the vertical
/// speed; the other three edges are fully elastic.
pub fn apply_boundary_rect(actor: &mut Actor, size: Vec2, bounds: &FieldBounds, config: &SimConfig) {
    let (dx, dy) = (actor.vel.x, actor.vel.y);
    let mut next = actor.pos + actor.vel;

    if next.x + size.x >= bounds.max.x {
        next.x = bounds.max.x - (next.x + size.x - bounds.max.x) - size.x;
        actor.vel.x = -dx;
    }
    if next.x < bounds.min.x {
        next.x = bounds.min.x + (bounds.min.x - next.x);
        actor.vel.x = -dx;
    }
    if next.y + size.y >= bounds.max.y {
        next.y = bounds.max.y - (next.y + size.y - bounds.max.y) - size.y;
        actor.vel.y = -dy * config.floor_restitution;
    }
    if next.y < bounds.min.y {
        next.y = bounds.min.y + (bounds.min.y - next.y);
        actor.vel.y = -dy;
    }

    actor.pos = next;
    debug_assert!(actor.pos.is_finite() && actor.vel.is_finite());
}

/// Boundary projection for a circular actor: runs the rectangular check
/// on the circle's bounding square and re-centers the result.
pub fn apply_boundary_circle(
    actor: &mut Actor,
    radius: f32,
    bounds: &FieldBounds,
    config: &SimConfig,
) {
    let half = Vec2::splat(radius);
    actor.pos -= half;
    apply_boundary_rect(actor, half * 2.0, bounds, config);
    actor.pos += half;
}

/// Horizontal drag. Speeds below `speed_epsilon` snap to exactly zero so
/// a settling actor never decays forever; otherwise the velocity scales
/// by the air or ground factor, grounded meaning the vertical position is
/// within `position_epsilon` of the floor bound.
pub fn apply_friction(actor: &mut Actor, bounds: &FieldBounds, config: &SimConfig) {
    if actor.vel.x == 0.0 {
        return;
    }

    if actor.vel.x.abs() < config.speed_epsilon {
        log::trace!("dx {} below epsilon, settling to 0", actor.vel.x);
        actor.vel.x = 0.0;
    } else {
        let grounded = bounds.max.y - actor.pos.y < config.position_epsilon;
        let factor = if grounded {
            config.ground_friction
        } else {
            config.air_friction
        };
        actor.vel.x *= factor;
    }
}

/// Gravity with a rest state: an actor drifting down slowly within
/// `position_epsilon` of the floor is snapped onto it and held there;
/// anything else accumulates `gravity / TICK_RATE` per tick
/// (explicit Euler, no terminal velocity).
pub fn apply_gravity(actor: &mut Actor, bounds: &FieldBounds, config: &SimConfig) {
    let near_floor = bounds.max.y - actor.pos.y < config.position_epsilon;

    if actor.vel.y > 0.0 && actor.vel.y < config.speed_epsilon && near_floor {
        log::trace!("dy {} below epsilon near floor, coming to rest", actor.vel.y);
        actor.vel.y = 0.0;
        actor.pos.y = bounds.max.y;
    } else if actor.pos.y != bounds.max.y {
        actor.vel.y += config.gravity / TICK_RATE as f32;
    }
}
