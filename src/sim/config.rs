//! Simulation configuration
//!
//! Every tunable lives here, defaulting to the named constants, so field
//! geometry and physics can be adjusted without touching collision logic.
//! Collaborators supply these values once, before the first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{FieldBounds, Rect};
use crate::consts::*;

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Display/arena size the field is carved from
    pub display_size: Vec2,
    /// Margin kept clear on the left, top, and right edges
    pub edge_margin: f32,
    /// Margin kept clear below the floor bound
    pub floor_margin: f32,

    /// Blob bounding box (w, h)
    pub blob_size: Vec2,
    /// Ball radius
    pub ball_radius: f32,
    /// Net bounding box (w, h)
    pub net_size: Vec2,

    /// Horizontal inset of each blob's starting post
    pub blob_inset_x: f32,
    /// Vertical starting position of both blobs
    pub blob_start_y: f32,
    /// Height the ball is served from
    pub serve_drop_height: f32,

    /// Gravitational acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal drag factor while airborne
    pub air_friction: f32,
    /// Horizontal drag factor while grounded
    pub ground_friction: f32,
    /// Speeds below this settle to exactly zero (units/tick)
    pub speed_epsilon: f32,
    /// "Near the floor" threshold for rest and ground checks (units)
    pub position_epsilon: f32,
    /// Fraction of vertical velocity kept after a floor bounce
    pub floor_restitution: f32,

    /// Horizontal drive cap for blob commands (units/tick)
    pub move_speed: f32,
    /// Upward speed a jump imparts (units/tick)
    pub jump_speed: f32,

    /// Serve delay after a point, in whole seconds; 0 disables the delay
    pub serve_delay_secs: u32,
    /// Consecutive touches a blob may make before the ball goes dead to it
    pub max_consecutive_hits: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            display_size: Vec2::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            edge_margin: EDGE_MARGIN,
            floor_margin: FLOOR_MARGIN,
            blob_size: Vec2::new(BLOB_WIDTH, BLOB_HEIGHT),
            ball_radius: BALL_RADIUS,
            net_size: Vec2::new(NET_WIDTH, NET_HEIGHT),
            blob_inset_x: BLOB_INSET_X,
            blob_start_y: BLOB_START_Y,
            serve_drop_height: SERVE_DROP_HEIGHT,
            gravity: GRAVITY_FACTOR,
            air_friction: AIR_FRICTION_FACTOR,
            ground_friction: GROUND_FRICTION_FACTOR,
            speed_epsilon: SPEED_EPSILON,
            position_epsilon: POSITION_EPSILON,
            floor_restitution: FLOOR_RESTITUTION,
            move_speed: BLOB_MOVE_SPEED,
            jump_speed: BLOB_JUMP_SPEED,
            serve_delay_secs: SERVE_DELAY_SECS,
            max_consecutive_hits: MAX_CONSECUTIVE_HITS,
        }
    }
}

impl SimConfig {
    /// Field bounds: the display minus the margins. Immutable for the
    /// session once the simulation is built.
    pub fn bounds(&self) -> FieldBounds {
        FieldBounds {
            min: Vec2::splat(self.edge_margin),
            max: Vec2::new(
                self.display_size.x - self.edge_margin,
                self.display_size.y - self.floor_margin,
            ),
        }
    }

    /// The net: centered horizontally, standing on the display bottom
    pub fn net_rect(&self) -> Rect {
        Rect {
            pos: Vec2::new(
                self.display_size.x / 2.0 - self.net_size.x / 2.0,
                self.display_size.y - self.net_size.y,
            ),
            size: self.net_size,
        }
    }

    /// Starting post for blob `blob` (0 = left, 1 = right)
    pub fn blob_start(&self, blob: usize) -> Vec2 {
        let x = if blob == 0 {
            self.blob_inset_x
        } else {
            self.display_size.x - self.blob_size.x - self.blob_inset_x
        };
        Vec2::new(x, self.blob_start_y)
    }

    /// Serve position for `player`: the quarter-width point on their side
    /// of the net, up at the drop height
    pub fn serve_position(&self, player: usize) -> Vec2 {
        let x = if player == 0 {
            self.display_size.x / 4.0
        } else {
            self.display_size.x * 3.0 / 4.0
        };
        Vec2::new(x, self.serve_drop_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_display() {
        let config = SimConfig::default();
        let bounds = config.bounds();
        assert_eq!(bounds.min, Vec2::new(5.0, 5.0));
        assert_eq!(bounds.max, Vec2::new(635.0, 465.0));
    }

    #[test]
    fn test_net_centered_on_floor() {
        let config = SimConfig::default();
        let net = config.net_rect();
        assert_eq!(net.center().x, 320.0);
        assert_eq!(net.max_y(), config.display_size.y);
    }

    #[test]
    fn test_blob_starts_mirrored() {
        let config = SimConfig::default();
        let left = config.blob_start(0);
        let right = config.blob_start(1);
        assert_eq!(left.x, 40.0);
        assert_eq!(right.x, 640.0 - 48.0 - 40.0);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn test_serve_positions_per_side() {
        let config = SimConfig::default();
        assert_eq!(config.serve_position(0).x, 160.0);
        assert_eq!(config.serve_position(1).x, 480.0);
    }
}
