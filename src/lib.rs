//! Blob Volley - a two-player volleyball arcade physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//!
//! Rendering, input devices, asset loading, and audio playback are
//! external collaborators: the simulation exposes a read-only snapshot
//! once per tick, accepts per-blob velocity commands, and emits events
//! for an audio hook to react to.

pub mod sim;

pub use sim::{SimConfig, Simulation};

/// Game configuration constants
pub mod consts {
    /// Simulation rate in ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Display the field is carved from
    pub const DISPLAY_WIDTH: f32 = 640.0;
    pub const DISPLAY_HEIGHT: f32 = 480.0;
    /// Clear margin on the left, top, and right field edges
    pub const EDGE_MARGIN: f32 = 5.0;
    /// Clear margin below the floor bound
    pub const FLOOR_MARGIN: f32 = 15.0;

    /// Blob bounding box
    pub const BLOB_WIDTH: f32 = 48.0;
    pub const BLOB_HEIGHT: f32 = 48.0;
    /// Horizontal inset of each blob's starting post
    pub const BLOB_INSET_X: f32 = 40.0;
    /// Vertical starting position of both blobs
    pub const BLOB_START_Y: f32 = 200.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 16.0;
    /// Height the ball is served from
    pub const SERVE_DROP_HEIGHT: f32 = 0.0;

    /// Net bounding box; the net stands on the display bottom
    pub const NET_WIDTH: f32 = 16.0;
    pub const NET_HEIGHT: f32 = 160.0;

    /// Gravitational acceleration (units/s²), integrated at TICK_RATE
    pub const GRAVITY_FACTOR: f32 = 9.81;
    /// Horizontal drag factor while airborne
    pub const AIR_FRICTION_FACTOR: f32 = 0.99;
    /// Horizontal drag factor while grounded
    pub const GROUND_FRICTION_FACTOR: f32 = 0.9;
    /// Speeds below this settle to exactly zero (units/tick)
    pub const SPEED_EPSILON: f32 = 0.1;
    /// "Near the floor" threshold for rest and ground checks (units)
    pub const POSITION_EPSILON: f32 = 10.0;
    /// Fraction of vertical velocity kept after a floor bounce
    pub const FLOOR_RESTITUTION: f32 = 0.5;

    /// Horizontal drive cap for blob commands (units/tick)
    pub const BLOB_MOVE_SPEED: f32 = 3.0;
    /// Upward speed a jump imparts (units/tick)
    pub const BLOB_JUMP_SPEED: f32 = 6.0;

    /// Serve delay after a point, in whole seconds
    pub const SERVE_DELAY_SECS: u32 = 3;
    /// Consecutive touches a blob may make before the ball goes dead to it
    pub const MAX_CONSECUTIVE_HITS: u32 = 3;
}
