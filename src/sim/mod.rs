//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Stable update order (ball first, then blobs by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod geom;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use config::SimConfig;
pub use geom::{CollisionResult, FieldBounds, Rect, circle_vs_rect, rect_overlap};
pub use state::{Actor, GameEvent, MatchPhase, MatchState, NUM_BLOBS, Simulation};
pub use tick::{BlobInput, TickInput, tick};
