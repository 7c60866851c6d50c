//! Actors, match state, and the simulation aggregate
//!
//! All state that must be snapshotted for determinism lives here. The
//! per-tick event buffer and the contact diagnostics are transient and
//! skipped on serialization.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::geom::{CollisionResult, FieldBounds, Rect};

/// Number of blobs in a match
pub const NUM_BLOBS: usize = 2;

/// A physics-simulated entity: the ball or a blob.
///
/// The ball's position is its center; a blob's is its top-left corner.
/// `scale` is cosmetic, carried for renderers and never read by physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
}

impl Actor {
    /// An actor at rest at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Current phase of the match, derived from the serve countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Serve delay: actors frozen, input ignored, ticks no-op
    Serving,
    /// Full simulation
    InPlay,
}

/// Events emitted synchronously within a tick, valid until the next one.
/// Audio and other collaborators react to these; the snapshot accessors
/// carry everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A blob touched the ball
    BlobHit { blob: usize },
    /// The ball bounced off the net
    NetHit,
    /// The ball reached the floor; `player` won the point
    PointScored { player: usize },
}

/// Score, possession, and serve tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Points per player
    pub scores: [u32; 2],
    /// Blob that last touched the ball this possession
    pub last_toucher: Option<usize>,
    /// Consecutive touches by `last_toucher`
    pub hit_streak: u32,
    /// Seconds left before play resumes; zero means in play
    pub countdown: u32,
}

impl MatchState {
    fn new() -> Self {
        Self {
            scores: [0, 0],
            last_toucher: None,
            hit_streak: 0,
            countdown: 0,
        }
    }

    /// The phase is derived, so countdown and phase can never disagree
    pub fn phase(&self) -> MatchPhase {
        if self.countdown > 0 {
            MatchPhase::Serving
        } else {
            MatchPhase::InPlay
        }
    }

    /// Whether `blob` may still resolve a touch this possession
    pub fn may_hit(&self, blob: usize, max_consecutive: u32) -> bool {
        !(self.last_toucher == Some(blob) && self.hit_streak >= max_consecutive)
    }

    /// Record a touch; the streak restarts at 1 when possession changes
    pub fn register_hit(&mut self, blob: usize) -> u32 {
        if self.last_toucher != Some(blob) {
            self.last_toucher = Some(blob);
            self.hit_streak = 0;
        }
        self.hit_streak += 1;
        self.hit_streak
    }
}

/// The complete simulation aggregate: field, actors, match state.
///
/// Owned by whoever drives the tick loop and passed by reference to the
/// component functions; there is no global state anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) bounds: FieldBounds,
    pub(crate) net: Rect,
    pub(crate) ball: Actor,
    pub(crate) blobs: [Actor; NUM_BLOBS],
    pub(crate) match_state: MatchState,
    pub(crate) tick_count: u64,
    /// Events emitted during the last tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    /// Last ball probe against each blob, for debug overlays
    #[serde(skip)]
    pub(crate) contacts: [CollisionResult; NUM_BLOBS],
}

impl Simulation {
    /// Create a simulation at match start: ball dropped over the left
    /// quarter, blobs at their posts, play live immediately.
    pub fn new(config: SimConfig) -> Self {
        let bounds = config.bounds();
        let net = config.net_rect();
        let ball = Actor::at(config.serve_position(0));
        let blobs = [
            Actor::at(config.blob_start(0)),
            Actor::at(config.blob_start(1)),
        ];
        Self {
            config,
            bounds,
            net,
            ball,
            blobs,
            match_state: MatchState::new(),
            tick_count: 0,
            events: Vec::new(),
            contacts: Default::default(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> &FieldBounds {
        &self.bounds
    }

    pub fn net(&self) -> &Rect {
        &self.net
    }

    pub fn ball(&self) -> &Actor {
        &self.ball
    }

    pub fn blobs(&self) -> &[Actor; NUM_BLOBS] {
        &self.blobs
    }

    pub fn scores(&self) -> [u32; 2] {
        self.match_state.scores
    }

    pub fn last_toucher(&self) -> Option<usize> {
        self.match_state.last_toucher
    }

    pub fn hit_streak(&self) -> u32 {
        self.match_state.hit_streak
    }

    pub fn countdown(&self) -> u32 {
        self.match_state.countdown
    }

    pub fn phase(&self) -> MatchPhase {
        self.match_state.phase()
    }

    /// Monotonic tick counter, for diagnostics only
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Events from the last tick, cleared when the next tick starts
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Last ball probe against each blob, for debug overlays
    pub fn contacts(&self) -> &[CollisionResult; NUM_BLOBS] {
        &self.contacts
    }

    /// Advance the serve countdown by one second of real time. The loop
    /// driver calls this once per elapsed second, independent of the
    /// tick rate; play resumes when the countdown reaches zero.
    pub fn tick_countdown(&mut self) {
        if self.match_state.countdown > 0 {
            self.match_state.countdown -= 1;
            if self.match_state.countdown == 0 {
                log::info!("serve countdown elapsed, play resumes");
            }
        }
    }

    /// End the point: score for `player`, re-serve from their side of
    /// the net with everything back at its post.
    pub(crate) fn end_point(&mut self, player: usize) {
        self.match_state.scores[player] += 1;
        self.match_state.last_toucher = None;
        self.match_state.hit_streak = 0;
        self.match_state.countdown = self.config.serve_delay_secs;

        self.ball = Actor::at(self.config.serve_position(player));
        for (i, blob) in self.blobs.iter_mut().enumerate() {
            *blob = Actor::at(self.config.blob_start(i));
        }

        log::info!(
            "point to player {}: {} | {}",
            player + 1,
            self.match_state.scores[0],
            self.match_state.scores[1]
        );
    }
}
