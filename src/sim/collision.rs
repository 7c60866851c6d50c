//! Collision resolution for the three interacting pairs
//!
//! Ball vs net, blob vs net, and ball vs blob each follow distinct
//! response rules. The `circle_vs_rect` probe only establishes whether
//! and where on a boundary a contact happened; the bounce direction is
//! recomputed from the actor centers, and velocity mirroring follows the
//! struck edge. Every resolution also corrects the position so the
//! overlap is gone before the tick ends.

use glam::Vec2;

use super::geom::{CollisionResult, Rect, circle_vs_rect, rect_overlap};
use super::state::Actor;

/// Bounce the ball off the net.
///
/// The contact normal is replaced by the unit vector from the net center
/// to the ball center (a ball centered exactly on the net center has no
/// usable direction and keeps a zero normal). Velocity mirrors on the
/// axis of the struck edge: left/right flip `dx`, the top flips `dy`,
/// the bottom gets no velocity treatment. Returns the contact when the
/// ball touched the net.
pub fn resolve_ball_net(ball: &mut Actor, radius: f32, net: &Rect) -> Option<CollisionResult> {
    let mut contact = circle_vs_rect(ball.pos, radius, net);
    if !contact.hit() {
        return None;
    }

    contact.normal = (ball.pos - net.center()).normalize_or_zero();

    let side_hit = contact.point.x == net.min_x() || contact.point.x == net.max_x();
    let top_hit = contact.point.y == net.min_y();
    if side_hit {
        ball.vel.x = -ball.vel.x;
    }
    if top_hit {
        ball.vel.y = -ball.vel.y;
    }

    push_out(&mut ball.pos, radius, &contact, net);

    log::debug!(
        "ball/net contact at ({}, {}), normal ({}, {})",
        contact.point.x,
        contact.point.y,
        contact.normal.x,
        contact.normal.y
    );
    Some(contact)
}

/// Blobs may never occupy the net's horizontal span: an overlapping blob
/// is clamped to whichever side of the net it is on. No velocity change.
pub fn keep_blob_off_net(blob: &mut Actor, size: Vec2, net: &Rect) {
    let body = Rect { pos: blob.pos, size };
    if !rect_overlap(&body, net) {
        return;
    }

    if blob.pos.x < net.min_x() {
        blob.pos.x = net.min_x() - size.x;
    } else {
        blob.pos.x = net.max_x();
    }
    log::debug!("blob clamped off net to x={}", blob.pos.x);
}

/// Bounce the ball off a blob.
///
/// Each ball velocity component whose sign disagrees with the blob's
/// matching component is flipped toward it (a stationary blob leaves the
/// sign alone), then the blob's velocity is added outright: momentum
/// transfer with no mass model. Position correction matches the net
/// rule. The caller gates the hit streak; this function only performs
/// the geometric response on an already-detected contact.
pub fn resolve_ball_blob(
    ball: &mut Actor,
    radius: f32,
    blob_vel: Vec2,
    body: &Rect,
    contact: &mut CollisionResult,
) {
    contact.normal = (ball.pos - body.center()).normalize_or_zero();

    let dx = if ball.vel.x * blob_vel.x >= 0.0 {
        ball.vel.x
    } else {
        -ball.vel.x
    };
    let dy = if ball.vel.y * blob_vel.y >= 0.0 {
        ball.vel.y
    } else {
        -ball.vel.y
    };
    ball.vel = Vec2::new(dx, dy) + blob_vel;

    push_out(&mut ball.pos, radius, contact, body);

    log::debug!(
        "ball/blob contact at ({}, {}), ball vel now ({}, {})",
        contact.point.x,
        contact.point.y,
        ball.vel.x,
        ball.vel.y
    );
}

/// Push a circle center out of a rectangle along the struck edge by
/// exactly `radius - |penetration on that axis|`. Vertical edges are
/// checked first, so a corner contact resolves on the x axis alone.
/// Exact equality against the edge coordinates is safe: the nearest
/// point comes from clamping and is bit-identical to the edge it lies on.
fn push_out(pos: &mut Vec2, radius: f32, contact: &CollisionResult, rect: &Rect) {
    if contact.point.x == rect.min_x() {
        pos.x -= radius - contact.dir.x.abs();
    } else if contact.point.x == rect.max_x() {
        pos.x += radius - contact.dir.x.abs();
    } else if contact.point.y == rect.min_y() {
        pos.y -= radius - contact.dir.y.abs();
    } else if contact.point.y == rect.max_y() {
        pos.y += radius - contact.dir.y.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 16.0;

    fn net() -> Rect {
        Rect::new(312.0, 320.0, 16.0, 160.0)
    }

    #[test]
    fn test_net_left_side_bounce() {
        let net = net();
        let mut ball = Actor::at(Vec2::new(net.min_x() - 10.0, 400.0));
        ball.vel = Vec2::new(4.0, 1.0);

        let contact = resolve_ball_net(&mut ball, RADIUS, &net).expect("overlap");

        assert_eq!(ball.vel.x, -4.0);
        assert_eq!(ball.vel.y, 1.0);
        // Pushed left by radius - penetration = 16 - 10
        assert!((ball.pos.x - (net.min_x() - 16.0)).abs() < 1e-4);
        // Normal points away from the net center
        assert!(contact.normal.x < 0.0);
        // The ball no longer penetrates the net
        assert!(circle_vs_rect(ball.pos, RADIUS, &net).distance >= RADIUS);
    }

    #[test]
    fn test_net_right_side_bounce() {
        let net = net();
        let mut ball = Actor::at(Vec2::new(net.max_x() + 7.0, 400.0));
        ball.vel = Vec2::new(-3.0, 0.0);

        resolve_ball_net(&mut ball, RADIUS, &net).expect("overlap");

        assert_eq!(ball.vel.x, 3.0);
        assert!((ball.pos.x - (net.max_x() + 16.0)).abs() < 1e-4);
    }

    #[test]
    fn test_net_top_bounce() {
        let net = net();
        let mut ball = Actor::at(Vec2::new(net.center().x, net.min_y() - 9.0));
        ball.vel = Vec2::new(0.5, 5.0);

        resolve_ball_net(&mut ball, RADIUS, &net).expect("overlap");

        // Top edge flips dy, leaves dx
        assert_eq!(ball.vel.y, -5.0);
        assert_eq!(ball.vel.x, 0.5);
        assert!((ball.pos.y - (net.min_y() - 16.0)).abs() < 1e-4);
    }

    #[test]
    fn test_net_miss_leaves_ball_alone() {
        let net = net();
        let mut ball = Actor::at(Vec2::new(100.0, 100.0));
        ball.vel = Vec2::new(2.0, 2.0);

        assert!(resolve_ball_net(&mut ball, RADIUS, &net).is_none());
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_blob_clamped_left_of_net() {
        let net = net();
        let size = Vec2::new(48.0, 48.0);
        let mut blob = Actor::at(Vec2::new(net.min_x() - 30.0, 400.0));

        keep_blob_off_net(&mut blob, size, &net);
        assert_eq!(blob.pos.x, net.min_x() - size.x);
    }

    #[test]
    fn test_blob_clamped_right_of_net() {
        let net = net();
        let size = Vec2::new(48.0, 48.0);
        let mut blob = Actor::at(Vec2::new(net.min_x() + 5.0, 400.0));

        keep_blob_off_net(&mut blob, size, &net);
        assert_eq!(blob.pos.x, net.max_x());
    }

    #[test]
    fn test_blob_clear_of_net_untouched() {
        let net = net();
        let size = Vec2::new(48.0, 48.0);
        let mut blob = Actor::at(Vec2::new(100.0, 400.0));

        keep_blob_off_net(&mut blob, size, &net);
        assert_eq!(blob.pos.x, 100.0);
    }

    #[test]
    fn test_ball_blob_head_on_stationary_blob() {
        // Ball moving right into a stationary blob: signs agree with the
        // zero velocity, so dx is unchanged and nothing is added
        let body = Rect::new(200.0, 300.0, 48.0, 48.0);
        let mut ball = Actor::at(Vec2::new(body.min_x() - 12.0, 324.0));
        ball.vel = Vec2::new(5.0, 0.0);

        let mut contact = circle_vs_rect(ball.pos, RADIUS, &body);
        assert!(contact.hit());
        resolve_ball_blob(&mut ball, RADIUS, Vec2::ZERO, &body, &mut contact);

        assert_eq!(ball.vel.x, 5.0);
        assert_eq!(ball.vel.y, 0.0);
        assert!((ball.pos.x - (body.min_x() - 16.0)).abs() < 1e-4);
    }

    #[test]
    fn test_ball_blob_momentum_transfer() {
        // Blob rising into a falling ball: dy disagrees, flips, then the
        // blob's velocity piles on
        let body = Rect::new(200.0, 300.0, 48.0, 48.0);
        let mut ball = Actor::at(Vec2::new(224.0, body.min_y() - 10.0));
        ball.vel = Vec2::new(1.0, 3.0);
        let blob_vel = Vec2::new(2.0, -6.0);

        let mut contact = circle_vs_rect(ball.pos, RADIUS, &body);
        assert!(contact.hit());
        resolve_ball_blob(&mut ball, RADIUS, blob_vel, &body, &mut contact);

        // dx: 1*2 >= 0 keeps +1, then +2 = 3
        assert_eq!(ball.vel.x, 3.0);
        // dy: 3*-6 < 0 flips to -3, then -6 = -9
        assert_eq!(ball.vel.y, -9.0);
    }

    #[test]
    fn test_ball_blob_contact_normal_from_centers() {
        let body = Rect::new(200.0, 300.0, 48.0, 48.0);
        let mut ball = Actor::at(Vec2::new(224.0, body.min_y() - 10.0));
        ball.vel = Vec2::new(0.0, 2.0);

        let mut contact = circle_vs_rect(ball.pos, RADIUS, &body);
        resolve_ball_blob(&mut ball, RADIUS, Vec2::ZERO, &body, &mut contact);

        // Ball sits straight above the blob center: normal points straight up
        assert!(contact.normal.y < 0.0);
        assert!(contact.normal.x.abs() < 1e-4);
    }
}
