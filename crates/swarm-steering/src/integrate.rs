//! Force → velocity → position, plus facing orientation.

use swarm_core::{Mat3, Quat, Vec3};

/// Orientation is refreshed only while the squared speed exceeds this.
///
/// The comparison is against the *squared* speed, i.e. a linear speed of
/// roughly 0.316.
pub const ORIENT_SPEED_SQ_THRESHOLD: f32 = 0.1;

/// Advance one agent by `dt`.
///
/// 1. `velocity += force * dt`
/// 2. clamp `|velocity|` to `max_speed`
/// 3. `position += velocity * dt`
/// 4. face along `velocity` (up = +Y) if the squared speed measured before
///    the clamp exceeds [`ORIENT_SPEED_SQ_THRESHOLD`]
///
/// Step 4 deliberately reads the unclamped speed: an agent whose
/// `max_speed²` is below the threshold still turns to face its velocity.
/// Do not move the check after the clamp.
pub fn integrate(
    position:    &mut Vec3,
    velocity:    &mut Vec3,
    orientation: &mut Quat,
    force:       Vec3,
    max_speed:   f32,
    dt:          f32,
) {
    *velocity += force * dt;

    // Unclamped; the orientation gate below reads this value.
    let speed_sq = velocity.length_squared();
    if speed_sq > max_speed * max_speed {
        *velocity = velocity.normalize_or_zero() * max_speed;
    }

    *position += *velocity * dt;

    if speed_sq > ORIENT_SPEED_SQ_THRESHOLD {
        *orientation = look_rotation(*velocity, Vec3::Y);
    }
}

/// Rotation whose local +Z points along `forward` and whose local +Y is as
/// close to `up` as possible.
///
/// Returns [`Quat::IDENTITY`] when `forward` or `up` is degenerate (zero,
/// non-finite, or the two are colinear).
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let fwd_len_sq = forward.length_squared();
    let up_len_sq = up.length_squared();
    let fwd = forward / fwd_len_sq.sqrt();
    let up = up / up_len_sq.sqrt();

    let side = up.cross(fwd);
    let side_len_sq = side.length_squared();
    let side = side / side_len_sq.sqrt();

    let lo = fwd_len_sq.min(up_len_sq).min(side_len_sq);
    let hi = fwd_len_sq.max(up_len_sq).max(side_len_sq);
    let ok = lo > 1e-35 && hi < 1e35 && fwd.is_finite() && up.is_finite() && side.is_finite();
    if !ok {
        return Quat::IDENTITY;
    }

    Quat::from_mat3(&Mat3::from_cols(side, fwd.cross(side), fwd))
}
