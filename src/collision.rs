//! Narrow-phase contact detection and impulse resolution.
//!
//! Every routine here is stateless: it reads the current pose and velocity of the
//! bodies involved, mutates them in place and returns. Degenerate input (coincident
//! centers, zero combined inverse mass, zero-length directions) leaves the bodies
//! untouched.
//!
//! Contact normals always point from the first body toward the second.

use glam::Vec2;

use crate::properties::RigidBody2D;

mod boxes;
mod circle;
mod ground;
mod sat;

pub use boxes::resolve_box_box;
pub use circle::{circle_box_contact, circle_circle_contact, resolve_circle_box, resolve_circle_circle};
pub use ground::{resolve_box_ground, resolve_circle_ground};
pub use sat::{point_inside_box, sat_box_box};

/// Fraction of the penetration removed by the split positional correction.
pub const POSITIONAL_CORRECTION_PERCENT: f32 = 0.8;

/// Tolerance of the point-in-box test so touching corners count as contacts.
pub const POINT_IN_BOX_TOLERANCE: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first body toward the second
    pub normal: Vec2,
    pub penetration: f32,
    /// World-space contact point
    pub point: Vec2,
}

/// Inverse mass seen by an impulse along `dir` applied at offsets `ra` and `rb`.
fn effective_inv_mass(a: &RigidBody2D, b: &RigidBody2D, ra: Vec2, rb: Vec2, dir: Vec2) -> f32 {
    let ra_cn = ra.perp_dot(dir);
    let rb_cn = rb.perp_dot(dir);
    a.inv_mass() + b.inv_mass() + ra_cn * ra_cn * a.inv_inertia() + rb_cn * rb_cn * b.inv_inertia()
}

/// Applies `impulse` to `b` and the opposite impulse to `a`.
fn apply_pair_impulse(a: &mut RigidBody2D, b: &mut RigidBody2D, impulse: Vec2, ra: Vec2, rb: Vec2) {
    a.apply_impulse(-impulse, ra);
    b.apply_impulse(impulse, rb);
}

/// Moves both bodies apart along `normal` by `percent` of `penetration`, split by
/// inverse mass.
fn positional_correction(
    a: &mut RigidBody2D,
    b: &mut RigidBody2D,
    normal: Vec2,
    penetration: f32,
    percent: f32,
) {
    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 {
        return;
    }
    let correction = normal * (penetration / inv_mass_sum * percent);
    a.pos -= correction * a.inv_mass();
    b.pos += correction * b.inv_mass();
}

/// Clamps a friction impulse to the Coulomb cone `[-limit, limit]`.
fn clamp_friction(jt: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    jt.max(-limit).min(limit)
}
