use glam::Vec2;

use crate::{
    math::Vec2Ext,
    properties::{Material, RigidBody2D, Shape},
};

use super::clamp_friction;

/// Contact slip below this speed is treated as rolling without slipping.
const ROLLING_SLIP_EPSILON: f32 = 1e-3;

/// Tangential speed below which a box corner gets no friction.
const BOX_SLIDE_EPSILON: f32 = 0.01;

/// Resolves a circle against the ground half-plane `y <= ground_y`.
///
/// The normal impulse bounces the circle with the material's restitution. Friction
/// then targets rolling without slipping: the impulse drives the velocity of the
/// bottom-most surface point to zero, bounded by `friction * jn`. Any remaining
/// penetration is removed exactly.
///
/// Returns `true` if the circle was in contact with the ground.
pub fn resolve_circle_ground(body: &mut RigidBody2D, ground_y: f32, material: Material) -> bool {
    if body.is_static() {
        return false;
    }
    let Shape::Circle { radius } = body.shape() else {
        return false;
    };

    let bottom = body.pos.y - radius;
    if bottom > ground_y {
        return false;
    }

    let n = Vec2::Y;
    let r = Vec2::new(0.0, ground_y - body.pos.y);

    let vn = body.velocity_at(r).dot(n);
    let mut jn = 0.0;
    if vn < 0.0 {
        let r_cn = r.perp_dot(n);
        let inv_mass = body.inv_mass() + r_cn * r_cn * body.inv_inertia();
        jn = -(1.0 + material.restitution) * vn / inv_mass;
        body.apply_impulse(n * jn, r);
    }

    let tangent = Vec2::X;
    let surface = Vec2::new(0.0, -radius);
    let slip = body.velocity_at(surface).dot(tangent);
    if slip.abs() > ROLLING_SLIP_EPSILON && jn > 0.0 {
        let inv_mass = body.inv_mass() + radius * radius * body.inv_inertia();
        let jt = clamp_friction(-slip / inv_mass, material.friction * jn);
        body.apply_impulse(tangent * jt, surface);
    }

    let penetration = ground_y - bottom;
    if penetration > 0.0 {
        body.pos.y += penetration;
    }
    true
}

/// Resolves a box against the ground half-plane `y <= ground_y`.
///
/// Corners within `epsilon` of the ground are contacts. The box is first lifted so
/// its lowest corner sits on the ground, then every contact applies its share of the
/// normal impulse (divided by the contact count) and a friction impulse against its
/// own tangential velocity.
pub fn resolve_box_ground(body: &mut RigidBody2D, ground_y: f32, material: Material, epsilon: f32) {
    if body.is_static() {
        return;
    }
    let Some(vertices) = body.vertices() else {
        return;
    };

    let offsets: Vec<Vec2> = vertices
        .iter()
        .filter(|v| v.y <= ground_y + epsilon)
        .map(|v| *v - body.pos)
        .collect();
    if offsets.is_empty() {
        return;
    }

    let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    if min_y < ground_y {
        body.pos.y += ground_y - min_y;
    }

    let n = Vec2::Y;
    let contact_count = offsets.len() as f32;

    for r in offsets {
        let v_contact = body.velocity_at(r);
        let vn = v_contact.dot(n);

        let mut jn = 0.0;
        if vn < 0.0 {
            let r_cn = r.perp_dot(n);
            let inv_mass = body.inv_mass() + r_cn * r_cn * body.inv_inertia();
            jn = -(1.0 + material.restitution) * vn / inv_mass / contact_count;
            body.apply_impulse(n * jn, r);
        }

        let sliding = v_contact - n * vn;
        if sliding.length() > BOX_SLIDE_EPSILON {
            let t = sliding.normalized();
            let r_ct = r.perp_dot(t);
            let inv_mass = body.inv_mass() + r_ct * r_ct * body.inv_inertia();
            let jt = clamp_friction(-v_contact.dot(t) / inv_mass, material.friction * jn);
            body.apply_impulse(t * jt, r);
        }
    }
}
