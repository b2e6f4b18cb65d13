use glam::Vec2;

use crate::properties::{Material, RigidBody2D};

use super::{
    apply_pair_impulse, clamp_friction, effective_inv_mass, point_inside_box, positional_correction,
    sat_box_box, POSITIONAL_CORRECTION_PERCENT,
};

/// Resolves a box-box contact.
///
/// The manifold is computed once: a single positional correction removes 80% of the
/// SAT penetration, then contact points are the corners of either box lying inside the
/// other (the midpoint of the centers if edges line up exactly). The velocities are
/// solved with `iterations` sequential passes over all contacts. Each contact applies
/// its share of the normal impulse, then friction along the fixed tangent
/// `normal.perp()` measured on the already updated velocities.
pub fn resolve_box_box(a: &mut RigidBody2D, b: &mut RigidBody2D, material: Material, iterations: u32) {
    let Some((normal, penetration)) = sat_box_box(a, b) else {
        return;
    };
    if penetration <= 0.0 {
        return;
    }
    if a.inv_mass() + b.inv_mass() == 0.0 {
        return;
    }

    positional_correction(a, b, normal, penetration, POSITIONAL_CORRECTION_PERCENT);

    let (Some(verts_a), Some(verts_b)) = (a.vertices(), b.vertices()) else {
        return;
    };
    let mut contacts: Vec<Vec2> = verts_a
        .iter()
        .filter(|v| point_inside_box(**v, b))
        .chain(verts_b.iter().filter(|v| point_inside_box(**v, a)))
        .copied()
        .collect();
    if contacts.is_empty() {
        contacts.push((a.pos + b.pos) * 0.5);
    }

    let contact_count = contacts.len() as f32;
    let tangent = normal.perp();

    for _ in 0..iterations {
        for contact in contacts.iter() {
            let ra = *contact - a.pos;
            let rb = *contact - b.pos;

            let rv = b.velocity_at(rb) - a.velocity_at(ra);
            let vn = rv.dot(normal);
            if vn > 0.0 {
                continue;
            }

            let j = -(1.0 + material.restitution) * vn / effective_inv_mass(a, b, ra, rb, normal)
                / contact_count;
            apply_pair_impulse(a, b, normal * j, ra, rb);

            let rv = b.velocity_at(rb) - a.velocity_at(ra);
            let vt = rv.dot(tangent);
            let jt = -vt / effective_inv_mass(a, b, ra, rb, tangent) / contact_count;
            let jt = clamp_friction(jt, material.friction * j);
            apply_pair_impulse(a, b, tangent * jt, ra, rb);
        }
    }
}
