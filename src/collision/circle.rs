use glam::Vec2;

use crate::{
    math::{Vec2Ext, NORMALIZE_EPSILON},
    properties::{Material, RigidBody2D, Shape},
};

use super::{
    apply_pair_impulse, clamp_friction, effective_inv_mass, positional_correction, Contact,
    POSITIONAL_CORRECTION_PERCENT,
};

/// Contact between two circles, `None` if they are apart or their centers coincide.
/// The contact point lies on the surface of circle `a`.
pub fn circle_circle_contact(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> Option<Contact> {
    let delta = pos_b - pos_a;
    let dist = delta.length();
    let min_dist = radius_a + radius_b;

    if dist == 0.0 || dist > min_dist {
        return None;
    }

    let normal = delta * (1.0 / dist);
    Some(Contact {
        normal,
        penetration: min_dist - dist,
        point: pos_a + normal * radius_a,
    })
}

/// Contact between a circle and a box body. The normal points from the circle toward
/// the box. A center inside the box is pushed out through the nearest face.
pub fn circle_box_contact(center: Vec2, radius: f32, boxed: &RigidBody2D) -> Option<Contact> {
    let Shape::Box { width, height } = boxed.shape() else {
        return None;
    };
    let half = Vec2::new(width * 0.5, height * 0.5);
    let local = (center - boxed.pos).rotated(-boxed.angle);
    let closest = local.clamp(-half, half);

    let (outward, surface, penetration) = if closest != local {
        let diff = local - closest;
        let dist = diff.length();
        if dist > radius {
            return None;
        }
        (diff / dist, closest, radius - dist)
    } else {
        let dx = half.x - local.x.abs();
        let dy = half.y - local.y.abs();
        if dx < dy {
            let side = local.x.signum();
            (Vec2::new(side, 0.0), Vec2::new(side * half.x, local.y), radius + dx)
        } else {
            let side = local.y.signum();
            (Vec2::new(0.0, side), Vec2::new(local.x, side * half.y), radius + dy)
        }
    };

    Some(Contact {
        normal: -outward.rotated(boxed.angle),
        penetration,
        point: boxed.pos + surface.rotated(boxed.angle),
    })
}

/// Normal impulse with restitution followed by Coulomb friction along the residual
/// tangential velocity. Returns `false` without touching the bodies if they are
/// separating.
fn resolve_contact_velocity(a: &mut RigidBody2D, b: &mut RigidBody2D, contact: &Contact, material: Material) -> bool {
    let n = contact.normal;
    let ra = contact.point - a.pos;
    let rb = contact.point - b.pos;

    let rv = b.velocity_at(rb) - a.velocity_at(ra);
    let vn = rv.dot(n);
    if vn > 0.0 {
        return false;
    }

    let inv_mass_sum = effective_inv_mass(a, b, ra, rb, n);
    if inv_mass_sum == 0.0 {
        return false;
    }

    let j = -(1.0 + material.restitution) * vn / inv_mass_sum;
    apply_pair_impulse(a, b, n * j, ra, rb);

    let residual = rv - n * vn;
    if residual.length() > NORMALIZE_EPSILON {
        let t = residual.normalized();
        let inv_mass_t = effective_inv_mass(a, b, ra, rb, t);
        let jt = clamp_friction(-rv.dot(t) / inv_mass_t, material.friction * j);
        apply_pair_impulse(a, b, t * jt, ra, rb);
    }
    true
}

/// Resolves a circle-circle contact. Separating circles are left alone, including
/// their overlap. Penetration is split evenly between two dynamic circles; against a
/// static circle the dynamic one takes all of it.
pub fn resolve_circle_circle(a: &mut RigidBody2D, b: &mut RigidBody2D, material: Material) {
    if a.is_static() && b.is_static() {
        return;
    }
    let (Shape::Circle { radius: radius_a }, Shape::Circle { radius: radius_b }) = (a.shape(), b.shape()) else {
        return;
    };
    let Some(contact) = circle_circle_contact(a.pos, radius_a, b.pos, radius_b) else {
        return;
    };

    if !resolve_contact_velocity(a, b, &contact, material) {
        return;
    }

    if contact.penetration > 0.0 {
        let share_a = match (a.is_static(), b.is_static()) {
            (false, false) => 0.5,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let correction = contact.normal * contact.penetration;
        a.pos -= correction * share_a;
        b.pos += correction * (1.0 - share_a);
    }
}

/// Resolves a contact between circle `a` and box `b`.
///
/// The contact point sits on the box surface, so it follows the box through the
/// positional correction before the impulses are computed.
pub fn resolve_circle_box(a: &mut RigidBody2D, b: &mut RigidBody2D, material: Material) {
    if a.is_static() && b.is_static() {
        return;
    }
    let Shape::Circle { radius } = a.shape() else {
        return;
    };
    let Some(contact) = circle_box_contact(a.pos, radius, b) else {
        return;
    };

    let box_before = b.pos;
    positional_correction(a, b, contact.normal, contact.penetration, POSITIONAL_CORRECTION_PERCENT);
    let contact = Contact {
        point: contact.point + (b.pos - box_before),
        ..contact
    };
    resolve_contact_velocity(a, b, &contact, material);
}
