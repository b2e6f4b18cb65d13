use glam::Vec2;

use crate::{
    geometry::{box_axes, project},
    math::Vec2Ext,
    properties::RigidBody2D,
};

use super::POINT_IN_BOX_TOLERANCE;

/// Separating axis test between two box bodies.
///
/// Both boxes are projected onto the four edge normals of each box. If any axis shows
/// no positive overlap the boxes are disjoint and `None` is returned. Otherwise the
/// axis with the smallest overlap is returned as the collision normal, oriented from
/// `a` toward `b`, together with that overlap as the penetration depth.
///
/// Returns `None` if either body is not a box.
pub fn sat_box_box(a: &RigidBody2D, b: &RigidBody2D) -> Option<(Vec2, f32)> {
    let verts_a = a.vertices()?;
    let verts_b = b.vertices()?;

    let mut min_overlap = f32::INFINITY;
    let mut normal = Vec2::ZERO;

    for axis in box_axes(&verts_a).into_iter().chain(box_axes(&verts_b)) {
        let axis = axis.normalized();
        let (min_a, max_a) = project(&verts_a, axis);
        let (min_b, max_b) = project(&verts_b, axis);

        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            normal = axis;
        }
    }

    if (b.pos - a.pos).dot(normal) < 0.0 {
        normal = -normal;
    }

    Some((normal, min_overlap))
}

/// Whether `p` lies inside (or within [`POINT_IN_BOX_TOLERANCE`] of) a box body.
/// Always `false` for circles.
pub fn point_inside_box(p: Vec2, body: &RigidBody2D) -> bool {
    let Some(verts) = body.vertices() else {
        return false;
    };

    box_axes(&verts).iter().all(|&axis| {
        let (min_proj, max_proj) = project(&verts, axis);
        let proj = p.dot(axis);
        proj >= min_proj - POINT_IN_BOX_TOLERANCE && proj <= max_proj + POINT_IN_BOX_TOLERANCE
    })
}
