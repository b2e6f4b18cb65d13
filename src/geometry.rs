use glam::Vec2;

use crate::{
    math::Vec2Ext,
    properties::{RigidBody2D, Shape},
};

/// Corners of a `width` x `height` rectangle rotated by `angle` around `center`,
/// counter-clockwise starting at the local bottom-left corner.
pub fn rectangle_vertices(center: Vec2, angle: f32, width: f32, height: f32) -> [Vec2; 4] {
    let hw = width * 0.5;
    let hh = height * 0.5;
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| center + corner.rotated(angle))
}

/// World-space corners of a box body. Circles have none.
pub fn box_vertices(body: &RigidBody2D) -> Option<[Vec2; 4]> {
    match body.shape() {
        Shape::Box { width, height } => {
            Some(rectangle_vertices(body.pos, body.angle, width, height))
        }
        Shape::Circle { .. } => None,
    }
}

/// Unit normals of the four edges. Opposite edges give parallel axes, only two are
/// independent.
pub fn box_axes(vertices: &[Vec2; 4]) -> [Vec2; 4] {
    std::array::from_fn(|i| {
        let edge = vertices[(i + 1) % 4] - vertices[i];
        edge.perp().normalized()
    })
}

/// Interval `(min, max)` covered by `vertices` along `axis`.
pub fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}
