use std::fmt::Debug;

use glam::Vec2;

use crate::properties::{body_pair_mut, BodyHandle, RigidBody2D};

/// A positional coupling between two bodies of a world, solved once per solver
/// iteration.
pub trait Constraint: Debug {
    /// The two bodies this constraint connects.
    fn bodies(&self) -> (BodyHandle, BodyHandle);

    /// Called once per substep before the solver iterations.
    fn pre_solve(&mut self, _bodies: &mut [RigidBody2D], _dt: f32) {}

    fn solve(&mut self, bodies: &mut [RigidBody2D]);

    /// Broken constraints are removed from the world at the end of the substep.
    fn is_broken(&self) -> bool {
        false
    }
}

/// Moves `a` and `b` along `n` by a total of `correction`, split by inverse mass.
/// `a` moves along `+n`, `b` along `-n`.
fn split_correction(a: &mut RigidBody2D, b: &mut RigidBody2D, n: Vec2, correction: f32) {
    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 {
        return;
    }
    a.pos += n * (correction * a.inv_mass() / inv_mass_sum);
    b.pos -= n * (correction * b.inv_mass() / inv_mass_sum);
}

/// Inextensible rope. Slack while the bodies are closer than `rest_length`, pulled
/// straight in one call when stretched. A stretch beyond `break_threshold` snaps the
/// rope for good.
#[derive(Debug, Clone)]
pub struct RopeConstraint {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub rest_length: f32,
    pub break_threshold: Option<f32>,
    broken: bool,
}

impl RopeConstraint {
    pub fn new(a: BodyHandle, b: BodyHandle, rest_length: f32) -> Self {
        Self {
            a,
            b,
            rest_length,
            break_threshold: None,
            broken: false,
        }
    }

    pub fn breakable(a: BodyHandle, b: BodyHandle, rest_length: f32, break_threshold: f32) -> Self {
        Self {
            break_threshold: Some(break_threshold),
            ..Self::new(a, b, rest_length)
        }
    }
}

impl Constraint for RopeConstraint {
    fn bodies(&self) -> (BodyHandle, BodyHandle) {
        (self.a, self.b)
    }

    fn solve(&mut self, bodies: &mut [RigidBody2D]) {
        if self.broken {
            return;
        }
        let Some((a, b)) = body_pair_mut(bodies, self.a.index(), self.b.index()) else {
            return;
        };

        let delta = b.pos - a.pos;
        let dist = delta.length();
        if dist <= self.rest_length {
            return;
        }

        let stretch = dist - self.rest_length;
        if let Some(threshold) = self.break_threshold {
            if stretch > threshold {
                log::debug!(
                    "rope {:?}-{:?} broke: stretch {stretch} exceeds {threshold}",
                    self.a,
                    self.b
                );
                self.broken = true;
                return;
            }
        }

        split_correction(a, b, delta / dist, stretch);
    }

    fn is_broken(&self) -> bool {
        self.broken
    }
}

/// Rigid rod holding two bodies at `length`. `stiffness` in `(0, 1]` is the fraction
/// of the error removed per call.
#[derive(Debug, Clone)]
pub struct DistanceJoint {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub length: f32,
    pub stiffness: f32,
}

impl DistanceJoint {
    pub fn new(a: BodyHandle, b: BodyHandle, length: f32, stiffness: f32) -> Self {
        Self {
            a,
            b,
            length,
            stiffness,
        }
    }
}

impl Constraint for DistanceJoint {
    fn bodies(&self) -> (BodyHandle, BodyHandle) {
        (self.a, self.b)
    }

    fn solve(&mut self, bodies: &mut [RigidBody2D]) {
        let Some((a, b)) = body_pair_mut(bodies, self.a.index(), self.b.index()) else {
            return;
        };

        let delta = b.pos - a.pos;
        let dist = delta.length();
        if dist == 0.0 {
            return;
        }

        let error = dist - self.length;
        split_correction(a, b, delta / dist, error * self.stiffness);
    }
}

/// Damped spring. Not a constraint: it only adds forces before integration.
#[derive(Debug, Clone)]
pub struct Spring {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub stiffness: f32,
    pub damping: f32,
    pub rest_length: f32,
}

impl Spring {
    pub fn new(a: BodyHandle, b: BodyHandle, stiffness: f32, damping: f32, rest_length: f32) -> Self {
        Self {
            a,
            b,
            stiffness,
            damping,
            rest_length,
        }
    }

    /// Force acting on `b`; `a` receives the opposite.
    pub fn force(&self, a: &RigidBody2D, b: &RigidBody2D) -> Vec2 {
        let delta = b.pos - a.pos;
        let len = delta.length();
        if len == 0.0 {
            return Vec2::ZERO;
        }

        let n = delta / len;
        let relative_speed = (b.vel - a.vel).dot(n);
        let magnitude = -self.stiffness * (len - self.rest_length) - self.damping * relative_speed;
        n * magnitude
    }

    pub fn apply(&self, bodies: &mut [RigidBody2D]) {
        let Some((a, b)) = body_pair_mut(bodies, self.a.index(), self.b.index()) else {
            return;
        };
        let force = self.force(a, b);
        a.apply_force(-force);
        b.apply_force(force);
    }
}
