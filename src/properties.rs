use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry;

pub const DEFAULT_LINEAR_DAMPING: f32 = 0.2;
pub const DEFAULT_ANGULAR_DAMPING: f32 = 2.5;

/// Collision geometry of a body. Fixed once the body is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Box { width: f32, height: f32 },
}

impl Shape {
    /// Rotational inertia of a solid shape with the given mass.
    pub fn inertia(&self, mass: f32) -> f32 {
        match *self {
            Shape::Circle { radius } => 0.5 * mass * radius * radius,
            Shape::Box { width, height } => mass * (width * width + height * height) / 12.0,
        }
    }
}

/// Surface response of a contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// `0.0` -> fully inelastic, `1.0` -> fully elastic
    pub restitution: f32,
    /// Coulomb friction coefficient
    pub friction: f32,
}

impl Material {
    pub const fn new(restitution: f32, friction: f32) -> Self {
        Self {
            restitution,
            friction,
        }
    }
}

/// Index of a body inside its [`World`](crate::world::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RigidBody2D {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub ang_vel: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    mass: f32,
    inv_mass: f32,
    inv_inertia: f32,
    force: Vec2,
    torque: f32,
    shape: Shape,
}

impl RigidBody2D {
    /// Creates a body at rest. A `mass <= 0` makes the body static.
    pub fn new(pos: Vec2, shape: Shape, mass: f32) -> Self {
        let (inv_mass, inv_inertia) = if mass <= 0.0 {
            (0.0, 0.0)
        } else {
            (1.0 / mass, 1.0 / shape.inertia(mass))
        };

        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            ang_vel: 0.0,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            mass,
            inv_mass,
            inv_inertia,
            force: Vec2::ZERO,
            torque: 0.0,
            shape,
        }
    }

    pub fn circle(pos: Vec2, radius: f32, mass: f32) -> Self {
        Self::new(pos, Shape::Circle { radius }, mass)
    }

    pub fn rectangle(pos: Vec2, width: f32, height: f32, mass: f32) -> Self {
        Self::new(pos, Shape::Box { width, height }, mass)
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_angular_velocity(mut self, ang_vel: f32) -> Self {
        self.ang_vel = ang_vel;
        self
    }

    /// Per-second damping rates. `0.0` disables damping.
    pub fn with_damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn inv_inertia(&self) -> f32 {
        self.inv_inertia
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn torque(&self) -> f32 {
        self.torque
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// World-space corners of a box body, `None` for circles.
    pub fn vertices(&self) -> Option<[Vec2; 4]> {
        geometry::box_vertices(self)
    }

    pub fn apply_force(&mut self, f: Vec2) {
        if self.is_static() {
            return;
        }
        self.force += f;
    }

    pub fn apply_torque(&mut self, t: f32) {
        if self.is_static() {
            return;
        }
        self.torque += t;
    }

    /// Velocity of the material point at offset `r` from the center.
    pub fn velocity_at(&self, r: Vec2) -> Vec2 {
        self.vel + r.perp() * self.ang_vel
    }

    /// Applies `impulse` at offset `r` from the center. Static bodies are unaffected
    /// because both inverse quantities are zero.
    pub fn apply_impulse(&mut self, impulse: Vec2, r: Vec2) {
        self.vel += impulse * self.inv_mass;
        self.ang_vel += r.perp_dot(impulse) * self.inv_inertia;
    }

    /// Semi-implicit Euler step with multiplicative damping, then clears the
    /// accumulators.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static() {
            return;
        }

        let acc = self.force * self.inv_mass;
        self.vel += acc * dt;
        self.vel *= (1.0 - self.linear_damping * dt).max(0.0);
        self.pos += self.vel * dt;
        self.force = Vec2::ZERO;

        let ang_acc = self.torque * self.inv_inertia;
        self.ang_vel += ang_acc * dt;
        self.ang_vel *= (1.0 - self.angular_damping * dt).max(0.0);
        self.angle += self.ang_vel * dt;
        self.torque = 0.0;
    }

    pub fn kinetic_energy(&self) -> f32 {
        if self.is_static() {
            return 0.0;
        }
        let inertia = self.shape.inertia(self.mass);
        0.5 * self.mass * self.vel.length_squared() + 0.5 * inertia * self.ang_vel * self.ang_vel
    }
}

/// Borrows two distinct bodies mutably. `None` if `i == j` or either is out of range.
pub(crate) fn body_pair_mut(
    bodies: &mut [RigidBody2D],
    i: usize,
    j: usize,
) -> Option<(&mut RigidBody2D, &mut RigidBody2D)> {
    if i == j || i >= bodies.len() || j >= bodies.len() {
        return None;
    }
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
