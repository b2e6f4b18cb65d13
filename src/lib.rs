//! A small 2D rigid-body physics core: circles and oriented boxes, a ground plane,
//! ropes, distance joints and damped springs, stepped with substeps and a sequential
//! impulse solver.
//!
//! # Example
//! ```rust
//! use rigid2d::{RigidBody2D, RopeConstraint, Vec2, World};
//!
//! let mut world = World::builder().substeps(8).iterations(10).build().unwrap();
//! let anchor = world.add_body(RigidBody2D::circle(Vec2::new(0.0, 2.0), 0.1, 0.0));
//! let ball = world.add_body(RigidBody2D::circle(Vec2::new(1.0, 2.0), 0.3, 1.0));
//! world.add_constraint(RopeConstraint::new(anchor, ball, 1.5)).unwrap();
//!
//! for _ in 0..120 {
//!     world.step(1.0 / 60.0);
//! }
//! let ball = world.body(ball).unwrap();
//! assert!((ball.pos - Vec2::new(0.0, 2.0)).length() <= 1.5 + 1e-3);
//! ```

pub mod collision;
pub mod config;
pub mod constraint;
pub mod error;
pub mod geometry;
pub mod math;
pub mod properties;
pub mod world;

pub use config::SimulationConfig;
pub use constraint::{Constraint, DistanceJoint, RopeConstraint, Spring};
pub use error::PhysicsError;
pub use math::{Vec2, Vec2Ext};
pub use properties::{BodyHandle, Material, RigidBody2D, Shape};
pub use world::{World, WorldBuilder};
