use glam::Vec2;

use crate::{
    collision::{
        resolve_box_box, resolve_box_ground, resolve_circle_box, resolve_circle_circle,
        resolve_circle_ground,
    },
    config::SimulationConfig,
    constraint::{Constraint, Spring},
    error::PhysicsError,
    properties::{body_pair_mut, BodyHandle, Material, RigidBody2D, Shape},
};

/// Owns every body, constraint and spring of a simulation and advances them in
/// fixed substeps.
///
/// The solver is a sequential impulse method: each resolution reads the velocities
/// left by the previous one, so bodies and constraints are always visited in
/// insertion order.
#[derive(Debug)]
pub struct World {
    bodies: Vec<RigidBody2D>,
    constraints: Vec<Box<dyn Constraint>>,
    springs: Vec<Spring>,
    config: SimulationConfig,
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    /// An empty world with the default configuration.
    pub fn new() -> Self {
        Self {
            bodies: vec![],
            constraints: vec![],
            springs: vec![],
            config: SimulationConfig::default(),
        }
    }

    pub fn with_config(config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Height of the ground half-plane, shared by the solver and anything drawing it.
    pub fn ground_y(&self) -> Option<f32> {
        self.config.ground_y
    }

    pub fn bodies(&self) -> &[RigidBody2D] {
        &self.bodies
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody2D> {
        self.bodies.get(handle.index())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody2D> {
        self.bodies.get_mut(handle.index())
    }

    pub fn add_body(&mut self, body: RigidBody2D) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn add_constraint(&mut self, constraint: impl Constraint + 'static) -> Result<(), PhysicsError> {
        let (a, b) = constraint.bodies();
        self.check_coupling(a, b)?;
        self.constraints.push(Box::new(constraint));
        Ok(())
    }

    pub fn add_spring(&mut self, spring: Spring) -> Result<(), PhysicsError> {
        self.check_coupling(spring.a, spring.b)?;
        self.springs.push(spring);
        Ok(())
    }

    fn check_coupling(&self, a: BodyHandle, b: BodyHandle) -> Result<(), PhysicsError> {
        for handle in [a, b] {
            if handle.index() >= self.bodies.len() {
                return Err(PhysicsError::UnknownBody(handle));
            }
        }
        if a == b {
            return Err(PhysicsError::SelfCoupling(a));
        }
        Ok(())
    }

    /// Advances the simulation by `dt` seconds in `substeps` equal substeps.
    pub fn step(&mut self, dt: f32) {
        let substeps = self.config.substeps.max(1);
        let dt_sub = dt / substeps as f32;

        log::trace!(
            "step dt={dt} substeps={substeps} bodies={} constraints={}",
            self.bodies.len(),
            self.constraints.len()
        );

        for _ in 0..substeps {
            self.apply_forces();

            for body in self.bodies.iter_mut() {
                body.integrate(dt_sub);
            }

            for constraint in self.constraints.iter_mut() {
                constraint.pre_solve(&mut self.bodies, dt_sub);
            }

            for _ in 0..self.config.iterations {
                self.resolve_ground_contacts();
                self.resolve_body_pairs();
                self.solve_constraints();
            }

            self.prune_constraints();
        }
    }

    /// Gravity on every dynamic body, then spring forces.
    fn apply_forces(&mut self) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            if body.is_static() {
                continue;
            }
            let weight = gravity * body.mass();
            body.apply_force(weight);
        }

        for spring in self.springs.iter() {
            spring.apply(&mut self.bodies);
        }
    }

    fn resolve_ground_contacts(&mut self) {
        let Some(ground_y) = self.config.ground_y else {
            return;
        };
        let max_ang_vel = self.config.max_angular_velocity;

        for body in self.bodies.iter_mut() {
            match body.shape() {
                Shape::Circle { .. } => {
                    if resolve_circle_ground(body, ground_y, self.config.circle_ground) {
                        body.ang_vel = body.ang_vel.clamp(-max_ang_vel, max_ang_vel);
                    }
                }
                Shape::Box { .. } => resolve_box_ground(
                    body,
                    ground_y,
                    self.config.box_ground,
                    self.config.box_ground_epsilon,
                ),
            }
        }
    }

    /// Every unordered pair `i < j` once, in list order.
    fn resolve_body_pairs(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let Some((a, b)) = body_pair_mut(&mut self.bodies, i, j) else {
                    continue;
                };
                resolve_pair(a, b, &self.config);
            }
        }
    }

    /// One pass over all constraints in insertion order.
    pub fn solve_constraints(&mut self) {
        for constraint in self.constraints.iter_mut() {
            constraint.solve(&mut self.bodies);
        }
    }

    /// Drops broken constraints, keeping the order of the rest. Returns how many were
    /// removed.
    pub fn prune_constraints(&mut self) -> usize {
        let before = self.constraints.len();
        self.constraints.retain(|c| !c.is_broken());
        let removed = before - self.constraints.len();
        if removed > 0 {
            log::debug!("removed {removed} broken constraint(s)");
        }
        removed
    }

    /// Total kinetic energy of all dynamic bodies.
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(RigidBody2D::kinetic_energy).sum()
    }
}

/// Narrow phase for one body pair, dispatched on both shapes.
fn resolve_pair(a: &mut RigidBody2D, b: &mut RigidBody2D, config: &SimulationConfig) {
    match (a.shape(), b.shape()) {
        (Shape::Circle { .. }, Shape::Circle { .. }) => {
            resolve_circle_circle(a, b, config.circle_circle)
        }
        (Shape::Box { .. }, Shape::Box { .. }) => {
            resolve_box_box(a, b, config.box_box, config.box_box_iterations)
        }
        (Shape::Circle { .. }, Shape::Box { .. }) => resolve_circle_box(a, b, config.circle_box),
        (Shape::Box { .. }, Shape::Circle { .. }) => resolve_circle_box(b, a, config.circle_box),
    }
}

/// Builder for [`World`]
pub struct WorldBuilder {
    config: SimulationConfig,
}

impl WorldBuilder {
    /// Get a Instance of `WorldBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Acceleration applied to every dynamic body.
    /// Default is `(0.0, -9.81)`
    pub fn gravity(mut self, gravity: Vec2) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// How many substeps a call to `step` is split into.
    /// More substeps give stiffer contacts and ropes at a higher cost.
    pub fn substeps(mut self, substeps: u32) -> Self {
        self.config.substeps = substeps;
        self
    }

    /// How many times per substep ground contacts, body pairs and constraints are
    /// resolved.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Height of the ground half-plane.
    pub fn ground(mut self, ground_y: f32) -> Self {
        self.config.ground_y = Some(ground_y);
        self
    }

    /// Remove the ground, bodies fall forever.
    pub fn without_ground(mut self) -> Self {
        self.config.ground_y = None;
        self
    }

    pub fn circle_ground_material(mut self, material: Material) -> Self {
        self.config.circle_ground = material;
        self
    }

    pub fn box_ground_material(mut self, material: Material) -> Self {
        self.config.box_ground = material;
        self
    }

    pub fn circle_circle_material(mut self, material: Material) -> Self {
        self.config.circle_circle = material;
        self
    }

    pub fn box_box_material(mut self, material: Material) -> Self {
        self.config.box_box = material;
        self
    }

    pub fn circle_box_material(mut self, material: Material) -> Self {
        self.config.circle_box = material;
        self
    }

    /// Sequential impulse passes inside one box-box contact.
    pub fn box_box_iterations(mut self, iterations: u32) -> Self {
        self.config.box_box_iterations = iterations;
        self
    }

    /// Box corners closer than this to the ground are treated as touching it.
    pub fn box_ground_epsilon(mut self, epsilon: f32) -> Self {
        self.config.box_ground_epsilon = epsilon;
        self
    }

    /// Spin limit for circles in contact with the ground.
    /// Keeps the rolling friction from blowing up.
    pub fn max_angular_velocity(mut self, max_ang_vel: f32) -> Self {
        self.config.max_angular_velocity = max_ang_vel;
        self
    }

    /// Constructs a `World`, rejecting configurations the solver cannot run with.
    pub fn build(self) -> Result<World, PhysicsError> {
        World::with_config(self.config)
    }
}

impl Default for WorldBuilder {
    /// Get a Instance of `WorldBuilder` with default values
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}
