use rigid2d::{RigidBody2D, RopeConstraint, SimulationConfig, Spring, Vec2, WorldBuilder};

// Anything left out keeps its default value
const CONFIG: &str = r#"{
    "gravity": [0.0, -9.81],
    "substeps": 10,
    "ground_y": -3.0,
    "circle_ground": { "restitution": 0.4, "friction": 0.6 }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: SimulationConfig = serde_json::from_str(CONFIG)?;
    let mut world = WorldBuilder::from_config(config).build()?;

    // Static shelf with a ball rolling off it
    world.add_body(RigidBody2D::rectangle(Vec2::new(-1.5, 0.0), 3.0, 0.3, 0.0).with_angle(-0.2));
    world.add_body(RigidBody2D::circle(Vec2::new(-2.5, 0.8), 0.3, 1.0));

    // Pendulum on a rope next to a spring-loaded crate
    let anchor = world.add_body(RigidBody2D::circle(Vec2::new(2.0, 2.5), 0.1, 0.0));
    let bob = world.add_body(RigidBody2D::circle(Vec2::new(3.2, 2.5), 0.25, 2.0));
    world.add_constraint(RopeConstraint::new(anchor, bob, 1.2))?;

    let crate_ = world.add_body(RigidBody2D::rectangle(Vec2::new(1.0, -1.0), 0.8, 0.8, 3.0));
    world.add_spring(Spring::new(anchor, crate_, 40.0, 4.0, 3.0))?;

    for frame in 0..600 {
        world.step(1.0 / 60.0);
        if frame % 60 == 0 {
            println!("t={:4.1}s kinetic energy {:.4}", frame as f32 / 60.0, world.kinetic_energy());
        }
    }

    for body in world.bodies() {
        println!("{:?} at ({:.3}, {:.3})", body.shape(), body.pos.x, body.pos.y);
    }
    Ok(())
}
