use rigid2d::{
    BodyHandle, DistanceJoint, PhysicsError, RigidBody2D, RopeConstraint, Spring, Vec2, World,
};

const DT: f32 = 1.0 / 60.0;

type Scenario = fn() -> Result<World, PhysicsError>;

fn main() -> Result<(), PhysicsError> {
    // Pass a scenario name to run just that one
    let filter = std::env::args().nth(1);

    let scenarios: [(&str, Scenario); 9] = [
        ("circles", circles),
        ("box_on_box", box_on_box),
        ("box_impulse", box_impulse),
        ("offset_drop", offset_drop),
        ("distance_joint", distance_joint),
        ("rope_chain", rope_chain),
        ("vertical_spring", vertical_spring),
        ("spring_damper", spring_damper),
        ("circle_throw", circle_throw),
    ];

    for (name, build) in scenarios {
        if filter.as_deref().is_some_and(|f| f != name) {
            continue;
        }

        let mut world = build()?;
        // Run 5 simulated seconds
        for _ in 0..300 {
            world.step(DT);
        }

        println!("== {name} ({} constraints left)", world.constraints().len());
        for (i, body) in world.bodies().iter().enumerate() {
            println!(
                "  #{i} pos=({:7.3}, {:7.3}) vel=({:7.3}, {:7.3}) angle={:6.3}",
                body.pos.x, body.pos.y, body.vel.x, body.vel.y, body.angle
            );
        }
        println!("  kinetic energy {:.4}", world.kinetic_energy());
    }

    Ok(())
}

fn circles() -> Result<World, PhysicsError> {
    let mut world = World::new();
    world.add_body(RigidBody2D::circle(Vec2::new(-1.0, 3.0), 0.25, 1.0).with_velocity(Vec2::new(2.0, -1.0)));
    world.add_body(RigidBody2D::circle(Vec2::new(-1.0, 2.1), 0.25, 1.0).with_velocity(Vec2::new(2.0, 0.0)));
    Ok(world)
}

fn box_on_box() -> Result<World, PhysicsError> {
    let mut world = World::new();
    world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, -3.0), 6.0, 1.0, 0.0));
    world.add_body(RigidBody2D::rectangle(Vec2::ZERO, 1.0, 1.0, 1.0));
    Ok(world)
}

fn box_impulse() -> Result<World, PhysicsError> {
    let mut world = World::new();
    world.add_body(RigidBody2D::rectangle(Vec2::new(-2.0, -2.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(7.0, 4.0)));
    world.add_body(RigidBody2D::rectangle(Vec2::new(1.0, -2.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(0.0, 2.0)));
    Ok(world)
}

fn offset_drop() -> Result<World, PhysicsError> {
    let mut world = World::new();
    world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, -3.0), 1.0, 1.0, 0.0));
    world.add_body(RigidBody2D::rectangle(Vec2::new(0.8, 0.0), 1.0, 1.0, 1.0));
    Ok(world)
}

fn distance_joint() -> Result<World, PhysicsError> {
    let mut world = World::new();
    let a = world.add_body(RigidBody2D::rectangle(Vec2::new(-2.0, 0.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(2.0, 1.0)));
    let b = world.add_body(RigidBody2D::rectangle(Vec2::new(2.0, 0.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(0.0, -2.0)));
    world.add_constraint(DistanceJoint::new(a, b, 4.0, 1.0))?;
    Ok(world)
}

fn rope_chain() -> Result<World, PhysicsError> {
    let mut world = World::new();
    let anchor = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 3.0), 0.6, 0.6, 0.0));
    let links: Vec<BodyHandle> = [
        RigidBody2D::rectangle(Vec2::new(0.0, 2.0), 0.6, 0.6, 1.0),
        RigidBody2D::rectangle(Vec2::new(0.0, 1.0), 0.3, 0.3, 0.5),
        RigidBody2D::rectangle(Vec2::new(0.0, 0.0), 1.0, 1.0, 5.0),
    ]
    .into_iter()
    .map(|body| world.add_body(body))
    .collect();

    let mut prev = anchor;
    for link in links {
        world.add_constraint(RopeConstraint::breakable(prev, link, 1.0, 0.15))?;
        prev = link;
    }
    Ok(world)
}

fn vertical_spring() -> Result<World, PhysicsError> {
    let mut world = World::new();
    let anchor = world.add_body(RigidBody2D::circle(Vec2::new(0.0, 3.0), 0.1, 0.0));
    let weight = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 1.0), 1.0, 1.0, 4.0));
    world.add_spring(Spring::new(anchor, weight, 20.0, 2.0, 2.0))?;
    Ok(world)
}

fn spring_damper() -> Result<World, PhysicsError> {
    let mut world = World::new();
    let anchor = world.add_body(RigidBody2D::rectangle(Vec2::new(-2.0, 0.0), 0.2, 0.2, 0.0));
    let weight = world.add_body(RigidBody2D::rectangle(Vec2::new(2.0, 0.0), 1.0, 1.0, 2.0));
    world.add_spring(Spring::new(anchor, weight, 20.0, 2.0, 1.0))?;
    Ok(world)
}

fn circle_throw() -> Result<World, PhysicsError> {
    let mut world = World::new();
    world.add_body(RigidBody2D::circle(Vec2::new(-2.0, 2.0), 0.4, 2.0).with_velocity(Vec2::new(4.0, -5.0)));
    world.add_body(RigidBody2D::circle(Vec2::new(2.0, 2.0), 0.4, 2.0).with_velocity(Vec2::new(-6.0, -5.0)));
    world.add_body(RigidBody2D::circle(Vec2::new(-0.5, 2.69), 0.4, 5.0).with_velocity(Vec2::new(3.0, -4.5)));
    Ok(world)
}
