use approx::assert_abs_diff_eq;
use rigid2d::{
    DistanceJoint, Material, RigidBody2D, RopeConstraint, SimulationConfig, Spring, Vec2, World,
};

const DT: f32 = 1.0 / 60.0;

fn run(world: &mut World, steps: usize) {
    for _ in 0..steps {
        world.step(DT);
    }
}

#[test]
fn test_dead_ball_stops_on_ground() {
    let mut world = World::builder()
        .circle_ground_material(Material::new(0.0, 0.6))
        .build()
        .unwrap();
    let ball = world.add_body(RigidBody2D::circle(Vec2::new(0.5, 1.0), 0.5, 1.0));
    run(&mut world, 300);

    let ball = world.body(ball).unwrap();
    assert_abs_diff_eq!(ball.pos.y, -2.5, epsilon = 1e-3);
    assert!(ball.vel.length() < 1e-2);
}

#[test]
fn test_box_stacks_on_static_box() {
    let mut world = World::new();
    let floor = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, -3.0), 6.0, 1.0, 0.0));
    let crate_ = world.add_body(RigidBody2D::rectangle(Vec2::ZERO, 1.0, 1.0, 1.0));
    run(&mut world, 300);

    assert_eq!(world.body(floor).unwrap().pos, Vec2::new(0.0, -3.0));
    let crate_ = world.body(crate_).unwrap();
    assert_abs_diff_eq!(crate_.pos.y, -2.0, epsilon = 0.02);
    assert!(crate_.angle.abs() < 0.05);
    assert!(crate_.vel.length() < 0.05);
}

#[test]
fn test_offset_box_tips_off_its_support() {
    let mut world = World::new();
    world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, -3.0), 1.0, 1.0, 0.0));
    let crate_ = world.add_body(RigidBody2D::rectangle(Vec2::new(0.8, 0.0), 1.0, 1.0, 1.0));
    run(&mut world, 300);

    // rolled off the right edge and came to rest on the ground
    let crate_ = world.body(crate_).unwrap();
    assert!(crate_.pos.x > 1.0);
    assert_abs_diff_eq!(crate_.pos.y, -2.5, epsilon = 0.05);
    assert!(crate_.vel.length() < 0.05);
}

#[test]
fn test_distance_joint_holds_length_while_bodies_fly() {
    let mut world = World::new();
    let a = world.add_body(RigidBody2D::rectangle(Vec2::new(-2.0, 0.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(2.0, 1.0)));
    let b = world.add_body(RigidBody2D::rectangle(Vec2::new(2.0, 0.0), 1.0, 1.0, 1.0).with_velocity(Vec2::new(0.0, -2.0)));
    world.add_constraint(DistanceJoint::new(a, b, 4.0, 1.0)).unwrap();

    for _ in 0..300 {
        world.step(DT);
        let d = world.body(b).unwrap().pos - world.body(a).unwrap().pos;
        assert_abs_diff_eq!(d.length(), 4.0, epsilon = 1e-3);
    }
}

#[test]
fn test_rope_chain_hangs_without_breaking() {
    let mut world = World::new();
    let anchor = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 3.0), 0.6, 0.6, 0.0));
    let b1 = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 2.0), 0.6, 0.6, 1.0));
    let b2 = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 1.0), 0.3, 0.3, 0.5));
    let b3 = world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 0.0), 1.0, 1.0, 5.0));
    let chain = [anchor, b1, b2, b3];
    for pair in chain.windows(2) {
        world
            .add_constraint(RopeConstraint::breakable(pair[0], pair[1], 1.0, 0.15))
            .unwrap();
    }

    for _ in 0..300 {
        world.step(DT);
        for pair in chain.windows(2) {
            let d = world.body(pair[1]).unwrap().pos - world.body(pair[0]).unwrap().pos;
            assert!(d.length() < 1.15);
        }
    }
    assert_eq!(world.constraints().len(), 3);
    assert!(world.constraints().iter().all(|c| !c.is_broken()));
    assert_eq!(world.body(anchor).unwrap().pos, Vec2::new(0.0, 3.0));
}

#[test]
fn test_overloaded_rope_snaps_and_load_falls() {
    let mut world = World::new();
    let anchor = world.add_body(RigidBody2D::circle(Vec2::new(0.0, 2.0), 0.1, 0.0));
    // already stretched past the threshold
    let load = world.add_body(RigidBody2D::circle(Vec2::new(0.0, 0.5), 0.3, 1.0));
    world
        .add_constraint(RopeConstraint::breakable(anchor, load, 1.0, 0.15))
        .unwrap();

    world.step(DT);
    assert!(world.constraints().is_empty());
    run(&mut world, 300);
    assert_abs_diff_eq!(world.body(load).unwrap().pos.y, -2.7, epsilon = 1e-2);
}

#[test]
fn test_spring_damper_settles_at_rest_length() {
    let mut world = World::builder().gravity(Vec2::ZERO).without_ground().build().unwrap();
    let anchor = world.add_body(RigidBody2D::rectangle(Vec2::new(-2.0, 0.0), 0.2, 0.2, 0.0));
    let weight = world.add_body(RigidBody2D::rectangle(Vec2::new(2.0, 0.0), 1.0, 1.0, 2.0));
    world.add_spring(Spring::new(anchor, weight, 20.0, 2.0, 1.0)).unwrap();
    run(&mut world, 600);

    let d = world.body(weight).unwrap().pos - world.body(anchor).unwrap().pos;
    assert_abs_diff_eq!(d.length(), 1.0, epsilon = 0.02);
    assert!(world.body(weight).unwrap().vel.length() < 0.1);
}

#[test]
fn test_thrown_circles_end_up_resting_on_ground() {
    let mut world = World::new();
    let throws = [
        (Vec2::new(-2.0, 2.0), 2.0, Vec2::new(4.0, -5.0)),
        (Vec2::new(2.0, 2.0), 2.0, Vec2::new(-6.0, -5.0)),
        (Vec2::new(-0.5, 2.69), 5.0, Vec2::new(3.0, -4.5)),
    ];
    for (pos, mass, vel) in throws {
        world.add_body(RigidBody2D::circle(pos, 0.4, mass).with_velocity(vel));
    }
    run(&mut world, 600);

    for ball in world.bodies() {
        assert_abs_diff_eq!(ball.pos.y, -2.6, epsilon = 1e-2);
        assert!(ball.vel.length() < 0.05);
    }
}

#[test]
fn test_energy_does_not_grow_without_gravity() {
    let config: SimulationConfig = serde_json::from_str(r#"{ "gravity": [0.0, 0.0], "ground_y": null }"#).unwrap();
    let mut world = World::with_config(config).unwrap();
    world.add_body(RigidBody2D::circle(Vec2::new(-2.0, 0.1), 0.5, 1.0).with_velocity(Vec2::new(4.0, 0.0)));
    world.add_body(RigidBody2D::rectangle(Vec2::new(0.0, 0.0), 1.0, 1.0, 2.0));
    world.add_body(RigidBody2D::circle(Vec2::new(2.0, -0.2), 0.4, 1.0));

    let mut last = world.kinetic_energy();
    for _ in 0..240 {
        world.step(DT);
        let energy = world.kinetic_energy();
        assert!(energy <= last + 1e-4);
        last = energy;
    }
}
