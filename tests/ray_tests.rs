mod common;

use common::{approx, approx_vec, vertical_wall, wall};
use macroquad::color::{BLUE, GREEN, RED};
use macroquad::math::vec2;
use rayarena::{Ray, RayHeading, Wall};

const REACH: f32 = 1000.0;

#[test]
fn single_wall_scenario() {
    let walls = [vertical_wall(10.0, -5.0, 5.0)];
    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &walls);

    assert_eq!(ray.intersections().len(), 1);
    let nearest = ray.nearest_intersection().expect("wall ahead");
    assert!(approx_vec(nearest.pt, vec2(10.0, 0.0)));
    assert!(approx(ray.nearest_hit().unwrap().distance, 10.0));

    assert!(ray.can_see_point(vec2(5.0, 0.0)));
    assert!(!ray.can_see_point(vec2(15.0, 0.0)));
}

#[test]
fn visibility_follows_blocking_wall() {
    let origin = vec2(50.0, 50.0);
    let target = vec2(150.0, 120.0);
    let dir = (target - origin).normalize();
    let perp = vec2(-dir.y, dir.x);
    let midpoint = origin.lerp(target, 0.5);
    let blocker = Wall::new(midpoint - perp * 20.0, midpoint + perp * 20.0);

    let mut ray = Ray::with_walls(origin, RayHeading::LookAt(target), REACH, &[blocker]);
    assert!(!ray.can_see_point(target));

    ray.recalculate_intersections(&[]);
    assert!(ray.can_see_point(target));
}

#[test]
fn walls_beyond_target_do_not_block() {
    let origin = vec2(0.0, 0.0);
    let target = vec2(0.0, 30.0);
    let walls = [wall(-5.0, 40.0, 5.0, 40.0), wall(-5.0, 80.0, 5.0, 80.0)];
    let ray = Ray::with_walls(origin, RayHeading::LookAt(target), REACH, &walls);

    assert_eq!(ray.intersections().len(), 2);
    assert!(ray.can_see_point(target));
    assert!(!ray.can_see_point(vec2(0.0, 50.0)));
}

#[test]
fn nearest_is_minimum_distance() {
    let walls = [
        Wall::with_color(vec2(70.0, -10.0), vec2(70.0, 10.0), RED),
        Wall::with_color(vec2(25.0, -10.0), vec2(35.0, 10.0), GREEN),
        Wall::with_color(vec2(50.0, -10.0), vec2(50.0, 10.0), BLUE),
    ];
    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &walls);

    let nearest = ray.nearest_intersection().unwrap();
    let best = ray
        .intersections()
        .iter()
        .map(|i| i.pt.length())
        .fold(f32::INFINITY, f32::min);
    assert_eq!(nearest.pt.length(), best);
    assert_eq!(nearest.color, GREEN);
    assert_eq!(nearest.wall, 1);
}

#[test]
fn nearest_tie_keeps_first_wall() {
    // Both walls pass through (20, 0)
    let first = Wall::with_color(vec2(20.0, -8.0), vec2(20.0, 8.0), BLUE);
    let second = Wall::with_color(vec2(12.0, -8.0), vec2(28.0, 8.0), RED);

    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), 200.0, &[first, second]);
    assert_eq!(ray.nearest_intersection().unwrap().color, BLUE);

    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), 200.0, &[second, first]);
    assert_eq!(ray.nearest_intersection().unwrap().color, RED);
}

#[test]
fn no_walls_means_no_hit() {
    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(1.0), REACH, &[]);
    assert!(ray.nearest_intersection().is_none());
    assert!(ray.can_see_point(vec2(3.0, 4.0)));
}

#[test]
fn hits_reflect_only_last_wall_set() {
    let walls = [vertical_wall(10.0, -5.0, 5.0)];
    let mut ray = Ray::new(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH);
    assert!(ray.nearest_intersection().is_none());

    ray.recalculate_intersections(&walls);
    assert!(ray.nearest_intersection().is_some());

    // Moving the origin keeps the old hits until recalculated
    ray.set_position(vec2(20.0, 0.0));
    assert!(ray.nearest_intersection().is_some());
    ray.recalculate_intersections(&walls);
    assert!(ray.nearest_intersection().is_none());
}

#[test]
fn look_at_uses_atan2_of_delta() {
    let mut ray = Ray::new(vec2(10.0, 10.0), RayHeading::Angle(0.0), 10.0);
    ray.look_at(vec2(0.0, 0.0));
    assert!(approx(ray.heading(), -3.0 * std::f32::consts::FRAC_PI_4));
    assert!(approx_vec(ray.far_end(), vec2(10.0 - 50f32.sqrt(), 10.0 - 50f32.sqrt())));
}

#[test]
fn zero_length_wall_is_never_hit() {
    let point = wall(10.0, 0.0, 10.0, 0.0);
    let walls = [point, vertical_wall(20.0, -5.0, 5.0)];
    let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &walls);

    // The ray passes exactly through the degenerate wall
    assert_eq!(ray.intersections().len(), 1);
    assert_eq!(ray.intersections()[0].wall, 1);
    assert!(ray.can_see_point(vec2(15.0, 0.0)));
}
