use super::{rand_cell, rand_weights};
use approx::assert_relative_eq;
use na::{Point3, Vector3, Vector4};
use tetragrav::shape::{GravityCell, GravityPoint};

#[test]
fn gravity_at_vertices_matches_samples() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..200 {
        let cell = rand_cell(&mut rng);

        for (i, v) in cell.vertices().iter().enumerate() {
            let gravity = cell.interpolate_gravity(&Vector4::ith(i, 1.0));
            assert_relative_eq!(gravity, v.gravity(), epsilon = 1.0e-5);
        }
    }
}

#[test]
fn magnitude_is_the_weighted_force_factor() {
    let mut rng = oorandom::Rand32::new(11);
    let direction = Vector3::new(0.3, -2.0, 0.1);

    for _ in 0..200 {
        let random = rand_cell(&mut rng);
        let [a, b, c, d] = random
            .vertices()
            .map(|v| GravityPoint::new(v.position, direction, v.force_factor));
        let cell = GravityCell::new(a, b, c, d);

        let weights = rand_weights(&mut rng);
        let force_factors =
            Vector4::new(a.force_factor, b.force_factor, c.force_factor, d.force_factor);
        let expected = force_factors.dot(&weights);
        let gravity = cell.interpolate_gravity(&weights);

        assert_relative_eq!(gravity.norm(), expected, epsilon = 1.0e-3);
        assert_relative_eq!(
            gravity.normalize(),
            direction.normalize(),
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn neighbor_cells_agree_on_their_shared_face() {
    let mut rng = oorandom::Rand32::new(77);
    let mut num_checked = 0;

    for _ in 0..100 {
        let cell = rand_cell(&mut rng);
        let [a, b, c, d] = *cell.vertices();
        // Reflect `d` through the face `abc` to build the neighbor cell.
        let face_center =
            Point3::from((a.position.coords + b.position.coords + c.position.coords) / 3.0);
        let mirrored = GravityPoint::new(
            face_center + (face_center - d.position),
            -d.direction,
            d.force_factor * 2.0,
        );
        let neighbor = GravityCell::new(a, b, c, mirrored);

        let w = rand_weights(&mut rng);
        let on_face = Vector4::new(w.x, w.y, w.z + w.w, 0.0);
        let pt = cell.to_cartesian(&on_face);

        let lhs = cell.try_interpolate_gravity(&cell.to_barycentric(&pt));
        let rhs = neighbor.try_interpolate_gravity(&neighbor.to_barycentric(&pt));

        if let (Some(lhs), Some(rhs)) = (lhs, rhs) {
            // Skip the ill-conditioned configurations where the blended direction almost vanishes.
            let blended =
                a.direction * on_face.x + b.direction * on_face.y + c.direction * on_face.z;
            if blended.norm() > 0.1 {
                assert_relative_eq!(lhs, rhs, epsilon = 1.0e-2);
                num_checked += 1;
            }
        }
    }

    assert!(num_checked >= 50, "only {num_checked} shared face points were checked");
}

#[test]
fn gravity_at_inside_point() {
    let down = -Vector3::y();
    let cell = GravityCell::new(
        GravityPoint::new(Point3::new(0.0, 0.0, 0.0), down, 2.0),
        GravityPoint::new(Point3::new(1.0, 0.0, 0.0), down, 4.0),
        GravityPoint::new(Point3::new(0.0, 1.0, 0.0), down, 6.0),
        GravityPoint::new(Point3::new(0.0, 0.0, 1.0), down, 8.0),
    );

    let gravity = cell.gravity_at(&Point3::new(0.25, 0.25, 0.25)).unwrap();
    assert_relative_eq!(gravity, down * 5.0, epsilon = 1.0e-5);
}
