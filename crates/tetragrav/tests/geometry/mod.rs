use na::{Point3, Vector3};
use tetragrav::shape::{GravityCell, GravityPoint};

mod debug_geometry;
mod gravity_cell_interpolation;

pub fn rand_point(rng: &mut oorandom::Rand32, half_extent: f32) -> Point3<f32> {
    Point3::from(Vector3::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * half_extent))
}

/// Generates a random, reasonably well-shaped, gravity cell.
pub fn rand_cell(rng: &mut oorandom::Rand32) -> GravityCell {
    loop {
        let samples = [(); 4].map(|_| {
            GravityPoint::new(
                rand_point(rng, 5.0),
                rand_point(rng, 1.0).coords,
                rng.rand_float() * 20.0,
            )
        });
        let [a, b, c, d] = samples;

        if let Ok(cell) = GravityCell::try_new(a, b, c, d) {
            let longest_edge = GravityCell::EDGES
                .iter()
                .map(|(i, j)| (cell.vertex_position(*j) - cell.vertex_position(*i)).norm())
                .fold(0.0, f32::max);

            if cell.volume() >= 0.02 * longest_edge.powi(3) {
                return cell;
            }
        }
    }
}

/// Random non-negative barycentric coordinates summing to one.
pub fn rand_weights(rng: &mut oorandom::Rand32) -> na::Vector4<f32> {
    let w = na::Vector4::from_fn(|_, _| rng.rand_float() + 1.0e-3);
    w / w.sum()
}
