extern crate nalgebra as na;

use na::{Point3, Vector3};
use tetragrav::debug::{DebugColor, DebugLines};
use tetragrav::shape::{GravityCell, GravityPoint};

fn main() {
    // A cell sitting on top of a planet centered at (0, -10, 0): gravity points toward
    // the planet center and weakens with altitude.
    let planet_center = Point3::new(0.0, -10.0, 0.0);
    let sample = |x: f32, y: f32, z: f32| {
        let position = Point3::new(x, y, z);
        let to_center = planet_center - position;
        GravityPoint::new(position, to_center, 1000.0 / to_center.norm_squared())
    };

    let cell = GravityCell::try_new(
        sample(-1.0, 0.0, -1.0),
        sample(1.0, 0.0, -1.0),
        sample(0.0, 0.0, 1.0),
        sample(0.0, 2.0, 0.0),
    )
    .expect("the samples are not coplanar");

    for pt in [
        Point3::new(0.0, 0.5, 0.0),
        cell.center(),
        Point3::new(0.0, 5.0, 0.0),
    ] {
        let bcoords = cell.to_barycentric(&pt);
        match cell.gravity_at(&pt) {
            Some(gravity) => println!(
                "gravity at {:?} (barycentric {:?}): {:?}",
                pt,
                bcoords.as_slice(),
                gravity.as_slice()
            ),
            None => println!("{:?} is outside of the cell", pt),
        }
    }

    let surface_gravity = cell.interpolate_gravity(&na::Vector4::new(0.5, 0.5, 0.0, 0.0));
    assert!(surface_gravity.dot(&Vector3::y()) < 0.0);

    let mut lines = DebugLines::new();
    cell.draw_debug_geometry(&mut lines, true, DebugColor::GREEN);
    println!("debug geometry: {} lines", lines.lines.len());
}
