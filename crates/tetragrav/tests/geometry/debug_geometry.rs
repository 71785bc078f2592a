use na::{Point3, Vector3};
use tetragrav::debug::{DebugColor, DebugRenderer};
use tetragrav::shape::{GravityCell, GravityPoint};

#[derive(Default)]
struct LineCounter {
    count: usize,
    total_length: f32,
    depth_tested: usize,
}

impl DebugRenderer for LineCounter {
    fn add_line(&mut self, a: &Point3<f32>, b: &Point3<f32>, _: DebugColor, depth_test: bool) {
        self.count += 1;
        self.total_length += na::distance(a, b);
        if depth_test {
            self.depth_tested += 1;
        }
    }
}

#[test]
fn draws_six_edges() {
    let up = Vector3::y();
    let cell = GravityCell::new(
        GravityPoint::new(Point3::new(0.0, 0.0, 0.0), up, 1.0),
        GravityPoint::new(Point3::new(1.0, 0.0, 0.0), up, 1.0),
        GravityPoint::new(Point3::new(0.0, 1.0, 0.0), up, 1.0),
        GravityPoint::new(Point3::new(0.0, 0.0, 1.0), up, 1.0),
    );

    let mut counter = LineCounter::default();
    cell.draw_debug_geometry(&mut counter, false, DebugColor::YELLOW);

    assert_eq!(counter.count, 6);
    assert_eq!(counter.depth_tested, 0);
    approx::assert_relative_eq!(
        counter.total_length,
        3.0 + 3.0 * 2.0f32.sqrt(),
        epsilon = 1.0e-5
    );
}
