//! Definition of the gravity cell, a tetrahedron interpolating a gravity field.

use crate::debug::{DebugColor, DebugRenderer};
use crate::math::{
    BarycentricCoordinates, BarycentricTransform, Point, Real, Vector, DEFAULT_EPSILON,
    NUM_VERTICES,
};
use crate::shape::GravityPoint;
use approx::{AbsDiffEq, RelativeEq};
use na::{ComplexField, Matrix3};

const FLATNESS_TOLERANCE: Real = 1.0e3 * DEFAULT_EPSILON;

/// Error returned by [`GravityCell::try_new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GravityCellError {
    /// The position of the given vertex has a NaN or infinite coordinate.
    #[error("the position of the vertex {0} is not finite.")]
    NonFiniteVertex(usize),
    /// The four vertex positions are (almost) coplanar, so barycentric coordinates are not defined.
    #[error("the vertex positions are coplanar: the gravity cell has no volume.")]
    DegenerateTetrahedron,
}

/// A tetrahedral cell interpolating a gravity field sampled at its four vertices.
///
/// The cell caches the inverse of the matrix whose columns are the homogeneous
/// positions `(x, y, z, 1)` of its vertices. Multiplying a homogeneous point by
/// this transform yields its barycentric coordinates `(b0, b1, b2, b3)`, where
/// `bi` is the weight of the `i`-th vertex.
///
/// A gravity cell is immutable once built.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityCell {
    vertices: [GravityPoint; NUM_VERTICES],
    transform: BarycentricTransform,
}

impl GravityCell {
    /// The pairs of vertex indices of the six edges of a gravity cell.
    ///
    /// The 0-th edge is the segment `(0, 1)`.
    /// The 1-st edge is the segment `(0, 2)`.
    /// The 2-nd edge is the segment `(0, 3)`.
    /// The 3-rd edge is the segment `(1, 2)`.
    /// The 4-th edge is the segment `(1, 3)`.
    /// The 5-th edge is the segment `(2, 3)`.
    pub const EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    /// Creates a gravity cell from four gravity samples.
    ///
    /// The order of the samples defines the order of the barycentric coordinates.
    ///
    /// The four sample positions must not be coplanar. No error is reported: a degenerate
    /// cell, i.e., one that [`GravityCell::try_new`] would reject, gets a transform filled
    /// with NaNs, so every point is classified as outside of it.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use tetragrav::math::{Point, Vector};
    /// use tetragrav::shape::{GravityCell, GravityPoint};
    ///
    /// let down = Vector::new(0.0, -1.0, 0.0);
    /// let cell = GravityCell::new(
    ///     GravityPoint::new(Point::new(0.0, 0.0, 0.0), down, 9.81),
    ///     GravityPoint::new(Point::new(1.0, 0.0, 0.0), down, 9.81),
    ///     GravityPoint::new(Point::new(0.0, 1.0, 0.0), down, 9.81),
    ///     GravityPoint::new(Point::new(0.0, 0.0, 1.0), down, 9.81),
    /// );
    ///
    /// let bcoords = cell.to_barycentric(&Point::new(0.25, 0.25, 0.25));
    /// assert!(cell.contains(&bcoords));
    ///
    /// let gravity = cell.interpolate_gravity(&bcoords);
    /// assert!((gravity - down * 9.81).norm() < 1.0e-5);
    /// # }
    /// ```
    #[inline]
    pub fn new(p0: GravityPoint, p1: GravityPoint, p2: GravityPoint, p3: GravityPoint) -> Self {
        Self::from_array([p0, p1, p2, p3])
    }

    /// Creates a gravity cell from an array of four gravity samples.
    ///
    /// See [`GravityCell::new`] for details.
    pub fn from_array(vertices: [GravityPoint; NUM_VERTICES]) -> Self {
        let transform = Self::validate(&vertices)
            .and_then(|_| Self::barycentric_transform(&vertices))
            .unwrap_or_else(|err| {
                log::warn!(
                    "Building a degenerate gravity cell from {:?}, {:?}, {:?}, {:?}: {}",
                    vertices[0].position,
                    vertices[1].position,
                    vertices[2].position,
                    vertices[3].position,
                    err
                );
                BarycentricTransform::from_element(Real::NAN)
            });

        GravityCell {
            vertices,
            transform,
        }
    }

    /// Creates a gravity cell from four gravity samples, checking that it is not degenerate.
    ///
    /// Fails if any sample position is not finite, or if the four positions are coplanar.
    /// The cell is considered flat if its volume is smaller than `L^3` times a small
    /// tolerance (a thousand machine epsilons), `L` being the length of its longest edge.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use tetragrav::math::{Point, Vector};
    /// use tetragrav::shape::{GravityCell, GravityCellError, GravityPoint};
    ///
    /// let sample = |x, y, z| GravityPoint::new(Point::new(x, y, z), -Vector::y(), 1.0);
    ///
    /// // All four points lie on the `z = 0` plane.
    /// let flat = GravityCell::try_new(
    ///     sample(0.0, 0.0, 0.0),
    ///     sample(1.0, 0.0, 0.0),
    ///     sample(0.0, 1.0, 0.0),
    ///     sample(1.0, 1.0, 0.0),
    /// );
    /// assert_eq!(flat, Err(GravityCellError::DegenerateTetrahedron));
    /// # }
    /// ```
    pub fn try_new(
        p0: GravityPoint,
        p1: GravityPoint,
        p2: GravityPoint,
        p3: GravityPoint,
    ) -> Result<Self, GravityCellError> {
        let vertices = [p0, p1, p2, p3];

        Self::validate(&vertices).map_err(|err| {
            log::debug!("Rejected gravity cell: {}", err);
            err
        })?;
        let transform = Self::barycentric_transform(&vertices)?;

        Ok(GravityCell {
            vertices,
            transform,
        })
    }

    // Checks that the vertex positions are finite and span a non-flat tetrahedron.
    fn validate(vertices: &[GravityPoint; NUM_VERTICES]) -> Result<(), GravityCellError> {
        if let Some(i) = vertices
            .iter()
            .position(|v| !v.position.coords.iter().all(|e| e.is_finite()))
        {
            return Err(GravityCellError::NonFiniteVertex(i));
        }

        let longest_edge = Self::EDGES
            .iter()
            .map(|&(i, j)| (vertices[j].position - vertices[i].position).norm())
            .fold(0.0, Real::max);
        let volume = ComplexField::abs(Self::signed_volume_of(vertices));

        // Rounding alone gives coplanar points a volume of a few ulps of `longest_edge^3`.
        if volume <= FLATNESS_TOLERANCE * longest_edge * longest_edge * longest_edge {
            return Err(GravityCellError::DegenerateTetrahedron);
        }

        Ok(())
    }

    fn barycentric_transform(
        vertices: &[GravityPoint; NUM_VERTICES],
    ) -> Result<BarycentricTransform, GravityCellError> {
        // Maps barycentric coordinates to homogeneous cartesian coordinates.
        let to_cartesian =
            BarycentricTransform::from_columns(&vertices.map(|v| v.position.to_homogeneous()));
        to_cartesian
            .try_inverse()
            .ok_or(GravityCellError::DegenerateTetrahedron)
    }

    fn signed_volume_of(vertices: &[GravityPoint; NUM_VERTICES]) -> Real {
        let a = vertices[0].position;
        let ab = vertices[1].position - a;
        let ac = vertices[2].position - a;
        let ad = vertices[3].position - a;

        Matrix3::from_columns(&[ab, ac, ad]).determinant() / 6.0
    }

    /// The four gravity samples of this cell.
    #[inline]
    pub fn vertices(&self) -> &[GravityPoint; NUM_VERTICES] {
        &self.vertices
    }

    /// The `i`-th gravity sample of this cell.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn vertex(&self, i: usize) -> &GravityPoint {
        assert!(
            i < NUM_VERTICES,
            "Gravity cell vertex index out of bounds (must be < 4)."
        );
        &self.vertices[i]
    }

    /// The position of the `i`-th vertex of this cell.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn vertex_position(&self, i: usize) -> Point<Real> {
        self.vertex(i).position
    }

    /// The cached transform from homogeneous cartesian coordinates to barycentric coordinates.
    #[inline]
    pub fn transform(&self) -> &BarycentricTransform {
        &self.transform
    }

    /// Computes the barycentric coordinates of `pt` relative to this cell.
    ///
    /// The result always sums to one (up to rounding errors). It may have negative components
    /// if `pt` is outside of this cell.
    #[inline]
    pub fn to_barycentric(&self, pt: &Point<Real>) -> BarycentricCoordinates {
        self.transform * pt.to_homogeneous()
    }

    /// Computes the point with the given barycentric coordinates relative to this cell.
    ///
    /// The coordinates are not renormalized: if they don't sum to one, the result is
    /// the corresponding weighted sum of the vertex positions.
    #[inline]
    pub fn to_cartesian(&self, bcoords: &BarycentricCoordinates) -> Point<Real> {
        let [a, b, c, d] = &self.vertices;
        Point::from(
            a.position.coords * bcoords.x
                + b.position.coords * bcoords.y
                + c.position.coords * bcoords.z
                + d.position.coords * bcoords.w,
        )
    }

    /// Checks if the given barycentric coordinates designate a point inside of this cell.
    ///
    /// This only checks that all the coordinates are non-negative, so points on the boundary
    /// are inside. The coordinates are assumed to sum to one, which is the case if they were
    /// computed with [`GravityCell::to_barycentric`].
    #[inline]
    pub fn contains(&self, bcoords: &BarycentricCoordinates) -> bool {
        bcoords.iter().all(|b| *b >= 0.0)
    }

    /// Checks if the given barycentric coordinates are all greater than `-tolerance`.
    ///
    /// With a small positive tolerance, neighboring cells of a tessellation overlap slightly
    /// so that no point of their shared faces is missed because of rounding errors.
    #[inline]
    pub fn contains_with_tolerance(
        &self,
        bcoords: &BarycentricCoordinates,
        tolerance: Real,
    ) -> bool {
        bcoords.iter().all(|b| *b >= -tolerance)
    }

    /// Checks if `pt` is inside of this cell, boundary included.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.contains(&self.to_barycentric(pt))
    }

    /// Interpolates the gravity vector at the point with the given barycentric coordinates.
    ///
    /// The direction and the magnitude of the gravity are interpolated independently: the
    /// barycentric blend of the vertex directions is normalized, then scaled by the
    /// barycentric blend of the vertex force factors. This way, the strength of the field
    /// doesn't drop where the vertex directions diverge.
    ///
    /// If the blended direction vanishes because opposite directions cancel each other
    /// out, the zero vector is returned. See [`GravityCell::try_interpolate_gravity`] to detect
    /// this case.
    #[inline]
    pub fn interpolate_gravity(&self, bcoords: &BarycentricCoordinates) -> Vector<Real> {
        self.try_interpolate_gravity(bcoords).unwrap_or_else(Vector::zeros)
    }

    /// Interpolates the gravity vector at the point with the given barycentric coordinates.
    ///
    /// Returns `None` if the blended direction vanishes, i.e., if its norm is negligible
    /// compared to the weighted norms of the vertex directions.
    pub fn try_interpolate_gravity(
        &self,
        bcoords: &BarycentricCoordinates,
    ) -> Option<Vector<Real>> {
        let [a, b, c, d] = &self.vertices;
        let direction = a.direction * bcoords.x
            + b.direction * bcoords.y
            + c.direction * bcoords.z
            + d.direction * bcoords.w;
        let force_factor = a.force_factor * bcoords.x
            + b.force_factor * bcoords.y
            + c.force_factor * bcoords.z
            + d.force_factor * bcoords.w;

        // Relative to the input norms since directions are not normalized.
        let scale = a.direction.norm() * ComplexField::abs(bcoords.x)
            + b.direction.norm() * ComplexField::abs(bcoords.y)
            + c.direction.norm() * ComplexField::abs(bcoords.z)
            + d.direction.norm() * ComplexField::abs(bcoords.w);
        let norm = direction.norm();

        (norm > DEFAULT_EPSILON * scale).then(|| direction / norm * force_factor)
    }

    /// The interpolated gravity at `pt`, or `None` if `pt` is outside of this cell.
    pub fn gravity_at(&self, pt: &Point<Real>) -> Option<Vector<Real>> {
        let bcoords = self.to_barycentric(pt);
        self.contains(&bcoords).then(|| self.interpolate_gravity(&bcoords))
    }

    /// Returns the indices of the vertices of the `i`-th edge of this cell.
    ///
    /// See [`GravityCell::EDGES`] for the edge ordering.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 6`.
    #[inline]
    pub fn edge_ids(i: usize) -> (usize, usize) {
        assert!(
            i < Self::EDGES.len(),
            "Gravity cell edge index out of bounds (must be < 6)."
        );
        Self::EDGES[i]
    }

    /// Returns the endpoints of the `i`-th edge of this cell.
    #[inline]
    pub fn edge(&self, i: usize) -> (Point<Real>, Point<Real>) {
        let (a, b) = Self::edge_ids(i);
        (self.vertices[a].position, self.vertices[b].position)
    }

    /// Computes the signed volume of this cell.
    ///
    /// If it is positive, the vertex 3 is on the half-space pointed by the normal of the
    /// oriented triangle `(0, 1, 2)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        Self::signed_volume_of(&self.vertices)
    }

    /// Computes the volume of this cell.
    #[inline]
    pub fn volume(&self) -> Real {
        ComplexField::abs(self.signed_volume())
    }

    /// The centroid of this cell, i.e., the point with barycentric coordinates `(1/4, 1/4, 1/4, 1/4)`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        let [a, b, c, d] = &self.vertices;
        let sum = a.position.coords + b.position.coords + c.position.coords + d.position.coords;
        Point::from(sum * 0.25)
    }

    /// The smallest axis-aligned box `(mins, maxs)` containing this cell.
    pub fn bounding_box(&self) -> (Point<Real>, Point<Real>) {
        let mut mins = self.vertices[0].position;
        let mut maxs = mins;

        for v in &self.vertices[1..] {
            mins = mins.inf(&v.position);
            maxs = maxs.sup(&v.position);
        }

        (mins, maxs)
    }

    /// Draws the six edges of this cell.
    pub fn draw_debug_geometry(
        &self,
        debug: &mut impl DebugRenderer,
        depth_test: bool,
        color: DebugColor,
    ) {
        for i in 0..Self::EDGES.len() {
            let (a, b) = self.edge(i);
            debug.add_line(&a, &b, color, depth_test);
        }
    }
}

impl AbsDiffEq for GravityCell {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for GravityCell {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
