//! Definition of a gravity field sample.

use crate::math::{Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};

/// A sample of a gravity field at a given position.
///
/// The direction does not have to be normalized: only its orientation matters once it is
/// interpolated by a [`GravityCell`](crate::shape::GravityCell). The strength of the field
/// is given by `force_factor` instead.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityPoint {
    /// Where this sample was taken.
    pub position: Point<Real>,
    /// The direction of the gravity at `position`.
    pub direction: Vector<Real>,
    /// The magnitude of the gravity at `position`.
    pub force_factor: Real,
}

impl GravityPoint {
    /// Creates a new gravity sample.
    #[inline]
    pub fn new(position: Point<Real>, direction: Vector<Real>, force_factor: Real) -> Self {
        GravityPoint {
            position,
            direction,
            force_factor,
        }
    }

    /// The gravity vector of this sample: its normalized direction scaled by its force factor.
    ///
    /// Returns the zero vector if the direction is zero.
    #[inline]
    pub fn gravity(&self) -> Vector<Real> {
        let norm = self.direction.norm();

        if norm > 0.0 {
            self.direction / norm * self.force_factor
        } else {
            Vector::zeros()
        }
    }
}

impl AbsDiffEq for GravityPoint {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.direction.abs_diff_eq(&other.direction, epsilon)
            && self.force_factor.abs_diff_eq(&other.force_factor, epsilon)
    }
}

impl RelativeEq for GravityPoint {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.position
            .relative_eq(&other.position, epsilon, max_relative)
            && self
                .direction
                .relative_eq(&other.direction, epsilon, max_relative)
            && self
                .force_factor
                .relative_eq(&other.force_factor, epsilon, max_relative)
    }
}
