//! Shapes supported by tetragrav.

pub use self::gravity_cell::{GravityCell, GravityCellError};
pub use self::gravity_point::GravityPoint;

mod gravity_cell;
mod gravity_point;
