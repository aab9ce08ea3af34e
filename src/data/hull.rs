use claims::debug_assert_ok;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// A convex polygon boundary: hull vertices in counter-clockwise order,
/// starting at the anchor (leftmost, lowest-y) vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T>(Vec<Point<T>>);

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// Compute the hull of a point set and validate it into a polygon.
  ///
  /// Unlike [`convex_hull`](crate::algorithms::convex_hull), which echoes
  /// degenerate inputs back, this constructor insists on a real polygon.
  ///
  /// # Errors
  /// Returns `Error::InsufficientVertices` when the point set has fewer
  /// than three distinct extreme points (all-collinear sets included).
  pub fn compute(pts: &[Point<T>]) -> Result<Hull<T>, Error> {
    Hull::try_new(crate::algorithms::convex_hull(pts))
  }

  pub fn try_new(vertices: Vec<Point<T>>) -> Result<Hull<T>, Error> {
    let hull = Hull(vertices);
    hull.validate()?;
    Ok(hull)
  }

  /// $O(1)$ Assume that a vertex sequence is a convex CCW polygon.
  ///
  /// # Safety
  /// The vertices have to be strictly convex in counter-clockwise order:
  /// no concave, colinear, or repeated vertices.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull(vertices);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(h)$ Check that every cyclic vertex triple turns counter-clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      let p = &self.0[i];
      let q = &self.0[(i + 1) % n];
      let r = &self.0[(i + 2) % n];
      if p.orientation(q, r) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(h)$ Locate a point relative to the closed hull polygon.
  ///
  /// A point strictly right of any directed edge is outside; a point on an
  /// edge (and not outside) is on the boundary; otherwise it is inside.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let n = self.0.len();
    let mut boundary = false;
    for i in 0..n {
      let edge_start = &self.0[i];
      let edge_end = &self.0[(i + 1) % n];
      match edge_start.orientation(edge_end, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.0
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.0.iter()
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::assert_ok;

  fn unit_square() -> Hull<i64> {
    Hull::try_new(vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([2, 2]),
      Point::new([0, 2]),
    ])
    .unwrap()
  }

  #[test]
  fn validate_accepts_ccw_polygons() {
    assert_ok!(unit_square().validate());
  }

  #[test]
  fn validate_rejects_clockwise_order() {
    let cw = Hull::try_new(vec![
      Point::new([0_i64, 0]),
      Point::new([0, 2]),
      Point::new([2, 2]),
      Point::new([2, 0]),
    ]);
    assert_eq!(cw.err(), Some(Error::ConvexViolation));
  }

  #[test]
  fn validate_rejects_colinear_vertices() {
    let flat = Hull::try_new(vec![
      Point::new([0_i64, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([1, 1]),
    ]);
    assert_eq!(flat.err(), Some(Error::ConvexViolation));
  }

  #[test]
  fn validate_rejects_degenerate_lengths() {
    let two = Hull::try_new(vec![Point::new([0_i64, 0]), Point::new([1, 1])]);
    assert_eq!(two.err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn locate_classifies_all_three_regions() {
    let hull = unit_square();
    assert_eq!(hull.locate(&Point::new([1, 1])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([1, 0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([3, 1])), PointLocation::Outside);
    // On an edge's supporting line but beyond the segment.
    assert_eq!(hull.locate(&Point::new([3, 0])), PointLocation::Outside);
  }

  #[test]
  fn compute_rejects_collinear_sets() {
    let pts: Vec<Point<i64>> = (0..5).map(|i| Point::new([i, i])).collect();
    assert_eq!(Hull::compute(&pts).err(), Some(Error::InsufficientVertices));
  }
}
