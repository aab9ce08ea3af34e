use std::cmp::Ordering;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Inputs with fewer than three points are echoed back unchanged.
//    No input point is outside the returned hull.
//    Output is a deterministic function of the input sequence.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] (Jarvis march) algorithm for finding the smallest
/// convex polygon which contains all the given points. The walk starts at
/// the anchor (see [`anchor_index`]) and the vertices come back in
/// counter-clockwise order.
///
/// Degenerate inputs are not errors:
/// * Fewer than three points: the input is returned verbatim, in its
///   original order. No polygon is formed.
/// * Three or more points, all colinear: the two extreme points of the
///   line, anchor first.
/// * All points coincident: a single vertex.
///
/// When several input points are colinear on a hull edge, only the farthest
/// one becomes a vertex; edge-interior points are skipped. Consecutive
/// output vertices are never coincident.
///
/// # Time complexity
/// $O(n \cdot h)$ where h is the number of hull vertices. Quadratic when
/// every input point is extreme; accepted for the simplicity of the walk.
///
/// # Examples
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull;
/// # use giftwrap::data::Point;
/// let points = vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([2, 0]),
///   Point::new([1, 1]),
/// ];
/// assert_eq!(
///   convex_hull(&points),
///   vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([1, 1])])
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let n = pts.len();
  if n < 3 {
    return pts.to_vec();
  }
  // Cannot fail: the slice is non-empty.
  let anchor = match anchor_index(pts) {
    Ok(index) => index,
    Err(_) => return Vec::new(),
  };

  let mut hull: Vec<Point<T>> = Vec::with_capacity(n);
  let mut p = anchor;

  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;

    for r in 0..n {
      if r == p {
        continue;
      }
      let turn = pts[p].orientation(&pts[r], &pts[q]);
      // A colinear candidate only wins when strictly farther, so the final
      // vertex on a colinear edge is the outermost point and every exact
      // tie keeps the incumbent.
      if turn == Orientation::CounterClockWise
        || (turn == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[r], &pts[q]) == Ordering::Greater)
      {
        q = r;
      }
    }

    p = q;
    // Close on the anchor by value, not by index: an exact duplicate of
    // the anchor must end the walk as well, or a duplicated anchor point
    // would cycle forever.
    if pts[p].coincident(&pts[anchor]) {
      break;
    }
  }

  hull
}

/// Index of the anchor vertex: minimum x-coordinate, ties broken by
/// minimum y-coordinate, exact duplicates resolved to the first occurrence.
/// This makes the anchor a total-order function of the input, which the
/// walk needs for reproducible output.
///
/// # Errors
/// Returns `Error::EmptyInput` iff the slice is empty.
pub fn anchor_index<T>(pts: &[Point<T>]) -> Result<usize, Error>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
    })
    .map(|(index, _)| index)
    .ok_or(Error::EmptyInput)
}
