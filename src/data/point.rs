use ordered_float::{FloatCore, FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::orientation::Orientation;
use crate::HullScalar;

/// An immutable planar point. Equality is value equality; there is no
/// identity beyond the two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling, used by the benchmarks.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; 2]) -> Point<NotNan<T>>
  where
    T: FloatCore,
  {
    let [x, y] = array;
    Point::new([NotNan::new(x).unwrap(), NotNan::new(y).unwrap()])
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: HullScalar> Point<T> {
  /// Direction of the turn taken when walking `self` -> `q` -> `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare the distance from `self` to `p` against the distance from
  /// `self` to `q`. Exact; the square root is never taken.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  /// True if the two points have identical coordinates, decided by the
  /// exact distance predicate rather than coordinate equality.
  pub fn coincident(&self, other: &Point<T>) -> bool {
    self.cmp_distance_to(other, self) == Ordering::Equal
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    let [x, y] = point.array;
    Ok(Point {
      array: [NotNan::try_from(x)?, NotNan::try_from(y)?],
    })
  }
}
