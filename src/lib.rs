#![deny(clippy::cast_lossless)]
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod loader;
mod orientation;

pub use orientation::Orientation;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Anchor selection was invoked on an empty point sequence.
  EmptyInput,
  InsufficientVertices,
  /// Two consecutive hull edges are colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptyInput => write!(f, "Empty input"),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Scalars the hull algorithm can run on.
///
/// Both predicates are exact: the answer is the one infinite-precision
/// arithmetic would give, for every representable input. The gift-wrapping
/// walk makes no other numeric decisions.
pub trait HullScalar: std::fmt::Debug + TotalOrd + PartialOrd + Clone {
  /// Compare the distance from `p` to `q` against the distance from `p` to `r`.
  ///
  /// Only the relative order is observable; the square root is never taken.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the cross product of `(q-p)` and `(r-p)`.
  ///
  /// `Greater` means the triple `(p, q, r)` turns counter-clockwise, `Less`
  /// clockwise, `Equal` that the three points are colinear. Defined for any
  /// three points, including coincident ones.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl HullScalar for $ty {
      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // |a-b| as an unsigned wide value. Exact over the full signed range.
        fn mag(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let qx = mag(p[0], q[0]);
        let qy = mag(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (qx * qx).overflowing_add(qy * qy);
        let rx = mag(p[0], r[0]);
        let ry = mag(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (rx * rx).overflowing_add(ry * ry);
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          // Each sum wraps at most once, so wrapped values still compare
          // correctly when both overflow.
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // (|a-b|, a < b): signed difference split into magnitude and sign.
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        // cross = ux*vy - uy*vx where u = q-p and v = r-p.
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let lhs_neg = ux_neg != vy_neg && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let rhs_neg = uy_neg != vx_neg && uy != 0 && vx != 0;
        match (lhs_neg, rhs_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &p[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &p[0]);
          lhs.cmp(&rhs)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          HullScalar::cmp_dist(
            &[float_to_rational(p[0].into_inner()), float_to_rational(p[1].into_inner())],
            &[float_to_rational(q[0].into_inner()), float_to_rational(q[1].into_inner())],
            &[float_to_rational(r[0].into_inner()), float_to_rational(r[1].into_inner())],
          )
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0].into_inner() as f64, p[1].into_inner() as f64],
            [q[0].into_inner() as f64, q[1].into_inner() as f64],
            [r[0].into_inner() as f64, r[1].into_inner() as f64],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          HullScalar::cmp_dist(
            &[float_to_rational(p[0]), float_to_rational(p[1])],
            &[float_to_rational(q[0]), float_to_rational(q[1])],
            &[float_to_rational(r[0]), float_to_rational(r[1])],
          )
        }

        // `orient2d` uses adaptive-precision arithmetic: the sign is exact
        // even when the naive cross product would round to zero.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0] as f64, p[1] as f64],
            [q[0] as f64, q[1] as f64],
            [r[0] as f64, r[1] as f64],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt);
arbitrary_precision!(num_rational::BigRational);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);
floating_precision!(f32);
floating_precision!(f64);

fn float_to_rational(f: impl num::traits::float::FloatCore) -> num::BigRational {
  num::BigRational::from_float(f).expect("cannot convert NaN or infinite to exact precision number")
}
