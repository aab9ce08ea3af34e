// Proptest strategies for points at the three precisions the property
// tests care about: huge exact integers, tiny integers (lots of exact
// collisions and colinear triples), and floats.
use num_bigint::BigInt;
use ordered_float::NotNan;
use proptest::prelude::*;

use crate::data::Point;

pub fn any_point_i8() -> impl Strategy<Value = Point<i8>> {
  (any::<i8>(), any::<i8>()).prop_map(Point::from)
}

pub fn any_point_big() -> impl Strategy<Value = Point<BigInt>> {
  (any::<i64>(), any::<i64>())
    .prop_map(|(x, y)| Point::new([BigInt::from(x), BigInt::from(y)]))
}

pub fn any_point_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  (-1.0e9..1.0e9_f64, -1.0e9..1.0e9_f64).prop_map(|(x, y)| Point::new_nn([x, y]))
}
