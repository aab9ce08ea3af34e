use criterion::{criterion_group, criterion_main, Criterion};
use ordered_float::OrderedFloat;
use rand::Rng;

use giftwrap::algorithms::convex_hull;
use giftwrap::data::Point;

fn gen_points<R>(rng: &mut R, n: usize) -> Vec<Point<i32>>
where
  R: Rng + ?Sized,
{
  (0..n).map(|_| rng.gen()).collect()
}

fn gen_points_f64<R>(rng: &mut R, n: usize) -> Vec<Point<OrderedFloat<f64>>>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| Point::new([OrderedFloat(rng.gen::<f64>()), OrderedFloat(rng.gen::<f64>())]))
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::thread_rng();
  let p1 = gen_points(&mut rng, 100);
  let p2 = gen_points(&mut rng, 1_000);
  let p3 = gen_points(&mut rng, 10_000);
  // Float predicates pay for exactness; keep the set small.
  let p4 = gen_points_f64(&mut rng, 100);

  c.bench_function("convex_hull(1e2)", |b| b.iter(|| convex_hull(&p1)));
  c.bench_function("convex_hull(1e3)", |b| b.iter(|| convex_hull(&p2)));
  c.bench_function("convex_hull(1e4)", |b| b.iter(|| convex_hull(&p3)));
  c.bench_function("convex_hull_f64(1e2)", |b| b.iter(|| convex_hull(&p4)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
