use std::time::SystemTime;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oorandom::Rand64;

use powerheap::PowerHeap;

fn random_u64s(len: usize) -> Vec<u64> {
  let mut rng = Rand64::new(
    SystemTime::now()
      .duration_since(SystemTime::UNIX_EPOCH)
      .unwrap()
      .as_nanos(),
  );
  (0..len)
    .map(|_| rng.rand_range(1..(len as u64 * 3 / 2 + 1)))
    .collect()
}

fn insert_random(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert_random_u64");
  for len in [512, 4096] {
    let vec = random_u64s(len);
    for power in 1..=4 {
      let mut heap = PowerHeap::<u64>::with_capacity(power, len).unwrap();
      group.bench_with_input(
        BenchmarkId::new(format!("fanout_{}", 1 << power), len),
        &vec,
        |b, vec| {
          b.iter(|| {
            for item in vec {
              heap.insert(*item);
            }
            heap.clear();
          })
        },
      );
    }
  }
  group.finish();
}

fn insert_then_drain(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert_then_drain_u64");
  for len in [512, 4096] {
    let vec = random_u64s(len);
    for power in 1..=4 {
      group.bench_with_input(
        BenchmarkId::new(format!("fanout_{}", 1 << power), len),
        &vec,
        |b, vec| {
          b.iter(|| {
            let mut heap = PowerHeap::<u64>::with_capacity(power, vec.len()).unwrap();
            heap.extend(vec.iter());
            while let Ok(item) = heap.pop_max() {
              black_box(item);
            }
          })
        },
      );
    }
  }
  group.finish();
}

fn heapify(c: &mut Criterion) {
  let mut group = c.benchmark_group("from_vec_u64");
  let vec = random_u64s(8192);
  for power in 1..=4 {
    group.bench_with_input(BenchmarkId::from_parameter(1 << power), &vec, |b, vec| {
      b.iter(|| black_box(PowerHeap::from_vec(power, vec.clone()).unwrap()))
    });
  }
  group.finish();
}

criterion_group!(benches, insert_random, insert_then_drain, heapify);
criterion_main!(benches);
