// Builds a binary heap and a 4-ary heap, feeds both the same values and prints the maxima as
// they come back out. Run with `--features tracing` to also see the construction events.

use powerheap::{PowerHeap, PowerHeapError};

fn drain_and_print(name: &str, heap: &mut PowerHeap<i32>) -> Result<(), PowerHeapError> {
  while !heap.is_empty() {
    println!("Max value ({}): {}", name, heap.pop_max()?);
  }
  Ok(())
}

fn main() -> Result<(), PowerHeapError> {
  #[cfg(feature = "tracing")]
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
    )
    .init();

  // Binary heap.
  let mut heap1 = PowerHeap::new(1)?;
  // Each parent has 4 children.
  let mut heap2 = PowerHeap::new(2)?;

  for heap in [&mut heap1, &mut heap2] {
    heap.insert(10);
    heap.insert(20);
    heap.insert(5);
  }

  // Both print 20, 10, 5.
  drain_and_print("heap1", &mut heap1)?;
  drain_and_print("heap2", &mut heap2)?;

  // Popping from a drained heap is an ordinary error, not a panic.
  match heap1.pop_max() {
    Err(err) => println!("heap1: {}", err),
    Ok(value) => println!("heap1 unexpectedly returned {}", value),
  }
  match PowerHeap::<i32>::new(-1) {
    Err(err) => println!("{}", err),
    Ok(heap) => println!("unexpectedly built {:?}", heap),
  }
  Ok(())
}
