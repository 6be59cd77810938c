#![no_main]
use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary;

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
struct Target {
    ctor: Constructor,
    ops: Vec<Op>,
    dtor: Destructor,
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Constructor {
    New(i8),
    FromVec(i8, Vec<i16>),
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Op {
    Insert(i16),
    PopMax,
    PeekMax,
    Extend(Vec<i16>),
    Clear,
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Destructor {
    LetDrop,
    IntoSortedVec,
    DrainSorted(usize),
}

use powerheap::utils::parent_index;
use powerheap::{PowerHeap, PowerHeapError};

// Keeps the model sorted ascending, so its maximum is always the last element.
fn run(ctor: Constructor, ops: Vec<Op>) -> Option<(PowerHeap<i16>, Vec<i16>)> {
    let (mut heap, mut model) = match ctor {
        Constructor::New(power) => match PowerHeap::<i16>::new(i32::from(power)) {
            Ok(heap) => (heap, Vec::new()),
            Err(err) => {
                assert!(power < 0 || i32::from(power) >= usize::BITS as i32);
                assert_eq!(err, PowerHeapError::InvalidArgument { power: i32::from(power) });
                return None;
            }
        },
        Constructor::FromVec(power, v) => {
            // Exponents are capped here so heapifying stays cheap.
            let mut model = v.clone();
            model.sort();
            (PowerHeap::from_vec(i32::from(power.rem_euclid(8)), v).ok()?, model)
        }
    };

    for op in ops {
        match op {
            Op::Insert(x) => {
                heap.insert(x);
                let at = model.partition_point(|&y| y <= x);
                model.insert(at, x);
            }
            Op::PopMax => assert_eq!(heap.pop_max().ok(), model.pop()),
            Op::PeekMax => assert_eq!(heap.peek_max().ok(), model.last()),
            Op::Extend(xs) => {
                heap.extend(xs.iter());
                model.extend(xs);
                model.sort();
            }
            Op::Clear => {
                heap.clear();
                model.clear();
            }
        }
        assert_eq!(heap.len(), model.len());
        let data = heap.as_slice();
        for i in 1..data.len() {
            assert!(data[parent_index(i, heap.power())] >= data[i]);
        }
    }

    Some((heap, model))
}

fuzz_target!(|target: Target| {
    if let Some((mut heap, mut model)) = run(target.ctor, target.ops) {
        match target.dtor {
            Destructor::LetDrop => drop(heap),
            Destructor::IntoSortedVec => assert_eq!(heap.into_sorted_vec(), model),
            Destructor::DrainSorted(take) => {
                let taken: Vec<i16> = heap.drain_sorted().take(take).collect();
                model.reverse();
                model.truncate(take);
                assert_eq!(taken, model);
                assert!(heap.is_empty());
            }
        }
    }
});
