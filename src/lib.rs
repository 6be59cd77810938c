//! A max-priority queue stored as a complete heap in which every internal node has `2^k`
//! children, for a branching exponent `k` chosen at construction time.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use crate::errors::*;
pub use crate::heap::heap_iterators::*;
pub use crate::heap::PowerHeap;

#[macro_use]
mod macros;
mod errors;
mod heap;
#[doc(hidden)]
pub mod utils;
