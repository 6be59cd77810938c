use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "std")]
use std::error::Error;

/// The ways in which a [`PowerHeap`](crate::PowerHeap) operation can fail. A failed operation
/// always leaves the heap exactly as it was before the call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PowerHeapError {
  /// The branching exponent passed at construction was negative, or so large that `2^power`
  /// does not fit in a `usize`.
  InvalidArgument {
    /// The rejected exponent.
    power: i32,
  },
  /// [`pop_max`](crate::PowerHeap::pop_max) or [`peek_max`](crate::PowerHeap::peek_max) was
  /// called on a heap containing no elements.
  EmptyContainer,
}

impl Display for PowerHeapError {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> Result {
    match self {
      PowerHeapError::InvalidArgument { power } => write!(
        f,
        "Invalid branching exponent {} (must be between 0 and {})!",
        power,
        usize::BITS - 1
      ),
      PowerHeapError::EmptyContainer => {
        write!(f, "Attempted to access the maximum of an empty heap!")
      }
    }
  }
}

#[cfg(feature = "std")]
impl Error for PowerHeapError {}
