use crate::PowerHeapError;
use core::ops::Range;

/// Checks that `power` is usable as a branching exponent, i.e. that it is non-negative and that
/// `2^power` fits in a `usize`, and returns it as a shift amount.
#[inline]
pub fn validate_power(power: i32) -> Result<u32, PowerHeapError> {
  match u32::try_from(power) {
    Ok(shift) if shift < usize::BITS => Ok(shift),
    _ => Err(PowerHeapError::InvalidArgument { power }),
  }
}

/// Returns the number of children each node has for a given (already validated) exponent.
#[inline(always)]
pub const fn fanout_of(power: u32) -> usize {
  1 << power
}

/// Returns the index of the parent of the node at `index`. Equivalent to
/// `(index - 1) / 2^power` with floor division. `index` must not be the root.
#[inline(always)]
pub fn parent_index(index: usize, power: u32) -> usize {
  debug_assert!(index > 0);
  (index - 1) >> power
}

/// Returns the range of indices holding the children of the node at `parent`, clamped to `len`.
/// The range is empty if the node is a leaf.
#[inline(always)]
pub fn child_indices(parent: usize, power: u32, len: usize) -> Range<usize> {
  let fanout = fanout_of(power);
  // Saturating so that enormous fan-outs simply run off the end of the heap.
  let first = parent.saturating_mul(fanout).saturating_add(1);
  first.min(len)..first.saturating_add(fanout).min(len)
}
