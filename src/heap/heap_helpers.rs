use core::mem::ManuallyDrop;
use core::ops::Range;

/// [`PowerHeapHole`] represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `PowerHeapHole` will restore the slice by filling the hole
/// position with the value that was originally removed.
pub(crate) struct PowerHeapHole<'a, T: 'a> {
  pub(crate) data: &'a mut [T],
  pub(crate) element: ManuallyDrop<T>,
  pub(crate) position: usize,
}

impl<'a, T> PowerHeapHole<'a, T> {
  /// Create a new `PowerHeapHole` at index `position`.
  /// Unsafe because position must be within the data slice.
  #[inline(always)]
  pub(crate) unsafe fn new(data: &'a mut [T], position: usize) -> Self {
    debug_assert!(position < data.len());
    // Safe: position should be inside the slice.
    let element = data.as_ptr().add(position).read();
    PowerHeapHole {
      data,
      element: ManuallyDrop::new(element),
      position,
    }
  }

  #[inline(always)]
  pub(crate) const fn pos(&self) -> usize {
    self.position
  }

  /// Returns a reference to the element removed.
  #[inline(always)]
  pub(crate) fn element(&self) -> &T {
    &self.element
  }

  /// Returns a reference to the element at `index`.
  /// Unsafe because `index` must be within the data slice and not equal to `position`.
  #[inline(always)]
  pub(crate) unsafe fn get(&self, index: usize) -> &T {
    debug_assert!(index != self.position);
    debug_assert!(index < self.data.len());
    self.data.get_unchecked(index)
  }

  /// Returns the index of the leftmost greatest element among `children`.
  /// Unsafe because `children` must be a non-empty range within the data slice that does not
  /// contain `position`.
  #[inline]
  pub(crate) unsafe fn greatest_of(&self, children: Range<usize>) -> usize
  where T: Ord {
    debug_assert!(!children.is_empty());
    let mut greatest = children.start;
    for child in children.start + 1..children.end {
      // Strictly greater, so ties keep the earlier child.
      if self.get(child) > self.get(greatest) {
        greatest = child;
      }
    }
    greatest
  }

  /// Move the `PowerHeapHole` to a new location.
  /// Unsafe because index must be within the data slice and not equal to position.
  #[inline]
  pub(crate) unsafe fn move_to(&mut self, index: usize) {
    debug_assert!(index != self.position);
    debug_assert!(index < self.data.len());
    let index_ptr = self.data.as_ptr().add(index);
    let hole_ptr = self.data.as_mut_ptr().add(self.position);
    index_ptr.copy_to_nonoverlapping(hole_ptr, 1);
    self.position = index;
  }
}

impl<T> Drop for PowerHeapHole<'_, T> {
  #[inline(always)]
  fn drop(&mut self) {
    // fill the hole again
    unsafe {
      let element_ptr = &*self.element as *const T;
      let hole_ptr = self.data.as_mut_ptr().add(self.position);
      element_ptr.copy_to_nonoverlapping(hole_ptr, 1);
    }
  }
}
