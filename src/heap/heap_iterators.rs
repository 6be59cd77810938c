use super::PowerHeap;
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

/// A sorted "consuming" iterator over the elements of a [`PowerHeap`], greatest first.
///
/// This struct is created by the [`into_iter_sorted`] method on [`PowerHeap`]. See its
/// documentation for more.
///
/// [`into_iter_sorted`]: struct.PowerHeap.html#method.into_iter_sorted
/// [`PowerHeap`]: struct.PowerHeap.html
#[derive(Clone)]
pub struct PowerHeapIntoIterSorted<T> {
  pub(crate) inner: PowerHeap<T>,
}

/// A sorted "draining" iterator over the elements of a [`PowerHeap`], greatest first.
///
/// This struct is created by the [`drain_sorted`] method on [`PowerHeap`]. See its
/// documentation for more.
///
/// [`drain_sorted`]: struct.PowerHeap.html#method.drain_sorted
/// [`PowerHeap`]: struct.PowerHeap.html
pub struct PowerHeapDrainSorted<'a, T: Ord> {
  pub(crate) inner: &'a mut PowerHeap<T>,
}

impl<T: Ord> Iterator for PowerHeapIntoIterSorted<T> {
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.inner.pop_max().ok()
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let exact = self.inner.len();
    (exact, Some(exact))
  }

  #[inline(always)]
  fn count(self) -> usize {
    self.inner.len()
  }
}

impl<T: Ord> ExactSizeIterator for PowerHeapIntoIterSorted<T> {}
impl<T: Ord> FusedIterator for PowerHeapIntoIterSorted<T> {}

impl<T: Debug> Debug for PowerHeapIntoIterSorted<T> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_tuple("PowerHeapIntoIterSorted")
      .field(&self.inner.as_slice())
      .finish()
  }
}

impl<T: Ord> Iterator for PowerHeapDrainSorted<'_, T> {
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.inner.pop_max().ok()
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let exact = self.inner.len();
    (exact, Some(exact))
  }
}

impl<T: Ord> ExactSizeIterator for PowerHeapDrainSorted<'_, T> {}
impl<T: Ord> FusedIterator for PowerHeapDrainSorted<'_, T> {}

impl<T: Ord + Debug> Debug for PowerHeapDrainSorted<'_, T> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_tuple("PowerHeapDrainSorted")
      .field(&self.inner.as_slice())
      .finish()
  }
}

impl<'a, T: Ord> Drop for PowerHeapDrainSorted<'a, T> {
  /// Removes heap elements in heap order.
  #[inline]
  fn drop(&mut self) {
    // If dropping an item panics, the guard keeps draining so nothing is left behind.
    struct DropGuard<'r, 'a, T: Ord>(&'r mut PowerHeapDrainSorted<'a, T>);
    impl<'r, 'a, T: Ord> Drop for DropGuard<'r, 'a, T> {
      #[inline(always)]
      fn drop(&mut self) {
        while self.0.inner.pop_max().is_ok() {}
      }
    }
    while let Ok(item) = self.inner.pop_max() {
      let guard = DropGuard(self);
      drop(item);
      core::mem::forget(guard);
    }
  }
}
